use serde_json::json;
use storefront_core::{CustomerCreate, CustomerUpdate, ProductCreate, ProductUpdate};

#[test]
fn valid_customer_payload_produces_exactly_the_declared_fields() {
    let payload = json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "phone": "555-0101",
    });

    let dto = CustomerCreate::validate(&payload).unwrap();
    assert_eq!(
        dto,
        CustomerCreate {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: Some("555-0101".to_string()),
            address: None,
        }
    );
}

#[test]
fn every_violated_constraint_is_reported_not_just_the_first() {
    let payload = json!({
        "name": "ab",
        "email": "not-an-email",
        "phone": 12345,
        "favorite_color": "teal",
    });

    let err = CustomerCreate::validate(&payload).unwrap_err();
    let fields: Vec<&str> = err.violations.iter().map(|v| v.field.as_str()).collect();
    assert_eq!(err.violations.len(), 4);
    assert!(fields.contains(&"name"));
    assert!(fields.contains(&"email"));
    assert!(fields.contains(&"phone"));
    assert!(fields.contains(&"favorite_color"));
}

#[test]
fn missing_required_fields_are_all_reported() {
    let err = CustomerCreate::validate(&json!({})).unwrap_err();
    let fields: Vec<&str> = err.violations.iter().map(|v| v.field.as_str()).collect();
    assert_eq!(err.violations.len(), 2);
    assert!(fields.contains(&"name"));
    assert!(fields.contains(&"email"));
}

#[test]
fn non_object_payload_is_rejected_at_the_root() {
    let err = CustomerCreate::validate(&json!([1, 2, 3])).unwrap_err();
    assert_eq!(err.violations.len(), 1);
    assert_eq!(err.violations[0].field, "$");
}

#[test]
fn explicit_null_reads_as_absent_for_optional_fields() {
    let payload = json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "phone": null,
        "address": null,
    });

    let dto = CustomerCreate::validate(&payload).unwrap();
    assert!(dto.phone.is_none());
    assert!(dto.address.is_none());
}

#[test]
fn update_payload_without_any_field_is_rejected() {
    let err = CustomerUpdate::validate(&json!({})).unwrap_err();
    assert_eq!(err.violations.len(), 1);
    assert_eq!(err.violations[0].field, "$");

    let err = ProductUpdate::validate(&json!({})).unwrap_err();
    assert_eq!(err.violations[0].field, "$");
}

#[test]
fn update_accepts_a_single_field() {
    let update = CustomerUpdate::validate(&json!({ "name": "Ada King" })).unwrap();
    assert_eq!(update.name.as_deref(), Some("Ada King"));
    assert!(update.email.is_none());
}

#[test]
fn update_rejects_short_name_like_create_does() {
    let err = CustomerUpdate::validate(&json!({ "name": "ab" })).unwrap_err();
    assert_eq!(err.violations.len(), 1);
    assert_eq!(err.violations[0].field, "name");
}

#[test]
fn product_type_mismatches_are_reported_per_field() {
    let payload = json!({
        "name": "Desk Lamp",
        "price": "twenty",
        "stock": 1.5,
    });

    let err = ProductCreate::validate(&payload).unwrap_err();
    let fields: Vec<&str> = err.violations.iter().map(|v| v.field.as_str()).collect();
    assert_eq!(err.violations.len(), 2);
    assert!(fields.contains(&"price"));
    assert!(fields.contains(&"stock"));
}

#[test]
fn product_stock_defaults_to_zero_when_omitted() {
    let dto = ProductCreate::validate(&json!({
        "name": "Desk Lamp",
        "price": 25.0,
    }))
    .unwrap();
    assert_eq!(dto.stock, 0);
}

#[test]
fn negative_price_passes_the_schema_boundary() {
    // Sign is a business rule, checked by the service layer; the schema
    // only guarantees a finite number.
    let dto = ProductCreate::validate(&json!({
        "name": "Desk Lamp",
        "price": -5,
    }))
    .unwrap();
    assert_eq!(dto.price, -5.0);
}

#[test]
fn unknown_fields_are_flagged_on_update_payloads() {
    let err = ProductUpdate::validate(&json!({
        "price": 10.0,
        "id": 3,
    }))
    .unwrap_err();
    assert_eq!(err.violations.len(), 1);
    assert_eq!(err.violations[0].field, "id");
    assert_eq!(err.violations[0].message, "unknown field");
}
