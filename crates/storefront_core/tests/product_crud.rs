use storefront_core::db::open_db_in_memory;
use storefront_core::{
    NewProduct, ProductChanges, ProductListQuery, ProductRepository, RepoError,
    SqliteProductRepository,
};

fn draft(name: &str, price: f64) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: None,
        price,
        stock: 0,
    }
}

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductRepository::new(&conn);

    let created = repo
        .create(&NewProduct {
            name: "Mechanical Keyboard".to_string(),
            description: Some("Tenkeyless, brown switches".to_string()),
            price: 89.90,
            stock: 12,
        })
        .unwrap();

    assert_eq!(created.id, 1);
    assert!(created.created_at_ms > 0);

    let loaded = repo.get(created.id).unwrap().unwrap();
    assert_eq!(loaded.name, "Mechanical Keyboard");
    assert_eq!(loaded.description.as_deref(), Some("Tenkeyless, brown switches"));
    assert_eq!(loaded.price, 89.90);
    assert_eq!(loaded.stock, 12);
    assert_eq!(loaded, created);
}

#[test]
fn negative_stock_is_rejected_by_storage_constraint() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductRepository::new(&conn);

    let err = repo
        .create(&NewProduct {
            name: "Broken Draft".to_string(),
            description: None,
            price: 1.0,
            stock: -3,
        })
        .unwrap_err();
    assert!(matches!(err, RepoError::Conflict { .. }));
}

#[test]
fn update_changes_only_supplied_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductRepository::new(&conn);

    let created = repo.create(&draft("Desk Lamp", 25.0)).unwrap();

    let updated = repo
        .update(
            created.id,
            &ProductChanges {
                price: Some(19.5),
                stock: Some(4),
                ..ProductChanges::default()
            },
        )
        .unwrap();

    assert_eq!(updated.name, "Desk Lamp");
    assert_eq!(updated.price, 19.5);
    assert_eq!(updated.stock, 4);
}

#[test]
fn update_missing_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductRepository::new(&conn);

    let err = repo
        .update(
            7,
            &ProductChanges {
                price: Some(1.0),
                ..ProductChanges::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(7)));
}

#[test]
fn delete_is_idempotent_via_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductRepository::new(&conn);

    let created = repo.create(&draft("Desk Lamp", 25.0)).unwrap();

    repo.delete(created.id).unwrap();
    let err = repo.delete(created.id).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == created.id));
}

#[test]
fn list_filters_by_name_and_price_range() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductRepository::new(&conn);

    repo.create(&draft("Desk Lamp", 25.0)).unwrap();
    repo.create(&draft("Floor Lamp", 60.0)).unwrap();
    repo.create(&draft("Office Chair", 120.0)).unwrap();

    let lamps = repo
        .list(&ProductListQuery {
            name_contains: Some("lamp".to_string()),
            ..ProductListQuery::default()
        })
        .unwrap();
    assert_eq!(lamps.len(), 2);

    let mid_range = repo
        .list(&ProductListQuery {
            min_price: Some(30.0),
            max_price: Some(100.0),
            ..ProductListQuery::default()
        })
        .unwrap();
    assert_eq!(mid_range.len(), 1);
    assert_eq!(mid_range[0].name, "Floor Lamp");
}

#[test]
fn list_pagination_is_stable_and_restartable() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductRepository::new(&conn);

    for n in 1..=5 {
        repo.create(&draft(&format!("Widget {n:02}"), f64::from(n))).unwrap();
    }

    let query = ProductListQuery {
        limit: Some(2),
        offset: 2,
        ..ProductListQuery::default()
    };
    let first_pass = repo.list(&query).unwrap();
    let second_pass = repo.list(&query).unwrap();

    assert_eq!(first_pass.len(), 2);
    assert_eq!(first_pass[0].name, "Widget 03");
    assert_eq!(first_pass[1].name, "Widget 04");
    assert_eq!(first_pass, second_pass);
}
