use storefront_core::db::open_db_in_memory;
use storefront_core::{
    CustomerChanges, CustomerListQuery, CustomerRepository, NewCustomer, RepoError,
    SqliteCustomerRepository,
};

fn draft(name: &str, email: &str) -> NewCustomer {
    NewCustomer {
        name: name.to_string(),
        email: email.to_string(),
        phone: None,
        address: None,
    }
}

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::new(&conn);

    let created = repo
        .create(&NewCustomer {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: Some("555-0101".to_string()),
            address: Some("12 Analytical St".to_string()),
        })
        .unwrap();

    assert_eq!(created.id, 1);
    assert!(created.created_at_ms > 0);

    let loaded = repo.get(created.id).unwrap().unwrap();
    assert_eq!(loaded.name, "Ada Lovelace");
    assert_eq!(loaded.email, "ada@example.com");
    assert_eq!(loaded.phone.as_deref(), Some("555-0101"));
    assert_eq!(loaded.address.as_deref(), Some("12 Analytical St"));
    assert_eq!(loaded, created);
}

#[test]
fn get_missing_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::new(&conn);

    assert!(repo.get(999).unwrap().is_none());
}

#[test]
fn find_by_email_matches_exactly() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::new(&conn);

    repo.create(&draft("Ada Lovelace", "ada@example.com")).unwrap();

    let found = repo.find_by_email("ada@example.com").unwrap().unwrap();
    assert_eq!(found.name, "Ada Lovelace");
    assert!(repo.find_by_email("grace@example.com").unwrap().is_none());
}

#[test]
fn duplicate_email_is_a_conflict_not_a_db_fault() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::new(&conn);

    repo.create(&draft("Ada Lovelace", "ada@example.com")).unwrap();
    let err = repo
        .create(&draft("Ada Byron", "ada@example.com"))
        .unwrap_err();
    assert!(matches!(err, RepoError::Conflict { .. }));
}

#[test]
fn update_changes_only_supplied_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::new(&conn);

    let created = repo
        .create(&NewCustomer {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: Some("555-0101".to_string()),
            address: None,
        })
        .unwrap();

    let updated = repo
        .update(
            created.id,
            &CustomerChanges {
                name: Some("Ada King".to_string()),
                ..CustomerChanges::default()
            },
        )
        .unwrap();

    assert_eq!(updated.name, "Ada King");
    assert_eq!(updated.email, "ada@example.com");
    assert_eq!(updated.phone.as_deref(), Some("555-0101"));
}

#[test]
fn update_missing_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::new(&conn);

    let err = repo
        .update(
            42,
            &CustomerChanges {
                name: Some("Nobody".to_string()),
                ..CustomerChanges::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(42)));
}

#[test]
fn delete_is_idempotent_via_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::new(&conn);

    let created = repo.create(&draft("Ada Lovelace", "ada@example.com")).unwrap();

    repo.delete(created.id).unwrap();
    let err = repo.delete(created.id).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == created.id));
    assert!(repo.get(created.id).unwrap().is_none());
}

#[test]
fn list_is_ordered_filtered_and_paginated() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::new(&conn);

    repo.create(&draft("Ada Lovelace", "ada@example.com")).unwrap();
    repo.create(&draft("Grace Hopper", "grace@example.com")).unwrap();
    repo.create(&draft("Adam Smith", "adam@example.com")).unwrap();

    let all = repo.list(&CustomerListQuery::default()).unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.windows(2).all(|pair| pair[0].id < pair[1].id));

    let ada_only = repo
        .list(&CustomerListQuery {
            name_contains: Some("ada".to_string()),
            ..CustomerListQuery::default()
        })
        .unwrap();
    assert_eq!(ada_only.len(), 2);

    let page = repo
        .list(&CustomerListQuery {
            limit: Some(1),
            offset: 1,
            ..CustomerListQuery::default()
        })
        .unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].email, "grace@example.com");
}

#[test]
fn list_escapes_like_wildcards_in_filter() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::new(&conn);

    repo.create(&draft("100% Cotton Co", "cotton@example.com")).unwrap();
    repo.create(&draft("Percenter", "percent@example.com")).unwrap();

    let matched = repo
        .list(&CustomerListQuery {
            name_contains: Some("100%".to_string()),
            ..CustomerListQuery::default()
        })
        .unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].email, "cotton@example.com");
}

#[test]
fn empty_list_is_a_valid_result() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::new(&conn);

    let all = repo.list(&CustomerListQuery::default()).unwrap();
    assert!(all.is_empty());
    assert_eq!(repo.count().unwrap(), 0);
}

#[test]
fn count_tracks_inserts_and_deletes() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::new(&conn);

    let first = repo.create(&draft("Ada Lovelace", "ada@example.com")).unwrap();
    repo.create(&draft("Grace Hopper", "grace@example.com")).unwrap();
    assert_eq!(repo.count().unwrap(), 2);

    repo.delete(first.id).unwrap();
    assert_eq!(repo.count().unwrap(), 1);
}
