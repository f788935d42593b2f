//! Customer repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `customers` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `delete` of an absent id reports `NotFound`, never a fault; callers
//!   may treat delete as idempotent.
//! - List results are ordered by `id ASC` and restartable.

use crate::model::customer::{Customer, CustomerChanges, CustomerId, NewCustomer};
use crate::repo::{map_write_error, RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const CUSTOMER_SELECT_SQL: &str = "SELECT
    id,
    name,
    email,
    phone,
    address,
    created_at_ms
FROM customers";

/// Filter and pagination options for listing customers.
#[derive(Debug, Clone, Default)]
pub struct CustomerListQuery {
    /// Case-insensitive substring match on `name`.
    pub name_contains: Option<String>,
    pub limit: Option<u32>,
    pub offset: u32,
}

/// Repository interface for customer CRUD operations.
pub trait CustomerRepository {
    fn create(&self, draft: &NewCustomer) -> RepoResult<Customer>;
    fn get(&self, id: CustomerId) -> RepoResult<Option<Customer>>;
    fn find_by_email(&self, email: &str) -> RepoResult<Option<Customer>>;
    fn list(&self, query: &CustomerListQuery) -> RepoResult<Vec<Customer>>;
    fn update(&self, id: CustomerId, changes: &CustomerChanges) -> RepoResult<Customer>;
    fn delete(&self, id: CustomerId) -> RepoResult<()>;
    fn count(&self) -> RepoResult<u64>;
}

/// SQLite-backed customer repository.
pub struct SqliteCustomerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCustomerRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn fetch(&self, id: CustomerId) -> RepoResult<Option<Customer>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CUSTOMER_SELECT_SQL} WHERE id = ?1;"))?;
        let customer = stmt
            .query_row(params![id], parse_customer_row)
            .optional()?;
        Ok(customer)
    }
}

impl CustomerRepository for SqliteCustomerRepository<'_> {
    fn create(&self, draft: &NewCustomer) -> RepoResult<Customer> {
        self.conn
            .execute(
                "INSERT INTO customers (name, email, phone, address)
                 VALUES (?1, ?2, ?3, ?4);",
                params![
                    draft.name.as_str(),
                    draft.email.as_str(),
                    draft.phone.as_deref(),
                    draft.address.as_deref(),
                ],
            )
            .map_err(|err| map_write_error(err, "customers.email unique"))?;

        let id = self.conn.last_insert_rowid();
        self.fetch(id)?.ok_or_else(|| {
            RepoError::InvalidData(format!("created customer id={id} missing on read-back"))
        })
    }

    fn get(&self, id: CustomerId) -> RepoResult<Option<Customer>> {
        self.fetch(id)
    }

    fn find_by_email(&self, email: &str) -> RepoResult<Option<Customer>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CUSTOMER_SELECT_SQL} WHERE email = ?1;"))?;
        let customer = stmt
            .query_row(params![email], parse_customer_row)
            .optional()?;
        Ok(customer)
    }

    fn list(&self, query: &CustomerListQuery) -> RepoResult<Vec<Customer>> {
        let mut sql = format!("{CUSTOMER_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(fragment) = &query.name_contains {
            sql.push_str(" AND name LIKE ? ESCAPE '\\'");
            bind_values.push(Value::Text(like_pattern(fragment)));
        }

        sql.push_str(" ORDER BY id ASC");
        push_pagination(&mut sql, &mut bind_values, query.limit, query.offset);

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut customers = Vec::new();

        while let Some(row) = rows.next()? {
            customers.push(parse_customer_row(row)?);
        }

        Ok(customers)
    }

    fn update(&self, id: CustomerId, changes: &CustomerChanges) -> RepoResult<Customer> {
        let mut assignments: Vec<&'static str> = Vec::new();
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(name) = &changes.name {
            assignments.push("name = ?");
            bind_values.push(Value::Text(name.clone()));
        }
        if let Some(email) = &changes.email {
            assignments.push("email = ?");
            bind_values.push(Value::Text(email.clone()));
        }
        if let Some(phone) = &changes.phone {
            assignments.push("phone = ?");
            bind_values.push(Value::Text(phone.clone()));
        }
        if let Some(address) = &changes.address {
            assignments.push("address = ?");
            bind_values.push(Value::Text(address.clone()));
        }

        if assignments.is_empty() {
            return self.fetch(id)?.ok_or(RepoError::NotFound(id));
        }

        let sql = format!(
            "UPDATE customers SET {} WHERE id = ?;",
            assignments.join(", ")
        );
        bind_values.push(Value::Integer(id));

        let changed = self
            .conn
            .execute(&sql, params_from_iter(bind_values))
            .map_err(|err| map_write_error(err, "customers.email unique"))?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        self.fetch(id)?.ok_or_else(|| {
            RepoError::InvalidData(format!("updated customer id={id} missing on read-back"))
        })
    }

    fn delete(&self, id: CustomerId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM customers WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn count(&self) -> RepoResult<u64> {
        let total = self
            .conn
            .query_row("SELECT COUNT(*) FROM customers;", [], |row| {
                row.get::<_, i64>(0)
            })?;
        Ok(total.max(0) as u64)
    }
}

fn parse_customer_row(row: &Row<'_>) -> Result<Customer, rusqlite::Error> {
    Ok(Customer {
        id: row.get("id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        phone: row.get("phone")?,
        address: row.get("address")?,
        created_at_ms: row.get("created_at_ms")?,
    })
}

/// Builds a `LIKE` pattern for substring search, escaping wildcard
/// characters present in user input.
pub(crate) fn like_pattern(fragment: &str) -> String {
    let escaped = fragment
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

pub(crate) fn push_pagination(
    sql: &mut String,
    bind_values: &mut Vec<Value>,
    limit: Option<u32>,
    offset: u32,
) {
    if let Some(limit) = limit {
        sql.push_str(" LIMIT ?");
        bind_values.push(Value::Integer(i64::from(limit)));
        if offset > 0 {
            sql.push_str(" OFFSET ?");
            bind_values.push(Value::Integer(i64::from(offset)));
        }
    } else if offset > 0 {
        sql.push_str(" LIMIT -1 OFFSET ?");
        bind_values.push(Value::Integer(i64::from(offset)));
    }
}
