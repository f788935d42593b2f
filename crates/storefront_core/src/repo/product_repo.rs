//! Product repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `products` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `delete` of an absent id reports `NotFound`, never a fault.
//! - List results are ordered by `id ASC` and restartable.

use crate::model::product::{NewProduct, Product, ProductChanges, ProductId};
use crate::repo::customer_repo::{like_pattern, push_pagination};
use crate::repo::{map_write_error, RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const PRODUCT_SELECT_SQL: &str = "SELECT
    id,
    name,
    description,
    price,
    stock,
    created_at_ms
FROM products";

/// Filter and pagination options for listing products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Case-insensitive substring match on `name`.
    pub name_contains: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub limit: Option<u32>,
    pub offset: u32,
}

/// Repository interface for product CRUD operations.
pub trait ProductRepository {
    fn create(&self, draft: &NewProduct) -> RepoResult<Product>;
    fn get(&self, id: ProductId) -> RepoResult<Option<Product>>;
    fn list(&self, query: &ProductListQuery) -> RepoResult<Vec<Product>>;
    fn update(&self, id: ProductId, changes: &ProductChanges) -> RepoResult<Product>;
    fn delete(&self, id: ProductId) -> RepoResult<()>;
    fn count(&self) -> RepoResult<u64>;
}

/// SQLite-backed product repository.
pub struct SqliteProductRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProductRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn fetch(&self, id: ProductId) -> RepoResult<Option<Product>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PRODUCT_SELECT_SQL} WHERE id = ?1;"))?;
        let product = stmt.query_row(params![id], parse_product_row).optional()?;
        Ok(product)
    }
}

impl ProductRepository for SqliteProductRepository<'_> {
    fn create(&self, draft: &NewProduct) -> RepoResult<Product> {
        self.conn
            .execute(
                "INSERT INTO products (name, description, price, stock)
                 VALUES (?1, ?2, ?3, ?4);",
                params![
                    draft.name.as_str(),
                    draft.description.as_deref(),
                    draft.price,
                    draft.stock,
                ],
            )
            .map_err(|err| map_write_error(err, "products.stock non-negative"))?;

        let id = self.conn.last_insert_rowid();
        self.fetch(id)?.ok_or_else(|| {
            RepoError::InvalidData(format!("created product id={id} missing on read-back"))
        })
    }

    fn get(&self, id: ProductId) -> RepoResult<Option<Product>> {
        self.fetch(id)
    }

    fn list(&self, query: &ProductListQuery) -> RepoResult<Vec<Product>> {
        let mut sql = format!("{PRODUCT_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(fragment) = &query.name_contains {
            sql.push_str(" AND name LIKE ? ESCAPE '\\'");
            bind_values.push(Value::Text(like_pattern(fragment)));
        }
        if let Some(min_price) = query.min_price {
            sql.push_str(" AND price >= ?");
            bind_values.push(Value::Real(min_price));
        }
        if let Some(max_price) = query.max_price {
            sql.push_str(" AND price <= ?");
            bind_values.push(Value::Real(max_price));
        }

        sql.push_str(" ORDER BY id ASC");
        push_pagination(&mut sql, &mut bind_values, query.limit, query.offset);

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut products = Vec::new();

        while let Some(row) = rows.next()? {
            products.push(parse_product_row(row)?);
        }

        Ok(products)
    }

    fn update(&self, id: ProductId, changes: &ProductChanges) -> RepoResult<Product> {
        let mut assignments: Vec<&'static str> = Vec::new();
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(name) = &changes.name {
            assignments.push("name = ?");
            bind_values.push(Value::Text(name.clone()));
        }
        if let Some(description) = &changes.description {
            assignments.push("description = ?");
            bind_values.push(Value::Text(description.clone()));
        }
        if let Some(price) = changes.price {
            assignments.push("price = ?");
            bind_values.push(Value::Real(price));
        }
        if let Some(stock) = changes.stock {
            assignments.push("stock = ?");
            bind_values.push(Value::Integer(stock));
        }

        if assignments.is_empty() {
            return self.fetch(id)?.ok_or(RepoError::NotFound(id));
        }

        let sql = format!(
            "UPDATE products SET {} WHERE id = ?;",
            assignments.join(", ")
        );
        bind_values.push(Value::Integer(id));

        let changed = self
            .conn
            .execute(&sql, params_from_iter(bind_values))
            .map_err(|err| map_write_error(err, "products.stock non-negative"))?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        self.fetch(id)?.ok_or_else(|| {
            RepoError::InvalidData(format!("updated product id={id} missing on read-back"))
        })
    }

    fn delete(&self, id: ProductId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM products WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn count(&self) -> RepoResult<u64> {
        let total = self
            .conn
            .query_row("SELECT COUNT(*) FROM products;", [], |row| {
                row.get::<_, i64>(0)
            })?;
        Ok(total.max(0) as u64)
    }
}

fn parse_product_row(row: &Row<'_>) -> Result<Product, rusqlite::Error> {
    Ok(Product {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        price: row.get("price")?,
        stock: row.get("stock")?,
        created_at_ms: row.get("created_at_ms")?,
    })
}
