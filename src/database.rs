//! Record store backed by a single SQLite file.
//!
//! Uses parameterized queries exclusively (no SQL string concatenation).
//! Schema creation is idempotent, so reopening an existing file never
//! touches stored rows.

use crate::error::{InventoryError, Lookup, Result};
use crate::models::{Cents, Product, ProductUpdate};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

const PRODUCT_COLUMNS: &str =
    "product_id, product_name, product_price, product_quantity, date_updated";

/// Handle to the product table. Opened once per process and passed to
/// every component that needs it.
pub struct ProductStore {
    conn: Connection,
}

impl ProductStore {
    /// Opens (or creates) the database file and initialises the schema.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
                log::info!("Created directory: {}", parent.display());
            }
        }
        let conn = Connection::open(path)?;
        log::info!("Opened database: {}", path.display());
        Self::with_connection(conn)
    }

    /// Opens a private in-memory database, used in tests.
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Closes the connection, surfacing any error SQLite reports on close.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| InventoryError::from(e))?;
        log::info!("Database closed");
        Ok(())
    }

    /// Runs `f` inside one transaction. Any error rolls every write back.
    pub fn in_transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Self) -> Result<T>,
    {
        let tx = self.conn.unchecked_transaction()?;
        let value = f(self)?;
        tx.commit()?;
        Ok(value)
    }

    /// Inserts a new product and returns it with its assigned id.
    ///
    /// Fails with `DuplicateKey` when the name is already stored.
    pub fn create(
        &self,
        name: &str,
        price: Cents,
        quantity: u32,
        date: chrono::NaiveDate,
    ) -> Result<Product> {
        let inserted = self.conn.execute(
            "INSERT INTO products (product_name, product_price, product_quantity, date_updated)
             VALUES (?1, ?2, ?3, ?4)",
            params![name, price.value(), quantity, date],
        );

        match inserted {
            Ok(_) => {}
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
            {
                return Err(InventoryError::DuplicateKey(name.to_string()));
            }
            Err(e) => return Err(e.into()),
        }

        Ok(Product {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
            price,
            quantity,
            last_updated: date,
        })
    }

    /// Looks up a product by its unique name.
    pub fn find_by_name(&self, name: &str) -> Result<Option<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE product_name = ?1");
        let product = self
            .conn
            .query_row(&sql, params![name], product_from_row)
            .optional()?;
        Ok(product)
    }

    /// Looks up a product by id.
    pub fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE product_id = ?1");
        let product = self
            .conn
            .query_row(&sql, params![id], product_from_row)
            .optional()?;
        Ok(product)
    }

    /// Like [`find_by_name`](Self::find_by_name), but a miss is `NotFound`.
    pub fn get(&self, name: &str) -> Result<Product> {
        self.find_by_name(name)?
            .ok_or_else(|| InventoryError::NotFound(Lookup::Name(name.to_string())))
    }

    /// Like [`find_by_id`](Self::find_by_id), but a miss is `NotFound`.
    pub fn get_by_id(&self, id: i64) -> Result<Product> {
        self.find_by_id(id)?
            .ok_or(InventoryError::NotFound(Lookup::Id(id)))
    }

    /// Overwrites price, quantity and date of an existing product.
    pub fn update(&self, id: i64, fields: &ProductUpdate) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE products
             SET product_price = ?1, product_quantity = ?2, date_updated = ?3
             WHERE product_id = ?4",
            params![fields.price.value(), fields.quantity, fields.last_updated, id],
        )?;
        if changed == 0 {
            return Err(InventoryError::NotFound(Lookup::Id(id)));
        }
        Ok(())
    }

    /// Permanently removes a product.
    pub fn delete(&self, id: i64) -> Result<()> {
        let changed = self
            .conn
            .execute("DELETE FROM products WHERE product_id = ?1", params![id])?;
        if changed == 0 {
            return Err(InventoryError::NotFound(Lookup::Id(id)));
        }
        log::info!("Deleted product {}", id);
        Ok(())
    }

    /// All products ordered by id ascending.
    pub fn list_all(&self) -> Result<Vec<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY product_id ASC");
        let mut stmt = self.conn.prepare(&sql)?;
        let products = stmt
            .query_map([], product_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(products)
    }

    /// Number of stored products.
    pub fn count(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Highest id currently stored, if any.
    pub fn max_id(&self) -> Result<Option<i64>> {
        let id = self
            .conn
            .query_row("SELECT MAX(product_id) FROM products", [], |row| row.get(0))?;
        Ok(id)
    }
}

/// Creates the `products` table if it does not already exist.
///
/// AUTOINCREMENT keeps ids of deleted rows from being handed out again.
fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS products (
            product_id       INTEGER PRIMARY KEY AUTOINCREMENT,
            product_name     TEXT NOT NULL UNIQUE,
            product_quantity INTEGER NOT NULL DEFAULT 0 CHECK (product_quantity >= 0),
            product_price    INTEGER NOT NULL DEFAULT 0 CHECK (product_price >= 0),
            date_updated     TEXT NOT NULL
        );",
    )?;
    log::debug!("Database schema initialized");
    Ok(())
}

fn product_from_row(row: &Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get(0)?,
        name: row.get(1)?,
        price: Cents(row.get(2)?),
        quantity: row.get(3)?,
        last_updated: row.get(4)?,
    })
}
