//! CSV backup of the whole product table.
//!
//! Each backup truncates the target and writes a fresh snapshot, so the
//! file always holds exactly one header and one copy of every record.

use crate::database::ProductStore;
use crate::error::Result;
use crate::models::{Cents, Product};
use serde::Serialize;
use std::path::Path;

/// Column order of the backup file
pub const BACKUP_HEADER: [&str; 5] = [
    "product_id",
    "product_name",
    "product_price",
    "product_quantity",
    "date_updated",
];

/// One backup row. Price stays in raw cents, date is `YYYY-MM-DD`.
#[derive(Debug, Serialize)]
struct BackupRow<'a> {
    product_id: i64,
    product_name: &'a str,
    product_price: Cents,
    product_quantity: u32,
    date_updated: String,
}

impl<'a> From<&'a Product> for BackupRow<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            product_id: product.id,
            product_name: &product.name,
            product_price: product.price,
            product_quantity: product.quantity,
            date_updated: product.last_updated.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Writes every product, ordered by id, to `path`. Returns the row count.
pub fn export_backup(store: &ProductStore, path: &Path) -> Result<usize> {
    let products = store.list_all()?;
    let mut writer = csv::Writer::from_path(path)?;

    for product in &products {
        writer.serialize(BackupRow::from(product))?;
    }
    // An empty table still gets its header
    if products.is_empty() {
        writer.write_record(BACKUP_HEADER)?;
    }
    writer.flush()?;

    log::info!("Backed up {} products to {}", products.len(), path.display());
    Ok(products.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn writes_header_and_rows_in_id_order() {
        let store = ProductStore::open_in_memory().unwrap();
        store.create("Apples", Cents(150), 5, date(2020, 1, 1)).unwrap();
        store.create("Bananas", Cents(99), 12, date(2020, 2, 3)).unwrap();

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("backup.csv");
        let count = export_backup(&store, &path).unwrap();
        assert_eq!(count, 2);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "product_id,product_name,product_price,product_quantity,date_updated\n\
             1,Apples,150,5,2020-01-01\n\
             2,Bananas,99,12,2020-02-03\n"
        );
    }

    #[test]
    fn empty_store_writes_header_only() {
        let store = ProductStore::open_in_memory().unwrap();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("backup.csv");

        assert_eq!(export_backup(&store, &path).unwrap(), 0);
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "product_id,product_name,product_price,product_quantity,date_updated\n"
        );
    }

    #[test]
    fn quotes_names_containing_commas() {
        let store = ProductStore::open_in_memory().unwrap();
        store
            .create("Nuts, mixed", Cents(1299), 2, date(2020, 1, 1))
            .unwrap();

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("backup.csv");
        export_backup(&store, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("1,\"Nuts, mixed\",1299,2,2020-01-01"));
    }

    #[test]
    fn fails_when_directory_is_missing() {
        let store = ProductStore::open_in_memory().unwrap();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("backup.csv");
        assert!(export_backup(&store, &path).is_err());
    }
}
