//! Seed file import.
//!
//! Reads `product_name,product_quantity,product_price,date_updated` rows
//! and reconciles each one into the store. A row with a blank name or a
//! bad price, quantity or date is skipped and reported; the rest of the
//! file still loads. Opening the file or a structurally broken CSV aborts
//! the import.

use crate::database::ProductStore;
use crate::error::{InventoryError, Result};
use crate::models::Candidate;
use crate::parsing::{parse_name, parse_quantity, parse_seed_date, parse_seed_price};
use crate::reconcile::{reconcile, Outcome};
use serde::Deserialize;
use std::path::Path;

/// One raw row of the seed file, before field parsing
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SeedRow {
    pub product_name: String,
    pub product_quantity: String,
    pub product_price: String,
    pub date_updated: String,
}

impl SeedRow {
    /// Parses name, price, quantity and date into a reconcilable candidate.
    pub fn to_candidate(&self) -> Result<Candidate> {
        Ok(Candidate {
            name: parse_name(&self.product_name)?,
            price: parse_seed_price(&self.product_price)?,
            quantity: parse_quantity(&self.product_quantity)?,
            date: parse_seed_date(&self.date_updated)?,
        })
    }
}

/// A seed row that was not imported
#[derive(Debug)]
pub struct SkippedRow {
    /// 1-based data row number (the header is not counted)
    pub row: usize,
    pub name: String,
    pub error: InventoryError,
}

/// Statistics from one import run
#[derive(Debug, Default)]
pub struct ImportReport {
    /// New products created
    pub inserted: usize,
    /// Stored products overwritten with newer data
    pub updated: usize,
    /// Rows whose stored record was as new or newer
    pub unchanged: usize,
    pub skipped: Vec<SkippedRow>,
}

impl ImportReport {
    /// Rows that reached the store, whatever the outcome.
    pub fn processed(&self) -> usize {
        self.inserted + self.updated + self.unchanged
    }

    fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Inserted(_) => self.inserted += 1,
            Outcome::Updated(_) => self.updated += 1,
            Outcome::Unchanged(_) => self.unchanged += 1,
        }
    }
}

/// Reads every row of a seed file without interpreting the fields.
pub fn read_seed(path: &Path) -> Result<Vec<SeedRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let row: SeedRow = result?;
        rows.push(row);
    }
    Ok(rows)
}

/// Imports a seed file into the store inside a single transaction.
pub fn import_seed(store: &ProductStore, path: &Path) -> Result<ImportReport> {
    let rows = read_seed(path)?;
    log::info!("Read {} rows from {}", rows.len(), path.display());
    let report = import_rows(store, &rows)?;
    log::info!(
        "Import finished: {} inserted, {} updated, {} unchanged, {} skipped",
        report.inserted,
        report.updated,
        report.unchanged,
        report.skipped.len()
    );
    Ok(report)
}

/// Reconciles already-read rows into the store.
pub fn import_rows(store: &ProductStore, rows: &[SeedRow]) -> Result<ImportReport> {
    store.in_transaction(|tx| {
        let mut report = ImportReport::default();
        for (index, row) in rows.iter().enumerate() {
            let candidate = match row.to_candidate() {
                Ok(candidate) => candidate,
                Err(error) => {
                    log::warn!("Skipping seed row {} ('{}'): {}", index + 1, row.product_name, error);
                    report.skipped.push(SkippedRow {
                        row: index + 1,
                        name: row.product_name.clone(),
                        error,
                    });
                    continue;
                }
            };
            let outcome = reconcile(tx, &candidate)?;
            log::debug!("Seed row {}: {:?}", index + 1, outcome.product());
            report.record(&outcome);
        }
        Ok(report)
    })
}
