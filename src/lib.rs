//! Inventory Tracker - single-user product inventory on SQLite
//!
//! Seeds product records from a CSV file, keeps the newest data per
//! product name, and manages records from an interactive text menu with
//! CSV backup.

pub mod backup;
pub mod cli;
pub mod database;
pub mod error;
pub mod importer;
pub mod menu;
pub mod models;
pub mod parsing;
pub mod reconcile;

pub use backup::export_backup;
pub use cli::{AppConfig, Args};
pub use database::ProductStore;
pub use error::{InventoryError, Lookup, Result};
pub use importer::{import_seed, ImportReport};
pub use menu::{Console, Menu, Session};
pub use models::{Candidate, Cents, Product, ProductUpdate};
pub use reconcile::{decide, reconcile, Decision, Outcome};
