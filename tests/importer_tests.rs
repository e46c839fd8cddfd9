use chrono::NaiveDate;
use inventory_tracker::importer::{import_seed, read_seed};
use inventory_tracker::{Cents, InventoryError, ProductStore};
use std::io::Write;
use tempfile::NamedTempFile;

const HEADER: &str = "product_name,product_quantity,product_price,date_updated";

fn seed_file(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_read_seed_keeps_raw_text() {
    let file = seed_file(&["Apples,5,$1.50,01/01/2020", "  Pears , 3 , $0.75 , 01/02/2020 "]);
    let rows = read_seed(file.path()).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].product_name, "Apples");
    assert_eq!(rows[0].product_price, "$1.50");
    // CSV reader trims whitespace
    assert_eq!(rows[1].product_name, "Pears");
    assert_eq!(rows[1].product_quantity, "3");
    assert_eq!(rows[1].date_updated, "01/02/2020");
}

#[test]
fn test_read_seed_quoted_names() {
    let file = seed_file(&["\"Nuts, mixed\",2,$12.99,01/01/2020"]);
    let rows = read_seed(file.path()).unwrap();
    assert_eq!(rows[0].product_name, "Nuts, mixed");
}

#[test]
fn test_import_seed_populates_store() {
    let store = ProductStore::open_in_memory().unwrap();
    let file = seed_file(&["Apples,5,$1.50,01/01/2020", "Bananas,12,$0.99,01/03/2020"]);

    let report = import_seed(&store, file.path()).unwrap();
    assert_eq!(report.inserted, 2);
    assert!(report.skipped.is_empty());

    let products = store.list_all().unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].name, "Apples");
    assert_eq!(products[0].price, Cents(150));
    assert_eq!(products[0].quantity, 5);
    assert_eq!(products[0].last_updated, date(2020, 1, 1));
    assert_eq!(products[1].price, Cents(99));
}

#[test]
fn test_reimport_with_later_date_overwrites() {
    let store = ProductStore::open_in_memory().unwrap();
    let first = seed_file(&["Apples,5,$1.50,01/01/2020"]);
    import_seed(&store, first.path()).unwrap();
    let id = store.get("Apples").unwrap().id;

    let second = seed_file(&["Apples,5,$2.00,02/01/2020"]);
    let report = import_seed(&store, second.path()).unwrap();
    assert_eq!(report.updated, 1);

    let apples = store.get("Apples").unwrap();
    assert_eq!(apples.id, id);
    assert_eq!(apples.price, Cents(200));
    assert_eq!(apples.last_updated, date(2020, 2, 1));
}

#[test]
fn test_reimport_same_file_keeps_one_record_per_name() {
    let store = ProductStore::open_in_memory().unwrap();
    let file = seed_file(&[
        "Apples,5,$1.50,01/01/2020",
        "Bananas,12,$0.99,01/03/2020",
        "Apples,4,$1.40,12/31/2019",
    ]);

    import_seed(&store, file.path()).unwrap();
    let before = store.list_all().unwrap();
    import_seed(&store, file.path()).unwrap();

    assert_eq!(store.count().unwrap(), 2);
    assert_eq!(store.list_all().unwrap(), before);
}

#[test]
fn test_malformed_rows_are_skipped_and_reported() {
    let store = ProductStore::open_in_memory().unwrap();
    let file = seed_file(&[
        "Apples,5,$1.50,01/01/2020",
        "Bananas,12,$0.99,2020-01-03",
        "Cherries,many,$4.50,01/01/2020",
        "Dates,3,$free,01/01/2020",
        "Eggplant,2,$1.10,01/01/2020",
    ]);

    let report = import_seed(&store, file.path()).unwrap();
    assert_eq!(report.inserted, 2);

    let skipped: Vec<(usize, &str)> = report
        .skipped
        .iter()
        .map(|s| (s.row, s.name.as_str()))
        .collect();
    assert_eq!(skipped, vec![(2, "Bananas"), (3, "Cherries"), (4, "Dates")]);
    assert!(matches!(report.skipped[0].error, InventoryError::MalformedDate(_)));
    assert!(matches!(report.skipped[1].error, InventoryError::MalformedQuantity(_)));
    assert!(matches!(report.skipped[2].error, InventoryError::MalformedPrice(_)));

    assert_eq!(store.count().unwrap(), 2);
}

#[test]
fn test_missing_seed_file_is_an_error() {
    let store = ProductStore::open_in_memory().unwrap();
    let result = import_seed(&store, std::path::Path::new("/this/file/does/not/exist.csv"));
    assert!(matches!(result, Err(InventoryError::Csv(_))));
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn test_seed_with_wrong_columns_aborts_without_writes() {
    let store = ProductStore::open_in_memory().unwrap();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "name,qty\nApples,5").unwrap();

    assert!(import_seed(&store, file.path()).is_err());
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn test_header_only_seed_imports_nothing() {
    let store = ProductStore::open_in_memory().unwrap();
    let file = seed_file(&[]);
    let report = import_seed(&store, file.path()).unwrap();
    assert_eq!(report.processed(), 0);
    assert_eq!(store.count().unwrap(), 0);
}
