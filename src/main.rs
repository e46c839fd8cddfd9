//! Inventory Tracker - interactive product inventory
//!
//! Opens the store, imports the seed CSV, then runs the menu on the
//! terminal until the user quits.

use clap::Parser;
use inventory_tracker::{import_seed, Args, Console, Menu, ProductStore, Session};
use std::io;

fn main() {
    // Default to warn so log lines don't interleave with the menu.
    // RUST_LOG=info or RUST_LOG=inventory_tracker=debug for more.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Args::parse().into_config();
    log::info!("Starting inventory_tracker...");
    log::info!("Database path: {}", config.database.display());

    let store = match ProductStore::open(&config.database) {
        Ok(store) => store,
        Err(e) => {
            log::error!("Failed to open database: {}", e);
            eprintln!("Error: could not open {}: {}", config.database.display(), e);
            std::process::exit(1);
        }
    };

    match import_seed(&store, &config.seed) {
        Ok(report) => {
            println!(
                "Loaded {} rows from {}: {} added, {} updated, {} unchanged.",
                report.processed(),
                config.seed.display(),
                report.inserted,
                report.updated,
                report.unchanged
            );
            for skipped in &report.skipped {
                println!(
                    "Skipped row {} ('{}'): {}",
                    skipped.row, skipped.name, skipped.error
                );
            }
        }
        Err(e) => {
            log::error!("Failed to import seed file: {}", e);
            eprintln!("Error: could not import {}: {}", config.seed.display(), e);
            std::process::exit(1);
        }
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let result = {
        let console = Console::new(&mut input, &mut output);
        let mut session = Session::new(&store, console, &config);
        Menu::default().run(&mut session)
    };

    if let Err(e) = &result {
        log::error!("Menu stopped: {}", e);
        eprintln!("Error: {}", e);
    }

    if let Err(e) = store.close() {
        log::error!("Failed to close database: {}", e);
        std::process::exit(1);
    }
    if result.is_err() {
        std::process::exit(1);
    }
}
