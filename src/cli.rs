//! Command-line arguments and the resolved application config.

use clap::Parser;
use std::path::PathBuf;

/// Single-user inventory tracker backed by SQLite
#[derive(Parser, Debug)]
#[command(name = "inventory_tracker")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the SQLite database file
    #[arg(short, long, default_value = "inventory.db")]
    pub database: PathBuf,

    /// CSV file imported at startup
    #[arg(short, long, default_value = "inventory.csv")]
    pub seed: PathBuf,

    /// CSV file written by the backup action
    #[arg(short, long, default_value = "backup.csv")]
    pub backup: PathBuf,
}

/// File locations used for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database: PathBuf,
    pub seed: PathBuf,
    pub backup: PathBuf,
}

impl Args {
    pub fn into_config(self) -> AppConfig {
        AppConfig {
            database: self.database,
            seed: self.seed,
            backup: self.backup,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_file_names() {
        let config = Args::parse_from(["inventory_tracker"]).into_config();
        assert_eq!(config.database, PathBuf::from("inventory.db"));
        assert_eq!(config.seed, PathBuf::from("inventory.csv"));
        assert_eq!(config.backup, PathBuf::from("backup.csv"));
    }

    #[test]
    fn paths_can_be_overridden() {
        let config = Args::parse_from([
            "inventory_tracker",
            "--database",
            "/tmp/store.db",
            "-s",
            "seed.csv",
            "-b",
            "out/backup.csv",
        ])
        .into_config();
        assert_eq!(config.database, PathBuf::from("/tmp/store.db"));
        assert_eq!(config.seed, PathBuf::from("seed.csv"));
        assert_eq!(config.backup, PathBuf::from("out/backup.csv"));
    }

    #[test]
    fn args_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
