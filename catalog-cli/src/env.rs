//! .env loading
//!
//! Files are read in order and never override variables that are already
//! set, so the real environment always wins:
//! 1. ./secret/.env
//! 2. ./.env
//!
//! Loading runs before tracing is initialised (RUST_LOG may come from a
//! .env file), so outcomes are collected and logged by the caller.

use std::path::Path;

use tracing::{info, warn};

const ENV_FILES: [&str; 2] = ["secret/.env", ".env"];

/// What happened while loading .env files
#[derive(Debug, Default)]
pub struct DotenvReport {
    /// Files that were read, in load order
    pub loaded_from: Vec<String>,
    /// Files that exist but could not be read or parsed
    pub failures: Vec<(String, dotenvy::Error)>,
}

impl DotenvReport {
    /// Emit the report; call once the subscriber is installed.
    pub fn log(&self) {
        for (file, e) in &self.failures {
            warn!("Failed to load {}: {}", file, e);
        }
        if self.loaded_from.is_empty() {
            info!("Using environment variables only (no .env file found)");
        } else {
            info!("Loaded configuration from: {}", self.loaded_from.join(", "));
        }
    }
}

/// Load .env files relative to the working directory.
pub fn load_dotenv() -> DotenvReport {
    load_dotenv_in(Path::new("."))
}

pub fn load_dotenv_in(dir: &Path) -> DotenvReport {
    let mut report = DotenvReport::default();

    for file in ENV_FILES {
        let path = dir.join(file);
        if !path.exists() {
            continue;
        }
        match dotenvy::from_path(&path) {
            Ok(()) => report.loaded_from.push(file.to_string()),
            Err(e) => report.failures.push((file.to_string(), e)),
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn missing_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let report = load_dotenv_in(dir.path());
        assert!(report.loaded_from.is_empty());
        assert!(report.failures.is_empty());
    }

    #[test]
    fn malformed_file_is_reported_not_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".env"), "BAD LINE\n").unwrap();

        let report = load_dotenv_in(dir.path());
        assert!(report.loaded_from.is_empty());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].0, ".env");
    }

    #[test]
    fn secret_file_loads_before_dotenv() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("secret")).unwrap();
        fs::write(
            dir.path().join("secret/.env"),
            "CATALOG_ENV_TEST_ORDER=secret\n",
        )
        .unwrap();
        fs::write(dir.path().join(".env"), "CATALOG_ENV_TEST_ORDER=plain\n").unwrap();

        let report = load_dotenv_in(dir.path());
        assert_eq!(report.loaded_from, vec!["secret/.env", ".env"]);
        assert!(report.failures.is_empty());
        // First file wins, later ones never override
        assert_eq!(std::env::var("CATALOG_ENV_TEST_ORDER").unwrap(), "secret");
    }
}
