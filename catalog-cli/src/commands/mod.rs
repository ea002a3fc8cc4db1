//! Command implementations for the catalog CLI

pub mod migrate;
pub mod serve;

use anyhow::{Context, Result};
use catalog_server::config;
use catalog_server::db::PgConnectOptions;

pub use migrate::run_migrate;
pub use serve::run_serve;

/// Connection options from the flag, else DATABASE_URL / POSTGRES_* variables
fn resolve_connect_options(flag: Option<String>) -> Result<PgConnectOptions> {
    match flag {
        Some(url) => config::parse_database_url(&url).context("Invalid --database-url"),
        None => config::connect_options_from_env()
            .context("Database not configured. Set --database-url, DATABASE_URL or POSTGRES_*"),
    }
}
