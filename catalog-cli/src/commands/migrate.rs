//! Schema bootstrap command

use anyhow::{Context, Result};
use clap::Parser;

use catalog_server::db::{connect_with_options, migrations, pool::DEFAULT_MAX_CONNECTIONS};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides POSTGRES_* variables)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Create the products table and indexes, then exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let options = super::resolve_connect_options(args.database_url)?;

    let pool = connect_with_options(options, DEFAULT_MAX_CONNECTIONS)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    pool.close().await;
    Ok(())
}
