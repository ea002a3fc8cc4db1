//! Environment-driven configuration
//!
//! Database connection options come from `DATABASE_URL` when present,
//! otherwise they are assembled field by field from the discrete
//! `POSTGRES_*` variables (no URL is built, so credentials may contain any
//! character). The listen address comes from `CATALOG_BIND`, falling back
//! to a bare `PORT`.

use std::net::SocketAddr;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment variable '{0}' (or set DATABASE_URL)")]
    Missing(&'static str),

    #[error("invalid {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Resolve connection options from the process environment.
pub fn connect_options_from_env() -> Result<PgConnectOptions, ConfigError> {
    connect_options(|var| std::env::var(var).ok())
}

/// Parse a full database URL. The URL itself is kept out of the error.
pub fn parse_database_url(url: &str) -> Result<PgConnectOptions, ConfigError> {
    url.parse().map_err(|e: sqlx::Error| ConfigError::Invalid {
        var: "DATABASE_URL",
        value: e.to_string(),
    })
}

/// Resolve connection options through an arbitrary variable lookup.
pub fn connect_options(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<PgConnectOptions, ConfigError> {
    if let Some(url) = lookup("DATABASE_URL").filter(|u| !u.is_empty()) {
        return parse_database_url(&url);
    }

    let get = |var: &'static str| lookup(var).ok_or(ConfigError::Missing(var));
    let host = get("POSTGRES_HOST")?;
    let user = get("POSTGRES_USER")?;
    let pass = get("POSTGRES_PASS")?;
    let db = get("POSTGRES_DB")?;
    let port = get("POSTGRES_PORT")?;

    let port = port.parse::<u16>().map_err(|_| ConfigError::Invalid {
        var: "POSTGRES_PORT",
        value: port.clone(),
    })?;

    Ok(PgConnectOptions::new()
        .host(&host)
        .port(port)
        .username(&user)
        .password(&pass)
        .database(&db)
        .ssl_mode(PgSslMode::Disable))
}

/// Resolve the bind address through an arbitrary variable lookup.
///
/// `CATALOG_BIND` takes a full `host:port`. `PORT` accepts `8080` or
/// `:8080` and binds on all interfaces. Neither set yields `default`.
pub fn bind_addr(
    lookup: impl Fn(&str) -> Option<String>,
    default: SocketAddr,
) -> Result<SocketAddr, ConfigError> {
    if let Some(bind) = lookup("CATALOG_BIND") {
        return bind.parse().map_err(|_| ConfigError::Invalid {
            var: "CATALOG_BIND",
            value: bind,
        });
    }

    match lookup("PORT") {
        Some(port) => port
            .trim_start_matches(':')
            .parse::<u16>()
            .map(|p| SocketAddr::from(([0, 0, 0, 0], p)))
            .map_err(|_| ConfigError::Invalid {
                var: "PORT",
                value: port,
            }),
        None => Ok(default),
    }
}
