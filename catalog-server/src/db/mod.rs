//! Database layer - connection pool and schema bootstrap
//!
//! The pool is created once and handed to repositories by value
//! (`PgPool` is a cheap, cloneable handle). Nothing here is global.

pub mod migrations;
pub mod pool;

pub use pool::{connect_with_options, create_pool, create_pool_with_options};
pub use sqlx::postgres::PgConnectOptions;
