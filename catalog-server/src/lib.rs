//! catalog-server: product CRUD over HTTP
//!
//! Layers, leaf-first:
//! - `db`: connection pool and schema bootstrap
//! - `repository`: the only code that talks to the store
//! - `controller`: maps repository outcomes to HTTP status and message
//! - `http`: handlers, envelope, routes and the server loop

pub mod config;
pub mod controller;
pub mod db;
pub mod http;
pub mod models;
pub mod repository;

pub use controller::{ProductController, RepoController};
pub use http::{build_router, run_server, AppState, ServerConfig};
pub use models::{Product, ProductRequest};
pub use repository::{MemoryProductRepo, PgProductRepo, ProductRepository, RepoError};
