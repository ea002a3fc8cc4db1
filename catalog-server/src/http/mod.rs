//! HTTP server layer
//!
//! Axum server with:
//! - Product routes and a health check
//! - Uniform JSON envelope for every response
//! - Request tracing
//! - Graceful shutdown

pub mod envelope;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
