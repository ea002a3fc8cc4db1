//! Route table

use axum::{routing::get, Router};

use super::handlers;
use super::server::AppState;

/// Product routes plus the health check
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/product", get(handlers::get_all).post(handlers::insert))
        .route(
            "/product/{id}",
            get(handlers::get_by_id)
                .patch(handlers::update)
                .delete(handlers::delete),
        )
}
