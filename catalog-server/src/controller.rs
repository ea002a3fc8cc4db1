//! Product controller - maps repository outcomes to HTTP semantics
//!
//! No business logic lives here. Each operation calls the repository once
//! and turns the result into a status code plus message. Not-found and
//! store failures are both reported as 500 with the operation's generic
//! message; only the logs tell them apart.

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::models::{Product, ProductRequest};
use crate::repository::{ProductRepository, RepoError};

pub const MSG_SUCCESS: &str = "success";
pub const MSG_SAVE_FAILED: &str = "failed to save to database";
pub const MSG_DELETE_FAILED: &str = "failed to delete from database";
pub const MSG_SELECT_FAILED: &str = "failed to select from database";

/// Successful controller result
#[derive(Debug, Clone, PartialEq)]
pub struct Reply<T> {
    pub status: StatusCode,
    pub message: String,
    pub data: T,
}

impl<T> Reply<T> {
    fn new(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            status,
            message: message.into(),
            data,
        }
    }
}

/// Failed controller result, carrying the repository error as its reason
#[derive(Debug, thiserror::Error)]
#[error("{message}: {source}")]
pub struct Failure {
    pub status: StatusCode,
    pub message: &'static str,
    #[source]
    pub source: RepoError,
}

pub type Outcome<T> = Result<Reply<T>, Failure>;

/// Controller contract consumed by the HTTP handlers
#[async_trait]
pub trait ProductController: Send + Sync {
    /// 201 with the new id on success.
    async fn insert(&self, req: &ProductRequest) -> Outcome<Uuid>;

    async fn update(&self, id: &str, req: &ProductRequest) -> Outcome<()>;

    /// 200 with the deleted id echoed as the message.
    async fn delete(&self, id: &str) -> Outcome<()>;

    async fn get_all(&self) -> Outcome<Vec<Product>>;

    async fn get(&self, id: &str) -> Outcome<Product>;
}

/// Controller backed by a product repository
#[derive(Clone)]
pub struct RepoController {
    repo: Arc<dyn ProductRepository>,
}

impl RepoController {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }
}

/// Apply the failure policy: every repository error becomes a 500.
fn failure(message: &'static str, source: RepoError) -> Failure {
    match &source {
        RepoError::NotFound { id } => warn!(%id, "product not found, reporting as 500"),
        RepoError::Constraint(reason) => warn!(%reason, "constraint violation"),
        RepoError::Sqlx(e) => error!(error = %e, "database error"),
    }
    Failure {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message,
        source,
    }
}

#[async_trait]
impl ProductController for RepoController {
    #[instrument(name = "controller::insert", skip(self, req))]
    async fn insert(&self, req: &ProductRequest) -> Outcome<Uuid> {
        let id = self
            .repo
            .insert(req)
            .await
            .map_err(|e| failure(MSG_SAVE_FAILED, e))?;

        info!(%id, "product created");
        Ok(Reply::new(StatusCode::CREATED, MSG_SUCCESS, id))
    }

    #[instrument(name = "controller::update", skip(self, req))]
    async fn update(&self, id: &str, req: &ProductRequest) -> Outcome<()> {
        self.repo
            .update(id, req)
            .await
            .map_err(|e| failure(MSG_SAVE_FAILED, e))?;

        Ok(Reply::new(StatusCode::OK, MSG_SUCCESS, ()))
    }

    #[instrument(name = "controller::delete", skip(self))]
    async fn delete(&self, id: &str) -> Outcome<()> {
        self.repo
            .delete(id)
            .await
            .map_err(|e| failure(MSG_DELETE_FAILED, e))?;

        Ok(Reply::new(StatusCode::OK, id, ()))
    }

    #[instrument(name = "controller::get_all", skip(self))]
    async fn get_all(&self) -> Outcome<Vec<Product>> {
        let products = self
            .repo
            .get_all()
            .await
            .map_err(|e| failure(MSG_SELECT_FAILED, e))?;

        Ok(Reply::new(StatusCode::OK, MSG_SUCCESS, products))
    }

    #[instrument(name = "controller::get", skip(self))]
    async fn get(&self, id: &str) -> Outcome<Product> {
        let product = self
            .repo
            .get_by_id(id)
            .await
            .map_err(|e| failure(MSG_SELECT_FAILED, e))?;

        Ok(Reply::new(StatusCode::OK, MSG_SUCCESS, product))
    }
}
