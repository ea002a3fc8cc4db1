//! Product repository - the only layer that touches persistence
//!
//! Every operation works on the active subset (`deleted_at IS NULL`) and
//! issues exactly one statement against the store:
//! - insert: INSERT with a server-generated id
//! - update / delete: single UPDATE, zero rows affected means not found
//! - get_all / get_by_id: SELECT over active rows

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Product, ProductRequest};

pub use memory::MemoryProductRepo;
pub use postgres::PgProductRepo;

/// Repository error type
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),

    /// A table constraint rejected the row (e.g. negative price)
    #[error("constraint violated: {0}")]
    Constraint(String),

    #[error("not found: product '{id}'")]
    NotFound { id: String },
}

impl From<sqlx::Error> for RepoError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db) if db.is_check_violation() => {
                Self::Constraint(db.message().to_owned())
            }
            _ => Self::Sqlx(e),
        }
    }
}

impl RepoError {
    pub fn not_found(id: &str) -> Self {
        Self::NotFound { id: id.to_owned() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Persistence contract for products (substitutable in tests)
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product and return its generated id.
    async fn insert(&self, req: &ProductRequest) -> Result<Uuid, RepoError>;

    /// Overwrite name and price of an active product, refreshing `updated_at`.
    async fn update(&self, id: &str, req: &ProductRequest) -> Result<(), RepoError>;

    /// Soft-delete an active product.
    async fn delete(&self, id: &str) -> Result<(), RepoError>;

    /// All active products, oldest first.
    async fn get_all(&self) -> Result<Vec<Product>, RepoError>;

    /// A single active product.
    async fn get_by_id(&self, id: &str) -> Result<Product, RepoError>;
}

/// Mirrors the table's `CHECK (price >= 0)` for stores without one.
pub(crate) fn check_price(req: &ProductRequest) -> Result<(), RepoError> {
    if req.price < 0.0 || req.price.is_nan() {
        return Err(RepoError::Constraint(format!(
            "price must be non-negative, got {}",
            req.price
        )));
    }
    Ok(())
}

/// Path ids are opaque strings; anything that isn't a UUID can't match a row.
pub(crate) fn parse_id(id: &str) -> Result<Uuid, RepoError> {
    Uuid::parse_str(id).map_err(|_| RepoError::not_found(id))
}
