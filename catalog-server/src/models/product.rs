//! Product entity and its write payload

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Product record from database
///
/// `deleted_at` is never serialized: only active rows leave the repository.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Build a fresh, active product stamped with `now`.
    pub fn new(req: &ProductRequest, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: req.name.clone(),
            price: req.price,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }
}

/// Body of POST /product and PATCH /product/{id}
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProductRequest {
    pub name: String,
    pub price: f64,
}
