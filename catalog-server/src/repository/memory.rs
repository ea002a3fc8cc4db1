//! In-process product repository
//!
//! Keeps soft-deleted rows around exactly like the PostgreSQL table so the
//! upper layers can be exercised without a database.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::{check_price, parse_id, ProductRepository, RepoError};
use crate::models::{Product, ProductRequest};

#[derive(Default)]
pub struct MemoryProductRepo {
    rows: Mutex<Vec<Product>>,
}

impl MemoryProductRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stored row, soft-deleted ones included.
    pub fn all_rows(&self) -> Vec<Product> {
        self.rows.lock().unwrap().clone()
    }

    fn with_active<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut Product) -> T,
    ) -> Result<T, RepoError> {
        let uuid = parse_id(id)?;
        let mut rows = self.rows.lock().unwrap();
        rows.iter_mut()
            .find(|p| p.id == uuid && p.is_active())
            .map(f)
            .ok_or_else(|| RepoError::not_found(id))
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepo {
    async fn insert(&self, req: &ProductRequest) -> Result<Uuid, RepoError> {
        check_price(req)?;
        let product = Product::new(req, Utc::now());
        let id = product.id;
        self.rows.lock().unwrap().push(product);
        Ok(id)
    }

    async fn update(&self, id: &str, req: &ProductRequest) -> Result<(), RepoError> {
        check_price(req)?;
        self.with_active(id, |p| {
            p.name = req.name.clone();
            p.price = req.price;
            p.updated_at = Utc::now();
        })
    }

    async fn delete(&self, id: &str) -> Result<(), RepoError> {
        self.with_active(id, |p| p.deleted_at = Some(Utc::now()))
    }

    async fn get_all(&self) -> Result<Vec<Product>, RepoError> {
        let mut active: Vec<Product> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.is_active())
            .cloned()
            .collect();
        active.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(active)
    }

    async fn get_by_id(&self, id: &str) -> Result<Product, RepoError> {
        self.with_active(id, |p| p.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn req(name: &str, price: f64) -> ProductRequest {
        ProductRequest {
            name: name.to_string(),
            price,
        }
    }

    #[tokio::test]
    async fn insert_then_get_round_trips() {
        let repo = MemoryProductRepo::new();
        let id = repo.insert(&req("Widget", 10000.0)).await.unwrap();

        let product = repo.get_by_id(&id.to_string()).await.unwrap();
        assert_eq!(product.id, id);
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, 10000.0);
        assert!(product.deleted_at.is_none());
    }

    #[tokio::test]
    async fn update_overwrites_fields_and_timestamp() {
        let repo = MemoryProductRepo::new();
        let id = repo.insert(&req("Widget", 10000.0)).await.unwrap().to_string();
        let before = repo.get_by_id(&id).await.unwrap();

        tokio::time::sleep(Duration::from_millis(5)).await;
        repo.update(&id, &req("Widget2", 15000.0)).await.unwrap();

        let after = repo.get_by_id(&id).await.unwrap();
        assert_eq!(after.name, "Widget2");
        assert_eq!(after.price, 15000.0);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at > after.created_at);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let repo = MemoryProductRepo::new();
        let err = repo
            .update(&Uuid::new_v4().to_string(), &req("x", 1.0))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete_is_soft_and_hides_row() {
        let repo = MemoryProductRepo::new();
        let kept = repo.insert(&req("Kept", 1.0)).await.unwrap();
        let gone = repo.insert(&req("Gone", 2.0)).await.unwrap();

        repo.delete(&gone.to_string()).await.unwrap();

        assert!(repo.get_by_id(&gone.to_string()).await.unwrap_err().is_not_found());
        let ids: Vec<Uuid> = repo.get_all().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![kept]);

        // Row is retained with its tombstone
        let rows = repo.all_rows();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().any(|p| p.id == gone && p.deleted_at.is_some()));
    }

    #[tokio::test]
    async fn update_of_soft_deleted_row_is_not_found() {
        let repo = MemoryProductRepo::new();
        let id = repo.insert(&req("Widget", 1.0)).await.unwrap().to_string();
        repo.delete(&id).await.unwrap();

        let err = repo.update(&id, &req("Revived", 2.0)).await.unwrap_err();
        assert!(err.is_not_found());

        // Tombstoned row keeps its old values
        let row = repo.all_rows().into_iter().next().unwrap();
        assert_eq!(row.name, "Widget");
        assert!(row.deleted_at.is_some());
    }

    #[tokio::test]
    async fn negative_price_is_rejected_like_the_table_check() {
        let repo = MemoryProductRepo::new();
        let err = repo.insert(&req("Broken", -1.0)).await.unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));
        assert!(repo.all_rows().is_empty());

        let id = repo.insert(&req("Fine", 1.0)).await.unwrap().to_string();
        let err = repo.update(&id, &req("Fine", -3.0)).await.unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));
        assert_eq!(repo.get_by_id(&id).await.unwrap().price, 1.0);
    }

    #[tokio::test]
    async fn second_delete_is_not_found() {
        let repo = MemoryProductRepo::new();
        let id = repo.insert(&req("Once", 1.0)).await.unwrap().to_string();

        repo.delete(&id).await.unwrap();
        assert!(repo.delete(&id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn get_all_orders_by_creation() {
        let repo = MemoryProductRepo::new();
        let first = repo.insert(&req("a", 1.0)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(2)).await;
        let second = repo.insert(&req("b", 2.0)).await.unwrap();

        let ids: Vec<Uuid> = repo.get_all().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![first, second]);
    }
}
