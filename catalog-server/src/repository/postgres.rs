//! PostgreSQL product repository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use super::{parse_id, ProductRepository, RepoError};
use crate::models::{Product, ProductRequest};

const SELECT_ACTIVE: &str = r#"
    SELECT id, name, price, created_at, updated_at, deleted_at
    FROM products
    WHERE deleted_at IS NULL
"#;

/// Product repository backed by a shared connection pool
#[derive(Clone)]
pub struct PgProductRepo {
    pool: PgPool,
}

impl PgProductRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepo {
    async fn insert(&self, req: &ProductRequest) -> Result<Uuid, RepoError> {
        let product = Product::new(req, Utc::now());

        sqlx::query(
            r#"
            INSERT INTO products (id, name, price, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(product.price)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        debug!(id = %product.id, "inserted product");
        Ok(product.id)
    }

    async fn update(&self, id: &str, req: &ProductRequest) -> Result<(), RepoError> {
        let uuid = parse_id(id)?;

        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = $2, price = $3, updated_at = $4
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(uuid)
        .bind(&req.name)
        .bind(req.price)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::not_found(id));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), RepoError> {
        let uuid = parse_id(id)?;

        let result = sqlx::query(
            "UPDATE products SET deleted_at = $2 WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(uuid)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::not_found(id));
        }
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Product>, RepoError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "{SELECT_ACTIVE} ORDER BY created_at ASC, id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn get_by_id(&self, id: &str) -> Result<Product, RepoError> {
        let uuid = parse_id(id)?;

        sqlx::query_as::<_, Product>(&format!("{SELECT_ACTIVE} AND id = $1"))
            .bind(uuid)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepoError::not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};

    // Integration tests - run with DATABASE_URL set
    // cargo test -p catalog-server -- --ignored

    async fn repo() -> PgProductRepo {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        PgProductRepo::new(pool)
    }

    fn widget(name: &str, price: f64) -> ProductRequest {
        ProductRequest {
            name: name.to_string(),
            price,
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_then_get_round_trips() {
        let repo = repo().await;
        let id = repo.insert(&widget("Widget", 10000.0)).await.unwrap();

        let product = repo.get_by_id(&id.to_string()).await.unwrap();
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, 10000.0);
        assert!(product.deleted_at.is_none());
        assert!(product.created_at <= product.updated_at);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_refreshes_updated_at() {
        let repo = repo().await;
        let id = repo.insert(&widget("Widget", 10000.0)).await.unwrap().to_string();
        let before = repo.get_by_id(&id).await.unwrap();

        repo.update(&id, &widget("Widget2", 15000.0)).await.unwrap();

        let after = repo.get_by_id(&id).await.unwrap();
        assert_eq!(after.name, "Widget2");
        assert_eq!(after.price, 15000.0);
        assert!(after.updated_at >= before.updated_at);
        assert!(after.updated_at > after.created_at);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn soft_deleted_rows_are_hidden() {
        let repo = repo().await;
        let id = repo.insert(&widget("Doomed", 1.0)).await.unwrap();
        let id_str = id.to_string();

        repo.delete(&id_str).await.unwrap();

        assert!(repo.get_by_id(&id_str).await.unwrap_err().is_not_found());
        assert!(repo.update(&id_str, &widget("x", 1.0)).await.unwrap_err().is_not_found());
        assert!(repo.delete(&id_str).await.unwrap_err().is_not_found());
        assert!(repo.get_all().await.unwrap().iter().all(|p| p.id != id));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn negative_price_violates_constraint() {
        let repo = repo().await;
        let err = repo.insert(&widget("Broken", -1.0)).await.unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));
    }
}
