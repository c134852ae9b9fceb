//! Product repository
//!
//! Direct single-statement reads and writes; no transaction needed.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::models::ProductName;

/// Product record from database
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub stock_quantity: i32,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Product not found")]
    ProductNotFound { id: i32 },

    #[error("Not enough stock")]
    InsufficientStock { requested: i32, available: i32 },
}

/// Product repository
pub struct ProductRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a product, returning the stored row with its generated id.
    ///
    /// Price and stock are stored as given; negative stock is rejected by
    /// the column CHECK and surfaces as a constraint violation.
    pub async fn create(
        &self,
        name: ProductName,
        price: Decimal,
        stock_quantity: i32,
    ) -> Result<Product, DbError> {
        let product: Product = sqlx::query_as(
            r#"
            INSERT INTO products (name, price, stock_quantity)
            VALUES ($1, $2, $3)
            RETURNING id, name, price, stock_quantity
            "#,
        )
        .bind(name.as_str())
        .bind(price)
        .bind(stock_quantity)
        .fetch_one(self.pool)
        .await?;

        Ok(product)
    }

    /// List all products. Row order is whatever the database returns.
    pub async fn list(&self) -> Result<Vec<Product>, DbError> {
        let products = sqlx::query_as("SELECT id, name, price, stock_quantity FROM products")
            .fetch_all(self.pool)
            .await?;

        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p orderdesk-server -- --ignored

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = PgPool::connect(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        pool
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn created_product_appears_in_listing() {
        let pool = test_pool().await;
        let repo = ProductRepo::new(&pool);

        let name = ProductName::new("Widget").unwrap();
        let price: Decimal = "1.50".parse().unwrap();
        let created = repo.create(name, price, 100).await.expect("create failed");

        assert!(created.id > 0);
        assert_eq!(created.name, "Widget");
        assert_eq!(created.price, price);
        assert_eq!(created.stock_quantity, 100);

        let listed = repo.list().await.expect("list failed");
        let found = listed
            .iter()
            .find(|p| p.id == created.id)
            .expect("created product missing from listing");

        assert_eq!(found.name, created.name);
        assert_eq!(found.price, created.price);
        assert_eq!(found.stock_quantity, created.stock_quantity);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn negative_stock_rejected_by_constraint() {
        let pool = test_pool().await;
        let repo = ProductRepo::new(&pool);

        let name = ProductName::new("Backorder").unwrap();
        let price: Decimal = "2.00".parse().unwrap();
        let err = repo.create(name, price, -1).await.unwrap_err();

        assert!(matches!(err, DbError::Sqlx(_)));
    }
}
