//! Order repository
//!
//! Order placement is the one multi-statement unit of work in the system.
//! The product row is locked for the duration of the transaction, so
//! concurrent orders against the same product are serialized and stock
//! never goes negative.

use serde::Serialize;
use sqlx::{FromRow, PgPool, Postgres, Row, Transaction};

use super::DbError;
use crate::models::OrderQuantity;

/// Order record from database
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
    pub id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

/// Order repository
pub struct OrderRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Place an order: check stock, decrement it, and record the order as
    /// one atomic unit.
    ///
    /// The `FOR UPDATE` read holds the product row lock until the
    /// transaction ends, so a racing order for the same product waits and
    /// then sees the committed decrement. A caller that loses the race
    /// gets [`DbError::InsufficientStock`] and may resubmit.
    ///
    /// No retries are performed here.
    pub async fn place(&self, product_id: i32, quantity: OrderQuantity) -> Result<Order, DbError> {
        let mut tx = self.pool.begin().await?;

        let order = match place_in_tx(&mut tx, product_id, quantity).await {
            Ok(order) => order,
            Err(err) => {
                // Roll back before surfacing; a failed rollback is logged
                // and must not mask the original error.
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::warn!(error = %rollback_err, "transaction rollback failed");
                }
                return Err(err);
            }
        };

        tx.commit().await?;
        Ok(order)
    }
}

/// Steps of placement that run inside the caller's transaction.
async fn place_in_tx(
    tx: &mut Transaction<'_, Postgres>,
    product_id: i32,
    quantity: OrderQuantity,
) -> Result<Order, DbError> {
    // Lock the product row until commit or rollback.
    let row = sqlx::query("SELECT price, stock_quantity FROM products WHERE id = $1 FOR UPDATE")
        .bind(product_id)
        .fetch_optional(&mut **tx)
        .await?;

    let Some(row) = row else {
        return Err(DbError::ProductNotFound { id: product_id });
    };

    let available: i32 = row.get("stock_quantity");
    if available < quantity.get() {
        return Err(DbError::InsufficientStock {
            requested: quantity.get(),
            available,
        });
    }

    sqlx::query("UPDATE products SET stock_quantity = stock_quantity - $1 WHERE id = $2")
        .bind(quantity.get())
        .bind(product_id)
        .execute(&mut **tx)
        .await?;

    let order: Order = sqlx::query_as(
        r#"
        INSERT INTO orders (product_id, quantity)
        VALUES ($1, $2)
        RETURNING id, product_id, quantity
        "#,
    )
    .bind(product_id)
    .bind(quantity.get())
    .fetch_one(&mut **tx)
    .await?;

    Ok(order)
}
