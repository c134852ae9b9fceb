//! Schema migrations
//!
//! Idempotent CREATE TABLE IF NOT EXISTS statements, safe to run against a
//! database where the schema already exists.

use sqlx::PgPool;

use super::repos::DbError;

/// Run all migrations
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running schema migrations...");

    // Products table. The CHECK backs up the stock invariant; the locking
    // transaction in OrderRepo is what upholds it under concurrency.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            price NUMERIC(12,2) NOT NULL,
            stock_quantity INTEGER NOT NULL CHECK (stock_quantity >= 0)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Orders table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS orders (
            id SERIAL PRIMARY KEY,
            product_id INTEGER NOT NULL REFERENCES products(id),
            quantity INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_orders_product ON orders(product_id)")
        .execute(pool)
        .await?;

    Ok(())
}
