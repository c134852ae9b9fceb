//! Product endpoints
//!
//! Any failure here answers 500 with `{"error":"Server error"}`; the
//! underlying cause is logged, not leaked.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::db::repos::{Product, ProductRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::ProductName;

/// Create product request
#[derive(Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: Decimal,
    pub stock_quantity: i32,
}

/// POST /products - create a product
async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let name = ProductName::new(&req.name)?;
    let product = ProductRepo::new(&state.pool)
        .create(name, req.price, req.stock_quantity)
        .await
        .map_err(ApiError::Catalog)?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /products - list all products
async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = ProductRepo::new(&state.pool)
        .list()
        .await
        .map_err(ApiError::Catalog)?;

    Ok(Json(products))
}

/// Product routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/products", get(list_products).post(create_product))
}
