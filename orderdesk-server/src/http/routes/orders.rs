//! Order endpoint
//!
//! Every placement failure answers 400 with the failure message in the
//! body, storage faults included.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;

use crate::db::repos::{Order, OrderRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::OrderQuantity;

/// Place order request
#[derive(Deserialize)]
pub struct PlaceOrderRequest {
    pub product_id: i32,
    pub quantity: i32,
}

/// POST /orders - place an order against a product's stock
async fn place_order(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PlaceOrderRequest>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let quantity = OrderQuantity::new(req.quantity)?;
    let order = OrderRepo::new(&state.pool)
        .place(req.product_id, quantity)
        .await
        .map_err(ApiError::Order)?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// Order routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/orders", post(place_order))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_requires_all_fields() {
        let result: Result<PlaceOrderRequest, _> = serde_json::from_str(r#"{"product_id":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn order_serializes_flat() {
        let order = Order {
            id: 7,
            product_id: 1,
            quantity: 3,
        };

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 7, "product_id": 1, "quantity": 3 })
        );
    }
}
