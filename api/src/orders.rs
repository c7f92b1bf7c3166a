//! Order history reads.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{OrderDetail, OrderSummary};

/// `GET /api/orders` — the signed-in user's orders, newest first.
pub async fn my_orders(api: &ApiClient) -> Result<Vec<OrderSummary>, ApiError> {
    api.get("/api/orders").await
}

/// `GET /api/orders/:id`.
pub async fn order_details(api: &ApiClient, order_id: i64) -> Result<OrderDetail, ApiError> {
    api.get(&format!("/api/orders/{order_id}")).await
}
