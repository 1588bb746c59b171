//! Order HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use shared::{NewOrder, Order};

use super::MessageResponse;
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::services::DirectoryService;
use crate::AppState;

/// List all orders
pub async fn list_orders(State(state): State<AppState>) -> Json<Vec<Order>> {
    let service = DirectoryService::new(state.directory.clone());
    Json(service.list_orders().await)
}

/// Place a new order with a farmer
pub async fn place_order(
    State(state): State<AppState>,
    AppJson(form): AppJson<NewOrder>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let service = DirectoryService::new(state.directory.clone());
    let order = service.place_order(form).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// Cancel an order
pub async fn cancel_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let service = DirectoryService::new(state.directory.clone());
    service.cancel_order(&order_id).await?;
    Ok(Json(MessageResponse::new("Order cancelled successfully")))
}
