//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::services::DirectoryService;
use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub environment: String,
    pub farmers: usize,
    pub orders: usize,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let stats = DirectoryService::new(state.directory.clone()).stats().await;

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.config.environment.clone(),
        farmers: stats.farmers,
        orders: stats.orders,
    })
}
