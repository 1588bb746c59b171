//! Farmer directory HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use shared::{Farmer, FarmerQuery, RegisterFarmer};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::services::DirectoryService;
use crate::AppState;

/// List farmers, optionally filtered by search, location and produce
pub async fn list_farmers(
    State(state): State<AppState>,
    Query(query): Query<FarmerQuery>,
) -> Json<Vec<Farmer>> {
    let service = DirectoryService::new(state.directory.clone());
    Json(service.list_farmers(&query).await)
}

/// Get a specific farmer profile
pub async fn get_farmer(
    State(state): State<AppState>,
    Path(farmer_id): Path<String>,
) -> AppResult<Json<Farmer>> {
    let service = DirectoryService::new(state.directory.clone());
    let farmer = service.get_farmer(&farmer_id).await?;
    Ok(Json(farmer))
}

/// Register a new farmer
pub async fn register_farmer(
    State(state): State<AppState>,
    AppJson(form): AppJson<RegisterFarmer>,
) -> AppResult<(StatusCode, Json<Farmer>)> {
    let service = DirectoryService::new(state.directory.clone());
    let farmer = service.register_farmer(form).await?;
    Ok((StatusCode::CREATED, Json(farmer)))
}
