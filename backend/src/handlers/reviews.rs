//! Review HTTP handlers

use axum::{extract::State, http::StatusCode, Json};
use shared::NewReview;

use super::MessageResponse;
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::services::DirectoryService;
use crate::AppState;

/// Add a review to a farmer
pub async fn add_review(
    State(state): State<AppState>,
    AppJson(form): AppJson<NewReview>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let service = DirectoryService::new(state.directory.clone());
    service.add_review(form).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Review added successfully")),
    ))
}
