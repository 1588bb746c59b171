//! Request extractors

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body whose rejections are reported in the API error format
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
