//! HTTP handlers for the AgriMarket API

mod farmers;
mod health;
mod orders;
mod reviews;

pub use farmers::*;
pub use health::*;
pub use orders::*;
pub use reviews::*;

use serde::Serialize;

/// Plain confirmation body for operations that return no entity
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
