//! Order models

use serde::{Deserialize, Serialize};

/// A buyer's request to purchase from a farmer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    pub id: u32,
    /// Farmer name at the time the order was placed
    pub farmer: String,
    pub buyer: String,
    /// Contact email; the browser demo does not collect one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub details: String,
    pub status: OrderStatus,
}

/// Order lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "Pending"),
        }
    }
}
