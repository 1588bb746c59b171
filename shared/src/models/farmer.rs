//! Farmer profile models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::review::{average_rating, default_rating, Review};

/// Availability given to every newly registered farmer
pub const DEFAULT_AVAILABILITY: &str = "Mon-Sat";

/// Calendar note given to every newly registered farmer
pub const DEFAULT_CALENDAR: &str = "Available all week";

/// A registered produce seller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Farmer {
    pub id: u32,
    pub name: String,
    pub location: String,
    pub phone: String,
    pub description: String,
    /// Produce categories in the order the farmer listed them
    pub produce: Vec<String>,
    /// Delivery radius in kilometers
    #[serde(with = "rust_decimal::serde::float")]
    pub delivery_radius: Decimal,
    /// Mean review stars, one decimal place
    #[serde(with = "rust_decimal::serde::float")]
    pub rating: Decimal,
    pub reviews: Vec<Review>,
    pub availability: String,
    pub calendar: String,
}

impl Farmer {
    /// Build a profile with no reviews and the default schedule
    pub fn new(
        id: u32,
        name: String,
        location: String,
        phone: String,
        description: String,
        produce: Vec<String>,
        delivery_radius: Decimal,
    ) -> Self {
        Self {
            id,
            name,
            location,
            phone,
            description,
            produce,
            delivery_radius,
            rating: default_rating(),
            reviews: Vec::new(),
            availability: DEFAULT_AVAILABILITY.to_string(),
            calendar: DEFAULT_CALENDAR.to_string(),
        }
    }

    /// Append a review and recompute the rating
    pub fn add_review(&mut self, review: Review) {
        self.reviews.push(review);
        self.rating = average_rating(&self.reviews);
    }

    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }
}
