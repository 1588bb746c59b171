//! Review and rating models

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

pub const MIN_STARS: u8 = 1;
pub const MAX_STARS: u8 = 5;

/// A buyer-submitted review attached to a farmer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    pub user: String,
    pub comment: String,
    pub stars: u8,
}

impl Review {
    pub fn new(user: impl Into<String>, comment: impl Into<String>, stars: u8) -> Self {
        Self {
            user: user.into(),
            comment: comment.into(),
            stars,
        }
    }
}

/// Rating shown for a farmer with no reviews
pub fn default_rating() -> Decimal {
    Decimal::new(50, 1)
}

/// Mean star value rounded to one decimal place
pub fn average_rating(reviews: &[Review]) -> Decimal {
    if reviews.is_empty() {
        return default_rating();
    }

    let total: u64 = reviews.iter().map(|r| u64::from(r.stars)).sum();
    let mean = Decimal::from(total) / Decimal::from(reviews.len() as u64);
    mean.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Number of highlighted stars when rendering a rating
pub fn filled_stars(rating: Decimal) -> u8 {
    if rating <= Decimal::ZERO {
        return 0;
    }
    rating
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u8()
        .map_or(MAX_STARS, |stars| stars.min(MAX_STARS))
}
