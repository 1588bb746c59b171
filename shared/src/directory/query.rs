//! Farmer search and filtering

use serde::{Deserialize, Serialize};

use super::Directory;
use crate::models::Farmer;

/// Optional criteria for listing farmers; all given criteria must match
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FarmerQuery {
    /// Case-insensitive substring of name, location or any produce category
    pub search: Option<String>,
    /// Exact location, ignoring case
    pub location: Option<String>,
    /// Exact produce category, ignoring case
    pub produce: Option<String>,
}

impl FarmerQuery {
    pub fn search(term: &str) -> Self {
        Self {
            search: Some(term.to_string()),
            ..Self::default()
        }
    }

    pub fn location(location: &str) -> Self {
        Self {
            location: Some(location.to_string()),
            ..Self::default()
        }
    }

    pub fn produce(produce: &str) -> Self {
        Self {
            produce: Some(produce.to_string()),
            ..Self::default()
        }
    }

    /// True when no criterion constrains the listing
    pub fn is_empty(&self) -> bool {
        criterion(&self.search).is_none()
            && criterion(&self.location).is_none()
            && criterion(&self.produce).is_none()
    }

    pub fn matches(&self, farmer: &Farmer) -> bool {
        if let Some(term) = criterion(&self.search) {
            let hit = contains_ignore_case(&farmer.name, &term)
                || contains_ignore_case(&farmer.location, &term)
                || farmer.produce.iter().any(|p| contains_ignore_case(p, &term));
            if !hit {
                return false;
            }
        }

        if let Some(location) = criterion(&self.location) {
            if farmer.location.to_lowercase() != location {
                return false;
            }
        }

        if let Some(produce) = criterion(&self.produce) {
            if !farmer.produce.iter().any(|p| p.to_lowercase() == produce) {
                return false;
            }
        }

        true
    }
}

/// Lowercased criterion; empty strings impose no constraint
fn criterion(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(str::to_lowercase)
}

fn contains_ignore_case(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

impl Directory {
    /// Farmers matching the query, in directory order
    pub fn list_farmers(&self, query: &FarmerQuery) -> Vec<Farmer> {
        if query.is_empty() {
            return self.farmers.clone();
        }
        self.farmers
            .iter()
            .filter(|farmer| query.matches(farmer))
            .cloned()
            .collect()
    }
}
