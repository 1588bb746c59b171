//! Submitted forms for directory mutations
//!
//! Fields are optional so a missing field surfaces as a validation error
//! naming that field rather than a deserialization failure.

use serde::{Deserialize, Serialize};

use crate::error::DirectoryResult;
use crate::types::NumericInput;
use crate::validation::{require_id, require_text};

/// Farmer registration form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterFarmer {
    pub name: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub description: Option<String>,
    /// Comma-joined produce categories
    pub produce: Option<String>,
    pub delivery_radius: Option<NumericInput>,
}

/// Review submission form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub farmer_id: Option<NumericInput>,
    pub user: Option<String>,
    pub comment: Option<String>,
    pub stars: Option<NumericInput>,
}

/// Order submission form as posted by API clients
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub farmer_id: Option<NumericInput>,
    pub buyer_name: Option<String>,
    pub buyer_email: Option<String>,
    pub order_details: Option<String>,
}

/// A checked order ready to be placed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub farmer_id: i64,
    pub buyer: String,
    pub email: Option<String>,
    pub details: String,
}

impl NewOrder {
    /// Check every field is present; the email is required on this path
    pub fn validate(&self) -> DirectoryResult<OrderRequest> {
        let farmer_id = require_id("farmerId", self.farmer_id.as_ref())?;
        let buyer = require_text("buyerName", self.buyer_name.as_deref())?;
        let email = require_text("buyerEmail", self.buyer_email.as_deref())?;
        let details = require_text("orderDetails", self.order_details.as_deref())?;

        Ok(OrderRequest {
            farmer_id,
            buyer,
            email: Some(email),
            details,
        })
    }
}

impl OrderRequest {
    /// Order without a contact email, as placed from the browser demo
    pub fn without_email(farmer_id: u32, buyer: &str, details: &str) -> Self {
        Self {
            farmer_id: i64::from(farmer_id),
            buyer: buyer.to_string(),
            email: None,
            details: details.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DirectoryError;

    #[test]
    fn test_register_form_from_json() {
        let form: RegisterFarmer = serde_json::from_str(
            r#"{"name":"A","location":"B","phone":"1","description":"D","produce":"Eggs, Milk","deliveryRadius":"12"}"#,
        )
        .unwrap();
        assert_eq!(form.name.as_deref(), Some("A"));
        assert_eq!(form.delivery_radius, Some(NumericInput::Text("12".to_string())));
    }

    #[test]
    fn test_missing_fields_deserialize_to_none() {
        let form: NewReview = serde_json::from_str(r#"{"farmerId": 1}"#).unwrap();
        assert_eq!(form.farmer_id, Some(NumericInput::Integer(1)));
        assert!(form.user.is_none());
        assert!(form.stars.is_none());
    }

    #[test]
    fn test_new_order_validate() {
        let form = NewOrder {
            farmer_id: Some(NumericInput::from("2")),
            buyer_name: Some("Rahul".to_string()),
            buyer_email: Some("rahul@example.com".to_string()),
            order_details: Some("3 kg mangoes".to_string()),
        };
        let request = form.validate().unwrap();
        assert_eq!(request.farmer_id, 2);
        assert_eq!(request.email.as_deref(), Some("rahul@example.com"));
    }

    #[test]
    fn test_new_order_requires_email() {
        let form = NewOrder {
            farmer_id: Some(NumericInput::Integer(1)),
            buyer_name: Some("Rahul".to_string()),
            buyer_email: None,
            order_details: Some("3 kg mangoes".to_string()),
        };
        assert_eq!(form.validate(), Err(DirectoryError::missing("buyerEmail")));
    }
}
