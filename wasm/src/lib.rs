//! WebAssembly module for the AgriMarket browser demo
//!
//! Runs the same directory store as the server inside the page:
//! - Farmer search and filtering
//! - Farmer registration
//! - Reviews with live rating updates
//! - Order placement and cancellation
//!
//! Values cross into JavaScript as JSON strings; failures become JS `Error`
//! objects carrying a message suitable for showing to the user.

use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::{Directory, DirectoryError, FarmerQuery};

use shared::require_text;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    log("AgriMarket directory ready");
}

fn log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

fn to_js_error(err: DirectoryError) -> JsValue {
    js_sys::Error::new(&user_message(&err)).into()
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Message shown in the page for a failed action
pub fn user_message(err: &DirectoryError) -> String {
    match err {
        DirectoryError::Validation { field, .. } if field == "stars" => {
            "Please choose a rating from 1 to 5.".to_string()
        }
        DirectoryError::Validation { field, .. }
            if matches!(field.as_str(), "buyerName" | "buyerEmail" | "orderDetails") =>
        {
            "Please fill all order fields.".to_string()
        }
        DirectoryError::Validation { field, .. }
            if matches!(field.as_str(), "farmerId" | "user" | "comment") =>
        {
            "Please fill all review fields.".to_string()
        }
        DirectoryError::Validation { .. } => "Please fill all registration fields.".to_string(),
        DirectoryError::NotFound(resource) => format!("{} not found.", resource),
    }
}

/// Number of highlighted stars for a rating
#[wasm_bindgen(js_name = filledStars)]
pub fn filled_stars_for(rating: f64) -> u8 {
    let rating = Decimal::try_from(rating).unwrap_or(Decimal::ZERO);
    filled_stars(rating)
}

/// The in-page directory
#[wasm_bindgen]
pub struct AgriMarket {
    directory: Directory,
}

#[wasm_bindgen]
impl AgriMarket {
    /// A directory holding the demo farmers
    #[wasm_bindgen(constructor)]
    pub fn new() -> AgriMarket {
        Self {
            directory: Directory::seeded(),
        }
    }

    /// A directory with no farmers
    pub fn empty() -> AgriMarket {
        Self {
            directory: Directory::new(),
        }
    }

    /// Farmers matching the criteria, as a JSON array
    #[wasm_bindgen(js_name = listFarmers)]
    pub fn list_farmers_json(
        &self,
        search: Option<String>,
        location: Option<String>,
        produce: Option<String>,
    ) -> Result<String, JsValue> {
        let query = FarmerQuery {
            search,
            location,
            produce,
        };
        to_json(&self.directory.list_farmers(&query))
    }

    /// One farmer profile as JSON, or undefined
    #[wasm_bindgen(js_name = farmer)]
    pub fn farmer_json(&self, id: u32) -> Result<Option<String>, JsValue> {
        self.directory.farmer(id).map(to_json).transpose()
    }

    /// Register a farmer from the registration form's JSON
    #[wasm_bindgen(js_name = registerFarmer)]
    pub fn register_farmer_json(&mut self, form_json: &str) -> Result<String, JsValue> {
        let form: RegisterFarmer = serde_json::from_str(form_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid registration JSON: {}", e)))?;
        let farmer = self.register_farmer(form).map_err(to_js_error)?;
        log(&format!("Registered farmer {} ({})", farmer.id, farmer.name));
        to_json(&farmer)
    }

    /// Add a review; returns the updated farmer as JSON
    #[wasm_bindgen(js_name = addReview)]
    pub fn add_review_json(
        &mut self,
        farmer_id: u32,
        user: &str,
        comment: &str,
        stars: u8,
    ) -> Result<String, JsValue> {
        let farmer = self
            .add_review(farmer_id, user, comment, stars)
            .map_err(to_js_error)?;
        log(&format!("Farmer {} rating is now {}", farmer.id, farmer.rating));
        to_json(&farmer)
    }

    /// Place an order; returns the order as JSON
    ///
    /// The email must be filled in but is only used for the confirmation.
    #[wasm_bindgen(js_name = placeOrder)]
    pub fn place_order_json(
        &mut self,
        farmer_id: u32,
        buyer: &str,
        email: &str,
        details: &str,
    ) -> Result<String, JsValue> {
        let order = self
            .place_order(farmer_id, buyer, email, details)
            .map_err(to_js_error)?;
        log(&format!(
            "Order sent to {}. We will contact you at {}.",
            order.farmer,
            email.trim()
        ));
        to_json(&order)
    }

    /// All orders as a JSON array
    #[wasm_bindgen(js_name = orders)]
    pub fn orders_json(&self) -> Result<String, JsValue> {
        to_json(&self.directory.orders())
    }

    /// Cancel the order at a list position; returns the removed order
    #[wasm_bindgen(js_name = cancelOrder)]
    pub fn cancel_order_json(&mut self, index: usize) -> Result<String, JsValue> {
        let order = self.cancel_order(index).map_err(to_js_error)?;
        log("Order cancelled.");
        to_json(&order)
    }
}

impl AgriMarket {
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn register_farmer(&mut self, form: RegisterFarmer) -> Result<Farmer, DirectoryError> {
        self.directory.register_farmer(form)
    }

    pub fn add_review(
        &mut self,
        farmer_id: u32,
        user: &str,
        comment: &str,
        stars: u8,
    ) -> Result<Farmer, DirectoryError> {
        self.directory.add_review(NewReview {
            farmer_id: Some(NumericInput::from(farmer_id)),
            user: Some(user.to_string()),
            comment: Some(comment.to_string()),
            stars: Some(NumericInput::Integer(i64::from(stars))),
        })
    }

    pub fn place_order(
        &mut self,
        farmer_id: u32,
        buyer: &str,
        email: &str,
        details: &str,
    ) -> Result<Order, DirectoryError> {
        require_text("buyerEmail", Some(email))?;
        self.directory
            .place_order(OrderRequest::without_email(farmer_id, buyer, details))
    }

    pub fn cancel_order(&mut self, index: usize) -> Result<Order, DirectoryError> {
        self.directory.cancel_order_at(index)
    }
}

impl Default for AgriMarket {
    fn default() -> Self {
        Self::new()
    }
}
