//! Directory mutations: registration, reviews, and orders
//!
//! Each operation validates the whole form before touching the store, so a
//! failed call never leaves a partial change behind.

use super::Directory;
use crate::error::{DirectoryError, DirectoryResult};
use crate::models::{
    Farmer, NewReview, Order, OrderRequest, OrderStatus, RegisterFarmer, Review,
};
use crate::validation::{
    require_delivery_radius, require_id, require_produce, require_stars, require_text,
};

impl Directory {
    /// Register a new farmer with no reviews and the default schedule
    pub fn register_farmer(&mut self, form: RegisterFarmer) -> DirectoryResult<Farmer> {
        let name = require_text("name", form.name.as_deref())?;
        let location = require_text("location", form.location.as_deref())?;
        let phone = require_text("phone", form.phone.as_deref())?;
        let description = require_text("description", form.description.as_deref())?;
        let produce = require_produce("produce", form.produce.as_deref())?;
        let delivery_radius =
            require_delivery_radius("deliveryRadius", form.delivery_radius.as_ref())?;

        let farmer = Farmer::new(
            self.allocate_farmer_id(),
            name,
            location,
            phone,
            description,
            produce,
            delivery_radius,
        );
        self.farmers.push(farmer.clone());

        Ok(farmer)
    }

    /// Append a review and return the farmer with the updated rating
    pub fn add_review(&mut self, form: NewReview) -> DirectoryResult<Farmer> {
        let farmer_id = require_id("farmerId", form.farmer_id.as_ref())?;
        let user = require_text("user", form.user.as_deref())?;
        let comment = require_text("comment", form.comment.as_deref())?;
        let stars = require_stars("stars", form.stars.as_ref())?;

        let farmer = self
            .farmer_mut(farmer_id)
            .ok_or_else(|| DirectoryError::not_found("Farmer"))?;
        farmer.add_review(Review::new(user, comment, stars));

        Ok(farmer.clone())
    }

    /// Place a pending order against an existing farmer
    pub fn place_order(&mut self, request: OrderRequest) -> DirectoryResult<Order> {
        let buyer = require_text("buyerName", Some(request.buyer.as_str()))?;
        let email = match request.email.as_deref() {
            Some(email) => Some(require_text("buyerEmail", Some(email))?),
            None => None,
        };
        let details = require_text("orderDetails", Some(request.details.as_str()))?;

        let farmer_name = u32::try_from(request.farmer_id)
            .ok()
            .and_then(|id| self.farmer(id))
            .map(|farmer| farmer.name.clone())
            .ok_or_else(|| DirectoryError::not_found("Farmer"))?;

        let order = Order {
            id: self.allocate_order_id(),
            farmer: farmer_name,
            buyer,
            email,
            details,
            status: OrderStatus::Pending,
        };
        self.orders.push(order.clone());

        Ok(order)
    }

    /// Remove an order by id, returning it
    pub fn cancel_order(&mut self, order_id: u32) -> DirectoryResult<Order> {
        let index = self
            .orders
            .iter()
            .position(|o| o.id == order_id)
            .ok_or_else(|| DirectoryError::not_found("Order"))?;

        Ok(self.orders.remove(index))
    }

    /// Remove the order at a list position, as shown in the browser demo
    pub fn cancel_order_at(&mut self, index: usize) -> DirectoryResult<Order> {
        if index >= self.orders.len() {
            return Err(DirectoryError::not_found("Order"));
        }
        Ok(self.orders.remove(index))
    }
}
