//! Directory service wrapping the shared in-memory store
//!
//! Each call takes the store lock once, for the duration of a single
//! operation. Requests are not isolated from one another beyond that.

use std::sync::Arc;

use shared::{
    Directory, Farmer, FarmerQuery, NewOrder, NewReview, Order, RegisterFarmer,
};
use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};

/// The store shared by all request handlers
pub type SharedDirectory = Arc<RwLock<Directory>>;

/// Directory service for farmer and order operations
#[derive(Clone)]
pub struct DirectoryService {
    directory: SharedDirectory,
}

/// Store size, reported by the health endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryStats {
    pub farmers: usize,
    pub orders: usize,
}

impl DirectoryService {
    /// Create a new DirectoryService instance
    pub fn new(directory: SharedDirectory) -> Self {
        Self { directory }
    }

    /// List farmers matching the given criteria
    pub async fn list_farmers(&self, query: &FarmerQuery) -> Vec<Farmer> {
        let directory = self.directory.read().await;
        let farmers = directory.list_farmers(query);
        tracing::debug!(
            matched = farmers.len(),
            total = directory.farmer_count(),
            "Listed farmers"
        );
        farmers
    }

    /// Get a single farmer profile
    pub async fn get_farmer(&self, farmer_id: &str) -> AppResult<Farmer> {
        let directory = self.directory.read().await;
        farmer_id
            .parse::<u32>()
            .ok()
            .and_then(|id| directory.farmer(id))
            .cloned()
            .ok_or_else(|| AppError::NotFound("Farmer".to_string()))
    }

    /// Register a new farmer
    pub async fn register_farmer(&self, form: RegisterFarmer) -> AppResult<Farmer> {
        let farmer = self.directory.write().await.register_farmer(form)?;
        tracing::info!(
            farmer_id = farmer.id,
            name = %farmer.name,
            location = %farmer.location,
            "Registered farmer"
        );
        Ok(farmer)
    }

    /// Add a review to a farmer, returning the farmer with its new rating
    pub async fn add_review(&self, form: NewReview) -> AppResult<Farmer> {
        let farmer = self.directory.write().await.add_review(form)?;
        tracing::info!(
            farmer_id = farmer.id,
            rating = %farmer.rating,
            reviews = farmer.review_count(),
            "Added review"
        );
        Ok(farmer)
    }

    /// List all orders
    pub async fn list_orders(&self) -> Vec<Order> {
        self.directory.read().await.orders().to_vec()
    }

    /// Place a new order
    pub async fn place_order(&self, form: NewOrder) -> AppResult<Order> {
        let request = form.validate()?;
        let order = self.directory.write().await.place_order(request)?;
        tracing::info!(
            order_id = order.id,
            farmer = %order.farmer,
            status = %order.status,
            "Placed order"
        );
        Ok(order)
    }

    /// Cancel an order by id
    pub async fn cancel_order(&self, order_id: &str) -> AppResult<Order> {
        let order_id = order_id
            .parse::<u32>()
            .map_err(|_| AppError::NotFound("Order".to_string()))?;
        let order = self.directory.write().await.cancel_order(order_id)?;
        tracing::info!(order_id = order.id, "Cancelled order");
        Ok(order)
    }

    pub async fn stats(&self) -> DirectoryStats {
        let directory = self.directory.read().await;
        DirectoryStats {
            farmers: directory.farmer_count(),
            orders: directory.order_count(),
        }
    }
}
