//! In-memory directory of farmers and orders
//!
//! The [`Directory`] is the single owner of every record. It lives for as long
//! as the process (or browser page) that created it; nothing is persisted.

mod mutation;
mod query;
mod seed;

pub use query::FarmerQuery;
pub use seed::seed_farmers;

use crate::models::{Farmer, Order};

/// Farmer and order store
#[derive(Debug, Clone)]
pub struct Directory {
    farmers: Vec<Farmer>,
    orders: Vec<Order>,
    next_farmer_id: u32,
    next_order_id: u32,
}

impl Directory {
    /// An empty directory
    pub fn new() -> Self {
        Self::with_farmers(Vec::new())
    }

    /// A directory holding the demo farmers
    pub fn seeded() -> Self {
        Self::with_farmers(seed_farmers())
    }

    /// A directory starting from the given farmers, with ids continuing after
    /// the highest existing id
    pub fn with_farmers(farmers: Vec<Farmer>) -> Self {
        let next_farmer_id = farmers.iter().map(|f| f.id).max().unwrap_or(0) + 1;
        Self {
            farmers,
            orders: Vec::new(),
            next_farmer_id,
            next_order_id: 1,
        }
    }

    pub fn farmers(&self) -> &[Farmer] {
        &self.farmers
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Look up a farmer profile by id
    pub fn farmer(&self, id: u32) -> Option<&Farmer> {
        self.farmers.iter().find(|f| f.id == id)
    }

    pub fn order(&self, id: u32) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn farmer_count(&self) -> usize {
        self.farmers.len()
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    fn farmer_mut(&mut self, id: i64) -> Option<&mut Farmer> {
        let id = u32::try_from(id).ok()?;
        self.farmers.iter_mut().find(|f| f.id == id)
    }

    fn allocate_farmer_id(&mut self) -> u32 {
        let id = self.next_farmer_id;
        self.next_farmer_id += 1;
        id
    }

    fn allocate_order_id(&mut self) -> u32 {
        let id = self.next_order_id;
        self.next_order_id += 1;
        id
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}
