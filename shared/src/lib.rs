//! Shared types and models for the AgriMarket farmer directory
//!
//! This crate contains the directory store and the query/mutation operations
//! shared between the backend server and the browser demo (via WASM).

pub mod directory;
pub mod error;
pub mod models;
pub mod types;
pub mod validation;

pub use directory::*;
pub use error::*;
pub use models::*;
pub use types::*;
pub use validation::*;
