//! Business logic services for the AgriMarket server

pub mod directory;

pub use directory::{DirectoryService, SharedDirectory};
