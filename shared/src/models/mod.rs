//! Domain models for the AgriMarket directory

mod farmer;
mod forms;
mod order;
mod review;

pub use farmer::*;
pub use forms::*;
pub use order::*;
pub use review::*;
