//! Route definitions for the AgriMarket API

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/farmers", farmer_routes())
        .route("/reviews", post(handlers::add_review))
        .nest("/orders", order_routes())
}

/// Farmer directory routes
fn farmer_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_farmers).post(handlers::register_farmer),
        )
        .route("/:farmer_id", get(handlers::get_farmer))
}

/// Order routes
fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_orders).post(handlers::place_order))
        .route("/:order_id", delete(handlers::cancel_order))
}
