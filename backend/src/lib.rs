//! AgriMarket - Backend Server
//!
//! A directory of local farmers with reviews and lightweight ordering,
//! served from an in-memory store.

use std::sync::Arc;

use axum::{routing::get, Router};
use shared::Directory;
use tokio::sync::RwLock;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;
pub use services::SharedDirectory;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: SharedDirectory,
    pub config: Arc<Config>,
}

impl AppState {
    /// Build state with a fresh directory, seeded if the config asks for it
    pub fn new(config: Config) -> Self {
        let directory = if config.directory.seed {
            Directory::seeded()
        } else {
            Directory::new()
        };
        Self::with_directory(directory, config)
    }

    pub fn with_directory(directory: Directory, config: Config) -> Self {
        Self {
            directory: Arc::new(RwLock::new(directory)),
            config: Arc::new(config),
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "AgriMarket API v1.0"
}
