//! AgriMarket server entry point

use agrimarket_backend::{config::Config, create_app, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "agrimarket_backend=debug,agrimarket_server=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting AgriMarket Server");
    tracing::info!("Environment: {}", config.environment);

    let host = config.server.host.clone();
    let port = config.server.port;

    // Create application state
    let state = AppState::new(config);
    {
        let directory = state.directory.read().await;
        tracing::info!(
            farmers = directory.farmer_count(),
            "Directory store initialized"
        );
    }

    // Build application
    let app = create_app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
