use std::sync::Arc;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use phone_lookup_bot::aggregator::LookupAggregator;
use phone_lookup_bot::config::Config;
use phone_lookup_bot::handlers::{self, AppState};

/// Main entry point for the application.
///
/// Initializes tracing, loads configuration, constructs the lookup clients,
/// and starts the Axum server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "phone_lookup_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded successfully");

    // Build application state
    let aggregator = LookupAggregator::new(&config)?;
    let app_state = Arc::new(AppState { aggregator });

    let app = handlers::app(app_state)
        // Webhook form payloads are tiny; 64KB is already generous
        .layer(RequestBodyLimitLayer::new(64 * 1024))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
