//! Comercio Catalog API
//!
//! Catalog-management backend for a small commerce domain: categories,
//! suppliers and products over HTTP, with supplier enrichment from the tax
//! registry and a postal-code address lookup.

use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    response::Json,
    routing::get,
    serve, Router,
};
use comercio_database::{initialize_database, PostgresPool, StoreConfig};
use comercio_utils::{init_logging, AppConfig};
use reqwest::Client;
use serde_json::json;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

mod enrichment;
mod handlers;
mod middleware;
mod postal_client;
mod registry_client;
mod routes;

use enrichment::EnrichmentService;
use middleware::request_id_middleware;
use postal_client::PostalClient;
use registry_client::RegistryClient;

#[derive(Clone)]
pub struct AppState {
    pub pool: PostgresPool,
    pub enrichment: EnrichmentService,
    pub config: AppConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|_| {
        eprintln!("Failed to load configuration, using defaults");
        AppConfig::default()
    });

    // Initialize logging
    init_logging(&config.logging)?;
    info!("Starting Comercio Catalog API");

    // Initialize database
    let store_config = StoreConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        connection_timeout: Duration::from_secs(config.database.connection_timeout_seconds),
    };
    let pool = initialize_database(&store_config).await?;
    info!("Database connection established");

    // One transport handle, shared by both external clients, with the
    // bounded timeout neither remote service provides on its own.
    let http_client = Client::builder()
        .timeout(Duration::from_secs(config.external.timeout_seconds))
        .build()?;
    let enrichment = EnrichmentService::new(
        RegistryClient::new(http_client.clone(), config.external.registry_url.clone()),
        PostalClient::new(http_client, config.external.postal_url.clone()),
    );

    // Build application router
    let app = create_app(pool, enrichment, &config);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = TcpListener::bind(&addr).await?;
    info!("Catalog API listening on {}", addr);

    serve(listener, app).await?;

    Ok(())
}

fn create_app(pool: PostgresPool, enrichment: EnrichmentService, config: &AppConfig) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        // API routes
        .nest("/api/v1", routes::create_api_routes())
        // Middleware stack
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                        .allow_headers([header::CONTENT_TYPE]),
                )
                .layer(DefaultBodyLimit::max(config.server.max_request_size))
                .layer(axum::middleware::from_fn(request_id_middleware)),
        )
        // Application state
        .with_state(AppState {
            pool,
            enrichment,
            config: config.clone(),
        })
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": "comercio-catalog-api",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn metrics_handler() -> String {
    use prometheus::TextEncoder;

    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    encoder
        .encode_to_string(&metric_families)
        .unwrap_or_else(|_| "Error encoding metrics".to_string())
}
