//! # Shift Calendar API
//!
//! The API crate provides the web server for the family shift calendar.
//! It defines RESTful endpoints for managing users, shifts and shift templates.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Validate requests and call the repositories
//! - **Middleware**: Error mapping and extractors with JSON rejections
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework and SQLx over SQLite for storage.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Error handling and request extraction
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use eyre::Result;
use shiftcal_db::DbPool;
use tokio::{net::TcpListener, sync::Mutex};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};

/// Shared application state that is accessible to all request handlers
///
/// Built once in `main` and handed to the router; handlers never open their
/// own connections.
pub struct ApiState {
    /// SQLite connection pool for database operations
    pub db_pool: DbPool,
    /// Held while a user is looked up by name and created, so two requests
    /// for the same name cannot both insert.
    pub user_creation: Mutex<()>,
}

impl ApiState {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            db_pool,
            user_creation: Mutex::new(()),
        }
    }
}

/// Builds the router with every endpoint attached to `state`.
///
/// Transport layers (CORS, tracing, timeouts) are added by [`start_server`].
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // User management endpoints
        .merge(routes::user::routes())
        // Shift endpoints, including quick add
        .merge(routes::shift::routes())
        // Shift template endpoints
        .merge(routes::shift_template::routes())
        // Month view
        .merge(routes::calendar::routes())
        // Attach shared state to all routes
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(origins)
}

/// Starts the API server with the provided configuration and database pool
///
/// The schema must already be initialized. Runs until Ctrl-C.
pub async fn start_server(config: config::ApiConfig, db_pool: DbPool) -> Result<()> {
    let state = Arc::new(ApiState::new(db_pool));

    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
}
