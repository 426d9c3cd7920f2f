//! # Profile Echo Server
//!
//! This is the main entry point for a small form-backend server.
//! It serves a fixed profile on `GET /` and echoes form submissions on
//! `POST /`, but only for submissions that carry the shared secret in their
//! `password` field.
//!
//! ## Key Concepts
//! - **Request gate**: a middleware that checks write requests before the handler runs
//! - **Loose equality**: the secret check coerces types, so `123456` matches `"123456"`
//! - **CORS**: only the configured front-end origin may call the API from a browser
//!
//! This is a teaching toy, not a security system.

// Module declarations - organize code into logical components
mod app;         // Router assembly (routes + middleware layers)
mod config;      // Configuration management (environment variables, settings)
mod error;       // Error handling and custom error types
mod gate;        // The shared-secret predicate and its loose equality
mod handlers;    // HTTP request handlers (routes)
mod middleware;  // Request interceptors (origin guard, gate)
mod models;      // Profile and submission JSON shapes
mod state;       // Shared application state

// Import the configuration type
use crate::config::Config;
// Import shared application state
use crate::state::AppState;
// Structured logging setup
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main application entry point
///
/// This function:
/// 1. Sets up logging for debugging and monitoring
/// 2. Loads configuration from environment variables
/// 3. Builds the shared state (gate, profile fixture, allowed origin)
/// 4. Sets up the routes and middleware
/// 5. Starts the HTTP server
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing/logging system
    // Default: info level for most crates, debug level for our app
    // Can be overridden with RUST_LOG environment variable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,profile_echo_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment variables and .env file
    // The Debug impl redacts the credential, so this is safe to log
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded: {:?}", config);

    let app_state = AppState::new(&config)?;
    tracing::info!("Application state initialized");

    let app = app::build_router(app_state);

    // Bind to the configured host and port (default: 127.0.0.1:3000)
    let bind_addr = config.bind_address();
    tracing::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
