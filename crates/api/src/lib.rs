//! # Logtrack API
//!
//! The API crate provides the web server implementation for the Logtrack
//! industrial-attachment logbook service. It defines RESTful endpoints for
//! member registration and login, daily work logs, weekly logbooks with a
//! supervisor approval workflow, PDF export of weekly reports, and email
//! notification.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Provide cross-cutting concerns like authentication and error handling
//! - **Report**: Render weekly logbooks as PDF documents
//! - **Mailer**: Deliver notification emails over SMTP
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework and SQLx for database interactions.
//! Authenticated routes carry JWT claims through request-scoped extractors;
//! there is no ambient session state.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Notification email delivery
pub mod mailer;
/// Middleware for authentication and error handling
pub mod middleware;
/// Weekly report PDF rendering
pub mod report;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use eyre::Result;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// PostgreSQL connection pool for database operations
    pub db_pool: PgPool,
    /// Secret used to sign and verify JWT bearer tokens
    pub jwt_secret: String,
    /// SMTP mailer, absent when no SMTP settings are configured
    pub mailer: Option<mailer::Mailer>,
}

/// Starts the API server with the provided configuration and database connection
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Set up the SMTP mailer when configured
    let mailer = match &config.smtp {
        Some(smtp) => Some(mailer::Mailer::from_config(smtp)?),
        None => {
            warn!("SMTP is not configured; the send-email endpoint will report failure");
            None
        }
    };

    // Create shared state with dependencies
    let state = Arc::new(ApiState {
        db_pool,
        jwt_secret: config.jwt_secret.clone(),
        mailer,
    });

    // Build the application router with all routes
    let app = Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Registration and login
        .merge(routes::user::routes())
        // Daily work log endpoints
        .merge(routes::daily_log::routes())
        // Weekly logbook and approval workflow endpoints
        .merge(routes::logbook::routes())
        // Attach shared state to all routes
        .with_state(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(
                origins
                    .iter()
                    .map(|origin| origin.parse().unwrap())
                    .collect::<Vec<_>>(),
            )
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware. An elapsed timeout becomes a 408
    // response, so the layered service stays infallible.
    let app = app.layer(tower_http::timeout::TimeoutLayer::new(
        std::time::Duration::from_secs(config.request_timeout),
    ));

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
