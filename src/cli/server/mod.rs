//! HTTP server module for the formula REST API
//!
//! Provides a web server exposing the three formulas.
//! Features include:
//! - `POST /api/solve` with optional file read/write actions
//! - File actions confined to a storage directory
//! - Embedded browser form
//! - CORS support for web-based tools

pub mod assets;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::any::Any;
use std::net::SocketAddr;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::cli::server::{
    assets::{asset_count, serve_embedded_assets, serve_ui_root},
    config::ServerConfig,
    error::ServerError,
    handlers::{files_handler::FileStore, health_handler, solve_handler, version_handler},
};

/// Shared, immutable state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: FileStore,
}

/// Start the formula HTTP server
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    // Initialize tracing/logging subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let app = create_app(config.clone())?;
    let addr = SocketAddr::from((config.host, config.port));

    info!("🌐 Starting formula server on http://{}", addr);
    info!(
        "📁 File storage directory: {}",
        config.storage_dir.display()
    );
    info!("🎨 Web form available with {} embedded assets", asset_count());

    if config.cors_all {
        warn!("⚠️  CORS enabled for all origins (development mode)");
    }

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the main application router
pub fn create_app(config: ServerConfig) -> anyhow::Result<Router> {
    let cors = if config.cors_all {
        CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE])
            .allow_origin(AnyOrigin)
    } else {
        CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE])
            .allow_origin(HeaderValue::from_static("http://localhost:3000")) // Default frontend dev server
    };

    let state = AppState {
        store: FileStore::new(config.storage_dir.clone()),
    };

    let app = Router::new()
        .route("/api/solve", post(solve_handler))
        .route("/health", get(health_handler))
        .route("/version", get(version_handler))
        .route("/", get(serve_ui_root))
        .route("/{*path}", get(serve_embedded_assets))
        .layer(DefaultBodyLimit::max(config.max_payload_size()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state);

    Ok(app)
}

fn handle_panic(_err: Box<dyn Any + Send + 'static>) -> Response {
    ServerError::Internal(anyhow::anyhow!("request handler panicked")).into_response()
}
