//! Comms Backend Server
//!
//! An async Rust server that fronts the internal comms API, verifying
//! caller identity and resolving organization membership.

use axum::{middleware, routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use comms_service::{
    auth::{self, TokenVerifier},
    config::{AppConfig, DatabaseConfig},
    db::create_pool,
    handlers,
    services::MembershipService,
    state::AppState,
};

/// Default token secret for development (must be overridden in production).
const DEFAULT_JWT_SECRET: &str = "comms-dev-secret-do-not-use-in-production";

/// Initialize tracing/logging.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,comms_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the application router with all routes.
fn build_router(
    state: AppState,
    verifier: Arc<TokenVerifier>,
    membership_service: MembershipService,
) -> Router {
    // CORS configuration - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Health check routes (no auth required)
    let health_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/health", get(handlers::api_health))
        .with_state(state);

    // Comms routes - every path sits behind the authentication middleware
    let comms_routes = Router::new()
        .route(
            "/api/organization",
            get(handlers::membership::get_organization),
        )
        .layer(middleware::from_fn_with_state(
            verifier,
            auth::require_auth,
        ))
        .with_state(membership_service);

    Router::new()
        .merge(health_routes)
        .merge(comms_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Get the token verification secret from the environment or use the
/// development default.
fn get_jwt_secret() -> String {
    std::env::var("COMMS_JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("COMMS_JWT_SECRET not set, using default (not secure for production)");
        DEFAULT_JWT_SECRET.to_string()
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting comms backend"
    );

    // Load configuration
    let app_config = AppConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load app config, using defaults");
        AppConfig::default()
    });

    let db_config = DatabaseConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load database config, using defaults");
        DatabaseConfig::default()
    });

    tracing::info!(
        host = %app_config.host,
        port = app_config.port,
        debug = app_config.debug,
        "Configuration loaded"
    );

    // Create database connection pool
    let db_pool = create_pool(&db_config).await?;

    // Token verifier shared by the authentication middleware
    let verifier = Arc::new(TokenVerifier::new(&get_jwt_secret()));

    // Create services
    let membership_service = MembershipService::new(db_pool.clone());

    // Create application state
    let state = AppState::new(db_pool, app_config.clone());

    // Build the router
    let app = build_router(state, verifier, membership_service);

    // Bind to address
    let addr: SocketAddr = app_config.bind_address().parse()?;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(address = %addr, "Server listening");

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
