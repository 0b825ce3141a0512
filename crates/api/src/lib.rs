//! # Clinic API
//!
//! The HTTP surface of the clinic scheduling service: timeslot CRUD plus the
//! per-doctor patient and appointment listings.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Validate the request, make one repository call, shape the response
//! - **Middleware**: Error mapping and panic recovery
//! - **Config**: Environment configuration read once at start-up
//!
//! The API uses Axum as the web framework. Storage is reached only through
//! the [`ClinicRepository`] trait, so tests can swap in a fake.

/// Configuration module for API settings
pub mod config;
/// Extractors that report failures as JSON errors
pub mod extract;
/// Request handlers
pub mod handlers;
/// Error mapping and panic recovery
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use clinic_db::{ClinicRepository, DbPool, PgClinicRepository};
use eyre::Result;
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// # Example
///
/// ```no_run
/// # async fn example(db_pool: clinic_db::DbPool) {
/// use clinic_api::ApiState;
/// use clinic_db::PgClinicRepository;
///
/// let state = ApiState::new(PgClinicRepository::new(db_pool));
/// # }
/// ```
pub struct ApiState {
    /// Gateway every handler issues its single statement through
    pub repository: Arc<dyn ClinicRepository>,
}

impl ApiState {
    pub fn new(repository: impl ClinicRepository + 'static) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }
}

/// Installs the global tracing subscriber at the configured level.
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Builds the application router with all routes and middleware applied
pub fn app(state: Arc<ApiState>, config: &config::ApiConfig) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Timeslot management endpoints
        .merge(routes::timeslot::routes())
        // Per-doctor patient and appointment listings
        .merge(routes::doctor::routes())
        .fallback(middleware::error_handling::not_found)
        // Attach shared state to all routes
        .with_state(state)
        .layer(cors_layer(config.cors_origins.as_deref()))
        .layer(TraceLayer::new_for_http())
        // Outermost, so a panic anywhere below still gets the generic 500
        .layer(CatchPanicLayer::custom(
            middleware::error_handling::handle_panic,
        ))
}

fn cors_layer(origins: Option<&[String]>) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT]);

    let Some(origins) = origins.filter(|o| !o.iter().any(|origin| origin == "*")) else {
        return cors.allow_origin(Any);
    };

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(allowed).allow_credentials(true)
}

/// Starts the API server with the provided configuration and database pool
///
/// Serves until the process receives Ctrl-C or SIGTERM.
///
/// # Example
///
/// ```no_run
/// # async fn example() -> eyre::Result<()> {
/// use clinic_api::config::ApiConfig;
///
/// let config = ApiConfig::from_env()?;
/// let options = config.database.connect_options()?;
/// let db_pool = clinic_db::create_pool(options, config.database.max_connections).await?;
/// clinic_api::start_server(config, db_pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(config: config::ApiConfig, db_pool: DbPool) -> Result<()> {
    // Create shared state with dependencies
    let state = Arc::new(ApiState::new(PgClinicRepository::new(db_pool)));

    let app = app(state, &config);

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server is running on http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
