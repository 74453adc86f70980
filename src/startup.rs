//! Application startup and lifecycle management.

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::error::AppError;
use crate::handlers;
use crate::services::LeadStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: LeadStore,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    ///
    /// A missing or broken database leaves the store degraded; only a failed
    /// listener bind is fatal.
    pub async fn build(config: Config) -> Result<Self, AppError> {
        let store = LeadStore::connect(&config.database).await;

        let state = AppState {
            config: config.clone(),
            store,
        };

        // Port 0 = random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("{} listening on port {}", config.service_name, port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Get the document store handle.
    pub fn store(&self) -> &LeadStore {
        &self.state.store
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> Result<(), AppError> {
        let router = build_router(self.state);
        axum::serve(self.listener, router).await?;
        Ok(())
    }
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health::root))
        .route("/test", get(handlers::diagnostics::test_database))
        .route("/api/leads", post(handlers::leads::create_lead))
        .route("/api/services", get(handlers::services::list_services))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // The public form posts cross-origin with credentials, so the wildcard
        // policy has to mirror the request origin instead of sending `*`.
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}
