//! Application startup and lifecycle management.

use crate::config::{MedlinkConfig, StoreBackend};
use crate::handlers;
use crate::services::{DocumentStore, MemoryStore, MongoStore, StoreGateway, TokenIssuer};
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics::metrics_middleware, security_headers::security_headers_middleware,
    tracing::request_id_middleware,
};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared application state, built once at startup and handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: MedlinkConfig,
    pub store: StoreGateway,
    pub tokens: TokenIssuer,
}

impl AppState {
    pub async fn from_config(config: MedlinkConfig) -> Result<Self, AppError> {
        let backend: Arc<dyn DocumentStore> = match config.store.backend {
            StoreBackend::Mongo => Arc::new(
                MongoStore::connect(&config.store.uri, &config.store.database)
                    .await
                    .map_err(|e| {
                        tracing::error!("Failed to connect to MongoDB: {}", e);
                        e
                    })?,
            ),
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory store; records are lost on restart");
                Arc::new(MemoryStore::new(config.store.database.clone()))
            }
        };

        Ok(Self {
            store: StoreGateway::new(backend),
            tokens: TokenIssuer::new(&config.jwt),
            config,
        })
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/test", get(handlers::store_diagnostics))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics))
        .route("/auth/login", post(handlers::login))
        .route("/auth/guest", post(handlers::guest_login))
        .route("/ai/analyze", post(handlers::analyze_symptoms))
        .route("/doctors", get(handlers::list_doctors))
        .route("/consult/start", post(handlers::start_consult))
        .route("/consult/message", post(handlers::post_message))
        .route("/consult/end", post(handlers::end_consult))
        .route("/prescriptions/sample", get(handlers::sample_prescription))
        .route(
            "/reminders",
            post(handlers::create_reminder).get(handlers::list_reminders),
        )
        .route(
            "/vitals",
            post(handlers::record_vital).get(handlers::list_vitals),
        )
        .route("/offline", post(handlers::queue_offline_message))
        .route(
            "/profile",
            get(handlers::get_profile).post(handlers::update_profile),
        )
        // The mobile app calls from arbitrary origins
        .layer(CorsLayer::very_permissive())
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    ///
    /// Port 0 binds a random free port, which tests rely on.
    pub async fn build(config: MedlinkConfig) -> Result<Self, AppError> {
        let port = config.common.port;
        let state = AppState::from_config(config).await?;
        let router = build_router(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            port = port,
            store = state.store.backend_name(),
            "MedLink service listening"
        );

        Ok(Self {
            port,
            listener,
            router,
            state,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn store(&self) -> &StoreGateway {
        &self.state.store
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router).await
    }

    /// Serve until `shutdown` resolves, letting in-flight requests finish.
    pub async fn run_with_shutdown<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
    }
}
