//! HTTP server: router assembly, CORS and lifecycle
//!
//! The server is generic over the outlier detector so that tests can inject a
//! mock in place of the Isolation Forest.

use axum::http::{HeaderName, HeaderValue};
use axum::routing::{get, post};
use axum::{Router, middleware};
use shared::{ServiceConfig, logging};
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::error::ServiceResult;
use crate::state::AppState;
use crate::traits::OutlierDetector;
use crate::web::handlers;
use crate::web::middleware::{REQUEST_ID_HEADER, request_id};

const SERVICE_NAME: &str = "ai-service";

/// Main server struct with the detector injected
pub struct AiServer<D>
where
    D: OutlierDetector,
{
    state: AppState<D>,
}

impl<D> AiServer<D>
where
    D: OutlierDetector + 'static,
{
    pub fn new(config: ServiceConfig, detector: D) -> Self {
        Self {
            state: AppState::new(config, detector),
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/healthz", get(handlers::healthz))
            .route("/version", get(handlers::version::<D>))
            .route("/predict/lead", post(handlers::predict_lead))
            .route("/ab/select", post(handlers::ab_select))
            .route("/anomaly/events", post(handlers::anomaly_events::<D>))
            .route("/generate/copy", post(handlers::generate_copy_deck))
            .route("/pricing/suggest", post(handlers::pricing_suggest))
            .fallback(handlers::not_found)
            .layer(
                ServiceBuilder::new()
                    .layer(cors_layer(&self.state.config))
                    .layer(middleware::from_fn(request_id))
                    .layer(TraceLayer::new_for_http())
                    .into_inner(),
            )
            .with_state(self.state.clone())
    }

    /// Bind the configured address and serve until Ctrl+C
    pub async fn run(&self) -> ServiceResult<()> {
        let address = self.state.config.bind_address()?;
        let listener = tokio::net::TcpListener::bind(address).await?;

        info!(%address, iforest = self.state.detector.is_available(), "Listening");

        axum::serve(listener, self.build_router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }

    pub fn state(&self) -> &AppState<D> {
        &self.state
    }
}

/// CORS policy for the configured origins
pub fn cors_layer(config: &ServiceConfig) -> CorsLayer {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    if config.allows_any_origin() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
            .expose_headers([request_id]);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Skipping invalid CORS origin");
                None
            }
        })
        .collect();

    // Credentials rule out wildcards
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .expose_headers([request_id])
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown(SERVICE_NAME, "Received Ctrl+C signal"),
        Err(err) => {
            logging::log_error(SERVICE_NAME, "Signal handling", &err);
            // Without a signal handler keep serving
            std::future::pending::<()>().await;
        }
    }
}
