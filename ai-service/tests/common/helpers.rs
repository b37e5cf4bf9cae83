//! Router builder and request helpers
//!
//! Requests go straight into the `Router` through `tower::ServiceExt::oneshot`;
//! no socket is bound.

use ai_service::{AiServer, MockOutlierDetector, OutlierCapability};
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use shared::ServiceConfig;
use tower::ServiceExt;

/// Builder for a router backed by a mocked outlier detector
pub struct ServerBuilder {
    config: ServiceConfig,
    detector: MockOutlierDetector,
}

impl ServerBuilder {
    /// Defaults plus a detector that reports itself available
    pub fn new() -> Self {
        let mut detector = MockOutlierDetector::new();
        detector.expect_is_available().returning(|| true).times(0..);

        Self {
            config: ServiceConfig::default(),
            detector,
        }
    }

    pub fn with_config(mut self, config: ServiceConfig) -> Self {
        self.config = config;
        self
    }

    /// Detector that must be called exactly once and returns `outliers`
    pub fn with_outliers(mut self, outliers: Vec<usize>) -> Self {
        self.detector
            .expect_detect_outliers()
            .times(1)
            .returning(move |_, _| Ok(outliers.clone()));
        self
    }

    /// Detector that must never be reached
    pub fn without_detector_calls(mut self) -> Self {
        self.detector.expect_detect_outliers().times(0);
        self
    }

    pub fn with_detector(mut self, detector: MockOutlierDetector) -> Self {
        self.detector = detector;
        self
    }

    pub fn build(self) -> Router {
        AiServer::new(self.config, self.detector).build_router()
    }
}

pub struct TestHelpers;

impl TestHelpers {
    /// Router using the capability the binary would pick for `config`
    pub fn production_router(config: ServiceConfig) -> Router {
        let detector = OutlierCapability::from_config(&config);
        AiServer::new(config, detector).build_router()
    }

    pub async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        Self::send(router, request).await
    }

    pub async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        Self::post_raw(router, uri, body.to_string()).await
    }

    pub async fn post_raw(router: Router, uri: &str, body: impl Into<String>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.into()))
            .unwrap();
        Self::send(router, request).await
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    /// Field names reported in a 422 `detail` list
    pub fn rejected_fields(body: &Value) -> Vec<String> {
        body["detail"]
            .as_array()
            .map(|errors| {
                errors
                    .iter()
                    .filter_map(|error| error["field"].as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}
