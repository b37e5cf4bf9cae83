//! Service error types and their HTTP mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use serde_json::json;
use shared::SharedError;
use thiserror::Error;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

/// One rejected field in a request payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    /// Dotted path into the payload, e.g. `variants[1].name`
    pub field: String,
    pub code: String,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Request validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Invalid request format: {details}")]
    InvalidRequest { details: String },

    #[error("{capability} not available: {reason}")]
    CapabilityUnavailable { capability: String, reason: String },

    #[error("Sampling failed for variant {variant}: {message}")]
    SamplingError { variant: String, message: String },

    #[error("Outlier detection failed: {message}")]
    DetectorFailure { message: String },

    #[error("Background task failed: {0}")]
    JoinError(#[from] tokio::task::JoinError),

    #[error("Configuration error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) | ServiceError::InvalidRequest { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::CapabilityUnavailable { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            ServiceError::Validation(errors) => {
                tracing::warn!(errors = errors.len(), "Rejected request payload");
                json!({ "detail": errors })
            }
            ServiceError::InvalidRequest { details } => {
                tracing::warn!(%details, "Rejected malformed request body");
                json!({
                    "detail": [FieldError {
                        field: "body".to_string(),
                        code: "parse".to_string(),
                        message: details.clone(),
                    }]
                })
            }
            ServiceError::CapabilityUnavailable { .. } => {
                tracing::warn!(error = %self, "Capability requested but unavailable");
                json!({ "detail": self.to_string() })
            }
            _ => {
                shared::logging::log_error("ai-service", "Request handling", &self);
                json!({ "detail": "Internal Server Error" })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = Vec::new();
        collect_field_errors("", &errors, &mut fields);
        fields.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
        ServiceError::Validation(fields)
    }
}

fn collect_field_errors(prefix: &str, errors: &ValidationErrors, out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        let name: &str = field.as_ref();
        // Struct-level checks are reported against the struct itself
        let path = match (prefix.is_empty(), name) {
            (true, "__all__") => "body".to_string(),
            (false, "__all__") => prefix.to_string(),
            (true, name) => name.to_string(),
            (false, name) => format!("{prefix}.{name}"),
        };

        match kind {
            ValidationErrorsKind::Field(list) => {
                for error in list {
                    out.push(FieldError {
                        field: path.clone(),
                        code: error.code.to_string(),
                        message: describe(error),
                    });
                }
            }
            ValidationErrorsKind::Struct(inner) => collect_field_errors(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_field_errors(&format!("{path}[{index}]"), inner, out);
                }
            }
        }
    }
}

fn describe(error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }

    let mut bounds: Vec<String> = error
        .params
        .iter()
        .filter(|(key, _)| **key != "value")
        .map(|(key, value)| format!("{key}={value}"))
        .collect();
    bounds.sort();

    if bounds.is_empty() {
        format!("failed {} check", error.code)
    } else {
        format!("failed {} check ({})", error.code, bounds.join(", "))
    }
}
