//! Nexora AI scoring service
//!
//! A stateless HTTP service that scores leads, picks A/B variants with
//! Thompson Sampling, flags anomalies in event series, fills marketing copy
//! templates and adjusts prices by purchasing power parity.

pub mod core;
pub mod error;
pub mod server;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod web;

// Re-export main types
pub use error::{FieldError, ServiceError, ServiceResult};
pub use server::AiServer;
pub use state::AppState;
pub use types::*;

// Re-export trait definitions
pub use traits::{MockOutlierDetector, OutlierDetector};

// Re-export service implementations
#[cfg(feature = "iforest")]
pub use services::IsolationForestDetector;
pub use services::{OutlierCapability, UnavailableDetector};
