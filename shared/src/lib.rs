//! Shared plumbing for the insight scoring service
//!
//! Holds the pieces every binary in the workspace needs before it can serve
//! a request: configuration loading, tracing setup and the common error type.

pub mod config;
pub mod errors;
pub mod logging;

pub use config::ServiceConfig;
pub use errors::*;
