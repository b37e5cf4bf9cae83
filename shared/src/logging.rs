//! Shared logging utilities for consistent tracing across the service

use chrono::{DateTime, Utc};
use tracing::{error, info};

/// Build the `EnvFilter` directive string for a base level.
///
/// Our own crates follow the configured level, the HTTP stack is capped so a
/// `trace` service level does not flood the output with hyper internals.
pub fn filter_directives(log_level: &str) -> String {
    let base_level = match log_level.trim().to_lowercase().as_str() {
        level @ ("trace" | "debug" | "info" | "warn" | "error") => level.to_string(),
        "warning" => "warn".to_string(),
        "critical" => "error".to_string(),
        _ => "info".to_string(),
    };

    format!("ai_service={base_level},shared={base_level},tower_http={base_level},axum=info,hyper=warn")
}

/// Initialize the tracing subscriber with the given log level
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt};

    let directives = filter_directives(log_level);

    let initialized = fmt()
        .with_env_filter(EnvFilter::new(&directives))
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init();

    if initialized.is_ok() {
        info!(timestamp = format_timestamp(), "📊 Log filter: {}", directives);
    }
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Contextual logging helper for startup messages
pub fn log_startup(service: &str, details: &str) {
    info!(
        service = %service,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(service: &str, reason: &str) {
    info!(
        service = %service,
        timestamp = format_timestamp(),
        "🛑 Shutting down: {}",
        reason
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(service: &str, context: &str, error: &dyn std::fmt::Display) {
    error!(
        service = %service,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(service: &str, message: &str) {
    info!(
        service = %service,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directives_follow_level() {
        let directives = filter_directives("debug");
        assert!(directives.starts_with("ai_service=debug,shared=debug"));
        assert!(directives.contains("hyper=warn"));
    }

    #[test]
    fn test_filter_directives_map_level_aliases() {
        assert!(filter_directives("WARNING").starts_with("ai_service=warn"));
        assert!(filter_directives("critical").starts_with("ai_service=error"));
        assert!(filter_directives("nonsense").starts_with("ai_service=info"));
    }

    #[test]
    fn test_timestamp_format() {
        let ts = format_timestamp();
        // HH:MM:SS.mmm
        assert_eq!(ts.len(), 12);
        assert_eq!(&ts[2..3], ":");
        assert_eq!(&ts[8..9], ".");
    }

    #[test]
    fn test_init_tracing_twice_is_harmless() {
        init_tracing("info");
        init_tracing("debug");
        log_success("test", "tracing initialised");
    }
}
