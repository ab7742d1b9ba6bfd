//! # Structured Logging
//!
//! Environment-aware structured logging. Table reads absorb their failures,
//! so the events emitted here are the only place the underlying causes
//! surface.

use std::sync::OnceLock;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging with environment-specific configuration.
pub fn init_structured_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let log_level = get_log_level(&environment);

        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_ansi(true)
                .with_filter(EnvFilter::new(log_level)),
        );

        // Use try_init to avoid a panic if the host application already
        // installed a global subscriber.
        if subscriber.try_init().is_err() {
            tracing::debug!(
                "Global tracing subscriber already initialized - continuing with existing subscriber"
            );
        }

        tracing::info!(
            environment = %environment,
            "Structured logging initialized"
        );
    });
}

/// Get current environment from environment variables
fn get_environment() -> String {
    std::env::var("DATATABLE_ENV")
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

/// Get log level based on environment
fn get_log_level(environment: &str) -> String {
    match environment {
        "production" => "info".to_string(),
        _ => "debug".to_string(),
    }
}

/// Log a completed table read with its pagination outcome.
pub fn log_table_query(resource: &str, page: i64, per_page: i64, total_count: i64) {
    tracing::debug!(
        resource = %resource,
        page = page,
        per_page = per_page,
        total_count = total_count,
        "TABLE_QUERY"
    );
}

/// Log a table read that degraded to the empty envelope.
pub fn log_table_query_failure(resource: &str, error: &dyn std::fmt::Display) {
    tracing::error!(
        resource = %resource,
        error = %error,
        "TABLE_QUERY failed, returning empty page"
    );
}
