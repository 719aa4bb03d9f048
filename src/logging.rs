//! # Structured Logging Module
//!
//! Environment-aware structured logging for debugging event handling and
//! workflow instantiation across concurrent handler invocations.

use chrono::Utc;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging with environment-specific configuration
pub fn init_structured_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let log_level = get_log_level(&environment);

        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true)
                .with_ansi(true)
                .with_filter(EnvFilter::new(log_level)),
        );

        // Use try_init to avoid panic if global subscriber already set
        if subscriber.try_init().is_err() {
            tracing::debug!(
                "Global tracing subscriber already initialized - continuing with existing subscriber"
            );
        }

        tracing::info!(
            environment = %environment,
            "🔧 STRUCTURED LOGGING: Initialized"
        );
    });
}

/// Get current environment from environment variables
fn get_environment() -> String {
    std::env::var("CASEFLOW_ENV")
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

/// Log structured data for process instantiation decisions
pub fn log_process_operation(
    operation: &str,
    process_definition_key: &str,
    business_key: Option<&str>,
    status: &str,
    details: Option<&str>,
) {
    tracing::info!(
        operation = %operation,
        process_definition_key = %process_definition_key,
        business_key = business_key,
        status = %status,
        details = details,
        timestamp = %Utc::now().to_rfc3339(),
        "📋 PROCESS_OPERATION"
    );
}

/// Log structured data for task history operations
pub fn log_history_operation(
    operation: &str,
    task_id: &str,
    event_type: &str,
    status: &str,
    details: Option<&str>,
) {
    tracing::info!(
        operation = %operation,
        task_id = %task_id,
        event_type = %event_type,
        status = %status,
        details = details,
        timestamp = %Utc::now().to_rfc3339(),
        "🗂 HISTORY_OPERATION"
    );
}

/// Log a degraded reference-data lookup with full context
pub fn log_reference_data_warning(lookup: &str, subject: &str, reason: &str) {
    tracing::warn!(
        lookup = %lookup,
        subject = %subject,
        reason = %reason,
        timestamp = %Utc::now().to_rfc3339(),
        "⚠️ REFERENCE_DATA_DEGRADED"
    );
}
