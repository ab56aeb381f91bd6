//! Production-grade structured logging infrastructure
//!
//! Provides env_logger-based logging with secure handling of sensitive data
//! and proper integration with the standard log crate.

use log::{debug, error, info, warn};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Production logging infrastructure using `env_logger`
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (should be called once at application startup)
    ///
    /// This sets up `env_logger` with production-ready configuration.
    /// Configure logging levels via `RUST_LOG` environment variable:
    /// - `RUST_LOG=debug` - Enable all debug logs
    /// - `RUST_LOG=info` - Enable info and above (recommended for production)
    /// - `RUST_LOG=error` - Only errors
    /// - `RUST_LOG=cryypt_mnemonic=debug` - Module-specific levels
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Use this in test modules to avoid initialization conflicts
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Secure logging of cryptographic errors
    ///
    /// Logs error types without exposing sensitive data
    pub fn log_crypto_error(operation: &str, error: &dyn std::error::Error) {
        error!(
            "Cryptographic operation failed: {} (error_type: {})",
            operation,
            std::any::type_name_of_val(error)
        );
    }

    /// Log input that was rejected by a validation step
    ///
    /// Only the rejection kind is recorded; the rejected input itself may be
    /// a secret (a recovery phrase, a passphrase) and is never passed here.
    pub fn log_rejected_input(operation: &str, kind: &str) {
        warn!("Input rejected: {operation} (kind: {kind})");
    }

    /// Log performance metrics and timing information
    pub fn log_performance_metric(operation: &str, duration_ms: u64, success: bool) {
        if success {
            debug!("Performance: {operation} completed in {duration_ms}ms");
        } else {
            warn!("Performance: {operation} failed after {duration_ms}ms");
        }
    }

    /// Log cache lifecycle events (load, reload, eviction)
    pub fn log_cache_event(cache: &str, event: &str, entries: Option<usize>) {
        match entries {
            Some(entries) => info!("Cache: {cache} {event} ({entries} entries)"),
            None => debug!("Cache: {cache} {event}"),
        }
    }
}

/// Macro for secure cryptographic operation logging
#[macro_export]
macro_rules! log_crypto_safe {
    (ERROR, $operation:expr, $error:expr) => {
        log::error!(
            "Cryptographic operation failed: {} (error_type: {})",
            $operation,
            std::any::type_name_of_val(&$error)
        );
    };
    (WARN, $operation:expr, $error:expr) => {
        log::warn!(
            "Cryptographic operation warning: {} (error_type: {})",
            $operation,
            std::any::type_name_of_val(&$error)
        );
    };
}
