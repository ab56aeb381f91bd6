//! Error reporting infrastructure
//!
//! Failures inside the cryptographic crates are reported through
//! [`LoggingTransformer`] so that secret inputs never reach a log sink.

pub mod logging;

pub use logging::LoggingTransformer;
