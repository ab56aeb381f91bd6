//! Common infrastructure and utilities for the cryypt project
//!
//! This crate provides shared functionality used across the cryypt crates:
//! - Structured logging on top of the `log` facade
//! - Secret-safe reporting of cryptographic failures

#![forbid(unsafe_code)]

pub mod error;

pub use error::LoggingTransformer;
