// ABOUTME: Logging configuration and structured logging setup for observability
// ABOUTME: Configures log levels and output formats via environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MTS Fitness

//! Production logging configuration with structured output
//!
//! Log level comes from `RUST_LOG` (default `info`), output format from
//! `LOG_FORMAT` (`json`, `compact`, or the default `pretty`). Route-level
//! request logging is handled separately by `tower_http::trace::TraceLayer`.

use crate::errors::{AppError, AppResult};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log filter directive (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        Self { level, format }
    }
}

/// Initialize the global tracing subscriber from environment configuration
///
/// # Errors
///
/// Returns an error if a subscriber has already been installed or the filter
/// directive cannot be parsed.
pub fn init_from_env() -> AppResult<()> {
    init(&LoggingConfig::from_env())
}

/// Initialize the global tracing subscriber with the given configuration
///
/// # Errors
///
/// Returns an error if a subscriber has already been installed or the filter
/// directive cannot be parsed.
pub fn init(config: &LoggingConfig) -> AppResult<()> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| AppError::config(format!("Invalid log filter '{}': {e}", config.level)))?;

    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        LogFormat::Compact => registry
            .with(tracing_subscriber::fmt::layer().compact())
            .try_init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init(),
    };

    result.map_err(|e| AppError::config(format!("Failed to install tracing subscriber: {e}")))
}
