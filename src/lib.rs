// ABOUTME: Main library entry point for the MTS Fitness backend
// ABOUTME: Provides OIDC-authenticated profile storage and exercise suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MTS Fitness

#![deny(unsafe_code)]

//! # MTS Fitness Server
//!
//! Backend for the MTS Fitness web application. It verifies sessions
//! established by an external OIDC identity provider, stores user identity
//! and onboarding-profile rows in `SQLite`, and proxies exercise-suggestion
//! queries to an external exercise-catalog API selected by a static rotation
//! keyed by day-of-week and gender.
//!
//! ## Architecture
//!
//! - **Auth**: session-token verification only; login/callback live at the
//!   identity provider
//! - **Database**: two tables (`users`, `user_details`) behind a thin
//!   accessor with conditional first-visit insertion
//! - **Suggestions**: pure table lookup plus a sequential, failure-tolerant
//!   catalog fan-out
//! - **Routes**: stateless handlers organized by domain
//!
//! ## Example
//!
//! ```rust,no_run
//! use mtsfit_server::config::ServerConfig;
//! use mtsfit_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("MTS Fitness server configured for port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Authentication and session verification
pub mod auth;

/// Configuration management
pub mod config;

/// Database access and migrations
pub mod database;

/// Unified error handling with standard error codes and HTTP responses
pub mod errors;

/// External API clients
pub mod external;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware (CORS, global session gate)
pub mod middleware;

/// Common data models
pub mod models;

/// HTTP routes organized by domain
pub mod routes;

/// Security utilities (session cookies)
pub mod security;

/// Server resources and HTTP orchestration
pub mod server;

/// Exercise-suggestion rotation and fan-out
pub mod suggestions;
