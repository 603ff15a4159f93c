// ABOUTME: Configuration management for the MTS Fitness backend
// ABOUTME: Organizes environment-driven server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MTS Fitness

//! Configuration management

/// Environment-based server configuration
pub mod environment;

pub use environment::{DatabaseConfig, FrontendConfig, OidcConfig, ServerConfig};
