// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Restricts cross-origin access to the configured web frontend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MTS Fitness

//! CORS configuration
//!
//! The browser frontend is the only cross-origin caller, so the allow-list is
//! exactly its origin. Credentials are allowed and `Set-Cookie` is exposed so
//! the provider-managed session cookie survives cross-origin responses.

use crate::config::FrontendConfig;
use http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;

/// Configure CORS for the configured frontend origin
#[must_use]
pub fn setup_cors(frontend: &FrontendConfig) -> CorsLayer {
    let mut layer = CorsLayer::new()
        .allow_credentials(true)
        .expose_headers([header::SET_COOKIE])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            header::ORIGIN,
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS]);

    if let Ok(origin) = HeaderValue::from_str(&frontend.origin()) {
        layer = layer.allow_origin(origin);
    }

    layer
}
