// ABOUTME: HTTP middleware for the MTS Fitness backend
// ABOUTME: Provides the CORS layer and the optional global session gate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MTS Fitness

//! HTTP middleware
//!
//! `session_gate` reproduces the identity middleware's "auth required"
//! deployment mode: when enabled, every route except the open set below is
//! rejected with 401 before dispatch. The root route stays open because it
//! implements its own redirect-based branching for anonymous visitors.

/// CORS layer construction
pub mod cors;

use crate::errors::AppError;
use crate::server::ServerResources;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

/// Paths that stay reachable without a session even in auth-required mode
const OPEN_PATHS: &[&str] = &["/", "/health", "/logout"];

/// Reject unauthenticated requests before dispatch
///
/// Installed only when `AUTH_REQUIRED=true`; routes still perform their own
/// authentication to read claims, this gate merely fails fast.
///
/// # Errors
///
/// Returns `AppError::auth_required` for unauthenticated requests outside
/// the open path set.
pub async fn session_gate(
    State(resources): State<Arc<ServerResources>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path();
    if OPEN_PATHS.contains(&path)
        || resources.session_verifier.is_authenticated(request.headers())
    {
        Ok(next.run(request).await)
    } else {
        Err(AppError::auth_required())
    }
}
