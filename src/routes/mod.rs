// ABOUTME: Route module organization for MTS Fitness HTTP endpoints
// ABOUTME: Provides route definitions organized by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MTS Fitness

//! Route modules
//!
//! Routes are organized by domain; each module exposes a `*Routes` struct
//! whose `routes()` constructor returns an axum `Router` over the shared
//! server resources. Handlers stay thin: authenticate, touch the store or
//! the catalog client, serialize.

/// Health check routes
pub mod health;

/// Account and session routes: bootstrap, name/profile/id lookups, logout
pub mod account;

/// Onboarding-details routes
pub mod profile;

/// Exercise-suggestion and catalog pass-through routes
pub mod suggestions;

pub use account::AccountRoutes;
pub use health::HealthRoutes;
pub use profile::{AddUserInfoRequest, AddUserInfoResponse, ProfileRoutes};
pub use suggestions::SuggestionRoutes;
