// ABOUTME: Exercise-suggestion route handlers
// ABOUTME: Day/gender-driven suggestion fan-out and single-muscle catalog pass-through
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MTS Fitness

//! Exercise-suggestion routes
//!
//! `/suggestion` is time-dependent by design: the rotation row is picked by
//! the current local day of the week, read here at the request boundary so
//! the selector itself stays pure.

use crate::errors::AppError;
use crate::server::ServerResources;
use crate::suggestions;
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{Datelike, Local};
use std::sync::Arc;

/// Exercises returned by the single-muscle pass-through route
const PASSTHROUGH_LIMIT: u32 = 10;

/// Exercise-suggestion routes
pub struct SuggestionRoutes;

impl SuggestionRoutes {
    /// Create all suggestion routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/suggestion", get(Self::handle_suggestion))
            .route(
                "/api/exercises/muscles/:muscle",
                get(Self::handle_muscle_passthrough),
            )
            .with_state(resources)
    }

    /// Today's suggestions for the caller's gender
    ///
    /// Requires completed onboarding (the gender drives table selection).
    /// Failed catalog calls shorten the list; they never fail the request.
    async fn handle_suggestion(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let claims = resources.session_verifier.authenticate(&headers)?;

        let user = resources
            .database
            .get_user_by_email(&claims.email)
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;

        let details = resources
            .database
            .get_details(user.id)
            .await?
            .ok_or_else(|| AppError::not_found("Onboarding details"))?;

        let today = Local::now().weekday();
        let payloads =
            suggestions::suggestions_for(resources.exercise_catalog.as_ref(), details.gender, today)
                .await;

        Ok(Json(payloads).into_response())
    }

    /// Pass one target muscle straight through to the catalog
    ///
    /// Catalog failures surface as 502 here; only the suggestion fan-out
    /// swallows per-target errors.
    async fn handle_muscle_passthrough(
        State(resources): State<Arc<ServerResources>>,
        Path(muscle): Path<String>,
    ) -> Result<Response, AppError> {
        let payload = resources
            .exercise_catalog
            .exercises_by_target(&muscle, PASSTHROUGH_LIMIT)
            .await?;

        Ok(Json(payload).into_response())
    }
}
