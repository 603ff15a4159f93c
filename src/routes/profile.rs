// ABOUTME: Onboarding-details route handlers
// ABOUTME: One-time questionnaire submission and profile retrieval for the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MTS Fitness

//! Onboarding-details routes

use crate::errors::AppError;
use crate::models::{Gender, User, UserDetails};
use crate::server::ServerResources;
use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Questionnaire submission body
///
/// Values pass through to storage as submitted; gender is normalized through
/// the enum (unrecognized values become `female`, the documented default).
#[derive(Debug, Clone, Deserialize)]
pub struct AddUserInfoRequest {
    /// Height in centimeters
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
    /// Gender selection
    pub gender: String,
    /// Fitness goal
    pub goal: String,
    /// Age in years
    pub age: i64,
    /// Focus area
    pub focus: String,
}

/// Questionnaire submission acknowledgement
#[derive(Debug, Serialize, Deserialize)]
pub struct AddUserInfoResponse {
    /// Success message
    pub message: String,
}

/// Onboarding-details routes
pub struct ProfileRoutes;

impl ProfileRoutes {
    /// Create all onboarding-details routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/addUserInfo", post(Self::handle_add_user_info))
            .route("/getUserInfo", get(Self::handle_get_user_info))
            .with_state(resources)
    }

    /// Resolve the caller's identity row from the session claims
    async fn caller_identity(
        resources: &Arc<ServerResources>,
        headers: &HeaderMap,
    ) -> Result<User, AppError> {
        let claims = resources.session_verifier.authenticate(headers)?;

        resources
            .database
            .get_user_by_email(&claims.email)
            .await?
            .ok_or_else(|| AppError::not_found("User"))
    }

    /// Store the one-time onboarding row for the caller
    ///
    /// A second submission hits the one-row-per-user constraint and comes
    /// back as 409 rather than accumulating rows.
    async fn handle_add_user_info(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<AddUserInfoRequest>,
    ) -> Result<Response, AppError> {
        let user = Self::caller_identity(&resources, &headers).await?;

        let details = UserDetails {
            user_id: user.id,
            height: request.height,
            weight: request.weight,
            gender: Gender::from_input(&request.gender),
            goal: request.goal,
            age: request.age,
            focus: request.focus,
            created_at: Utc::now(),
        };
        resources.database.insert_details(&details).await?;

        Ok(Json(AddUserInfoResponse {
            message: "User details saved".to_owned(),
        })
        .into_response())
    }

    /// Return the caller's onboarding row, 404 until onboarding completes
    async fn handle_get_user_info(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let user = Self::caller_identity(&resources, &headers).await?;

        let details = resources
            .database
            .get_details(user.id)
            .await?
            .ok_or_else(|| AppError::not_found("Onboarding details"))?;

        Ok(Json(details).into_response())
    }
}
