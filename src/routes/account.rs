// ABOUTME: Account and session route handlers
// ABOUTME: First-visit bootstrap, claim lookups, identity listing and logout redirect
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MTS Fitness

//! Account routes
//!
//! The root route carries the one stateful business decision in the system:
//! an authenticated visitor either gets an identity row created (first visit,
//! redirect to the questionnaire) or already has one (redirect to the
//! dashboard). Anonymous visitors are sent back to the frontend landing page.

use crate::errors::AppError;
use crate::models::NewUser;
use crate::security::cookies::clear_session_cookie;
use crate::server::ServerResources;
use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Account and session routes
pub struct AccountRoutes;

impl AccountRoutes {
    /// Create all account routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::handle_bootstrap))
            .route("/getName", get(Self::handle_get_name))
            .route("/profile", get(Self::handle_profile))
            .route("/getUser", get(Self::handle_get_user))
            .route("/users", get(Self::handle_list_users))
            .route("/logout", get(Self::handle_logout))
            .with_state(resources)
    }

    /// First-visit bootstrap
    ///
    /// Authenticated: create the identity row if this email has none
    /// (conditional insert; the unique email constraint resolves concurrent
    /// first visits) and redirect to the questionnaire, or to the dashboard
    /// for returning users. Anonymous: redirect to the frontend landing page.
    async fn handle_bootstrap(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let frontend = &resources.config.frontend;

        let Ok(claims) = resources.session_verifier.authenticate(&headers) else {
            return Ok(Redirect::to(&frontend.origin()).into_response());
        };

        let new_user = NewUser {
            first_name: claims.given_name,
            last_name: claims.family_name,
            email: claims.email,
        };
        let (user, created) = resources.database.ensure_user(&new_user).await?;

        if created {
            info!("Created identity row for {}", user.email);
            // New account: collect onboarding details first
            return Ok(Redirect::to(&frontend.route("/questionaire")).into_response());
        }

        Ok(Redirect::to(&frontend.route("/dashboard")).into_response())
    }

    /// Return the authenticated user's given name
    async fn handle_get_name(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let claims = resources.session_verifier.authenticate(&headers)?;
        Ok(Json(json!({ "name": claims.given_name })).into_response())
    }

    /// Return the raw identity-provider claims
    async fn handle_profile(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let claims = resources.session_verifier.authenticate(&headers)?;
        Ok(Json(claims).into_response())
    }

    /// Return the identity id for the authenticated email
    async fn handle_get_user(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let claims = resources.session_verifier.authenticate(&headers)?;

        let user = resources
            .database
            .get_user_by_email(&claims.email)
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;

        Ok(Json(json!({ "id": user.id })).into_response())
    }

    /// List every identity row (session-guarded)
    async fn handle_list_users(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        resources.session_verifier.authenticate(&headers)?;

        let users = resources.database.list_users().await?;
        Ok(Json(users).into_response())
    }

    /// Expire the session cookie and redirect through the provider logout
    /// endpoint when enabled, else straight to the frontend destination
    async fn handle_logout(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let oidc = &resources.config.oidc;
        let return_to = resources.config.frontend.route("/logout-success");

        let target = if oidc.provider_logout {
            format!(
                "{}/v2/logout?client_id={}&returnTo={}",
                oidc.issuer_url.trim_end_matches('/'),
                oidc.client_id,
                urlencoding::encode(&return_to),
            )
        } else {
            return_to
        };

        let mut response = Redirect::to(&target).into_response();
        clear_session_cookie(response.headers_mut());
        Ok(response)
    }
}
