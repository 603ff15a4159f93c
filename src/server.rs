// ABOUTME: Server resources and axum orchestration for the MTS Fitness backend
// ABOUTME: Assembles the router, applies middleware layers and runs the HTTP server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MTS Fitness

//! Server assembly and HTTP serving
//!
//! `ServerResources` is the dependency-injection bundle shared by every route
//! handler; `FitnessServer` assembles the router from the domain route
//! modules, layers tracing and CORS on top, and drives the accept loop.

use crate::auth::SessionVerifier;
use crate::config::ServerConfig;
use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::external::exercise_api::ExerciseCatalog;
use crate::middleware::{cors::setup_cors, session_gate};
use crate::routes::{AccountRoutes, HealthRoutes, ProfileRoutes, SuggestionRoutes};
use axum::{middleware, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::{info, Level};

/// Shared dependencies injected into every route handler
pub struct ServerResources {
    /// Loaded server configuration
    pub config: ServerConfig,
    /// Database handle
    pub database: Database,
    /// Session-token verifier pinned to the OIDC configuration
    pub session_verifier: SessionVerifier,
    /// Exercise-catalog client (trait object so tests can substitute a stub)
    pub exercise_catalog: Arc<dyn ExerciseCatalog>,
}

impl ServerResources {
    /// Bundle the shared dependencies, deriving the verifier from the config
    #[must_use]
    pub fn new(
        config: ServerConfig,
        database: Database,
        exercise_catalog: Arc<dyn ExerciseCatalog>,
    ) -> Self {
        let session_verifier = SessionVerifier::new(&config.oidc);
        Self {
            config,
            database,
            session_verifier,
            exercise_catalog,
        }
    }
}

/// HTTP server for the MTS Fitness backend
pub struct FitnessServer {
    resources: Arc<ServerResources>,
}

impl FitnessServer {
    /// Create a server over the shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Assemble the application router from all route modules
    ///
    /// The global session gate is installed only in auth-required
    /// deployments; routes authenticate individually either way.
    #[must_use]
    pub fn router(resources: &Arc<ServerResources>) -> Router {
        let app = Router::new()
            .merge(HealthRoutes::routes(Arc::clone(resources)))
            .merge(AccountRoutes::routes(Arc::clone(resources)))
            .merge(ProfileRoutes::routes(Arc::clone(resources)))
            .merge(SuggestionRoutes::routes(Arc::clone(resources)));

        if resources.config.oidc.auth_required {
            app.layer(middleware::from_fn_with_state(
                Arc::clone(resources),
                session_gate,
            ))
        } else {
            app
        }
    }

    /// Run the HTTP server until the process is stopped
    ///
    /// # Errors
    ///
    /// Returns an error if binding the listener or serving fails.
    pub async fn run(&self) -> AppResult<()> {
        let port = self.resources.config.http_port;
        info!("HTTP server starting on port {port}");

        // Apply middleware layers (order matters - applied bottom-up)
        let app = Self::router(&self.resources)
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(
                        DefaultMakeSpan::new()
                            .level(Level::INFO)
                            .include_headers(false),
                    )
                    .on_response(
                        DefaultOnResponse::new()
                            .level(Level::INFO)
                            .latency_unit(LatencyUnit::Millis),
                    ),
            )
            .layer(setup_cors(&self.resources.config.frontend));

        let host = &self.resources.config.host;
        let addr: SocketAddr = format!("{host}:{port}")
            .parse()
            .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], port)));
        info!("HTTP server listening on http://{addr}");

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| AppError::internal(format!("Transport error: {e}")))?;
        axum::serve(listener, app)
            .await
            .map_err(|e| AppError::internal(format!("Transport error: {e}")))?;

        Ok(())
    }
}
