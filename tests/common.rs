// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides database, config, catalog-stub and session-token helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MTS Fitness
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(dead_code, clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Shared test utilities for `mtsfit_server`
//!
//! Common setup to reduce duplication across integration tests: an in-memory
//! database, a deterministic catalog stub, and provider-style session tokens.

use async_trait::async_trait;
use jsonwebtoken::{encode, EncodingKey, Header};
use mtsfit_server::{
    config::{DatabaseConfig, FrontendConfig, OidcConfig, ServerConfig},
    database::Database,
    errors::{AppError, AppResult},
    external::exercise_api::{ExerciseApiConfig, ExerciseCatalog},
    server::ServerResources,
};
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::{Arc, Mutex, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .try_init();
    });
}

/// Server configuration for tests: in-memory database, fixed OIDC values
pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        host: "127.0.0.1".into(),
        database: DatabaseConfig {
            url: "sqlite::memory:".into(),
        },
        oidc: OidcConfig {
            auth_required: false,
            provider_logout: false,
            base_url: "http://localhost:3000".into(),
            client_id: "test-client".into(),
            issuer_url: "https://issuer.example.com".into(),
            session_secret: "test-session-secret".into(),
        },
        frontend: FrontendConfig {
            host: "frontend.example.com".into(),
        },
        exercise_api: ExerciseApiConfig {
            api_host: "catalog.example.com".into(),
            api_key: "test-key".into(),
        },
    }
}

/// Deterministic exercise-catalog stub
///
/// Succeeds with `{"target": ..., "limit": ...}` payloads unless the target
/// is listed in `failing`; every call is recorded in order for sequencing
/// assertions.
pub struct StubCatalog {
    failing: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl StubCatalog {
    pub fn new() -> Self {
        Self::failing_on(&[])
    }

    pub fn failing_on(targets: &[&str]) -> Self {
        Self {
            failing: targets.iter().map(|t| (*t).to_owned()).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Targets requested so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for StubCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExerciseCatalog for StubCatalog {
    async fn exercises_by_target(&self, target: &str, limit: u32) -> AppResult<Value> {
        self.calls.lock().unwrap().push(target.to_owned());

        if self.failing.contains(target) {
            return Err(AppError::external_service(
                "Stub catalog",
                format!("Simulated failure for '{target}'"),
            ));
        }

        Ok(json!({ "target": target, "limit": limit }))
    }
}

/// Build full server resources over an in-memory database and the given stub
pub async fn create_test_resources_with(catalog: Arc<dyn ExerciseCatalog>) -> Arc<ServerResources> {
    init_test_logging();

    let config = test_config();
    let database = Database::new(&config.database.url)
        .await
        .expect("Failed to create test database");

    Arc::new(ServerResources::new(config, database, catalog))
}

/// Build full server resources with an always-succeeding catalog stub
pub async fn create_test_resources() -> Arc<ServerResources> {
    create_test_resources_with(Arc::new(StubCatalog::new())).await
}

/// Mint a session token the way the identity provider would
pub fn mint_session_token(config: &OidcConfig, email: &str, given: &str, family: &str) -> String {
    let claims = json!({
        "sub": format!("oidc|{email}"),
        "email": email,
        "given_name": given,
        "family_name": family,
        "iss": config.issuer_url,
        "aud": config.client_id,
        "exp": chrono::Utc::now().timestamp() + 3600,
    });

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.session_secret.as_bytes()),
    )
    .expect("Failed to mint test session token")
}

/// Bearer header value for a freshly minted session
pub fn bearer_for(resources: &ServerResources, email: &str) -> String {
    let token = mint_session_token(&resources.config.oidc, email, "Taylor", "Reed");
    format!("Bearer {token}")
}
