// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MTS Fitness

//! Environment-based configuration management
//!
//! All deployment-specific settings come from environment variables; there is
//! no configuration file. Identity-provider credentials and the session secret
//! are required, everything else has a development default.

use crate::errors::{AppError, AppResult};
use crate::external::exercise_api::ExerciseApiConfig;
use serde::{Deserialize, Serialize};
use std::env;

/// Default HTTP port, matching the original deployment
const DEFAULT_HTTP_PORT: u16 = 3000;

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// sqlx connection URL (`sqlite:` path)
    pub url: String,
}

/// Identity-provider (OIDC) configuration
///
/// The provider itself is an external collaborator: it runs the login and
/// callback flow and mints the session tokens this backend verifies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OidcConfig {
    /// When true, a router-level gate rejects unauthenticated requests to
    /// every route except `/health`, `/` and `/logout`
    pub auth_required: bool,
    /// When true, `/logout` redirects through the provider's logout endpoint
    pub provider_logout: bool,
    /// This application's externally visible base URL
    pub base_url: String,
    /// OIDC client id, also the expected token audience
    pub client_id: String,
    /// Issuer base URL, e.g. `https://tenant.auth0.example.com`
    pub issuer_url: String,
    /// HS256 secret the provider signs session tokens with
    pub session_secret: String,
}

/// Frontend configuration: redirect destinations and the CORS allow-list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontendConfig {
    /// Host (and optional port) the web frontend is served from
    pub host: String,
}

impl FrontendConfig {
    /// Origin URL for CORS and redirect targets
    #[must_use]
    pub fn origin(&self) -> String {
        format!("http://{}", self.host)
    }

    /// Redirect target for a frontend route, e.g. `/dashboard`
    #[must_use]
    pub fn route(&self, path: &str) -> String {
        format!("http://{}{path}", self.host)
    }
}

/// Complete server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Database settings
    pub database: DatabaseConfig,
    /// Identity-provider settings
    pub oidc: OidcConfig,
    /// Frontend settings
    pub frontend: FrontendConfig,
    /// Exercise-catalog API settings
    pub exercise_api: ExerciseApiConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable (`OIDC_CLIENT_ID`,
    /// `OIDC_ISSUER_URL`, `SESSION_SECRET`) is unset or a numeric variable
    /// fails to parse.
    pub fn from_env() -> AppResult<Self> {
        let http_port = match env::var("HTTP_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|e| AppError::config(format!("Invalid HTTP_PORT '{value}': {e}")))?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        Ok(Self {
            http_port,
            host: env_or("HTTP_HOST", "127.0.0.1"),
            database: DatabaseConfig {
                url: env_or("DATABASE_URL", "sqlite:data/mtsfit.db"),
            },
            oidc: OidcConfig {
                auth_required: env_bool("AUTH_REQUIRED", false),
                provider_logout: env_bool("OIDC_PROVIDER_LOGOUT", false),
                base_url: env_or("BASE_URL", "http://localhost:3000"),
                client_id: env_required("OIDC_CLIENT_ID")?,
                issuer_url: env_required("OIDC_ISSUER_URL")?,
                session_secret: env_required("SESSION_SECRET")?,
            },
            frontend: FrontendConfig {
                host: env_or("FRONTEND_HOST", "localhost:5173"),
            },
            exercise_api: ExerciseApiConfig {
                api_host: env_or("EXERCISE_API_HOST", "exercisedb.p.rapidapi.com"),
                api_key: env::var("EXERCISE_API_KEY").unwrap_or_default(),
            },
        })
    }

    /// One-line startup summary, safe to log (no secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "listen={}:{} database={} issuer={} frontend={} catalog={} auth_required={}",
            self.host,
            self.http_port,
            self.database.url,
            self.oidc.issuer_url,
            self.frontend.host,
            self.exercise_api.api_host,
            self.oidc.auth_required,
        )
    }
}

/// Read an environment variable with a fallback default
fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Read a required environment variable
fn env_required(key: &str) -> AppResult<String> {
    env::var(key).map_err(|_| AppError::config(format!("{key} must be set")))
}

/// Read a boolean environment variable ("true"/"1" are truthy)
fn env_bool(key: &str, default: bool) -> bool {
    env::var(key).map_or(default, |v| {
        matches!(v.to_lowercase().as_str(), "true" | "1")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_routes() {
        let frontend = FrontendConfig {
            host: "app.example.com".into(),
        };
        assert_eq!(frontend.origin(), "http://app.example.com");
        assert_eq!(
            frontend.route("/dashboard"),
            "http://app.example.com/dashboard"
        );
    }

    #[test]
    fn test_env_bool_parsing() {
        assert!(!env_bool("MTSFIT_TEST_UNSET_FLAG", false));
        assert!(env_bool("MTSFIT_TEST_UNSET_FLAG", true));
    }
}
