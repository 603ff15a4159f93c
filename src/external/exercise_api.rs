// ABOUTME: Exercise-catalog API client for muscle-group exercise retrieval
// ABOUTME: Implements target-muscle queries with limit/offset pagination and API-key auth
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MTS Fitness

//! Exercise-Catalog API Client
//!
//! Client for the external exercise catalog (an `ExerciseDB`-style REST API
//! behind an API-key gateway). One request fetches the exercises for a single
//! target muscle group, paginated by `limit`/`offset`; this backend always
//! asks for the first page. Payloads are forwarded verbatim; their fields
//! are the catalog's contract with the frontend, not ours.
//!
//! # Example
//! ```rust,no_run
//! use mtsfit_server::external::exercise_api::{
//!     ExerciseApiClient, ExerciseApiConfig, ExerciseCatalog,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ExerciseApiConfig {
//!     api_host: "exercisedb.p.rapidapi.com".to_owned(),
//!     api_key: "your_api_key".to_owned(),
//! };
//!
//! let client = ExerciseApiClient::new(config);
//! let exercises = client.exercises_by_target("biceps", 10).await?;
//! # Ok(())
//! # }
//! ```

use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

/// Exercise-catalog API configuration
#[derive(Debug, Clone)]
pub struct ExerciseApiConfig {
    /// Catalog host, also sent back as the gateway host header
    pub api_host: String,
    /// Gateway API key
    pub api_key: String,
}

impl Default for ExerciseApiConfig {
    fn default() -> Self {
        Self {
            api_host: "exercisedb.p.rapidapi.com".to_owned(),
            api_key: String::new(),
        }
    }
}

/// Source of exercise data for a target muscle group
///
/// The trait is the seam between route/suggestion logic and the live catalog;
/// tests substitute a stub to exercise failure handling deterministically.
#[async_trait]
pub trait ExerciseCatalog: Send + Sync {
    /// Fetch up to `limit` exercises for one target muscle group
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built or sent, the catalog
    /// answers with a non-success status, or the payload is not JSON.
    async fn exercises_by_target(&self, target: &str, limit: u32) -> AppResult<Value>;
}

/// Live exercise-catalog API client
pub struct ExerciseApiClient {
    config: ExerciseApiConfig,
    http_client: Client,
}

impl ExerciseApiClient {
    /// Create a new catalog client
    #[must_use]
    pub fn new(config: ExerciseApiConfig) -> Self {
        Self {
            config,
            http_client: Client::new(),
        }
    }

    /// Build the target-muscle endpoint URL, percent-encoding the target
    /// (several targets contain spaces, e.g. "upper back")
    fn target_url(&self, target: &str) -> AppResult<Url> {
        let mut url = Url::parse(&format!("https://{}/", self.config.api_host))
            .map_err(|e| AppError::config(format!("Invalid catalog host: {e}")))?;

        url.path_segments_mut()
            .map_err(|()| AppError::config("Catalog host cannot carry a path"))?
            .pop_if_empty()
            .extend(["exercises", "target", target]);

        Ok(url)
    }
}

#[async_trait]
impl ExerciseCatalog for ExerciseApiClient {
    async fn exercises_by_target(&self, target: &str, limit: u32) -> AppResult<Value> {
        if target.is_empty() {
            return Err(AppError::invalid_input("Target muscle cannot be empty"));
        }

        let target = target.to_lowercase();
        let url = self.target_url(&target)?;

        let response = self
            .http_client
            .get(url)
            .query(&[("limit", limit.to_string().as_str()), ("offset", "0")])
            .header("x-rapidapi-key", &self.config.api_key)
            .header("x-rapidapi-host", &self.config.api_host)
            .send()
            .await
            .map_err(|e| AppError::external_service("Exercise catalog API", e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::external_service(
                "Exercise catalog API",
                format!("Target '{target}' request failed with HTTP {status}"),
            ));
        }

        response.json::<Value>().await.map_err(|e| {
            AppError::external_service("Exercise catalog API", format!("JSON parse error: {e}"))
        })
    }
}
