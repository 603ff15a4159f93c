// ABOUTME: Core database management with migration system for SQLite
// ABOUTME: Handles schema setup plus identity and onboarding-details storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MTS Fitness

//! Database connection and migration management
//!
//! Two tables back this service: `users` (identity rows keyed by a unique
//! email) and `user_details` (one-to-one onboarding extension). Migrations
//! are embedded at compile time from `./migrations` so schema setup works
//! regardless of the working directory.

/// Onboarding-details operations
pub mod profiles;
/// Identity-row operations
pub mod users;

use crate::errors::{AppError, AppResult};
use sqlx::{Pool, Sqlite, SqlitePool};
use tracing::info;

/// Database connection pool
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run pending migrations
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the database URL is invalid or malformed
    /// - the connection fails
    /// - `SQLite` file creation fails
    /// - the migration process fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        let pool = SqlitePool::connect(&connection_options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to database: {e}")))?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run all pending database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any migration fails or the connection is lost
    /// during migration.
    pub async fn migrate(&self) -> AppResult<()> {
        info!("Running database migrations...");

        // Migrations are embedded at compile time from ./migrations
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Migration failed: {e}")))?;

        info!("Database migrations completed successfully");
        Ok(())
    }
}
