// ABOUTME: Identity-row database operations
// ABOUTME: Handles first-visit creation and lookups of users keyed by email
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MTS Fitness

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{NewUser, User};
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

impl Database {
    /// Create the identity row for an email if none exists yet
    ///
    /// The insert is conditional (`ON CONFLICT(email) DO NOTHING`) so two
    /// near-simultaneous first visits cannot produce duplicate rows; the
    /// schema's uniqueness constraint is the correctness guarantee, not a
    /// prior read. The returned flag reports whether this call created the
    /// row.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn ensure_user(&self, new_user: &NewUser) -> AppResult<(User, bool)> {
        let id = Uuid::new_v4();
        let created_at = Utc::now();

        let result = sqlx::query(
            r"
            INSERT INTO users (id, first_name, last_name, email, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT(email) DO NOTHING
            ",
        )
        .bind(id.to_string())
        .bind(&new_user.first_name)
        .bind(&new_user.last_name)
        .bind(&new_user.email)
        .bind(created_at)
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to create user: {e}")))?;

        let created = result.rows_affected() == 1;

        // Re-read so the caller sees the winning row either way
        let user = self.get_user_by_email(&new_user.email).await?.ok_or_else(|| {
            AppError::database("User row missing immediately after conditional insert")
        })?;

        Ok((user, created))
    }

    /// Get a user by email
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let row = sqlx::query(
            r"
            SELECT id, first_name, last_name, email, created_at
            FROM users WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch user: {e}")))?;

        row.map(|r| map_user_row(&r)).transpose()
    }

    /// List every identity row, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        let rows = sqlx::query(
            r"
            SELECT id, first_name, last_name, email, created_at
            FROM users ORDER BY created_at ASC
            ",
        )
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to list users: {e}")))?;

        rows.iter().map(map_user_row).collect()
    }
}

/// Map a `users` row into the model type
fn map_user_row(row: &SqliteRow) -> AppResult<User> {
    let id_str: String = row
        .try_get("id")
        .map_err(|e| AppError::database(format!("Missing user id column: {e}")))?;
    let id = Uuid::parse_str(&id_str)
        .map_err(|e| AppError::database(format!("Invalid user id '{id_str}': {e}")))?;

    Ok(User {
        id,
        first_name: row
            .try_get("first_name")
            .map_err(|e| AppError::database(format!("Missing first_name column: {e}")))?,
        last_name: row
            .try_get("last_name")
            .map_err(|e| AppError::database(format!("Missing last_name column: {e}")))?,
        email: row
            .try_get("email")
            .map_err(|e| AppError::database(format!("Missing email column: {e}")))?,
        created_at: row
            .try_get("created_at")
            .map_err(|e| AppError::database(format!("Missing created_at column: {e}")))?,
    })
}
