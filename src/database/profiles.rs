// ABOUTME: Onboarding-details database operations
// ABOUTME: Handles the one-time user_details row written after the questionnaire
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MTS Fitness

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{Gender, UserDetails};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

impl Database {
    /// Insert the onboarding details row for a user
    ///
    /// `user_details.user_id` is the primary key, so a second submission for
    /// the same user surfaces as a conflict rather than a duplicate row.
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` if the user already completed
    /// onboarding, or a database error for any other failure.
    pub async fn insert_details(&self, details: &UserDetails) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO user_details (user_id, height, weight, gender, goal, age, focus, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(details.user_id.to_string())
        .bind(details.height)
        .bind(details.weight)
        .bind(details.gender.as_str())
        .bind(&details.goal)
        .bind(details.age)
        .bind(&details.focus)
        .bind(details.created_at)
        .execute(self.pool())
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                AppError::already_exists("Onboarding details for this user")
            } else {
                AppError::database(format!("Failed to insert user details: {e}"))
            }
        })?;

        Ok(())
    }

    /// Get the onboarding details for a user, if onboarding is complete
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_details(&self, user_id: Uuid) -> AppResult<Option<UserDetails>> {
        let row = sqlx::query(
            r"
            SELECT user_id, height, weight, gender, goal, age, focus, created_at
            FROM user_details WHERE user_id = $1
            ",
        )
        .bind(user_id.to_string())
        .fetch_optional(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch user details: {e}")))?;

        row.map(|r| map_details_row(&r)).transpose()
    }
}

/// Map a `user_details` row into the model type
fn map_details_row(row: &SqliteRow) -> AppResult<UserDetails> {
    let user_id_str: String = row
        .try_get("user_id")
        .map_err(|e| AppError::database(format!("Missing user_id column: {e}")))?;
    let user_id = Uuid::parse_str(&user_id_str)
        .map_err(|e| AppError::database(format!("Invalid user id '{user_id_str}': {e}")))?;

    let gender_str: String = row
        .try_get("gender")
        .map_err(|e| AppError::database(format!("Missing gender column: {e}")))?;

    Ok(UserDetails {
        user_id,
        height: row
            .try_get("height")
            .map_err(|e| AppError::database(format!("Missing height column: {e}")))?,
        weight: row
            .try_get("weight")
            .map_err(|e| AppError::database(format!("Missing weight column: {e}")))?,
        gender: Gender::from_input(&gender_str),
        goal: row
            .try_get("goal")
            .map_err(|e| AppError::database(format!("Missing goal column: {e}")))?,
        age: row
            .try_get("age")
            .map_err(|e| AppError::database(format!("Missing age column: {e}")))?,
        focus: row
            .try_get("focus")
            .map_err(|e| AppError::database(format!("Missing focus column: {e}")))?,
        created_at: row
            .try_get("created_at")
            .map_err(|e| AppError::database(format!("Missing created_at column: {e}")))?,
    })
}
