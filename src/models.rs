// ABOUTME: Core data models for users, onboarding details and gender selection
// ABOUTME: Defines the rows stored in the users and user_details tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MTS Fitness

//! Common data models
//!
//! `User` is the identity row created on first authenticated visit.
//! `UserDetails` is its one-to-one onboarding extension, written once via
//! `/addUserInfo`. A user without a details row has not completed onboarding.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Gender used to pick the suggestion rotation table
///
/// Any input other than `"male"` (case-insensitive) parses to `Female`. This
/// is the documented default for unrecognized values, replacing the silent
/// fallthrough of earlier revisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male rotation table
    Male,
    /// Female rotation table, also the default for unrecognized input
    Female,
}

impl Gender {
    /// Parse a stored or submitted gender value
    #[must_use]
    pub fn from_input(value: &str) -> Self {
        if value.eq_ignore_ascii_case("male") {
            Self::Male
        } else {
            Self::Female
        }
    }

    /// Stored string form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity row, linked to the authenticated principal by email
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Generated primary key
    pub id: Uuid,
    /// Given name from the identity provider
    pub first_name: String,
    /// Family name from the identity provider
    pub last_name: String,
    /// Globally unique email address
    pub email: String,
    /// Row creation time
    pub created_at: DateTime<Utc>,
}

/// Fields for creating an identity row on first visit
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Given name from the identity provider
    pub first_name: String,
    /// Family name from the identity provider
    pub last_name: String,
    /// Email address, the uniqueness key
    pub email: String,
}

/// Onboarding details row, one per user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDetails {
    /// Owning user id (also the primary key)
    pub user_id: Uuid,
    /// Height in centimeters
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
    /// Gender selection for the rotation table
    pub gender: Gender,
    /// Fitness goal, free-form (e.g. "strength")
    pub goal: String,
    /// Age in years
    pub age: i64,
    /// Focus area, free-form (e.g. "upper")
    pub focus: String,
    /// Row creation time
    pub created_at: DateTime<Utc>,
}
