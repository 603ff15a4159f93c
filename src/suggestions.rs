// ABOUTME: Static muscle-group rotation tables and the exercise-suggestion fan-out
// ABOUTME: Pure day/gender selection plus sequential catalog collection with skip-on-failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MTS Fitness

//! Exercise-suggestion selection
//!
//! Two fixed 7-row tables (one per gender) map a day of the week to the
//! ordered muscle groups to train that day. Selection is pure array indexing;
//! the caller supplies the day so the selector stays deterministic. Only the
//! `/suggestion` route reads the wall clock, at the request boundary.
//!
//! Collection walks the selected groups one catalog call at a time, in order.
//! A failed call is logged and skipped: the day's suggestions degrade to a
//! shorter list rather than an error.

use crate::external::exercise_api::ExerciseCatalog;
use crate::models::Gender;
use chrono::Weekday;
use serde_json::Value;
use tracing::warn;

/// Exercises fetched per muscle group for the daily suggestion
pub const SUGGESTION_LIMIT: u32 = 3;

/// Weekly rotation for the male table, index 0 = Sunday
const MALE_ROTATION: [&[&str]; 7] = [
    &["cardiovascular system"],
    &["upper back", "biceps"],
    &["glutes", "hamstrings"],
    &["pectorals", "triceps", "abs"],
    &["delts", "cardiovascular system"],
    &["upper back", "biceps", "forearm"],
    &["cardiovascular system"],
];

/// Weekly rotation for the female table, index 0 = Sunday
const FEMALE_ROTATION: [&[&str]; 7] = [
    &["cardiovascular system"],
    &["glutes", "hamstrings", "quads"],
    &["upper back", "biceps"],
    &["abs", "triceps", "pectorals"],
    &["glutes", "quads", "hamstrings"],
    &["upper back", "biceps"],
    &["cardiovascular system"],
];

/// The static suggestion rotation
pub struct SuggestionPlan;

impl SuggestionPlan {
    /// Ordered muscle-group targets for a gender and day of the week
    #[must_use]
    pub fn for_day(gender: Gender, day: Weekday) -> &'static [&'static str] {
        let index = day.num_days_from_sunday() as usize;
        match gender {
            Gender::Male => MALE_ROTATION[index],
            Gender::Female => FEMALE_ROTATION[index],
        }
    }
}

/// Fetch catalog payloads for the given targets, sequentially and in order
///
/// Each failed call is logged at `warn` and excluded from the result; the
/// returned list preserves the relative order of the successes and never
/// reports an error to the caller.
pub async fn collect_suggestions(
    catalog: &dyn ExerciseCatalog,
    targets: &[&str],
    limit: u32,
) -> Vec<Value> {
    let mut results = Vec::with_capacity(targets.len());

    for target in targets {
        match catalog.exercises_by_target(target, limit).await {
            Ok(payload) => results.push(payload),
            Err(e) => warn!("Skipping suggestion target '{target}': {e}"),
        }
    }

    results
}

/// Convenience wrapper: select the plan row and collect its payloads
pub async fn suggestions_for(
    catalog: &dyn ExerciseCatalog,
    gender: Gender,
    day: Weekday,
) -> Vec<Value> {
    let targets = SuggestionPlan::for_day(gender, day);
    collect_suggestions(catalog, targets, SUGGESTION_LIMIT).await
}
