// ABOUTME: External API clients
// ABOUTME: Houses the exercise-catalog REST client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MTS Fitness

//! External API clients

/// Exercise-catalog REST API client
pub mod exercise_api;
