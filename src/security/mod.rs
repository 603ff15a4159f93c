// ABOUTME: Security utilities for session handling
// ABOUTME: Provides HTTP cookie helpers used by the auth layer and logout route
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MTS Fitness

//! Security utilities

/// Session cookie helpers
pub mod cookies;
