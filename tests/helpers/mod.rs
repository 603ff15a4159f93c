// ABOUTME: Test helper modules for integration tests
// ABOUTME: Houses the axum request harness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MTS Fitness
#![allow(dead_code)]

pub mod axum_test;
