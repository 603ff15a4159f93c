// ABOUTME: HTTP cookie utilities for session management
// ABOUTME: Provides cookie parsing and a clear-cookie builder used at logout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MTS Fitness

//! Session cookie utilities
//!
//! The identity provider places the session token in an `HttpOnly` cookie;
//! this module extracts it on the way in and expires it at logout. The
//! `Secure` flag follows `BASE_URL`: plain-HTTP development URLs drop it,
//! anything else (including an unset variable) keeps it.

use axum::http::{header, HeaderMap, HeaderValue};
use std::env;

/// Name of the session cookie carrying the OIDC session token
pub const SESSION_COOKIE: &str = "session";

/// Extract a cookie value from request headers
#[must_use]
pub fn get_cookie_value(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    headers
        .get(header::COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .find_map(|cookie| {
            let mut parts = cookie.trim().splitn(2, '=');
            let name = parts.next()?.trim();
            let value = parts.next()?.trim();

            if name == cookie_name {
                Some(value.to_owned())
            } else {
                None
            }
        })
}

/// Expire the session cookie on the response
pub fn clear_session_cookie(headers: &mut HeaderMap) {
    let mut cookie = format!("{SESSION_COOKIE}=; Max-Age=0; Path=/; HttpOnly; SameSite=Lax");
    if infer_secure_flag() {
        cookie.push_str("; Secure");
    }

    if let Ok(header_value) = HeaderValue::from_str(&cookie) {
        headers.insert(header::SET_COOKIE, header_value);
    }
}

/// Derive the `Secure` cookie flag from the `BASE_URL` environment variable.
///
/// Returns `true` when `BASE_URL` starts with `https://` or is unset
/// (fail-secure), `false` for plain-HTTP development URLs.
fn infer_secure_flag() -> bool {
    env::var("BASE_URL").map_or(true, |url| url.starts_with("https://"))
}
