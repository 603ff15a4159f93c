// ABOUTME: OIDC session verification and authenticated-claims extraction
// ABOUTME: Validates provider-minted session tokens from bearer headers or cookies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MTS Fitness

//! Authentication and session management
//!
//! The identity provider runs the login and callback flow itself; what
//! reaches this backend is a signed session token, either as an
//! `Authorization: Bearer` header or in the `session` cookie. This module
//! verifies that token (HS256 with the shared session secret, issuer and
//! audience pinned to the OIDC configuration) and exposes the principal's
//! claims to route handlers. No token is ever minted here.

use crate::config::OidcConfig;
use crate::errors::{AppError, AppResult};
use crate::security::cookies::{get_cookie_value, SESSION_COOKIE};
use axum::http::HeaderMap;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// Claims asserted by the identity provider for an authenticated session
///
/// The typed fields are the ones this backend consumes; everything else the
/// provider includes is kept verbatim in `extra` and served by `/profile`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OidcClaims {
    /// Subject identifier
    pub sub: String,
    /// Email address, the key linking the session to an identity row
    pub email: String,
    /// Given name
    pub given_name: String,
    /// Family name
    pub family_name: String,
    /// All remaining provider claims, forwarded untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Verifies session tokens minted by the identity provider
pub struct SessionVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl SessionVerifier {
    /// Build a verifier pinned to the configured issuer and client id
    #[must_use]
    pub fn new(config: &OidcConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer_url]);
        validation.set_audience(&[&config.client_id]);

        Self {
            decoding_key: DecodingKey::from_secret(config.session_secret.as_bytes()),
            validation,
        }
    }

    /// Verify a raw session token and return its claims
    ///
    /// # Errors
    ///
    /// Returns `AppError::auth_invalid` if the signature, issuer, audience or
    /// expiry check fails.
    pub fn verify(&self, token: &str) -> AppResult<OidcClaims> {
        decode::<OidcClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::auth_invalid(format!("Session verification failed: {e}")))
    }

    /// Authenticate a request from its headers
    ///
    /// Accepts `Authorization: Bearer <token>` or the `session` cookie.
    ///
    /// # Errors
    ///
    /// Returns `AppError::auth_required` when no token is presented and
    /// `AppError::auth_invalid` when one is presented but fails verification.
    pub fn authenticate(&self, headers: &HeaderMap) -> AppResult<OidcClaims> {
        let token = if let Some(bearer) = headers
            .get("authorization")
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
        {
            bearer.to_owned()
        } else if let Some(cookie) = get_cookie_value(headers, SESSION_COOKIE) {
            cookie
        } else {
            return Err(AppError::auth_required());
        };

        self.verify(&token)
    }

    /// Whether the request carries a valid session, without surfacing claims
    #[must_use]
    pub fn is_authenticated(&self, headers: &HeaderMap) -> bool {
        self.authenticate(headers).is_ok()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use axum::http::HeaderValue;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn test_config() -> OidcConfig {
        OidcConfig {
            auth_required: false,
            provider_logout: false,
            base_url: "http://localhost:3000".into(),
            client_id: "test-client".into(),
            issuer_url: "https://issuer.example.com".into(),
            session_secret: "test-session-secret".into(),
        }
    }

    fn mint_token(config: &OidcConfig, email: &str) -> String {
        let claims = serde_json::json!({
            "sub": "oidc|123",
            "email": email,
            "given_name": "Test",
            "family_name": "User",
            "iss": config.issuer_url,
            "aud": config.client_id,
            "exp": chrono::Utc::now().timestamp() + 3600,
        });
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.session_secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_verify_valid_token() {
        let config = test_config();
        let verifier = SessionVerifier::new(&config);
        let token = mint_token(&config, "alice@example.com");

        let claims = verifier.verify(&token).unwrap();
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.given_name, "Test");
        // Provider claims outside the typed set are preserved
        assert!(claims.extra.contains_key("iss"));
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let config = test_config();
        let mut other = test_config();
        other.session_secret = "some-other-secret".into();

        let verifier = SessionVerifier::new(&config);
        let token = mint_token(&other, "alice@example.com");
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn test_authenticate_missing_token() {
        let verifier = SessionVerifier::new(&test_config());
        let err = verifier.authenticate(&HeaderMap::new()).unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::AuthRequired);
    }

    #[test]
    fn test_authenticate_bearer_and_cookie() {
        let config = test_config();
        let verifier = SessionVerifier::new(&config);
        let token = mint_token(&config, "bob@example.com");

        let mut headers = HeaderMap::new();
        headers.insert(
            "authorization",
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        assert_eq!(
            verifier.authenticate(&headers).unwrap().email,
            "bob@example.com"
        );

        let mut headers = HeaderMap::new();
        headers.insert(
            "cookie",
            HeaderValue::from_str(&format!("session={token}")).unwrap(),
        );
        assert_eq!(
            verifier.authenticate(&headers).unwrap().email,
            "bob@example.com"
        );
    }
}
