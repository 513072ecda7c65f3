// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Access token validation.
//!
//! Checks run in a fixed order and each failure has its own [`AuthError`]
//! variant:
//!
//! 1. empty input → `MissingToken`
//! 2. optional `Bearer ` prefix is stripped
//! 3. three segments, JSON header and claims → else `MalformedToken`
//! 4. `alg` in the HMAC family → else `UnexpectedAlgorithm`
//! 5. signature under the secret key → else `BadSignature`
//! 6. `exp` strictly after now → else `Expired`

use base64ct::{Base64UrlUnpadded, Encoding};
use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use super::{AuthError, AuthenticatedUser, Claims, SecretKey};

/// Accepted in front of the token but not required.
const BEARER_PREFIX: &str = "Bearer ";

const ACCEPTED_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// Only the field we need before handing the token to `jsonwebtoken`.
#[derive(Debug, Deserialize)]
struct RawHeader {
    alg: String,
}

/// Verifies access tokens signed with the shared secret key.
#[derive(Clone)]
pub struct TokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenValidator {
    pub fn new(secret: &SecretKey) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = ACCEPTED_ALGORITHMS.to_vec();
        validation.leeway = 0;
        // Expiry is checked against an explicit clock below
        validation.validate_exp = false;
        validation.validate_aud = false;

        Self {
            decoding_key: secret.decoding_key(),
            validation,
        }
    }

    /// Validate a token (raw or `Bearer `-prefixed) against the current time.
    pub fn validate(&self, raw: &str) -> Result<AuthenticatedUser, AuthError> {
        self.validate_at(raw, Utc::now())
    }

    /// Validate a token as if the current time were `now`.
    pub fn validate_at(&self, raw: &str, now: DateTime<Utc>) -> Result<AuthenticatedUser, AuthError> {
        if raw.trim().is_empty() {
            return Err(AuthError::MissingToken);
        }

        let token = strip_bearer(raw);
        let algorithm = parse_structure(token)?;
        tracing::trace!(?algorithm, "token structure accepted");

        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature | ErrorKind::Base64(_) => AuthError::BadSignature,
                ErrorKind::InvalidAlgorithm => AuthError::UnexpectedAlgorithm,
                _ => AuthError::MalformedToken,
            })?
            .claims;

        if claims.exp <= now.timestamp() {
            return Err(AuthError::Expired);
        }

        Ok(AuthenticatedUser::from_claims(claims))
    }
}

/// Strip the `Bearer ` prefix when something follows it.
fn strip_bearer(raw: &str) -> &str {
    match raw.strip_prefix(BEARER_PREFIX) {
        Some(rest) if !rest.is_empty() => rest,
        _ => raw,
    }
}

/// Check the token shape and return its HMAC algorithm.
fn parse_structure(token: &str) -> Result<Algorithm, AuthError> {
    let mut segments = token.split('.');
    let (Some(header), Some(claims), Some(_signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return Err(AuthError::MalformedToken);
    };

    let header: RawHeader = decode_json_segment(header)?;
    let _: serde_json::Map<String, serde_json::Value> = decode_json_segment(claims)?;

    match header.alg.as_str() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        _ => Err(AuthError::UnexpectedAlgorithm),
    }
}

fn decode_json_segment<T: serde::de::DeserializeOwned>(segment: &str) -> Result<T, AuthError> {
    let bytes = Base64UrlUnpadded::decode_vec(segment).map_err(|_| AuthError::MalformedToken)?;
    serde_json::from_slice(&bytes).map_err(|_| AuthError::MalformedToken)
}
