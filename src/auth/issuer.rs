// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Access token issuance.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use super::{AuthError, Claims, Identity, SecretKey};

/// Validity window of every issued token.
pub const TOKEN_VALIDITY_HOURS: i64 = 24;

/// A freshly signed token and its expiry.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Signs HS256 access tokens binding a verified identity.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    validity: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &SecretKey) -> Self {
        Self {
            encoding_key: secret.encoding_key(),
            validity: Duration::hours(TOKEN_VALIDITY_HOURS),
        }
    }

    /// Issue a token for `identity`, valid for 24 hours from now.
    pub fn issue(&self, identity: Identity) -> Result<IssuedToken, AuthError> {
        self.issue_at(identity, Utc::now())
    }

    /// Issue a token as if the current time were `now`.
    pub fn issue_at(&self, identity: Identity, now: DateTime<Utc>) -> Result<IssuedToken, AuthError> {
        let expires_at = now
            .checked_add_signed(self.validity)
            .ok_or_else(|| AuthError::Internal("token expiry overflows".to_string()))?;

        let claims = Claims {
            user_id: identity,
            exp: expires_at.timestamp(),
            iat: Some(now.timestamp()),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("failed to sign token: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }
}
