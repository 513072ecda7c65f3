// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token claims and authenticated user representation.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Subject identity bound into every issued token.
///
/// Identities come from the identity store and are either numeric (the
/// default `1` for the built-in account) or opaque strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum Identity {
    Numeric(i64),
    Named(String),
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identity::Numeric(id) => write!(f, "{id}"),
            Identity::Named(name) => f.write_str(name),
        }
    }
}

impl From<i64> for Identity {
    fn from(value: i64) -> Self {
        Identity::Numeric(value)
    }
}

impl From<&str> for Identity {
    fn from(value: &str) -> Self {
        Identity::Named(value.to_string())
    }
}

impl From<String> for Identity {
    fn from(value: String) -> Self {
        Identity::Named(value)
    }
}

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject identity
    #[serde(rename = "userID")]
    pub user_id: Identity,

    /// Expiration timestamp (Unix seconds)
    pub exp: i64,

    /// Issued at timestamp (Unix seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

/// Authenticated user information extracted from a validated token.
///
/// The admission gate inserts this into the request extensions; handlers
/// read it back through the `Auth` extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AuthenticatedUser {
    /// Subject identity from the `userID` claim
    pub user_id: Identity,

    /// Token expiration (Unix timestamp)
    pub expires_at: i64,

    /// Token issuance (Unix timestamp), when the token carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<i64>,
}

impl AuthenticatedUser {
    /// Create from validated claims.
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
            expires_at: claims.exp,
            issued_at: claims.iat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_identity_serializes_as_number() {
        let claims = Claims {
            user_id: Identity::Numeric(1),
            exp: 1700003600,
            iat: Some(1700000000),
        };
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["userID"], 1);
        assert_eq!(json["exp"], 1700003600);
    }

    #[test]
    fn identity_deserializes_from_number_or_string() {
        let numeric: Claims = serde_json::from_str(r#"{"userID":7,"exp":1}"#).unwrap();
        assert_eq!(numeric.user_id, Identity::Numeric(7));
        assert_eq!(numeric.iat, None);

        let named: Claims = serde_json::from_str(r#"{"userID":"user_123","exp":1}"#).unwrap();
        assert_eq!(named.user_id, Identity::from("user_123"));
    }

    #[test]
    fn from_claims_carries_identity_and_expiry() {
        let user = AuthenticatedUser::from_claims(Claims {
            user_id: Identity::from("alice"),
            exp: 42,
            iat: Some(10),
        });
        assert_eq!(user.user_id.to_string(), "alice");
        assert_eq!(user.expires_at, 42);
        assert_eq!(user.issued_at, Some(10));
    }
}
