// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Authentication error type.
///
/// Every way a login or an admission check can fail has its own variant so
/// that callers (and tests) can tell them apart. The five token variants are
/// all surfaced to clients as `401 Unauthorized`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Login body missing, unparseable, or carrying empty fields
    #[error("malformed request: username and password are required")]
    MalformedRequest,
    /// Username/password pair rejected by the identity store
    #[error("invalid username or password")]
    BadCredentials,
    /// No token on the request
    #[error("no token provided")]
    MissingToken,
    /// Token is not a three-segment JWS with a JSON header and claims
    #[error("token is malformed")]
    MalformedToken,
    /// Token names an algorithm outside the HMAC family (including `none`)
    #[error("unexpected signing algorithm")]
    UnexpectedAlgorithm,
    /// Signature does not verify under the secret key
    #[error("token signature is invalid")]
    BadSignature,
    /// `exp` is not after the validation time
    #[error("token has expired")]
    Expired,
    /// Signing or key failure; the detail is logged, never returned
    #[error("internal authentication error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct AuthErrorBody {
    message: String,
    error_code: &'static str,
}

impl AuthError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::MalformedRequest => "malformed_request",
            AuthError::BadCredentials => "bad_credentials",
            AuthError::MissingToken => "missing_token",
            AuthError::MalformedToken => "malformed_token",
            AuthError::UnexpectedAlgorithm => "unexpected_algorithm",
            AuthError::BadSignature => "bad_signature",
            AuthError::Expired => "token_expired",
            AuthError::Internal(_) => "internal_error",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MalformedRequest => StatusCode::BAD_REQUEST,
            AuthError::BadCredentials
            | AuthError::MissingToken
            | AuthError::MalformedToken
            | AuthError::UnexpectedAlgorithm
            | AuthError::BadSignature
            | AuthError::Expired => StatusCode::UNAUTHORIZED,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Internal details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AuthError::Internal(_) => "internal authentication error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        if let AuthError::Internal(detail) = &self {
            tracing::error!(error = %detail, "authentication failure");
        }

        let status = self.status_code();
        let body = Json(AuthErrorBody {
            message: self.public_message(),
            error_code: self.error_code(),
        });
        (status, body).into_response()
    }
}
