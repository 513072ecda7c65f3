// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Admission gate for protected routes.
//!
//! Applied with `route_layer` so only matched protected routes are gated:
//!
//! ```rust,ignore
//! let protected = Router::new()
//!     .route("/students", get(list_students))
//!     .route_layer(axum::middleware::from_fn_with_state(state.clone(), admission_gate));
//! ```
//!
//! Each request is evaluated on its own: the token is read from the
//! `Authorization` header and validated. On success the resolved
//! [`AuthenticatedUser`] is inserted into the request extensions and the
//! handler runs; on failure the rejection is written and the handler never
//! runs.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::{AuthError, AuthenticatedUser, TokenValidator};
use crate::state::AppState;

/// Authentication middleware function.
pub async fn admission_gate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    match admit(request.headers(), &state.validator) {
        Ok(user) => {
            tracing::debug!(
                user_id = %user.user_id,
                path = %request.uri().path(),
                "request admitted"
            );
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(err) => {
            tracing::warn!(
                reason = err.error_code(),
                method = %request.method(),
                path = %request.uri().path(),
                "request rejected"
            );
            err.into_response()
        }
    }
}

/// Resolve the identity for a request from its headers.
pub fn admit(headers: &HeaderMap, validator: &TokenValidator) -> Result<AuthenticatedUser, AuthError> {
    let header = headers.get(AUTHORIZATION).ok_or(AuthError::MissingToken)?;
    let raw = header.to_str().map_err(|_| AuthError::MalformedToken)?;
    validator.validate(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{Auth, Identity, SecretKey, TokenIssuer};
    use axum::{
        body::{to_bytes, Body},
        http::{HeaderValue, StatusCode},
        routing::get,
        Json, Router,
    };
    use chrono::{Duration, Utc};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn validator() -> TokenValidator {
        TokenValidator::new(&SecretKey::new("test-secret").unwrap())
    }

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(&SecretKey::new("test-secret").unwrap())
    }

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    /// Router whose single handler counts its invocations.
    fn gated_app(hits: Arc<AtomicUsize>) -> Router {
        let state = AppState::default();
        Router::new()
            .route(
                "/whoami",
                get(move |Auth(user): Auth| {
                    let hits = hits.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        Json(user)
                    }
                }),
            )
            .route_layer(axum::middleware::from_fn_with_state(state.clone(), admission_gate))
            .with_state(state)
    }

    fn request(authorization: Option<&str>) -> Request {
        let mut builder = Request::builder().uri("/whoami");
        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn admit_requires_header() {
        assert_eq!(admit(&HeaderMap::new(), &validator()), Err(AuthError::MissingToken));
        assert_eq!(admit(&headers_with(""), &validator()), Err(AuthError::MissingToken));
    }

    #[test]
    fn admit_rejects_non_ascii_header() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_bytes(b"Bearer \xff\xfe").unwrap());
        assert_eq!(admit(&headers, &validator()), Err(AuthError::MalformedToken));
    }

    #[test]
    fn admit_accepts_raw_and_bearer_forms() {
        let token = issuer().issue(Identity::Numeric(1)).unwrap().token;

        let raw = admit(&headers_with(&token), &validator()).unwrap();
        let bearer = admit(&headers_with(&format!("Bearer {token}")), &validator()).unwrap();
        assert_eq!(raw.user_id, Identity::Numeric(1));
        assert_eq!(raw, bearer);
    }

    #[tokio::test]
    async fn valid_token_reaches_handler_with_identity() {
        let hits = Arc::new(AtomicUsize::new(0));
        let token = issuer().issue(Identity::Numeric(1)).unwrap().token;

        let response = gated_app(hits.clone())
            .oneshot(request(Some(&format!("Bearer {token}"))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(body_json(response).await["user_id"], 1);
    }

    #[tokio::test]
    async fn missing_header_never_reaches_handler() {
        let hits = Arc::new(AtomicUsize::new(0));

        let response = gated_app(hits.clone()).oneshot(request(None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert_eq!(body_json(response).await["message"], "no token provided");
    }

    #[tokio::test]
    async fn expired_token_is_rejected_with_reason() {
        let hits = Arc::new(AtomicUsize::new(0));
        let token = issuer()
            .issue_at(Identity::Numeric(1), Utc::now() - Duration::hours(30))
            .unwrap()
            .token;

        let response = gated_app(hits.clone())
            .oneshot(request(Some(&format!("Bearer {token}"))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        let body = body_json(response).await;
        assert_eq!(body["error_code"], "token_expired");
        assert!(body["message"].as_str().unwrap().contains("expired"));
    }

    #[tokio::test]
    async fn token_from_other_key_is_rejected() {
        let hits = Arc::new(AtomicUsize::new(0));
        let foreign = TokenIssuer::new(&SecretKey::new("not-our-secret").unwrap())
            .issue(Identity::Numeric(1))
            .unwrap()
            .token;

        let response = gated_app(hits.clone())
            .oneshot(request(Some(&foreign)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert_eq!(body_json(response).await["error_code"], "bad_signature");
    }
}
