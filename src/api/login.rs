// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Login endpoint.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::{
    auth::AuthError,
    models::{LoginRequest, LoginResponse},
    state::AppState,
};

/// Exchange a username and password for an access token.
///
/// The token is valid for 24 hours and must be sent in the `Authorization`
/// header of every protected request.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    tag = "Auth",
    responses(
        (status = 200, description = "Credentials accepted", body = LoginResponse),
        (status = 400, description = "Body missing or malformed"),
        (status = 401, description = "Invalid username or password"),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AuthError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "login body rejected");
        AuthError::MalformedRequest
    })?;

    let identity = state
        .verifier
        .verify(&request.username, &request.password)
        .inspect_err(|err| {
            tracing::warn!(reason = err.error_code(), "login failed");
            tracing::debug!(username = %request.username, "rejected login attempt");
        })?;

    let issued = state.issuer.issue(identity.clone())?;

    tracing::info!(
        user_id = %identity,
        expires_at = %issued.expires_at,
        "login succeeded"
    );

    Ok(Json(LoginResponse {
        token: issued.token,
        token_type: "Bearer".to_string(),
        expires_at: issued.expires_at,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Identity;
    use axum::{
        body::{to_bytes, Body},
        http::{header::CONTENT_TYPE, Request, StatusCode},
        response::IntoResponse,
        routing::post,
        Router,
    };
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    fn app(state: AppState) -> Router {
        Router::new().route("/login", post(login)).with_state(state)
    }

    fn login_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/login")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn issued_token_validates_to_configured_identity() {
        let state = AppState::default();
        let request = LoginRequest {
            username: "admin".into(),
            password: "password".into(),
        };

        let Json(response) = login(State(state.clone()), Ok(Json(request)))
            .await
            .expect("login succeeds");

        assert!(!response.token.is_empty());
        assert_eq!(response.token_type, "Bearer");
        let user = state.validator.validate(&response.token).unwrap();
        assert_eq!(user.user_id, Identity::Numeric(1));
    }

    #[tokio::test]
    async fn wrong_password_is_bad_credentials() {
        let request = LoginRequest {
            username: "admin".into(),
            password: "wrong".into(),
        };

        let result = login(State(AppState::default()), Ok(Json(request))).await;
        assert!(matches!(result, Err(AuthError::BadCredentials)));
    }

    #[tokio::test]
    async fn unparseable_bodies_are_400() {
        for body in ["{", r#"{"username":"admin"}"#, r#"{"username":1,"password":2}"#] {
            let response = app(AppState::default())
                .oneshot(login_request(body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        }
    }

    #[tokio::test]
    async fn empty_fields_are_400_not_401() {
        let response = app(AppState::default())
            .oneshot(login_request(r#"{"username":"","password":""}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    /// Shared buffer that tracing output is written into.
    #[derive(Clone, Default)]
    struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

    impl Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn failed_login_warning_omits_username() {
        let capture = CaptureWriter::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let request = LoginRequest {
            username: "mallory".into(),
            password: "guess".into(),
        };
        let result = login(State(AppState::default()), Ok(Json(request))).await;
        assert!(matches!(result, Err(AuthError::BadCredentials)));

        let output = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("login failed"), "{output}");
        assert!(output.contains("bad_credentials"), "{output}");
        assert!(!output.contains("mallory"), "{output}");
    }

    #[tokio::test]
    async fn bad_credentials_body_does_not_name_the_field() {
        let response = AuthError::BadCredentials.into_response();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "invalid username or password");
    }
}
