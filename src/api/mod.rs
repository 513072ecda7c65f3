// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::{admission_gate, AuthenticatedUser, Identity},
    models::{LoginRequest, LoginResponse, Student, StudentInput},
    state::AppState,
};

pub mod health;
pub mod login;
pub mod students;
pub mod users;

/// Mount point of the student record routes.
pub const API_PREFIX: &str = "/api/v1";

pub fn router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health::liveness))
        .route("/login", post(login::login));

    let student_routes = Router::new()
        .route(
            "/students",
            get(students::list_students).post(students::create_student),
        )
        .route(
            "/students/{id}",
            get(students::get_student)
                .put(students::update_student)
                .delete(students::delete_student),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), admission_gate));

    let user_routes = Router::new()
        .route("/me", get(users::get_current_user))
        .route_layer(middleware::from_fn_with_state(state.clone(), admission_gate));

    Router::new()
        .merge(public_routes)
        .merge(user_routes)
        .nest(API_PREFIX, student_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .layer(CorsLayer::permissive())
}

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::liveness,
        login::login,
        users::get_current_user,
        students::list_students,
        students::create_student,
        students::get_student,
        students::update_student,
        students::delete_student
    ),
    components(
        schemas(
            LoginRequest,
            LoginResponse,
            Student,
            StudentInput,
            AuthenticatedUser,
            Identity,
            users::UserMeResponse,
            health::HealthResponse
        )
    ),
    modifiers(&BearerSecurity),
    tags(
        (name = "Auth", description = "Login and token issuance"),
        (name = "Users", description = "Current identity"),
        (name = "Students", description = "Student record management"),
        (name = "Health", description = "Liveness probe")
    )
)]
struct ApiDoc;
