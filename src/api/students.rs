// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Student record endpoints.
//!
//! All routes sit behind the admission gate. The acting identity is logged
//! on mutations but does not restrict which records can be touched.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use crate::{
    auth::Auth,
    error::ApiError,
    models::{Envelope, Student, StudentInput},
    state::AppState,
};

fn student_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|_| ApiError::bad_request("invalid student id"))
}

fn student_body(body: Result<Json<StudentInput>, JsonRejection>) -> Result<StudentInput, ApiError> {
    body.map(|Json(input)| input)
        .map_err(|rejection| ApiError::bad_request(format!("invalid request body: {}", rejection.body_text())))
}

#[utoipa::path(
    get,
    path = "/api/v1/students",
    tag = "Students",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All students ordered by id", body = Envelope<Vec<Student>>),
        (status = 401, description = "Missing or invalid token"),
    )
)]
pub async fn list_students(
    Auth(_user): Auth,
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<Student>>>, ApiError> {
    let store = state.students.read().await;
    Ok(Json(Envelope::success(store.list()?)))
}

#[utoipa::path(
    post,
    path = "/api/v1/students",
    request_body = StudentInput,
    tag = "Students",
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Student created", body = Envelope<Student>),
        (status = 400, description = "Body missing, malformed or rejected by the store"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
pub async fn create_student(
    Auth(user): Auth,
    State(state): State<AppState>,
    body: Result<Json<StudentInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<Student>>), ApiError> {
    let input = student_body(body)?;

    let student = state.students.write().await.create(input)?;
    tracing::info!(user_id = %user.user_id, student_id = student.id, "student created");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::new(201, "student created", student)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/students/{id}",
    params(("id" = i64, Path, description = "Student identifier")),
    tag = "Students",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The student", body = Envelope<Student>),
        (status = 400, description = "Id is not an integer"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "No such student"),
    )
)]
pub async fn get_student(
    Auth(_user): Auth,
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Envelope<Student>>, ApiError> {
    let id = student_id(path)?;
    let store = state.students.read().await;
    Ok(Json(Envelope::success(store.get(id)?)))
}

#[utoipa::path(
    put,
    path = "/api/v1/students/{id}",
    params(("id" = i64, Path, description = "Student identifier")),
    request_body = StudentInput,
    tag = "Students",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Student updated", body = Envelope<Student>),
        (status = 400, description = "Bad id or body"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "No such student"),
    )
)]
pub async fn update_student(
    Auth(user): Auth,
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<StudentInput>, JsonRejection>,
) -> Result<Json<Envelope<Student>>, ApiError> {
    let id = student_id(path)?;
    let input = student_body(body)?;

    let student = state.students.write().await.update(id, input)?;
    tracing::info!(user_id = %user.user_id, student_id = id, "student updated");

    Ok(Json(Envelope::new(200, "student updated", student)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/students/{id}",
    params(("id" = i64, Path, description = "Student identifier")),
    tag = "Students",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Student deleted"),
        (status = 400, description = "Id is not an integer"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "No such student"),
    )
)]
pub async fn delete_student(
    Auth(user): Auth,
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Envelope<()>>, ApiError> {
    let id = student_id(path)?;

    state.students.write().await.delete(id)?;
    tracing::info!(user_id = %user.user_id, student_id = id, "student deleted");

    Ok(Json(Envelope::empty(200, "student deleted")))
}
