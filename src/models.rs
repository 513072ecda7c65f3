// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response structures used by the REST API. All types derive
//! `Serialize`/`Deserialize` and `ToSchema` for JSON handling and OpenAPI
//! documentation.
//!
//! ## Model Categories
//!
//! - **Login**: credential submission and issued token
//! - **Students**: student records and their create/update payload
//! - **Envelope**: `{code, message, data}` wrapper for record responses

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// Login Models
// =============================================================================

/// Credentials submitted to `/login`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Issued access token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    /// Signed access token to send in the `Authorization` header.
    pub token: String,
    /// Always `Bearer`.
    pub token_type: String,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
}

// =============================================================================
// Student Models
// =============================================================================

/// A stored student record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Student {
    /// Identifier assigned by the store.
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub email: String,
    pub grade: String,
}

/// Payload for creating or replacing a student record.
///
/// Any `id` in the body is ignored; the store assigns ids on create and the
/// path supplies it on update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct StudentInput {
    pub name: String,
    pub age: i32,
    pub email: String,
    pub grade: String,
}

impl Student {
    pub fn from_input(id: i64, input: StudentInput) -> Self {
        Self {
            id,
            name: input.name,
            age: input.age,
            email: input.email,
            grade: input.grade,
        }
    }
}

// =============================================================================
// Response Envelope
// =============================================================================

/// Wrapper used by the record endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Envelope<T> {
    /// Mirrors the HTTP status code.
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn new(code: u16, message: impl Into<String>, data: T) -> Self {
        Self {
            code,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn success(data: T) -> Self {
        Self::new(200, "success", data)
    }
}

impl Envelope<()> {
    /// Envelope with no payload.
    pub fn empty(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}
