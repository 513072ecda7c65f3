// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Student Service - Token-Gated Student Records API
//!
//! A username/password login issues a signed, time-limited token; every
//! student record route requires that token and rejects requests that lack
//! a valid, unexpired one.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers and router (Axum)
//! - `auth` - Credential verification, token issuance and admission gate
//! - `config` - Environment-driven runtime configuration
//! - `storage` - Student record repository

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod storage;
