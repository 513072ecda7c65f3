// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Token-based authentication for the student service API.
//!
//! ## Auth Flow
//!
//! 1. Client posts `{username, password}` to `/login`
//! 2. `CredentialVerifier` checks the pair against the `IdentityStore`
//! 3. `TokenIssuer` signs an HS256 token binding the identity, valid 24 hours
//! 4. Client sends `Authorization: Bearer <token>` (or the bare token)
//! 5. `admission_gate` runs `TokenValidator` on every protected request:
//!    - structure, algorithm family, signature, expiry
//!    - success attaches `AuthenticatedUser` to the request extensions
//!
//! ## Security
//!
//! - Tokens are stateless; there is no revocation
//! - Only HS256/HS384/HS512 are accepted, so `alg: none` and asymmetric
//!   substitutions are refused before signature checking
//! - No clock skew tolerance
//! - The `Bearer ` prefix is optional for compatibility with existing clients

pub mod claims;
pub mod error;
pub mod extractor;
pub mod identity_store;
pub mod issuer;
pub mod middleware;
pub mod secret;
pub mod validator;
pub mod verifier;

pub use claims::{AuthenticatedUser, Claims, Identity};
pub use error::AuthError;
pub use extractor::Auth;
pub use identity_store::{IdentityStore, StaticIdentityStore};
pub use issuer::{IssuedToken, TokenIssuer, TOKEN_VALIDITY_HOURS};
pub use middleware::{admission_gate, admit};
pub use secret::SecretKey;
pub use validator::TokenValidator;
pub use verifier::CredentialVerifier;
