// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Credential verification for the login endpoint.

use std::sync::Arc;

use super::{AuthError, Identity, IdentityStore};

/// Checks submitted credentials against an [`IdentityStore`].
#[derive(Clone)]
pub struct CredentialVerifier {
    store: Arc<dyn IdentityStore>,
}

impl CredentialVerifier {
    pub fn new(store: Arc<dyn IdentityStore>) -> Self {
        Self { store }
    }

    /// Verify a username/password pair.
    ///
    /// Empty fields are a malformed request, not a credential failure.
    pub fn verify(&self, username: &str, password: &str) -> Result<Identity, AuthError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MalformedRequest);
        }

        self.store
            .lookup(username, password)
            .ok_or(AuthError::BadCredentials)
    }
}
