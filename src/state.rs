// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::auth::{
    CredentialVerifier, IdentityStore, SecretKey, StaticIdentityStore, TokenIssuer, TokenValidator,
};
use crate::config::AppConfig;
use crate::storage::{self, InMemoryStudentStore, SharedStudentRepository, StudentRepository};

#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<CredentialVerifier>,
    pub issuer: Arc<TokenIssuer>,
    pub validator: Arc<TokenValidator>,
    pub students: SharedStudentRepository,
}

impl AppState {
    /// Issuer and validator are both built from the same `secret`.
    pub fn new(
        secret: &SecretKey,
        identities: Arc<dyn IdentityStore>,
        students: impl StudentRepository + 'static,
    ) -> Self {
        Self {
            verifier: Arc::new(CredentialVerifier::new(identities)),
            issuer: Arc::new(TokenIssuer::new(secret)),
            validator: Arc::new(TokenValidator::new(secret)),
            students: storage::shared(students),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let account = &config.account;
        let identities = StaticIdentityStore::new(
            account.username.clone(),
            account.password.clone(),
            account.subject.clone(),
        );
        Self::new(&config.secret, Arc::new(identities), InMemoryStudentStore::new())
    }
}

#[cfg(test)]
impl Default for AppState {
    /// `admin`/`password` account with identity `1`, signing with `test-secret`.
    fn default() -> Self {
        use crate::auth::Identity;

        let secret = SecretKey::new("test-secret").expect("non-empty test secret");
        Self::new(
            &secret,
            Arc::new(StaticIdentityStore::new("admin", "password", Identity::Numeric(1))),
            InMemoryStudentStore::new(),
        )
    }
}
