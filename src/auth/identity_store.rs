// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Trusted identity lookup used by the credential verifier.

use super::claims::Identity;

/// Source of trusted username/password pairs.
///
/// Implementations must not reveal which of the two fields failed to match.
pub trait IdentityStore: Send + Sync {
    /// Return the identity bound to this credential pair, if any.
    fn lookup(&self, username: &str, password: &str) -> Option<Identity>;
}

/// Identity store holding a single configured account.
#[derive(Debug, Clone)]
pub struct StaticIdentityStore {
    username: String,
    password: String,
    identity: Identity,
}

impl StaticIdentityStore {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        identity: impl Into<Identity>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            identity: identity.into(),
        }
    }
}

impl IdentityStore for StaticIdentityStore {
    fn lookup(&self, username: &str, password: &str) -> Option<Identity> {
        // Compare both fields unconditionally
        let username_ok = self.username == username;
        let password_ok = self.password == password;
        (username_ok & password_ok).then(|| self.identity.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_matches_configured_pair() {
        let store = StaticIdentityStore::new("admin", "password", Identity::Numeric(1));
        assert_eq!(store.lookup("admin", "password"), Some(Identity::Numeric(1)));
    }

    #[test]
    fn lookup_rejects_any_mismatch() {
        let store = StaticIdentityStore::new("admin", "password", Identity::Numeric(1));
        assert_eq!(store.lookup("admin", "wrong"), None);
        assert_eq!(store.lookup("root", "password"), None);
        assert_eq!(store.lookup("ADMIN", "PASSWORD"), None);
    }
}
