// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Process-wide token signing secret.

use std::fmt;
use std::sync::Arc;

use jsonwebtoken::{DecodingKey, EncodingKey};

/// Symmetric key shared by the token issuer and validator.
///
/// Loaded once at startup and handed to both constructors. Cloning shares
/// the same bytes. `Debug` never prints the key.
#[derive(Clone)]
pub struct SecretKey(Arc<[u8]>);

impl SecretKey {
    /// Wrap raw key bytes. Returns `None` for an empty key.
    pub fn new(bytes: impl AsRef<[u8]>) -> Option<Self> {
        let bytes = bytes.as_ref();
        if bytes.is_empty() {
            return None;
        }
        Some(Self(Arc::from(bytes)))
    }

    pub(crate) fn encoding_key(&self) -> EncodingKey {
        EncodingKey::from_secret(&self.0)
    }

    pub(crate) fn decoding_key(&self) -> DecodingKey {
        DecodingKey::from_secret(&self.0)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_key_is_rejected() {
        assert!(SecretKey::new("").is_none());
        assert!(SecretKey::new("k").is_some());
    }

    #[test]
    fn debug_output_is_redacted() {
        let key = SecretKey::new("super-secret-value").unwrap();
        let printed = format!("{key:?}");
        assert!(!printed.contains("super-secret-value"));
    }
}
