// SPDX-FileCopyrightText: 2026 Strongbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! 256-bit symmetric key material.
//!
//! A [`SymmetricKey`] can only exist with exactly 32 bytes, so every codec
//! operation that accepts one is spared a runtime length check. The bytes
//! live in [`Zeroizing`] storage and are wiped when the key is dropped.

use std::fmt;

use rand::{CryptoRng, RngCore};
use strongbox_core::StrongboxError;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

/// Length of every symmetric key in bytes.
pub const KEY_LEN: usize = 32;

/// A 32-byte key for AES-256-GCM.
///
/// Debug output intentionally omits the key bytes.
pub struct SymmetricKey(Zeroizing<[u8; KEY_LEN]>);

impl SymmetricKey {
    /// Take ownership of raw key bytes.
    ///
    /// The caller's array is copied; wipe it afterwards if it outlives this call.
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(Zeroizing::new(bytes))
    }

    pub(crate) fn from_zeroizing(bytes: Zeroizing<[u8; KEY_LEN]>) -> Self {
        Self(bytes)
    }

    /// Generate a uniformly random key from `rng`.
    pub fn random_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, StrongboxError> {
        let mut bytes = Zeroizing::new([0u8; KEY_LEN]);
        rng.try_fill_bytes(&mut bytes[..])
            .map_err(|_| StrongboxError::Randomness("failed to generate random key".to_string()))?;
        Ok(Self(bytes))
    }

    /// Parse a key from its 64-character hex form.
    pub fn from_hex(hex_key: &str) -> Result<Self, StrongboxError> {
        let mut bytes = Zeroizing::new([0u8; KEY_LEN]);
        hex::decode_to_slice(hex_key.trim(), &mut bytes[..]).map_err(|_| {
            StrongboxError::InvalidKey(format!("expected {} hex characters", KEY_LEN * 2))
        })?;
        Ok(Self(bytes))
    }

    /// Lowercase hex encoding of the key.
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(&self.0[..]))
    }

    /// Borrow the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl TryFrom<&[u8]> for SymmetricKey {
    type Error = StrongboxError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != KEY_LEN {
            return Err(StrongboxError::InvalidKey(format!(
                "key must be {KEY_LEN} bytes, got {}",
                bytes.len()
            )));
        }
        let mut key = Zeroizing::new([0u8; KEY_LEN]);
        key.copy_from_slice(bytes);
        Ok(Self(key))
    }
}

impl PartialEq for SymmetricKey {
    fn eq(&self, other: &Self) -> bool {
        self.0[..].ct_eq(&other.0[..]).into()
    }
}

impl Eq for SymmetricKey {}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SymmetricKey([REDACTED])")
    }
}
