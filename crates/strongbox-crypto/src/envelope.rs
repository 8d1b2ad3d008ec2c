// SPDX-FileCopyrightText: 2026 Strongbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! AES-256-GCM envelope codec.
//!
//! Wire format: standard padded base64 of `nonce (12) || ciphertext || tag (16)`.
//! The ciphertext is exactly as long as the plaintext. Every call to
//! [`encrypt`] draws a fresh 96-bit nonce from the random source; nothing
//! about the nonce is derived or counted, so concurrent callers sharing a key
//! need no coordination. Nonce reuse would be catastrophic for GCM security.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use ring::aead::{AES_256_GCM, Aad, LessSafeKey, Nonce, UnboundKey};
use serde::{Deserialize, Serialize};
use strongbox_core::StrongboxError;
use zeroize::Zeroizing;

use crate::keys::SymmetricKey;

/// Nonce length prepended to every envelope.
pub const NONCE_LEN: usize = 12;

/// Authentication tag length appended by the cipher.
pub const TAG_LEN: usize = 16;

/// An opaque, base64-encoded ciphertext envelope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Envelope(String);

impl Envelope {
    /// Borrow the base64 text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the envelope, returning the base64 text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for Envelope {
    fn from(encoded: String) -> Self {
        Self(encoded)
    }
}

impl From<&str> for Envelope {
    fn from(encoded: &str) -> Self {
        Self(encoded.to_string())
    }
}

impl FromStr for Envelope {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().to_string()))
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Encrypt `plaintext` under `key` with a nonce from the operating system CSPRNG.
pub fn encrypt(key: &SymmetricKey, plaintext: &[u8]) -> Result<Envelope, StrongboxError> {
    encrypt_with_rng(key, plaintext, &mut OsRng)
}

/// Encrypt `plaintext` under `key`, drawing the nonce from `rng`.
pub fn encrypt_with_rng<R: RngCore + CryptoRng>(
    key: &SymmetricKey,
    plaintext: &[u8],
    rng: &mut R,
) -> Result<Envelope, StrongboxError> {
    let less_safe = aead_key(key)
        .map_err(|_| StrongboxError::EncryptionFailed("failed to create AES-256-GCM key".to_string()))?;

    let mut nonce_bytes = [0u8; NONCE_LEN];
    rng.try_fill_bytes(&mut nonce_bytes)
        .map_err(|_| StrongboxError::Randomness("failed to generate random nonce".to_string()))?;
    let nonce = Nonce::assume_unique_for_key(nonce_bytes);

    // Wiped on drop, including when sealing fails with plaintext still in
    // place. Exact capacity: the tag append must not reallocate and strand a
    // copy of the plaintext in freed memory.
    let mut sealed = Zeroizing::new(Vec::with_capacity(NONCE_LEN + plaintext.len() + TAG_LEN));
    sealed.extend_from_slice(&nonce_bytes);
    sealed.extend_from_slice(plaintext);
    let tag = less_safe
        .seal_in_place_separate_tag(nonce, Aad::empty(), &mut sealed[NONCE_LEN..])
        .map_err(|_| StrongboxError::EncryptionFailed("AES-256-GCM encryption failed".to_string()))?;
    sealed.extend_from_slice(tag.as_ref());

    Ok(Envelope(STANDARD.encode(&sealed[..])))
}

/// Decrypt and authenticate an envelope.
///
/// Bad base64, a truncated envelope, and a tag mismatch all fail with the
/// same [`StrongboxError::DecryptionFailed`]. Unauthenticated bytes are never
/// returned.
pub fn decrypt(key: &SymmetricKey, envelope: &Envelope) -> Result<Zeroizing<Vec<u8>>, StrongboxError> {
    let mut nonce_and_body = STANDARD
        .decode(envelope.as_str())
        .map_err(|_| StrongboxError::DecryptionFailed)?;
    if nonce_and_body.len() < NONCE_LEN + TAG_LEN {
        return Err(StrongboxError::DecryptionFailed);
    }

    let mut in_out = Zeroizing::new(nonce_and_body.split_off(NONCE_LEN));
    let nonce = Nonce::try_assume_unique_for_key(&nonce_and_body)
        .map_err(|_| StrongboxError::DecryptionFailed)?;
    let less_safe = aead_key(key).map_err(|_| StrongboxError::DecryptionFailed)?;

    let plaintext_len = less_safe
        .open_in_place(nonce, Aad::empty(), in_out.as_mut_slice())
        .map_err(|_| StrongboxError::DecryptionFailed)?
        .len();
    in_out.truncate(plaintext_len);

    Ok(in_out)
}

fn aead_key(key: &SymmetricKey) -> Result<LessSafeKey, ring::error::Unspecified> {
    let unbound = UnboundKey::new(&AES_256_GCM, key.as_bytes())?;
    Ok(LessSafeKey::new(unbound))
}
