// SPDX-FileCopyrightText: 2026 Strongbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! PBKDF2-HMAC-SHA256 key derivation from a password.
//!
//! Derivation is a pure function of (password, salt, iterations), so the key
//! is re-derived on every unlock instead of being stored.

use std::num::NonZeroU32;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use ring::pbkdf2;
use strongbox_core::StrongboxError;
use zeroize::Zeroizing;

use crate::keys::{KEY_LEN, SymmetricKey};

/// Salt length in bytes.
pub const SALT_LEN: usize = 16;

/// Default PBKDF2 iteration count.
///
/// This is a floor, not a ceiling: configuration may raise it, and keys
/// wrapped under a higher count need that same count to unwrap.
pub const DEFAULT_ITERATIONS: u32 = 100_000;

/// A per-password random salt.
pub type Salt = [u8; SALT_LEN];

/// Derive a 32-byte key from `password` with PBKDF2-HMAC-SHA256.
pub fn derive_key(password: &str, salt: &Salt, iterations: u32) -> Result<SymmetricKey, StrongboxError> {
    let iterations = NonZeroU32::new(iterations).ok_or_else(|| {
        StrongboxError::InvalidParameters("iteration count must be at least 1".to_string())
    })?;

    let mut output = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2_sha256(password.as_bytes(), salt, iterations, &mut output[..]);
    Ok(SymmetricKey::from_zeroizing(output))
}

fn pbkdf2_sha256(secret: &[u8], salt: &[u8], iterations: NonZeroU32, out: &mut [u8]) {
    pbkdf2::derive(pbkdf2::PBKDF2_HMAC_SHA256, iterations, salt, secret, out);
}

/// Generate a fresh random salt from the operating system CSPRNG.
pub fn generate_salt() -> Result<Salt, StrongboxError> {
    generate_salt_with_rng(&mut OsRng)
}

/// Generate a fresh random salt from `rng`.
pub fn generate_salt_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Salt, StrongboxError> {
    let mut salt = [0u8; SALT_LEN];
    rng.try_fill_bytes(&mut salt)
        .map_err(|_| StrongboxError::Randomness("failed to generate random salt".to_string()))?;
    Ok(salt)
}

/// Parse a salt from its 32-character hex form.
pub fn salt_from_hex(hex_salt: &str) -> Result<Salt, StrongboxError> {
    let mut salt = [0u8; SALT_LEN];
    hex::decode_to_slice(hex_salt.trim(), &mut salt).map_err(|_| {
        StrongboxError::InvalidParameters(format!("salt must be {} hex characters", SALT_LEN * 2))
    })?;
    Ok(salt)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Use low cost for fast tests.
    const TEST_ITERATIONS: u32 = 1_000;

    #[test]
    fn matches_pbkdf2_hmac_sha256_reference_vectors() {
        let cases = [
            (1, "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b"),
            (2, "ae4d0c95af6b46d32d0adff928f06dd02a303f8ef3c251dfd6e2d85a95474c43"),
        ];
        for (iterations, expected) in cases {
            let mut out = [0u8; 32];
            pbkdf2_sha256(
                b"password",
                b"salt",
                NonZeroU32::new(iterations).unwrap(),
                &mut out,
            );
            assert_eq!(hex::encode(out), expected, "iterations {iterations}");
        }
    }

    #[test]
    fn derive_key_produces_consistent_output() {
        let salt = [1u8; 16];

        let key1 = derive_key("test passphrase", &salt, TEST_ITERATIONS).unwrap();
        let key2 = derive_key("test passphrase", &salt, TEST_ITERATIONS).unwrap();

        assert_eq!(key1, key2);
    }

    #[test]
    fn derive_key_different_password_produces_different_output() {
        let salt = [2u8; 16];

        let key1 = derive_key("passphrase one", &salt, TEST_ITERATIONS).unwrap();
        let key2 = derive_key("passphrase two", &salt, TEST_ITERATIONS).unwrap();

        assert_ne!(key1, key2);
    }

    #[test]
    fn derive_key_different_salt_produces_different_output() {
        let key1 = derive_key("same passphrase", &[1u8; 16], TEST_ITERATIONS).unwrap();
        let key2 = derive_key("same passphrase", &[2u8; 16], TEST_ITERATIONS).unwrap();

        assert_ne!(key1, key2);
    }

    #[test]
    fn derive_key_different_iterations_produces_different_output() {
        let salt = [3u8; 16];

        let key1 = derive_key("same passphrase", &salt, TEST_ITERATIONS).unwrap();
        let key2 = derive_key("same passphrase", &salt, TEST_ITERATIONS + 1).unwrap();

        assert_ne!(key1, key2);
    }

    #[test]
    fn zero_iterations_is_rejected() {
        let err = derive_key("pw", &[0u8; 16], 0).unwrap_err();
        assert!(matches!(err, StrongboxError::InvalidParameters(_)));
    }

    #[test]
    fn empty_password_still_derives() {
        let key = derive_key("", &[0u8; 16], TEST_ITERATIONS).unwrap();
        assert_eq!(key.as_bytes().len(), 32);
    }

    #[test]
    fn generate_salt_produces_random_values() {
        let salt1 = generate_salt().unwrap();
        let salt2 = generate_salt().unwrap();

        assert_ne!(salt1, salt2);
    }

    #[test]
    fn salt_hex_parsing() {
        let salt = [0xA5u8; 16];
        assert_eq!(salt_from_hex(&hex::encode(salt)).unwrap(), salt);
        assert!(salt_from_hex("a5a5").is_err());
        assert!(salt_from_hex(&"g0".repeat(16)).is_err());
    }
}
