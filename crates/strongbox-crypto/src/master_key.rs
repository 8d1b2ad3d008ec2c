// SPDX-FileCopyrightText: 2026 Strongbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Master key generation and password-based wrapping.
//!
//! Key-wrapping pattern:
//! - A random master key encrypts every entry envelope.
//! - The master key itself is encrypted (as lowercase hex) under a key
//!   derived from the user's password with PBKDF2.
//! - Changing the password only re-wraps the master key; entry envelopes are
//!   never re-encrypted.
//!
//! A wrong password is indistinguishable from a corrupted wrapper: both fail
//! with [`StrongboxError::DecryptionFailed`].

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use secrecy::{ExposeSecret, SecretString};
use strongbox_core::StrongboxError;
use tracing::{debug, info};

use crate::envelope::{self, Envelope};
use crate::kdf::{self, DEFAULT_ITERATIONS, Salt};
use crate::keys::SymmetricKey;

/// Generate a fresh master key from the operating system CSPRNG.
pub fn generate_master_key() -> Result<SymmetricKey, StrongboxError> {
    SymmetricKey::random_with_rng(&mut OsRng)
}

/// Wrap `master_key` under `password` and `salt` at the default cost.
pub fn wrap_master_key(
    master_key: &SymmetricKey,
    password: &SecretString,
    salt: &Salt,
) -> Result<Envelope, StrongboxError> {
    KeyWrapper::default().wrap(master_key, password, salt)
}

/// Unwrap a master key wrapped by [`wrap_master_key`].
pub fn unwrap_master_key(
    wrapped: &Envelope,
    password: &SecretString,
    salt: &Salt,
) -> Result<SymmetricKey, StrongboxError> {
    KeyWrapper::default().unwrap(wrapped, password, salt)
}

/// Change the master password at the default cost.
///
/// Returns the fresh salt and the new wrapper.
pub fn rewrap_master_key(
    wrapped: &Envelope,
    old_password: &SecretString,
    old_salt: &Salt,
    new_password: &SecretString,
) -> Result<(Salt, Envelope), StrongboxError> {
    KeyWrapper::default().rewrap(wrapped, old_password, old_salt, new_password)
}

/// Wraps and unwraps master keys at a fixed PBKDF2 cost.
///
/// The iteration count used to wrap must be supplied again to unwrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyWrapper {
    iterations: u32,
}

impl Default for KeyWrapper {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl KeyWrapper {
    /// A wrapper deriving keys with `iterations` PBKDF2 rounds.
    pub fn new(iterations: u32) -> Result<Self, StrongboxError> {
        if iterations == 0 {
            return Err(StrongboxError::InvalidParameters(
                "iteration count must be at least 1".to_string(),
            ));
        }
        Ok(Self { iterations })
    }

    /// The PBKDF2 iteration count.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Encrypt the master key's hex form under a key derived from `password`.
    pub fn wrap(
        &self,
        master_key: &SymmetricKey,
        password: &SecretString,
        salt: &Salt,
    ) -> Result<Envelope, StrongboxError> {
        self.wrap_with_rng(master_key, password, salt, &mut OsRng)
    }

    /// As [`KeyWrapper::wrap`], drawing the envelope nonce from `rng`.
    pub fn wrap_with_rng<R: RngCore + CryptoRng>(
        &self,
        master_key: &SymmetricKey,
        password: &SecretString,
        salt: &Salt,
        rng: &mut R,
    ) -> Result<Envelope, StrongboxError> {
        let wrapping_key = kdf::derive_key(password.expose_secret(), salt, self.iterations)?;
        let master_hex = master_key.to_hex();
        let wrapped = envelope::encrypt_with_rng(&wrapping_key, master_hex.as_bytes(), rng)?;

        info!(iterations = self.iterations, "master key wrapped");
        Ok(wrapped)
    }

    /// Recover the master key from its wrapped envelope.
    pub fn unwrap(
        &self,
        wrapped: &Envelope,
        password: &SecretString,
        salt: &Salt,
    ) -> Result<SymmetricKey, StrongboxError> {
        let wrapping_key = kdf::derive_key(password.expose_secret(), salt, self.iterations)?;
        let master_hex = envelope::decrypt(&wrapping_key, wrapped)?;

        // Authenticated but not a key: report it like any other open failure.
        let master_hex = std::str::from_utf8(&master_hex).map_err(|_| StrongboxError::DecryptionFailed)?;
        let master_key =
            SymmetricKey::from_hex(master_hex).map_err(|_| StrongboxError::DecryptionFailed)?;

        debug!("master key unwrapped");
        Ok(master_key)
    }

    /// Re-wrap a master key under a new password and a fresh salt.
    ///
    /// Returns the new salt and wrapper. Entry envelopes encrypted under the
    /// master key stay valid.
    pub fn rewrap(
        &self,
        wrapped: &Envelope,
        old_password: &SecretString,
        old_salt: &Salt,
        new_password: &SecretString,
    ) -> Result<(Salt, Envelope), StrongboxError> {
        self.rewrap_with_rng(wrapped, old_password, old_salt, new_password, &mut OsRng)
    }

    /// As [`KeyWrapper::rewrap`], drawing the salt and nonce from `rng`.
    pub fn rewrap_with_rng<R: RngCore + CryptoRng>(
        &self,
        wrapped: &Envelope,
        old_password: &SecretString,
        old_salt: &Salt,
        new_password: &SecretString,
        rng: &mut R,
    ) -> Result<(Salt, Envelope), StrongboxError> {
        let master_key = self.unwrap(wrapped, old_password, old_salt)?;
        let new_salt = kdf::generate_salt_with_rng(rng)?;
        let rewrapped = self.wrap_with_rng(&master_key, new_password, &new_salt, rng)?;

        info!("master key re-wrapped under new password");
        Ok((new_salt, rewrapped))
    }
}
