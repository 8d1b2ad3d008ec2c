// SPDX-FileCopyrightText: 2026 Strongbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Strongbox secret engine.
//!
//! No variant ever carries plaintext, keys, salts, or passwords.

use thiserror::Error;

/// The error type returned by every Strongbox operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrongboxError {
    /// Key material is not exactly 32 bytes.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// The cipher could not seal the plaintext.
    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    /// Any failure to open an envelope.
    ///
    /// Malformed base64, truncation, and tag mismatch all map here with the
    /// same message so a caller cannot tell a wrong key from corrupted data.
    #[error("decryption failed: wrong key or corrupted data")]
    DecryptionFailed,

    /// Decrypted bytes are not a valid entry record.
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// A generator or derivation was asked for an impossible configuration.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// The operating-system random source failed.
    #[error("random source failure: {0}")]
    Randomness(String),
}

impl StrongboxError {
    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidKey(_) => "invalid_key",
            Self::EncryptionFailed(_) => "encryption_failed",
            Self::DecryptionFailed => "decryption_failed",
            Self::MalformedRecord(_) => "malformed_record",
            Self::InvalidParameters(_) => "invalid_parameters",
            Self::Randomness(_) => "randomness",
        }
    }
}
