// SPDX-FileCopyrightText: 2026 Strongbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cryptographic engine for the Strongbox secret store.
//!
//! Turns structured credential records into AES-256-GCM envelopes and back,
//! derives keys from passwords with PBKDF2-HMAC-SHA256, wraps a random
//! master key under a password-derived key, and generates and scores
//! secrets.
//!
//! ```text
//! password + salt ──PBKDF2──▶ wrapping key ──wraps──▶ master key
//!                                                        │
//! EntryRecord ──serialize──▶ canonical JSON ──AES-256-GCM─┴──▶ Envelope
//! ```
//!
//! Every operation is synchronous and keeps no state between calls. Anything
//! that needs randomness has a `*_with_rng` form accepting any
//! `RngCore + CryptoRng`; the plain form uses the operating system CSPRNG.

pub mod entry;
pub mod envelope;
pub mod generator;
pub mod kdf;
pub mod keys;
pub mod mask;
pub mod master_key;
pub mod strength;
mod wordlist;

pub use entry::{EntryRecord, decrypt_entry, deserialize_entry, encrypt_entry, serialize_entry};
pub use envelope::{Envelope, decrypt, encrypt};
pub use generator::{PassphrasePolicy, PasswordPolicy, generate_passphrase, generate_password};
pub use kdf::{DEFAULT_ITERATIONS, SALT_LEN, Salt, derive_key, generate_salt};
pub use keys::{KEY_LEN, SymmetricKey};
pub use mask::mask_secret;
pub use master_key::{
    KeyWrapper, generate_master_key, rewrap_master_key, unwrap_master_key, wrap_master_key,
};
pub use strength::{StrengthReport, score_password};
pub use strongbox_core::StrongboxError;
