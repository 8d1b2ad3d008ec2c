// SPDX-FileCopyrightText: 2026 Strongbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Strongbox secret engine.
//!
//! Holds the error type shared by the crypto engine, the configuration
//! layer, and the command-line tool.

pub mod error;

// Re-export key items at crate root for ergonomic imports.
pub use error::StrongboxError;
