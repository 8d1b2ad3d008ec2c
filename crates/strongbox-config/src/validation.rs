// SPDX-FileCopyrightText: 2026 Strongbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks semantic constraints serde attributes cannot express: cost floors,
//! minimum lengths, and the set of recognized log levels.

use strongbox_crypto::generator::{MAX_PASSPHRASE_WORDS, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use strongbox_crypto::kdf::DEFAULT_ITERATIONS;

use crate::diagnostic::ConfigError;
use crate::model::StrongboxConfig;

/// Levels accepted by `logging.level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &StrongboxConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.logging.level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "logging.level `{}` is not one of {}",
                config.logging.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    // The default cost is a floor: it may be raised, never lowered.
    if config.kdf.iterations < DEFAULT_ITERATIONS {
        errors.push(ConfigError::Validation {
            message: format!(
                "kdf.iterations must be at least {DEFAULT_ITERATIONS}, got {}",
                config.kdf.iterations
            ),
        });
    }

    if config.generator.length < MIN_PASSWORD_LENGTH {
        errors.push(ConfigError::Validation {
            message: format!(
                "generator.length must be at least {MIN_PASSWORD_LENGTH}, got {}",
                config.generator.length
            ),
        });
    }

    if config.generator.length > MAX_PASSWORD_LENGTH {
        errors.push(ConfigError::Validation {
            message: format!(
                "generator.length must be at most {MAX_PASSWORD_LENGTH}, got {}",
                config.generator.length
            ),
        });
    }

    if config.generator.policy().classes().is_empty() {
        errors.push(ConfigError::Validation {
            message: "generator must enable at least one of lowercase, uppercase, digits, symbols"
                .to_string(),
        });
    }

    if config.passphrase.word_count < 1 {
        errors.push(ConfigError::Validation {
            message: "passphrase.word_count must be at least 1".to_string(),
        });
    }

    if config.passphrase.word_count > MAX_PASSPHRASE_WORDS {
        errors.push(ConfigError::Validation {
            message: format!(
                "passphrase.word_count must be at most {MAX_PASSPHRASE_WORDS}, got {}",
                config.passphrase.word_count
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
