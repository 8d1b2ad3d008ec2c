// SPDX-FileCopyrightText: 2026 Strongbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for Strongbox.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelled key is
//! reported instead of silently ignored.

use serde::{Deserialize, Serialize};
use strongbox_crypto::generator::{PassphrasePolicy, PasswordPolicy};
use strongbox_crypto::kdf::DEFAULT_ITERATIONS;

/// Top-level Strongbox configuration.
///
/// Every section is optional and falls back to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StrongboxConfig {
    /// Log verbosity for the command-line tool.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Master-key derivation cost.
    #[serde(default)]
    pub kdf: KdfConfig,

    /// Defaults for `strongbox generate`.
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Defaults for `strongbox passphrase`.
    #[serde(default)]
    pub passphrase: PassphraseConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct KdfConfig {
    /// PBKDF2-HMAC-SHA256 iteration count (default and floor: 100000).
    #[serde(default = "default_kdf_iterations")]
    pub iterations: u32,
}

impl Default for KdfConfig {
    fn default() -> Self {
        Self {
            iterations: default_kdf_iterations(),
        }
    }
}

fn default_kdf_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Generated password length in characters.
    #[serde(default = "default_password_length")]
    pub length: usize,

    #[serde(default = "default_true")]
    pub lowercase: bool,

    #[serde(default = "default_true")]
    pub uppercase: bool,

    #[serde(default = "default_true")]
    pub digits: bool,

    #[serde(default = "default_true")]
    pub symbols: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: default_password_length(),
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
        }
    }
}

impl GeneratorConfig {
    /// The password policy these settings describe.
    pub fn policy(&self) -> PasswordPolicy {
        PasswordPolicy {
            length: self.length,
            lowercase: self.lowercase,
            uppercase: self.uppercase,
            digits: self.digits,
            symbols: self.symbols,
        }
    }
}

fn default_password_length() -> usize {
    PasswordPolicy::default().length
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PassphraseConfig {
    /// Number of words drawn.
    #[serde(default = "default_word_count")]
    pub word_count: usize,

    /// Text placed between words.
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Upper-case the first letter of each word.
    #[serde(default = "default_true")]
    pub capitalize: bool,
}

impl Default for PassphraseConfig {
    fn default() -> Self {
        Self {
            word_count: default_word_count(),
            separator: default_separator(),
            capitalize: true,
        }
    }
}

impl PassphraseConfig {
    /// The passphrase policy these settings describe.
    pub fn policy(&self) -> PassphrasePolicy {
        PassphrasePolicy {
            word_count: self.word_count,
            separator: self.separator.clone(),
            capitalize: self.capitalize,
        }
    }
}

fn default_word_count() -> usize {
    4
}

fn default_separator() -> String {
    "-".to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_engine_defaults() {
        let config = StrongboxConfig::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.kdf.iterations, 100_000);
        assert_eq!(config.generator.policy(), PasswordPolicy::default());
        assert_eq!(config.passphrase.policy(), PassphrasePolicy::default());
    }

    #[test]
    fn partial_section_fills_remaining_defaults() {
        let toml_str = r#"
[generator]
length = 24
symbols = false
"#;
        let config: StrongboxConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.generator.length, 24);
        assert!(!config.generator.symbols);
        assert!(config.generator.lowercase);
        assert_eq!(config.passphrase.word_count, 4);
    }

    #[test]
    fn sections_deny_unknown_fields() {
        let toml_str = r#"
[passphrase]
words = 6
"#;
        assert!(toml::from_str::<StrongboxConfig>(toml_str).is_err());
    }
}
