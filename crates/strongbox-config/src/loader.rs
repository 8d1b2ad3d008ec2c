// SPDX-FileCopyrightText: 2026 Strongbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration loading with figment.
//!
//! Lookup order: `./strongbox.toml` > `~/.config/strongbox/strongbox.toml` >
//! `/etc/strongbox/strongbox.toml`, with `STRONGBOX_*` environment overrides
//! on top.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::StrongboxConfig;

pub const SYSTEM_CONFIG_PATH: &str = "/etc/strongbox/strongbox.toml";
pub const LOCAL_CONFIG_FILE: &str = "strongbox.toml";

/// Config sections that environment variables may target.
const ENV_SECTIONS: [&str; 4] = ["logging", "kdf", "generator", "passphrase"];

/// Per-user config file under the platform config directory, if known.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("strongbox").join(LOCAL_CONFIG_FILE))
}

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/strongbox/strongbox.toml`
/// 3. `<config dir>/strongbox/strongbox.toml`
/// 4. `./strongbox.toml`
/// 5. `STRONGBOX_*` environment variables
///
/// Missing files are skipped.
pub fn load_config() -> Result<StrongboxConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string over the defaults (no files, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<StrongboxConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(StrongboxConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from one explicit file with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<StrongboxConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(StrongboxConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// The full layered figment, before extraction.
pub fn build_figment() -> Figment {
    let mut figment = Figment::new()
        .merge(Serialized::defaults(StrongboxConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH));
    if let Some(user) = user_config_path() {
        figment = figment.merge(Toml::file(user));
    }
    figment.merge(Toml::file(LOCAL_CONFIG_FILE)).merge(env_provider())
}

/// `STRONGBOX_<SECTION>_<KEY>` becomes `<section>.<key>`.
///
/// Mapped explicitly rather than split on `_` because keys such as
/// `word_count` contain underscores. Variables outside the config sections
/// (the secret-input variables, for one) are filtered out so
/// `deny_unknown_fields` does not reject them.
fn env_provider() -> Env {
    Env::prefixed("STRONGBOX_")
        .filter(|key| {
            let key_str = key.as_str().to_ascii_lowercase();
            ENV_SECTIONS
                .iter()
                .any(|section| key_str.starts_with(&format!("{section}_")))
        })
        .map(|key| {
            let key_str = key.as_str().to_ascii_lowercase();
            let mapped = ENV_SECTIONS
                .iter()
                .find_map(|section| {
                    key_str
                        .strip_prefix(&format!("{section}_"))
                        .map(|rest| format!("{section}.{rest}"))
                })
                .unwrap_or(key_str);
            mapped.into()
        })
}
