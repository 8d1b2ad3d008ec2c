// SPDX-FileCopyrightText: 2026 Strongbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Secret acquisition via environment variable or TTY prompt.
//!
//! An environment variable wins when set and non-empty; otherwise an
//! interactive `rpassword` prompt is used. Non-interactive sessions without
//! the variable fail with a message naming it.

use std::io::IsTerminal;

use secrecy::SecretString;
use strongbox_core::StrongboxError;

/// Current master password.
pub const MASTER_PASSWORD_ENV_VAR: &str = "STRONGBOX_MASTER_PASSWORD";

/// Replacement master password for `rewrap`.
pub const NEW_MASTER_PASSWORD_ENV_VAR: &str = "STRONGBOX_NEW_MASTER_PASSWORD";

/// Password stored in (or scored for) an entry.
pub const ENTRY_PASSWORD_ENV_VAR: &str = "STRONGBOX_ENTRY_PASSWORD";

pub fn master_password() -> Result<SecretString, StrongboxError> {
    read_secret(MASTER_PASSWORD_ENV_VAR, "master password")
}

/// Master password for a new vault, confirmed when typed.
pub fn new_vault_password() -> Result<SecretString, StrongboxError> {
    read_secret_with_confirm(MASTER_PASSWORD_ENV_VAR, "master password")
}

/// Replacement master password, confirmed when typed.
pub fn replacement_master_password() -> Result<SecretString, StrongboxError> {
    read_secret_with_confirm(NEW_MASTER_PASSWORD_ENV_VAR, "new master password")
}

pub fn entry_password() -> Result<SecretString, StrongboxError> {
    read_secret(ENTRY_PASSWORD_ENV_VAR, "entry password")
}

fn from_env(env_var: &str) -> Option<SecretString> {
    std::env::var(env_var)
        .ok()
        .filter(|value| !value.is_empty())
        .map(SecretString::from)
}

fn prompt(label: &str) -> Result<String, StrongboxError> {
    eprint!("{}{}: ", label[..1].to_uppercase(), &label[1..]);
    let value = rpassword::read_password()
        .map_err(|e| StrongboxError::InvalidParameters(format!("failed to read {label}: {e}")))?;
    if value.is_empty() {
        return Err(StrongboxError::InvalidParameters(format!("empty {label} not allowed")));
    }
    Ok(value)
}

fn not_provided(env_var: &str, label: &str) -> StrongboxError {
    StrongboxError::InvalidParameters(format!(
        "no {label} provided. Set {env_var} or run interactively."
    ))
}

fn read_secret(env_var: &str, label: &str) -> Result<SecretString, StrongboxError> {
    if let Some(secret) = from_env(env_var) {
        return Ok(secret);
    }

    if std::io::stdin().is_terminal() {
        return prompt(label).map(SecretString::from);
    }

    Err(not_provided(env_var, label))
}

fn read_secret_with_confirm(env_var: &str, label: &str) -> Result<SecretString, StrongboxError> {
    // Env var does not need confirmation.
    if let Some(secret) = from_env(env_var) {
        return Ok(secret);
    }

    if std::io::stdin().is_terminal() {
        let first = prompt(label)?;
        let second = prompt(&format!("confirm {label}"))?;
        if first != second {
            return Err(StrongboxError::InvalidParameters(format!("{label}s do not match")));
        }
        return Ok(SecretString::from(first));
    }

    Err(not_provided(env_var, label))
}
