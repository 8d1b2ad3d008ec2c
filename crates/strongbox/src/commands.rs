// SPDX-FileCopyrightText: 2026 Strongbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subcommand implementations.
//!
//! [`run`] gathers secrets and dispatches; the helpers below it take every
//! input as an argument and return the text to print on stdout.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use strongbox_config::StrongboxConfig;
use strongbox_core::StrongboxError;
use strongbox_crypto::generator::{PassphrasePolicy, PasswordPolicy};
use strongbox_crypto::kdf::{self, Salt};
use strongbox_crypto::{
    EntryRecord, Envelope, KeyWrapper, SymmetricKey, decrypt_entry, encrypt_entry,
    generate_master_key, generate_passphrase, generate_password, mask_secret, score_password,
};
use tracing::info;
use zeroize::Zeroizing;

use crate::cli::{Commands, DecryptArgs, EncryptArgs, GenerateArgs, PassphraseArgs, VaultArgs};
use crate::prompt;

/// Salt and wrapped master key, as printed by `init` and `rewrap`.
#[derive(Debug, Serialize)]
pub struct WrappedVault {
    pub salt: String,
    pub wrapped_master_key: Envelope,
}

impl WrappedVault {
    fn new(salt: &Salt, wrapped: Envelope) -> Self {
        Self {
            salt: hex::encode(salt),
            wrapped_master_key: wrapped,
        }
    }
}

/// Run one subcommand and return its stdout text.
pub fn run(command: &Commands, config: &StrongboxConfig) -> Result<String, StrongboxError> {
    match command {
        Commands::Generate(args) => generate(&password_policy(config, args)),
        Commands::Passphrase(args) => passphrase(&passphrase_policy(config, args)),
        Commands::Score { password } => {
            let password = match password {
                Some(password) => SecretString::from(password.clone()),
                None => prompt::entry_password()?,
            };
            score(&password)
        }
        Commands::Salt => Ok(hex::encode(kdf::generate_salt()?)),
        Commands::Init => init(&wrapper(config)?, &prompt::new_vault_password()?),
        Commands::Rewrap(args) => {
            let current = prompt::master_password()?;
            let replacement = prompt::replacement_master_password()?;
            rewrap(&wrapper(config)?, args, &current, &replacement)
        }
        Commands::Encrypt(args) => {
            let master_key = unlock(&wrapper(config)?, &args.vault, &prompt::master_password()?)?;
            encrypt(&master_key, args, &prompt::entry_password()?)
        }
        Commands::Decrypt(args) => {
            let master_key = unlock(&wrapper(config)?, &args.vault, &prompt::master_password()?)?;
            decrypt(&master_key, args)
        }
    }
}

fn wrapper(config: &StrongboxConfig) -> Result<KeyWrapper, StrongboxError> {
    KeyWrapper::new(config.kdf.iterations)
}

/// Config defaults with command-line flags applied on top.
pub fn password_policy(config: &StrongboxConfig, args: &GenerateArgs) -> PasswordPolicy {
    let mut policy = config.generator.policy();
    if let Some(length) = args.length {
        policy.length = length;
    }
    policy.lowercase &= !args.no_lowercase;
    policy.uppercase &= !args.no_uppercase;
    policy.digits &= !args.no_digits;
    policy.symbols &= !args.no_symbols;
    policy
}

pub fn passphrase_policy(config: &StrongboxConfig, args: &PassphraseArgs) -> PassphrasePolicy {
    let mut policy = config.passphrase.policy();
    if let Some(words) = args.words {
        policy.word_count = words;
    }
    if let Some(separator) = &args.separator {
        policy.separator = separator.clone();
    }
    policy.capitalize &= !args.no_capitalize;
    policy
}

pub fn generate(policy: &PasswordPolicy) -> Result<String, StrongboxError> {
    generate_password(policy)
}

pub fn passphrase(policy: &PassphrasePolicy) -> Result<String, StrongboxError> {
    generate_passphrase(policy)
}

pub fn score(password: &SecretString) -> Result<String, StrongboxError> {
    to_json(&score_password(password.expose_secret()))
}

pub fn init(wrapper: &KeyWrapper, password: &SecretString) -> Result<String, StrongboxError> {
    let master_key = generate_master_key()?;
    let salt = kdf::generate_salt()?;
    let wrapped = wrapper.wrap(&master_key, password, &salt)?;

    info!(iterations = wrapper.iterations(), "vault initialised");
    to_json(&WrappedVault::new(&salt, wrapped))
}

pub fn rewrap(
    wrapper: &KeyWrapper,
    vault: &VaultArgs,
    current: &SecretString,
    replacement: &SecretString,
) -> Result<String, StrongboxError> {
    let salt = kdf::salt_from_hex(vault.salt.trim())?;
    let wrapped: Envelope = Envelope::from(vault.wrapped.trim());
    let (new_salt, rewrapped) = wrapper.rewrap(&wrapped, current, &salt, replacement)?;
    to_json(&WrappedVault::new(&new_salt, rewrapped))
}

/// Recover the master key named by `vault`.
pub fn unlock(
    wrapper: &KeyWrapper,
    vault: &VaultArgs,
    password: &SecretString,
) -> Result<SymmetricKey, StrongboxError> {
    let salt = kdf::salt_from_hex(vault.salt.trim())?;
    wrapper.unwrap(&Envelope::from(vault.wrapped.trim()), password, &salt)
}

pub fn encrypt(
    master_key: &SymmetricKey,
    args: &EncryptArgs,
    password: &SecretString,
) -> Result<String, StrongboxError> {
    let mut record = EntryRecord::new(&args.title, &args.username, password.expose_secret());
    record.url = args.url.clone();
    record.notes = args.notes.clone();
    record.username2 = args.username2.clone();
    record.username3 = args.username3.clone();
    record.otp_url = args.otp_url.clone();
    for (key, value) in &args.fields {
        record.custom_fields.insert(key.clone(), value.clone());
    }

    Ok(encrypt_entry(master_key, &record)?.into_string())
}

pub fn decrypt(master_key: &SymmetricKey, args: &DecryptArgs) -> Result<String, StrongboxError> {
    let mut record = decrypt_entry(master_key, &Envelope::from(args.entry.trim()))?;
    if !args.reveal {
        let masked = mask_secret(&record.password);
        drop(Zeroizing::new(std::mem::replace(&mut record.password, masked)));
    }
    to_json(&record)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, StrongboxError> {
    serde_json::to_string_pretty(value)
        .map_err(|_| StrongboxError::EncryptionFailed("failed to render output as JSON".to_string()))
}
