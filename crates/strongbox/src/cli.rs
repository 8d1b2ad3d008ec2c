// SPDX-FileCopyrightText: 2026 Strongbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line arguments.

use clap::{Args, Parser, Subcommand};

/// Strongbox - encrypt credentials and generate secrets.
#[derive(Parser, Debug)]
#[command(name = "strongbox", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a random password.
    Generate(GenerateArgs),
    /// Print a random passphrase.
    Passphrase(PassphraseArgs),
    /// Score a password's strength (prompts when PASSWORD is omitted).
    Score {
        password: Option<String>,
    },
    /// Print a fresh hex-encoded salt.
    Salt,
    /// Create a master key wrapped under a new master password.
    Init,
    /// Re-wrap the master key under a new master password.
    Rewrap(VaultArgs),
    /// Encrypt an entry under the unwrapped master key.
    Encrypt(EncryptArgs),
    /// Decrypt an entry envelope and print it as JSON.
    Decrypt(DecryptArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Password length (default from `[generator] length`).
    #[arg(long)]
    pub length: Option<usize>,
    #[arg(long)]
    pub no_lowercase: bool,
    #[arg(long)]
    pub no_uppercase: bool,
    #[arg(long)]
    pub no_digits: bool,
    #[arg(long)]
    pub no_symbols: bool,
}

#[derive(Args, Debug)]
pub struct PassphraseArgs {
    /// Number of words (default from `[passphrase] word_count`).
    #[arg(long)]
    pub words: Option<usize>,
    #[arg(long)]
    pub separator: Option<String>,
    #[arg(long)]
    pub no_capitalize: bool,
}

/// Where the wrapped master key lives.
#[derive(Args, Debug)]
pub struct VaultArgs {
    /// Hex-encoded 16-byte salt printed by `init`.
    #[arg(long)]
    pub salt: String,
    /// Wrapped master key envelope printed by `init`.
    #[arg(long)]
    pub wrapped: String,
}

#[derive(Args, Debug)]
pub struct EncryptArgs {
    #[command(flatten)]
    pub vault: VaultArgs,
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub url: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
    #[arg(long)]
    pub username2: Option<String>,
    #[arg(long)]
    pub username3: Option<String>,
    #[arg(long)]
    pub otp_url: Option<String>,
    /// Extra `KEY=VALUE` field; may be repeated.
    #[arg(long = "field", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,
}

#[derive(Args, Debug)]
pub struct DecryptArgs {
    #[command(flatten)]
    pub vault: VaultArgs,
    /// Entry envelope printed by `encrypt`.
    pub entry: String,
    /// Print the password instead of a masked form.
    #[arg(long)]
    pub reveal: bool,
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got `{raw}`")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn generate_flags_parse() {
        let cli = Cli::try_parse_from(["strongbox", "generate", "--length", "24", "--no-symbols"]).unwrap();
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.length, Some(24));
                assert!(args.no_symbols);
                assert!(!args.no_digits);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn encrypt_collects_repeated_fields() {
        let cli = Cli::try_parse_from([
            "strongbox", "encrypt", "--salt", "00", "--wrapped", "abc", "--title", "Mail",
            "--username", "bob", "--field", "pin=1234", "--field", "question=a=b",
        ])
        .unwrap();
        let Commands::Encrypt(args) = cli.command else {
            panic!("expected encrypt");
        };
        assert_eq!(
            args.fields,
            vec![
                ("pin".to_string(), "1234".to_string()),
                ("question".to_string(), "a=b".to_string())
            ]
        );
        assert_eq!(args.url, None);
    }

    #[test]
    fn malformed_field_is_rejected() {
        let result = Cli::try_parse_from([
            "strongbox", "encrypt", "--salt", "00", "--wrapped", "abc", "--title", "t",
            "--username", "u", "--field", "novalue",
        ]);
        assert!(result.is_err());
        assert!(parse_field("=value").is_err());
    }

    #[test]
    fn decrypt_requires_entry() {
        assert!(Cli::try_parse_from(["strongbox", "decrypt", "--salt", "00", "--wrapped", "w"]).is_err());
        let cli = Cli::try_parse_from([
            "strongbox", "decrypt", "--salt", "00", "--wrapped", "w", "ENTRY", "--reveal",
        ])
        .unwrap();
        let Commands::Decrypt(args) = cli.command else {
            panic!("expected decrypt");
        };
        assert_eq!(args.entry, "ENTRY");
        assert!(args.reveal);
    }
}
