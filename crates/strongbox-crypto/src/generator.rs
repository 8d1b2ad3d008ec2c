// SPDX-FileCopyrightText: 2026 Strongbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Random password and passphrase generation.
//!
//! Characters and words are drawn independently and uniformly with
//! `Rng::gen_range`, which rejects biased samples. Production callers use
//! [`OsRng`]; the `CryptoRng` bound keeps general-purpose generators out.
//!
//! # Class guarantee and its cost
//!
//! After drawing, every enabled character class that did not appear gets its
//! representative character (`a`, `A`, `0`, `!`) spliced in, overwriting the
//! last position whose character is not the sole member of its own class.
//! This guarantees each requested class appears at least once. The price is
//! a small, bounded loss of guessing entropy against pure uniform sampling:
//! at most three positions are rewritten, each to a publicly known character,
//! and only in the rare draws that missed a class entirely. Rejection
//! sampling would avoid it but changes the output distribution, so the
//! splice stays.

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};
use strongbox_core::StrongboxError;

use crate::wordlist::WORDS;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Shortest password [`generate_password`] will produce.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Longest password [`generate_password`] will produce.
pub const MAX_PASSWORD_LENGTH: usize = 1024;

/// Most words [`generate_passphrase`] will draw.
pub const MAX_PASSPHRASE_WORDS: usize = 128;

/// One of the four character classes a password may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharClass {
    /// Fixed order in which missing classes are spliced in.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    pub fn charset(self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.charset().contains(c)
    }

    /// First character of the class, used by the splice step.
    pub fn representative(self) -> char {
        match self {
            CharClass::Lowercase => 'a',
            CharClass::Uppercase => 'A',
            CharClass::Digit => '0',
            CharClass::Symbol => '!',
        }
    }
}

/// Length and composition of a generated password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            length: 16,
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
        }
    }
}

impl PasswordPolicy {
    /// Enabled classes in splice order.
    pub fn classes(&self) -> Vec<CharClass> {
        CharClass::ALL
            .into_iter()
            .filter(|class| match class {
                CharClass::Lowercase => self.lowercase,
                CharClass::Uppercase => self.uppercase,
                CharClass::Digit => self.digits,
                CharClass::Symbol => self.symbols,
            })
            .collect()
    }
}

/// Word count, separator, and casing of a generated passphrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassphrasePolicy {
    pub word_count: usize,
    pub separator: String,
    pub capitalize: bool,
}

impl Default for PassphrasePolicy {
    fn default() -> Self {
        Self {
            word_count: 4,
            separator: "-".to_string(),
            capitalize: true,
        }
    }
}

/// Generate a password with the operating system CSPRNG.
pub fn generate_password(policy: &PasswordPolicy) -> Result<String, StrongboxError> {
    generate_password_with_rng(policy, &mut OsRng)
}

/// Generate a password drawing from `rng`.
pub fn generate_password_with_rng<R: RngCore + CryptoRng>(
    policy: &PasswordPolicy,
    rng: &mut R,
) -> Result<String, StrongboxError> {
    if policy.length < MIN_PASSWORD_LENGTH {
        return Err(StrongboxError::InvalidParameters(format!(
            "password length must be at least {MIN_PASSWORD_LENGTH}, got {}",
            policy.length
        )));
    }
    if policy.length > MAX_PASSWORD_LENGTH {
        return Err(StrongboxError::InvalidParameters(format!(
            "password length must be at most {MAX_PASSWORD_LENGTH}, got {}",
            policy.length
        )));
    }

    let classes = policy.classes();
    if classes.is_empty() {
        return Err(StrongboxError::InvalidParameters(
            "at least one character class must be selected".to_string(),
        ));
    }

    let pool: Vec<char> = classes.iter().flat_map(|class| class.charset().chars()).collect();
    let mut password: Vec<char> = (0..policy.length)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect();

    splice_missing_classes(&mut password, &classes);
    Ok(password.into_iter().collect())
}

/// Overwrite positions from the end so every class in `classes` appears.
///
/// A position is only overwritten when its current class still has another
/// member elsewhere, so one splice never undoes another. With at least eight
/// characters and at most four classes such a position always exists.
fn splice_missing_classes(password: &mut [char], classes: &[CharClass]) {
    let mut spliced = vec![false; password.len()];

    for &missing in classes {
        if password.iter().any(|&c| missing.contains(c)) {
            continue;
        }

        let slot = (0..password.len()).rev().find(|&i| {
            !spliced[i]
                && classes.iter().any(|class| {
                    class.contains(password[i])
                        && password.iter().filter(|&&c| class.contains(c)).count() > 1
                })
        });

        if let Some(i) = slot {
            password[i] = missing.representative();
            spliced[i] = true;
        }
    }
}

/// Generate a passphrase with the operating system CSPRNG.
pub fn generate_passphrase(policy: &PassphrasePolicy) -> Result<String, StrongboxError> {
    generate_passphrase_with_rng(policy, &mut OsRng)
}

/// Generate a passphrase drawing words (with replacement) from `rng`.
pub fn generate_passphrase_with_rng<R: RngCore + CryptoRng>(
    policy: &PassphrasePolicy,
    rng: &mut R,
) -> Result<String, StrongboxError> {
    if policy.word_count == 0 {
        return Err(StrongboxError::InvalidParameters(
            "passphrase needs at least one word".to_string(),
        ));
    }
    if policy.word_count > MAX_PASSPHRASE_WORDS {
        return Err(StrongboxError::InvalidParameters(format!(
            "passphrase can have at most {MAX_PASSPHRASE_WORDS} words, got {}",
            policy.word_count
        )));
    }

    let words: Vec<String> = (0..policy.word_count)
        .map(|_| {
            let word = WORDS[rng.gen_range(0..WORDS.len())];
            if policy.capitalize {
                capitalize(word)
            } else {
                word.to_string()
            }
        })
        .collect();

    Ok(words.join(&policy.separator))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
