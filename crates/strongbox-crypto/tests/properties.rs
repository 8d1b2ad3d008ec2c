// SPDX-FileCopyrightText: 2026 Strongbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests for the envelope codec, entry serializer,
//! generator, and strength scorer.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use strongbox_crypto::envelope::{self, Envelope, NONCE_LEN, TAG_LEN};
use strongbox_crypto::generator::{
    CharClass, PassphrasePolicy, PasswordPolicy, generate_passphrase_with_rng,
    generate_password_with_rng,
};
use strongbox_crypto::strength::{MAX_SCORE, score_password, strength_label};
use strongbox_crypto::{EntryRecord, StrongboxError, SymmetricKey, decrypt_entry, encrypt_entry};

fn key_strategy() -> impl Strategy<Value = SymmetricKey> {
    any::<[u8; 32]>().prop_map(SymmetricKey::from_bytes)
}

fn optional_text() -> impl Strategy<Value = Option<String>> {
    prop::option::of(".{0,24}")
}

/// Records with arbitrary Unicode text and a few custom fields.
fn record_strategy() -> impl Strategy<Value = EntryRecord> {
    (
        (".{0,24}", ".{0,24}", ".{0,32}"),
        (optional_text(), optional_text(), optional_text()),
        (optional_text(), optional_text()),
        prop::collection::btree_map("[a-z_]{1,8}", ".{0,16}", 0..4),
    )
        .prop_map(
            |((title, username, password), (url, notes, username2), (username3, otp_url), fields)| {
                let mut record = EntryRecord::new(title, username, password);
                record.url = url;
                record.notes = notes;
                record.username2 = username2;
                record.username3 = username3;
                record.otp_url = otp_url;
                record.custom_fields = fields;
                record
            },
        )
}

fn password_policy_strategy() -> impl Strategy<Value = PasswordPolicy> {
    (8usize..64, any::<[bool; 4]>())
        .prop_filter("at least one class", |(_, flags)| flags.iter().any(|&f| f))
        .prop_map(|(length, [lowercase, uppercase, digits, symbols])| PasswordPolicy {
            length,
            lowercase,
            uppercase,
            digits,
            symbols,
        })
}

proptest! {
    /// Any plaintext survives encrypt then decrypt under the same key.
    #[test]
    fn envelope_roundtrip(key in key_strategy(), plaintext in prop::collection::vec(any::<u8>(), 0..512)) {
        let sealed = envelope::encrypt(&key, &plaintext).unwrap();
        let opened = envelope::decrypt(&key, &sealed).unwrap();
        prop_assert_eq!(opened.as_slice(), plaintext.as_slice());
    }

    /// Decoded envelopes are nonce, ciphertext of the same length, then tag.
    #[test]
    fn envelope_length_tracks_plaintext(key in key_strategy(), len in 0usize..300) {
        use base64::Engine as _;
        use base64::engine::general_purpose::STANDARD;

        let sealed = envelope::encrypt(&key, &vec![0x5a; len]).unwrap();
        let raw = STANDARD.decode(sealed.as_str()).unwrap();
        prop_assert_eq!(raw.len(), NONCE_LEN + len + TAG_LEN);
    }

    /// Flipping any bit of the decoded envelope is detected.
    #[test]
    fn tampering_is_detected(
        key in key_strategy(),
        plaintext in prop::collection::vec(any::<u8>(), 0..128),
        position in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        use base64::Engine as _;
        use base64::engine::general_purpose::STANDARD;

        let sealed = envelope::encrypt(&key, &plaintext).unwrap();
        let mut raw = STANDARD.decode(sealed.as_str()).unwrap();
        let i = position.index(raw.len());
        raw[i] ^= 1 << bit;

        let tampered = Envelope::from(STANDARD.encode(&raw));
        prop_assert_eq!(envelope::decrypt(&key, &tampered).unwrap_err(), StrongboxError::DecryptionFailed);
    }

    /// A different key never opens the envelope.
    #[test]
    fn wrong_key_fails(a in key_strategy(), b in key_strategy(), plaintext in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assume!(a != b);
        let sealed = envelope::encrypt(&a, &plaintext).unwrap();
        prop_assert_eq!(envelope::decrypt(&b, &sealed).unwrap_err(), StrongboxError::DecryptionFailed);
    }

    /// Every record, including empty strings and Unicode, round-trips intact.
    #[test]
    fn entry_roundtrip(key in key_strategy(), record in record_strategy()) {
        let sealed = encrypt_entry(&key, &record).unwrap();
        let opened = decrypt_entry(&key, &sealed).unwrap();
        prop_assert_eq!(opened, record);
    }

    /// Generated passwords have the requested length, only enabled classes,
    /// and every enabled class at least once.
    #[test]
    fn generated_password_composition(policy in password_policy_strategy(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let password = generate_password_with_rng(&policy, &mut rng).unwrap();
        let enabled = policy.classes();

        prop_assert_eq!(password.chars().count(), policy.length);
        for c in password.chars() {
            prop_assert!(enabled.iter().any(|class| class.contains(c)), "{c:?} outside enabled classes");
        }
        for class in enabled {
            prop_assert!(password.chars().any(|c| class.contains(c)), "{class:?} missing from {password}");
        }
    }

    /// Lengths below eight are always rejected.
    #[test]
    fn short_passwords_rejected(length in 0usize..8) {
        let policy = PasswordPolicy { length, ..PasswordPolicy::default() };
        let result = generate_password_with_rng(&policy, &mut StdRng::seed_from_u64(0));
        prop_assert!(matches!(result, Err(StrongboxError::InvalidParameters(_))));
    }

    /// Passphrases have exactly the requested number of words.
    #[test]
    fn passphrase_word_count(word_count in 1usize..12, seed in any::<u64>()) {
        let policy = PassphrasePolicy { word_count, separator: " ".to_string(), capitalize: true };
        let phrase = generate_passphrase_with_rng(&policy, &mut StdRng::seed_from_u64(seed)).unwrap();
        let words: Vec<&str> = phrase.split(' ').collect();

        prop_assert_eq!(words.len(), word_count);
        for word in words {
            let mut chars = word.chars();
            prop_assert!(chars.next().is_some_and(char::is_uppercase));
            prop_assert!(chars.all(|c| c.is_ascii_lowercase()));
        }
    }

    /// Scores stay in range and the label always matches the score.
    #[test]
    fn score_in_range(password in ".{0,40}") {
        let report = score_password(&password);
        prop_assert!(report.score <= MAX_SCORE);
        prop_assert_eq!(report.strength_label, strength_label(report.score));
    }

    /// A password of all four classes and at least twelve characters is
    /// "Excellent" unless it is on the deny list.
    #[test]
    fn full_composition_scores_max(suffix in "[a-z]{8,20}") {
        let password = format!("Aa1!{suffix}");
        prop_assert_eq!(score_password(&password).score, MAX_SCORE);
    }
}

#[test]
fn char_classes_partition_generator_alphabet() {
    for class in CharClass::ALL {
        for c in class.charset().chars() {
            let owners = CharClass::ALL.iter().filter(|other| other.contains(c)).count();
            assert_eq!(owners, 1, "{c:?} belongs to more than one class");
        }
    }
}
