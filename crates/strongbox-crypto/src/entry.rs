// SPDX-FileCopyrightText: 2026 Strongbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Canonical entry records and their encrypted form.
//!
//! A record is serialized as compact JSON with a fixed field order:
//! `title, username, password, url, notes, username2, username3, otp_url,
//! custom_fields, created_at`. Absent optional fields are written as `null`
//! so an empty string and a missing value survive the round trip as
//! different things. `created_at` is a fresh random 32-hex-character token
//! added on every serialization so identical records never produce
//! identical plaintext; it is dropped again on decode.

use std::collections::BTreeMap;
use std::fmt;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Deserializer, Serialize};
use strongbox_core::StrongboxError;
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use crate::envelope::{self, Envelope};
use crate::keys::SymmetricKey;

/// Random bytes behind each `created_at` token (hex-encoded to 32 characters).
const TOKEN_BYTES: usize = 16;

/// The plaintext contents of one stored credential.
///
/// Sensitive fields are wiped when the record is dropped. Debug output
/// redacts the password and OTP URL.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    pub title: String,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub username2: Option<String>,
    #[serde(default)]
    pub username3: Option<String>,
    #[serde(default)]
    pub otp_url: Option<String>,
    /// Free-form fields carried over from other password managers.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub custom_fields: BTreeMap<String, String>,
}

impl EntryRecord {
    /// A record with the three required fields and nothing else.
    pub fn new(
        title: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let mut record = Self::default();
        record.title = title.into();
        record.username = username.into();
        record.password = password.into();
        record
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_username2(mut self, username2: impl Into<String>) -> Self {
        self.username2 = Some(username2.into());
        self
    }

    pub fn with_username3(mut self, username3: impl Into<String>) -> Self {
        self.username3 = Some(username3.into());
        self
    }

    pub fn with_otp_url(mut self, otp_url: impl Into<String>) -> Self {
        self.otp_url = Some(otp_url.into());
        self
    }

    /// Add or replace one custom field.
    pub fn with_custom_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_fields.insert(key.into(), value.into());
        self
    }
}

impl Drop for EntryRecord {
    fn drop(&mut self) {
        self.password.zeroize();
        self.otp_url.zeroize();
        self.notes.zeroize();
        for value in self.custom_fields.values_mut() {
            value.zeroize();
        }
    }
}

impl fmt::Debug for EntryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryRecord")
            .field("title", &self.title)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("url", &self.url)
            .field("notes", &self.notes.as_ref().map(|_| "[REDACTED]"))
            .field("username2", &self.username2)
            .field("username3", &self.username3)
            .field("otp_url", &self.otp_url.as_ref().map(|_| "[REDACTED]"))
            .field("custom_fields", &self.custom_fields.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Older encoders may write `custom_fields: null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BTreeMap<String, String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Wire form: the record's fields followed by the per-encryption token.
#[derive(Serialize)]
struct SealedEntry<'a> {
    #[serde(flatten)]
    record: &'a EntryRecord,
    created_at: &'a str,
}

/// Serialize `record` to canonical bytes with a fresh `created_at` token.
pub fn serialize_entry(record: &EntryRecord) -> Result<Zeroizing<Vec<u8>>, StrongboxError> {
    serialize_entry_with_rng(record, &mut OsRng)
}

/// Serialize `record`, drawing the `created_at` token from `rng`.
pub fn serialize_entry_with_rng<R: RngCore + CryptoRng>(
    record: &EntryRecord,
    rng: &mut R,
) -> Result<Zeroizing<Vec<u8>>, StrongboxError> {
    let mut token = [0u8; TOKEN_BYTES];
    rng.try_fill_bytes(&mut token)
        .map_err(|_| StrongboxError::Randomness("failed to generate entry token".to_string()))?;
    let created_at = hex::encode(token);

    let sealed = SealedEntry {
        record,
        created_at: &created_at,
    };
    serde_json::to_vec(&sealed)
        .map(Zeroizing::new)
        .map_err(|_| StrongboxError::EncryptionFailed("failed to serialize entry record".to_string()))
}

/// Parse canonical bytes back into a record, discarding `created_at`.
pub fn deserialize_entry(bytes: &[u8]) -> Result<EntryRecord, StrongboxError> {
    serde_json::from_slice(bytes).map_err(|e| StrongboxError::MalformedRecord(describe_parse_error(&e)))
}

/// Describe a parse failure without echoing any decrypted content.
fn describe_parse_error(err: &serde_json::Error) -> String {
    use serde_json::error::Category;

    let message = err.to_string();
    let what = match err.classify() {
        Category::Data if message.starts_with("missing field") => {
            // "missing field `title`" names a schema key, never a value.
            message.split(" at line").next().unwrap_or("missing field")
        }
        Category::Data => "field has the wrong type or record is not a mapping",
        Category::Syntax => "invalid JSON syntax",
        Category::Eof => "unexpected end of record",
        Category::Io => "unreadable record",
    };
    format!("{what} (line {}, column {})", err.line(), err.column())
}

/// Serialize and encrypt a record under `key`.
pub fn encrypt_entry(key: &SymmetricKey, record: &EntryRecord) -> Result<Envelope, StrongboxError> {
    encrypt_entry_with_rng(key, record, &mut OsRng)
}

/// Serialize and encrypt a record, drawing the token and nonce from `rng`.
pub fn encrypt_entry_with_rng<R: RngCore + CryptoRng>(
    key: &SymmetricKey,
    record: &EntryRecord,
    rng: &mut R,
) -> Result<Envelope, StrongboxError> {
    let plaintext = serialize_entry_with_rng(record, rng)?;
    let envelope = envelope::encrypt_with_rng(key, &plaintext, rng)?;
    debug!(
        envelope_len = envelope.as_str().len(),
        custom_fields = record.custom_fields.len(),
        "entry encrypted"
    );
    Ok(envelope)
}

/// Decrypt an envelope produced by [`encrypt_entry`] back into its record.
pub fn decrypt_entry(key: &SymmetricKey, envelope: &Envelope) -> Result<EntryRecord, StrongboxError> {
    let plaintext = envelope::decrypt(key, envelope)?;
    let record = deserialize_entry(&plaintext)?;
    debug!(envelope_len = envelope.as_str().len(), "entry decrypted");
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn test_key() -> SymmetricKey {
        SymmetricKey::from_bytes([0x01u8; 32])
    }

    fn full_record() -> EntryRecord {
        EntryRecord::new("Bank", "alice@example.com", "c0rrect-h0rse")
            .with_url("https://bank.example")
            .with_notes("")
            .with_username2("alice2")
            .with_username3("alice3")
            .with_otp_url("otpauth://totp/Bank:alice?secret=JBSWY3DPEHPK3PXP")
            .with_custom_field("pin", "4321")
            .with_custom_field("account", "00-1234")
    }

    #[test]
    fn serialized_field_order_is_canonical() {
        let bytes = serialize_entry(&EntryRecord::new("t", "u", "p")).unwrap();
        let text = std::str::from_utf8(&bytes).unwrap();

        let prefix = r#"{"title":"t","username":"u","password":"p","url":null,"notes":null,"username2":null,"username3":null,"otp_url":null,"custom_fields":{},"created_at":""#;
        assert!(text.starts_with(prefix), "{text}");
        assert!(text.ends_with("\"}"));
        assert!(!text.contains(' '));
    }

    #[test]
    fn created_at_is_fresh_hex_token() {
        let record = EntryRecord::new("t", "u", "p");
        let token = |bytes: &[u8]| -> String {
            let value: serde_json::Value = serde_json::from_slice(bytes).unwrap();
            value["created_at"].as_str().unwrap().to_string()
        };

        let first = token(&serialize_entry(&record).unwrap());
        let second = token(&serialize_entry(&record).unwrap());

        assert_eq!(first.len(), 32);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_ne!(first, second);
    }

    #[test]
    fn full_record_roundtrips() {
        let key = test_key();
        let record = full_record();

        let envelope = encrypt_entry(&key, &record).unwrap();
        let decrypted = decrypt_entry(&key, &envelope).unwrap();

        assert_eq!(decrypted, record);
    }

    #[test]
    fn empty_string_and_absent_are_distinct() {
        let record = EntryRecord::new("t", "u", "").with_url("");
        let decoded = deserialize_entry(&serialize_entry(&record).unwrap()).unwrap();

        assert_eq!(decoded.password, "");
        assert_eq!(decoded.url.as_deref(), Some(""));
        assert_eq!(decoded.notes, None);
    }

    #[test]
    fn missing_required_field_is_malformed() {
        let err = deserialize_entry(br#"{"title":"t","username":"u"}"#).unwrap_err();
        match err {
            StrongboxError::MalformedRecord(message) => {
                assert!(message.contains("missing field `password`"), "{message}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_mapping_is_malformed() {
        for bytes in [&b"[1,2,3]"[..], b"\"text\"", b"not json", b"{", b""] {
            assert!(matches!(
                deserialize_entry(bytes),
                Err(StrongboxError::MalformedRecord(_))
            ));
        }
    }

    #[test]
    fn malformed_message_never_echoes_values() {
        let err = deserialize_entry(br#"{"title":"t","username":"u","password":["hunter2"]}"#)
            .unwrap_err();
        assert!(!err.to_string().contains("hunter2"), "{err}");
    }

    #[test]
    fn legacy_shapes_decode() {
        // Minimal record, null custom fields, unknown extra keys.
        let bytes = br#"{"title":"t","username":"u","password":"p","custom_fields":null,"created_at":"00","favicon":"x"}"#;
        let record = deserialize_entry(bytes).unwrap();

        assert_eq!(record, EntryRecord::new("t", "u", "p"));
        assert!(record.custom_fields.is_empty());
    }

    #[test]
    fn debug_redacts_secrets() {
        let rendered = format!("{:?}", full_record());
        assert!(!rendered.contains("c0rrect-h0rse"));
        assert!(!rendered.contains("JBSWY3DPEHPK3PXP"));
        assert!(!rendered.contains("4321"));
        assert!(rendered.contains("Bank"));
    }

    #[test]
    fn wrong_key_surfaces_codec_error() {
        let envelope = encrypt_entry(&test_key(), &full_record()).unwrap();
        let err = decrypt_entry(&SymmetricKey::from_bytes([9u8; 32]), &envelope).unwrap_err();
        assert_eq!(err, StrongboxError::DecryptionFailed);
    }

    #[test]
    fn non_record_plaintext_is_malformed() {
        let key = test_key();
        let envelope = envelope::encrypt(&key, b"just some bytes").unwrap();
        assert!(matches!(
            decrypt_entry(&key, &envelope),
            Err(StrongboxError::MalformedRecord(_))
        ));
    }

    #[traced_test]
    #[test]
    fn logs_never_contain_secrets() {
        let key = test_key();
        let envelope = encrypt_entry(&key, &full_record()).unwrap();
        let _ = decrypt_entry(&key, &envelope).unwrap();

        assert!(logs_contain("entry encrypted"));
        assert!(logs_contain("entry decrypted"));
        assert!(!logs_contain("c0rrect-h0rse"));
        assert!(!logs_contain("alice@example.com"));
        assert!(!logs_contain(envelope.as_str()));
    }
}
