//! Hidden-note cipher.
//!
//! Hidden notes are XOR'd byte-by-byte against the password repeated as a
//! keystream. The transform is its own inverse, so the same routine encodes
//! and decodes. This is obfuscation only: it offers no confidentiality or
//! integrity guarantee.
//!
//! The payload is always handled as raw bytes. XOR of two UTF-8 sequences is
//! rarely valid UTF-8, so cipher text is never stored as a `String`.

use std::fmt;

use crate::{Error, Result};

/// A non-empty password used as the XOR keystream.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Wrap a password, rejecting the empty string.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(Error::EmptyPassword);
        }
        Ok(Self(value))
    }

    fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// XOR `data` against `key` repeated to the length of `data`.
///
/// Returns `Error::EmptyPassword` when `key` is empty, since there is no
/// keystream to cycle.
pub fn xor_keystream(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(Error::EmptyPassword);
    }
    Ok(xor_cycle(data, key))
}

/// Encode note text for storage as a hidden note.
pub fn encrypt(text: &str, password: &Password) -> Vec<u8> {
    xor_cycle(text.as_bytes(), password.as_bytes())
}

/// Decode a hidden note payload back to text.
///
/// Fails with `Error::InvalidText` if the result is not UTF-8, which is the
/// usual symptom of a wrong password.
pub fn decrypt(payload: &[u8], password: &Password) -> Result<String> {
    Ok(String::from_utf8(xor_cycle(payload, password.as_bytes()))?)
}

// Callers guarantee a non-empty key; an empty one would yield no output.
fn xor_cycle(data: &[u8], key: &[u8]) -> Vec<u8> {
    data.iter()
        .zip(key.iter().cycle())
        .map(|(byte, key_byte)| byte ^ key_byte)
        .collect()
}
