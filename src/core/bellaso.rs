//! Bellaso cipher: each character is shifted by the code of the key
//! character at the same position, with the key repeated over the text.

use crate::core::alphabet::shift;
use crate::domain::model::CipherKind;
use crate::domain::ports::Cipher;
use crate::utils::error::{CipherError, Result};

fn key_codes(bellaso_str: &str) -> Result<Vec<i64>> {
    let codes: Vec<i64> = bellaso_str
        .chars()
        .map(|c| i64::from(u32::from(c)))
        .collect();
    if codes.is_empty() {
        return Err(CipherError::InvalidKey {
            reason: "Bellaso key cannot be empty".to_string(),
        });
    }
    Ok(codes)
}

fn apply_codes(text: &str, codes: &[i64], sign: i64) -> String {
    text.chars()
        .zip(codes.iter().cycle())
        .map(|(c, code)| shift(c, sign * code))
        .collect()
}

/// Encrypts `plain_text` with the repeating key `bellaso_str`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] when `bellaso_str` is empty.
pub fn encrypt_bellaso(plain_text: &str, bellaso_str: &str) -> Result<String> {
    Ok(apply_codes(plain_text, &key_codes(bellaso_str)?, 1))
}

/// Inverse of [`encrypt_bellaso`].
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] when `bellaso_str` is empty.
pub fn decrypt_bellaso(encrypted_text: &str, bellaso_str: &str) -> Result<String> {
    Ok(apply_codes(encrypted_text, &key_codes(bellaso_str)?, -1))
}

/// A Bellaso cipher with a validated, non-empty key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bellaso {
    codes: Vec<i64>,
}

impl Bellaso {
    pub fn new(key: &str) -> Result<Self> {
        Ok(Self {
            codes: key_codes(key)?,
        })
    }
}

impl Cipher for Bellaso {
    fn kind(&self) -> CipherKind {
        CipherKind::Bellaso
    }

    fn encrypt(&self, plain_text: &str) -> String {
        apply_codes(plain_text, &self.codes, 1)
    }

    fn decrypt(&self, encrypted_text: &str) -> String {
        apply_codes(encrypted_text, &self.codes, -1)
    }
}
