use crate::core::alphabet::shift;
use crate::domain::model::{CipherKind, RANGE};
use crate::domain::ports::Cipher;

/// Shifts every character of `plain_text` by `key`.
pub fn encrypt_caesar(plain_text: &str, key: i64) -> String {
    plain_text.chars().map(|c| shift(c, key)).collect()
}

/// Inverse of [`encrypt_caesar`]: encrypts with the negated key.
pub fn decrypt_caesar(encrypted_text: &str, key: i64) -> String {
    // reduce first so i64::MIN negates cleanly
    encrypt_caesar(encrypted_text, -key.rem_euclid(RANGE))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caesar {
    key: i64,
}

impl Caesar {
    pub fn new(key: i64) -> Self {
        Self { key }
    }
}

impl Cipher for Caesar {
    fn kind(&self) -> CipherKind {
        CipherKind::Caesar
    }

    fn encrypt(&self, plain_text: &str) -> String {
        encrypt_caesar(plain_text, self.key)
    }

    fn decrypt(&self, encrypted_text: &str) -> String {
        decrypt_caesar(encrypted_text, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_hello() {
        assert_eq!(encrypt_caesar("HELLO", 3), "KHOOR");
        assert_eq!(decrypt_caesar("KHOOR", 3), "HELLO");
    }

    #[test]
    fn test_empty_input() {
        for key in [-5, 0, 3, 1_000] {
            assert_eq!(encrypt_caesar("", key), "");
            assert_eq!(decrypt_caesar("", key), "");
        }
    }

    #[test]
    fn test_wraparound() {
        assert_eq!(encrypt_caesar("_^", 2), "! ");
        assert_eq!(encrypt_caesar(" !", -2), "^_");
    }

    #[test]
    fn test_length_preserved() {
        let plain = "THE QUICK BROWN FOX, 1234!";
        assert_eq!(encrypt_caesar(plain, 41).chars().count(), plain.chars().count());
    }

    #[test]
    fn test_decrypt_with_extreme_keys() {
        let plain = "ATTACK AT DAWN";
        for key in [i64::MIN, i64::MAX, -1, 64, 95] {
            assert_eq!(decrypt_caesar(&encrypt_caesar(plain, key), key), plain);
        }
    }

    #[test]
    fn test_cipher_trait() {
        let cipher = Caesar::new(3);
        assert_eq!(cipher.kind(), CipherKind::Caesar);
        assert_eq!(cipher.encrypt("HELLO"), "KHOOR");
        assert_eq!(cipher.decrypt("KHOOR"), "HELLO");
    }
}
