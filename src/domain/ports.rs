use crate::domain::model::{CipherKind, Direction};

/// A keyed substitution cipher over the alphabet window.
pub trait Cipher: Send + Sync {
    fn kind(&self) -> CipherKind;
    fn encrypt(&self, plain_text: &str) -> String;
    fn decrypt(&self, encrypted_text: &str) -> String;

    fn apply(&self, direction: Direction, text: &str) -> String {
        match direction {
            Direction::Encrypt => self.encrypt(text),
            Direction::Decrypt => self.decrypt(text),
        }
    }
}

pub trait ConfigProvider: Send + Sync {
    fn cipher_kind(&self) -> Option<CipherKind>;
    fn direction(&self) -> Direction;
    fn raw_key(&self) -> Option<&str>;
    fn inline_text(&self) -> Option<&str>;
    fn input_file(&self) -> Option<&str>;
    fn strict(&self) -> bool;
}

impl<C: Cipher + ?Sized> Cipher for Box<C> {
    fn kind(&self) -> CipherKind {
        (**self).kind()
    }

    fn encrypt(&self, plain_text: &str) -> String {
        (**self).encrypt(plain_text)
    }

    fn decrypt(&self, encrypted_text: &str) -> String {
        (**self).decrypt(encrypted_text)
    }
}
