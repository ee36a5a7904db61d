use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::error::{CipherError, Result};

/// First character of the alphabet window (code 32).
pub const LOWER_BOUND: char = ' ';
/// Last character of the alphabet window (code 95).
pub const UPPER_BOUND: char = '_';
/// Number of characters in the window.
pub const RANGE: i64 = UPPER_BOUND as i64 - LOWER_BOUND as i64 + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum CipherKind {
    Caesar,
    Bellaso,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Encrypt,
    Decrypt,
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherKind::Caesar => write!(f, "caesar"),
            CipherKind::Bellaso => write!(f, "bellaso"),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encrypt => write!(f, "encrypt"),
            Direction::Decrypt => write!(f, "decrypt"),
        }
    }
}

/// Key material for one cipher run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherKey {
    Offset(i64),
    Keyword(String),
}

impl CipherKey {
    /// Interprets raw key text for the given cipher.
    ///
    /// Caesar keys must parse as a signed integer; Bellaso keys are taken
    /// verbatim and must not be empty.
    pub fn parse(kind: CipherKind, raw: &str) -> Result<Self> {
        match kind {
            CipherKind::Caesar => raw
                .trim()
                .parse::<i64>()
                .map(CipherKey::Offset)
                .map_err(|e| CipherError::InvalidKey {
                    reason: format!("Caesar key '{}' is not an integer: {}", raw, e),
                }),
            CipherKind::Bellaso => {
                if raw.is_empty() {
                    return Err(CipherError::InvalidKey {
                        reason: "Bellaso key cannot be empty".to_string(),
                    });
                }
                Ok(CipherKey::Keyword(raw.to_string()))
            }
        }
    }

    pub fn kind(&self) -> CipherKind {
        match self {
            CipherKey::Offset(_) => CipherKind::Caesar,
            CipherKey::Keyword(_) => CipherKind::Bellaso,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CipherJob {
    pub key: CipherKey,
    pub direction: Direction,
    pub text: String,
    /// Reject text (and Bellaso keys) outside the alphabet window before running.
    pub strict: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherOutput {
    pub kind: CipherKind,
    pub direction: Direction,
    pub input_len: usize,
    pub text: String,
}

impl CipherOutput {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_constants() {
        assert_eq!(LOWER_BOUND as u32, 32);
        assert_eq!(UPPER_BOUND as u32, 95);
        assert_eq!(RANGE, 64);
    }

    #[test]
    fn test_parse_caesar_key() {
        assert_eq!(
            CipherKey::parse(CipherKind::Caesar, " -7 ").unwrap(),
            CipherKey::Offset(-7)
        );
        assert!(matches!(
            CipherKey::parse(CipherKind::Caesar, "three"),
            Err(CipherError::InvalidKey { .. })
        ));
    }

    #[test]
    fn test_parse_bellaso_key() {
        let key = CipherKey::parse(CipherKind::Bellaso, "CMSC203").unwrap();
        assert_eq!(key.kind(), CipherKind::Bellaso);
        assert!(CipherKey::parse(CipherKind::Bellaso, "").is_err());
    }

    #[test]
    fn test_output_serializes_lowercase() {
        let output = CipherOutput {
            kind: CipherKind::Bellaso,
            direction: Direction::Decrypt,
            input_len: 2,
            text: "HI".to_string(),
        };
        let json: serde_json::Value =
            serde_json::from_str(&output.to_json_pretty().unwrap()).unwrap();
        assert_eq!(json["kind"], "bellaso");
        assert_eq!(json["direction"], "decrypt");
        assert_eq!(json["input_len"], 2);
    }
}
