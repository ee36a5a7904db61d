use crate::core::{CipherKey, CipherKind, ConfigProvider, Direction};
use crate::utils::error::{CipherError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub cipher: CipherSection,
    pub input: Option<InputSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CipherSection {
    pub kind: Option<CipherKind>,
    pub direction: Option<Direction>,
    /// Integer or string in the file, kept as text until the kind is known.
    #[serde(default, deserialize_with = "key_as_string")]
    pub key: Option<String>,
    pub strict: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSection {
    pub text: Option<String>,
    pub file: Option<String>,
}

fn key_as_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawKey {
        Offset(i64),
        Keyword(String),
    }

    Ok(Option::<RawKey>::deserialize(deserializer)?.map(|raw| match raw {
        RawKey::Offset(offset) => offset.to_string(),
        RawKey::Keyword(keyword) => keyword,
    }))
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CipherError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let (Some(kind), Some(key)) = (self.cipher.kind, &self.cipher.key) {
            CipherKey::parse(kind, key)?;
        }

        if let Some(input) = &self.input {
            if input.text.is_some() && input.file.is_some() {
                return Err(CipherError::ConfigError {
                    message: "[input] sets both text and file".to_string(),
                });
            }
            if let Some(file) = &input.file {
                validate_non_empty_string("input.file", file)?;
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn cipher_kind(&self) -> Option<CipherKind> {
        self.cipher.kind
    }

    fn direction(&self) -> Direction {
        self.cipher.direction.unwrap_or_default()
    }

    fn raw_key(&self) -> Option<&str> {
        self.cipher.key.as_deref()
    }

    fn inline_text(&self) -> Option<&str> {
        self.input.as_ref().and_then(|i| i.text.as_deref())
    }

    fn input_file(&self) -> Option<&str> {
        self.input.as_ref().and_then(|i| i.file.as_deref())
    }

    fn strict(&self) -> bool {
        self.cipher.strict.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
