pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use super::toml_config::TomlConfig;
    use crate::core::{CipherKey, CipherKind, ConfigProvider, Direction};
    use crate::utils::error::{CipherError, Result};
    use crate::utils::validation::{validate_non_empty_string, validate_required_field, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    /// Command line flags. Any flag left unset falls back to the TOML file
    /// given with `--config`.
    #[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
    #[command(name = "classic-cipher")]
    #[command(about = "Caesar and Bellaso ciphers over the ASCII ' '..='_' alphabet")]
    pub struct CliConfig {
        /// Path to a TOML job file
        #[arg(short, long)]
        pub config: Option<String>,

        /// Cipher to use
        #[arg(long, value_enum)]
        pub cipher: Option<CipherKind>,

        /// Encrypt or decrypt
        #[arg(short, long, value_enum)]
        pub mode: Option<Direction>,

        /// Integer offset for caesar, keyword for bellaso
        #[arg(short, long, allow_hyphen_values = true)]
        pub key: Option<String>,

        /// Text to process
        #[arg(short, long, conflicts_with = "input")]
        pub text: Option<String>,

        /// Read the text from a file instead
        #[arg(short, long)]
        pub input: Option<String>,

        /// Refuse text or keys outside the alphabet window
        #[arg(long)]
        pub strict: bool,

        /// Turn off strict mode even if the config file enables it
        #[arg(long, conflicts_with = "strict")]
        pub no_strict: bool,

        /// Print the result as JSON
        #[arg(long)]
        pub json: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        /// Emit logs as JSON lines on stderr
        #[arg(long)]
        pub log_json: bool,

        #[arg(skip)]
        #[serde(skip)]
        pub file: Option<TomlConfig>,
    }

    impl CliConfig {
        /// Loads the `--config` file, if any, underneath the flags.
        pub fn load_file(mut self) -> Result<Self> {
            if let Some(path) = &self.config {
                tracing::info!("Loading configuration from: {}", path);
                self.file = Some(TomlConfig::from_file(path)?);
            }
            Ok(self)
        }

        pub fn with_file(mut self, file: TomlConfig) -> Self {
            self.file = Some(file);
            self
        }

        pub fn has_text_source(&self) -> bool {
            self.inline_text().is_some() || self.input_file().is_some()
        }
    }

    impl ConfigProvider for CliConfig {
        fn cipher_kind(&self) -> Option<CipherKind> {
            self.cipher
                .or_else(|| self.file.as_ref().and_then(|f| f.cipher_kind()))
        }

        fn direction(&self) -> Direction {
            self.mode
                .unwrap_or_else(|| self.file.as_ref().map(|f| f.direction()).unwrap_or_default())
        }

        fn raw_key(&self) -> Option<&str> {
            self.key
                .as_deref()
                .or_else(|| self.file.as_ref().and_then(|f| f.raw_key()))
        }

        fn inline_text(&self) -> Option<&str> {
            if self.input.is_some() {
                return None;
            }
            self.text
                .as_deref()
                .or_else(|| self.file.as_ref().and_then(|f| f.inline_text()))
        }

        fn input_file(&self) -> Option<&str> {
            if self.text.is_some() {
                return None;
            }
            self.input
                .as_deref()
                .or_else(|| self.file.as_ref().and_then(|f| f.input_file()))
        }

        fn strict(&self) -> bool {
            if self.no_strict {
                return false;
            }
            self.strict || self.file.as_ref().is_some_and(|f| f.strict())
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(file) = &self.file {
                file.validate()?;
            }

            let kind = *validate_required_field("cipher.kind", &self.cipher_kind())?;
            let key = self.raw_key().ok_or_else(|| CipherError::MissingConfigError {
                field: "cipher.key".to_string(),
            })?;
            CipherKey::parse(kind, key)?;

            if let Some(path) = self.input_file() {
                validate_non_empty_string("input.file", path)?;
            }
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_flags() {
            let config = CliConfig::parse_from([
                "classic-cipher",
                "--cipher",
                "caesar",
                "--mode",
                "decrypt",
                "--key",
                "-3",
                "--text",
                "HELLO",
            ]);
            assert_eq!(config.cipher_kind(), Some(CipherKind::Caesar));
            assert_eq!(config.direction(), Direction::Decrypt);
            assert_eq!(config.raw_key(), Some("-3"));
            assert_eq!(config.inline_text(), Some("HELLO"));
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_text_and_input_conflict() {
            let result = CliConfig::try_parse_from([
                "classic-cipher",
                "--text",
                "A",
                "--input",
                "a.txt",
            ]);
            assert!(result.is_err());
        }

        #[test]
        fn test_flags_override_file() {
            let file = TomlConfig::from_toml_str(
                r#"
[cipher]
kind = "bellaso"
direction = "decrypt"
key = "CMSC"
strict = true

[input]
file = "cipher.txt"
"#,
            )
            .unwrap();

            let config = CliConfig::parse_from(["classic-cipher", "--mode", "encrypt", "--text", "HI"])
                .with_file(file);
            assert_eq!(config.cipher_kind(), Some(CipherKind::Bellaso));
            assert_eq!(config.direction(), Direction::Encrypt);
            assert_eq!(config.raw_key(), Some("CMSC"));
            assert_eq!(config.inline_text(), Some("HI"));
            assert_eq!(config.input_file(), None);
            assert!(config.strict());
        }

        #[test]
        fn test_no_strict_relaxes_file() {
            let file = TomlConfig::from_toml_str("[cipher]\nkind = \"caesar\"\nstrict = true\n").unwrap();

            let config = CliConfig::parse_from(["classic-cipher"]).with_file(file.clone());
            assert!(config.strict());

            let config = CliConfig::parse_from(["classic-cipher", "--no-strict"]).with_file(file);
            assert!(!config.strict());

            assert!(CliConfig::try_parse_from(["classic-cipher", "--strict", "--no-strict"]).is_err());
        }

        #[test]
        fn test_has_text_source() {
            assert!(!CliConfig::parse_from(["classic-cipher"]).has_text_source());
            assert!(CliConfig::parse_from(["classic-cipher", "--text", "HI"]).has_text_source());
            assert!(CliConfig::parse_from(["classic-cipher", "--input", "plain.txt"]).has_text_source());

            let with_input = TomlConfig::from_toml_str("[cipher]\n\n[input]\nfile = \"plain.txt\"\n").unwrap();
            assert!(CliConfig::parse_from(["classic-cipher"])
                .with_file(with_input)
                .has_text_source());

            let without_input = TomlConfig::from_toml_str("[cipher]\nkind = \"bellaso\"\n").unwrap();
            assert!(!CliConfig::parse_from(["classic-cipher"])
                .with_file(without_input)
                .has_text_source());
        }

        #[test]
        fn test_validate_requires_cipher_and_key() {
            let config = CliConfig::parse_from(["classic-cipher", "--key", "3"]);
            assert!(matches!(
                config.validate(),
                Err(CipherError::MissingConfigError { .. })
            ));

            let config = CliConfig::parse_from(["classic-cipher", "--cipher", "caesar", "--key", "x"]);
            assert!(matches!(
                config.validate(),
                Err(CipherError::InvalidKey { .. })
            ));
        }
    }
}
