use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("Invalid key: {reason}")]
    InvalidKey { reason: String },

    #[error("Character {character:?} at position {position} of {field} is outside the ' '..='_' window")]
    OutOfBounds {
        field: String,
        position: usize,
        character: char,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, CipherError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code the CLI uses for an error of this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low | ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl CipherError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CipherError::InvalidKey { .. } | CipherError::OutOfBounds { .. } => {
                ErrorCategory::Input
            }
            CipherError::TomlError(_)
            | CipherError::ConfigError { .. }
            | CipherError::MissingConfigError { .. }
            | CipherError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            CipherError::IoError(_) | CipherError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CipherError::InvalidKey { reason } => format!("The key cannot be used: {}", reason),
            CipherError::OutOfBounds {
                field,
                position,
                character,
            } => format!(
                "The {} contains {:?} at position {}, which is not in the supported alphabet",
                field, character, position
            ),
            CipherError::IoError(e) => format!("Could not read input: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CipherError::InvalidKey { .. } => {
                "Use an integer key for caesar or a non-empty key of characters ' ' through '_' for bellaso"
            }
            CipherError::OutOfBounds { .. } => {
                "Use only characters from space to underscore (uppercase letters, digits, punctuation) or drop --strict"
            }
            CipherError::IoError(_) => "Check that the input file exists and is readable",
            CipherError::TomlError(_) => "Check the configuration file for TOML syntax errors",
            CipherError::SerializationError(_) => "Retry without --json",
            CipherError::ConfigError { .. }
            | CipherError::MissingConfigError { .. }
            | CipherError::InvalidConfigValueError { .. } => {
                "Check the command line flags and the [cipher]/[input] sections of the config file"
            }
        }
    }
}
