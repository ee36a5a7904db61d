pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use crate::core::alphabet::{shift, string_in_bounds};
pub use crate::core::bellaso::{decrypt_bellaso, encrypt_bellaso, Bellaso};
pub use crate::core::caesar::{decrypt_caesar, encrypt_caesar, Caesar};
pub use crate::core::engine::{run_job, CipherEngine};
pub use domain::model::{CipherJob, CipherKey, CipherKind, CipherOutput, Direction};
pub use domain::ports::Cipher;
pub use utils::error::{CipherError, Result};
