pub mod alphabet;
pub mod bellaso;
pub mod caesar;
pub mod engine;
pub mod job;

pub use crate::domain::model::{CipherJob, CipherKey, CipherKind, CipherOutput, Direction};
pub use crate::domain::ports::{Cipher, ConfigProvider};
pub use crate::utils::error::Result;
