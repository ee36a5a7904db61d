use crate::core::bellaso::Bellaso;
use crate::core::caesar::Caesar;
use crate::core::{Cipher, CipherJob, CipherKey, CipherOutput, Direction};
use crate::utils::error::{CipherError, Result};
use crate::utils::validation::validate_in_window;

pub struct CipherEngine<C: Cipher> {
    cipher: C,
    strict: bool,
}

impl<C: Cipher> CipherEngine<C> {
    pub fn new(cipher: C) -> Self {
        Self {
            cipher,
            strict: false,
        }
    }

    /// Gate every run on the alphabet window before touching the text.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn run(&self, direction: Direction, text: &str) -> Result<CipherOutput> {
        let kind = self.cipher.kind();
        let input_len = text.chars().count();

        if self.strict {
            validate_in_window("text", text)?;
        }

        tracing::debug!(%kind, %direction, input_len, strict = self.strict, "Running cipher");
        let output = self.cipher.apply(direction, text);
        tracing::info!(%kind, %direction, "Processed {} characters", input_len);

        Ok(CipherOutput {
            kind,
            direction,
            input_len,
            text: output,
        })
    }
}

pub fn cipher_for(key: &CipherKey) -> Result<Box<dyn Cipher>> {
    let cipher: Box<dyn Cipher> = match key {
        CipherKey::Offset(offset) => Box::new(Caesar::new(*offset)),
        CipherKey::Keyword(keyword) => Box::new(Bellaso::new(keyword)?),
    };
    Ok(cipher)
}

/// Builds the cipher described by `job` and runs it once.
///
/// Strict jobs also require a Bellaso keyword to stay inside the window.
pub fn run_job(job: &CipherJob) -> Result<CipherOutput> {
    if job.strict {
        if let CipherKey::Keyword(keyword) = &job.key {
            validate_in_window("key", keyword).map_err(|e| match e {
                CipherError::OutOfBounds {
                    position, character, ..
                } => CipherError::InvalidKey {
                    reason: format!(
                        "Bellaso key has {:?} at position {}, outside the ' '..='_' window",
                        character, position
                    ),
                },
                other => other,
            })?;
        }
    }

    let engine = CipherEngine::new(cipher_for(&job.key)?).with_strict(job.strict);
    engine.run(job.direction, &job.text)
}
