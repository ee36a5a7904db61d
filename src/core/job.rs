use crate::core::{CipherJob, CipherKey, ConfigProvider};
use crate::utils::error::{CipherError, Result};
use crate::utils::validation::validate_required_field;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Resolves a [`ConfigProvider`] into a runnable job, reading the input file
/// when no inline text is configured.
pub async fn load_job<P: ConfigProvider>(config: &P) -> Result<CipherJob> {
    let kind = *validate_required_field("cipher.kind", &config.cipher_kind())?;
    let raw_key = config
        .raw_key()
        .ok_or_else(|| CipherError::MissingConfigError {
            field: "cipher.key".to_string(),
        })?;
    let key = CipherKey::parse(kind, raw_key)?;

    let text = match (config.inline_text(), config.input_file()) {
        (Some(text), _) => text.to_string(),
        (None, Some(path)) => {
            tracing::debug!("Reading input from {}", path);
            let content = tokio::fs::read_to_string(path).await?;
            strip_trailing_newline(&content).to_string()
        }
        (None, None) => {
            return Err(CipherError::MissingConfigError {
                field: "input.text or input.file".to_string(),
            })
        }
    };

    Ok(CipherJob {
        key,
        direction: config.direction(),
        text,
        strict: config.strict(),
    })
}

/// Reads all of `reader` as the text to process, e.g. piped stdin.
pub async fn read_text<R: AsyncRead + Unpin>(mut reader: R) -> Result<String> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer).await?;
    Ok(strip_trailing_newline(&buffer).to_string())
}

/// Files and piped stdin usually end with a newline, which is outside the window.
pub fn strip_trailing_newline(content: &str) -> &str {
    content
        .strip_suffix("\r\n")
        .or_else(|| content.strip_suffix('\n'))
        .unwrap_or(content)
}
