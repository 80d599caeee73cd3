//! Input acquisition for CLI commands
//!
//! Reads the workout CSV export from a file or standard input.

use crate::constants::STDIN_PATH;
use crate::{Error, Result};
use std::path::Path;
use tokio::io::AsyncReadExt;
use tracing::debug;

const UTF8_BOM: char = '\u{feff}';

/// Read the whole CSV export at `path`, or standard input when `path` is `-`
///
/// A leading byte-order mark is removed so the header matches exactly.
pub async fn read_csv_input(path: &Path) -> Result<String> {
    let (bytes, source) = if path == Path::new(STDIN_PATH) {
        let mut buffer = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut buffer)
            .await
            .map_err(|e| Error::io("Failed to read standard input", e))?;
        (buffer, "standard input".to_string())
    } else {
        let buffer = tokio::fs::read(path)
            .await
            .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;
        (buffer, path.display().to_string())
    };

    debug!("Read {} bytes from {}", bytes.len(), source);
    decode_csv_bytes(bytes, &source)
}

/// Decode raw bytes as UTF-8 text and strip a leading byte-order mark
pub fn decode_csv_bytes(bytes: Vec<u8>, source: &str) -> Result<String> {
    let text = String::from_utf8(bytes).map_err(|e| {
        Error::data_validation(format!(
            "{} is not valid UTF-8 (invalid byte at offset {})",
            source,
            e.utf8_error().valid_up_to()
        ))
    })?;

    Ok(match text.strip_prefix(UTF8_BOM) {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

/// Whether the input carries no CSV content at all
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
