use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

use crate::sentence_splitter::normalize_line_endings;

const UTF8_BOM: char = '\u{FEFF}';

/// Statistics for a document read
#[derive(Debug, Clone, Serialize)]
pub struct ReadStats {
    pub file_path: String,
    pub bytes_read: u64,
    pub chars_read: u64,
    pub duration_ms: u64,
}

/// Read a whole document as UTF-8 with LF line endings
///
/// This is the only asynchronous step; pagination starts once the complete
/// string is in memory.
pub async fn read_document<P: AsRef<Path>>(file_path: P) -> Result<(String, ReadStats)> {
    let path = file_path.as_ref();
    let start_time = Instant::now();

    debug!("Starting async read of document: {}", path.display());

    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to open file {}", path.display()))?;
    let bytes_read = bytes.len() as u64;

    let raw = String::from_utf8(bytes)
        .with_context(|| format!("{} is not valid UTF-8", path.display()))?;
    let without_bom = raw.strip_prefix(UTF8_BOM).unwrap_or(&raw);
    let text = normalize_line_endings(without_bom).into_owned();

    let stats = ReadStats {
        file_path: path.display().to_string(),
        bytes_read,
        chars_read: text.chars().count() as u64,
        duration_ms: start_time.elapsed().as_millis() as u64,
    };

    info!(
        "Read {}: {} bytes, {} chars in {}ms",
        stats.file_path, stats.bytes_read, stats.chars_read, stats.duration_ms
    );

    Ok((text, stats))
}
