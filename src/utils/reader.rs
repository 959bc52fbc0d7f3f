//! Input reader with transparent decompression.
//!
//! Leaked-credential dumps are routinely shipped compressed; this reader lets
//! the analyze command consume `.gz` and `.zst` files without a manual
//! extraction step. Detection is by file extension only.

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Opens an input file, decompressing `.gz` and `.zst` by extension.
///
/// Anything else is returned as a plain file reader.
pub fn open_file(path: impl AsRef<Path>) -> Result<Box<dyn Read>> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("gz") => Ok(Box::new(GzDecoder::new(file))),
        Some("zst") => {
            let decoder = zstd::Decoder::new(file)
                .with_context(|| format!("Failed to read zstd stream: {}", path.display()))?;
            Ok(Box::new(decoder))
        }
        _ => Ok(Box::new(file)),
    }
}
