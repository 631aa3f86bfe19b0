// src/output.rs
// =============================================================================
// Writes the crawl result to disk as pretty-printed JSON.
//
// serde_json writes UTF-8 and leaves non-ASCII characters as they are, so
// page text in any language survives unchanged. A failure here is fatal to
// the run: there is nothing sensible to do if the file cannot be written.
// =============================================================================

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::page::PageRecord;

pub fn write_pages(path: &Path, pages: &[PageRecord]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let file = File::create(path)
        .with_context(|| format!("failed to create output file {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, pages)
        .with_context(|| format!("failed to write {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(())
}
