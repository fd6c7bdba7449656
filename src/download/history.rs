//! History and profile aggregation over the downloads directory.
//!
//! Read-only, stateless, recomputed on every request. There is no manifest —
//! everything displayed is derived from filesystem attributes at read time.

use crate::core::error::AppResult;
use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;
use std::time::SystemTime;

/// Bytes per MiB (binary megabyte).
const BYTES_PER_MIB: f64 = 1_048_576.0;

/// Display record for one stored download.
#[derive(Debug, Clone)]
pub struct DownloadedFile {
    /// Bare file name
    pub name: String,
    /// Size in MiB (bytes / 1,048,576)
    pub size_mib: f64,
    /// Creation timestamp formatted as `YYYY-MM-DD HH:MM:SS`
    pub created: String,
}

/// Formats a filesystem timestamp for display.
fn format_timestamp(time: SystemTime) -> String {
    let datetime: DateTime<Local> = time.into();
    datetime.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Lists the `*.mp4` files in `dir` with display metadata.
///
/// Order follows the directory listing; no sort is applied. Entries whose
/// metadata cannot be read are skipped rather than failing the whole scan.
/// Filesystems without birth times fall back to the modification time.
pub fn list_downloads(dir: &Path) -> AppResult<Vec<DownloadedFile>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("mp4") {
            continue;
        }

        let metadata = match entry.metadata() {
            Ok(m) if m.is_file() => m,
            Ok(_) => continue,
            Err(e) => {
                log::warn!("Skipping {} in history scan: {}", path.display(), e);
                continue;
            }
        };

        let created = metadata
            .created()
            .or_else(|_| metadata.modified())
            .map(format_timestamp)
            .unwrap_or_default();

        files.push(DownloadedFile {
            name: entry.file_name().to_string_lossy().into_owned(),
            size_mib: metadata.len() as f64 / BYTES_PER_MIB,
            created,
        });
    }

    Ok(files)
}

/// Counts the `*.mp4` files in `dir`.
pub fn count_downloads(dir: &Path) -> usize {
    fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .filter(|e| e.path().extension().and_then(|ext| ext.to_str()) == Some("mp4"))
                .count()
        })
        .unwrap_or(0)
}
