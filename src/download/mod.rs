//! Download pipeline: extraction seam, orchestration and history.
//!
//! The actual media extraction is delegated to the external yt-dlp binary
//! behind the `MediaExtractor` trait; everything in this module is the thin
//! layer around it — request/outcome contract, deterministic output naming,
//! postcondition checks and directory scans.

pub mod extract_errors;
pub mod extractor;
pub mod history;
pub mod orchestrator;

use std::path::PathBuf;

pub use extractor::{ExtractedMedia, MediaExtractor, YtDlpExtractor};
pub use history::{count_downloads, list_downloads, DownloadedFile};
pub use orchestrator::download_reel;

/// Parameters for a single download attempt.
///
/// Built once per incoming form submission and discarded after the
/// orchestration call returns.
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    /// Instagram media URL (already shape-validated by the caller)
    pub url: String,
    /// Identity the file name is derived from. Injected by the caller —
    /// currently the placeholder web identity, later a real session user.
    pub requester_id: String,
}

/// Tagged outcome of an orchestration attempt.
///
/// There are no partial states: either a playable file exists at `file_path`
/// when `Success` is produced, or the caller sees only a `Failure` message.
#[derive(Debug, Clone, PartialEq)]
pub enum DownloadOutcome {
    Success {
        /// Full path of the downloaded file
        file_path: PathBuf,
        /// Bare file name (`reel_<requester>_<timestamp>.mp4`)
        file_name: String,
        /// Human-readable title from extractor metadata
        title: String,
    },
    Failure {
        /// User-facing description of what went wrong
        message: String,
    },
}

impl DownloadOutcome {
    /// Whether this outcome is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, DownloadOutcome::Success { .. })
    }
}
