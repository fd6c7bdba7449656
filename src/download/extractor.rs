//! Extraction seam and the yt-dlp backed implementation.
//!
//! `MediaExtractor` is the narrow interface the orchestrator talks to, so
//! tests can swap in a fake that writes (or doesn't write) files without
//! touching the network. `YtDlpExtractor` is the production implementation:
//! one non-interactive yt-dlp invocation per call, best MP4 rendition,
//! output written to the exact requested path.

use crate::core::config;
use crate::core::error::AppError;
use crate::download::extract_errors::classify_extract_error;
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

/// Metadata reported by the extractor for a completed fetch.
#[derive(Debug, Clone, Default)]
pub struct ExtractedMedia {
    /// Media title, if the extractor could determine one
    pub title: Option<String>,
}

/// Capability that resolves a media URL to a file on local disk.
#[async_trait]
pub trait MediaExtractor: Send + Sync {
    /// Human-readable name of this extractor (e.g., "yt-dlp")
    fn name(&self) -> &str;

    /// Fetch the best available MP4 rendition of `url` and write it to
    /// `output_path`. Returns descriptive metadata on completion.
    ///
    /// Completion without an error does not guarantee the file exists —
    /// callers re-check the path before trusting the result.
    async fn extract(&self, url: &str, output_path: &Path) -> Result<ExtractedMedia, AppError>;
}

/// Extractor backed by the external yt-dlp binary.
pub struct YtDlpExtractor;

impl Default for YtDlpExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl YtDlpExtractor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MediaExtractor for YtDlpExtractor {
    fn name(&self) -> &str {
        "yt-dlp"
    }

    async fn extract(&self, url: &str, output_path: &Path) -> Result<ExtractedMedia, AppError> {
        let ytdl_bin = &*config::YTDL_BIN;
        let output_arg = output_path.to_string_lossy().into_owned();

        // --print implies --simulate, so --no-simulate keeps the download;
        // after_move:title prints once the file is at its final path.
        let result = timeout(
            config::download::ytdlp_timeout(),
            TokioCommand::new(ytdl_bin)
                .args([
                    "--quiet",
                    "--no-warnings",
                    "--no-playlist",
                    "--no-progress",
                    "--format",
                    "best[ext=mp4]",
                    "--output",
                    &output_arg,
                    "--no-simulate",
                    "--print",
                    "after_move:title",
                    url,
                ])
                .output(),
        )
        .await;

        let output = match result {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                return Err(AppError::Download(format!("Failed to execute {}: {}", ytdl_bin, e)));
            }
            Err(_) => {
                return Err(AppError::Download(format!(
                    "yt-dlp timed out after {}s",
                    config::download::YTDLP_TIMEOUT_SECS
                )));
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            log::warn!(
                "yt-dlp failed for {} (exit code {:?}, category {:?})",
                url,
                output.status.code(),
                classify_extract_error(&stderr)
            );
            let message = if stderr.is_empty() {
                format!("yt-dlp exited with code {:?}", output.status.code())
            } else {
                stderr
            };
            return Err(AppError::Download(message));
        }

        let title = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && *line != "NA")
            .last()
            .map(str::to_string);

        Ok(ExtractedMedia { title })
    }
}
