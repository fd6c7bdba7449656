//! Download orchestration: naming, delegation, postcondition check.
//!
//! One extractor invocation per call, no retries. Every failure path resolves
//! to a `DownloadOutcome::Failure` — nothing from the extractor propagates
//! past this boundary.

use crate::download::{DownloadOutcome, DownloadRequest, MediaExtractor};
use chrono::Local;
use std::path::Path;

/// Title used when the extractor reports none.
const FALLBACK_TITLE: &str = "Instagram Reel";

/// Builds the deterministic output file name for a request.
///
/// Second-resolution timestamps mean two calls for the same requester within
/// the same second produce the same name and silently overwrite each other.
/// Known gap, kept to match the established naming convention.
pub fn reel_file_name(requester_id: &str, timestamp: &str) -> String {
    format!("reel_{}_{}.mp4", requester_id, timestamp)
}

/// Runs one download attempt and normalizes the result.
///
/// Steps:
/// 1. derive `reel_<requester>_<YYYYMMDD_HHMMSS>.mp4` under `downloads_dir`;
/// 2. invoke the extractor, suspending for the full fetch;
/// 3. re-check that the file actually exists and is non-empty — the
///    extractor's own success report is not trusted blindly;
/// 4. convert any extractor error into a `Failure` carrying its description.
pub async fn download_reel(
    extractor: &dyn MediaExtractor,
    downloads_dir: &Path,
    request: &DownloadRequest,
) -> DownloadOutcome {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let file_name = reel_file_name(&request.requester_id, &timestamp);
    let file_path = downloads_dir.join(&file_name);

    match extractor.extract(&request.url, &file_path).await {
        Ok(media) => {
            let file_ok = std::fs::metadata(&file_path).map(|m| m.len() > 0).unwrap_or(false);
            if file_ok {
                DownloadOutcome::Success {
                    file_path,
                    file_name,
                    title: media.title.unwrap_or_else(|| FALLBACK_TITLE.to_string()),
                }
            } else {
                log::error!(
                    "{} reported success for {} but {} is missing or empty",
                    extractor.name(),
                    request.url,
                    file_path.display()
                );
                DownloadOutcome::Failure {
                    message: "Download failed".to_string(),
                }
            }
        }
        Err(e) => {
            log::error!("Download error for {}: {}", request.url, e);
            DownloadOutcome::Failure { message: e.to_string() }
        }
    }
}
