//! Mock extractor for integration tests
//!
//! Simulates the yt-dlp collaborator with configurable behavior so the
//! orchestration flow can be exercised without network access.

#![allow(dead_code)] // Not every test binary uses every knob

use async_trait::async_trait;
use reelgrab::core::error::AppError;
use reelgrab::download::{ExtractedMedia, MediaExtractor};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

/// What the mock should do when invoked.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Write the given bytes to the output path and report the given title
    WriteFile { bytes: Vec<u8>, title: Option<String> },
    /// Raise an extraction error with the given message
    Fail { message: String },
    /// Complete without raising and without writing anything
    CompleteSilently,
}

/// Extractor double with scripted behavior and an invocation counter.
pub struct MockExtractor {
    behavior: MockBehavior,
    calls: AtomicU64,
}

impl MockExtractor {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicU64::new(0),
        }
    }

    /// Number of times `extract` was invoked.
    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MediaExtractor for MockExtractor {
    fn name(&self) -> &str {
        "mock"
    }

    async fn extract(&self, _url: &str, output_path: &Path) -> Result<ExtractedMedia, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            MockBehavior::WriteFile { bytes, title } => {
                std::fs::write(output_path, bytes).map_err(AppError::Io)?;
                Ok(ExtractedMedia { title: title.clone() })
            }
            MockBehavior::Fail { message } => Err(AppError::Download(message.clone())),
            MockBehavior::CompleteSilently => Ok(ExtractedMedia::default()),
        }
    }
}
