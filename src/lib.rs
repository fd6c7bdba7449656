//! Reelgrab - small web front-end for saving Instagram media via yt-dlp
//!
//! This library provides the full functionality of the service: URL
//! validation, download orchestration, history aggregation and the web
//! surface.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, logging, input validation
//! - `download`: extraction seam, orchestrator, history scans
//! - `web`: axum router and page rendering

pub mod core;
pub mod download;
pub mod web;

// Re-export commonly used types for convenience
pub use crate::core::{config, AppError, AppResult};
pub use crate::download::{download_reel, DownloadOutcome, DownloadRequest, MediaExtractor, YtDlpExtractor};
pub use crate::web::{build_router, start_web_server, WebState};
