use anyhow::Result;
use dotenvy::dotenv;
use std::path::PathBuf;
use std::sync::Arc;

use reelgrab::core::{config, init_logger, log_ytdlp_configuration};
use reelgrab::{start_web_server, WebState, YtDlpExtractor};

/// Main entry point for the web service
///
/// # Errors
/// Returns an error if initialization fails (logging, downloads directory,
/// listener bind).
#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present; environment takes priority
    let _ = dotenv();

    init_logger(&config::LOG_FILE_PATH)?;

    let downloads_dir = PathBuf::from(&*config::DOWNLOAD_FOLDER);
    std::fs::create_dir_all(&downloads_dir)
        .map_err(|e| anyhow::anyhow!("Failed to create downloads directory {}: {}", downloads_dir.display(), e))?;
    log::info!("Downloads directory: {}", downloads_dir.display());

    log_ytdlp_configuration().await;

    let state = WebState {
        downloads_dir,
        requester_id: config::DEFAULT_REQUESTER_ID.clone(),
        extractor: Arc::new(YtDlpExtractor::new()),
    };

    start_web_server(*config::WEB_PORT, state)
        .await
        .map_err(|e| anyhow::anyhow!("Web server error: {}", e))?;

    Ok(())
}
