//! Logging initialization and startup diagnostics
//!
//! This module provides:
//! - Logger initialization (console + file)
//! - yt-dlp binary diagnostics logged at startup

use anyhow::Result;
use simplelog::*;
use std::fs::File;
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

use crate::core::config;

/// Initialize logger for both console and file output
///
/// # Arguments
/// * `log_file_path` - Path to the log file
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(anyhow::Error)` - Failed to initialize logger
pub fn init_logger(log_file_path: &str) -> Result<()> {
    let log_file = File::create(log_file_path).map_err(|e| anyhow::anyhow!("Failed to create log file: {}", e))?;

    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(LevelFilter::Info, Config::default(), log_file),
    ])
    .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}

/// Logs the resolved yt-dlp binary and its version at application startup
///
/// Extraction is delegated entirely to yt-dlp, so a missing or broken binary
/// means every download will fail. This makes that visible at boot instead of
/// on the first request.
pub async fn log_ytdlp_configuration() {
    let ytdl_bin = &*config::YTDL_BIN;
    log::info!("Extraction binary: {}", ytdl_bin);

    let version_result = timeout(
        std::time::Duration::from_secs(10),
        TokioCommand::new(ytdl_bin).arg("--version").output(),
    )
    .await;

    match version_result {
        Ok(Ok(output)) if output.status.success() => {
            let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
            log::info!("yt-dlp version: {}", version);
        }
        Ok(Ok(output)) => {
            log::warn!(
                "yt-dlp --version exited with {:?}: {}",
                output.status.code(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(Err(e)) => {
            log::error!("Failed to execute {}: {}. Downloads will fail until it is installed.", ytdl_bin, e);
        }
        Err(_) => {
            log::warn!("yt-dlp version check timed out");
        }
    }
}
