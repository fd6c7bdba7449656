use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Configuration constants for the service
/// Cached yt-dlp binary path
/// Read once at startup from YTDL_BIN environment variable or defaults to "yt-dlp"
pub static YTDL_BIN: Lazy<String> = Lazy::new(|| env::var("YTDL_BIN").unwrap_or_else(|_| "yt-dlp".to_string()));

/// Download folder path
/// Read from DOWNLOAD_FOLDER environment variable
/// Defaults to "downloads" relative to the working directory
/// Supports tilde (~) expansion for home directory
pub static DOWNLOAD_FOLDER: Lazy<String> = Lazy::new(|| {
    let raw = env::var("DOWNLOAD_FOLDER").unwrap_or_else(|_| "downloads".to_string());
    shellexpand::tilde(&raw).into_owned()
});

/// Port the web server listens on
/// Read from WEB_PORT environment variable
/// Default: 3000
pub static WEB_PORT: Lazy<u16> = Lazy::new(|| {
    env::var("WEB_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000)
});

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: app.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "app.log".to_string()));

/// Identity used for downloads until a real user/session model exists.
/// Read from REQUESTER_ID environment variable so deployments can rename it
/// without a rebuild.
pub static DEFAULT_REQUESTER_ID: Lazy<String> =
    Lazy::new(|| env::var("REQUESTER_ID").unwrap_or_else(|_| "webuser".to_string()));

/// Download configuration
pub mod download {
    use super::Duration;

    /// Timeout for yt-dlp commands (in seconds)
    pub const YTDLP_TIMEOUT_SECS: u64 = 240; // 4 minutes, Instagram CDN can be slow

    /// yt-dlp command timeout duration
    pub fn ytdlp_timeout() -> Duration {
        Duration::from_secs(YTDLP_TIMEOUT_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ytdlp_timeout_matches_constant() {
        assert_eq!(download::ytdlp_timeout(), Duration::from_secs(download::YTDLP_TIMEOUT_SECS));
    }

    #[test]
    fn test_defaults_are_non_empty() {
        assert!(!YTDL_BIN.is_empty());
        assert!(!DOWNLOAD_FOLDER.is_empty());
        assert!(!DEFAULT_REQUESTER_ID.is_empty());
    }
}
