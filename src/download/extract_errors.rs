//! Classification of yt-dlp stderr output.
//!
//! Used only for the failure log line — the user always sees the raw error
//! description, but the log gets a category that makes grepping for systemic
//! problems (network vs. login walls) practical.

/// Category of a failed yt-dlp invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractErrorKind {
    /// Media is private, deleted or geo-restricted
    MediaUnavailable,
    /// Instagram demanded an authenticated session
    LoginRequired,
    /// Timeouts, DNS, connection resets
    NetworkError,
    /// Anything we can't place
    Unknown,
}

/// Analyzes yt-dlp stderr and determines the error category.
pub fn classify_extract_error(stderr: &str) -> ExtractErrorKind {
    let stderr_lower = stderr.to_lowercase();

    if stderr_lower.contains("login required")
        || stderr_lower.contains("rate-limit reached")
        || stderr_lower.contains("requested content is not available")
        || stderr_lower.contains("use --cookies")
    {
        return ExtractErrorKind::LoginRequired;
    }

    if stderr_lower.contains("private")
        || stderr_lower.contains("unavailable")
        || stderr_lower.contains("has been removed")
        || stderr_lower.contains("does not exist")
        || stderr_lower.contains("404")
    {
        return ExtractErrorKind::MediaUnavailable;
    }

    if stderr_lower.contains("timeout")
        || stderr_lower.contains("timed out")
        || stderr_lower.contains("connection")
        || stderr_lower.contains("network")
        || stderr_lower.contains("dns")
        || stderr_lower.contains("socket")
    {
        return ExtractErrorKind::NetworkError;
    }

    ExtractErrorKind::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_login_required() {
        let cases = vec![
            "ERROR: [Instagram] abc: login required (use --cookies)",
            "ERROR: rate-limit reached",
        ];
        for stderr in cases {
            assert_eq!(classify_extract_error(stderr), ExtractErrorKind::LoginRequired, "for: {}", stderr);
        }
    }

    #[test]
    fn test_classify_unavailable() {
        let cases = vec![
            "ERROR: This video is unavailable",
            "ERROR: [Instagram] abc: The post is private",
            "ERROR: HTTP Error 404: Not Found",
        ];
        for stderr in cases {
            assert_eq!(
                classify_extract_error(stderr),
                ExtractErrorKind::MediaUnavailable,
                "for: {}",
                stderr
            );
        }
    }

    #[test]
    fn test_classify_network() {
        assert_eq!(
            classify_extract_error("ERROR: unable to download webpage: connection reset by peer"),
            ExtractErrorKind::NetworkError
        );
        assert_eq!(
            classify_extract_error("ERROR: read timed out"),
            ExtractErrorKind::NetworkError
        );
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(classify_extract_error("something odd happened"), ExtractErrorKind::Unknown);
        assert_eq!(classify_extract_error(""), ExtractErrorKind::Unknown);
    }
}
