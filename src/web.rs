//! Public-facing web server.
//!
//! Serves the landing page, the downloader form, and the profile/history
//! pages. Pages are rendered inline; failures surface as an inline notice via
//! a redirect back to the form, never an error page.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::core::validation::is_instagram_media_url;
use crate::download::{self, DownloadOutcome, DownloadRequest, MediaExtractor};

/// Shared state for the web server.
#[derive(Clone)]
pub struct WebState {
    /// Directory downloaded files are written to and listed from
    pub downloads_dir: PathBuf,
    /// Identity downloads are attributed to (placeholder until real auth)
    pub requester_id: String,
    /// Extraction backend; swapped for a fake in tests
    pub extractor: Arc<dyn MediaExtractor>,
}

/// Build the application router.
pub fn build_router(state: WebState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route(
            "/instagram-downloader",
            get(downloader_form_handler).post(downloader_submit_handler),
        )
        .route("/profile", get(profile_handler))
        .route("/history", get(history_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Start the public web server.
pub async fn start_web_server(port: u16, state: WebState) -> Result<(), Box<dyn std::error::Error>> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = build_router(state);

    log::info!("Starting web server on http://{}", addr);
    log::info!("  /                      - Landing page");
    log::info!("  /instagram-downloader  - Download form");
    log::info!("  /profile               - Profile");
    log::info!("  /history               - Stored downloads");
    log::info!("  /health                - Health check");

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Inline notice carried across the redirect as a query parameter.
///
/// Only failures redirect back to the form; success returns the file itself,
/// so there is no success notice to carry.
#[derive(Debug, Default, Deserialize)]
pub struct Notice {
    error: Option<String>,
}

/// Form body of the downloader page.
#[derive(Debug, Deserialize)]
pub struct DownloadForm {
    url: Option<String>,
}

/// GET / — static landing page.
async fn home_handler() -> Html<String> {
    Html(render_page(
        "Reelgrab",
        r#"<h1>Reelgrab</h1>
<p>Save Instagram reels, posts and IGTV videos to disk.</p>
<p><a class="btn" href="/instagram-downloader">Open downloader</a></p>
<p><a href="/history">History</a> &middot; <a href="/profile">Profile</a></p>"#,
    ))
}

/// GET /instagram-downloader — renders the form with an optional notice.
async fn downloader_form_handler(Query(notice): Query<Notice>) -> Html<String> {
    Html(render_downloader_form(&notice))
}

/// POST /instagram-downloader — validates the URL and runs one download.
///
/// The request is suspended for the full duration of the fetch; on success
/// the whole file is returned as an attachment, on failure the user is
/// redirected back with the error text.
async fn downloader_submit_handler(State(state): State<WebState>, Form(form): Form<DownloadForm>) -> Response {
    let url = match form.url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => return redirect_with_error("Please provide an Instagram link"),
    };

    if !is_instagram_media_url(&url) {
        return redirect_with_error("Invalid Instagram URL");
    }

    let request = DownloadRequest {
        url,
        requester_id: state.requester_id.clone(),
    };

    match download::download_reel(state.extractor.as_ref(), &state.downloads_dir, &request).await {
        DownloadOutcome::Success {
            file_path,
            file_name,
            title,
        } => {
            log::info!("Downloaded: {} -> {}", title, file_path.display());
            match tokio::fs::read(&file_path).await {
                Ok(bytes) => attachment_response(&file_name, bytes),
                Err(e) => {
                    log::error!("Failed to read {} for response: {}", file_path.display(), e);
                    redirect_with_error("Download failed")
                }
            }
        }
        DownloadOutcome::Failure { message } => redirect_with_error(&format!("Error: {}", message)),
    }
}

/// GET /profile — placeholder identity plus stored-file count.
async fn profile_handler(State(state): State<WebState>) -> Html<String> {
    let count = download::count_downloads(&state.downloads_dir);
    let body = format!(
        r#"<h1>Profile</h1>
<p>Username: <strong>{}</strong></p>
<p>Downloads: <strong>{}</strong></p>
<p><a href="/instagram-downloader">Back to downloader</a></p>"#,
        html_escape(&state.requester_id),
        count
    );
    Html(render_page("Profile", &body))
}

/// GET /history — table of stored files with size and creation time.
async fn history_handler(State(state): State<WebState>) -> Html<String> {
    let files = match download::list_downloads(&state.downloads_dir) {
        Ok(files) => files,
        Err(e) => {
            log::error!("Failed to scan downloads directory: {}", e);
            Vec::new()
        }
    };

    let rows: String = files
        .iter()
        .map(|f| {
            format!(
                "<tr><td>{}</td><td>{:.2} MiB</td><td>{}</td></tr>\n",
                html_escape(&f.name),
                f.size_mib,
                html_escape(&f.created)
            )
        })
        .collect();

    let table = if rows.is_empty() {
        "<p>No downloads yet.</p>".to_string()
    } else {
        format!(
            r#"<table>
<tr><th>File</th><th>Size</th><th>Created</th></tr>
{}</table>"#,
            rows
        )
    };

    let body = format!(
        r#"<h1>History</h1>
{}
<p><a href="/instagram-downloader">Back to downloader</a></p>"#,
        table
    );
    Html(render_page("History", &body))
}

/// GET /health — simple health check.
async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// Redirect back to the form with an error notice.
fn redirect_with_error(message: &str) -> Response {
    let location = format!("/instagram-downloader?error={}", urlencoding::encode(message));
    Redirect::to(&location).into_response()
}

/// Serve a downloaded file as an attachment.
fn attachment_response(file_name: &str, bytes: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "video/mp4".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        bytes,
    )
        .into_response()
}

/// Render the downloader form, including any notice from the query string.
fn render_downloader_form(notice: &Notice) -> String {
    let notice_html = match &notice.error {
        Some(error) => format!(r#"<p class="notice danger">{}</p>"#, html_escape(error)),
        None => String::new(),
    };

    let body = format!(
        r#"<h1>Instagram Downloader</h1>
{}
<form method="post" action="/instagram-downloader">
<input type="text" name="url" placeholder="https://www.instagram.com/reel/...">
<button type="submit">Download</button>
</form>
<p><a href="/history">History</a> &middot; <a href="/profile">Profile</a></p>"#,
        notice_html
    );
    render_page("Instagram Downloader", &body)
}

/// Wrap page body in the shared document shell.
fn render_page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>
*{{box-sizing:border-box;margin:0;padding:0}}
body{{background:#0d0d0d;color:#fff;min-height:100vh;display:flex;justify-content:center;align-items:center;font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',sans-serif;padding:20px}}
main{{background:rgba(255,255,255,.08);border:1px solid rgba(255,255,255,.12);border-radius:24px;padding:32px;max-width:560px;width:100%}}
h1{{font-size:1.4rem;margin-bottom:16px}}
p{{margin-bottom:12px;line-height:1.4}}
a{{color:#7ab8ff}}
input{{width:100%;padding:10px;border-radius:8px;border:1px solid rgba(255,255,255,.2);background:rgba(0,0,0,.3);color:#fff;margin-bottom:12px}}
button,.btn{{display:inline-block;padding:10px 20px;border-radius:50px;border:none;background:#7ab8ff;color:#000;font-weight:600;cursor:pointer;text-decoration:none}}
table{{width:100%;border-collapse:collapse;margin-bottom:12px}}
th,td{{text-align:left;padding:6px 8px;border-bottom:1px solid rgba(255,255,255,.12)}}
.notice{{padding:10px;border-radius:8px}}
.notice.danger{{background:rgba(252,60,68,.25)}}
</style>
</head>
<body>
<main>
{body}
</main>
</body>
</html>"#,
        title = html_escape(title),
        body = body,
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_form_without_notice() {
        let html = render_downloader_form(&Notice::default());
        assert!(html.contains("<form method=\"post\""));
        assert!(!html.contains("class=\"notice"));
    }

    #[test]
    fn test_render_form_escapes_error_notice() {
        let notice = Notice {
            error: Some("<script>alert(1)</script>".to_string()),
        };
        let html = render_downloader_form(&notice);
        assert!(html.contains("notice danger"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_attachment_headers() {
        let response = attachment_response("reel_webuser_20250101_120000.mp4", b"bytes".to_vec());
        let headers = response.headers();
        assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), "video/mp4");
        assert_eq!(
            headers.get(header::CONTENT_DISPOSITION).unwrap(),
            "attachment; filename=\"reel_webuser_20250101_120000.mp4\""
        );
    }

    #[test]
    fn test_redirect_encodes_message() {
        let response = redirect_with_error("Error: something & other");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response.headers().get(header::LOCATION).unwrap().to_str().unwrap();
        assert!(location.starts_with("/instagram-downloader?error="));
        assert!(!location.contains(' '));
        assert!(!location.contains('&'), "raw ampersand would split the query: {}", location);
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }
}
