//! Static asset serving module
//!
//! Resolves request paths against the frontend bundle and falls back to the
//! SPA entry document for client-routed paths.

use crate::config::AppState;
use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime, range::RangeParseResult};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use std::sync::Arc;
use tokio::fs;

/// Serve a bundle asset, or the entry document when nothing matches.
///
/// Client-side routes (`/map`, `/alerts/42`, ...) produce no file under the
/// asset root, so any miss gets the entry document with 200 and the frontend
/// router takes over.
pub async fn serve_spa(ctx: &RequestContext<'_>, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    let asset_dir = &state.asset_dir;
    let index_file = &state.config.static_assets.index_file;

    if let Some((content, content_type)) = load_asset(asset_dir, ctx.path, index_file).await {
        return build_asset_response(&content, content_type, ctx);
    }

    serve_entry_document(ctx, asset_dir, index_file).await
}

/// Serve the SPA entry document from the asset root
async fn serve_entry_document(
    ctx: &RequestContext<'_>,
    asset_dir: &Path,
    index_file: &str,
) -> Response<Full<Bytes>> {
    let entry = asset_dir.join(index_file);
    match fs::read(&entry).await {
        Ok(content) => build_asset_response(&content, mime::get_content_type(Some("html")), ctx),
        Err(e) => {
            // The startup check admitted this bundle; losing the entry
            // document afterwards degrades to a per-request 404
            logger::log_error(&format!(
                "Entry document '{}' unreadable: {e}",
                entry.display()
            ));
            http::build_404_response()
        }
    }
}

/// Resolve a request path to a file inside the asset root.
///
/// `asset_dir` must already be canonical. Returns `None` when the path does
/// not name a readable file under the root, leaving the fallback decision to
/// the caller.
pub async fn load_asset(
    asset_dir: &Path,
    path: &str,
    index_file: &str,
) -> Option<(Vec<u8>, &'static str)> {
    let relative = sanitize_path(path);
    let mut file_path = asset_dir.join(&relative);

    // Directory requests (and the root) resolve through the index file
    if relative.is_empty() || relative.ends_with('/') || file_path.is_dir() {
        file_path = file_path.join(index_file);
    }

    // Misses are routine here (the SPA fallback handles them), so no logging
    let canonical = file_path.canonicalize().ok()?;
    if !canonical.starts_with(asset_dir) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {path} -> {}",
            canonical.display()
        ));
        return None;
    }

    let content = match fs::read(&canonical).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read asset '{}': {e}",
                canonical.display()
            ));
            return None;
        }
    };

    let content_type = mime::get_content_type(canonical.extension().and_then(|e| e.to_str()));
    Some((content, content_type))
}

/// Strip the leading slash and any traversal components
pub fn sanitize_path(path: &str) -> String {
    path.trim_start_matches('/').replace("..", "")
}

/// Build the response for resolved asset bytes, honoring conditional and
/// range requests
fn build_asset_response(
    data: &[u8],
    content_type: &str,
    ctx: &RequestContext<'_>,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(data);
    let total_size = data.len();

    if cache::check_etag_match(ctx.if_none_match.as_deref(), &etag) {
        return http::build_304_response(&etag);
    }

    match http::parse_range_header(ctx.range_header.as_deref(), total_size) {
        RangeParseResult::Valid(range) => {
            let start = range.start;
            let end = range.end_position(total_size);

            let body = if ctx.is_head {
                Bytes::new()
            } else {
                Bytes::from(data[start..=end].to_vec())
            };

            http::build_partial_response(body, content_type, &etag, start, end, total_size)
        }
        RangeParseResult::NotSatisfiable => http::build_416_response(total_size),
        RangeParseResult::None => {
            let body = if ctx.is_head {
                Bytes::new()
            } else {
                Bytes::from(data.to_owned())
            };

            http::build_cached_response(body, content_type, &etag, total_size)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use std::path::PathBuf;

    fn setup_bundle(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("saferoute-render-{}-{name}", std::process::id()));
        let _ = std_fs::remove_dir_all(&dir);
        std_fs::create_dir_all(dir.join("js")).unwrap();
        std_fs::write(dir.join("index.html"), "<html>entry</html>").unwrap();
        std_fs::write(dir.join("js/app.js"), "console.log('app');").unwrap();
        dir.canonicalize().unwrap()
    }

    #[test]
    fn sanitize_strips_traversal() {
        assert_eq!(sanitize_path("/js/app.js"), "js/app.js");
        assert_eq!(sanitize_path("/../../etc/passwd"), "//etc/passwd");
        assert_eq!(sanitize_path("/"), "");
    }

    #[tokio::test]
    async fn asset_hit_returns_exact_bytes() {
        let dir = setup_bundle("hit");
        let (content, content_type) = load_asset(&dir, "/js/app.js", "index.html")
            .await
            .unwrap();
        assert_eq!(content, b"console.log('app');");
        assert_eq!(content_type, "application/javascript");
        let _ = std_fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn root_resolves_to_index() {
        let dir = setup_bundle("root");
        let (content, content_type) = load_asset(&dir, "/", "index.html").await.unwrap();
        assert_eq!(content, b"<html>entry</html>");
        assert_eq!(content_type, "text/html; charset=utf-8");
        let _ = std_fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn miss_returns_none_for_fallback() {
        let dir = setup_bundle("miss");
        assert!(load_asset(&dir, "/alerts/42", "index.html").await.is_none());
        let _ = std_fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn traversal_is_blocked() {
        let dir = setup_bundle("traversal");
        assert!(load_asset(&dir, "/../outside.txt", "index.html")
            .await
            .is_none());
        let _ = std_fs::remove_dir_all(&dir);
    }
}
