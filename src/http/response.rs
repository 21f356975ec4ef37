//! HTTP response building module
//!
//! Builders for the status codes the server emits, decoupled from specific
//! business logic.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::HeaderValue;
use hyper::Response;

/// Add permissive cross-origin headers to an already-built response.
///
/// Applied at the end of dispatch so every response on the surface carries
/// it, mirroring a global CORS middleware.
pub fn apply_cors(response: &mut Response<Full<Bytes>>) {
    response
        .headers_mut()
        .insert("Access-Control-Allow-Origin", HeaderValue::from_static("*"));
}

/// Build 304 Not Modified response
pub fn build_304_response(etag: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(304)
        .header("ETag", etag)
        .header("Cache-Control", "public, max-age=3600")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("304", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    let body = "404 Not Found";
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .header("Content-Length", body.len())
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from(body)))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    let body = "405 Method Not Allowed";
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Content-Length", body.len())
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from(body)))
        })
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response(enable_cors: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(204)
        .header("Allow", "GET, HEAD, OPTIONS");

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "GET, HEAD, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type, Range")
            .header("Access-Control-Max-Age", "86400");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build 413 Payload Too Large response
pub fn build_413_response() -> Response<Full<Bytes>> {
    let body = "413 Payload Too Large";
    Response::builder()
        .status(413)
        .header("Content-Type", "text/plain")
        .header("Content-Length", body.len())
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("413", &e);
            Response::new(Full::new(Bytes::from(body)))
        })
}

/// Build 416 Range Not Satisfiable response
pub fn build_416_response(file_size: usize) -> Response<Full<Bytes>> {
    let body = "Range Not Satisfiable";
    Response::builder()
        .status(416)
        .header("Content-Type", "text/plain")
        .header("Content-Length", body.len())
        .header("Content-Range", format!("bytes */{file_size}"))
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("416", &e);
            Response::new(Full::new(Bytes::from(body)))
        })
}

/// Build success response with cache control.
///
/// `total_size` is the full asset size; the body may be empty for HEAD while
/// the headers still advertise the real length.
pub fn build_cached_response(
    body: Bytes,
    content_type: &str,
    etag: &str,
    total_size: usize,
) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", total_size)
        .header("Accept-Ranges", "bytes")
        .header("ETag", etag)
        .header("Cache-Control", "public, max-age=3600")
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 206 Partial Content response
pub fn build_partial_response(
    body: Bytes,
    content_type: &str,
    etag: &str,
    start: usize,
    end: usize,
    total_size: usize,
) -> Response<Full<Bytes>> {
    Response::builder()
        .status(206)
        .header("Content-Type", content_type)
        .header("Content-Length", end - start + 1)
        .header("Content-Range", format!("bytes {start}-{end}/{total_size}"))
        .header("Accept-Ranges", "bytes")
        .header("ETag", etag)
        .header("Cache-Control", "public, max-age=3600")
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("206", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_cors_inserts_wildcard_origin() {
        let mut resp = build_404_response();
        apply_cors(&mut resp);
        assert_eq!(
            resp.headers().get("Access-Control-Allow-Origin").unwrap(),
            "*"
        );

        // Inserting twice must not duplicate the header
        apply_cors(&mut resp);
        assert_eq!(
            resp.headers()
                .get_all("Access-Control-Allow-Origin")
                .iter()
                .count(),
            1
        );
    }

    #[test]
    fn builders_advertise_their_status() {
        assert_eq!(build_404_response().status(), 404);
        assert_eq!(build_405_response().status(), 405);
        assert_eq!(build_413_response().status(), 413);
        assert_eq!(build_416_response(100).status(), 416);
        assert_eq!(build_304_response("\"abc\"").status(), 304);
    }

    #[test]
    fn preflight_carries_cors_headers_when_enabled() {
        let resp = build_options_response(true);
        assert_eq!(resp.status(), 204);
        assert_eq!(
            resp.headers()
                .get("Access-Control-Allow-Methods")
                .unwrap(),
            "GET, HEAD, OPTIONS"
        );

        let bare = build_options_response(false);
        assert!(bare.headers().get("Access-Control-Allow-Origin").is_none());
    }

    #[test]
    fn partial_response_describes_the_range() {
        let resp = build_partial_response(
            Bytes::from_static(b"0123456789"),
            "text/plain",
            "\"etag\"",
            10,
            19,
            100,
        );
        assert_eq!(resp.status(), 206);
        assert_eq!(
            resp.headers().get("Content-Range").unwrap(),
            "bytes 10-19/100"
        );
        assert_eq!(resp.headers().get("Content-Length").unwrap(), "10");
    }
}
