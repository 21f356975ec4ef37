// API response utility functions module

use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

/// Build a JSON response from a serializable payload
pub fn json_response<T: Serialize>(
    status: StatusCode,
    body: &T,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return internal_error();
        }
    };

    let content_length = json.len();
    let bytes = if is_head { Bytes::new() } else { Bytes::from(json) };

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Content-Length", content_length)
        .body(Full::new(bytes))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build JSON response: {e}"));
            Response::new(Full::new(Bytes::new()))
        })
}

/// 400 Bad Request with a JSON error body
pub fn bad_request(message: &str) -> Response<Full<Bytes>> {
    let body = serde_json::json!({ "error": message }).to_string();
    Response::builder()
        .status(StatusCode::BAD_REQUEST)
        .header("Content-Type", "application/json")
        .header("Content-Length", body.len())
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Bad Request"))))
}

/// 500 Internal Server Error with a JSON error body
pub fn internal_error() -> Response<Full<Bytes>> {
    let body = r#"{"error":"Internal server error"}"#;
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header("Content-Type", "application/json")
        .header("Content-Length", body.len())
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Error"))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Probe {
        ok: bool,
    }

    #[tokio::test]
    async fn json_response_sets_status_and_headers() {
        let resp = json_response(StatusCode::OK, &Probe { ok: true }, false);
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "application/json"
        );

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], br#"{"ok":true}"#);
    }

    #[tokio::test]
    async fn head_keeps_headers_but_drops_body() {
        let resp = json_response(StatusCode::OK, &Probe { ok: true }, true);
        assert_eq!(resp.headers().get("Content-Length").unwrap(), "11");

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[test]
    fn bad_request_is_json() {
        let resp = bad_request("Invalid JSON");
        assert_eq!(resp.status(), 400);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "application/json"
        );
    }
}
