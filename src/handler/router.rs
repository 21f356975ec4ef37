//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, body
//! acceptance, and dispatch to the stub API or the static asset tree.

use crate::api;
use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger;
use crate::logger::AccessLogEntry;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::header::HeaderMap;
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
    pub range_header: Option<String>,
}

/// Main entry point for HTTP request handling
///
/// Every outcome, including rejections, is returned as a response; the
/// connection task never sees an error from here.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    remote_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let method = req.method().clone();
    let version = req.version();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(ToString::to_string);
    let referer = header_value(req.headers(), "referer");
    let user_agent = header_value(req.headers(), "user-agent");

    let mut response = dispatch(req, &state, &path, &method).await;

    // The original service applies permissive CORS to the whole surface,
    // static responses included
    if state.config.http.enable_cors {
        http::apply_cors(&mut response);
    }

    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(remote_addr.to_string(), method.to_string(), path);
        entry.query = query;
        entry.http_version = version_label(version).to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = content_length(&response);
        entry.referer = referer;
        entry.user_agent = user_agent;
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route the request through the validation gates to a handler
async fn dispatch(
    req: Request<hyper::body::Incoming>,
    state: &Arc<AppState>,
    path: &str,
    method: &Method,
) -> Response<Full<Bytes>> {
    // 1. Check HTTP method
    if let Some(resp) = check_http_method(method, state.config.http.enable_cors) {
        return resp;
    }

    // 2. Check declared body size
    if let Some(resp) = check_body_size(req.headers(), state.config.http.max_body_size) {
        return resp;
    }

    // 3. Extract headers for caching and range requests
    let ctx = RequestContext {
        path,
        is_head: *method == Method::HEAD,
        if_none_match: header_value(req.headers(), "if-none-match"),
        range_header: header_value(req.headers(), "range"),
    };

    // 4. Accept (and discard) JSON request bodies; a malformed body fails
    //    this request only
    if let Some(resp) = check_json_body(req).await {
        return resp;
    }

    // 5. Exact-path API routes, then the asset tree with SPA fallback
    if let Some(resp) = api::dispatch(&ctx) {
        return resp;
    }

    static_files::serve_spa(&ctx, state).await
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(headers: &HeaderMap, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = headers.get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

/// Collect and validate a JSON request body, when one is declared.
///
/// Returns a 400 response for bodies that declare JSON but fail to parse;
/// `None` lets dispatch continue. The body is discarded either way, since the
/// stub routes take no input.
async fn check_json_body(req: Request<hyper::body::Incoming>) -> Option<Response<Full<Bytes>>> {
    if !declares_json(req.headers()) {
        return None;
    }

    let body = match req.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            logger::log_warning(&format!("Failed to read request body: {e}"));
            return Some(api::bad_request("Failed to read request body"));
        }
    };

    if body.is_empty() {
        return None;
    }

    if let Err(e) = serde_json::from_slice::<serde_json::Value>(&body) {
        logger::log_warning(&format!("Malformed JSON body rejected: {e}"));
        return Some(api::bad_request(&format!("Invalid JSON: {e}")));
    }

    None
}

/// Whether the Content-Type header indicates a JSON body
fn declares_json(headers: &HeaderMap) -> bool {
    headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| ct.split(';').next())
        .is_some_and(|t| t.trim().eq_ignore_ascii_case("application/json"))
}

/// Extract a header as an owned string, dropping non-UTF-8 values
fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

/// HTTP version label for the access log
fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}

/// Body size as advertised by the response's own Content-Length
fn content_length(response: &Response<Full<Bytes>>) -> usize {
    response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}
