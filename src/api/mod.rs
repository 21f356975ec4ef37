// API module entry
// Stub endpoints for the SafeRoute prototype

mod handlers;
mod response;
mod types;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::handler::router::RequestContext;

// Re-export public types
pub use response::{bad_request, json_response};
pub use types::{RoutePath, RouteResponse, SosResponse, StatusResponse};

/// Exact-path dispatch for the API surface.
///
/// Returns `None` for paths outside the API so the caller can fall through
/// to the asset tree.
pub fn dispatch(ctx: &RequestContext<'_>) -> Option<Response<Full<Bytes>>> {
    match ctx.path {
        "/status" => Some(handlers::handle_status(ctx)),
        "/route" => Some(handlers::handle_route(ctx)),
        "/sos" => Some(handlers::handle_sos(ctx)),
        _ => None,
    }
}
