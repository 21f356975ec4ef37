// Stub endpoint handlers
// Each builds its payload fresh and serializes it straight out

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use super::response::json_response;
use super::types::{RouteResponse, SosResponse, StatusResponse};
use crate::handler::router::RequestContext;

/// `GET /status` - liveness with a wall-clock timestamp
pub fn handle_status(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    json_response(StatusCode::OK, &StatusResponse::now(), ctx.is_head)
}

/// `GET /route` - fixed stub route and ETA
pub fn handle_route(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    json_response(StatusCode::OK, &RouteResponse::stub(), ctx.is_head)
}

/// `GET /sos` - fixed acknowledgement
pub fn handle_sos(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    json_response(StatusCode::OK, &SosResponse::acknowledgement(), ctx.is_head)
}
