// API payload types
// Response shapes for the stub endpoints, constructed fresh per request

use serde::Serialize;

/// `GET /status` payload
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    /// Milliseconds since the Unix epoch, captured at request time
    pub timestamp: i64,
}

impl StatusResponse {
    pub fn now() -> Self {
        Self {
            status: "ok",
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Fixed coordinate pair for the stub route, `[lat, lon]`
#[derive(Debug, Serialize)]
pub struct RoutePath {
    pub start: [f64; 2],
    pub end: [f64; 2],
}

/// `GET /route` payload
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub path: RoutePath,
    pub eta_seconds: u32,
}

impl RouteResponse {
    /// The prototype's fixed route: two points in San Francisco, 7 minutes
    /// apart. A real routing engine would replace this constructor.
    pub const fn stub() -> Self {
        Self {
            path: RoutePath {
                start: [37.7749, -122.4194],
                end: [37.7849, -122.4094],
            },
            eta_seconds: 420,
        }
    }
}

/// `GET /sos` payload
#[derive(Debug, Serialize)]
pub struct SosResponse {
    pub ok: bool,
    pub message: &'static str,
}

impl SosResponse {
    /// Fixed acknowledgement; no dispatch actually happens in the prototype
    pub const fn acknowledgement() -> Self {
        Self {
            ok: true,
            message: "SOS sent (prototype)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_stub_serializes_exactly() {
        let json = serde_json::to_string(&RouteResponse::stub()).unwrap();
        assert_eq!(
            json,
            r#"{"path":{"start":[37.7749,-122.4194],"end":[37.7849,-122.4094]},"eta_seconds":420}"#
        );
    }

    #[test]
    fn sos_acknowledgement_serializes_exactly() {
        let json = serde_json::to_string(&SosResponse::acknowledgement()).unwrap();
        assert_eq!(json, r#"{"ok":true,"message":"SOS sent (prototype)"}"#);
    }

    #[test]
    fn status_reports_ok_with_current_timestamp() {
        let payload = StatusResponse::now();
        assert_eq!(payload.status, "ok");
        assert!(payload.timestamp >= 0);

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["status"], "ok");
        assert!(value["timestamp"].is_i64());
    }
}
