//! Request correlation ids for the error page.
//!
//! A W3C `traceparent` header from an upstream tracer wins. Otherwise the
//! `x-request-id` header is used, which [`MakeRequestUuid`] fills in with a
//! fresh UUID when the client did not send one.

use axum::http::{HeaderMap, HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

pub const TRACEPARENT: &str = "traceparent";
pub const X_REQUEST_ID: &str = "x-request-id";

#[derive(Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = HeaderValue::from_str(&Uuid::new_v4().to_string()).ok()?;
        Some(RequestId::new(id))
    }
}

/// Trace id when one is in flight, else the per-request id.
pub fn correlation_id(headers: &HeaderMap) -> Option<String> {
    header_str(headers, TRACEPARENT)
        .filter(|value| is_valid_traceparent(value))
        .or_else(|| header_str(headers, X_REQUEST_ID).filter(|value| !value.is_empty()))
        .map(str::to_string)
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok()).map(str::trim)
}

// version-traceid-parentid-flags, lowercase hex, ids not all zero
fn is_valid_traceparent(value: &str) -> bool {
    let parts: Vec<&str> = value.split('-').collect();
    let &[version, trace_id, parent_id, flags] = parts.as_slice() else {
        return false;
    };

    let is_hex = |s: &str, len: usize| {
        s.len() == len && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    };
    let is_zero = |s: &str| s.bytes().all(|b| b == b'0');

    is_hex(version, 2)
        && version != "ff"
        && is_hex(trace_id, 32)
        && !is_zero(trace_id)
        && is_hex(parent_id, 16)
        && !is_zero(parent_id)
        && is_hex(flags, 2)
}
