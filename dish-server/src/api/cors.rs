//! CORS handling
//!
//! `OPTIONS` on any path is answered directly with the full verb list.
//! Every other response carries the narrower general headers.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use http::{HeaderMap, HeaderValue, Method, StatusCode, header};

const ALLOW_ORIGIN: &str = "*";
const GENERAL_METHODS: &str = "GET, POST";
const GENERAL_HEADERS: &str = "Content-Type";
const PREFLIGHT_METHODS: &str = "GET, POST, OPTIONS, PUT, DELETE";
const PREFLIGHT_HEADERS: &str = "Content-Type, Authorization";

pub async fn cors(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::OK.into_response();
        apply(response.headers_mut(), PREFLIGHT_METHODS, PREFLIGHT_HEADERS);
        return response;
    }

    let mut response = next.run(request).await;
    apply(response.headers_mut(), GENERAL_METHODS, GENERAL_HEADERS);
    response
}

fn apply(headers: &mut HeaderMap, methods: &'static str, allow_headers: &'static str) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(methods),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(allow_headers),
    );
}
