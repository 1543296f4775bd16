//! API 路由模块
//!
//! # 结构
//!
//! - [`dishes`] - 菜品管理接口
//! - [`cors`] - CORS 响应头
//!
//! Unmatched paths and unsupported methods on known paths both answer with a
//! bare `404 Not Found`.

pub mod cors;
pub mod dishes;

use axum::{Router, extract::Request, http::StatusCode, middleware, response::Response};
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// HTTP 请求日志中间件
async fn log_request(request: Request, next: middleware::Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Fallback for anything the routing table does not cover
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Build the Axum router (without state)
pub fn build_router() -> Router<ServerState> {
    Router::new().merge(dishes::router()).fallback(not_found)
}

/// Build a fully configured application with all middleware and state
pub fn build_app(state: ServerState) -> Router {
    build_router()
        .with_state(state)
        // CORS - preflight short-circuits here, every other response gets headers
        .layer(middleware::from_fn(cors::cors))
        .layer(TraceLayer::new_for_http())
        // Request logging - outermost, executed first
        .layer(middleware::from_fn(log_request))
}
