//! 访问日志中间件
//!
//! 每个请求在完成时记录一行 (target = `http_access`)

use axum::{
    extract::{MatchedPath, Request},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{debug, info, warn};

const REQUEST_ID_HEADER: &str = "x-request-id";

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
}

/// 请求日志中间件
///
/// 请求 ID 由外层 `SetRequestIdLayer` 写入请求头，这里只读取。
/// 路径优先使用路由模板 (`/employees/{id}`)，便于按接口聚合。
/// 4xx/5xx 以 warn 级别记录。
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let request_id = header_str(req.headers(), REQUEST_ID_HEADER).to_string();
    let user_agent = header_str(req.headers(), "user-agent").to_string();
    let method = req.method().clone();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    debug!(
        target: "http_access",
        request_id = %request_id,
        method = %method,
        route = %route,
        user_agent = %user_agent,
        "Request received"
    );

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_millis() as u64;

    if response.status().is_client_error() || response.status().is_server_error() {
        warn!(
            target: "http_access",
            request_id = %request_id,
            method = %method,
            route = %route,
            status,
            latency_ms,
            "Request failed"
        );
    } else {
        info!(
            target: "http_access",
            request_id = %request_id,
            method = %method,
            route = %route,
            status,
            latency_ms,
            "Request completed"
        );
    }

    response
}
