//! Router assembly
//!
//! Registers the API routers and wraps them in the tower-http middleware
//! stack. Used by both the HTTP server and in-process tests.

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;
use crate::middleware;
use crate::utils::AppError;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// UUID v4 request ids for requests that arrive without one
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Any origin, with credentials.
///
/// A wildcard origin cannot be combined with credentials, so the request's
/// own origin, method and headers are echoed back instead.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Unknown paths still answer with an `{"error": ...}` body
async fn route_not_found() -> AppError {
    AppError::not_found("Not found")
}

async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed()
}

/// All API routes, before middleware and state are attached
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(crate::api::employees::router())
        // Must come after the routes it applies to
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(route_not_found)
}

/// The complete application: routes, middleware stack and shared state
pub fn build_app(state: ServerState) -> Router {
    build_router()
        // Access log (inside routing, so the matched route is known)
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .with_state(state)
        // ========== tower-http ==========
        .layer(cors_layer())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        // Echo x-request-id on the response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID - outermost, so every inner layer sees it
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
}
