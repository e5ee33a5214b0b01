//! Assembles the catalog HTTP application.
//!
//! [`build_app_router`] is the single place where routes meet middleware;
//! `main.rs` and `tests/common/mod.rs` both call it so tests exercise the
//! same request path as production.

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Header carrying the per-request correlation id. A client-supplied value
/// is kept; otherwise a UUID is generated.
const REQUEST_ID_HEADER: &str = "x-request-id";

/// Methods the browser front-end issues against `/products` and `/categories`.
const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::PATCH,
    Method::DELETE,
];

/// Build the catalog application: `/health` at the root, resources under
/// `/api/v1`, wrapped in one [`ServiceBuilder`] stack.
///
/// Requests pass the layers top to bottom as listed in the builder: CORS,
/// request id assignment, the tracing span (which can then record the id),
/// id echo on the response, the timeout, and finally panic capture closest
/// to the handlers.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::new(request_id))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(CatchPanicLayer::new());

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(middleware)
        // CORS is applied as a separate outermost layer: its service requires
        // a `Default` response body, which axum's `Router::layer` provides by
        // boxing the inner stack's body into `axum::body::Body`.
        .layer(build_cors_layer(config))
        .with_state(state)
}

/// CORS for the configured front-end origins. Only JSON bodies are accepted,
/// so `Content-Type` is the single allowed request header.
///
/// Panics on an unparsable origin so a bad `CORS_ORIGINS` stops startup.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .map(|origin| {
            origin
                .parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{origin}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}
