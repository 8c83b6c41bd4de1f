//! Middleware stack for the API server
//!
//! Provides request IDs, tracing, timeouts, and CORS.

use axum::{
    body::Body,
    http::{header, HeaderValue, Method, Request, StatusCode},
    Router,
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use visahub_common::CorsConfig;

use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Apply the middleware stack to the router
///
/// Layers are applied in reverse order in tower, so requests flow:
/// RequestID -> Trace -> Timeout -> CORS -> Handler.
pub fn apply_middleware(
    router: Router<AppState>,
    cors_config: &CorsConfig,
    is_production: bool,
) -> Router<AppState> {
    router
        // CORS (innermost - applied last to outgoing responses)
        .layer(create_cors_layer(cors_config, is_production))
        // Timeout (returns 503 Service Unavailable on timeout)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::SERVICE_UNAVAILABLE,
            Duration::from_secs(30),
        ))
        // Tracing
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("unknown");

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                })
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Request ID propagation
        .layer(PropagateRequestIdLayer::new(header::HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID generation (outermost - applied first to incoming requests)
        .layer(SetRequestIdLayer::new(
            header::HeaderName::from_static(REQUEST_ID_HEADER),
            MakeRequestUuid,
        ))
}

/// Create CORS layer from configuration
///
/// Production only honors configured origins; development falls back to a
/// permissive layer when none are configured.
fn create_cors_layer(config: &CorsConfig, is_production: bool) -> CorsLayer {
    let base_layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([header::HeaderName::from_static(REQUEST_ID_HEADER)]);

    if is_production || !config.allowed_origins.is_empty() {
        if config.allowed_origins.is_empty() {
            tracing::warn!(
                "CORS: No allowed origins configured in production mode. \
                 Requests from browsers will be blocked."
            );
            base_layer.allow_origin(AllowOrigin::list(Vec::<HeaderValue>::new()))
        } else {
            let origins: Vec<HeaderValue> = config
                .allowed_origins
                .iter()
                .filter_map(|origin| {
                    origin.parse::<HeaderValue>().ok().or_else(|| {
                        tracing::warn!("Invalid CORS origin: {}", origin);
                        None
                    })
                })
                .collect();

            tracing::info!("CORS: Allowing {} configured origins", origins.len());
            base_layer.allow_origin(AllowOrigin::list(origins))
        }
    } else {
        base_layer.allow_origin(Any)
    }
}
