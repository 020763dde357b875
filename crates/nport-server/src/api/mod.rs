//! HTTP routes.

mod filings;

use std::sync::Arc;

use crate::{
    config::{Config, CorsOrigins},
    main_lib::AppState,
};
use axum::{Router, routing::get};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Liveness probe.
pub async fn healthz() -> &'static str {
    "ok"
}

fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    match origins {
        CorsOrigins::Any => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        // Wildcards cannot be combined with credentials, so methods and
        // headers are mirrored from the preflight instead.
        CorsOrigins::List(list) => CorsLayer::new()
            .allow_origin(list.clone())
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true),
    }
}

/// Build the application router.
pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/filings/{cik}", get(filings::get_recent_filing))
        .route("/nport/{cik}", get(filings::get_recent_filing))
        .with_state(state)
        .layer(cors_layer(&config.cors_allow))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
