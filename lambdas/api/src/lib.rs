//! Hospot HTTP API

use axum::{http::HeaderValue, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

pub use config::Config;
pub use state::AppState;

pub fn router(state: AppState, cors_origins: &[String]) -> Router {
    routes::routes()
        .with_state(state)
        .layer(cors(cors_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(
            origins
                .iter()
                .filter_map(|origin| HeaderValue::from_str(origin).ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
