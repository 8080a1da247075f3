//! # wcrm-api: HTTP Service for the Wealth CRM Backend
//!
//! ## API Surface
//!
//! | Path                          | Module                 |
//! |-------------------------------|------------------------|
//! | `/api/create`, `/api/list/*`  | [`routes::crud`]       |
//! | `/api/ai/*`                   | [`routes::ai`]         |
//! | `/api/seed/demo`              | [`routes::seed`]       |
//! | `/`, `/schema`, `/test`       | [`routes::system`]     |
//! | `/metrics`, `/health/*`       | [`routes::system`]     |
//! | `/openapi.json`               | [`openapi`]            |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → metrics → CORS → 2 MiB body limit → Handler
//! ```
//!
//! Health probes sit outside the stack.

pub mod config;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn_with_state;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Assemble the application router.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::system::router())
        .merge(routes::crud::router())
        .merge(routes::ai::router())
        .merge(routes::seed::router())
        .merge(openapi::router())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(from_fn_with_state(
            state.metrics.clone(),
            middleware::metrics::metrics_middleware,
        ))
        .layer(middleware::tracing_layer::layer());

    Router::new()
        .merge(routes::system::health_router())
        .merge(api)
        .with_state(state)
}
