//! # HTTP Middleware
//!
//! ```text
//! TraceLayer → metrics → CORS → body limit → handler
//! ```

pub mod metrics;
pub mod tracing_layer;
