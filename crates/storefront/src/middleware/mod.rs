//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, added in `main`)
//! 2. `TraceLayer` (request span with method, URI, status, latency)
//! 3. Request ID (add unique ID to each request)
//! 4. CORS (only when an origin is configured)

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
