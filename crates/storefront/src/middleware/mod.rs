//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request span with method, uri, status, latency)
//! 3. Request ID (add unique ID to each request)
//! 4. CORS headers (permissive, every response)
//! 5. Activity tracking (refresh the cart's inactivity clock)

pub mod activity;
pub mod cors;
pub mod request_id;

pub use activity::track_activity_middleware;
pub use cors::cors_middleware;
pub use request_id::request_id_middleware;
