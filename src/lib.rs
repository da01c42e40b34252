//! mirrorbin — an HTTP request-mirror server for client testing.
//!
//! Five endpoints reflect inbound request metadata back to the caller,
//! httpbin-style, plus a toy fixed-value lookup route:
//!
//! ```text
//! Client Request
//!     → http/server.rs (Axum router, method dispatch)
//!     → http/extract.rs (peer address, header joins, arg parsing)
//!     → http/handlers.rs (per-route reflection logic)
//!     → http/response.rs (pretty-printed JSON rendering)
//!     → Send to client
//! ```
//!
//! Handlers are pure functions of the request; there is no shared mutable
//! state, no persistence, and no cross-request memory anywhere.

pub mod config;
pub mod http;
pub mod observability;

pub use config::schema::ServerConfig;
pub use http::HttpServer;
