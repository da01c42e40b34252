//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, route table, method dispatch)
//!     → extract.rs (peer address, header joins, query/form args)
//!     → handlers.rs (per-route reflection into response bodies)
//!     → response.rs (pretty JSON rendering)
//!     → Send to client
//! ```

pub mod extract;
pub mod handlers;
pub mod response;
pub mod server;

pub use server::HttpServer;
