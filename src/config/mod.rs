//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! ServerConfig::default()
//!     → schema.rs (typed, serde-derived structure)
//!     → shared with the HTTP server at construction
//! ```
//!
//! # Design Decisions
//! - Defaults are the entire configuration surface: the server binds an
//!   ephemeral port on all interfaces and consults no files or env vars
//! - The schema still exists so the bind address is injected rather than
//!   hard-coded, which lets tests rebind to 127.0.0.1:0

pub mod schema;

pub use schema::ListenerConfig;
pub use schema::ServerConfig;
