//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate; level set through
//!   `RUST_LOG` with a crate-level default
//! - Logging is incidental: no endpoint's contract depends on what is or
//!   is not logged

pub mod logging;
