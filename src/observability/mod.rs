//! Observability helpers
//!
//! Structured logging setup for hosts embedding the routing engine.

pub mod logging;

pub use logging::{init_default_logging, init_logging, LogFormat};
