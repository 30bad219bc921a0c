//! # tillit-observability
//!
//! Structured logging for the trust score engine: subscriber setup driven by
//! `TILLIT_LOG`, span macros per operation, and typed log events.

pub mod tracing_setup;

pub use tracing_setup::{
    events, init_tracing, init_tracing_with_filter, try_init_tracing, LOG_ENV,
};
