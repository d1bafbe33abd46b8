//! HTTP middleware: cross-origin policies and request tracing.

pub mod cors;
pub mod tracing;
