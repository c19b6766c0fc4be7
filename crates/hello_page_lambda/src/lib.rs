//! Lambda handlers for the hello pages.
//!
//! This crate owns runtime integration details (Lambda entrypoints, the
//! per-invocation environment snapshot, and structured request logging) and
//! keeps each handler a pure function of its event and configuration.

pub mod handlers;
