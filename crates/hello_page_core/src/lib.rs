//! Shared hello-page domain primitives.
//!
//! This crate owns the API Gateway proxy response contract, authorizer claim
//! extraction, hosted UI URL derivation, and HTML page rendering. It
//! intentionally excludes AWS SDK and Lambda runtime concerns; see
//! `crates/hello_page_lambda` for the runtime boundary.

pub mod claims;
pub mod contract;
pub mod hosted_ui;
pub mod page;
