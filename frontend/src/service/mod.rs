//! HTTP client for the Query Service.
//!
//! `endpoints` builds request URLs and `error` turns failed responses into
//! [`ServiceError`]s; both are plain Rust. `client` is the `gloo-net` adapter
//! that only runs in the browser.

mod client;
mod endpoints;
mod error;

pub use client::HttpQueryService;
pub use error::ServiceError;
