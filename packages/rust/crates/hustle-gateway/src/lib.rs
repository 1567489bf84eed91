//! hustle-gateway - HTTP and CLI boundary for the FAQ engine.
//!
//! The matching core (`hustle-faq`) is pure and synchronous; this crate
//! wraps it in an axum router, a clap CLI and a stdio loop, and owns the
//! one async collaborator: the message-history source behind trending.

#![allow(clippy::doc_markdown)]

pub mod gateway;
pub mod history;

pub use gateway::{
    AskRequest, GatewayState, RewriteRequest, SearchParams, router, run_http, run_stdio,
    validate_rewrite_request,
};
pub use history::{InMemoryHistory, MessageHistory};
