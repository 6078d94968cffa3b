//! Common utilities module
//!
//! Contains shared utilities for proxy handlers and mappers.

pub mod client_builder;
pub mod json_schema;
pub mod random_id;
pub mod sse_parser;

pub use client_builder::build_http_client;
pub use random_id::{generate_message_id, generate_trace_id};
