//! Upstream module - ChatCompletions client

pub mod client;
