//! # Relay Types
//!
//! Wire types, errors, and configuration model for Claude Relay.
//!
//! This crate provides the foundational type system for the relay:
//!
//! - **`error`** - Typed error hierarchy for proxy and configuration
//! - **`models`** - Configuration model (listener, routing, upstream)
//! - **`protocol`** - Claude Messages (front) and OpenAI ChatCompletions (back) types
//!
//! ## Architecture Role
//!
//! `relay-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!          relay-types (this crate)
//!                 │
//!                 ▼
//!            relay-core
//!                 │
//!                 ▼
//!           relay-server
//! ```
//!
//! All types are designed to be:
//! - **Serializable** via serde for the wire
//! - **Clone** for cheap sharing across async boundaries
//! - **PartialEq** for testing and comparison

pub mod error;
pub mod models;
pub mod protocol;

// Re-export error types for convenience
pub use error::{ConfigError, ProxyError};

// Re-export core model types
pub use models::{KeywordRoute, RelayConfig};
