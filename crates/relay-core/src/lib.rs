//! # Relay Core
//!
//! Protocol translation and gateway logic for Claude Relay.
//!
//! ## Architecture
//!
//! ```text
//! relay-core/src/
//! ├── modules/config.rs     # JSON config loading + validation
//! └── proxy/
//!     ├── common/           # json_schema sanitizer, SSE line framing, ids
//!     ├── mappers/claude/   # request / response / streaming translators
//!     ├── handlers/claude/  # /v1/messages gateway handler
//!     ├── middleware/       # CORS
//!     ├── routing.rs        # upstream target resolution
//!     ├── upstream/         # ChatCompletions HTTP client
//!     └── server.rs         # axum router + shared state
//! ```
//!
//! Control flow for one request:
//! handler → `transform_claude_request_in` → upstream call →
//! (`transform_response` | `create_claude_sse_stream`) → client.

#![allow(
    clippy::redundant_else,
    reason = "Explicit else blocks improve readability in complex control flow"
)]
// Test-only lints: allow panic!, println!, etc. in test code
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::print_stdout,
        clippy::float_cmp,
        clippy::assertions_on_result_states
    )
)]

pub mod error;
pub mod modules;
pub mod proxy;

// Re-export commonly used types
pub use error::{AppError, AppResult};
pub use relay_types::{KeywordRoute, RelayConfig};
