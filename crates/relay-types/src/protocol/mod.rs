//! Protocol definitions for both sides of the relay.
//!
//! - Anthropic Claude Messages API (what clients speak)
//! - OpenAI ChatCompletions API (what upstream providers speak)

pub mod claude;
pub mod openai;

// Re-export common protocol enums
pub use claude::ClaudeRole;
pub use openai::OpenAIMessage;
