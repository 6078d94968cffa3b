//! Claude protocol handlers
//!
//! Accepts Messages API requests, forwards them to a ChatCompletions upstream
//! and translates the answer back, streamed or not.

mod error_handling;
mod messages;
mod request_validation;
mod response_handler;
mod streaming;

pub use error_handling::error_response;
pub use messages::handle_messages;
