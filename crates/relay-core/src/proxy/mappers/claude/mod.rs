// Claude mapper module
// Handles Claude ↔ OpenAI ChatCompletions protocol transformation

pub mod error;
pub mod request;
pub mod response;
pub mod sse_stream;
pub mod streaming;

pub use error::TranslationError;
pub use request::transform_claude_request_in;
pub use response::transform_response;
pub use sse_stream::{create_claude_sse_stream, translate_frames};
pub use streaming::StreamingState;
