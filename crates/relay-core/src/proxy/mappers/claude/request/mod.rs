//! Claude → OpenAI request transformation.
//!
//! Pure and infallible on well-formed input: absent optional fields stay
//! absent on the ChatCompletions side.

mod message_transform;
#[cfg(test)]
mod tests;
mod tools_builder;

use relay_types::protocol::claude::ClaudeRequest;
use relay_types::protocol::openai::{OpenAIMessage, OpenAIRequest};

pub use message_transform::transform_message;
pub use tools_builder::{build_tool_choice, build_tools};

/// Build the upstream request; `resolved_model` replaces the client's model name.
///
/// A system prompt that flattens to empty text (`""` or `[]`) sends no system message.
pub fn transform_claude_request_in(claude_req: &ClaudeRequest, resolved_model: &str) -> OpenAIRequest {
    let mut messages = Vec::with_capacity(claude_req.messages.len() + 1);

    if let Some(system) = &claude_req.system {
        let text = system.to_text();
        if !text.is_empty() {
            messages.push(OpenAIMessage::System { content: text });
        }
    }

    for msg in &claude_req.messages {
        messages.extend(transform_message(msg));
    }

    OpenAIRequest {
        model: resolved_model.to_string(),
        messages,
        max_tokens: claude_req.max_tokens,
        temperature: claude_req.temperature,
        top_p: claude_req.top_p,
        stream: claude_req.stream,
        stop: claude_req.stop_sequences.clone(),
        tools: claude_req.tools.as_deref().map(build_tools),
        tool_choice: claude_req.tool_choice.as_ref().map(build_tool_choice),
    }
}
