// Claude non-streaming response transformation (OpenAI → Claude)


use super::error::TranslationError;
use crate::proxy::common::random_id::generate_message_id;
use relay_types::protocol::claude::{ClaudeResponse, ContentBlock, StopReason, Usage};
use relay_types::protocol::openai::{OpenAIResponse, OpenAIUsage, ToolCall};

/// Map a ChatCompletions `finish_reason` onto a Claude stop reason.
pub fn map_finish_reason(finish_reason: Option<&str>) -> StopReason {
    match finish_reason {
        Some("stop") => StopReason::EndTurn,
        Some("length") => StopReason::MaxTokens,
        Some("tool_calls") => StopReason::ToolUse,
        _ => StopReason::EndTurn,
    }
}

pub fn to_claude_usage(usage: Option<&OpenAIUsage>) -> Usage {
    usage
        .map(|u| Usage { input_tokens: u.prompt_tokens, output_tokens: u.completion_tokens })
        .unwrap_or_default()
}

/// Convert a complete ChatCompletions response.
///
/// Only the first choice is read. `requested_model` is echoed back so the
/// client sees the model it asked for, not the upstream substitute. Tool
/// arguments that are not valid JSON fail the whole conversion.
pub fn transform_response(
    openai_resp: &OpenAIResponse,
    requested_model: &str,
) -> Result<ClaudeResponse, TranslationError> {
    let choice = openai_resp.choices.first().ok_or(TranslationError::EmptyChoices)?;
    let message = &choice.message;

    let mut content = Vec::new();
    if let Some(text) = message.content.as_deref().filter(|t| !t.is_empty()) {
        content.push(ContentBlock::Text { text: text.to_string() });
    }
    for call in message.tool_calls.iter().flatten() {
        content.push(tool_use_block(call)?);
    }

    let id = if openai_resp.id.is_empty() {
        generate_message_id()
    } else {
        openai_resp.id.clone()
    };

    Ok(ClaudeResponse {
        id,
        type_: "message".to_string(),
        role: "assistant".to_string(),
        model: requested_model.to_string(),
        content,
        stop_reason: map_finish_reason(choice.finish_reason.as_deref()),
        stop_sequence: None,
        usage: to_claude_usage(openai_resp.usage.as_ref()),
    })
}

fn tool_use_block(call: &ToolCall) -> Result<ContentBlock, TranslationError> {
    let input = serde_json::from_str(&call.function.arguments).map_err(|source| {
        TranslationError::MalformedToolArguments { id: call.id.clone(), source }
    })?;
    Ok(ContentBlock::ToolUse { id: call.id.clone(), name: call.function.name.clone(), input })
}
