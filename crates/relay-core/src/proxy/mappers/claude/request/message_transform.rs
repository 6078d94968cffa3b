use relay_types::protocol::claude::{ClaudeRole, ContentBlock, Message, MessageContent};
use relay_types::protocol::openai::{ContentPart, ImageUrl, OpenAIMessage, ToolCall, UserContent};
use serde_json::Value;

/// Translate one Claude message into zero or more OpenAI messages.
///
/// A user turn may fan out: every `tool_result` block becomes its own `tool`
/// message, emitted ahead of the `user` message built from the remaining
/// blocks. Relative order inside each group is kept.
pub fn transform_message(msg: &Message) -> Vec<OpenAIMessage> {
    match msg.role {
        ClaudeRole::User => transform_user(&msg.content),
        ClaudeRole::Assistant => vec![transform_assistant(&msg.content)],
    }
}

fn transform_user(content: &MessageContent) -> Vec<OpenAIMessage> {
    let blocks = match content {
        MessageContent::String(text) => {
            return vec![OpenAIMessage::User { content: UserContent::Text(text.clone()) }];
        },
        MessageContent::Array(blocks) => blocks,
    };

    let (tool_results, others): (Vec<&ContentBlock>, Vec<&ContentBlock>) =
        blocks.iter().partition(|b| matches!(b, ContentBlock::ToolResult { .. }));

    let mut out: Vec<OpenAIMessage> = tool_results
        .into_iter()
        .filter_map(|block| match block {
            ContentBlock::ToolResult { tool_use_id, content, .. } => Some(OpenAIMessage::Tool {
                tool_call_id: tool_use_id.clone(),
                content: tool_result_text(content),
            }),
            _ => None,
        })
        .collect();

    let parts: Vec<ContentPart> = others
        .into_iter()
        .filter_map(|block| match block {
            ContentBlock::Text { text } => Some(ContentPart::Text { text: text.clone() }),
            ContentBlock::Image { source } => {
                Some(ContentPart::ImageUrl { image_url: ImageUrl { url: source.to_data_uri() } })
            },
            other => {
                tracing::debug!("[Request] Skipping unsupported user block: {:?}", other);
                None
            },
        })
        .collect();

    if !parts.is_empty() {
        out.push(OpenAIMessage::User { content: UserContent::Parts(parts) });
    }

    out
}

fn transform_assistant(content: &MessageContent) -> OpenAIMessage {
    let blocks = match content {
        MessageContent::String(text) => {
            let content = (!text.is_empty()).then(|| text.clone());
            return OpenAIMessage::Assistant { content, tool_calls: None };
        },
        MessageContent::Array(blocks) => blocks,
    };

    let mut text_parts: Vec<&str> = Vec::new();
    let mut tool_calls = Vec::new();

    for block in blocks {
        match block {
            ContentBlock::Text { text } => text_parts.push(text),
            ContentBlock::ToolUse { id, name, input } => {
                tool_calls.push(ToolCall::new_function(id, name, tool_arguments(input)));
            },
            _ => {},
        }
    }

    let text = text_parts.join("\n");
    OpenAIMessage::Assistant {
        content: (!text.is_empty()).then_some(text),
        tool_calls: (!tool_calls.is_empty()).then_some(tool_calls),
    }
}

/// Tool results that are already strings pass through; anything else is JSON-encoded.
fn tool_result_text(content: &Value) -> String {
    match content {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Serialized `input`; a missing input becomes `{}`.
fn tool_arguments(input: &Value) -> String {
    match input {
        Value::Null => "{}".to_string(),
        other => other.to_string(),
    }
}
