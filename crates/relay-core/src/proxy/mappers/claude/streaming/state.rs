use super::tool_calls::{ToolCallAccumulator, ToolCallTracker, ToolCallUpdate};
use crate::proxy::common::random_id::generate_message_id;
use relay_types::protocol::claude::{
    BlockDelta, ContentBlock, DeltaUsage, MessageDelta, MessageStart, StopReason,
    StreamErrorBody, StreamEvent, Usage,
};
use relay_types::protocol::openai::StreamChunk;
use relay_types::ProxyError;
use serde_json::json;

/// Claude block index reserved for streamed text.
pub const TEXT_BLOCK_INDEX: usize = 0;

/// Per-stream translation state: ChatCompletions chunks in, Claude events out.
///
/// Lifecycle is `start` → any number of `process_*` calls → `finish`. Each
/// step returns the events it produced, in order. After `finish` every call
/// is a no-op, so frames trailing `[DONE]` are ignored.
pub struct StreamingState {
    message_id: String,
    model: String,
    tool_calls: ToolCallTracker,
    message_start_sent: bool,
    message_stop_sent: bool,
}

impl StreamingState {
    pub fn new(model: impl Into<String>) -> Self {
        Self::with_message_id(model, generate_message_id())
    }

    pub fn with_message_id(model: impl Into<String>, message_id: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            model: model.into(),
            tool_calls: ToolCallTracker::new(),
            message_start_sent: false,
            message_stop_sent: false,
        }
    }

    pub fn message_id(&self) -> &str {
        &self.message_id
    }

    pub fn is_finished(&self) -> bool {
        self.message_stop_sent
    }

    /// Accumulator for an upstream tool-call index, if one was seen.
    pub fn tool_call(&self, upstream_index: u32) -> Option<&ToolCallAccumulator> {
        self.tool_calls.get(upstream_index)
    }

    /// `message_start` followed by the (always opened) text block.
    pub fn start(&mut self) -> Vec<StreamEvent> {
        if self.message_start_sent {
            return vec![];
        }
        self.message_start_sent = true;

        vec![
            StreamEvent::MessageStart {
                message: MessageStart {
                    id: self.message_id.clone(),
                    type_: "message".to_string(),
                    role: "assistant".to_string(),
                    model: self.model.clone(),
                    content: vec![],
                    stop_reason: None,
                    stop_sequence: None,
                    usage: Usage::default(),
                },
            },
            StreamEvent::ContentBlockStart {
                index: TEXT_BLOCK_INDEX,
                content_block: ContentBlock::Text { text: String::new() },
            },
        ]
    }

    /// Handle the JSON payload of one `data:` line. Payloads that do not
    /// parse are dropped.
    pub fn process_frame(&mut self, payload: &str) -> Vec<StreamEvent> {
        if self.message_stop_sent {
            return vec![];
        }
        match serde_json::from_str::<StreamChunk>(payload) {
            Ok(chunk) => self.process_chunk(&chunk),
            Err(e) => {
                tracing::debug!("[Streaming] Dropping malformed frame: {} | data: {}", e, payload);
                vec![]
            },
        }
    }

    pub fn process_chunk(&mut self, chunk: &StreamChunk) -> Vec<StreamEvent> {
        if self.message_stop_sent {
            return vec![];
        }
        let mut events = self.start();

        let Some(delta) = chunk.choices.first().and_then(|c| c.delta.as_ref()) else {
            return events;
        };

        if let Some(text) = delta.content.as_deref().filter(|t| !t.is_empty()) {
            events.push(StreamEvent::ContentBlockDelta {
                index: TEXT_BLOCK_INDEX,
                delta: BlockDelta::TextDelta { text: text.to_string() },
            });
        }

        for tc_delta in delta.tool_calls.iter().flatten() {
            for update in self.tool_calls.apply(tc_delta) {
                events.push(match update {
                    ToolCallUpdate::Started { block_index, id, name } => {
                        StreamEvent::ContentBlockStart {
                            index: block_index,
                            content_block: ContentBlock::ToolUse { id, name, input: json!({}) },
                        }
                    },
                    ToolCallUpdate::Arguments { block_index, partial_json } => {
                        StreamEvent::ContentBlockDelta {
                            index: block_index,
                            delta: BlockDelta::InputJsonDelta { partial_json },
                        }
                    },
                });
            }
        }

        events
    }

    /// Close every open block, then `message_delta` and `message_stop`.
    ///
    /// Output token usage is not recoverable from the delta stream and is
    /// always reported as zero.
    pub fn finish(&mut self) -> Vec<StreamEvent> {
        if self.message_stop_sent {
            return vec![];
        }
        let mut events = self.start();

        events.push(StreamEvent::ContentBlockStop { index: TEXT_BLOCK_INDEX });
        events.extend(
            self.tool_calls
                .started_blocks()
                .into_iter()
                .map(|index| StreamEvent::ContentBlockStop { index }),
        );
        events.push(StreamEvent::MessageDelta {
            delta: MessageDelta { stop_reason: StopReason::EndTurn, stop_sequence: None },
            usage: DeltaUsage { output_tokens: 0 },
        });
        events.push(StreamEvent::MessageStop);

        self.message_stop_sent = true;
        events
    }

    /// An `error` event for `error`; the caller still owes the client `finish`.
    pub fn error_event(&self, error: &ProxyError) -> StreamEvent {
        StreamEvent::Error {
            error: StreamErrorBody {
                type_: error.error_type().to_string(),
                message: error.to_string(),
            },
        }
    }
}
