// SSE stream transformation: OpenAI ChatCompletions → Claude Messages

use super::streaming::StreamingState;
use crate::proxy::common::sse_parser::{parse_data_line, SseData, SseLineBuffer};
use async_stream::stream;
use bytes::Bytes;
use futures::{Stream, StreamExt};
use relay_types::protocol::claude::StreamEvent;
use relay_types::ProxyError;
use std::fmt::Display;
use std::pin::Pin;

/// Translate an upstream SSE byte stream into Claude stream events.
///
/// The upstream is read lazily and exactly once; dropping the returned stream
/// drops the upstream body. Every outcome ends with `message_stop`:
/// `[DONE]`, a clean EOF without it, or a transport error (which is reported
/// as an `error` event first).
pub fn translate_frames<S, E>(
    upstream: S,
    requested_model: String,
    trace_id: String,
) -> impl Stream<Item = StreamEvent> + Send
where
    S: Stream<Item = Result<Bytes, E>> + Send + 'static,
    E: Display + Send + 'static,
{
    stream! {
        let mut upstream = Box::pin(upstream);
        let mut state = StreamingState::new(requested_model);
        let mut lines = SseLineBuffer::new();

        for event in state.start() {
            yield event;
        }

        'read: while let Some(item) = upstream.next().await {
            match item {
                Ok(chunk) => {
                    for line in lines.push(&chunk) {
                        for event in process_sse_line(&line, &mut state) {
                            yield event;
                        }
                        if state.is_finished() {
                            break 'read;
                        }
                    }
                },
                Err(e) => {
                    tracing::warn!("[{}] Upstream stream error: {}", trace_id, e);
                    yield state.error_event(&ProxyError::StreamError { message: e.to_string() });
                    break 'read;
                },
            }
        }

        if !state.is_finished() {
            if let Some(line) = lines.finish() {
                for event in process_sse_line(&line, &mut state) {
                    yield event;
                }
            }
        }
        if !state.is_finished() {
            tracing::debug!("[{}] Upstream closed without [DONE], closing stream", trace_id);
        }
        for event in state.finish() {
            yield event;
        }
    }
}

/// SSE-encoded Claude stream ready to be used as an HTTP response body.
pub fn create_claude_sse_stream<S, E>(
    upstream: S,
    requested_model: String,
    trace_id: String,
) -> Pin<Box<dyn Stream<Item = Result<Bytes, String>> + Send>>
where
    S: Stream<Item = Result<Bytes, E>> + Send + 'static,
    E: Display + Send + 'static,
{
    Box::pin(
        translate_frames(upstream, requested_model, trace_id)
            .map(|event| Ok(Bytes::from(event.to_sse()))),
    )
}

fn process_sse_line(line: &str, state: &mut StreamingState) -> Vec<StreamEvent> {
    match parse_data_line(line) {
        Some(SseData::Done) => state.finish(),
        Some(SseData::Payload(payload)) => state.process_frame(payload),
        None => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;
    use relay_types::protocol::claude::{BlockDelta, ContentBlock};

    fn chunks(parts: &[&str]) -> impl Stream<Item = Result<Bytes, String>> + Send + 'static {
        let owned: Vec<Result<Bytes, String>> =
            parts.iter().map(|p| Ok(Bytes::from(p.to_string()))).collect();
        stream::iter(owned)
    }

    async fn run(upstream: impl Stream<Item = Result<Bytes, String>> + Send + 'static) -> Vec<StreamEvent> {
        translate_frames(upstream, "claude-3-5-haiku".to_string(), "test".to_string())
            .collect()
            .await
    }

    fn names(events: &[StreamEvent]) -> Vec<&'static str> {
        events.iter().map(StreamEvent::event_name).collect()
    }

    #[tokio::test]
    async fn test_text_and_tool_call_across_split_chunks() {
        let events = run(chunks(&[
            "data: {\"choices\":[{\"index\":0,\"delta\":{\"content\":\"Hi\"}}]}\n\n",
            "data: {\"choices\":[{\"index\":0,\"delta\":{\"tool_calls\":[{\"index\":0,\"id\":\"call_1\",",
            "\"type\":\"function\",\"function\":{\"name\":\"lookup\",\"arguments\":\"\"}}]}}]}\n\n",
            "data: {\"choices\":[{\"index\":0,\"delta\":{\"tool_calls\":[{\"index\":0,\"function\":{\"arguments\":\"{\\\"q\\\":1}\"}}]}}]}\n\n",
            "data: [DONE]\n\n",
        ]))
        .await;

        assert_eq!(
            names(&events),
            vec![
                "message_start",
                "content_block_start",
                "content_block_delta",
                "content_block_start",
                "content_block_delta",
                "content_block_stop",
                "content_block_stop",
                "message_delta",
                "message_stop",
            ]
        );
        assert_eq!(
            events[2],
            StreamEvent::ContentBlockDelta { index: 0, delta: BlockDelta::TextDelta { text: "Hi".into() } }
        );
        assert!(matches!(
            &events[3],
            StreamEvent::ContentBlockStart { index: 1, content_block: ContentBlock::ToolUse { name, .. } } if name == "lookup"
        ));
        assert_eq!(
            events[4],
            StreamEvent::ContentBlockDelta {
                index: 1,
                delta: BlockDelta::InputJsonDelta { partial_json: "{\"q\":1}".into() },
            }
        );
    }

    #[tokio::test]
    async fn test_frames_after_done_are_ignored() {
        let events = run(chunks(&[
            "data: [DONE]\n\ndata: {\"choices\":[{\"index\":0,\"delta\":{\"content\":\"late\"}}]}\n\n",
        ]))
        .await;

        assert_eq!(
            names(&events),
            vec!["message_start", "content_block_start", "content_block_stop", "message_delta", "message_stop"]
        );
    }

    #[tokio::test]
    async fn test_eof_without_done_still_terminates() {
        let events = run(chunks(&[
            ": keep-alive\n\n",
            "data: {\"choices\":[{\"index\":0,\"delta\":{\"content\":\"partial\"}}]}",
        ]))
        .await;

        assert_eq!(names(&events).last(), Some(&"message_stop"));
        assert!(events.contains(&StreamEvent::ContentBlockDelta {
            index: 0,
            delta: BlockDelta::TextDelta { text: "partial".into() },
        }));
    }

    #[tokio::test]
    async fn test_transport_error_emits_error_then_terminates() {
        let upstream = stream::iter(vec![
            Ok(Bytes::from_static(b"data: {\"choices\":[{\"index\":0,\"delta\":{\"content\":\"a\"}}]}\n\n")),
            Err("connection reset".to_string()),
            Ok(Bytes::from_static(b"data: {\"choices\":[{\"index\":0,\"delta\":{\"content\":\"b\"}}]}\n\n")),
        ]);

        let events = run(upstream).await;

        assert_eq!(
            names(&events),
            vec![
                "message_start",
                "content_block_start",
                "content_block_delta",
                "error",
                "content_block_stop",
                "message_delta",
                "message_stop",
            ]
        );
        match &events[3] {
            StreamEvent::Error { error } => {
                assert_eq!(error.type_, "overloaded_error");
                assert_eq!(error.message, "Stream error: connection reset");
            },
            other => panic!("expected error event, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_frame_dropped_mid_stream() {
        let events = run(chunks(&[
            "data: {\"choices\":[{\"index\":0,\"delta\":{\"content\":\"a\"}}]}\n",
            "data: {\"choices\":[{\"index\"\n",
            "data: {\"choices\":[{\"index\":0,\"delta\":{\"content\":\"b\"}}]}\n",
            "data: [DONE]\n",
        ]))
        .await;

        let texts: Vec<&str> = events
            .iter()
            .filter_map(|e| match e {
                StreamEvent::ContentBlockDelta { delta: BlockDelta::TextDelta { text }, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_sse_encoding() {
        let body: Vec<Result<Bytes, String>> =
            create_claude_sse_stream(chunks(&["data: [DONE]\n"]), "m".to_string(), "t".to_string())
                .collect()
                .await;

        let text: String = body
            .into_iter()
            .map(|b| String::from_utf8(b.unwrap().to_vec()).unwrap())
            .collect();
        assert!(text.starts_with("event: message_start\ndata: {"));
        assert!(text.contains("event: content_block_start\ndata: {\"type\":\"content_block_start\",\"index\":0"));
        assert!(text.ends_with("event: message_stop\ndata: {\"type\":\"message_stop\"}\n\n"));
    }
}
