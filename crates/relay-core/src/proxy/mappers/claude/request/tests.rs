use super::*;
use relay_types::protocol::openai::{ContentPart, OpenAIToolChoice, ToolChoiceMode, UserContent};
use serde_json::json;

fn parse(value: serde_json::Value) -> ClaudeRequest {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_simple_request() {
    let req = parse(json!({
        "model": "claude-3-5-haiku-20241022",
        "system": "You are terse.",
        "max_tokens": 256,
        "temperature": 0.2,
        "top_p": 0.9,
        "stream": true,
        "stop_sequences": ["END"],
        "messages": [{"role": "user", "content": "Hello"}]
    }));

    let out = transform_claude_request_in(&req, "gpt-oss-120b");

    assert_eq!(out.model, "gpt-oss-120b");
    assert_eq!(out.max_tokens, Some(256));
    assert_eq!(out.temperature, Some(0.2));
    assert_eq!(out.top_p, Some(0.9));
    assert!(out.stream);
    assert_eq!(out.stop, Some(vec!["END".to_string()]));
    assert_eq!(
        out.messages,
        vec![
            OpenAIMessage::System { content: "You are terse.".into() },
            OpenAIMessage::User { content: UserContent::Text("Hello".into()) },
        ]
    );
    assert!(out.tools.is_none());
    assert!(out.tool_choice.is_none());
}

#[test]
fn test_absent_fields_stay_absent_on_the_wire() {
    let req = parse(json!({
        "model": "m",
        "messages": [{"role": "user", "content": "hi"}]
    }));

    let wire = serde_json::to_value(transform_claude_request_in(&req, "m")).unwrap();
    let obj = wire.as_object().unwrap();
    for key in ["max_tokens", "temperature", "top_p", "stop", "tools", "tool_choice"] {
        assert!(!obj.contains_key(key), "{} should be omitted: {}", key, wire);
    }
    assert_eq!(wire["stream"], false);
    assert_eq!(wire["messages"].as_array().unwrap().len(), 1);
}

#[test]
fn test_system_block_array_is_flattened() {
    let req = parse(json!({
        "model": "m",
        "system": [{"type": "text", "text": "one"}, {"type": "text", "text": "two"}],
        "messages": [{"role": "user", "content": "hi"}]
    }));

    let out = transform_claude_request_in(&req, "m");
    assert_eq!(out.messages[0], OpenAIMessage::System { content: "one\ntwo".into() });
}

#[test]
fn test_empty_system_prompt_sends_no_system_message() {
    for system in [json!(""), json!([]), json!([{"type": "text", "text": ""}])] {
        let req = parse(json!({
            "model": "m",
            "system": system,
            "messages": [{"role": "user", "content": "hi"}]
        }));

        let out = transform_claude_request_in(&req, "m");
        assert_eq!(
            out.messages,
            vec![OpenAIMessage::User { content: UserContent::Text("hi".into()) }],
            "system {}",
            system
        );
    }
}

#[test]
fn test_tool_results_hoisted_before_user_content() {
    let req = parse(json!({
        "model": "m",
        "messages": [{
            "role": "user",
            "content": [
                {"type": "text", "text": "first"},
                {"type": "tool_result", "tool_use_id": "t1", "content": "sunny"},
                {"type": "image", "source": {"type": "base64", "media_type": "image/png", "data": "AAAA"}},
                {"type": "tool_result", "tool_use_id": "t2", "content": [{"type": "text", "text": "42"}]},
                {"type": "text", "text": "second"}
            ]
        }]
    }));

    let out = transform_claude_request_in(&req, "m");

    assert_eq!(out.messages.len(), 3);
    assert_eq!(
        out.messages[0],
        OpenAIMessage::Tool { tool_call_id: "t1".into(), content: "sunny".into() }
    );
    match &out.messages[1] {
        OpenAIMessage::Tool { tool_call_id, content } => {
            assert_eq!(tool_call_id, "t2");
            let decoded: serde_json::Value = serde_json::from_str(content).unwrap();
            assert_eq!(decoded, json!([{"type": "text", "text": "42"}]));
        },
        other => panic!("expected tool message, got {:?}", other),
    }
    match &out.messages[2] {
        OpenAIMessage::User { content: UserContent::Parts(parts) } => {
            assert_eq!(parts.len(), 3);
            assert_eq!(parts[0], ContentPart::Text { text: "first".into() });
            match &parts[1] {
                ContentPart::ImageUrl { image_url } => {
                    assert_eq!(image_url.url, "data:image/png;base64,AAAA");
                },
                other => panic!("expected image part, got {:?}", other),
            }
            assert_eq!(parts[2], ContentPart::Text { text: "second".into() });
        },
        other => panic!("expected user parts, got {:?}", other),
    }
}

#[test]
fn test_tool_result_only_turn_emits_no_user_message() {
    let req = parse(json!({
        "model": "m",
        "messages": [{
            "role": "user",
            "content": [{"type": "tool_result", "tool_use_id": "t1", "content": "ok"}]
        }]
    }));

    let out = transform_claude_request_in(&req, "m");
    assert_eq!(
        out.messages,
        vec![OpenAIMessage::Tool { tool_call_id: "t1".into(), content: "ok".into() }]
    );
}

#[test]
fn test_assistant_text_and_tool_calls() {
    let req = parse(json!({
        "model": "m",
        "messages": [{
            "role": "assistant",
            "content": [
                {"type": "text", "text": "Let me check."},
                {"type": "tool_use", "id": "t1", "name": "get_weather", "input": {"city": "Paris"}},
                {"type": "text", "text": "One moment."}
            ]
        }]
    }));

    let out = transform_claude_request_in(&req, "m");
    match &out.messages[0] {
        OpenAIMessage::Assistant { content, tool_calls } => {
            assert_eq!(content.as_deref(), Some("Let me check.\nOne moment."));
            let calls = tool_calls.as_ref().unwrap();
            assert_eq!(calls.len(), 1);
            assert_eq!(calls[0].id, "t1");
            assert_eq!(calls[0].call_type, "function");
            assert_eq!(calls[0].function.name, "get_weather");
            assert_eq!(calls[0].function.arguments, r#"{"city":"Paris"}"#);
        },
        other => panic!("expected assistant, got {:?}", other),
    }
}

#[test]
fn test_tool_only_assistant_turn_has_null_content() {
    let req = parse(json!({
        "model": "m",
        "messages": [{
            "role": "assistant",
            "content": [{"type": "tool_use", "id": "t1", "name": "ping"}]
        }]
    }));

    let wire = serde_json::to_value(transform_claude_request_in(&req, "m")).unwrap();
    let msg = &wire["messages"][0];
    assert_eq!(msg["role"], "assistant");
    assert!(msg["content"].is_null());
    assert!(msg.as_object().unwrap().contains_key("content"));
    assert_eq!(msg["tool_calls"][0]["function"]["arguments"], "{}");
}

#[test]
fn test_text_only_assistant_turn_omits_tool_calls() {
    let req = parse(json!({
        "model": "m",
        "messages": [{"role": "assistant", "content": [{"type": "text", "text": "hi"}]}]
    }));

    let wire = serde_json::to_value(transform_claude_request_in(&req, "m")).unwrap();
    assert_eq!(wire["messages"][0]["content"], "hi");
    assert!(wire["messages"][0].get("tool_calls").is_none());
}

#[test]
fn test_unknown_blocks_are_skipped() {
    let req = parse(json!({
        "model": "m",
        "messages": [
            {"role": "user", "content": [{"type": "document", "source": {}}]},
            {"role": "assistant", "content": [{"type": "thinking", "thinking": "hmm"}, {"type": "text", "text": "ok"}]}
        ]
    }));

    let out = transform_claude_request_in(&req, "m");
    assert_eq!(out.messages.len(), 1);
    assert_eq!(out.messages[0], OpenAIMessage::Assistant { content: Some("ok".into()), tool_calls: None });
}

#[test]
fn test_tools_are_wrapped_and_schemas_cleaned() {
    let req = parse(json!({
        "model": "m",
        "messages": [{"role": "user", "content": "hi"}],
        "tools": [{
            "name": "get_weather",
            "description": "Weather lookup",
            "input_schema": {
                "$schema": "http://json-schema.org/draft-07/schema#",
                "type": "object",
                "additionalProperties": false,
                "properties": {"city": {"type": "string", "format": "city-name"}},
                "required": ["city"]
            }
        }]
    }));

    let out = transform_claude_request_in(&req, "m");
    let tools = out.tools.unwrap();
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0].tool_type, "function");
    assert_eq!(tools[0].function.name, "get_weather");
    assert_eq!(tools[0].function.description.as_deref(), Some("Weather lookup"));
    assert_eq!(
        tools[0].function.parameters,
        Some(json!({
            "type": "object",
            "properties": {"city": {"type": "string"}},
            "required": ["city"]
        }))
    );
}

#[test]
fn test_tool_without_schema_omits_parameters() {
    let req = parse(json!({
        "model": "m",
        "messages": [{"role": "user", "content": "hi"}],
        "tools": [{"name": "ping"}]
    }));

    let wire = serde_json::to_value(transform_claude_request_in(&req, "m")).unwrap();
    let function = &wire["tools"][0]["function"];
    assert_eq!(function["name"], "ping");
    assert!(function.get("parameters").is_none(), "parameters should be omitted: {}", function);
    assert!(function.get("description").is_none());
}

#[test]
fn test_tool_choice_mapping() {
    let cases = [
        (json!({"type": "auto"}), json!("auto")),
        (json!({"type": "any"}), json!("auto")),
        (json!({"type": "none"}), json!("none")),
        (json!({"type": "tool", "name": "f"}), json!({"type": "function", "function": {"name": "f"}})),
    ];

    for (claude_choice, expected) in cases {
        let req = parse(json!({
            "model": "m",
            "messages": [{"role": "user", "content": "hi"}],
            "tool_choice": claude_choice
        }));
        let out = transform_claude_request_in(&req, "m");
        assert_eq!(serde_json::to_value(out.tool_choice.unwrap()).unwrap(), expected);
    }

    assert_eq!(
        build_tool_choice(&relay_types::protocol::claude::ToolChoice::Any),
        OpenAIToolChoice::Mode(ToolChoiceMode::Auto)
    );
}
