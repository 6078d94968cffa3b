//! Tool definitions and tool choice for ChatCompletions.

use crate::proxy::common::json_schema::clean_json_schema;
use relay_types::protocol::claude::{Tool, ToolChoice};
use relay_types::protocol::openai::{
    FunctionDefinition, FunctionName, NamedToolChoice, OpenAIToolChoice, ToolChoiceMode,
    ToolDefinition,
};

/// A tool without `input_schema` gets no `parameters` key.
pub fn build_tools(tools: &[Tool]) -> Vec<ToolDefinition> {
    tools
        .iter()
        .map(|tool| ToolDefinition {
            tool_type: "function".to_string(),
            function: FunctionDefinition {
                name: tool.name.clone(),
                description: tool.description.clone(),
                parameters: (!tool.input_schema.is_null())
                    .then(|| clean_json_schema(&tool.input_schema)),
            },
        })
        .collect()
}

/// `auto` and `any` both map to `"auto"`.
pub fn build_tool_choice(choice: &ToolChoice) -> OpenAIToolChoice {
    match choice {
        ToolChoice::Auto | ToolChoice::Any => OpenAIToolChoice::Mode(ToolChoiceMode::Auto),
        ToolChoice::None => OpenAIToolChoice::Mode(ToolChoiceMode::None),
        ToolChoice::Tool { name } => OpenAIToolChoice::Named(NamedToolChoice {
            choice_type: "function".to_string(),
            function: FunctionName { name: name.clone() },
        }),
    }
}
