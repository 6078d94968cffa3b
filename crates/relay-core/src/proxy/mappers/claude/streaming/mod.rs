mod state;
mod tool_calls;

pub use state::{StreamingState, TEXT_BLOCK_INDEX};
pub use tool_calls::{ToolCallAccumulator, ToolCallTracker, ToolCallUpdate};
