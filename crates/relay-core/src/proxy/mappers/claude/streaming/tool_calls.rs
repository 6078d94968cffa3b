use relay_types::protocol::openai::ToolCallDelta;
use std::collections::BTreeMap;

/// Per-call state, keyed by the upstream `tool_calls[].index`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolCallAccumulator {
    pub id: Option<String>,
    pub name: Option<String>,
    /// Claude content block index, assigned once `id` and `name` are both known.
    pub block_index: Option<usize>,
}

impl ToolCallAccumulator {
    pub fn is_started(&self) -> bool {
        self.block_index.is_some()
    }

    fn merge(&mut self, delta: &ToolCallDelta) {
        if let Some(id) = delta.id.as_deref().filter(|s| !s.is_empty()) {
            self.id = Some(id.to_string());
        }
        let name = delta.function.as_ref().and_then(|f| f.name.as_deref());
        if let Some(name) = name.filter(|s| !s.is_empty()) {
            self.name = Some(name.to_string());
        }
    }
}

/// What one tool-call delta produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCallUpdate {
    /// The call just became identifiable and was given a block.
    Started { block_index: usize, id: String, name: String },
    /// Raw argument fragment for an already-started block.
    Arguments { block_index: usize, partial_json: String },
}

/// Tracks every in-flight tool call of one stream.
///
/// Block 0 belongs to text, so tool blocks are numbered from 1 in the order
/// each call's `(id, name)` pair is first complete.
#[derive(Debug, Default)]
pub struct ToolCallTracker {
    calls: BTreeMap<u32, ToolCallAccumulator>,
    last_block_index: usize,
}

impl ToolCallTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, delta: &ToolCallDelta) -> Vec<ToolCallUpdate> {
        let mut updates = Vec::new();
        let acc = self.calls.entry(delta.index).or_default();
        acc.merge(delta);

        if !acc.is_started() {
            if let (Some(id), Some(name)) = (&acc.id, &acc.name) {
                self.last_block_index += 1;
                acc.block_index = Some(self.last_block_index);
                updates.push(ToolCallUpdate::Started {
                    block_index: self.last_block_index,
                    id: id.clone(),
                    name: name.clone(),
                });
            }
        }

        let fragment = delta.function.as_ref().and_then(|f| f.arguments.as_deref());
        match (acc.block_index, fragment) {
            (Some(block_index), Some(args)) if !args.is_empty() => {
                updates.push(ToolCallUpdate::Arguments {
                    block_index,
                    partial_json: args.to_string(),
                });
            },
            (None, Some(args)) if !args.is_empty() => {
                tracing::debug!(
                    "[Streaming] Dropping {} argument bytes for unidentified tool call #{}",
                    args.len(),
                    delta.index
                );
            },
            _ => {},
        }

        updates
    }

    /// Block indices of every started call, in start order.
    pub fn started_blocks(&self) -> Vec<usize> {
        let mut blocks: Vec<usize> = self.calls.values().filter_map(|c| c.block_index).collect();
        blocks.sort_unstable();
        blocks
    }

    pub fn get(&self, upstream_index: u32) -> Option<&ToolCallAccumulator> {
        self.calls.get(&upstream_index)
    }
}
