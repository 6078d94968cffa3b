use bytes::BytesMut;

/// Upper bound on an unterminated line before the buffer is discarded.
const MAX_LINE_BYTES: usize = 10 * 1024 * 1024;

/// Parse a single SSE line into (key, value) pair.
///
/// SSE format: `key: value\n`
pub fn parse_sse_line(line: &str) -> Option<(&str, &str)> {
    let colon_pos = line.find(':')?;
    let key = &line[..colon_pos];
    let value = line[colon_pos + 1..].trim();
    Some((key, value))
}

/// Payload of one upstream `data:` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SseData<'a> {
    /// The `[DONE]` sentinel.
    Done,
    /// Anything else; expected to be a JSON frame but not yet parsed.
    Payload(&'a str),
}

/// Classify a line; `None` for comments, other fields, and empty data.
pub fn parse_data_line(line: &str) -> Option<SseData<'_>> {
    let (key, value) = parse_sse_line(line)?;
    if key != "data" || value.is_empty() {
        return None;
    }
    if value == "[DONE]" {
        return Some(SseData::Done);
    }
    Some(SseData::Payload(value))
}

/// Reassembles network chunks into complete lines.
///
/// Chunk boundaries from the HTTP body are arbitrary, so a `data:` frame may
/// arrive in several pieces; only newline-terminated lines are released.
#[derive(Debug, Default)]
pub struct SseLineBuffer {
    buffer: BytesMut,
}

impl SseLineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk and drain every complete line (without the terminator).
    /// Lines that are not valid UTF-8 are skipped.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(chunk);

        let mut lines = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line_raw = self.buffer.split_to(pos + 1);
            match std::str::from_utf8(&line_raw) {
                Ok(s) => {
                    let line = s.trim();
                    if !line.is_empty() {
                        lines.push(line.to_string());
                    }
                },
                Err(e) => {
                    tracing::warn!("SSE line UTF-8 decode error: {} | {} bytes", e, line_raw.len());
                },
            }
        }

        if self.buffer.len() > MAX_LINE_BYTES {
            tracing::error!(
                "SSE line exceeded {}MB without a newline, discarding",
                MAX_LINE_BYTES / 1024 / 1024
            );
            self.buffer.clear();
        }

        lines
    }

    /// Take whatever remains after the upstream closed without a final newline.
    pub fn finish(&mut self) -> Option<String> {
        let rest = self.buffer.split();
        let line = String::from_utf8_lossy(&rest).trim().to_string();
        if line.is_empty() {
            None
        } else {
            Some(line)
        }
    }
}
