//! Incremental decoder for `text/event-stream` bodies.
//!
//! Network chunks do not respect event boundaries: one read may carry half
//! an event, three events, or an event split inside a multi-byte UTF-8
//! character. [`SseDecoder`] buffers raw bytes and only hands out the `data`
//! payload of events that are complete.

use crate::error::OpenAiError;

/// Payload OpenAI sends as the final event of a stream.
pub const DONE: &str = "[DONE]";

#[derive(Debug, Default)]
pub struct SseDecoder {
    buf: Vec<u8>,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed raw bytes and return the data payloads of every event completed
    /// by them, in order. Events without `data:` lines (comments, keep-alive
    /// pings) are skipped.
    pub fn push(&mut self, bytes: &[u8]) -> Result<Vec<String>, OpenAiError> {
        self.buf.extend_from_slice(bytes);

        let mut payloads = Vec::new();
        while let Some((pos, sep)) = find_event_boundary(&self.buf) {
            let frame: Vec<u8> = self.buf.drain(..pos + sep).collect();
            if let Some(data) = parse_event(&frame[..pos])? {
                payloads.push(data);
            }
        }
        Ok(payloads)
    }

    /// Flush an event left unterminated when the body ended.
    pub fn finish(&mut self) -> Result<Option<String>, OpenAiError> {
        if self.buf.iter().all(u8::is_ascii_whitespace) {
            self.buf.clear();
            return Ok(None);
        }
        let frame = std::mem::take(&mut self.buf);
        parse_event(&frame)
    }
}

/// Position and length of the first blank-line separator (`\n\n` or
/// `\r\n\r\n`).
fn find_event_boundary(buf: &[u8]) -> Option<(usize, usize)> {
    let lf = buf.windows(2).position(|w| w == b"\n\n").map(|p| (p, 2));
    let crlf = buf.windows(4).position(|w| w == b"\r\n\r\n").map(|p| (p, 4));
    match (lf, crlf) {
        (Some(a), Some(b)) => Some(if b.0 < a.0 { b } else { a }),
        (a, b) => a.or(b),
    }
}

fn parse_event(frame: &[u8]) -> Result<Option<String>, OpenAiError> {
    let text = std::str::from_utf8(frame)
        .map_err(|e| OpenAiError::Format(format!("event is not valid UTF-8: {e}")))?;

    let data: Vec<&str> = text
        .lines()
        .filter_map(|line| line.strip_prefix("data:"))
        .map(|data| data.strip_prefix(' ').unwrap_or(data))
        .collect();

    if data.is_empty() {
        Ok(None)
    } else {
        Ok(Some(data.join("\n")))
    }
}
