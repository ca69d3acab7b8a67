//! Per-direction line accumulation
//!
//! Bytes are appended to the current line until the separator sequence has
//! been seen in full. Separator bytes are only matched, never stored: when a
//! partial match breaks, the first separator byte is written back into the
//! line followed by the byte that broke the match.
//!
//! ```text
//!            value == sep[idx]           idx + 1 == len(sep)
//!   ┌──────┐ ───────────────► ┌───────┐ ──────────────────► emit line
//!   │ idx=0│                  │ idx>0 │
//!   └──────┘ ◄─────────────── └───────┘
//!            value != sep[idx]
//!            (push sep[0], push value)
//! ```
//!
//! Only `sep[0]` is recovered, so with a two byte separator a repeated first
//! byte (`CR CR LF` for CR+LF) is kept as data and does not end the line.

use alloc::string::String;

use uartrace_protocol::{ByteEvent, Direction};

use super::event::LineEvent;
use super::format::push_value;
use crate::config::SeparatorConfig;

/// Line state for one direction
#[derive(Debug, Clone)]
pub struct LineAccumulator {
    direction: Direction,
    separator: SeparatorConfig,
    /// Formatted text of the line in progress
    text: String,
    /// Start of the line in progress, unset until its first byte arrives
    line_start: Option<u64>,
    /// Number of separator bytes matched so far
    match_index: usize,
}

impl LineAccumulator {
    /// Create an empty accumulator
    pub fn new(direction: Direction, separator: SeparatorConfig) -> Self {
        Self {
            direction,
            separator,
            text: String::new(),
            line_start: None,
            match_index: 0,
        }
    }

    /// Discard the line in progress
    pub fn reset(&mut self) {
        self.text.clear();
        self.line_start = None;
        self.match_index = 0;
    }

    /// Feed one byte
    ///
    /// Returns the completed line when this byte finishes the separator.
    pub fn on_byte(&mut self, event: &ByteEvent) -> Option<LineEvent> {
        // A pending partial match keeps the anchor of the line it belongs to
        if self.text.is_empty() && self.match_index == 0 {
            self.line_start = Some(event.start);
        }

        let expected = self.separator.get(self.match_index).map(u16::from);
        if expected == Some(event.value) {
            self.match_index += 1;
            if self.match_index == self.separator.len() {
                return Some(self.complete(event));
            }
            return None;
        }

        if self.match_index > 0 {
            push_value(&mut self.text, u16::from(self.separator.first()));
            self.match_index = 0;
        }
        push_value(&mut self.text, event.value);
        None
    }

    fn complete(&mut self, event: &ByteEvent) -> LineEvent {
        let line = LineEvent {
            start: self.line_start.take().unwrap_or(event.start),
            end: event.end,
            direction: self.direction,
            text: core::mem::take(&mut self.text),
        };
        self.match_index = 0;
        line
    }

    /// Direction this accumulator serves
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Separator in use
    pub fn separator(&self) -> &SeparatorConfig {
        &self.separator
    }

    /// Text accumulated so far
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Start position of the line in progress
    pub fn line_start(&self) -> Option<u64> {
        self.line_start
    }

    /// Number of separator bytes matched so far
    pub fn match_index(&self) -> usize {
        self.match_index
    }

    /// True when no text and no partial separator match is pending
    pub fn is_idle(&self) -> bool {
        self.text.is_empty() && self.match_index == 0
    }
}
