//! Line decoder trait

use uartrace_protocol::{ByteEvent, UartEvent};

use super::sink::AnnotationSink;
use crate::config::DecoderOptions;
use crate::line::LineEvent;

/// Trait for decoders that turn frame values into lines
pub trait LineDecoder {
    /// Apply options and start a new session
    ///
    /// Any partially accumulated lines are discarded.
    fn configure(&mut self, options: &DecoderOptions);

    /// Feed one frame value
    ///
    /// Returns `Some(line)` when the value completes a line.
    fn on_byte(&mut self, event: &ByteEvent) -> Option<LineEvent>;

    /// Feed one upstream event
    ///
    /// Only complete frames are consumed; every other packet is ignored.
    fn decode(&mut self, event: &UartEvent) -> Option<LineEvent> {
        let byte = event.as_byte_event()?;
        self.on_byte(&byte)
    }
}

/// Helpers for driving a decoder into an annotation sink
pub trait LineDecoderExt: LineDecoder {
    /// Decode an event and forward a completed line to `sink`
    ///
    /// Returns true if an annotation was emitted.
    fn decode_into<S: AnnotationSink + ?Sized>(&mut self, event: &UartEvent, sink: &mut S) -> bool {
        match self.decode(event) {
            Some(line) => {
                sink.put(line.into_annotation());
                true
            }
            None => false,
        }
    }

    /// Decode a batch of events into `sink`
    ///
    /// Returns the number of annotations emitted.
    fn decode_all<'a, I, S>(&mut self, events: I, sink: &mut S) -> usize
    where
        I: IntoIterator<Item = &'a UartEvent>,
        S: AnnotationSink + ?Sized,
    {
        let mut emitted = 0;
        for event in events {
            if self.decode_into(event, sink) {
                emitted += 1;
            }
        }
        emitted
    }
}

// Blanket implementation for all LineDecoder types
impl<T: LineDecoder + ?Sized> LineDecoderExt for T {}
