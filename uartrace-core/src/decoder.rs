//! Two-direction UART line decoder
//!
//! Holds one accumulator per direction. Both share the separator resolved
//! when the decoder is configured; they never touch each other's state.

use uartrace_protocol::{ByteEvent, DecoderInfo, Direction, DECODER_INFO};

use crate::config::{DecoderOptions, SeparatorConfig};
use crate::line::{LineAccumulator, LineEvent};
use crate::traits::LineDecoder;

/// UART line trace decoder
#[derive(Debug, Clone)]
pub struct TraceDecoder {
    options: DecoderOptions,
    /// Indexed by `Direction::index()`
    lines: [LineAccumulator; 2],
}

impl Default for TraceDecoder {
    fn default() -> Self {
        Self::new(&DecoderOptions::default())
    }
}

impl TraceDecoder {
    /// Create a decoder for a new session
    pub fn new(options: &DecoderOptions) -> Self {
        let separator = options.separator();

        #[cfg(feature = "defmt")]
        defmt::debug!("line separator {} = {}", options.line_separator, separator);

        Self {
            options: *options,
            lines: [
                LineAccumulator::new(Direction::Rx, separator.clone()),
                LineAccumulator::new(Direction::Tx, separator),
            ],
        }
    }

    /// Registration metadata
    pub fn info() -> &'static DecoderInfo {
        &DECODER_INFO
    }

    /// Options applied at session start
    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }

    /// Separator shared by both directions
    pub fn separator(&self) -> &SeparatorConfig {
        self.lines[0].separator()
    }

    /// Accumulator of one direction
    pub fn accumulator(&self, direction: Direction) -> &LineAccumulator {
        &self.lines[direction.index()]
    }

    /// Text accumulated so far in one direction
    pub fn pending(&self, direction: Direction) -> &str {
        self.accumulator(direction).text()
    }

    /// Discard the lines in progress in both directions
    pub fn reset(&mut self) {
        for line in &mut self.lines {
            line.reset();
        }
    }
}

impl LineDecoder for TraceDecoder {
    fn configure(&mut self, options: &DecoderOptions) {
        *self = Self::new(options);
    }

    fn on_byte(&mut self, event: &ByteEvent) -> Option<LineEvent> {
        let line = self.lines[event.direction.index()].on_byte(event)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("line {}", line);

        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LineSeparator;
    use crate::line::Annotation;
    use crate::traits::LineDecoderExt;
    use alloc::vec::Vec;
    use uartrace_protocol::{AnnotationClass, UartEvent, UartPacket};

    fn frame(start: u64, direction: Direction, value: u8) -> UartEvent {
        UartEvent::frame(start, start + 9, direction, value as u16, true)
    }

    #[test]
    fn test_default_uses_crlf() {
        let decoder = TraceDecoder::default();
        assert_eq!(decoder.separator().as_slice(), &[13, 10]);
        assert_eq!(decoder.options().line_separator, LineSeparator::CrLf);
    }

    #[test]
    fn test_directions_are_independent() {
        let mut decoder = TraceDecoder::new(&DecoderOptions::new(LineSeparator::Lf));

        assert!(decoder.decode(&frame(0, Direction::Rx, b'O')).is_none());
        assert!(decoder.decode(&frame(5, Direction::Tx, b'A')).is_none());
        assert!(decoder.decode(&frame(10, Direction::Rx, b'K')).is_none());
        assert!(decoder.decode(&frame(15, Direction::Tx, b'T')).is_none());

        assert_eq!(decoder.pending(Direction::Rx), "OK");
        assert_eq!(decoder.pending(Direction::Tx), "AT");

        let tx = decoder.decode(&frame(25, Direction::Tx, b'\n')).unwrap();
        assert_eq!(tx.direction, Direction::Tx);
        assert_eq!(tx.text, "AT");
        assert_eq!(tx.start, 5);
        assert_eq!(tx.end, 34);
        assert_eq!(decoder.pending(Direction::Rx), "OK");

        let rx = decoder.decode(&frame(30, Direction::Rx, b'\n')).unwrap();
        assert_eq!(rx.direction, Direction::Rx);
        assert_eq!(rx.text, "OK");
        assert_eq!(rx.start, 0);
    }

    #[test]
    fn test_partial_match_per_direction() {
        let mut decoder = TraceDecoder::default();

        decoder.decode(&frame(0, Direction::Rx, 13));
        decoder.decode(&frame(10, Direction::Tx, 10));

        assert_eq!(decoder.accumulator(Direction::Rx).match_index(), 1);
        assert_eq!(decoder.accumulator(Direction::Tx).match_index(), 0);
        assert_eq!(decoder.pending(Direction::Tx), "<0A>");
    }

    #[test]
    fn test_non_frame_packets_ignored() {
        let mut decoder = TraceDecoder::new(&DecoderOptions::new(LineSeparator::Cr));
        let packets = [
            UartPacket::StartBit(0),
            UartPacket::Data(13),
            UartPacket::ParityBit(1),
            UartPacket::StopBit(1),
            UartPacket::InvalidStartBit(1),
            UartPacket::InvalidStopBit(0),
            UartPacket::ParityError {
                expected: 0,
                actual: 1,
            },
            UartPacket::Break,
        ];

        for (i, packet) in packets.into_iter().enumerate() {
            let event = UartEvent::new(i as u64, i as u64 + 1, Direction::Rx, packet);
            assert!(decoder.decode(&event).is_none());
        }

        assert!(decoder.accumulator(Direction::Rx).is_idle());
        assert_eq!(decoder.accumulator(Direction::Rx).line_start(), None);
    }

    #[test]
    fn test_invalid_frame_accumulated() {
        let mut decoder = TraceDecoder::new(&DecoderOptions::new(LineSeparator::Lf));
        decoder.decode(&UartEvent::frame(0, 9, Direction::Rx, b'x' as u16, false));
        assert_eq!(decoder.pending(Direction::Rx), "x");
    }

    #[test]
    fn test_configure_resets_and_resolves() {
        let mut decoder = TraceDecoder::default();
        decoder.decode(&frame(0, Direction::Rx, b'A'));
        decoder.decode(&frame(10, Direction::Tx, 13));

        decoder.configure(&DecoderOptions::new(LineSeparator::LfCr));

        assert_eq!(decoder.separator().as_slice(), &[10, 13]);
        for direction in Direction::ALL {
            assert!(decoder.accumulator(direction).is_idle());
            assert_eq!(decoder.accumulator(direction).separator().as_slice(), &[10, 13]);
        }
    }

    #[test]
    fn test_reset_keeps_separator() {
        let mut decoder = TraceDecoder::new(&DecoderOptions::new(LineSeparator::Cr));
        decoder.decode(&frame(0, Direction::Tx, b'A'));
        decoder.reset();

        assert_eq!(decoder.pending(Direction::Tx), "");
        assert_eq!(decoder.separator().as_slice(), &[13]);
    }

    #[test]
    fn test_decode_into_sink() {
        let mut decoder = TraceDecoder::default();
        let mut sink: Vec<Annotation> = Vec::new();

        let events = [
            frame(0, Direction::Rx, b'H'),
            frame(10, Direction::Rx, b'i'),
            frame(20, Direction::Rx, 13),
            frame(30, Direction::Rx, 10),
        ];
        let emitted = decoder.decode_all(events.iter(), &mut sink);

        assert_eq!(emitted, 1);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].class, AnnotationClass::RxText);
        assert_eq!(sink[0].text, "Hi");
        assert_eq!(sink[0].start, 0);
        assert_eq!(sink[0].end, 39);
    }

    #[test]
    fn test_info() {
        assert_eq!(TraceDecoder::info().id, "uart_trace");
    }
}
