//! Events delivered by the upstream UART decoder
//!
//! Packet kinds:
//! - `StartBit`, `ParityBit`, `StopBit`: the (integer) bit value
//! - `Data`: the frame's data value, 0-511 (up to 9 data bits)
//! - `InvalidStartBit`, `InvalidStopBit`: the offending bit value
//! - `ParityError`: expected and actual parity
//! - `Break`: line held low for longer than a frame
//! - `Frame`: data value plus a flag for whether the whole frame was well-formed

/// Largest value a UART frame can carry (9 data bits)
pub const MAX_FRAME_VALUE: u16 = 511;

/// Line direction, as tagged by the upstream decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Receive line
    Rx,
    /// Transmit line
    Tx,
}

impl Direction {
    /// Both directions, in channel order
    pub const ALL: [Direction; 2] = [Direction::Rx, Direction::Tx];

    /// Channel index used by the upstream decoder (RX = 0, TX = 1)
    pub const fn index(self) -> usize {
        match self {
            Direction::Rx => 0,
            Direction::Tx => 1,
        }
    }

    /// Parse a channel index
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Direction::Rx),
            1 => Some(Direction::Tx),
            _ => None,
        }
    }
}

/// Payload of a single upstream event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartPacket {
    StartBit(u8),
    Data(u16),
    ParityBit(u8),
    StopBit(u8),
    InvalidStartBit(u8),
    InvalidStopBit(u8),
    ParityError { expected: u8, actual: u8 },
    Break,
    /// A complete frame
    Frame { value: u16, valid: bool },
}

impl UartPacket {
    /// Upstream name of this packet kind
    pub fn kind(&self) -> &'static str {
        match self {
            UartPacket::StartBit(_) => "STARTBIT",
            UartPacket::Data(_) => "DATA",
            UartPacket::ParityBit(_) => "PARITYBIT",
            UartPacket::StopBit(_) => "STOPBIT",
            UartPacket::InvalidStartBit(_) => "INVALID STARTBIT",
            UartPacket::InvalidStopBit(_) => "INVALID STOPBIT",
            UartPacket::ParityError { .. } => "PARITY ERROR",
            UartPacket::Break => "BREAK",
            UartPacket::Frame { .. } => "FRAME",
        }
    }

    /// Returns true for complete frames
    pub fn is_frame(&self) -> bool {
        matches!(self, UartPacket::Frame { .. })
    }

    /// Returns true for packets that report a framing or parity problem
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            UartPacket::InvalidStartBit(_)
                | UartPacket::InvalidStopBit(_)
                | UartPacket::ParityError { .. }
                | UartPacket::Frame { valid: false, .. }
        )
    }
}

/// One event from the upstream decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartEvent {
    /// First sample of the event
    pub start: u64,
    /// Last sample of the event
    pub end: u64,
    pub direction: Direction,
    pub packet: UartPacket,
}

impl UartEvent {
    /// Create a new event
    pub const fn new(start: u64, end: u64, direction: Direction, packet: UartPacket) -> Self {
        Self {
            start,
            end,
            direction,
            packet,
        }
    }

    /// Create a frame event
    pub const fn frame(start: u64, end: u64, direction: Direction, value: u16, valid: bool) -> Self {
        Self::new(start, end, direction, UartPacket::Frame { value, valid })
    }

    /// The byte carried by this event, if it is a complete frame
    pub fn as_byte_event(&self) -> Option<ByteEvent> {
        match self.packet {
            UartPacket::Frame { value, valid } => Some(ByteEvent {
                start: self.start,
                end: self.end,
                direction: self.direction,
                value,
                valid,
            }),
            _ => None,
        }
    }
}

/// A decoded frame value with its position in the sample stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ByteEvent {
    pub start: u64,
    pub end: u64,
    pub direction: Direction,
    /// Frame value (0-511; larger values are passed through untouched)
    pub value: u16,
    /// Whether the enclosing frame was well-formed
    pub valid: bool,
}

impl ByteEvent {
    /// Create a valid byte event
    pub const fn new(start: u64, end: u64, direction: Direction, value: u16) -> Self {
        Self {
            start,
            end,
            direction,
            value,
            valid: true,
        }
    }

    /// Mark the frame as malformed
    pub const fn invalid(mut self) -> Self {
        self.valid = false;
        self
    }
}
