//! Line separator selection
//!
//! The user picks one of four line endings. It is resolved once per session
//! into the byte sequence that terminates a line.

use alloc::string::String;
use core::fmt;

use heapless::Vec;
use serde::Deserialize;

/// Carriage return
pub const CR: u8 = 0x0D;

/// Line feed
pub const LF: u8 = 0x0A;

/// Longest supported separator sequence
pub const MAX_SEPARATOR_LEN: usize = 2;

/// Line ending selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(from = "String")]
pub enum LineSeparator {
    /// CR followed by LF
    #[default]
    CrLf,
    /// CR only
    Cr,
    /// LF only
    Lf,
    /// LF followed by CR
    LfCr,
}

impl LineSeparator {
    /// All modes, in the order they are offered to the user
    pub const ALL: [LineSeparator; 4] = [
        LineSeparator::CrLf,
        LineSeparator::Cr,
        LineSeparator::Lf,
        LineSeparator::LfCr,
    ];

    /// User-facing label
    pub const fn label(self) -> &'static str {
        match self {
            LineSeparator::CrLf => "CR + LF",
            LineSeparator::Cr => "Carriage Return",
            LineSeparator::Lf => "Line Feed",
            LineSeparator::LfCr => "LF + CR",
        }
    }

    /// Resolve a user-facing label
    ///
    /// Labels outside the closed set fall back to `LF + CR`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Carriage Return" => LineSeparator::Cr,
            "Line Feed" => LineSeparator::Lf,
            "CR + LF" => LineSeparator::CrLf,
            _ => LineSeparator::LfCr,
        }
    }

    /// Bytes that terminate a line in this mode
    pub const fn bytes(self) -> &'static [u8] {
        match self {
            LineSeparator::Cr => &[CR],
            LineSeparator::Lf => &[LF],
            LineSeparator::CrLf => &[CR, LF],
            LineSeparator::LfCr => &[LF, CR],
        }
    }
}

impl From<String> for LineSeparator {
    fn from(label: String) -> Self {
        LineSeparator::from_label(&label)
    }
}

impl fmt::Display for LineSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolved separator byte sequence
///
/// Always holds one or two bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorConfig {
    sequence: Vec<u8, MAX_SEPARATOR_LEN>,
}

impl Default for SeparatorConfig {
    fn default() -> Self {
        Self::from_mode(LineSeparator::default())
    }
}

impl SeparatorConfig {
    /// Resolve the byte sequence for a line ending
    pub fn from_mode(mode: LineSeparator) -> Self {
        let mut sequence = Vec::new();
        // Every mode has at most MAX_SEPARATOR_LEN bytes
        let _ = sequence.extend_from_slice(mode.bytes());
        Self { sequence }
    }

    /// Build from raw bytes
    ///
    /// Returns `None` unless `bytes` holds one or two values.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.is_empty() {
            return None;
        }
        let sequence = Vec::from_slice(bytes).ok()?;
        Some(Self { sequence })
    }

    /// The separator bytes, in order
    pub fn as_slice(&self) -> &[u8] {
        &self.sequence
    }

    /// Number of bytes in the separator (1 or 2)
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Never true for a resolved separator
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// First separator byte
    pub fn first(&self) -> u8 {
        self.sequence[0]
    }

    /// Separator byte at a match position
    pub fn get(&self, index: usize) -> Option<u8> {
        self.sequence.get(index).copied()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SeparatorConfig {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Separator {=[u8]}", self.as_slice());
    }
}
