//! Decoder options
//!
//! Options arrive either as a TOML snippet or as key/value pairs handed over
//! by the host. Only `line_separator` is recognised:
//!
//! ```toml
//! line_separator = "CR + LF"
//! ```

use core::fmt;

use serde::Deserialize;
use uartrace_protocol::metadata::OPT_LINE_SEPARATOR;

use super::separator::{LineSeparator, SeparatorConfig};

/// Errors that can occur while applying options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Input is not valid TOML, or contains keys other than the known options
    Parse,
    /// Key/value option with an unknown key
    UnknownOption,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse => f.write_str("invalid decoder options"),
            ConfigError::UnknownOption => f.write_str("unknown decoder option"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// User-selected decoder options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default, deny_unknown_fields)]
pub struct DecoderOptions {
    /// Line ending that terminates a trace line
    pub line_separator: LineSeparator,
}

impl DecoderOptions {
    /// Options with the given line ending
    pub const fn new(line_separator: LineSeparator) -> Self {
        Self { line_separator }
    }

    /// Parse options from a TOML document
    ///
    /// Missing keys keep their defaults.
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        toml::from_str(input).map_err(|_| ConfigError::Parse)
    }

    /// Apply a single key/value option
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            OPT_LINE_SEPARATOR => {
                self.line_separator = LineSeparator::from_label(value);
                Ok(())
            }
            _ => Err(ConfigError::UnknownOption),
        }
    }

    /// Build options from key/value pairs
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut options = Self::default();
        for (key, value) in pairs {
            options.set(key, value)?;
        }
        Ok(options)
    }

    /// Resolve the separator byte sequence
    pub fn separator(&self) -> SeparatorConfig {
        SeparatorConfig::from_mode(self.line_separator)
    }
}
