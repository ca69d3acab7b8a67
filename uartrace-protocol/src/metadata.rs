//! Decoder registration metadata
//!
//! Static description the host uses to list the decoder, wire it behind a
//! UART decoder and build its option form.

use crate::annotations::{AnnotationClass, AnnotationRow, ANNOTATION_ROWS};

/// Option ID for the line separator
pub const OPT_LINE_SEPARATOR: &str = "line_separator";

/// User-facing option descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OptionInfo {
    pub id: &'static str,
    pub description: &'static str,
    pub default: &'static str,
    /// Closed set of accepted values
    pub values: &'static [&'static str],
}

impl OptionInfo {
    /// Check whether a value belongs to the option's closed set
    pub fn accepts(&self, value: &str) -> bool {
        self.values.iter().any(|v| *v == value)
    }
}

/// Registration metadata for a decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecoderInfo {
    pub api_version: u8,
    pub id: &'static str,
    pub name: &'static str,
    pub long_name: &'static str,
    pub description: &'static str,
    pub license: &'static str,
    pub inputs: &'static [&'static str],
    pub outputs: &'static [&'static str],
    pub tags: &'static [&'static str],
    pub annotations: &'static [AnnotationClass],
    pub annotation_rows: &'static [AnnotationRow],
    pub options: &'static [OptionInfo],
}

impl DecoderInfo {
    /// Look up an option by ID
    pub fn option(&self, id: &str) -> Option<&OptionInfo> {
        self.options.iter().find(|opt| opt.id == id)
    }
}

/// Metadata of the UART line trace decoder
pub const DECODER_INFO: DecoderInfo = DecoderInfo {
    api_version: 3,
    id: "uart_trace",
    name: "Uart Trace",
    long_name: "Uart Tracing",
    description: "Collect Bytes to strings",
    license: "gplv3+",
    inputs: &["uart"],
    outputs: &[],
    tags: &["Util"],
    annotations: &AnnotationClass::ALL,
    annotation_rows: &ANNOTATION_ROWS,
    options: &[OptionInfo {
        id: OPT_LINE_SEPARATOR,
        description: "Line Separator",
        default: "CR + LF",
        values: &["CR + LF", "Carriage Return", "Line Feed", "LF + CR"],
    }],
};
