//! Line accumulation core for the UART trace decoder
//!
//! This crate turns decoded UART frames into lines of text, the way a serial
//! terminal would show them:
//!
//! - Separator configuration (CR, LF, CR+LF, LF+CR)
//! - Decoder options from TOML or host key/value pairs
//! - Byte formatting (printable ASCII as-is, everything else as `<XX>`)
//! - Per-direction line accumulator state machine
//! - Two-direction decoder and the traits connecting it to a host

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod config;
pub mod decoder;
pub mod line;
pub mod traits;

pub use config::{ConfigError, DecoderOptions, LineSeparator, SeparatorConfig};
pub use decoder::TraceDecoder;
pub use line::{format_value, Annotation, LineAccumulator, LineEvent};
pub use traits::{AnnotationSink, LineDecoder, LineDecoderExt};
