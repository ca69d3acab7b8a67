//! Decoder and output traits
//!
//! These traits define the seams between the line decoder, the upstream
//! UART decoder feeding it and the host receiving its annotations.

pub mod decoder;
pub mod sink;

pub use decoder::{LineDecoder, LineDecoderExt};
pub use sink::AnnotationSink;
