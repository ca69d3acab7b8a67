//! Line accumulation
//!
//! Turns a stream of frame values into lines of text, one accumulator per
//! direction.

pub mod accumulator;
pub mod event;
pub mod format;

pub use accumulator::LineAccumulator;
pub use event::{Annotation, LineEvent};
pub use format::{format_value, is_printable, push_value};
