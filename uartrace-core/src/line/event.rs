//! Completed line and annotation types

use alloc::string::String;

use uartrace_protocol::{AnnotationClass, Direction};

/// A line completed by the accumulator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEvent {
    /// Start of the first byte of the line
    pub start: u64,
    /// End of the last separator byte
    pub end: u64,
    pub direction: Direction,
    /// Formatted line content, separator excluded
    pub text: String,
}

impl LineEvent {
    /// Annotation class for this line's direction
    pub fn class(&self) -> AnnotationClass {
        AnnotationClass::for_direction(self.direction)
    }

    /// Convert into the annotation handed to the host
    pub fn into_annotation(self) -> Annotation {
        Annotation {
            start: self.start,
            end: self.end,
            class: AnnotationClass::for_direction(self.direction),
            text: self.text,
        }
    }
}

/// Annotation emitted to the host for a completed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub start: u64,
    pub end: u64,
    pub class: AnnotationClass,
    pub text: String,
}

impl From<LineEvent> for Annotation {
    fn from(line: LineEvent) -> Self {
        line.into_annotation()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LineEvent {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "{} {}..{} \"{=str}\"",
            self.direction,
            self.start,
            self.end,
            self.text.as_str()
        );
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Annotation {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "{} {}..{} \"{=str}\"",
            self.class,
            self.start,
            self.end,
            self.text.as_str()
        );
    }
}
