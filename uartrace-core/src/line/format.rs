//! Byte to text formatting
//!
//! Printable ASCII (0x20..=0x7E) is written as the character itself.
//! Everything else is written as uppercase hex in angle brackets, e.g.
//! `<0D>` for CR or `<1FF>` for a 9-bit value.

use alloc::string::String;
use core::fmt::Write;

/// First printable ASCII value (space)
pub const PRINTABLE_FIRST: u16 = 0x20;

/// Last printable ASCII value (tilde)
pub const PRINTABLE_LAST: u16 = 0x7E;

/// Check if a value is rendered as a plain character
pub fn is_printable(value: u16) -> bool {
    (PRINTABLE_FIRST..=PRINTABLE_LAST).contains(&value)
}

/// Append the text form of a value to `out`
pub fn push_value(out: &mut String, value: u16) {
    if is_printable(value) {
        out.push(char::from(value as u8));
    } else {
        // Writing into a String cannot fail
        let _ = write!(out, "<{:02X}>", value);
    }
}

/// Text form of a single value
pub fn format_value(value: u16) -> String {
    let mut out = String::new();
    push_value(&mut out, value);
    out
}
