//! Configuration types
//!
//! Options are resolved once per session; the resulting separator is
//! immutable for the rest of the session.

pub mod options;
pub mod separator;

pub use options::*;
pub use separator::*;
