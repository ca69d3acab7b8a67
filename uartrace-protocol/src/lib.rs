//! UART trace event vocabulary
//!
//! This crate defines what flows into and out of the uartrace line decoder.
//! The upstream UART decoder delivers one [`UartEvent`] per decoded unit;
//! only complete frames carry a byte value the line decoder cares about.
//!
//! # Event flow
//!
//! ```text
//! ┌──────────────┐  UartEvent  ┌──────────────┐  Annotation   ┌──────┐
//! │ UART decoder │ ──────────► │ line decoder │ ────────────► │ host │
//! │ (upstream)   │ FRAME only  │ per RX / TX  │ rx_txt/tx_txt │      │
//! └──────────────┘             └──────────────┘               └──────┘
//! ```
//!
//! Output annotations are grouped into two display rows, "RX Trace" and
//! "TX Trace", one per [`Direction`].

#![no_std]
#![deny(unsafe_code)]

pub mod annotations;
pub mod events;
pub mod metadata;

pub use annotations::{AnnotationClass, AnnotationRow, ANNOTATION_ROWS};
pub use events::{ByteEvent, Direction, UartEvent, UartPacket, MAX_FRAME_VALUE};
pub use metadata::{DecoderInfo, OptionInfo, DECODER_INFO};
