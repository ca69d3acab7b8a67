//! Annotation classes and display rows
//!
//! Each direction has exactly one annotation class, and each class is shown
//! on its own row:
//! - `rx_txt` "Receive Text" on row `rx` "RX Trace"
//! - `tx_txt` "Transmit Text" on row `tx` "TX Trace"

use crate::events::Direction;

// Annotation class IDs
pub const ANN_RX_TEXT: &str = "rx_txt";
pub const ANN_TX_TEXT: &str = "tx_txt";

/// Annotation class of an emitted line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnnotationClass {
    /// Line received on RX
    RxText,
    /// Line sent on TX
    TxText,
}

impl AnnotationClass {
    /// All classes, in registration order
    pub const ALL: [AnnotationClass; 2] = [AnnotationClass::RxText, AnnotationClass::TxText];

    /// The class used for lines of the given direction
    pub const fn for_direction(direction: Direction) -> Self {
        match direction {
            Direction::Rx => AnnotationClass::RxText,
            Direction::Tx => AnnotationClass::TxText,
        }
    }

    /// Direction this class annotates
    pub const fn direction(self) -> Direction {
        match self {
            AnnotationClass::RxText => Direction::Rx,
            AnnotationClass::TxText => Direction::Tx,
        }
    }

    /// Registration index (position in [`AnnotationClass::ALL`])
    pub const fn index(self) -> usize {
        self.direction().index()
    }

    /// Short identifier
    pub const fn id(self) -> &'static str {
        match self {
            AnnotationClass::RxText => ANN_RX_TEXT,
            AnnotationClass::TxText => ANN_TX_TEXT,
        }
    }

    /// Human readable description
    pub const fn description(self) -> &'static str {
        match self {
            AnnotationClass::RxText => "Receive Text",
            AnnotationClass::TxText => "Transmit Text",
        }
    }

    /// Parse a class from its identifier
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            ANN_RX_TEXT => Some(AnnotationClass::RxText),
            ANN_TX_TEXT => Some(AnnotationClass::TxText),
            _ => None,
        }
    }
}

/// A display row grouping one or more annotation classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnnotationRow {
    pub id: &'static str,
    pub label: &'static str,
    pub classes: &'static [AnnotationClass],
}

/// Rows the host should create, in display order
pub const ANNOTATION_ROWS: [AnnotationRow; 2] = [
    AnnotationRow {
        id: "rx",
        label: "RX Trace",
        classes: &[AnnotationClass::RxText],
    },
    AnnotationRow {
        id: "tx",
        label: "TX Trace",
        classes: &[AnnotationClass::TxText],
    },
];

impl AnnotationRow {
    /// Find the row a class is displayed on
    pub fn for_class(class: AnnotationClass) -> Option<&'static AnnotationRow> {
        ANNOTATION_ROWS.iter().find(|row| row.classes.contains(&class))
    }
}
