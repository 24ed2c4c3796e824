//! Scalar cell values as read from a sheet.

use std::fmt;

use serde::{Serialize, Serializer};

/// A single scalar cell: blank, text, or number.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Blank,
    Text(String),
    Number(f64),
}

/// Raw cell grid with no header assumed.
pub type RawGrid = Vec<Vec<CellValue>>;

impl CellValue {
    /// Builds a text cell; empty input stays text so that it round-trips.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// True when the stringified value is empty after trimming.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Blank => true,
            Self::Text(value) => value.trim().is_empty(),
            Self::Number(_) => false,
        }
    }

    /// Borrowed text when the cell already holds a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => Ok(()),
            Self::Text(value) => f.write_str(value),
            // f64 Display already drops a zero fraction ("12", not "12.0").
            Self::Number(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Blank => serializer.serialize_str(""),
            Self::Text(value) => serializer.serialize_str(value),
            Self::Number(value) => serializer.serialize_f64(*value),
        }
    }
}
