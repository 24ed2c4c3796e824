use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fields::{EXPORT_COLUMNS, IMPORT_COLUMNS, OutputColumn};

/// Declaration category: export or import.
///
/// Drives both row filtering and the output column set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Code {
    #[default]
    #[serde(rename = "EX")]
    Ex,
    #[serde(rename = "IM")]
    Im,
}

impl Code {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ex => "EX",
            Self::Im => "IM",
        }
    }

    /// Long form used for report sheet and file names.
    pub fn report_label(self) -> &'static str {
        match self {
            Self::Ex => "EXPORT",
            Self::Im => "IMPORT",
        }
    }

    /// Fixed output column order for this mode.
    pub fn output_columns(self) -> &'static [OutputColumn] {
        match self {
            Self::Ex => &EXPORT_COLUMNS,
            Self::Im => &IMPORT_COLUMNS,
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
