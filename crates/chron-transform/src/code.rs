//! Export/import classification of free-text values.

use chron_model::{CellValue, Code};

/// Upper-cased value with everything but `A-Z0-9` removed.
fn code_token(raw: &str) -> String {
    raw.trim()
        .to_uppercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

fn match_spelling(token: &str) -> Option<Code> {
    match token {
        "EX" | "EXPORT" | "EKSPORT" => Some(Code::Ex),
        "IM" | "IMPORT" | "IMPORTI" => Some(Code::Im),
        _ if token.starts_with("EXP") => Some(Code::Ex),
        _ if token.starts_with("IMP") => Some(Code::Im),
        _ => None,
    }
}

/// Parses a requested report mode; anything unrecognized means export.
pub fn parse_requested_mode(raw: &str) -> Code {
    match_spelling(&code_token(raw)).unwrap_or(Code::Ex)
}

/// Classifies free text; `None` when it names neither category.
pub fn classify_text(raw: &str) -> Option<Code> {
    let token = code_token(raw);
    if token.is_empty() {
        return None;
    }
    match_spelling(&token)
}

/// Classifies a declaration-type cell.
///
/// Unlike [`parse_requested_mode`] there is no default: a cell that names
/// neither category yields `None` and its row is excluded.
pub fn classify_cell(value: &CellValue) -> Option<Code> {
    classify_text(&value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requested_mode_spellings() {
        assert_eq!(parse_requested_mode("export"), Code::Ex);
        assert_eq!(parse_requested_mode("EKSPORT"), Code::Ex);
        assert_eq!(parse_requested_mode("exp"), Code::Ex);
        assert_eq!(parse_requested_mode(" Ex. "), Code::Ex);
        assert_eq!(parse_requested_mode("importi"), Code::Im);
        assert_eq!(parse_requested_mode("IMPORT"), Code::Im);
        assert_eq!(parse_requested_mode("im"), Code::Im);
    }

    #[test]
    fn requested_mode_defaults_to_export() {
        assert_eq!(parse_requested_mode(""), Code::Ex);
        assert_eq!(parse_requested_mode("transit"), Code::Ex);
    }

    #[test]
    fn cell_classification() {
        assert_eq!(classify_cell(&CellValue::text("EX")), Some(Code::Ex));
        assert_eq!(classify_cell(&CellValue::text("im")), Some(Code::Im));
        assert_eq!(classify_cell(&CellValue::text("Export (EX)")), Some(Code::Ex));
        assert_eq!(classify_cell(&CellValue::text("IMP-4000")), Some(Code::Im));
    }

    #[test]
    fn unrecognized_cells_are_unclassified() {
        assert_eq!(classify_cell(&CellValue::text("")), None);
        assert_eq!(classify_cell(&CellValue::Blank), None);
        assert_eq!(classify_cell(&CellValue::text("XYZ")), None);
        assert_eq!(classify_cell(&CellValue::text("EX 1")), None);
        assert_eq!(classify_cell(&CellValue::Number(40.0)), None);
    }
}
