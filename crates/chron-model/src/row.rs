use crate::cell::CellValue;

/// One data row keyed by header label, in original column order.
///
/// Labels are unique: inserting an existing label replaces its value and
/// keeps the position of the first insertion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedRow {
    cells: Vec<(String, CellValue)>,
}

impl ParsedRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, label: impl Into<String>, value: CellValue) {
        let label = label.into();
        if let Some(slot) = self.cells.iter_mut().find(|(existing, _)| *existing == label) {
            slot.1 = value;
        } else {
            self.cells.push((label, value));
        }
    }

    pub fn get(&self, label: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, value)| value)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(label, _)| label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(label, value)| (label.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True when at least one cell is non-empty after trimming.
    pub fn has_data(&self) -> bool {
        self.cells.iter().any(|(_, value)| !value.is_empty())
    }
}

impl<L: Into<String>> FromIterator<(L, CellValue)> for ParsedRow {
    fn from_iter<I: IntoIterator<Item = (L, CellValue)>>(iter: I) -> Self {
        let mut row = Self::new();
        for (label, value) in iter {
            row.insert(label, value);
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_first_position() {
        let mut row = ParsedRow::new();
        row.insert("A", CellValue::text("1"));
        row.insert("B", CellValue::text("2"));
        row.insert("A", CellValue::text("3"));

        let labels: Vec<&str> = row.labels().collect();
        assert_eq!(labels, vec!["A", "B"]);
        assert_eq!(row.get("A"), Some(&CellValue::text("3")));
        assert_eq!(row.get("C"), None);
    }

    #[test]
    fn has_data_requires_a_non_blank_cell() {
        let blank: ParsedRow = [("A", CellValue::Blank), ("B", CellValue::text("  "))]
            .into_iter()
            .collect();
        assert!(!blank.has_data());

        let filled: ParsedRow = [("A", CellValue::Blank), ("B", CellValue::Number(0.0))]
            .into_iter()
            .collect();
        assert!(filled.has_data());
    }
}
