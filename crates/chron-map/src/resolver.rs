//! Alias-based column resolution.
//!
//! A resolver is built once per file over every label observed in its rows
//! and answers "which real column is this canonical field?" using an exact
//! pass over normalized keys, then a bidirectional substring pass.

use std::collections::HashMap;

use chron_model::ParsedRow;

use crate::normalize::normalize_key;

/// How a column was matched to an alias list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Normalized alias equals the normalized label.
    Exact,
    /// One normalized form contains the other.
    Fuzzy,
}

impl MatchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Fuzzy => "fuzzy",
        }
    }
}

/// A resolved column label and how it was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMatch<'a> {
    pub column: &'a str,
    pub kind: MatchKind,
}

/// Column resolver closed over one file's column labels.
#[derive(Debug, Clone, Default)]
pub struct ColumnResolver {
    /// (normalized key, original label) in first-seen key order.
    entries: Vec<(String, String)>,
    by_key: HashMap<String, usize>,
}

impl ColumnResolver {
    /// Collects labels from every row, not only the first.
    ///
    /// When several labels share a normalized key the last one seen wins;
    /// the key keeps its first-seen position.
    pub fn build(rows: &[ParsedRow]) -> Self {
        let mut resolver = Self::default();
        for row in rows {
            for label in row.labels() {
                resolver.add_label(label);
            }
        }
        resolver
    }

    /// Builds a resolver from a plain list of header labels.
    pub fn from_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let mut resolver = Self::default();
        for label in labels {
            resolver.add_label(label);
        }
        resolver
    }

    fn add_label(&mut self, label: &str) {
        let key = normalize_key(label);
        match self.by_key.get(&key) {
            Some(&idx) => {
                if self.entries[idx].1 != label {
                    self.entries[idx].1 = label.to_string();
                }
            }
            None => {
                self.by_key.insert(key.clone(), self.entries.len());
                self.entries.push((key, label.to_string()));
            }
        }
    }

    /// Number of distinct normalized labels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves an alias list to a real column label.
    pub fn resolve(&self, aliases: &[&str]) -> Option<&str> {
        self.resolve_match(aliases).map(|found| found.column)
    }

    /// Resolves an alias list and reports whether the hit was exact or fuzzy.
    ///
    /// The exact pass tries every alias before any fuzzy comparison, so a
    /// lower-priority exact alias beats a higher-priority fuzzy one.
    pub fn resolve_match(&self, aliases: &[&str]) -> Option<ColumnMatch<'_>> {
        let keys: Vec<String> = aliases.iter().map(|alias| normalize_key(alias)).collect();

        for key in &keys {
            if let Some(&idx) = self.by_key.get(key) {
                return Some(ColumnMatch {
                    column: &self.entries[idx].1,
                    kind: MatchKind::Exact,
                });
            }
        }

        for key in &keys {
            // An empty key is a substring of every other key.
            let hit = self.entries.iter().find(|(label_key, _)| {
                    label_key.contains(key.as_str()) || key.contains(label_key.as_str())
                });
            if let Some((_, original)) = hit {
                return Some(ColumnMatch {
                    column: original,
                    kind: MatchKind::Fuzzy,
                });
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use chron_model::CellValue;

    use super::*;

    fn header_row(labels: &[&str]) -> ParsedRow {
        labels
            .iter()
            .map(|label| (*label, CellValue::Blank))
            .collect()
    }

    #[test]
    fn exact_match_returns_original_label() {
        let resolver = ColumnResolver::build(&[header_row(&["Numri R", "Numri R i vjeter"])]);
        let found = resolver.resolve_match(&["Numri R"]).expect("resolved");
        assert_eq!(found.column, "Numri R");
        assert_eq!(found.kind, MatchKind::Exact);
    }

    #[test]
    fn exact_match_ignores_case_and_separators() {
        let resolver = ColumnResolver::build(&[header_row(&["LLOJI-DAV", "Other"])]);
        assert_eq!(resolver.resolve(&["Lloji DAV"]), Some("LLOJI-DAV"));
    }

    #[test]
    fn later_exact_alias_beats_earlier_fuzzy_alias() {
        let resolver = ColumnResolver::build(&[header_row(&["Tar Sup Qty1 SUM x", "Tar Sup Qty1"])]);
        let found = resolver
            .resolve_match(&["Tar Sup Qty1 SUM", "Tar Sup Qty1"])
            .expect("resolved");
        assert_eq!(found.column, "Tar Sup Qty1");
        assert_eq!(found.kind, MatchKind::Exact);
    }

    #[test]
    fn fuzzy_match_uses_substring_both_ways() {
        let resolver = ColumnResolver::build(&[header_row(&["transp i brend ne leke"])]);
        let found = resolver
            .resolve_match(&["transp i brend", "Transp brend ne leke"])
            .expect("resolved");
        assert_eq!(found.column, "transp i brend ne leke");
        assert_eq!(found.kind, MatchKind::Fuzzy);

        let resolver = ColumnResolver::build(&[header_row(&["Gds"])]);
        assert_eq!(resolver.resolve(&["Gds Ds3"]), Some("Gds"));
    }

    #[test]
    fn unions_labels_across_rows() {
        let resolver = ColumnResolver::build(&[header_row(&["A"]), header_row(&["B"])]);
        assert_eq!(resolver.len(), 2);
        assert_eq!(resolver.resolve(&["b"]), Some("B"));
    }

    #[test]
    fn duplicate_keys_keep_last_label() {
        let resolver = ColumnResolver::from_labels(["Vlera e Fatures", "VLERA E FATURES"]);
        assert_eq!(resolver.len(), 1);
        assert_eq!(resolver.resolve(&["Vlera e Fatures"]), Some("VLERA E FATURES"));
    }

    #[test]
    fn separator_only_label_matches_any_unresolved_alias() {
        let resolver = ColumnResolver::from_labels(["-", "Other"]);
        let found = resolver.resolve_match(&["Numri R"]).expect("resolved");
        assert_eq!(found.column, "-");
        assert_eq!(found.kind, MatchKind::Fuzzy);

        // Exact hits still take precedence over the empty key.
        let resolver = ColumnResolver::from_labels(["()", "Numri R"]);
        assert_eq!(resolver.resolve(&["Numri R"]), Some("Numri R"));
    }

    #[test]
    fn unresolved_alias_list_is_absent() {
        let resolver = ColumnResolver::from_labels(["Alpha", "Beta"]);
        assert_eq!(resolver.resolve(&["Pesha neto kg"]), None);
        assert!(ColumnResolver::default().resolve(&["x"]).is_none());
    }
}
