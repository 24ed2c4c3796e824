use std::collections::BTreeMap;

use chron_model::{CanonicalField, CellValue, ParsedRow};
use tracing::{debug, warn};

use crate::resolver::{ColumnResolver, MatchKind};

/// A field resolved to a real column of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
    pub column: String,
    pub kind: MatchKind,
}

/// Canonical field to column label, for one file only.
#[derive(Debug, Clone, Default)]
pub struct ColumnMapping {
    columns: BTreeMap<CanonicalField, ResolvedColumn>,
    unresolved: Vec<CanonicalField>,
}

impl ColumnMapping {
    /// Resolves each field once against `resolver`.
    pub fn build(resolver: &ColumnResolver, fields: &[CanonicalField]) -> Self {
        let mut mapping = Self::default();
        for &field in fields {
            match resolver.resolve_match(field.aliases()) {
                Some(found) => {
                    debug!(
                        field = field.id(),
                        column = found.column,
                        kind = found.kind.as_str(),
                        "resolved column"
                    );
                    mapping.columns.insert(
                        field,
                        ResolvedColumn {
                            column: found.column.to_string(),
                            kind: found.kind,
                        },
                    );
                }
                None => mapping.unresolved.push(field),
            }
        }
        if !mapping.unresolved.is_empty() {
            let ids: Vec<&str> = mapping.unresolved.iter().map(|f| f.id()).collect();
            warn!(fields = ?ids, "columns not found; values will be empty");
        }
        mapping
    }

    /// Resolves every canonical field over the labels of `rows`.
    pub fn for_rows(rows: &[ParsedRow]) -> Self {
        Self::build(&ColumnResolver::build(rows), &CanonicalField::ALL)
    }

    pub fn column(&self, field: CanonicalField) -> Option<&str> {
        self.columns.get(&field).map(|resolved| resolved.column.as_str())
    }

    pub fn resolved(&self, field: CanonicalField) -> Option<&ResolvedColumn> {
        self.columns.get(&field)
    }

    pub fn unresolved(&self) -> &[CanonicalField] {
        &self.unresolved
    }

    /// Value of `field` in `row`; blank when the field or cell is missing.
    pub fn value(&self, row: &ParsedRow, field: CanonicalField) -> CellValue {
        self.column(field)
            .and_then(|column| row.get(column))
            .cloned()
            .unwrap_or_default()
    }
}
