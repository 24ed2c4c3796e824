//! Header normalization and column resolution.
//!
//! Uploaded sheets name the same semantic column in many ways (export tool,
//! language, diacritics, abbreviations). This crate turns labels into
//! comparable keys and resolves canonical fields to the real columns of one
//! file.

pub mod mapping;
pub mod normalize;
pub mod resolver;

pub use mapping::{ColumnMapping, ResolvedColumn};
pub use normalize::normalize_key;
pub use resolver::{ColumnMatch, ColumnResolver, MatchKind};
