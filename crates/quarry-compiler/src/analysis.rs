//! Seams to the external text-analysis and field-metadata services.
//!
//! The engine itself never talks to a network; callers hand it an
//! [`Analyzer`] and it issues one call for the whole input plus one per
//! sub-token. Both traits are object-safe so service-backed and in-memory
//! implementations interchange freely.

use quarry_core::IndexLink;

use crate::Result;

/// The analyzer identifier used when field metadata names none.
pub const DEFAULT_ANALYZER: &str = "exact";

/// The field-specific text-analysis service.
///
/// `analyze` must be deterministic for a fixed field/analyzer binding and
/// return the analyzer's tokens in stream order. Implementations wrap
/// transport failures as [`Error::AnalysisService`](crate::Error);
/// memoizing responses is fine since the call is modeled as a pure
/// function of `(fieldname, text)`.
pub trait Analyzer {
    fn analyze(&self, fieldname: &str, text: &str) -> Result<Vec<String>>;
}

/// Any `Fn(fieldname, text) -> Result<Vec<String>>` is an analyzer. Keeps
/// the identity analyzer and table-driven fakes a one-liner.
impl<F> Analyzer for F
where
    F: Fn(&str, &str) -> Result<Vec<String>>,
{
    fn analyze(&self, fieldname: &str, text: &str) -> Result<Vec<String>> {
        self(fieldname, text)
    }
}

/// Per-field metadata lookup.
pub trait FieldLookup {
    /// The analyzer configured for `fieldname`, if any.
    fn analyzer_of(&self, fieldname: &str) -> Option<String>;

    /// The nested-document scope `fieldname` lives in, if any.
    fn nested_path_of(&self, fieldname: &str) -> Option<String>;

    /// The index binding for `fieldname`.
    fn index_link_of(&self, fieldname: &str) -> Option<IndexLink>;

    /// The analyzer for `fieldname`, falling back to [`DEFAULT_ANALYZER`].
    fn analyzer_for(&self, fieldname: &str) -> String {
        self.analyzer_of(fieldname)
            .unwrap_or_else(|| DEFAULT_ANALYZER.to_string())
    }
}
