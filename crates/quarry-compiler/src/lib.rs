#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Term normalization and query rewriting for Quarry queries.
//!
//! This crate turns raw field-bound query fragments into AST nodes and
//! reconciles user-authored terms against a field analyzer's actual
//! tokenization:
//! - `classify` - wildcard/fuzzy term classification
//! - `proximity` - proximity chain construction
//! - `arrays` - array-literal extraction ahead of grammar parsing
//! - `nested` - nested-path consistency checking for WITH chains
//! - `analysis` - the external analyzer and field-metadata seams
//! - `rewrite` - the rewriting orchestrator
//!
//! Every entry point is a pure synchronous function over borrowed input;
//! the only blocking work happens inside a caller-supplied [`Analyzer`].

use quarry_core::EscapeError;

pub mod analysis;
pub mod arrays;
pub mod classify;
pub mod nested;
pub mod proximity;
pub mod rewrite;

#[cfg(test)]
mod arrays_tests;
#[cfg(test)]
mod proximity_tests;
#[cfg(test)]
pub mod test_utils;

pub use analysis::{Analyzer, FieldLookup};
pub use arrays::extract_arrays;
pub use classify::{classify, classify_bound};
pub use nested::check_nested_path;
pub use proximity::{build_proximity, phrase_to_proximity};
pub use rewrite::rewrite;

/// Errors that can occur while normalizing or rewriting a term.
///
/// All of these are unrecoverable at this layer: the enclosing query
/// compilation aborts and no partial AST is returned.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A value ended in a lone backslash.
    #[error(transparent)]
    MalformedEscape(#[from] EscapeError),

    /// The analyzer discarded every token of a non-empty input.
    #[error("all tokens removed from input `{input}` for field `{fieldname}`")]
    AllTokensRemoved { fieldname: String, input: String },

    /// A fuzziness digit group survived the classifier's regex gate but
    /// failed to parse (e.g. it overflows the edit-distance type).
    #[error("unable to determine fuzziness of `{0}`")]
    MalformedFuzziness(String),

    /// A logic defect, not a user error: an invariant the code relies on
    /// was observed broken.
    #[error("internal invariant violated: {0}")]
    InternalInvariant(&'static str),

    /// A WITH chain mixes leaves from different nested scopes.
    #[error(
        "WITH chain must all belong to the same nested object \
         (expected `{expected}`, found {found:?})"
    )]
    InconsistentNestedPath {
        expected: String,
        found: Option<String>,
    },

    /// A WITH chain belongs to no nested scope at all.
    #[error("WITH chain must all belong to a nested object")]
    MissingNestedPath,

    /// The external text-analysis service failed.
    #[error("text analysis failed for field `{fieldname}`")]
    AnalysisService {
        fieldname: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for term normalization and rewriting.
pub type Result<T> = std::result::Result<T, Error>;
