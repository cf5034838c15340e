//! Shared fakes for classifier and rewriter tests.

use std::collections::HashMap;

use quarry_core::IndexLink;

use crate::analysis::{Analyzer, FieldLookup};
use crate::Result;

/// Analyzer that returns its input unchanged as a single token.
pub fn identity_analyzer() -> impl Analyzer {
    |_fieldname: &str, text: &str| -> Result<Vec<String>> { Ok(vec![text.to_string()]) }
}

/// Analyzer that discards everything, whatever the input.
pub fn removes_everything() -> impl Analyzer {
    |_fieldname: &str, _text: &str| -> Result<Vec<String>> { Ok(Vec::new()) }
}

/// Table-driven analyzer. Exact-text responses come from the table;
/// anything absent falls back to lowercased whitespace tokens, which is
/// close enough to a standard analyzer for these tests.
#[derive(Default)]
pub struct TableAnalyzer {
    responses: HashMap<String, Vec<String>>,
}

impl TableAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, text: &str, tokens: &[&str]) -> Self {
        self.responses
            .insert(text.to_string(), tokens.iter().map(|t| t.to_string()).collect());
        self
    }
}

impl Analyzer for TableAnalyzer {
    fn analyze(&self, _fieldname: &str, text: &str) -> Result<Vec<String>> {
        if let Some(tokens) = self.responses.get(text) {
            return Ok(tokens.clone());
        }
        Ok(text.split_whitespace().map(str::to_lowercase).collect())
    }
}

/// Field metadata table.
#[derive(Default)]
pub struct TestFields {
    pub analyzers: HashMap<String, String>,
    pub nested: HashMap<String, String>,
    pub links: HashMap<String, IndexLink>,
}

impl FieldLookup for TestFields {
    fn analyzer_of(&self, fieldname: &str) -> Option<String> {
        self.analyzers.get(fieldname).cloned()
    }

    fn nested_path_of(&self, fieldname: &str) -> Option<String> {
        self.nested.get(fieldname).cloned()
    }

    fn index_link_of(&self, fieldname: &str) -> Option<IndexLink> {
        self.links.get(fieldname).cloned()
    }
}
