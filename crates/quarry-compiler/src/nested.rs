//! Nested-path consistency checking for WITH chains.
//!
//! A WITH chain scopes its terms to a single nested document, so every
//! leaf under the chain must report the same non-null nested path. The
//! checker walks the subtree, seeds the expected path from the first leaf
//! it sees, and fails fast on the first disagreement.

use quarry_core::QueryNode;

use crate::{Error, Result};

/// Validate that all leaves under `node` share one nested path, returning
/// the unified path.
pub fn check_nested_path(node: &QueryNode) -> Result<String> {
    unify(node, None)?.ok_or(Error::MissingNestedPath)
}

fn unify(node: &QueryNode, mut expected: Option<String>) -> Result<Option<String>> {
    if !node.has_children() {
        return Ok(expected);
    }

    for child in &node.children {
        if expected.is_none() {
            expected = child.nested_path.clone();
        }

        if child.has_children() {
            expected = unify(child, expected)?;
        } else if let Some(path) = &expected {
            if child.nested_path.as_deref() != Some(path.as_str()) {
                return Err(Error::InconsistentNestedPath {
                    expected: path.clone(),
                    found: child.nested_path.clone(),
                });
            }
        }
    }

    match expected {
        Some(path) => Ok(Some(path)),
        None => Err(Error::MissingNestedPath),
    }
}
