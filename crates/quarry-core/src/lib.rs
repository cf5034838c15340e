#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures and leaf text utilities for Quarry queries.
//!
//! Three pieces:
//! - [`ast`] - the query AST node model shared across the compiler
//! - [`escape`] - backslash escape codec and wildcard accounting
//! - [`tokenize`] - the lexical tokenizers used for query authoring

pub mod ast;
pub mod escape;
pub mod tokenize;

#[cfg(test)]
mod ast_tests;

pub use ast::{IndexLink, NodeKind, Operator, QueryNode};
pub use escape::EscapeError;
