//! Query AST node model.
//!
//! Every node carries the same attribute set; the active variant is selected
//! by a closed [`NodeKind`] sum type so that consumers dispatch with an
//! exhaustive `match` instead of runtime type tests. Rewriting never switches
//! a node's variant in place: a new node is constructed and the carried-over
//! attributes are copied onto it explicitly.

use serde::{Deserialize, Serialize};

/// Comparison operator a leaf term was authored with.
///
/// Carried through classification and rewriting unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Operator {
    #[default]
    Contains,
    Eq,
    Ne,
    Lt,
    Gt,
    Lte,
    Gte,
    Regex,
}

/// Opaque reference to the index (or nested-index context) a leaf binds to.
///
/// The compiler core never inspects the content; it only copies the link
/// from an input node onto its rewritten replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexLink(String);

impl IndexLink {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The active variant of a [`QueryNode`].
///
/// `With` is produced by the surrounding grammar, not by this engine; it
/// appears here so the nested-path checker can walk grouping subtrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Plain word match.
    Word,
    /// General wildcard match (`*` / `?` anywhere in the value).
    Wildcard,
    /// Prefix match; the trailing `*` is stripped from the stored value.
    Prefix,
    /// Edit-distance match; `fuzziness` holds the distance, 0 = default.
    Fuzzy,
    /// "Field has any value at this position" (value was all wildcards).
    NotNull,
    /// Quoted phrase, re-analyzed at match time.
    Phrase,
    /// Ordered or unordered chain of child terms within `distance` tokens.
    Proximity,
    /// Nested-scope grouping chain (grammar-produced, consumed here only by
    /// the nested-path checker).
    With,
}

/// A node of the query AST.
///
/// `children` is non-empty only for `Proximity` and `With` nodes, and a
/// parent exclusively owns its children. `value` may still contain
/// backslash escapes as authored; components unescape at their boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryNode {
    pub kind: NodeKind,
    pub fieldname: String,
    pub value: String,
    pub operator: Operator,
    /// Edit distance for `Fuzzy`; 0 means the default distance.
    pub fuzziness: u32,
    /// Term-order sensitivity for `Proximity`.
    pub ordered: bool,
    /// Maximum token gap for `Proximity`.
    pub distance: u32,
    pub boost: f32,
    pub index_link: Option<IndexLink>,
    pub nested_path: Option<String>,
    pub children: Vec<QueryNode>,
}

impl Default for QueryNode {
    fn default() -> Self {
        Self {
            kind: NodeKind::Word,
            fieldname: String::new(),
            value: String::new(),
            operator: Operator::Contains,
            fuzziness: 0,
            ordered: true,
            distance: 0,
            boost: 1.0,
            index_link: None,
            nested_path: None,
            children: Vec::new(),
        }
    }
}

impl QueryNode {
    /// A childless leaf of the given variant, bound to a field.
    pub fn leaf(
        kind: NodeKind,
        fieldname: impl Into<String>,
        operator: Operator,
        value: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            fieldname: fieldname.into(),
            value: value.into(),
            operator,
            ..Self::default()
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}
