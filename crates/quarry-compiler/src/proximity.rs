//! Proximity chain construction.
//!
//! A proximity node requires its child terms to occur within `distance`
//! tokens of one another, in order when `ordered` is set. Child order is
//! semantically meaningful: it encodes token adjacency.

use quarry_core::tokenize::simple_tokenize;
use quarry_core::{NodeKind, Operator, QueryNode};

use crate::classify::classify;
use crate::Result;

/// Build a proximity chain over `tokens`, classifying each token with
/// operator `Contains` and appending the children in input order.
///
/// An empty token sequence yields a proximity node with no children; the
/// builder stays total and callers reject non-matchable chains upstream.
pub fn build_proximity<I, S>(
    fieldname: &str,
    tokens: I,
    distance: u32,
    ordered: bool,
) -> Result<QueryNode>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut prox = QueryNode::leaf(NodeKind::Proximity, fieldname, Operator::Contains, "");
    prox.distance = distance;
    prox.ordered = ordered;

    for token in tokens {
        prox.children
            .push(classify(fieldname, Operator::Contains, token.as_ref())?);
    }

    Ok(prox)
}

/// Re-express a phrase as a distance-0 proximity chain over its simple
/// tokenization. The phrase's field binding is preserved; its tokens become
/// the children.
pub fn phrase_to_proximity(phrase: &QueryNode) -> Result<QueryNode> {
    build_proximity(
        &phrase.fieldname,
        simple_tokenize(&phrase.value),
        0,
        false,
    )
}
