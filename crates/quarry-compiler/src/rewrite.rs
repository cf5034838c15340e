//! Token rewriting: reconciling a classified term against the field
//! analyzer's tokenization.
//!
//! The authoring tokenizer and the field analyzer split text differently.
//! The rewriter merges the two views: it re-scans the term with a
//! delimiter-preserving tokenizer so wildcard markers survive, replaces
//! each word with what the analyzer makes of it, and picks the final node
//! shape from what is left: a single term, a phrase, or a proximity
//! chain. The input node is never mutated; carried-over attributes are
//! copied onto the freshly built replacement.

use quarry_core::tokenize::DelimiterTokenizer;
use quarry_core::{NodeKind, QueryNode};

use crate::analysis::Analyzer;
use crate::classify::classify;
use crate::proximity::build_proximity;
use crate::{Error, Result};

/// Wildcard markers plus whitespace: the boundaries the rewriter's scan
/// must preserve. `\u{000C}` is form feed.
const REWRITE_DELIMITERS: &str = "*?~ \r\n\t\u{000C}";

/// Rewrite `node` so its value reflects the field analyzer's tokenization
/// while preserving the author's wildcard, fuzzy, and proximity intent.
pub fn rewrite(node: &QueryNode, analyzer: &dyn Analyzer) -> Result<QueryNode> {
    // A fuzzy term keeps its marker semantics even if no marker survives
    // the scan below.
    let mut has_wildcards = node.kind == NodeKind::Fuzzy;

    // The escape-aware scan below must see the value exactly as authored:
    // an escaped marker stays shielded, a doubled backslash keeps its
    // active marker.
    let mut input = node.value.clone();
    if node.kind == NodeKind::Prefix {
        // The analyzer sees the same text the author intended as a prefix
        // boundary; the classifier stripped the marker at parse time.
        input.push('*');
    }

    let initial = analyzer.analyze(&node.fieldname, &input)?;
    let cnt = initial.len();
    if cnt == 0 {
        return Err(Error::AllTokensRemoved {
            fieldname: node.fieldname.clone(),
            input,
        });
    }

    let mut rewritten = String::new();
    let mut last_was_delimiter = false;
    let mut first = true;

    for token in DelimiterTokenizer::new(&input, REWRITE_DELIMITERS) {
        let token = token?;

        if token.is_delimiter {
            rewritten.push_str(&token.text);
            if !token.text.starts_with(|c: char| c.is_whitespace()) {
                // A literal wildcard or fuzzy marker survived into the
                // rewritten form.
                has_wildcards = true;
            }
            last_was_delimiter = true;
        } else {
            // The analyzer is queried per sub-token, not just once on the
            // whole value, so multi-word analyzer output is detected
            // token by token.
            let analyzed = analyzer.analyze(&node.fieldname, &token.text)?;
            if !last_was_delimiter && !first {
                rewritten.push(' ');
            }
            rewritten.push_str(&analyzed.join(" "));
            last_was_delimiter = false;
        }

        first = false;
    }

    let mut new_token = rewritten.trim().to_string();

    let mut rc = if !has_wildcards {
        if cnt <= 1 {
            let kind = if node.kind == NodeKind::Prefix {
                NodeKind::Prefix
            } else {
                NodeKind::Word
            };
            QueryNode {
                kind,
                value: new_token,
                ..QueryNode::default()
            }
        } else {
            // Phrases go through analysis again at match time, so keep
            // whatever the user provided rather than the rewritten form.
            QueryNode {
                kind: NodeKind::Phrase,
                value: node.value.clone(),
                ..QueryNode::default()
            }
        }
    } else {
        if node.kind == NodeKind::Fuzzy {
            new_token.push('~');
            if !node.ordered {
                new_token.push('!');
            }
            new_token.push_str(&node.fuzziness.to_string());
        }

        if cnt <= 1 {
            classify(&node.fieldname, node.operator, &new_token)?
        } else {
            let mut prox =
                build_proximity(&node.fieldname, new_token.split_whitespace(), 0, false)?;
            if prox.children.len() == 1 {
                prox.children.remove(0)
            } else {
                prox
            }
        }
    };

    rc.index_link = node.index_link.clone();
    rc.fieldname = node.fieldname.clone();
    rc.operator = node.operator;
    rc.fuzziness = node.fuzziness;
    rc.ordered = node.ordered;
    rc.distance = node.distance;
    rc.boost = node.boost;

    // Reclassification can re-derive a prefix whose value still carries
    // the marker; a stored prefix value never does.
    if rc.kind == NodeKind::Prefix && rc.value.ends_with('*') {
        rc.value.pop();
    }

    Ok(rc)
}
