use quarry_core::{NodeKind, Operator, QueryNode};

use crate::proximity::{build_proximity, phrase_to_proximity};

#[test]
fn children_keep_input_order() {
    let prox = build_proximity("f", ["quick", "brown", "fox"], 0, false).unwrap();

    assert_eq!(prox.kind, NodeKind::Proximity);
    assert_eq!(prox.fieldname, "f");
    assert_eq!(prox.distance, 0);
    assert!(!prox.ordered);

    let values: Vec<&str> = prox.children.iter().map(|c| c.value.as_str()).collect();
    assert_eq!(values, ["quick", "brown", "fox"]);
    assert!(prox.children.iter().all(|c| c.kind == NodeKind::Word));
    assert!(prox
        .children
        .iter()
        .all(|c| c.fieldname == "f" && c.operator == Operator::Contains));
}

#[test]
fn tokens_are_classified_not_copied() {
    let prox = build_proximity("f", ["qui*", "fox~1"], 2, true).unwrap();

    assert_eq!(prox.distance, 2);
    assert!(prox.ordered);
    assert_eq!(prox.children[0].kind, NodeKind::Prefix);
    assert_eq!(prox.children[0].value, "qui");
    assert_eq!(prox.children[1].kind, NodeKind::Fuzzy);
    assert_eq!(prox.children[1].fuzziness, 1);
}

#[test]
fn empty_token_sequence_builds_an_empty_chain() {
    let prox = build_proximity("f", std::iter::empty::<&str>(), 0, false).unwrap();
    assert_eq!(prox.kind, NodeKind::Proximity);
    assert!(prox.children.is_empty());
}

#[test]
fn phrase_becomes_a_distance_zero_chain() {
    let phrase = QueryNode::leaf(
        NodeKind::Phrase,
        "body",
        Operator::Contains,
        "quick, brown fox",
    );
    let prox = phrase_to_proximity(&phrase).unwrap();

    assert_eq!(prox.kind, NodeKind::Proximity);
    assert_eq!(prox.fieldname, "body");
    assert_eq!(prox.distance, 0);
    let values: Vec<&str> = prox.children.iter().map(|c| c.value.as_str()).collect();
    assert_eq!(values, ["quick", "brown", "fox"]);
}
