use crate::ast::{IndexLink, NodeKind, Operator, QueryNode};

#[test]
fn leaf_sets_binding_and_defaults() {
    let node = QueryNode::leaf(NodeKind::Word, "title", Operator::Contains, "abc");
    assert_eq!(node.kind, NodeKind::Word);
    assert_eq!(node.fieldname, "title");
    assert_eq!(node.value, "abc");
    assert_eq!(node.fuzziness, 0);
    assert!(node.ordered);
    assert_eq!(node.distance, 0);
    assert_eq!(node.boost, 1.0);
    assert!(node.index_link.is_none());
    assert!(!node.has_children());
}

#[test]
fn index_link_is_opaque_but_comparable() {
    let a = IndexLink::new("docs.idx");
    let b = IndexLink::new("docs.idx");
    assert_eq!(a, b);
    assert_eq!(a.as_str(), "docs.idx");
}

#[test]
fn serde_round_trip_preserves_tree() {
    let mut prox = QueryNode::leaf(NodeKind::Proximity, "body", Operator::Contains, "");
    prox.distance = 3;
    prox.ordered = false;
    prox.children = vec![
        QueryNode::leaf(NodeKind::Word, "body", Operator::Contains, "quick"),
        QueryNode::leaf(NodeKind::Prefix, "body", Operator::Contains, "brow"),
    ];

    let json = serde_json::to_string(&prox).unwrap();
    let back: QueryNode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, prox);
}
