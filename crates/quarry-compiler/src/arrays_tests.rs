use crate::arrays::extract_arrays;

#[test]
fn single_array_is_replaced_by_a_placeholder() {
    let (text, arrays) = extract_arrays("a [[1,2,3]] b");
    assert_eq!(text, "a [[$0] b");
    assert_eq!(arrays.len(), 1);
    assert_eq!(arrays["$0"], "1,2,3");
}

#[test]
fn ordinals_follow_first_appearance() {
    let (text, arrays) = extract_arrays("x:[[a,b]] or y:[[c]]");
    assert_eq!(text, "x:[[$0] or y:[[$1]");
    let names: Vec<&str> = arrays.keys().map(String::as_str).collect();
    assert_eq!(names, ["$0", "$1"]);
    assert_eq!(arrays["$0"], "a,b");
    assert_eq!(arrays["$1"], "c");
}

#[test]
fn non_array_text_passes_through() {
    let (text, arrays) = extract_arrays("just a [bracket] and ]] noise");
    assert_eq!(text, "just a [bracket] and ]] noise");
    assert!(arrays.is_empty());
}

#[test]
fn payload_is_verbatim() {
    // No escape interpretation inside a region, and an inner `[` is
    // literal content rather than a new region.
    let (text, arrays) = extract_arrays(r"[[a\,[b]]");
    assert_eq!(text, "[[$0]");
    assert_eq!(arrays["$0"], r"a\,[b");
}

#[test]
fn unterminated_region_swallows_the_remainder() {
    let (text, arrays) = extract_arrays("a [[1,2");
    assert_eq!(text, "a ");
    assert!(arrays.is_empty());
}

#[test]
fn empty_payload_is_allowed() {
    let (text, arrays) = extract_arrays("[[]]");
    assert_eq!(text, "[[$0]");
    assert_eq!(arrays["$0"], "");
}
