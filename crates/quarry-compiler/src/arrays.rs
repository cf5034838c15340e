//! Array-literal extraction.
//!
//! Bracket-delimited literal arrays (`[[1,2,3]]`) can be arbitrarily large
//! and would drown the grammar, so they are pulled out of the raw query
//! text before parsing. Each payload is captured verbatim under a
//! synthetic `$<ordinal>` name and the occurrence is replaced by
//! `[[$<ordinal>]`, which the grammar recognizes as a placeholder.

use indexmap::IndexMap;

/// Extract every `[[ ... ]]` region from `input`.
///
/// Returns the rewritten text and the placeholder-to-payload mapping, in
/// order of first appearance. Payloads are taken verbatim up to (not
/// including) the first `]]`; no escaping is interpreted inside a region,
/// and a `[` inside an open region is literal content rather than the
/// start of a new one. An unterminated region swallows the remainder of
/// the input.
pub fn extract_arrays(input: &str) -> (String, IndexMap<String, String>) {
    let mut output = String::with_capacity(input.len());
    let mut arrays = IndexMap::new();

    let mut rest = input;
    while let Some(open) = rest.find("[[") {
        output.push_str(&rest[..open]);
        let body = &rest[open + 2..];

        let Some(close) = body.find("]]") else {
            return (output, arrays);
        };

        let name = format!("${}", arrays.len());
        output.push_str("[[");
        output.push_str(&name);
        output.push(']');
        arrays.insert(name, body[..close].to_string());

        rest = &body[close + 2..];
    }
    output.push_str(rest);

    (output, arrays)
}
