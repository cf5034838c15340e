//! Term classification: raw value in, query-node shape out.
//!
//! The classifier decides which node variant a raw value denotes by
//! counting its active wildcard markers and inspecting its suffix. The
//! decision order matters (first match wins), and every rule tolerates
//! the doubled-backslash idiom where `\\*` means "literal backslash
//! followed by an active marker" while `\*` means a literal asterisk.

use std::sync::LazyLock;

use quarry_core::escape::count_valid_wildcards;
use quarry_core::{NodeKind, Operator, QueryNode};
use regex::Regex;

use crate::analysis::FieldLookup;
use crate::{Error, Result};

/// Gate for rule 7: `<text>~<digits>` fuzziness suffix.
static FUZZY_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*)~(\d+)$").expect("fuzzy suffix pattern is valid"));

/// True when `value` ends in `marker` and that final marker is active.
///
/// `\*` is escaped (inactive); `\\*` is a literal backslash followed by an
/// active marker. Deeper escape nesting is tolerated rather than counted,
/// matching the wildcard accounting in `count_valid_wildcards`.
fn ends_with_active(value: &str, marker: char) -> bool {
    let escaped = format!("\\{marker}");
    let double_escaped = format!("\\\\{marker}");
    value.ends_with(marker) && (!value.ends_with(&escaped) || value.ends_with(&double_escaped))
}

/// Classify a raw field-bound value into a query node.
///
/// Decision order, where `w` counts active wildcards and `L` is the value
/// length in characters:
/// 1. `w == 0` - plain word
/// 2. `w == L` - all-wildcard value, "field is not null"
/// 3. `w > 1`  - general wildcard
/// 4. trailing active `*` - prefix (marker stripped)
/// 5. trailing active `?` - wildcard
/// 6. trailing active `~` - fuzzy, default distance
/// 7. `<text>~<digits>` - fuzzy with explicit distance
/// 8. anything else - wildcard
pub fn classify(fieldname: &str, operator: Operator, value: &str) -> Result<QueryNode> {
    let wildcards = count_valid_wildcards(value);

    let (kind, node_value, fuzziness) = if wildcards == 0 {
        (NodeKind::Word, value.to_string(), 0)
    } else if wildcards == value.chars().count() {
        (NodeKind::NotNull, value.to_string(), 0)
    } else if wildcards > 1 {
        (NodeKind::Wildcard, value.to_string(), 0)
    } else if ends_with_active(value, '*') {
        (NodeKind::Prefix, strip_last(value), 0)
    } else if ends_with_active(value, '?') {
        (NodeKind::Wildcard, value.to_string(), 0)
    } else if ends_with_active(value, '~') {
        (NodeKind::Fuzzy, strip_last(value), 0)
    } else if let Some(caps) = FUZZY_SUFFIX.captures(value) {
        let text = caps
            .get(1)
            .ok_or(Error::InternalInvariant("fuzzy suffix matched without text group"))?
            .as_str();
        let digits = caps
            .get(2)
            .ok_or(Error::InternalInvariant("fuzzy suffix matched without digit group"))?
            .as_str();
        let fuzziness = digits
            .parse()
            .map_err(|_| Error::MalformedFuzziness(value.to_string()))?;
        (NodeKind::Fuzzy, text.to_string(), fuzziness)
    } else {
        // Mid-string markers and anything rules 4-7 let through.
        (NodeKind::Wildcard, value.to_string(), 0)
    };

    let mut node = QueryNode::leaf(kind, fieldname, operator, node_value);
    node.fuzziness = fuzziness;
    Ok(node)
}

/// [`classify`], additionally stamping the field's index binding and
/// nested scope from metadata.
pub fn classify_bound(
    fields: &dyn FieldLookup,
    fieldname: &str,
    operator: Operator,
    value: &str,
) -> Result<QueryNode> {
    let mut node = classify(fieldname, operator, value)?;
    node.index_link = fields.index_link_of(fieldname);
    node.nested_path = fields.nested_path_of(fieldname);
    Ok(node)
}

fn strip_last(value: &str) -> String {
    let mut chars = value.chars();
    chars.next_back();
    chars.as_str().to_string()
}
