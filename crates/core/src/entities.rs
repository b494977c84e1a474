//! HTML character reference decoding.
//!
//! Product pages escape text content with a small, predictable set of named
//! references. Only that fixed set is decoded here; numeric character
//! references and the wider named-entity table are deliberately left alone.

/// The supported references, applied as sequential global substitution.
const ENTITY_TABLE: [(&str, &str); 6] = [
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#039;", "'"),
    ("&nbsp;", " "),
];

/// Decodes the six supported HTML character references to literal characters.
///
/// Any reference outside the table passes through unchanged. This is a
/// documented limitation, not an oversight: the extractors only ever meet
/// the escapes a product page emits for plain text.
pub fn decode_entities(text: &str) -> String {
    let mut decoded = text.to_string();
    for (entity, literal) in ENTITY_TABLE {
        decoded = decoded.replace(entity, literal);
    }
    decoded
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("&amp;", "&")]
    #[case("&lt;", "<")]
    #[case("&gt;", ">")]
    #[case("&quot;", "\"")]
    #[case("&#039;", "'")]
    #[case("&nbsp;", " ")]
    fn test_decode_each_supported_entity(#[case] entity: &str, #[case] literal: &str) {
        assert_eq!(decode_entities(entity), literal);
    }

    #[test]
    fn test_decode_all_supported_entities() {
        assert_eq!(
            decode_entities("&amp;&lt;&gt;&quot;&#039;&nbsp;"),
            "&<>\"' "
        );
    }

    #[test]
    fn test_decode_mixed_text() {
        assert_eq!(
            decode_entities("Tom &amp; Jerry&#039;s &quot;Guide&quot;"),
            "Tom & Jerry's \"Guide\""
        );
    }

    #[test]
    fn test_unsupported_entities_pass_through() {
        assert_eq!(decode_entities("&copy; 2024 &#8212; fin"), "&copy; 2024 &#8212; fin");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(decode_entities("no entities here"), "no entities here");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(decode_entities(""), "");
    }

    #[test]
    fn test_amp_decoded_before_remaining_text() {
        // Sequential substitution: "&amp;lt;" becomes "&lt;" (a literal
        // ampersand followed by "lt;"), and the later &lt; pass then turns
        // it into "<". Callers relying on double-escaped text get the
        // original behavior.
        assert_eq!(decode_entities("&amp;lt;"), "<");
    }
}
