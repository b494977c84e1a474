//! Title extraction.

use crate::record::TITLE_NOT_FOUND;
use crate::text::{TagQuery, extract_text_content};

/// Extract the product title with priority fallback:
/// 1. Element with id `productTitle`
/// 2. `<h1>` carrying the `a-size-extra-large` class
pub fn extract_title(html: &str) -> String {
    let by_id = extract_text_content(html, &TagQuery::id("productTitle"));
    if !by_id.is_empty() {
        return by_id;
    }

    let by_heading = extract_text_content(
        html,
        &TagQuery { by_class_fragment: Some("a-size-extra-large"), by_tag: Some("h1"), ..Default::default() },
    );
    if !by_heading.is_empty() {
        return by_heading;
    }

    TITLE_NOT_FOUND.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_product_title_id() {
        let html = r#"<span id="productTitle"> Systems Programming in Rust </span>"#;
        assert_eq!(extract_title(html), "Systems Programming in Rust");
    }

    #[test]
    fn test_title_fallback_to_heading_class() {
        let html = r#"<h1 class="a-size-extra-large a-text-bold">Fallback Heading</h1>"#;
        assert_eq!(extract_title(html), "Fallback Heading");
    }

    #[test]
    fn test_title_id_wins_over_heading() {
        let html = r#"
            <span id="productTitle">Primary Title</span>
            <h1 class="a-size-extra-large">Secondary</h1>
        "#;
        assert_eq!(extract_title(html), "Primary Title");
    }

    #[test]
    fn test_title_sentinel_when_absent() {
        assert_eq!(extract_title("<p>no title markup</p>"), TITLE_NOT_FOUND);
    }

    #[test]
    fn test_title_entities_decoded() {
        let html = r#"<span id="productTitle">War &amp; Peace</span>"#;
        assert_eq!(extract_title(html), "War & Peace");
    }
}
