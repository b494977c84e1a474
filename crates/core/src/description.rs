//! Description extraction.
//!
//! Descriptions are the one field where markup structure carries meaning:
//! `<br>` runs and paragraph tags become newlines and blank-line-separated
//! blocks so the extracted text keeps its paragraph shape.

use regex::Regex;

use crate::entities::decode_entities;
use crate::record::DESCRIPTION_NOT_FOUND;

/// Extract the description with priority fallback:
/// 1. The `bookDescription_feature_div` block, preferring its `<noscript>`
///    fallback sub-block, then the `book_description_expander` sub-block.
/// 2. A `product-description-full-width` block.
/// 3. The `og:description` meta tag.
pub fn extract_description(html: &str) -> String {
    let feature_re =
        Regex::new(r#"(?i)<div id=["']bookDescription_feature_div["'][^>]*>([\s\S]*?)<div class=["']a-expander-header"#)
            .unwrap();
    if let Some(caps) = feature_re.captures(html) {
        let block = &caps[1];

        let noscript_re = Regex::new(r"(?i)<noscript>[\s\S]*?<div[^>]*>([\s\S]*?)</div>[\s\S]*?</noscript>").unwrap();
        if let Some(inner) = noscript_re.captures(block) {
            return clean_rich_text(&inner[1]);
        }

        let expander_re =
            Regex::new(r#"(?i)<div[^>]*data-a-expander-name=["']book_description_expander["'][^>]*>([\s\S]*?)</div>"#)
                .unwrap();
        if let Some(inner) = expander_re.captures(block) {
            return clean_rich_text(&inner[1]);
        }
    }

    let full_width_re =
        Regex::new(r#"(?i)<div class=["'][^"']*product-description-full-width[^"']*["'][^>]*>([\s\S]*?)</div>"#)
            .unwrap();
    if let Some(caps) = full_width_re.captures(html) {
        return clean_rich_text(&caps[1]);
    }

    let og_re = Regex::new(r#"(?i)<meta property=["']og:description["'] content=["'](.*?)["']"#).unwrap();
    if let Some(caps) = og_re.captures(html) {
        return decode_entities(caps[1].trim());
    }

    DESCRIPTION_NOT_FOUND.to_string()
}

/// Flattens description markup to text while keeping its paragraph shape:
/// `<br>` becomes a newline, paragraph openings become blank lines, inline
/// emphasis tags vanish, and anything left over is stripped. Horizontal
/// whitespace collapses per line; newline structure survives.
fn clean_rich_text(html: &str) -> String {
    let br_re = Regex::new(r"(?i)<br\s*/?>").unwrap();
    let p_re = Regex::new(r"(?i)<p[^>]*>").unwrap();
    let inline_re = Regex::new(r"(?i)</?(?:b|i|em|strong|span)[^>]*>").unwrap();
    let tag_re = Regex::new(r"<[^>]+>").unwrap();

    let text = br_re.replace_all(html, "\n");
    let text = p_re.replace_all(&text, "\n\n");
    let text = inline_re.replace_all(&text, "");
    let text = tag_re.replace_all(&text, " ");

    let spaces_re = Regex::new(r"[ \t]+").unwrap();
    let line_edges_re = Regex::new(r"[ \t]*\n[ \t]*").unwrap();
    let blank_runs_re = Regex::new(r"\n{3,}").unwrap();

    let text = spaces_re.replace_all(&text, " ");
    let text = line_edges_re.replace_all(&text, "\n");
    let text = blank_runs_re.replace_all(&text, "\n\n");

    decode_entities(text.trim())
}
