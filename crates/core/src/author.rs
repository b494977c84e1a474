//! Author extraction.
//!
//! Real-world product pages encode authorship in at least four incompatible
//! markup shapes. The fallback chain below trades precision for coverage:
//! the structured byline container is preferred, with progressively looser
//! patterns behind it.

use regex::Regex;

use crate::entities::decode_entities;
use crate::record::AUTHOR_NOT_FOUND;

/// Extract the author(s) with priority fallback:
/// 1. Byline container (`bylineInfo` / `bylineInfo_feature_div`): every
///    name with its parenthetical role list, formatted `"Name (Role1, Role2)"`
///    and comma-joined. The role defaults to `"Author"` when no list is
///    present.
/// 2. A single linked name adjacent to the literal `(Author)` marker.
/// 3. A generic `authorName`-class link.
/// 4. Contributor list: every contributor link whose role text contains
///    `"(author"` (case-insensitive), comma-joined.
pub fn extract_author(html: &str) -> String {
    if let Some(byline) = extract_from_byline(html) {
        return byline;
    }

    let marked_re =
        Regex::new(r#"(?i)<span class="author notFaded"[^>]*>[\s\S]*?<a[^>]*>([^<]+)</a>[\s\S]*?\(Author\)"#)
            .unwrap();
    if let Some(caps) = marked_re.captures(html) {
        return decode_entities(caps[1].trim());
    }

    let author_name_re = Regex::new(r#"(?i)class="authorName"[^>]*><a[^>]*>([^<]+)</a>"#).unwrap();
    if let Some(caps) = author_name_re.captures(html) {
        return decode_entities(caps[1].trim());
    }

    let contributors = extract_from_contributor_list(html);
    if !contributors.is_empty() {
        return contributors.join(", ");
    }

    AUTHOR_NOT_FOUND.to_string()
}

/// Parses the byline container, capturing each author name and optional
/// parenthetical role list.
fn extract_from_byline(html: &str) -> Option<String> {
    let block_re = Regex::new(r#"(?i)<div id=["']bylineInfo(?:_feature_div)?["'][^>]*>([\s\S]*?)</div>"#).unwrap();
    let byline_html = block_re.captures(html)?.get(1)?.as_str();

    let detail_re = Regex::new(
        r#"(?i)<span class="author notFaded"[^>]*>\s*<a class="a-link-normal"[^>]*>([^<]+)</a>\s*(?:<span class="contribution"[^>]*>\s*<span class="a-color-secondary">\s*\(([^)]+)\)\s*,?\s*</span>\s*</span>)?\s*</span>"#,
    )
    .unwrap();

    let mut entries = Vec::new();
    for caps in detail_re.captures_iter(byline_html) {
        let name = decode_entities(caps[1].trim());
        let roles = match caps.get(2) {
            Some(role_list) => decode_entities(
                &role_list
                    .as_str()
                    .trim()
                    .split(',')
                    .map(str::trim)
                    .filter(|r| !r.is_empty())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            None => "Author".to_string(),
        };
        entries.push(format!("{} ({})", name, roles));
    }

    if entries.is_empty() { None } else { Some(entries.join(", ")) }
}

/// Collects contributor-list names whose adjacent role text marks them as
/// an author.
fn extract_from_contributor_list(html: &str) -> Vec<String> {
    let contrib_re = Regex::new(
        r#"(?i)<span class='a-declarative'[^>]*>\s*<a class="a-link-normal contributorNameID"[^>]+>([^<]+)</a>\s*<span class="a-color-secondary contribution">([^<]+)</span>"#,
    )
    .unwrap();

    contrib_re
        .captures_iter(html)
        .filter(|caps| caps[2].to_lowercase().contains("(author"))
        .map(|caps| decode_entities(caps[1].trim()))
        .collect()
}
