//! Tag-content extraction over raw HTML text.
//!
//! This module implements the shared text-cleaning primitive the field
//! extractors build on: locate the first element matching an id, a class
//! fragment, or a tag name, take its inner span, strip the remaining markup,
//! and normalize whitespace.
//!
//! The match is a regex heuristic, not a balanced-tag parse. The captured
//! span runs to the next closing tag of *any* element (non-greedy), so
//! nested same-named elements truncate early. That limitation is part of
//! the contract; callers pick identifiers where it does not bite.

use regex::Regex;

use crate::entities::decode_entities;

/// Selects the element whose inner text should be extracted.
///
/// When more than one selector is supplied, precedence is id, then class
/// fragment, then tag name. With none supplied the extraction yields an
/// empty string.
#[derive(Debug, Clone, Default)]
pub struct TagQuery<'a> {
    /// Match the first element whose `id` attribute equals this value.
    pub by_id: Option<&'a str>,
    /// Match the first element whose `class` attribute contains this fragment.
    pub by_class_fragment: Option<&'a str>,
    /// Match the first element with this tag name.
    pub by_tag: Option<&'a str>,
}

impl<'a> TagQuery<'a> {
    pub fn id(id: &'a str) -> Self {
        Self { by_id: Some(id), ..Default::default() }
    }

    pub fn class_fragment(fragment: &'a str) -> Self {
        Self { by_class_fragment: Some(fragment), ..Default::default() }
    }

    pub fn tag(name: &'a str) -> Self {
        Self { by_tag: Some(name), ..Default::default() }
    }
}

/// Extracts the inner text of the first element matching `query`.
///
/// Strips nested markup from the captured span, collapses whitespace runs
/// to single spaces, trims, and decodes entities. Returns an empty string
/// when nothing matches; never fails.
pub fn extract_text_content(html: &str, query: &TagQuery) -> String {
    let pattern = if let Some(id) = query.by_id {
        format!(r#"(?i)<[^>]+id=["']{}["'][^>]*>([\s\S]*?)</[^>]+>"#, regex::escape(id))
    } else if let Some(fragment) = query.by_class_fragment {
        format!(
            r#"(?i)<[^>]+class=["'][^"']*{}[^"']*["'][^>]*>([\s\S]*?)</[^>]+>"#,
            regex::escape(fragment)
        )
    } else if let Some(tag) = query.by_tag {
        format!(r#"(?i)<{}[^>]*>([\s\S]*?)</{}>"#, regex::escape(tag), regex::escape(tag))
    } else {
        return String::new();
    };

    let re = Regex::new(&pattern).unwrap();
    match re.captures(html).and_then(|caps| caps.get(1)) {
        Some(inner) => decode_entities(collapse_whitespace(&strip_tags(inner.as_str())).trim()),
        None => String::new(),
    }
}

/// Replaces every remaining tag in `html` with a single space.
pub(crate) fn strip_tags(html: &str) -> String {
    let re = Regex::new(r"<[^>]+>").unwrap();
    re.replace_all(html, " ").into_owned()
}

/// Collapses runs of whitespace (including newlines) to single spaces.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    let re = Regex::new(r"\s+").unwrap();
    re.replace_all(text, " ").into_owned()
}
