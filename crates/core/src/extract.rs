//! Extraction orchestration and failure classification.
//!
//! One synchronous pass over the raw document text: the three primary field
//! extractors run first as a cheap validity signal, then either the page is
//! classified as a bot challenge / unrecognized layout, or the remaining
//! extractors fill out the record.

use regex::Regex;

use crate::author::extract_author;
use crate::description::extract_description;
use crate::details::{extract_file_size, extract_print_length, extract_publication_date};
use crate::entities::decode_entities;
use crate::error::{Result, ScrapeError};
use crate::image::extract_image_url;
use crate::record::{
    AUTHOR_NOT_FOUND, PLACEHOLDER_IMAGE, PUBLICATION_DATE_NOT_FOUND, ScrapedRecord, TITLE_NOT_FOUND,
};
use crate::title::extract_title;

/// Extracts a [`ScrapedRecord`] from one HTML document.
///
/// Extraction never fails on malformed markup; every field degrades to its
/// sentinel independently. The whole call fails only when all three primary
/// fields (title, author, publication date) came back as sentinels, in
/// which case the page is classified as either a
/// [`ScrapeError::BotChallenge`] or a [`ScrapeError::StructureMismatch`].
///
/// Given identical input text the result is byte-identical: the extractors
/// hold no state across calls.
///
/// # Example
///
/// ```rust
/// use exlibris_core::extract;
///
/// let html = r#"<span id="productTitle">A Book</span>"#;
/// let record = extract(html, "https://example.com/dp/1").unwrap();
/// assert_eq!(record.title, "A Book");
/// ```
pub fn extract(html: &str, source_url: &str) -> Result<ScrapedRecord> {
    let title = extract_title(html);
    let author = extract_author(html);
    let publication_date = extract_publication_date(html);

    if title == TITLE_NOT_FOUND && author == AUTHOR_NOT_FOUND && publication_date == PUBLICATION_DATE_NOT_FOUND {
        let page_title = page_title(html).unwrap_or_else(|| "Possible Error Page".to_string());

        let body = html.to_lowercase();
        if body.contains("captcha") || body.contains("are you a robot") || page_title.to_lowercase().contains("captcha")
        {
            return Err(ScrapeError::BotChallenge { page_title });
        }
        return Err(ScrapeError::StructureMismatch { page_title });
    }

    let image_url = extract_image_url(html);
    Ok(ScrapedRecord {
        title,
        author,
        publication_date,
        description: extract_description(html),
        image_url: if image_url.is_empty() { PLACEHOLDER_IMAGE.to_string() } else { image_url },
        source_url: source_url.to_string(),
        print_length: extract_print_length(html),
        file_size: extract_file_size(html),
    })
}

/// Returns the decoded, trimmed `<title>` text, or `None` when the document
/// has no title tag.
fn page_title(html: &str) -> Option<String> {
    let re = Regex::new(r"(?i)<title>([^<]+)</title>").unwrap();
    re.captures(html).map(|caps| decode_entities(caps[1].trim()))
}
