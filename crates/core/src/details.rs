//! Product-detail extraction: publication date, print length, file size.
//!
//! All three fields share the same two markup generations: the structured
//! attribute block (`rpi-attribute-book_details-*` ids with an
//! `rpi-attribute-value` child) on newer pages, and the bold-labeled
//! detail-bullets list on older ones.

use regex::Regex;

use crate::entities::decode_entities;
use crate::record::{FILE_SIZE_NOT_FOUND, PRINT_LENGTH_NOT_FOUND, PUBLICATION_DATE_NOT_FOUND};

/// Extract the publication date with priority fallback:
/// 1. Structured attribute block `book_details-publication_date`
/// 2. Bold-labeled `Publication date:` line
/// 3. Detail-bullets `Publisher: ... (DATE)` parenthetical
pub fn extract_publication_date(html: &str) -> String {
    let block_re = Regex::new(
        r#"(?i)<div id=["']rpi-attribute-book_details-publication_date["'][^>]*>[\s\S]*?<div class=["'][^"']*rpi-attribute-value[^"']*["'][^>]*>\s*<span>([^<]+)</span>\s*</div>[\s\S]*?</div>"#,
    )
    .unwrap();
    if let Some(caps) = block_re.captures(html) {
        return decode_entities(caps[1].trim());
    }

    let bold_re = Regex::new(r"(?i)<b>Publication date</b>\s*:\s*([^<]+)<").unwrap();
    if let Some(caps) = bold_re.captures(html) {
        return decode_entities(caps[1].trim());
    }

    let publisher_re = Regex::new(
        r#"(?i)<div id="detailBullets_feature_div">[\s\S]*?<li><b>Publisher</b>:\s*[^<]+<span>\s*\(([^<]+)\)</span></li>[\s\S]*?</div>"#,
    )
    .unwrap();
    if let Some(caps) = publisher_re.captures(html) {
        return decode_entities(caps[1].trim());
    }

    PUBLICATION_DATE_NOT_FOUND.to_string()
}

/// Extract the print length with priority fallback:
/// 1. Structured attribute block `book_details-ebook_pages` or
///    `book_details-paperback_pages`; a bare integer value gets " pages"
///    appended.
/// 2. Detail-bullets `Print length:` entry.
pub fn extract_print_length(html: &str) -> String {
    let block_re = Regex::new(
        r#"(?i)<div id=["']rpi-attribute-book_details-(?:ebook_pages|paperback_pages)["'][^>]*>[\s\S]*?<div class=["'][^"']*rpi-attribute-value[^"']*["'][^>]*>\s*(?:<a[^>]*>)?\s*<span>([^<]+)</span>"#,
    )
    .unwrap();
    if let Some(caps) = block_re.captures(html) {
        let mut length = decode_entities(caps[1].trim());
        if Regex::new(r"^\d+$").unwrap().is_match(&length) {
            length.push_str(" pages");
        }
        return length;
    }

    let detail_re =
        Regex::new(r#"(?i)<li><b>Print length</b>\s*:\s*<span[^>]*>\s*([^<]+?)\s*</span></li>"#).unwrap();
    if let Some(caps) = detail_re.captures(html) {
        return decode_entities(caps[1].trim());
    }

    PRINT_LENGTH_NOT_FOUND.to_string()
}

/// Extract the file size with priority fallback:
/// 1. Structured attribute block `book_details-file_size`
/// 2. Detail-bullets `File size:` entry
pub fn extract_file_size(html: &str) -> String {
    let block_re = Regex::new(
        r#"(?i)<div id=["']rpi-attribute-book_details-file_size["'][^>]*>[\s\S]*?<div class=["'][^"']*rpi-attribute-value[^"']*["'][^>]*>\s*<span>([^<]+)</span>\s*</div>[\s\S]*?</div>"#,
    )
    .unwrap();
    if let Some(caps) = block_re.captures(html) {
        return decode_entities(caps[1].trim());
    }

    let detail_re = Regex::new(r#"(?i)<li><b>File size</b>\s*:\s*<span[^>]*>\s*([^<]+?)\s*</span></li>"#).unwrap();
    if let Some(caps) = detail_re.captures(html) {
        return decode_entities(caps[1].trim());
    }

    FILE_SIZE_NOT_FOUND.to_string()
}
