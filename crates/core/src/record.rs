//! The scraped record type and its sentinel contract.
//!
//! Every field of [`ScrapedRecord`] is always present and always a string.
//! A field the extractors could not populate holds its fixed "not found"
//! sentinel rather than being absent, so consumers never deal with nulls.
//! The one asymmetry is the image: an empty extraction result is replaced
//! by [`PLACEHOLDER_IMAGE`] at assembly time, since an image URL is directly
//! usable as "no image" in a way the text fields are not.

use serde::{Deserialize, Serialize};

/// Sentinel for a title no strategy could extract.
pub const TITLE_NOT_FOUND: &str = "Title not found";
/// Sentinel for an author no strategy could extract.
pub const AUTHOR_NOT_FOUND: &str = "Author not found";
/// Sentinel for a publication date no strategy could extract.
pub const PUBLICATION_DATE_NOT_FOUND: &str = "Publication date not found";
/// Sentinel for a description no strategy could extract.
pub const DESCRIPTION_NOT_FOUND: &str = "Description not found";
/// Sentinel for a print length no strategy could extract.
pub const PRINT_LENGTH_NOT_FOUND: &str = "Print length not found";
/// Sentinel for a file size no strategy could extract.
pub const FILE_SIZE_NOT_FOUND: &str = "File size not found";

/// Image URL substituted when no image strategy matched.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400.png";

/// Returns true when `value` holds real content rather than a sentinel.
///
/// Callers deciding UI messaging or export filtering must treat sentinel
/// strings as absence.
pub fn is_present(value: &str) -> bool {
    !matches!(
        value,
        TITLE_NOT_FOUND
            | AUTHOR_NOT_FOUND
            | PUBLICATION_DATE_NOT_FOUND
            | DESCRIPTION_NOT_FOUND
            | PRINT_LENGTH_NOT_FOUND
            | FILE_SIZE_NOT_FOUND
    ) && !value.is_empty()
}

/// Bibliographic metadata extracted from one product page.
///
/// Serialized in camelCase (`publicationDate`, `imageUrl`, ...) so exported
/// JSON matches the established record format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedRecord {
    pub title: String,
    /// May encode multiple names with parenthetical roles, comma-joined,
    /// e.g. `"Jane Doe (Author, Illustrator), John Roe (Editor)"`.
    pub author: String,
    /// Free-form: a full date, a bare year, or the sentinel.
    pub publication_date: String,
    /// Free text; may span paragraphs, with newlines meaningful.
    pub description: String,
    /// Absolute URL; [`PLACEHOLDER_IMAGE`] when extraction found nothing.
    pub image_url: String,
    /// Provenance: the URL fetched, or a synthetic label such as
    /// `"File: metadata.html"` applied by the caller.
    pub source_url: String,
    /// Normalized to end in " pages" when the captured value was a bare
    /// integer.
    pub print_length: String,
    /// Free-form, e.g. "2.1 MB".
    pub file_size: String,
}
