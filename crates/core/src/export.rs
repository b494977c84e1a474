//! JSON export helpers.
//!
//! Filenames are deterministic: a single record exports under its slugified
//! title, a whole collection under the current date. Bodies are
//! pretty-printed JSON.

use chrono::Local;
use regex::Regex;

use crate::collection::Collection;
use crate::error::Result;
use crate::record::ScrapedRecord;

/// Filename for a single exported record: the lowercased title with every
/// non-alphanumeric character replaced by `_`, suffixed `_scraped.json`.
pub fn record_filename(record: &ScrapedRecord) -> String {
    let slug_re = Regex::new(r"[^a-zA-Z0-9]").unwrap();
    let slug = slug_re.replace_all(&record.title, "_").to_lowercase();
    format!("{}_scraped.json", slug)
}

/// Filename for a full collection export, dated with the current day:
/// `web_scraper_collection_<YYYY-MM-DD>.json`.
pub fn collection_filename() -> String {
    format!("web_scraper_collection_{}.json", Local::now().format("%Y-%m-%d"))
}

/// Serializes one record to pretty-printed JSON.
pub fn record_to_json(record: &ScrapedRecord) -> Result<String> {
    Ok(serde_json::to_string_pretty(record)?)
}

/// Serializes the whole collection to pretty-printed JSON.
pub fn collection_to_json(collection: &Collection) -> Result<String> {
    collection.export_all()
}
