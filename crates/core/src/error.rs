//! Error types for scraping operations.
//!
//! This module defines the main error type [`ScrapeError`] which represents
//! all possible errors that can occur during fetching, extraction, and
//! collection persistence.
//!
//! Per-field extraction failure is *not* an error: each field extractor
//! degrades to its "not found" sentinel string. Only the orchestrator-level
//! page classification ([`ScrapeError::BotChallenge`] /
//! [`ScrapeError::StructureMismatch`]) surfaces extraction failure to the
//! caller.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for scraping operations.
///
/// # Example
///
/// ```rust
/// use exlibris_core::{ScrapeError, extract};
///
/// match extract("<html><title>Robot Check</title><body>captcha</body></html>", "https://example.com") {
///     Ok(record) => println!("Got: {}", record.title),
///     Err(ScrapeError::BotChallenge { page_title }) => {
///         println!("Blocked by security check on page: {}", page_title);
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// HTTP request errors from reqwest.
    ///
    /// Wraps network errors, DNS failures, connection issues, and other
    /// HTTP-level problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[cfg(feature = "fetch")]
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The page served a CAPTCHA or similar security interstitial.
    ///
    /// Detected when none of the primary fields could be extracted and the
    /// document carries challenge markers. The user should try a different
    /// URL or open the page in a browser.
    #[error(
        "CAPTCHA or security check encountered on the target page (page title: {page_title}). \
         Try a different URL or check the page in your browser."
    )]
    BotChallenge { page_title: String },

    /// The page layout is not a recognized product page.
    ///
    /// Returned when none of the primary fields (title, author, publication
    /// date) could be extracted and no challenge markers were found.
    #[error(
        "Failed to parse critical content (title, author, publication date). The page structure \
         might be different, unsupported, or not a product page. Page title: {page_title}"
    )]
    StructureMismatch { page_title: String },

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File read/write errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors from the collection store or export.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for ScrapeError.
pub type Result<T> = std::result::Result<T, ScrapeError>;
