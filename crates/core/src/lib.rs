pub mod author;
pub mod collection;
pub mod description;
pub mod details;
pub mod entities;
pub mod error;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod image;
pub mod record;
pub mod text;
pub mod title;

pub use author::extract_author;
pub use collection::{CollectedItem, Collection};
pub use description::extract_description;
pub use details::{extract_file_size, extract_print_length, extract_publication_date};
pub use entities::decode_entities;
pub use error::{Result, ScrapeError};
pub use export::{collection_filename, collection_to_json, record_filename, record_to_json};
pub use extract::extract;
#[cfg(feature = "fetch")]
pub use fetch::{FetchConfig, fetch_url};
pub use fetch::{fetch_file, fetch_stdin};
pub use image::extract_image_url;
pub use record::{
    AUTHOR_NOT_FOUND, DESCRIPTION_NOT_FOUND, FILE_SIZE_NOT_FOUND, PLACEHOLDER_IMAGE, PRINT_LENGTH_NOT_FOUND,
    PUBLICATION_DATE_NOT_FOUND, ScrapedRecord, TITLE_NOT_FOUND, is_present,
};
pub use text::{TagQuery, extract_text_content};
pub use title::extract_title;
