//! The collected-items store.
//!
//! An explicit store object over a JSON file: records curated by the user,
//! newest first, each under a generated unique id. Loading tolerates a
//! missing or corrupt file by starting empty; a half-written store should
//! never brick the tool.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::record::ScrapedRecord;

/// A [`ScrapedRecord`] held in the collection, tagged with its id.
///
/// The record is serde-flattened so collection exports stay flat:
/// `{"id": "...", "title": "...", ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectedItem {
    pub id: String,
    #[serde(flatten)]
    pub record: ScrapedRecord,
}

/// An ordered collection of scraped records persisted to a JSON file.
#[derive(Debug)]
pub struct Collection {
    path: PathBuf,
    items: Vec<CollectedItem>,
}

impl Collection {
    /// Loads the collection stored at `path`.
    ///
    /// A missing file yields an empty collection. A file that fails to
    /// parse also yields an empty collection; the broken contents are
    /// overwritten on the next save.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let items = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, items })
    }

    /// The default store location: `<platform data dir>/exlibris/collection.json`,
    /// falling back to the current directory when no data dir exists.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("exlibris")
            .join("collection.json")
    }

    /// The file this collection persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Adds a record at the front of the collection under a fresh id and
    /// returns a reference to the stored item.
    pub fn add(&mut self, record: ScrapedRecord) -> &CollectedItem {
        let item = CollectedItem { id: Uuid::new_v4().to_string(), record };
        self.items.insert(0, item);
        &self.items[0]
    }

    /// Replaces the record stored under `id`. Returns false when no item
    /// has that id.
    pub fn update(&mut self, id: &str, record: ScrapedRecord) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.record = record;
                true
            }
            None => false,
        }
    }

    /// Removes the item with `id`. Returns false when no item has that id.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() < before
    }

    /// Looks up one item by id.
    pub fn get(&self, id: &str) -> Option<&CollectedItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// All items, newest first.
    pub fn items(&self) -> &[CollectedItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drops every item. Takes effect on disk at the next [`Collection::save`].
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Writes the collection back to its file, creating parent directories
    /// as needed.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.items)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Serializes every item to pretty-printed JSON for export.
    pub fn export_all(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.items)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::PLACEHOLDER_IMAGE;

    fn sample_record(title: &str) -> ScrapedRecord {
        ScrapedRecord {
            title: title.to_string(),
            author: "Jane Doe (Author)".to_string(),
            publication_date: "2019".to_string(),
            description: "A description.".to_string(),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            source_url: "https://example.com/dp/1".to_string(),
            print_length: "320 pages".to_string(),
            file_size: "2.1 MB".to_string(),
        }
    }

    fn temp_collection() -> (tempfile::TempDir, Collection) {
        let dir = tempfile::tempdir().unwrap();
        let collection = Collection::load(dir.path().join("collection.json")).unwrap();
        (dir, collection)
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let (_dir, collection) = temp_collection();
        assert!(collection.is_empty());
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("collection.json");
        fs::write(&path, "{ not json").unwrap();

        let collection = Collection::load(&path).unwrap();
        assert!(collection.is_empty());
    }

    #[test]
    fn test_add_generates_unique_ids_newest_first() {
        let (_dir, mut collection) = temp_collection();
        let first_id = collection.add(sample_record("First")).id.clone();
        let second_id = collection.add(sample_record("Second")).id.clone();

        assert_ne!(first_id, second_id);
        assert_eq!(collection.items()[0].record.title, "Second");
        assert_eq!(collection.items()[1].record.title, "First");
    }

    #[test]
    fn test_update_existing_item() {
        let (_dir, mut collection) = temp_collection();
        let id = collection.add(sample_record("Original")).id.clone();

        assert!(collection.update(&id, sample_record("Edited")));
        assert_eq!(collection.get(&id).unwrap().record.title, "Edited");
        assert!(!collection.update("no-such-id", sample_record("X")));
    }

    #[test]
    fn test_remove_item() {
        let (_dir, mut collection) = temp_collection();
        let id = collection.add(sample_record("Doomed")).id.clone();

        assert!(collection.remove(&id));
        assert!(collection.is_empty());
        assert!(!collection.remove(&id));
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("collection.json");

        let mut collection = Collection::load(&path).unwrap();
        collection.add(sample_record("Persisted"));
        collection.save().unwrap();

        let reloaded = Collection::load(&path).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.items()[0].record.title, "Persisted");
    }

    #[test]
    fn test_export_all_is_flat_json() {
        let (_dir, mut collection) = temp_collection();
        collection.add(sample_record("Exported"));

        let json = collection.export_all().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let item = &parsed.as_array().unwrap()[0];
        assert!(item.get("id").is_some());
        assert_eq!(item["title"], "Exported");
        assert_eq!(item["printLength"], "320 pages");
    }
}
