//! Library API integration tests
use exlibris_core::*;

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(get_fixture_path(name)).expect("fixture should exist")
}

#[test]
fn test_full_product_page_extraction() {
    let html = read_fixture("book_page.html");
    let record = extract(&html, "https://example.com/dp/B00EXAMPLE").expect("should extract");

    assert_eq!(record.title, "The Winds of Change");
    assert_eq!(
        record.author,
        "Ada Lovelace (Author, Illustrator), Charles Babbage (Editor)"
    );
    assert_eq!(record.publication_date, "May 15, 2019");
    assert_eq!(record.print_length, "320 pages");
    assert_eq!(record.file_size, "2.1 MB");
    assert_eq!(
        record.description,
        "An epic account of computation.\nWith a new afterword by the editor."
    );
    assert_eq!(record.image_url, "https://images.example.com/winds-large.jpg");
    assert_eq!(record.source_url, "https://example.com/dp/B00EXAMPLE");
}

#[test]
fn test_extraction_is_idempotent() {
    let html = read_fixture("book_page.html");
    let first = extract(&html, "https://example.com/dp/1").expect("should extract");
    let second = extract(&html, "https://example.com/dp/1").expect("should extract");
    assert_eq!(first, second);
}

#[test]
fn test_robot_check_classified_as_bot_challenge() {
    let html = read_fixture("robot_check.html");
    match extract(&html, "https://example.com/dp/1") {
        Err(ScrapeError::BotChallenge { page_title }) => assert_eq!(page_title, "Robot Check"),
        other => panic!("expected BotChallenge, got {:?}", other),
    }
}

#[test]
fn test_unrelated_page_classified_as_structure_mismatch() {
    let html = read_fixture("plain_page.html");
    match extract(&html, "https://example.com/report") {
        Err(ScrapeError::StructureMismatch { page_title }) => {
            assert_eq!(page_title, "Quarterly Weather Report");
        }
        other => panic!("expected StructureMismatch, got {:?}", other),
    }
}

#[test]
fn test_extract_never_panics_on_hostile_input() {
    let inputs = [
        "",
        "<",
        "<<<>>><not html",
        "<html><body>\u{0}\u{FFFD}</body></html>",
        "plain text with no markup at all",
    ];
    for input in inputs {
        // Every input either extracts or classifies; none may panic.
        let _ = extract(input, "https://example.com");
    }
}

#[test]
fn test_scrape_and_collect_flow() {
    let html = read_fixture("book_page.html");
    let record = extract(&html, "https://example.com/dp/1").expect("should extract");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("collection.json");

    let mut collection = Collection::load(&path).unwrap();
    let id = collection.add(record.clone()).id.clone();
    collection.save().unwrap();

    let reloaded = Collection::load(&path).unwrap();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.get(&id).unwrap().record, record);

    let export = reloaded.export_all().unwrap();
    assert!(export.contains("The Winds of Change"));
    assert!(export.contains(&id));
}

#[test]
fn test_record_serialization_matches_export_format() {
    let html = read_fixture("book_page.html");
    let record = extract(&html, "https://example.com/dp/1").expect("should extract");

    let json = record_to_json(&record).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["title"], "The Winds of Change");
    assert_eq!(value["publicationDate"], "May 15, 2019");
    assert_eq!(value["printLength"], "320 pages");
    assert_eq!(value["fileSize"], "2.1 MB");
    assert_eq!(value["imageUrl"], "https://images.example.com/winds-large.jpg");
}
