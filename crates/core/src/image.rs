//! Cover image URL extraction.
//!
//! Unlike the text fields there is no sentinel here: an empty string is
//! directly usable as "no image", and the orchestrator substitutes the
//! placeholder URL at assembly time.

use regex::Regex;
use serde_json::Value;

use crate::entities::decode_entities;

/// Extract the best cover image URL with priority fallback:
/// 1. The `data-a-dynamic-image` attribute: an entity-escaped JSON object
///    mapping URL to `[width, height]`; the URL with the largest area wins.
///    A malformed payload falls through silently.
/// 2. An `<img>` with a `fullscreen` class fragment.
/// 3. `<img id="landingImage">`.
/// 4. `<img id="imgBlkFront">`.
/// 5. The `og:image` meta tag.
/// 6. A generic `<img>` whose `alt` text mentions "book".
///
/// Returns an empty string when no strategy matches.
pub fn extract_image_url(html: &str) -> String {
    let dynamic_re = Regex::new(r#"(?i)data-a-dynamic-image=["'](.*?)["']"#).unwrap();
    if let Some(caps) = dynamic_re.captures(html)
        && let Some(url) = largest_dynamic_image(&decode_entities(&caps[1]))
    {
        return url;
    }

    let fullscreen_re =
        Regex::new(r#"(?i)<img[^>]+class=["'][^"']*fullscreen[^"']*["'][^>]*src=["'](.*?)["']"#).unwrap();
    if let Some(caps) = fullscreen_re.captures(html) {
        return decode_entities(&caps[1]);
    }

    for id in ["landingImage", "imgBlkFront"] {
        let id_re = Regex::new(&format!(r#"(?i)<img id=["']{}["'][^>]*src=["'](.*?)["']"#, id)).unwrap();
        if let Some(caps) = id_re.captures(html) {
            return decode_entities(&caps[1]);
        }
    }

    let og_re = Regex::new(r#"(?i)<meta property=["']og:image["'] content=["'](.*?)["']"#).unwrap();
    if let Some(caps) = og_re.captures(html) {
        return decode_entities(caps[1].trim());
    }

    let alt_re = Regex::new(r#"(?i)<img[^>]+src=["'](https?://[^"']+)["'][^>]*alt=["'][^"']*book[^"']*["']"#).unwrap();
    if let Some(caps) = alt_re.captures(html) {
        return decode_entities(&caps[1]);
    }

    String::new()
}

/// Picks the URL with the largest width×height product from a dynamic-image
/// JSON map. Entries that are not two-element numeric arrays are skipped.
/// Returns `None` when the payload fails to parse or holds no usable entry.
fn largest_dynamic_image(json: &str) -> Option<String> {
    let map = serde_json::from_str::<Value>(json).ok()?;
    let entries = map.as_object()?;

    let mut best_url = None;
    let mut max_area = 0.0;
    for (url, dims) in entries {
        if let Some(dims) = dims.as_array()
            && dims.len() == 2
            && let (Some(w), Some(h)) = (dims[0].as_f64(), dims[1].as_f64())
        {
            let area = w * h;
            if area > max_area {
                max_area = area;
                best_url = Some(url.clone());
            }
        }
    }
    best_url
}
