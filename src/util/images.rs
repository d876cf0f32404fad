//! JSON-array codec for note screenshots.
//!
//! Notes store pasted images as a JSON-encoded array of data-URLs in a single
//! text column. Every mutation decodes, edits, and re-encodes, so the stored
//! value is always a valid JSON array (`"[]"` when empty).

#[cfg(test)]
#[path = "images_test.rs"]
mod images_test;

/// Encoded form of an empty image list.
pub fn empty() -> String {
    "[]".to_owned()
}

/// Decode the stored column. Empty, malformed, or non-array input yields no
/// images; non-string entries are skipped.
pub fn decode(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Vec<serde_json::Value>>(trimmed) {
        Ok(values) => values
            .into_iter()
            .filter_map(|v| match v {
                serde_json::Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        Err(err) => {
            log::warn!("images: discarding malformed image list: {err}");
            Vec::new()
        }
    }
}

pub fn encode(images: &[String]) -> String {
    serde_json::to_string(images).unwrap_or_else(|_| empty())
}

pub fn append(raw: &str, data_url: &str) -> String {
    let mut images = decode(raw);
    images.push(data_url.to_owned());
    encode(&images)
}

/// Remove the image at `index`; out-of-range indexes leave the list as is.
pub fn remove(raw: &str, index: usize) -> String {
    let mut images = decode(raw);
    if index < images.len() {
        images.remove(index);
    }
    encode(&images)
}

/// Whether a clipboard item MIME type is an image.
pub fn is_image_mime(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with("image/")
}
