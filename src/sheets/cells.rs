//! Normalization of sheet media cells into direct-fetch URLs
//!
//! A sheet owner can populate a media column three different ways: a typed
//! list of URLs, an `=IMAGE("...")` formula per uploaded file, or a pasted
//! Google Drive share link. Each cell is classified once into a variant and
//! then dispatched, so callers never need to know which shape was used.

use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

/// Placeholder shown when a product carries no usable image reference
pub const FALLBACK_IMAGE_URL: &str =
    "https://images.pexels.com/photos/2529148/pexels-photo-2529148.jpeg";

/// One cell of a gviz row: `v` is the raw value, `f` an optional formatted
/// rendering that may carry formula text
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GvizCell {
    #[serde(default)]
    pub v: Value,
    #[serde(default)]
    pub f: Option<String>,
}

/// The shapes a media cell can arrive in, in classification priority order
#[derive(Debug, PartialEq, Eq)]
enum MediaCell<'a> {
    /// Comma-joined list of URLs typed directly into the cell
    DirectUrls(&'a str),
    /// Formatted value carrying one or more `IMAGE("...")` formula calls
    EmbeddedFormula(&'a str),
    /// Any other text: Drive share links get rewritten, the rest passes
    /// through unchanged
    SharedLinks(&'a str),
    Empty,
}

fn classify(cell: Option<&GvizCell>) -> MediaCell<'_> {
    let Some(cell) = cell else {
        return MediaCell::Empty;
    };

    if let Value::String(v) = &cell.v
        && v.starts_with("http")
    {
        return MediaCell::DirectUrls(v);
    }

    if let Some(f) = &cell.f
        && f.contains("IMAGE(")
    {
        return MediaCell::EmbeddedFormula(f);
    }

    if let Value::String(v) = &cell.v
        && !v.trim().is_empty()
    {
        return MediaCell::SharedLinks(v);
    }

    MediaCell::Empty
}

/// Normalize a media cell into a list of fetchable URLs.
///
/// An empty result means the caller decides the fallback: the placeholder
/// image for the images column, nothing for videos and 3D shots.
pub fn normalize_media_cell(cell: Option<&GvizCell>) -> Vec<String> {
    match classify(cell) {
        MediaCell::DirectUrls(list) => split_list(list),
        MediaCell::EmbeddedFormula(formula) => extract_formula_urls(formula),
        MediaCell::SharedLinks(list) => split_list(list)
            .iter()
            .map(|link| rewrite_drive_link(link))
            .collect(),
        MediaCell::Empty => Vec::new(),
    }
}

/// Split a comma-joined cell into trimmed, non-empty segments
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

fn image_formula_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"IMAGE\("([^"]+)"\)"#).expect("hard-coded pattern"))
}

fn drive_file_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/d/([a-zA-Z0-9_-]+)").expect("hard-coded pattern"))
}

/// Pull every quoted URL argument out of every `IMAGE("...")` call in a
/// formatted cell value
fn extract_formula_urls(formula: &str) -> Vec<String> {
    image_formula_re()
        .captures_iter(formula)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Rewrite a Drive share link to the provider's direct-view form; anything
/// that is not a Drive link passes through unchanged
fn rewrite_drive_link(link: &str) -> String {
    if link.contains("drive.google.com")
        && let Some(caps) = drive_file_id_re().captures(link)
    {
        return format!("https://drive.google.com/uc?export=view&id={}", &caps[1]);
    }
    link.to_string()
}
