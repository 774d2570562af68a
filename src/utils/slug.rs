//! URL slugification for collection names.

use crate::config::SlugMode;

/// Characters forbidden in URL path segments
const FORBIDDEN_CHARS: &[char] = &[
    '<', '>', ':', '|', '?', '*', '#', '\\', '/', '(', ')', '[', ']', '\t', '\r', '\n',
];

/// Convert a collection name to a URL path segment according to `mode`.
pub fn slugify_segment(text: &str, mode: SlugMode) -> String {
    match mode {
        SlugMode::On => slugify(text),
        SlugMode::Safe => sanitize_text(text),
        SlugMode::No => text.to_owned(),
    }
}

/// Transliterate to ASCII, lowercase, and join alphanumeric runs with `-`.
///
/// `"Hello World"` → `"hello-world"`, `"你好"` → `"ni-hao"`.
fn slugify(text: &str) -> String {
    let ascii = deunicode::deunicode(text);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Remove forbidden characters and replace whitespace with underscores
fn sanitize_text(text: &str) -> String {
    text.trim()
        .chars()
        .filter(|c| !FORBIDDEN_CHARS.contains(c))
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}
