//! Attachment filename derivation.

/// Characters rejected by common filesystems, besides control characters
const ILLEGAL_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Stem used when the title is missing or sanitizes to nothing
pub const FALLBACK_STEM: &str = "video";

/// Remove control characters and `< > : " / \ | ? *` from a title.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| !c.is_control() && !ILLEGAL_CHARS.contains(c))
        .collect()
}

/// `<sanitized title>.mp4`, or `video.mp4` without a usable title.
pub fn derive_filename(title: Option<&str>) -> String {
    let stem = title
        .map(sanitize_title)
        .filter(|stem| !stem.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_STEM.to_string());
    format!("{}.mp4", stem)
}

/// `Content-Disposition` value with the filename percent-encoded.
pub fn content_disposition(filename: &str) -> String {
    format!("attachment; filename=\"{}\"", urlencoding::encode(filename))
}
