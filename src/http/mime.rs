//! Content family detection
//!
//! Maps a file extension to the family that decides both the `Content-Type`
//! header and which body path runs. Matching is exact and case-sensitive.

use image::ImageFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFamily {
    /// `.html`, served as text with token substitution
    Html,
    /// `.jpg`
    Jpeg,
    /// `.png`
    Png,
    /// `.gif`
    Gif,
    /// `.ico`
    Icon,
    /// Anything else: empty content type, no body
    Unknown,
}

impl ContentFamily {
    /// # Example
    ///
    /// ```
    /// # use webworker::http::mime::ContentFamily;
    /// assert_eq!(ContentFamily::from_extension(Some("png")), ContentFamily::Png);
    /// assert_eq!(ContentFamily::from_extension(Some("PNG")), ContentFamily::Unknown);
    /// assert_eq!(ContentFamily::from_extension(None), ContentFamily::Unknown);
    /// ```
    pub fn from_extension(ext: Option<&str>) -> Self {
        match ext {
            Some("html") => ContentFamily::Html,
            Some("jpg") => ContentFamily::Jpeg,
            Some("png") => ContentFamily::Png,
            Some("gif") => ContentFamily::Gif,
            Some("ico") => ContentFamily::Icon,
            _ => ContentFamily::Unknown,
        }
    }

    pub fn from_path(path: &str) -> Self {
        Self::from_extension(file_extension(path))
    }

    /// Value of the `Content-Type` header. Empty for `Unknown`.
    pub fn content_type(&self) -> &'static str {
        match self {
            ContentFamily::Html => "text/html",
            ContentFamily::Jpeg => "image/jpg",
            ContentFamily::Png => "image/png",
            ContentFamily::Gif => "image/gif",
            ContentFamily::Icon => "image/x-icon",
            ContentFamily::Unknown => "",
        }
    }

    /// Target encoding for the image families.
    pub fn image_format(&self) -> Option<ImageFormat> {
        match self {
            ContentFamily::Jpeg => Some(ImageFormat::Jpeg),
            ContentFamily::Png => Some(ImageFormat::Png),
            ContentFamily::Gif => Some(ImageFormat::Gif),
            ContentFamily::Icon => Some(ImageFormat::Ico),
            ContentFamily::Html | ContentFamily::Unknown => None,
        }
    }
}

/// Extension of the last path component: the text after its final `.`.
///
/// There is no extension when the name has no `.` or only a leading one
/// (`.ico` is a hidden file, not an icon).
pub fn file_extension(path: &str) -> Option<&str> {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rfind('.') {
        Some(0) | None => None,
        Some(idx) => Some(&name[idx + 1..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of_last_component_only() {
        assert_eq!(file_extension("/a.dir/readme"), None);
        assert_eq!(file_extension("/site/logo.png"), Some("png"));
        assert_eq!(file_extension("/archive.tar.gz"), Some("gz"));
    }

    #[test]
    fn test_leading_dot_is_not_an_extension() {
        assert_eq!(file_extension("/.ico"), None);
        assert_eq!(file_extension(".html"), None);
    }

    #[test]
    fn test_trailing_dot_is_empty_extension() {
        assert_eq!(file_extension("/page."), Some(""));
        assert_eq!(ContentFamily::from_path("/page."), ContentFamily::Unknown);
    }
}
