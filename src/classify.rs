//! Extension-based destination classification.
//!
//! Maps a filename to a destination category via static extension tables.
//! Matching is case-insensitive; a file without an extension (including
//! hidden files like `.bashrc`) classifies as [`Category::Other`].

/// Image extensions (lowercase, without the leading dot).
const IMAGE_EXTS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "tif", "tiff", "webp", "heic", "heif", "avif",
];

/// Video extensions (lowercase, without the leading dot).
const VIDEO_EXTS: &[&str] = &[
    "mp4", "mov", "m4v", "avi", "mkv", "webm", "wmv", "flv", "mpeg", "mpg", "3gp", "3g2", "mts",
    "m2ts",
];

/// Destination bucket for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Image,
    Video,
    Other,
}

impl Category {
    /// Name of the destination subdirectory for this category.
    #[must_use]
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Image => "images",
            Category::Video => "videos",
            Category::Other => "others",
        }
    }
}

/// Classify a filename by its extension.
///
/// The extension is the substring after the last `.`, lowercased. A name
/// with no dot, or whose only dot is the first character, has an empty
/// extension and classifies as `Other`. The image table is consulted first,
/// then the video table.
#[must_use]
pub fn classify(file_name: &str) -> Category {
    let ext = match file_name.rfind('.') {
        Some(idx) if idx > 0 => file_name[idx + 1..].to_lowercase(),
        _ => String::new(),
    };

    if IMAGE_EXTS.contains(&ext.as_str()) {
        Category::Image
    } else if VIDEO_EXTS.contains(&ext.as_str()) {
        Category::Video
    } else {
        Category::Other
    }
}
