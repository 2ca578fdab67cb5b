//! File filtering logic for the scanner.

use std::path::Path;

/// Name suffixes of the files treated as images
pub const DEFAULT_EXTENSIONS: [&str; 10] = [
    ".jpg", ".png", ".gif", ".bmp", ".tif", ".webp", ".svg", ".jpeg", ".tiff", ".heic",
];

/// Decides whether a file is an image candidate by its name alone
#[derive(Debug, Clone)]
pub struct ImageFilter {
    /// Lowercase suffixes, each starting with a dot
    extensions: Vec<String>,
}

impl ImageFilter {
    /// Create a new filter with the default image extensions
    pub fn new() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Override the list of extensions to accept; a leading dot is optional
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions
            .into_iter()
            .map(|ext| {
                let ext = ext.to_lowercase();
                if ext.starts_with('.') {
                    ext
                } else {
                    format!(".{}", ext)
                }
            })
            .collect();
        self
    }

    /// Check if a file should be included.
    ///
    /// Matches the lowercased file name against the suffix list, so the file
    /// contents never matter. Names that are not valid UTF-8 are decoded
    /// lossily; the suffixes are ASCII and still match.
    pub fn should_include(&self, path: &Path) -> bool {
        match path.file_name() {
            Some(name) => {
                let name = name.to_string_lossy().to_lowercase();
                self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
            }
            None => false,
        }
    }
}

impl Default for ImageFilter {
    fn default() -> Self {
        Self::new()
    }
}
