//! # Metadata Module
//!
//! Extracts the capture date from a photo's EXIF data and turns it into a
//! filesystem-safe name stem.
//!
//! ## Lookup Order
//! 1. `DateTimeOriginal` (tag 36867)
//! 2. `DateTime` (tag 306)
//!
//! ## Supported Formats
//! Whatever kamadak-exif can find a container in: JPEG, TIFF, HEIF/HEIC,
//! PNG and WebP. Other files report an unreadable-metadata error, which
//! callers treat as "no date".

use crate::error::MetadataError;
use exif::{In, Reader, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Tags consulted for the capture time, most specific first
const DATE_TAGS: [Tag; 2] = [Tag::DateTimeOriginal, Tag::DateTime];

/// Read the capture date of an image, already formatted as a name stem.
///
/// `Ok(None)` means the image carries no usable date. An error means the
/// file could not be opened or is not an image container kamadak-exif
/// understands.
pub fn extract_capture_date(path: &Path) -> Result<Option<String>, MetadataError> {
    let file = File::open(path).map_err(|source| MetadataError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut bufreader = BufReader::new(&file);
    let exif_data = match Reader::new().read_from_container(&mut bufreader) {
        Ok(data) => data,
        Err(exif::Error::NotFound(_)) => return Ok(None),
        Err(e) => {
            return Err(MetadataError::Unreadable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        }
    };

    let raw = DATE_TAGS.iter().find_map(|tag| {
        exif_data
            .get_field(*tag, In::PRIMARY)
            .and_then(|field| ascii_value(&field.value))
    });

    Ok(raw.map(|raw| format_capture_date(&raw)))
}

/// Turn a raw `YYYY:MM:DD HH:MM:SS` value into a name stem.
///
/// The first two colons become hyphens, every later one a period. The value
/// is not validated otherwise; path separators and NUL are replaced by
/// hyphens so the result is always a single path component.
pub fn format_capture_date(raw: &str) -> String {
    let mut colons = 0;
    raw.chars()
        .map(|c| match c {
            ':' => {
                colons += 1;
                if colons <= 2 {
                    '-'
                } else {
                    '.'
                }
            }
            '/' | '\\' | '\0' => '-',
            other => other,
        })
        .collect()
}

/// First non-empty string of an EXIF ASCII value
fn ascii_value(value: &Value) -> Option<String> {
    if let Value::Ascii(ref vec) = value {
        for bytes in vec {
            if let Ok(s) = std::str::from_utf8(bytes) {
                let trimmed = s.trim_end_matches('\0').trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }
    }
    None
}
