//! # Scanner Module
//!
//! Finds image files and the directories that hold them.
//!
//! ## Supported Formats
//! Matched by file name suffix, case-insensitively:
//! `.jpg .jpeg .png .gif .bmp .tif .tiff .webp .svg .heic`
//!
//! ## Example
//! ```rust,ignore
//! use photo_tidy::core::scanner::{ScanConfig, TreeScanner};
//! use photo_tidy::core::resolver::ResolverConfig;
//!
//! let scanner = TreeScanner::new(ScanConfig::default(), ResolverConfig::default());
//! let summary = scanner.scan_roots(&["/Users/photos".into()], &sender)?;
//! ```

mod filter;
mod inventory;
mod walker;

pub use filter::{ImageFilter, DEFAULT_EXTENSIONS};
pub use inventory::DirectoryInventory;
pub use walker::{ScanConfig, TreeScanner};
