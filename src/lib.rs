//! # Photo Tidy
//!
//! Removes byte-identical duplicate photos and renames the copies that are
//! kept after the moment they were taken.
//!
//! ## Behaviour
//! - **Directory scoped** - copies are only compared within one directory
//! - **Exact matches only** - files must have identical content
//! - **First one wins** - the first copy found is kept, the rest deleted
//! - **Never overwrites** - a taken name gets a numeric suffix
//!
//! ## Architecture
//! - `core` - Hashing, metadata, inventory and resolution
//! - `events` - Progress and outcome events plus their log rendering
//! - `error` - Error types

pub mod core;
pub mod error;
pub mod events;

// Re-export commonly used types at the crate root
pub use error::{DedupError, Result};
