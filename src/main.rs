//! # photo-tidy CLI
//!
//! ## Usage
//! ```bash
//! photo-tidy --path ~/Pictures/2023,~/Pictures/2024
//! ```

mod cli;

use photo_tidy::Result;

fn main() -> Result<()> {
    cli::run()
}
