//! # CLI Module
//!
//! Command-line interface for the photo tidier.
//!
//! ## Usage
//! ```bash
//! # Tidy every directory below one root
//! photo-tidy --path ~/Pictures
//!
//! # Several roots at once
//! photo-tidy --path ~/Pictures,/mnt/backup/photos
//!
//! # More detail in the log
//! RUST_LOG=debug photo-tidy --path ~/Pictures
//! ```

use clap::Parser;
use photo_tidy::core::{ResolverConfig, ScanConfig, TreeScanner};
use photo_tidy::error::Result;
use photo_tidy::events::{log, EventChannel};
use std::path::PathBuf;

/// Photo Tidy - delete duplicate photos and name the rest after their capture date
#[derive(Parser, Debug)]
#[command(name = "photo-tidy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Comma separated list of paths to scan
    #[arg(long, required = true, value_delimiter = ',')]
    path: Vec<PathBuf>,
}

/// Run the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    run_scan(cli.path)
}

fn run_scan(roots: Vec<PathBuf>) -> Result<()> {
    let (sender, receiver) = EventChannel::new();
    let renderer = log::spawn_renderer(receiver);

    let scanner = TreeScanner::new(ScanConfig::default(), ResolverConfig::default());
    let result = scanner.scan_roots(&roots, &sender);

    // Dropping the sender lets the renderer drain and exit
    drop(sender);
    renderer.join().ok();

    result.map(|_| ())
}
