//! Renders events as single-line log entries.
//!
//! Output format: `YYYY-mm-dd HH:MM:SS  LEVEL message`, one event per line on
//! stdout. The subscriber is built explicitly and only installed for the
//! renderer thread, never as the process-wide default.

use super::{Event, EventReceiver, InventoryEvent, ResolveEvent, RunEvent, TreeEvent};
use std::thread::{self, JoinHandle};
use tracing::{error, info, Level};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

/// Timestamp layout used for every log line
pub const LOG_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Build the log subscriber. `RUST_LOG` overrides the default `info` filter.
pub fn build_subscriber() -> impl tracing::Subscriber + Send + Sync {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::new(LOG_TIME_FORMAT.to_string()))
        .with_target(false)
        .with_writer(std::io::stdout)
        .finish()
}

/// Render events on a dedicated thread until every sender is dropped.
pub fn spawn_renderer(receiver: EventReceiver) -> JoinHandle<()> {
    thread::spawn(move || {
        tracing::subscriber::with_default(build_subscriber(), || {
            for event in receiver.iter() {
                render_event(&event);
            }
        });
    })
}

/// Emit one event through whatever subscriber is current.
pub fn render_event(event: &Event) {
    let (level, message) = describe(event);
    if level == Level::ERROR {
        error!("{}", message);
    } else {
        info!("{}", message);
    }
}

/// Level and message for an event
pub fn describe(event: &Event) -> (Level, String) {
    match event {
        Event::Run(RunEvent::Started { roots }) => (
            Level::INFO,
            format!("Starting run over {} root path(s)", roots.len()),
        ),
        Event::Run(RunEvent::Finished) => (Level::INFO, "Full scan ending".to_string()),
        Event::Run(RunEvent::Aborted { message }) => {
            (Level::ERROR, format!("Scan aborted: {}", message))
        }
        Event::Tree(TreeEvent::Started { root }) => (
            Level::INFO,
            format!("Starting scan for duplicates - root folder {}", root.display()),
        ),
        Event::Tree(TreeEvent::InvalidRoot { path }) => (
            Level::ERROR,
            format!("{} is not a valid path", path.display()),
        ),
        Event::Tree(TreeEvent::DirectoryError { path, message }) => (
            Level::ERROR,
            format!("Skipping directory {}: {}", path.display(), message),
        ),
        Event::Tree(TreeEvent::Completed { root, summary }) => (
            Level::INFO,
            format!(
                "Scan completed for {} -- {} directories, {} images, {} removed, {} renamed",
                root.display(),
                summary.directories_scanned,
                summary.images_found,
                summary.duplicates_deleted,
                summary.files_renamed
            ),
        ),
        Event::Inventory(InventoryEvent::Progress(p)) => (
            Level::INFO,
            format!(
                "Runtime: {} Seconds -- Progress: {}/{}",
                p.elapsed_secs, p.completed, p.total
            ),
        ),
        Event::Inventory(InventoryEvent::HashFailed { path, message }) => (
            Level::ERROR,
            format!("Exception thrown for {}: {}", path.display(), message),
        ),
        Event::Inventory(InventoryEvent::MetadataFailed { path, message }) => (
            Level::ERROR,
            format!("Error processing file {}: {}", path.display(), message),
        ),
        Event::Resolve(ResolveEvent::Deleted { path }) => (
            Level::INFO,
            format!("Removed duplicate: {}", path.display()),
        ),
        Event::Resolve(ResolveEvent::Renamed { from, to }) => (
            Level::INFO,
            format!("Renamed: {} to {}", from.display(), to.display()),
        ),
    }
}
