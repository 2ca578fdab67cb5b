//! # Events Module
//!
//! Every component reports progress and outcomes as typed events through an
//! `EventSender` it is handed by its caller. There is no ambient logger: the
//! CLI owns the receiving end and renders events with `log::spawn_renderer`.
//!
//! ## Example
//! ```rust,ignore
//! let (sender, receiver) = EventChannel::new();
//! let renderer = log::spawn_renderer(receiver);
//!
//! scanner.scan_roots(&roots, &sender)?;
//!
//! drop(sender);
//! renderer.join().ok();
//! ```

mod channel;
pub mod log;
mod types;

pub use channel::{null_sender, EventChannel, EventReceiver, EventSender};
pub use types::*;
