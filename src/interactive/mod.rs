//! Interactive TUI interface
//!
//! Live search over a prefix map, re-queried on every keystroke.

pub mod app;
mod rendering;

pub use app::{App, run_tui};
