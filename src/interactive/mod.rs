//! Interactive TUI for manual cross-out mode

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
