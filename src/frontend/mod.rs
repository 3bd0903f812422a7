//! Frontend abstraction layer
//!
//! `Frontend` is the rendering surface the core draws through. The TUI
//! (ratatui + crossterm) is the only implementation.

pub mod events;
pub mod tui;

use crate::core::AppCore;
use anyhow::Result;
pub use events::FrontendEvent;
pub use tui::TuiFrontend;

pub trait Frontend {
    /// Return all pending input events (empty if none arrived before the poll timeout)
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>>;

    /// Draw the current application state
    fn render(&mut self, core: &AppCore) -> Result<()>;

    /// Restore the terminal before exit
    fn cleanup(&mut self) -> Result<()>;
}
