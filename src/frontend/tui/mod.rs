//! TUI Frontend (ratatui-based)
//!
//! This module implements the Frontend trait using ratatui for terminal rendering.
//! It wraps crossterm for event handling and terminal management.

pub mod app;
pub mod ball;
pub mod lotto_form;
pub mod results_panel;
pub mod widget_traits;

pub use app::TuiFrontend;
