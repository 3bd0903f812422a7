//! Core application logic
//!
//! Owns the theme preference and the displayed draw results, and turns form
//! actions into draw engine calls. NO imports from frontend/ or rendering
//! code; frontends read from `AppCore` and render.

pub mod app_core;
pub mod input_result;

pub use app_core::AppCore;
pub use input_result::InputResult;
