//! Behavior traits for form widgets
//!
//! Shared text-field and focus behavior so the key handling in each form
//! only has to deal with what is specific to it.

use anyhow::Result;
use tui_textarea::TextArea;

/// Trait for widgets with text input fields
pub trait TextEditable {
    /// Get mutable reference to the currently focused text field
    fn get_focused_field_mut(&mut self) -> Option<&mut TextArea<'static>>;

    /// Select all text in the focused field (Ctrl+A)
    fn select_all(&mut self) {
        if let Some(field) = self.get_focused_field_mut() {
            field.select_all();
        }
    }

    /// Insert text into the focused field, applying the widget's input filter
    fn insert_text(&mut self, text: &str);

    /// Paste text from clipboard (Ctrl+V)
    ///
    /// Goes through `insert_text` so pasted text is filtered like a
    /// bracketed paste.
    fn paste_from_clipboard(&mut self) -> Result<()> {
        let text = crate::clipboard::paste()?;
        self.insert_text(&text);
        Ok(())
    }
}

/// Trait for widgets that support field navigation (forms)
pub trait FieldNavigable {
    /// Move to next field (Tab)
    fn next_field(&mut self);

    /// Move to previous field (Shift+Tab)
    fn previous_field(&mut self);

    /// Get the current field index
    fn current_field(&self) -> usize;
}
