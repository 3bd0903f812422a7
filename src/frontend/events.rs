//! Frontend-agnostic input events.
//!
//! Frontends translate their native event stream (crossterm for the TUI)
//! into this enum so the main loop only handles one event shape.

use crossterm::event::KeyEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum FrontendEvent {
    /// Keyboard input
    Key(KeyEvent),
    /// Terminal/window resize
    Resize { width: u16, height: u16 },
    /// Paste event (bracketed paste)
    Paste { text: String },
}

impl FrontendEvent {
    /// Whether the event only affects layout (nothing for the form to handle)
    pub fn is_resize(&self) -> bool {
        matches!(self, Self::Resize { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_is_resize() {
        let key_event = FrontendEvent::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
        assert!(!key_event.is_resize());

        let resize_event = FrontendEvent::Resize {
            width: 120,
            height: 40,
        };
        assert!(resize_event.is_resize());
        assert!(!FrontendEvent::Paste {
            text: "1".to_string()
        }
        .is_resize());
    }
}
