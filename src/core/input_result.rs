//! Unified enum describing what should happen after the form handles input.
//!
//! The form widget never touches application state itself; it returns one of
//! these and `AppCore::apply` performs the side effects.

/// Result of handling a key in the lotto form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResult {
    /// Nothing to do beyond redrawing the form
    Continue,

    /// Draw new sets from the current field contents
    Generate {
        included: String,
        excluded: String,
        sets: usize,
    },

    /// Flip light/dark theme
    ToggleTheme,

    /// Copy the displayed sets to the system clipboard
    CopyResults,

    /// Leave the application
    Quit,
}

impl InputResult {
    /// Check if this result changes anything `AppCore` owns
    pub fn touches_core(&self) -> bool {
        !matches!(self, InputResult::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touches_core() {
        assert!(!InputResult::Continue.touches_core());
        assert!(InputResult::ToggleTheme.touches_core());
        assert!(InputResult::Quit.touches_core());
    }
}
