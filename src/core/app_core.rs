use crate::config::Config;
use crate::core::InputResult;
use crate::draw::{self, Constraints, DrawDiagnostic, DrawRequest, NumberSet};
use crate::store::KeyValueStore;
use crate::theme::ThemePreference;
use rand::RngCore;

/// Core application state (frontend-agnostic)
///
/// AppCore owns everything a generate or toggle action changes: the theme
/// preference, the sets currently on screen and the diagnostics of the draw
/// that produced them. Frontends read from it and never mutate it directly.
pub struct AppCore {
    /// Application configuration
    pub config: Config,

    /// Persistent key-value store (theme preference lives here)
    store: Box<dyn KeyValueStore>,

    /// Random source handed to the draw engine
    rng: Box<dyn RngCore>,

    theme: ThemePreference,

    /// Sets from the most recent draw
    results: Vec<NumberSet>,

    /// Warnings/errors from the most recent draw
    diagnostics: Vec<DrawDiagnostic>,

    /// One-line feedback for the status bar (copy result, draw summary)
    pub status_message: Option<String>,

    /// Application running flag
    pub running: bool,

    /// Set whenever something visible changed
    pub needs_render: bool,
}

impl AppCore {
    /// Create the core, reading the persisted theme (dark if absent or unknown)
    pub fn new(config: Config, store: Box<dyn KeyValueStore>, rng: Box<dyn RngCore>) -> Self {
        let theme = match store.get(ThemePreference::STORE_KEY) {
            Some(saved) => saved.parse().unwrap_or_else(|e| {
                tracing::warn!("{}, falling back to dark", e);
                ThemePreference::Dark
            }),
            None => ThemePreference::Dark,
        };
        tracing::info!("Starting with {} theme", theme);

        Self {
            config,
            store,
            rng,
            theme,
            results: Vec::new(),
            diagnostics: Vec::new(),
            status_message: None,
            running: true,
            needs_render: true,
        }
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    pub fn results(&self) -> &[NumberSet] {
        &self.results
    }

    pub fn diagnostics(&self) -> &[DrawDiagnostic] {
        &self.diagnostics
    }

    /// Parse the form fields, draw, and replace whatever was displayed before
    pub fn generate(&mut self, included: &str, excluded: &str, sets: usize) {
        let sets = self.config.draw.clamp_sets(sets);
        let request = DrawRequest::new(
            self.config.draw.set_size,
            sets,
            Constraints::parse(included, excluded),
        )
        .with_pool_sharing(self.config.draw.pool_sharing);

        tracing::debug!("Drawing: {:?}", request);
        let outcome = draw::draw_sets(&request, &mut *self.rng);

        self.status_message = if outcome.is_rejected() {
            None
        } else {
            Some(format!(
                "Drew {} set{}",
                outcome.sets.len(),
                if outcome.sets.len() == 1 { "" } else { "s" }
            ))
        };
        tracing::info!(
            "Generated {} sets with {} diagnostics",
            outcome.sets.len(),
            outcome.diagnostics.len()
        );

        self.results = outcome.sets;
        self.diagnostics = outcome.diagnostics;
        self.needs_render = true;
    }

    /// Flip light/dark and persist the new preference.
    ///
    /// A failed write is logged; the toggle still takes effect for this session.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(e) = self
            .store
            .set(ThemePreference::STORE_KEY, self.theme.as_str())
        {
            tracing::warn!("Failed to persist theme: {:#}", e);
        }
        tracing::info!("Switched to {} theme", self.theme);
        self.needs_render = true;
    }

    /// Displayed sets, one per line
    pub fn results_text(&self) -> String {
        self.results
            .iter()
            .map(|set| set.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Apply an action coming back from the form
    pub fn apply(&mut self, result: InputResult) {
        match result {
            InputResult::Continue => {}
            InputResult::Generate {
                included,
                excluded,
                sets,
            } => self.generate(&included, &excluded, sets),
            InputResult::ToggleTheme => self.toggle_theme(),
            InputResult::CopyResults => self.copy_results(),
            InputResult::Quit => {
                tracing::info!("Quit requested");
                self.running = false;
            }
        }
        self.needs_render = true;
    }

    fn copy_results(&mut self) {
        let text = self.results_text();
        self.status_message = Some(if text.is_empty() {
            "Nothing to copy".to_string()
        } else {
            match crate::clipboard::copy(&text) {
                Ok(()) => format!("Copied {} sets to clipboard", self.results.len()),
                Err(e) => {
                    tracing::warn!("Clipboard copy failed: {:#}", e);
                    format!("Copy failed: {}", e)
                }
            }
        });
    }
}
