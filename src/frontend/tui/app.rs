use super::lotto_form::{LottoForm, FORM_HEIGHT};
use super::results_panel::ResultsPanel;
use super::widget_traits::TextEditable;
use crate::config::Config;
use crate::core::{AppCore, InputResult};
use crate::frontend::{Frontend, FrontendEvent};
use crate::theme::{AppTheme, ThemePreference};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Widget},
    Terminal,
};
use std::io;
use std::time::Duration;

/// TUI Frontend using ratatui
///
/// Owns the terminal and the input form; everything else it draws comes
/// from `AppCore` on each frame.
pub struct TuiFrontend {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    poll_timeout: Duration,
    form: LottoForm,
    /// Palette resolved for `cached_theme`
    theme_cache: AppTheme,
    cached_theme: ThemePreference,
}

impl TuiFrontend {
    /// Create a new TUI frontend
    ///
    /// Initializes terminal in raw mode, enables bracketed paste, and enters alternate screen.
    pub fn new(config: &Config) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
            .context("Failed to setup terminal")?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor()?;

        Ok(Self {
            terminal,
            poll_timeout: Duration::from_millis(config.ui.poll_timeout_ms),
            form: LottoForm::new(config.draw.default_sets, config.draw.max_sets),
            theme_cache: AppTheme::default(),
            cached_theme: ThemePreference::default(),
        })
    }

    /// Resolve and cache the palette for `preference`
    pub fn update_theme_cache(&mut self, preference: ThemePreference) {
        self.theme_cache = AppTheme::for_preference(preference);
        self.cached_theme = preference;
        tracing::debug!("Theme cache refreshed: {} palette", self.theme_cache.name);
    }

    /// The form's current contents as a generate action
    pub fn initial_generate(&self) -> InputResult {
        InputResult::Generate {
            included: self.form.included_text(),
            excluded: self.form.excluded_text(),
            sets: self.form.sets(),
        }
    }

    /// Route an input event to the form
    pub fn handle_event(&mut self, event: FrontendEvent) -> InputResult {
        match event {
            FrontendEvent::Key(key) => self.form.input(key),
            FrontendEvent::Paste { text } => {
                self.form.insert_text(&text);
                InputResult::Continue
            }
            FrontendEvent::Resize { width, height } => {
                tracing::debug!("Terminal resized to {}x{}", width, height);
                InputResult::Continue
            }
        }
    }

    /// Convert crossterm event to FrontendEvent
    fn convert_event(event: Event) -> Option<FrontendEvent> {
        match event {
            Event::Key(key_event) => {
                // Only process key press events (ignore repeats and releases)
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                Some(FrontendEvent::Key(key_event))
            }
            Event::Resize(w, h) => Some(FrontendEvent::Resize {
                width: w,
                height: h,
            }),
            Event::Paste(text) => Some(FrontendEvent::Paste { text }),
            _ => None,
        }
    }
}

/// Draw one full frame: background, form on top, results below
fn draw_screen(
    form: &mut LottoForm,
    theme: &AppTheme,
    core: &AppCore,
    area: Rect,
    buf: &mut Buffer,
) {
    Block::default()
        .style(Style::default().bg(theme.window_background))
        .render(area, buf);

    let form_height = FORM_HEIGHT.min(area.height);
    let form_area = Rect::new(area.x, area.y, area.width, form_height);
    form.render(form_area, buf, theme, core.theme());

    let results_area = Rect::new(
        area.x,
        area.y + form_height,
        area.width,
        area.height - form_height,
    );
    ResultsPanel::new(
        core.results(),
        core.diagnostics(),
        core.status_message.as_deref(),
        theme,
    )
    .render(results_area, buf);
}

impl Frontend for TuiFrontend {
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>> {
        let mut events = Vec::new();

        while event::poll(self.poll_timeout)? {
            if let Ok(ev) = event::read() {
                if let Some(frontend_event) = Self::convert_event(ev) {
                    events.push(frontend_event);
                }
            }
            if !events.is_empty() {
                break;
            }
        }

        Ok(events)
    }

    fn render(&mut self, core: &AppCore) -> Result<()> {
        if core.theme() != self.cached_theme {
            self.update_theme_cache(core.theme());
        }

        let form = &mut self.form;
        let theme = &self.theme_cache;
        self.terminal.draw(|f| {
            let area = f.area();
            draw_screen(form, theme, core, area, f.buffer_mut());
        })?;

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableBracketedPaste
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TuiFrontend {
    fn drop(&mut self) {
        // Ensure terminal is restored even if cleanup() wasn't called
        let _ = self.cleanup();
    }
}
