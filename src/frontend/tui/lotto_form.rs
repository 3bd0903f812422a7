//! Input form: included/excluded number fields, a sets slider and the
//! generate / theme buttons.
//!
//! The form only collects input. Every action that changes application state
//! is handed back as an `InputResult` for `AppCore` to apply.

use super::widget_traits::{FieldNavigable, TextEditable};
use crate::core::InputResult;
use crate::theme::{AppTheme, ThemePreference};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget as RatatuiWidget},
};
use tui_textarea::TextArea;

const FIELD_INCLUDED: usize = 0;
const FIELD_EXCLUDED: usize = 1;
const FIELD_SETS: usize = 2;
const FIELD_COUNT: usize = 3;

/// Rows the form needs, borders included
pub const FORM_HEIGHT: u16 = 8;

const LABEL_WIDTH: u16 = 12;

pub struct LottoForm {
    focused_field: usize,
    included: TextArea<'static>,
    excluded: TextArea<'static>,
    sets: usize,
    max_sets: usize,
}

impl LottoForm {
    pub fn new(default_sets: usize, max_sets: usize) -> Self {
        let mut included = TextArea::default();
        included.set_placeholder_text("e.g. 7, 13, 22");

        let mut excluded = TextArea::default();
        excluded.set_placeholder_text("e.g. 1, 45");

        let max_sets = max_sets.max(1);
        Self {
            focused_field: FIELD_INCLUDED,
            included,
            excluded,
            sets: default_sets.clamp(1, max_sets),
            max_sets,
        }
    }

    pub fn sets(&self) -> usize {
        self.sets
    }

    pub fn included_text(&self) -> String {
        self.included.lines().join("")
    }

    pub fn excluded_text(&self) -> String {
        self.excluded.lines().join("")
    }

    fn generate(&self) -> InputResult {
        InputResult::Generate {
            included: self.included_text(),
            excluded: self.excluded_text(),
            sets: self.sets,
        }
    }

    fn adjust_sets(&mut self, delta: isize) {
        let next = (self.sets as isize + delta).clamp(1, self.max_sets as isize);
        self.sets = next as usize;
    }

    /// Only digits, separators and spaces make sense in the number fields
    fn accepts(c: char) -> bool {
        c.is_ascii_digit() || c == ',' || c == ' '
    }

    /// Clear both number fields
    pub fn clear(&mut self) {
        for field in [&mut self.included, &mut self.excluded] {
            field.select_all();
            field.cut();
        }
    }

    /// Keep only what belongs in a number list; line breaks become separators
    fn filter_input(text: &str) -> String {
        text.chars()
            .map(|c| if c == '\n' || c == '\r' { ',' } else { c })
            .filter(|&c| Self::accepts(c))
            .collect()
    }

    pub fn input(&mut self, key: KeyEvent) -> InputResult {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => return InputResult::Quit,
            KeyCode::Char('q') | KeyCode::Char('c') if ctrl => return InputResult::Quit,
            KeyCode::Char('t') if ctrl => return InputResult::ToggleTheme,
            KeyCode::F(2) => return InputResult::ToggleTheme,
            KeyCode::Char('y') if ctrl => return InputResult::CopyResults,
            KeyCode::Char('g') if ctrl => return self.generate(),
            KeyCode::F(5) | KeyCode::Enter => return self.generate(),
            KeyCode::Char('a') if ctrl => self.select_all(),
            KeyCode::Char('l') if ctrl => self.clear(),
            KeyCode::Char('v') if ctrl => {
                if let Err(e) = self.paste_from_clipboard() {
                    tracing::warn!("Paste failed: {:#}", e);
                }
            }
            KeyCode::Tab => self.next_field(),
            KeyCode::BackTab => self.previous_field(),
            _ if self.focused_field == FIELD_SETS => match key.code {
                KeyCode::Left | KeyCode::Down | KeyCode::Char('-') => self.adjust_sets(-1),
                KeyCode::Right | KeyCode::Up | KeyCode::Char('+') => self.adjust_sets(1),
                KeyCode::Home => self.sets = 1,
                KeyCode::End => self.sets = self.max_sets,
                _ => {}
            },
            // Unbound Ctrl chords would reach the textarea's own bindings
            // (Ctrl+M/Ctrl+J split the line)
            KeyCode::Char(c) if ctrl || !Self::accepts(c) => {
                tracing::trace!("Ignoring {:?} ({:?}) in number field", c, key.modifiers);
            }
            KeyCode::Char(_)
            | KeyCode::Backspace
            | KeyCode::Delete
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Home
            | KeyCode::End => {
                if let Some(field) = self.get_focused_field_mut() {
                    field.input(key);
                }
            }
            _ => {}
        }

        InputResult::Continue
    }

    pub fn render(
        &mut self,
        area: Rect,
        buf: &mut Buffer,
        theme: &AppTheme,
        preference: ThemePreference,
    ) {
        if area.width < LABEL_WIDTH + 4 || area.height < FORM_HEIGHT {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.window_border))
            .title(Span::styled(
                " Lotto Numbers ",
                Style::default()
                    .fg(theme.window_title)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(theme.window_background));
        let inner = block.inner(area);
        block.render(area, buf);

        let focused = self.focused_field;
        let x = inner.x + 1;
        let width = inner.width.saturating_sub(2);

        Self::render_text_field(
            focused == FIELD_INCLUDED,
            "Included:",
            &mut self.included,
            Rect::new(x, inner.y, width, 1),
            buf,
            theme,
        );
        Self::render_text_field(
            focused == FIELD_EXCLUDED,
            "Excluded:",
            &mut self.excluded,
            Rect::new(x, inner.y + 1, width, 1),
            buf,
            theme,
        );
        self.render_slider(
            focused == FIELD_SETS,
            Rect::new(x, inner.y + 2, width, 1),
            buf,
            theme,
        );

        let button = Style::default()
            .fg(theme.text_primary)
            .add_modifier(Modifier::BOLD);
        let buttons = Line::from(vec![
            Span::styled("[ Generate (Enter) ]", button.bg(theme.button_normal).fg(theme.ball_text)),
            Span::raw("  "),
            Span::styled(format!("[ {} (Ctrl+T) ]", preference.toggle_label()), button),
        ]);
        Paragraph::new(buttons).render(Rect::new(x, inner.y + 4, width, 1), buf);

        let status = "Tab:Next  Shift+Tab:Prev  Ctrl+Y:Copy  Ctrl+L:Clear  Esc:Quit";
        buf.set_string(
            x,
            inner.y + 5,
            status,
            Style::default().fg(theme.text_secondary),
        );
    }

    fn label_style(is_focused: bool, theme: &AppTheme) -> Style {
        if is_focused {
            Style::default()
                .fg(theme.form_label_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.form_label)
        }
    }

    fn render_text_field(
        is_focused: bool,
        label: &str,
        textarea: &mut TextArea,
        area: Rect,
        buf: &mut Buffer,
        theme: &AppTheme,
    ) {
        let label_para = Paragraph::new(Line::from(Span::styled(
            label,
            Self::label_style(is_focused, theme),
        )));
        RatatuiWidget::render(
            label_para,
            Rect::new(area.x, area.y, LABEL_WIDTH, 1),
            buf,
        );

        let base_style = Style::default()
            .fg(theme.form_field_text)
            .bg(theme.form_field_background);
        textarea.set_style(base_style);
        textarea.set_cursor_style(if is_focused {
            Style::default()
                .bg(theme.text_primary)
                .fg(theme.form_field_background)
        } else {
            base_style
        });
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_style(
            Style::default()
                .fg(theme.text_secondary)
                .bg(theme.form_field_background),
        );
        textarea.set_block(Block::default().borders(Borders::NONE).style(base_style));

        let input_area = Rect::new(
            area.x + LABEL_WIDTH,
            area.y,
            area.width.saturating_sub(LABEL_WIDTH),
            1,
        );
        RatatuiWidget::render(&*textarea, input_area, buf);
    }

    fn render_slider(&self, is_focused: bool, area: Rect, buf: &mut Buffer, theme: &AppTheme) {
        let track: String = (1..=self.max_sets)
            .map(|n| if n <= self.sets { '■' } else { '□' })
            .collect();
        let value_style = if is_focused {
            Style::default()
                .fg(theme.form_label_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.form_field_text)
        };

        let line = Line::from(vec![
            Span::styled(
                format!("{:<width$}", "Sets:", width = LABEL_WIDTH as usize),
                Self::label_style(is_focused, theme),
            ),
            Span::styled(format!("◀ {:>2} ▶  ", self.sets), value_style),
            Span::styled(track, Style::default().fg(theme.ball_background)),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

impl TextEditable for LottoForm {
    fn get_focused_field_mut(&mut self) -> Option<&mut TextArea<'static>> {
        match self.focused_field {
            FIELD_INCLUDED => Some(&mut self.included),
            FIELD_EXCLUDED => Some(&mut self.excluded),
            _ => None,
        }
    }

    /// Pasted text loses anything that isn't part of a number list
    fn insert_text(&mut self, text: &str) {
        let filtered = Self::filter_input(text);
        if let Some(field) = self.get_focused_field_mut() {
            field.insert_str(filtered);
        }
    }
}

impl FieldNavigable for LottoForm {
    fn next_field(&mut self) {
        self.focused_field = (self.focused_field + 1) % FIELD_COUNT;
    }

    fn previous_field(&mut self) {
        self.focused_field = if self.focused_field == 0 {
            FIELD_COUNT - 1
        } else {
            self.focused_field - 1
        };
    }

    fn current_field(&self) -> usize {
        self.focused_field
    }
}
