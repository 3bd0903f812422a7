//! Panel showing the drawn sets as rows of balls, followed by any draw
//! diagnostics and the status message.

use super::ball::{self, BALL_HEIGHT};
use crate::draw::{DrawDiagnostic, NumberSet, Severity};
use crate::theme::AppTheme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Width of the "12." label in front of each row
const LABEL_WIDTH: u16 = 4;

pub struct ResultsPanel<'a> {
    sets: &'a [NumberSet],
    diagnostics: &'a [DrawDiagnostic],
    status: Option<&'a str>,
    theme: &'a AppTheme,
}

impl<'a> ResultsPanel<'a> {
    pub fn new(
        sets: &'a [NumberSet],
        diagnostics: &'a [DrawDiagnostic],
        status: Option<&'a str>,
        theme: &'a AppTheme,
    ) -> Self {
        Self {
            sets,
            diagnostics,
            status,
            theme,
        }
    }

    fn message_lines(&self) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = self
            .diagnostics
            .iter()
            .map(|diag| {
                let (prefix, color) = match diag.severity() {
                    Severity::Error => ("error: ", self.theme.status_error),
                    Severity::Warning => ("warning: ", self.theme.status_warning),
                };
                Line::from(vec![
                    Span::styled(prefix, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                    Span::styled(diag.to_string(), Style::default().fg(color)),
                ])
            })
            .collect();

        if let Some(status) = self.status {
            lines.push(Line::from(Span::styled(
                status.to_string(),
                Style::default().fg(self.theme.status_info),
            )));
        }
        lines
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 3 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.window_border))
            .title(Span::styled(
                " Results ",
                Style::default()
                    .fg(self.theme.window_title)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(self.theme.window_background));
        let inner = block.inner(area);
        block.render(area, buf);

        let messages = self.message_lines();
        // Messages stay visible even if that leaves less room for balls
        let message_rows = (messages.len() as u16).min(inner.height);
        let ball_rows = inner.height - message_rows;

        let ball_style = self.theme.ball_style();
        let fits = (ball_rows / BALL_HEIGHT) as usize;
        let shown = if fits < self.sets.len() {
            // Keep one row for the overflow note
            (ball_rows.saturating_sub(1) / BALL_HEIGHT) as usize
        } else {
            self.sets.len()
        };

        let mut y = inner.y;
        for (idx, set) in self.sets.iter().take(shown).enumerate() {
            let label = Paragraph::new(Line::from(Span::styled(
                format!("{:>2}.", idx + 1),
                Style::default().fg(self.theme.text_secondary),
            )));
            label.render(
                Rect::new(inner.x, y + 1, LABEL_WIDTH.min(inner.width), 1),
                buf,
            );

            let row_x = inner.x + LABEL_WIDTH.min(inner.width);
            let row_room = inner.width.saturating_sub(LABEL_WIDTH);
            if set.is_empty() {
                // Shared pool ran dry before this set
                Paragraph::new(Span::styled(
                    "(no numbers left)",
                    Style::default().fg(self.theme.text_secondary),
                ))
                .render(Rect::new(row_x, y + 1, row_room, 1), buf);
            } else {
                let row_area = Rect::new(
                    row_x,
                    y,
                    ball::row_width(set.len()).min(row_room),
                    BALL_HEIGHT,
                );
                Paragraph::new(ball::render_ball_row(set, &ball_style)).render(row_area, buf);
            }
            y += BALL_HEIGHT;
        }

        if shown < self.sets.len() && ball_rows > 0 {
            let more = Paragraph::new(Line::from(Span::styled(
                format!("+{} more (enlarge the terminal)", self.sets.len() - shown),
                Style::default().fg(self.theme.text_secondary),
            )));
            more.render(Rect::new(inner.x, y, inner.width, 1), buf);
        }

        if message_rows > 0 {
            let msg_area = Rect::new(
                inner.x,
                inner.y + ball_rows,
                inner.width,
                message_rows,
            );
            Paragraph::new(messages).render(msg_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::DrawError;
    use crate::theme::{AppTheme, ThemePreference};

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    fn screen(buf: &Buffer) -> String {
        (0..buf.area.height)
            .map(|y| row_text(buf, y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn set(numbers: &[u8]) -> NumberSet {
        NumberSet::from_set(numbers.iter().copied().collect())
    }

    #[test]
    fn test_renders_each_set() {
        let theme = AppTheme::for_preference(ThemePreference::Dark);
        let sets = vec![set(&[1, 2, 3, 4, 5, 6]), set(&[10, 20, 30, 40, 41, 45])];
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);

        ResultsPanel::new(&sets, &[], Some("Drew 2 sets"), &theme).render(area, &mut buf);

        let text = screen(&buf);
        assert!(text.contains("Results"));
        assert!(text.contains("│ 01 │"));
        assert!(text.contains("│ 45 │"));
        assert!(row_text(&buf, 2).contains(" 1."));
        assert!(row_text(&buf, 5).contains(" 2."));
        assert!(text.contains("Drew 2 sets"));
    }

    #[test]
    fn test_renders_validation_error() {
        let theme = AppTheme::for_preference(ThemePreference::Light);
        let diags = vec![DrawDiagnostic::Validation(DrawError::Conflict {
            numbers: vec![2],
        })];
        let area = Rect::new(0, 0, 70, 6);
        let mut buf = Buffer::empty(area);

        ResultsPanel::new(&[], &diags, None, &theme).render(area, &mut buf);

        let text = screen(&buf);
        assert!(text.contains("error: numbers 2 are both included and excluded"));
        assert!(!text.contains(" 1."));
    }

    #[test]
    fn test_overflow_shows_more_line() {
        let theme = AppTheme::default();
        let sets: Vec<NumberSet> = (0..5).map(|_| set(&[1, 2, 3, 4, 5, 6])).collect();
        // 8 inner rows: two sets fit, one row left for the overflow note
        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);

        ResultsPanel::new(&sets, &[], None, &theme).render(area, &mut buf);

        assert!(screen(&buf).contains("+3 more"));
    }

    #[test]
    fn test_empty_set_gets_placeholder() {
        let theme = AppTheme::default();
        let sets = vec![set(&[1, 2, 3]), set(&[])];
        let area = Rect::new(0, 0, 40, 9);
        let mut buf = Buffer::empty(area);

        ResultsPanel::new(&sets, &[], None, &theme).render(area, &mut buf);

        assert!(row_text(&buf, 5).contains("(no numbers left)"));
    }

    #[test]
    fn test_tiny_area_is_noop() {
        let theme = AppTheme::default();
        let area = Rect::new(0, 0, 2, 2);
        let mut buf = Buffer::empty(area);
        ResultsPanel::new(&[], &[], Some("hi"), &theme).render(area, &mut buf);
        assert_eq!(screen(&buf), "  \n  ");
    }
}
