//! Lottery ball rendering.
//!
//! A ball is a pure function of its number and the current `BallStyle`; there
//! is no per-ball state to keep in sync, so a theme switch only needs a
//! redraw with the new style.

use crate::draw::NumberSet;
use crate::theme::BallStyle;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};

pub const BALL_WIDTH: u16 = 6;
pub const BALL_HEIGHT: u16 = 3;
pub const BALL_GAP: u16 = 1;

/// Render one ball as three rows:
///
/// ```text
/// ╭────╮
/// │ 07 │
/// ╰────╯
/// ```
pub fn render_ball(value: u8, style: &BallStyle) -> Text<'static> {
    let edge = Style::default().fg(style.shadow);
    let face = Style::default()
        .fg(style.text)
        .bg(style.background)
        .add_modifier(Modifier::BOLD);

    Text::from(vec![
        Line::from(Span::styled("╭────╮", edge)),
        Line::from(vec![
            Span::styled("│", edge),
            Span::styled(format!(" {:02} ", value), face),
            Span::styled("│", edge),
        ]),
        Line::from(Span::styled("╰────╯", edge)),
    ])
}

/// Render a whole set as one row of balls separated by `BALL_GAP` columns
pub fn render_ball_row(set: &NumberSet, style: &BallStyle) -> Text<'static> {
    let balls: Vec<Text<'static>> = set
        .numbers()
        .iter()
        .map(|&n| render_ball(n, style))
        .collect();

    let lines: Vec<Line<'static>> = (0..BALL_HEIGHT as usize)
        .map(|row| {
            let mut spans = Vec::new();
            for (i, ball) in balls.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" ".repeat(BALL_GAP as usize)));
                }
                spans.extend(ball.lines[row].spans.iter().cloned());
            }
            Line::from(spans)
        })
        .collect();

    Text::from(lines)
}

/// Columns needed to show `count` balls side by side
pub fn row_width(count: usize) -> u16 {
    if count == 0 {
        return 0;
    }
    count as u16 * BALL_WIDTH + (count as u16 - 1) * BALL_GAP
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{AppTheme, ThemePreference};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn dark() -> BallStyle {
        AppTheme::for_preference(ThemePreference::Dark).ball_style()
    }

    #[test]
    fn test_ball_shape() {
        let ball = render_ball(7, &dark());
        assert_eq!(ball.lines.len(), BALL_HEIGHT as usize);
        assert_eq!(line_text(&ball.lines[0]), "╭────╮");
        assert_eq!(line_text(&ball.lines[1]), "│ 07 │");
        assert_eq!(line_text(&ball.lines[2]), "╰────╯");
        for line in &ball.lines {
            assert_eq!(line.width(), BALL_WIDTH as usize);
        }
    }

    #[test]
    fn test_ball_uses_style_colors() {
        let style = dark();
        let ball = render_ball(45, &style);
        let face = &ball.lines[1].spans[1];
        assert_eq!(face.style.bg, Some(style.background));
        assert_eq!(face.style.fg, Some(style.text));
        assert_eq!(ball.lines[0].spans[0].style.fg, Some(style.shadow));
    }

    #[test]
    fn test_theme_switch_changes_only_style() {
        let light = AppTheme::for_preference(ThemePreference::Light).ball_style();
        let a = render_ball(12, &dark());
        let b = render_ball(12, &light);
        assert_eq!(line_text(&a.lines[1]), line_text(&b.lines[1]));
        assert_ne!(a, b);
    }

    #[test]
    fn test_row_layout() {
        let set = NumberSet::from_set([3, 14, 15, 26, 35, 41].into_iter().collect());
        let row = render_ball_row(&set, &dark());
        assert_eq!(row.lines.len(), 3);
        assert_eq!(
            line_text(&row.lines[1]),
            "│ 03 │ │ 14 │ │ 15 │ │ 26 │ │ 35 │ │ 41 │"
        );
        assert_eq!(row.lines[0].width(), row_width(6) as usize);
    }

    #[test]
    fn test_empty_row() {
        let set = NumberSet::from_set(Default::default());
        let row = render_ball_row(&set, &dark());
        assert!(row.lines.iter().all(|l| l.width() == 0));
        assert_eq!(row_width(0), 0);
    }
}
