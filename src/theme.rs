//! Light/dark theme preference and the palettes behind it
//!
//! The preference is the only piece of theme state; everything that draws
//! resolves its colors through `AppTheme::for_preference` instead of keeping
//! its own copy.

use ratatui::style::Color;
use std::fmt;
use std::str::FromStr;

/// User-selected theme, persisted under `ThemePreference::STORE_KEY`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    pub const STORE_KEY: &'static str = "theme";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Label for the toggle control (names the theme you would switch to)
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Self::Dark => "Switch to Light Mode",
            Self::Light => "Switch to Dark Mode",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(anyhow::anyhow!("Unknown theme '{}'", other)),
        }
    }
}

/// Colors a single ball is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BallStyle {
    pub background: Color,
    pub text: Color,
    pub shadow: Color,
}

/// Complete application theme defining all UI colors
#[derive(Debug, Clone, PartialEq)]
pub struct AppTheme {
    pub name: String,

    // Window colors
    pub window_border: Color,
    pub window_title: Color,
    pub window_background: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Form colors
    pub form_label: Color,
    pub form_label_focused: Color,
    pub form_field_background: Color,
    pub form_field_text: Color,

    // Status colors
    pub status_info: Color,
    pub status_warning: Color,
    pub status_error: Color,

    pub button_normal: Color,

    // Balls
    pub ball_background: Color,
    pub ball_text: Color,
    pub ball_shadow: Color,
}

impl AppTheme {
    pub fn for_preference(preference: ThemePreference) -> AppTheme {
        match preference {
            ThemePreference::Dark => ThemePresets::dark(),
            ThemePreference::Light => ThemePresets::light(),
        }
    }

    pub fn ball_style(&self) -> BallStyle {
        BallStyle {
            background: self.ball_background,
            text: self.ball_text,
            shadow: self.ball_shadow,
        }
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        ThemePresets::dark()
    }
}

pub struct ThemePresets;

impl ThemePresets {
    /// Dark theme - default
    pub fn dark() -> AppTheme {
        AppTheme {
            name: "Dark".to_string(),

            window_border: Color::Rgb(68, 71, 90),
            window_title: Color::Rgb(230, 230, 230),
            window_background: Color::Rgb(24, 24, 27),

            text_primary: Color::Rgb(230, 230, 230),
            text_secondary: Color::Rgb(150, 150, 160),

            form_label: Color::Rgb(100, 149, 237),
            form_label_focused: Color::Rgb(255, 215, 0),
            form_field_background: Color::Rgb(40, 40, 46),
            form_field_text: Color::Rgb(230, 230, 230),

            status_info: Color::Rgb(100, 149, 237),
            status_warning: Color::Rgb(230, 180, 80),
            status_error: Color::Rgb(240, 90, 90),

            button_normal: Color::Rgb(98, 0, 238),

            ball_background: Color::Rgb(187, 134, 252),
            ball_text: Color::Rgb(18, 18, 18),
            ball_shadow: Color::Rgb(120, 80, 180),
        }
    }

    /// Light theme
    pub fn light() -> AppTheme {
        AppTheme {
            name: "Light".to_string(),

            window_border: Color::Rgb(190, 190, 200),
            window_title: Color::Rgb(33, 33, 33),
            window_background: Color::Rgb(245, 245, 245),

            text_primary: Color::Rgb(33, 33, 33),
            text_secondary: Color::Rgb(100, 100, 110),

            form_label: Color::Rgb(0, 90, 180),
            form_label_focused: Color::Rgb(200, 80, 0),
            form_field_background: Color::Rgb(255, 255, 255),
            form_field_text: Color::Rgb(33, 33, 33),

            status_info: Color::Rgb(0, 90, 180),
            status_warning: Color::Rgb(180, 110, 0),
            status_error: Color::Rgb(200, 30, 30),

            button_normal: Color::Rgb(98, 0, 238),

            ball_background: Color::Rgb(98, 0, 238),
            ball_text: Color::Rgb(255, 255, 255),
            ball_shadow: Color::Rgb(170, 140, 220),
        }
    }
}
