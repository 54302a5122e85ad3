//! Component library theme
//!
//! The theme is installed as a shell plugin and read by the shared
//! components through the reactive context.

use leptos::prelude::*;

use crate::api::Severity;
use crate::shell::Plugin;

/// Visual tone of a badge or notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Neutral,
}

impl From<Severity> for Tone {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::High => Tone::Danger,
            Severity::Medium => Tone::Warning,
            Severity::Unknown => Tone::Neutral,
        }
    }
}

/// Colors and spacing shared by the dashboard components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub font_family: &'static str,
    pub max_width: &'static str,
    pub accent: &'static str,
    pub border: &'static str,
    pub success: (&'static str, &'static str),
    pub warning: (&'static str, &'static str),
    pub danger: (&'static str, &'static str),
    pub neutral: (&'static str, &'static str),
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font_family: "system-ui, sans-serif",
            max_width: "1200px",
            accent: "#409eff",
            border: "#dee2e6",
            success: ("#155724", "#d4edda"),
            warning: ("#856404", "#fff3cd"),
            danger: ("#721c24", "#f8d7da"),
            neutral: ("#383d41", "#e2e3e5"),
        }
    }
}

impl Theme {
    /// (foreground, background) for a tone
    pub fn colors(&self, tone: Tone) -> (&'static str, &'static str) {
        match tone {
            Tone::Success => self.success,
            Tone::Warning => self.warning,
            Tone::Danger => self.danger,
            Tone::Neutral => self.neutral,
        }
    }

    pub fn page_style(&self) -> String {
        format!(
            "font-family: {}; max-width: {}; margin: 0 auto; padding: 1rem;",
            self.font_family, self.max_width
        )
    }

    pub fn table_style(&self) -> &'static str {
        "width: 100%; border-collapse: collapse;"
    }

    pub fn header_row_style(&self) -> String {
        format!("border-bottom: 2px solid {};", self.border)
    }

    pub fn row_style(&self) -> String {
        format!("border-bottom: 1px solid {};", self.border)
    }

    pub fn cell_style(&self) -> &'static str {
        "padding: 0.5rem; text-align: left;"
    }

    pub fn badge_style(&self, tone: Tone) -> String {
        let (color, bg) = self.colors(tone);
        format!(
            "display: inline-block; padding: 0.25em 0.6em; border-radius: 0.25rem; \
             font-size: 0.85em; font-weight: 600; color: {}; background-color: {};",
            color, bg
        )
    }

    pub fn link_style(&self) -> String {
        format!("color: {}; text-decoration: none;", self.accent)
    }
}

/// Shell plugin providing the [`Theme`] context
#[derive(Debug, Clone, Default)]
pub struct ThemePlugin {
    theme: Theme,
}

impl ThemePlugin {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

impl Plugin for ThemePlugin {
    fn name(&self) -> &'static str {
        "theme"
    }

    fn install(&self) {
        provide_context(self.theme.clone());
    }
}

/// The installed theme, or the default one when no plugin provided it
pub fn use_theme() -> Theme {
    use_context::<Theme>().unwrap_or_default()
}
