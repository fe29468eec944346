use ratatui::style::{Color, Modifier, Style};

use crate::domain::FocusStatus;

/// Consistent theme for the TUI
pub struct Theme {
    pub selected: Style,
    pub focused: Style,
    pub error: Style,
    pub success: Style,
    pub warning: Style,
    pub muted: Style,
    pub highlight: Style,
    pub disabled: Style,
    pub modal_border: Style,
    pub key_hint: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            selected: Style::default()
                .bg(Color::Rgb(50, 50, 80))
                .add_modifier(Modifier::BOLD),
            focused: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            error: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            success: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            warning: Style::default()
                .fg(Color::Yellow),
            muted: Style::default()
                .fg(Color::DarkGray),
            highlight: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            disabled: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
            modal_border: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            key_hint: Style::default()
                .fg(Color::Cyan),
        }
    }
}

impl Theme {
    /// Accent colour of a focus status
    pub fn status_color(status: FocusStatus) -> Color {
        match status {
            FocusStatus::Work => Color::Blue,
            FocusStatus::Privat => Color::Green,
            FocusStatus::Sleep => Color::Magenta,
        }
    }

    /// Short text glyph standing in for an app icon
    pub fn app_glyph(app: &str) -> &'static str {
        match app {
            "WhatsApp" => "WA",
            "Teams" => "TM",
            "Telegram" => "TG",
            "Signal" => "SG",
            "Email" => "EM",
            "News" => "NW",
            _ => "..",
        }
    }

    /// Style for a category chip; unassigned channels get the muted style
    pub fn chip_style(&self, category: Option<&str>) -> Style {
        match category {
            Some(_) => self.highlight,
            None => self.muted,
        }
    }
}
