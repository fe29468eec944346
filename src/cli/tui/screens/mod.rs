//! Screen renderers for onboarding and the dashboard

pub mod app_details;
pub mod categorize;
pub mod category_details;
pub mod channel_list;
pub mod confirm;
pub mod dashboard;
pub mod onboarding;
pub mod rules;
pub mod select_apps;

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::Theme;

/// "key Label • key Label" line for help bars and modals
pub fn hint_line<'a>(hints: &[(&'a str, &'a str)], theme: &Theme) -> Line<'a> {
    let mut spans = vec![Span::raw(" ")];
    for (i, (key, label)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  •  ", theme.muted));
        }
        spans.push(Span::styled(*key, theme.key_hint));
        spans.push(Span::raw(format!(" {}", label)));
    }
    Line::from(spans)
}

pub fn render_help(frame: &mut Frame, area: Rect, hints: &[(&str, &str)], theme: &Theme) {
    let help = Paragraph::new(hint_line(hints, theme))
        .style(Style::default().bg(ratatui::style::Color::DarkGray));
    frame.render_widget(help, area);
}

/// Transient status line; validation errors land here
pub fn render_notice(frame: &mut Frame, area: Rect, notice: Option<&str>, theme: &Theme) {
    if let Some(notice) = notice {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(format!(" {}", notice), theme.warning))),
            area,
        );
    }
}

/// Row style for a list entry under the cursor
pub fn row_style(focused: bool, theme: &Theme) -> Style {
    if focused {
        theme.selected
    } else {
        Style::default()
    }
}
