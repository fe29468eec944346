//! Step 4: summary before finishing

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::cli::tui::state::OnboardingView;
use crate::cli::tui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, view: &OnboardingView, theme: &Theme) {
    let summary = view.flow.summary();
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("You're all set", theme.success)),
        Line::from(""),
        Line::from(format!("{} apps under control", summary.controlled_apps)),
        Line::from(format!("{} categories", summary.categories)),
        Line::from(format!(
            "{} categories with smart mute",
            summary.smart_mute_categories
        )),
        Line::from(""),
        Line::from(Span::styled("Press Enter to open your dashboard", theme.focused)),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
