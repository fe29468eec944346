//! Step 3: smart mute switches and rule pairs per category

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::cli::tui::state::OnboardingView;
use crate::cli::tui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, view: &OnboardingView, theme: &Theme) {
    let items: Vec<ListItem> = view
        .flow
        .categories()
        .iter()
        .enumerate()
        .map(|(i, category)| {
            let (switch, switch_style) = if category.smart_mute {
                ("Smart mute ON ", theme.success)
            } else {
                ("Smart mute OFF", theme.muted)
            };
            let rule = category.rule.displayed();
            let lines = vec![
                Line::from(vec![
                    Span::styled(format!(" {:<14}", category.name), theme.highlight),
                    Span::styled(switch, switch_style),
                ]),
                Line::from(Span::styled(
                    format!("   {} · {}", rule.proposal, rule.schedule),
                    theme.muted,
                )),
            ];
            ListItem::new(lines).style(super::row_style(i == view.category_cursor, theme))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Review the proposed rules ")
            .borders(Borders::ALL),
    );
    frame.render_widget(list, area);
}
