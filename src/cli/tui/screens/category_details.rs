//! One category: its rule pair and contacts grouped by app

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::cli::tui::modal;
use crate::cli::tui::state::CategoryPage;
use crate::cli::tui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, page: &CategoryPage, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    let rule = page.details.rule.displayed();
    let rule_block = Paragraph::new(vec![
        Line::from(Span::styled(format!(" {}", rule.proposal), theme.highlight)),
        Line::from(Span::styled(format!(" {}", rule.schedule), theme.muted)),
    ])
    .block(
        Block::default()
            .title(format!(" {} rule ", page.details.name))
            .borders(Borders::ALL),
    );
    frame.render_widget(rule_block, chunks[0]);

    let mut items = Vec::new();
    for group in page.details.contacts_by_app() {
        items.push(ListItem::new(Line::from(Span::styled(
            format!(" {} {}", Theme::app_glyph(&group.key), group.key),
            theme.focused,
        ))));
        for contact in group.items {
            let state = if contact.muted {
                Span::styled("muted", theme.warning)
            } else {
                Span::styled("active", theme.success)
            };
            items.push(ListItem::new(Line::from(vec![
                Span::raw(format!("    {:<20}", contact.name)),
                state,
            ])));
        }
    }
    if items.is_empty() {
        items.push(ListItem::new(Span::styled(" No contacts yet", theme.muted)));
    }
    let contacts = List::new(items).block(Block::default().title(" Contacts ").borders(Borders::ALL));
    frame.render_widget(contacts, chunks[1]);

    if let Some(form) = &page.rule_form {
        modal::render_rule_editor(frame, area, &page.details.name, form, theme);
    }
}
