//! Channels of one app with category, kind and mute state

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::cli::tui::theme::Theme;
use crate::domain::Dashboard;

pub fn render(frame: &mut Frame, area: Rect, app: &str, theme: &Theme) {
    let block = Block::default()
        .title(format!(" {} ", app))
        .borders(Borders::ALL);

    let contacts = Dashboard::app_details(app);
    if contacts.is_empty() {
        let empty = Paragraph::new(Span::styled(" No channels for this app", theme.muted)).block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = contacts
        .iter()
        .map(|contact| {
            let (state, state_style) = if contact.muted {
                ("muted", theme.warning)
            } else {
                ("active", theme.success)
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!(" {:<20}", contact.name)),
                Span::styled(format!("{:<16}", contact.kind.label()), theme.muted),
                Span::styled(format!("[{}] ", contact.category), theme.highlight),
                Span::styled(state, state_style),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}
