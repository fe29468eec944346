//! Active and muted channel pages, grouped by app

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::cli::tui::theme::Theme;
use crate::domain::dashboard::FeedChannel;
use crate::domain::grouping::Group;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    groups: &[Group<String, FeedChannel>],
    theme: &Theme,
) {
    let mut items = Vec::new();
    for group in groups {
        items.push(ListItem::new(Line::from(vec![
            Span::styled(format!(" {} ", Theme::app_glyph(&group.key)), theme.highlight),
            Span::styled(format!("{} ({})", group.key, group.len()), theme.focused),
        ])));
        for channel in &group.items {
            items.push(ListItem::new(Line::from(vec![
                Span::raw(format!("    {:<20}", channel.name)),
                Span::styled(channel.note.clone(), theme.muted),
            ])));
        }
    }

    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(list, area);
}
