//! Step 2: app list with category chips, and the per-app channel editor

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::cli::tui::state::OnboardingView;
use crate::cli::tui::theme::Theme;
use crate::domain::App;

pub const UNASSIGNED: &str = "Unassigned";

pub fn render(frame: &mut Frame, area: Rect, view: &OnboardingView, theme: &Theme) {
    match view.flow.editing_app().and_then(|name| view.flow.directory().get(name)) {
        Some(app) => render_detail(frame, area, view, app, theme),
        None => render_app_list(frame, area, view, theme),
    }
}

fn render_app_list(frame: &mut Frame, area: Rect, view: &OnboardingView, theme: &Theme) {
    let items: Vec<ListItem> = view
        .flow
        .controlled_apps()
        .into_iter()
        .enumerate()
        .map(|(i, app)| {
            let mut spans = vec![
                Span::styled(format!(" {:<3}", Theme::app_glyph(&app.name)), theme.highlight),
                Span::raw(format!("{:<10}", app.name)),
                Span::styled(format!("{} channels  ", app.channels.len()), theme.muted),
            ];
            // Chips are derived from the live directory on every draw
            for tag in app.category_tags() {
                spans.push(Span::styled(
                    format!("[{}] ", tag.as_deref().unwrap_or(UNASSIGNED)),
                    theme.chip_style(tag.as_deref()),
                ));
            }
            ListItem::new(Line::from(spans)).style(super::row_style(i == view.app_cursor, theme))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Sort your channels into categories ")
            .borders(Borders::ALL),
    );
    frame.render_widget(list, area);
}

fn render_detail(frame: &mut Frame, area: Rect, view: &OnboardingView, app: &App, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let items: Vec<ListItem> = app
        .channels
        .iter()
        .enumerate()
        .map(|(i, channel)| {
            let category = channel.category.as_deref();
            let line = Line::from(vec![
                Span::raw(format!(" {:<20}", channel.name)),
                Span::styled(format!("{:<16}", channel.kind.label()), theme.muted),
                Span::styled(
                    format!("◀ {} ▶", category.unwrap_or(UNASSIGNED)),
                    theme.chip_style(category),
                ),
            ]);
            ListItem::new(line).style(super::row_style(i == view.channel_cursor, theme))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" {} · {} channels ", app.name, app.channels.len()))
            .borders(Borders::ALL),
    );
    frame.render_widget(list, chunks[0]);

    let legend: Vec<Span> = view
        .flow
        .categories()
        .names()
        .enumerate()
        .map(|(i, name)| Span::raw(format!("{} {}   ", i + 1, name)))
        .collect();
    let legend = Paragraph::new(Line::from(legend))
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Categories ").borders(Borders::ALL));
    frame.render_widget(legend, chunks[1]);
}
