//! Step 1: choose the apps Keep Calm controls

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
        .apps()
        .iter()
        .enumerate()
        .map(|(i, app)| {
            let checkbox = if app.selected { "☑" } else { "☐" };
            let line = Line::from(vec![
                Span::raw(format!(" {} ", checkbox)),
                Span::styled(format!("{:<3}", Theme::app_glyph(&app.name)), theme.highlight),
                Span::raw(app.name.clone()),
            ]);
            ListItem::new(line).style(super::row_style(i == view.app_cursor, theme))
        })
        .collect();

    let selected = view.flow.apps().iter().filter(|a| a.selected).count();
    let list = List::new(items).block(
        Block::default()
            .title(format!(" Which apps should stay calm? ({} selected) ", selected))
            .borders(Borders::ALL),
    );
    frame.render_widget(list, area);
}
