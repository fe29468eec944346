//! Dashboard home: status carousel, quick status, apps and category grid

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::cli::tui::state::{DashboardPage, DashboardView, HomeFocus};
use crate::cli::tui::theme::Theme;
use crate::domain::{Dashboard, FocusStatus};

pub fn render(frame: &mut Frame, view: &DashboardView, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Page
            Constraint::Length(1), // Notice
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    let hints: &[(&str, &str)] = match &view.page {
        DashboardPage::Home => {
            render_home(frame, chunks[0], view, theme);
            &[
                ("←→", "Status"),
                ("Tab", "Apps/Categories"),
                ("Enter", "Open"),
                ("a", "Active"),
                ("m", "Muted"),
                ("d", "All devices"),
                ("r", "Reset"),
                ("q", "Quit"),
            ]
        }
        DashboardPage::Active => {
            super::channel_list::render(
                frame,
                chunks[0],
                " Active channels ",
                &Dashboard::active_channels_by_app(),
                theme,
            );
            &[("Esc", "Back"), ("q", "Quit")]
        }
        DashboardPage::Muted => {
            super::channel_list::render(
                frame,
                chunks[0],
                " Muted channels ",
                &Dashboard::muted_channels_by_app(),
                theme,
            );
            &[("Esc", "Back"), ("q", "Quit")]
        }
        DashboardPage::AppDetails(app) => {
            super::app_details::render(frame, chunks[0], app, theme);
            &[("Esc", "Back"), ("q", "Quit")]
        }
        DashboardPage::CategoryDetails(page) => {
            super::category_details::render(frame, chunks[0], page, theme);
            if page.rule_form.is_some() {
                &[]
            } else {
                &[("Enter", "Edit rule"), ("Esc", "Back")]
            }
        }
    };

    super::render_notice(frame, chunks[1], view.notice.as_deref(), theme);
    super::render_help(frame, chunks[2], hints, theme);
}

fn render_home(frame: &mut Frame, area: Rect, view: &DashboardView, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status carousel
            Constraint::Length(4), // Quick status
            Constraint::Min(0),    // Apps and categories
        ])
        .split(area);

    render_carousel(frame, rows[0], view.dashboard.status());
    render_quick_status(frame, rows[1], view, theme);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[2]);
    render_apps(frame, columns[0], view, theme);
    render_categories(frame, columns[1], view, theme);
}

fn render_carousel(frame: &mut Frame, area: Rect, current: FocusStatus) {
    let mut spans = vec![Span::raw("◀  ")];
    for status in FocusStatus::ALL {
        let style = if status == current {
            Style::default()
                .fg(Theme::status_color(status))
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Theme::status_color(status))
        };
        spans.push(Span::styled(format!(" {} ", status), style));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::raw("▶"));

    let carousel = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(carousel, area);
}

fn render_quick_status(frame: &mut Frame, area: Rect, view: &DashboardView, theme: &Theme) {
    let counts = view.dashboard.counts();
    let devices = if view.dashboard.all_devices() {
        Span::styled("On", theme.success)
    } else {
        Span::styled("Off", theme.muted)
    };
    let lines = vec![
        Line::from(vec![Span::raw(" All Devices: "), devices]),
        Line::from(vec![
            Span::styled(format!(" {} active", counts.active), theme.success),
            Span::raw("   "),
            Span::styled(format!("{} muted", counts.muted), theme.warning),
        ]),
    ];
    let block = Block::default()
        .title(" Quick status ")
        .borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_apps(frame: &mut Frame, area: Rect, view: &DashboardView, theme: &Theme) {
    let focused = view.focus == HomeFocus::Apps;
    let items: Vec<ListItem> = view
        .dashboard
        .app_lines()
        .into_iter()
        .enumerate()
        .map(|(i, (app, status))| {
            let line = Line::from(vec![
                Span::styled(format!(" {:<3}", Theme::app_glyph(app)), theme.highlight),
                Span::raw(format!("{:<10}", app)),
                Span::styled(status, theme.muted),
            ]);
            ListItem::new(line).style(super::row_style(focused && i == view.app_cursor, theme))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Apps ")
            .borders(Borders::ALL)
            .border_style(if focused { theme.focused } else { Style::default() }),
    );
    frame.render_widget(list, area);
}

fn render_categories(frame: &mut Frame, area: Rect, view: &DashboardView, theme: &Theme) {
    let focused = view.focus == HomeFocus::Categories;
    let items: Vec<ListItem> = Dashboard::category_tiles()
        .into_iter()
        .enumerate()
        .map(|(i, tile)| {
            let line = Line::from(vec![
                Span::raw(format!(" {:<12}", tile.name)),
                Span::styled(format!("{} channels", tile.count), theme.muted),
            ]);
            ListItem::new(line).style(super::row_style(focused && i == view.tile_cursor, theme))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Categories ")
            .borders(Borders::ALL)
            .border_style(if focused { theme.focused } else { Style::default() }),
    );
    frame.render_widget(list, area);
}
