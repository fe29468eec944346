//! Frame shared by the four onboarding steps

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::cli::tui::modal;
use crate::cli::tui::state::OnboardingView;
use crate::cli::tui::theme::Theme;
use crate::domain::Step;

pub fn render(frame: &mut Frame, view: &OnboardingView, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Step header
            Constraint::Min(0),    // Step body
            Constraint::Length(1), // Notice
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], view.flow.step(), theme);

    match view.flow.step() {
        Step::SelectApps => super::select_apps::render(frame, chunks[1], view, theme),
        Step::CategorizeChannels => super::categorize::render(frame, chunks[1], view, theme),
        Step::ReviewRules => super::rules::render(frame, chunks[1], view, theme),
        Step::Confirm => super::confirm::render(frame, chunks[1], view, theme),
    }

    super::render_notice(frame, chunks[2], view.notice.as_deref(), theme);
    super::render_help(frame, chunks[3], help_hints(view), theme);

    if let Some(editor) = &view.category_modal {
        modal::render_category_editor(frame, frame.area(), view.flow.categories(), editor, theme);
    }
    if let (Some(form), Some(category)) = (&view.rule_form, view.flow.editing_rules()) {
        modal::render_rule_editor(frame, frame.area(), category, form, theme);
    }
}

fn render_header(frame: &mut Frame, area: Rect, step: Step, theme: &Theme) {
    let mut spans = vec![Span::styled(
        " Keep Calm setup  ",
        theme.highlight.add_modifier(Modifier::BOLD),
    )];
    for s in Step::ALL {
        let (dot, style) = if s == step {
            ("●", theme.focused)
        } else if s < step {
            ("●", theme.success)
        } else {
            ("○", theme.muted)
        };
        spans.push(Span::styled(format!("{} ", dot), style));
    }
    spans.push(Span::raw(format!(
        " Step {} of {} · {}",
        step.number(),
        Step::ALL.len(),
        step.name()
    )));

    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

fn help_hints(view: &OnboardingView) -> &'static [(&'static str, &'static str)] {
    if view.rule_form.is_some() || view.category_modal.is_some() {
        return &[];
    }
    match view.flow.step() {
        Step::SelectApps => &[("↑↓", "Move"), ("Space", "Toggle"), ("n", "Next"), ("q", "Quit")],
        Step::CategorizeChannels if view.flow.editing_app().is_some() => &[
            ("↑↓", "Move"),
            ("←→", "Category"),
            ("1-9", "Pick"),
            ("Esc", "Back"),
            ("n", "Next"),
        ],
        Step::CategorizeChannels => &[
            ("↑↓", "Move"),
            ("Enter", "Open"),
            ("c", "Categories"),
            ("n", "Next"),
            ("q", "Quit"),
        ],
        Step::ReviewRules => &[
            ("↑↓", "Move"),
            ("Space", "Smart mute"),
            ("Enter", "Edit rule"),
            ("c", "Categories"),
            ("n", "Next"),
        ],
        Step::Confirm => &[("Enter", "Finish"), ("q", "Quit")],
    }
}
