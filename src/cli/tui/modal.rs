//! Modal overlays: category editor and rule editor

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};
use tui_input::Input;

use super::state::{CategoryModal, ModalFocus, RuleField, RuleForm};
use super::theme::Theme;
use crate::domain::CategoryStore;

/// Calculate centered modal area
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn modal_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.modal_border)
}

/// Input line with a block cursor at the tui-input cursor position
fn input_line<'a>(input: &'a Input, focused: bool, theme: &Theme) -> Line<'a> {
    let value = input.value();
    if !focused {
        return Line::from(Span::raw(value));
    }
    let split = value
        .char_indices()
        .nth(input.visual_cursor())
        .map_or(value.len(), |(i, _)| i);
    Line::from(vec![
        Span::raw(&value[..split]),
        Span::styled("█", theme.focused),
        Span::raw(&value[split..]),
    ])
}

pub fn render_category_editor(
    frame: &mut Frame,
    area: Rect,
    categories: &CategoryStore,
    modal: &CategoryModal,
    theme: &Theme,
) {
    let modal_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, modal_area);

    let block = modal_block(" Edit categories ", theme);
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Category list
            Constraint::Length(3), // Input
            Constraint::Length(1), // Add control
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let list_focused = modal.focus == ModalFocus::List;
    let items: Vec<ListItem> = categories
        .iter()
        .enumerate()
        .map(|(i, category)| {
            let marker = if i == modal.cursor && list_focused { "▶ " } else { "  " };
            let style = if i == modal.cursor && list_focused {
                theme.selected
            } else {
                ratatui::style::Style::default()
            };
            ListItem::new(Line::from(format!("{}{}", marker, category.name))).style(style)
        })
        .collect();
    frame.render_widget(List::new(items), chunks[0]);

    let input_title = match &modal.renaming {
        Some(old) => format!(" Rename '{}' ", old),
        None => " New category ".to_string(),
    };
    let input_focused = modal.focus == ModalFocus::Input;
    let input = Paragraph::new(input_line(&modal.input, input_focused, theme)).block(
        Block::default()
            .title(input_title)
            .borders(Borders::ALL)
            .border_style(if input_focused { theme.focused } else { theme.muted }),
    );
    frame.render_widget(input, chunks[1]);

    let action = if modal.renaming.is_some() {
        Span::styled("[ Rename ]", theme.success)
    } else if categories.can_add(modal.input.value()) {
        Span::styled("[ Add ]", theme.success)
    } else {
        Span::styled("[ Add ]", theme.disabled)
    };
    frame.render_widget(
        Paragraph::new(Line::from(action)).alignment(Alignment::Right),
        chunks[2],
    );

    let hints: &[(&str, &str)] = if input_focused {
        &[("Enter", "Apply"), ("Tab", "List"), ("Esc", "Clear")]
    } else {
        &[
            ("a", "Add"),
            ("r", "Rename"),
            ("d", "Delete"),
            ("Esc", "Done"),
        ]
    };
    frame.render_widget(
        Paragraph::new(super::screens::hint_line(hints, theme)).alignment(Alignment::Center),
        chunks[3],
    );
}

pub fn render_rule_editor(frame: &mut Frame, area: Rect, category: &str, form: &RuleForm, theme: &Theme) {
    let modal_area = centered_rect(60, 40, area);
    frame.render_widget(Clear, modal_area);

    let title = format!(" Rule for {} ", category);
    let block = modal_block(&title, theme);
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Proposal
            Constraint::Length(3), // Schedule
            Constraint::Min(0),
            Constraint::Length(1), // Help
        ])
        .split(inner);

    for (chunk, label, input, field) in [
        (chunks[0], " Proposal ", &form.proposal, RuleField::Proposal),
        (chunks[1], " Schedule ", &form.schedule, RuleField::Schedule),
    ] {
        let focused = form.field == field;
        let widget = Paragraph::new(input_line(input, focused, theme)).block(
            Block::default()
                .title(label)
                .borders(Borders::ALL)
                .border_style(if focused { theme.focused } else { theme.muted }),
        );
        frame.render_widget(widget, chunk);
    }

    frame.render_widget(
        Paragraph::new(super::screens::hint_line(
            &[("Tab", "Switch field"), ("Enter", "Save"), ("Esc", "Cancel")],
            theme,
        ))
        .alignment(Alignment::Center),
        chunks[3],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 40, outer);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 20);
    }
}
