//! UI layout and rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::state::TuiState;
use super::widgets::{draw_controls, draw_help_overlay, draw_rig};

/// Main draw function for the TUI.
pub fn draw(frame: &mut Frame, state: &TuiState) {
    let area = frame.area();

    // Main layout: title, content, status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Content
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    draw_title(frame, main_layout[0], state);

    // Content area: rig on the left, controls on the right
    let content_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_layout[1]);

    draw_rig(frame, content_layout[0], state);
    draw_controls(frame, content_layout[1], state);

    draw_status_bar(frame, main_layout[2], state);

    // Modals (on top)
    if state.show_export {
        draw_export_dialog(frame, state);
    }
    if state.show_help {
        draw_help_overlay(frame);
    }
}

fn draw_title(frame: &mut Frame, area: Rect, state: &TuiState) {
    let title = format!(" {} ", state.scene.name());

    let block = Block::default()
        .title(title)
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(block, area);
}

fn draw_status_bar(frame: &mut Frame, area: Rect, state: &TuiState) {
    let status_text = if state.editing_text {
        "EDIT MODE | Enter: Apply | Esc: Cancel"
    } else if state.show_export {
        "EXPORT | Enter: Save | Esc: Cancel"
    } else {
        "Tab: Next field | Left/Right: Intensity | Enter: Edit/Apply | r: Reset | ?: Help | q: Quit"
    };

    let message = state.message.as_deref().unwrap_or("");

    let spans = if message.is_empty() {
        vec![Span::raw(status_text)]
    } else {
        vec![
            Span::styled(message, Style::default().fg(Color::Yellow)),
            Span::raw(" | "),
            Span::raw(status_text),
        ]
    };

    let paragraph = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}

fn draw_export_dialog(frame: &mut Frame, state: &TuiState) {
    let area = frame.area();

    // Center the dialog
    let dialog_width = 50;
    let dialog_height = 7;
    let x = (area.width.saturating_sub(dialog_width)) / 2;
    let y = (area.height.saturating_sub(dialog_height)) / 2;
    let dialog_area = Rect::new(x, y, dialog_width.min(area.width), dialog_height);

    // Clear background
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(" Export Rig State ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let content = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .margin(1)
        .split(inner);

    // Label
    let label = Paragraph::new("Path:");
    frame.render_widget(label, content[0]);

    // Input field
    let input_style = Style::default().fg(Color::White).bg(Color::DarkGray);
    let input = Paragraph::new(state.export_path.as_str()).style(input_style);
    frame.render_widget(input, content[1]);

    // Hint
    let hint =
        Paragraph::new("Enter: Save | Esc: Cancel").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, content[2]);
}
