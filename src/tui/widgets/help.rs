//! Help overlay listing keybindings.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

const HELP_LINES: [&str; 8] = [
    "Tab / Shift-Tab   next / previous field",
    "j / k, Up / Down  move between fields",
    "Left / Right      step intensity",
    "Enter             edit / apply value field",
    "Enter (stepper)   open export dialog",
    "r                 reset rig to config",
    "?                 toggle this help",
    "q                 quit",
];

/// Draw the help overlay centered on the screen.
pub fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    let dialog_width = 46;
    let dialog_height = HELP_LINES.len() as u16 + 2;
    let x = (area.width.saturating_sub(dialog_width)) / 2;
    let y = (area.height.saturating_sub(dialog_height)) / 2;
    let dialog_area = Rect::new(x, y, dialog_width.min(area.width), dialog_height);

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines: Vec<Line> = HELP_LINES.iter().map(|l| Line::from(*l)).collect();
    let paragraph = Paragraph::new(lines).block(block);

    frame.render_widget(paragraph, dialog_area);
}
