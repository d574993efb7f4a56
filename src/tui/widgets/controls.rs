//! Controls pane: one value field and one intensity stepper per control.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::state::{Field, TuiState};

const BAR_WIDTH: usize = 20;

/// Draw the controls pane.
pub fn draw_controls(frame: &mut Frame, area: Rect, state: &TuiState) {
    let block = Block::default().title(" Controls ").borders(Borders::ALL);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for (i, row) in state.rows.iter().enumerate() {
        let selected = i == state.selected;

        let name_style = if selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(Span::styled(
            row.control.name.clone(),
            name_style,
        )));

        lines.push(value_line(
            row,
            selected && state.field == Field::Value,
            state,
        ));
        lines.push(intensity_line(
            row.intensity,
            selected && state.field == Field::Intensity,
        ));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn value_line(row: &crate::tui::state::ControlRow, focused: bool, state: &TuiState) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let mut spans = vec![Span::styled("  value     ", label_style)];

    if focused && state.editing_text {
        // Render the cursor as a reversed cell
        let text = &row.value_text;
        let cursor = state.text_cursor.min(text.len());
        let edit_style = Style::default().fg(Color::White).bg(Color::DarkGray);
        spans.push(Span::styled(text[..cursor].to_string(), edit_style));
        if cursor < text.len() {
            let mut rest = text[cursor..].chars();
            let under = rest.next().map(String::from).unwrap_or_default();
            spans.push(Span::styled(
                under,
                edit_style.add_modifier(Modifier::REVERSED),
            ));
            spans.push(Span::styled(rest.as_str().to_string(), edit_style));
        } else {
            spans.push(Span::styled(
                " ".to_string(),
                edit_style.add_modifier(Modifier::REVERSED),
            ));
        }
    } else {
        spans.push(Span::styled(row.value_text.clone(), label_style));
    }

    Line::from(spans)
}

fn intensity_line(percent: f32, focused: bool) -> Line<'static> {
    let ratio = f64::from((percent / 100.0).clamp(0.0, 1.0));
    let pos = ((ratio * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH - 1);

    let (filled_style, empty_style, handle_style) = if focused {
        (
            Style::default().fg(Color::Cyan),
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::White),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::Gray),
        )
    };

    let mut spans = vec![Span::styled(
        "  intensity ",
        if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        },
    )];
    for i in 0..BAR_WIDTH {
        if i == pos {
            spans.push(Span::styled("●", handle_style));
        } else if i < pos {
            spans.push(Span::styled("━", filled_style));
        } else {
            spans.push(Span::styled("─", empty_style));
        }
    }
    spans.push(Span::styled(
        format!(" {:>5.1}%", percent),
        if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        },
    ));

    Line::from(spans)
}
