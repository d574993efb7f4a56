//! Rig pane showing every light and surface with a color swatch.

use palette::Srgb;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::color::{to_hex, to_rgb8};
use crate::tui::state::TuiState;

/// Draw the rig pane.
pub fn draw_rig(frame: &mut Frame, area: Rect, state: &TuiState) {
    let block = Block::default().title(" Rig ").borders(Borders::ALL);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    lines.push(Line::from(Span::styled(
        state.scene.name().to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )));

    lines.push(Line::from(Span::styled(
        "lights",
        Style::default().fg(Color::DarkGray),
    )));
    for (_, light) in state.scene.lights() {
        lines.push(object_line(&light.name, light.color, light.intensity));
    }

    lines.push(Line::from(Span::styled(
        "surfaces",
        Style::default().fg(Color::DarkGray),
    )));
    for (_, surface) in state.scene.surfaces() {
        lines.push(object_line(
            &surface.name,
            surface.emissive,
            surface.emissive_intensity,
        ));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn object_line(name: &str, color: Srgb<f32>, intensity: f32) -> Line<'static> {
    let (r, g, b) = to_rgb8(color);

    Line::from(vec![
        Span::raw("  "),
        Span::styled("    ", Style::default().bg(Color::Rgb(r, g, b))),
        Span::raw(format!(
            " {:<12} {}  {:>5.1}%",
            name,
            to_hex(color),
            intensity * 100.0
        )),
    ])
}
