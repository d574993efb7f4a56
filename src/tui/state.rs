//! TUI state management.

use std::path::PathBuf;

use color_eyre::eyre::{Result, WrapErr};

use crate::cli::Cli;
use crate::color::to_hex;
use crate::config::RigConfig;
use crate::controller::NamedControl;
use crate::input::{ClampPolicy, ControlInput};
use crate::scene::SceneRegistry;

/// Which field of the selected control has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    /// Free-form value field (hex color or intensity percentage)
    #[default]
    Value,
    /// Intensity stepper
    Intensity,
}

/// One editable row in the controls pane.
#[derive(Debug)]
pub struct ControlRow {
    pub control: NamedControl,
    /// Raw text being edited (hex color or percentage)
    pub value_text: String,
    /// Intensity percentage (0-100) for the stepper
    pub intensity: f32,
}

/// All editable state for the TUI.
pub struct TuiState {
    pub scene: SceneRegistry,
    pub rows: Vec<ControlRow>,
    pub policy: ClampPolicy,
    config: RigConfig,

    // UI state
    pub selected: usize,
    pub field: Field,
    pub show_help: bool,
    pub show_export: bool,
    pub export_path: String,
    pub editing_text: bool,
    pub text_cursor: usize,
    pub message: Option<String>,
}

impl TuiState {
    /// Create state from CLI arguments and the resolved rig config.
    pub fn from_cli(cli: &Cli, config: &RigConfig) -> Result<Self> {
        let (scene, controls) = config.build().wrap_err("Invalid rig configuration")?;
        let rows = build_rows(&scene, controls);

        Ok(Self {
            scene,
            rows,
            policy: cli.policy.into(),
            config: config.clone(),

            selected: 0,
            field: Field::Value,
            show_help: false,
            show_export: false,
            export_path: String::from("rig-state.yaml"),
            editing_text: false,
            text_cursor: 0,
            message: None,
        })
    }

    pub fn selected_row(&self) -> Option<&ControlRow> {
        self.rows.get(self.selected)
    }

    /// Move focus to the next field, wrapping across rows.
    pub fn focus_next(&mut self) {
        match self.field {
            Field::Value => self.field = Field::Intensity,
            Field::Intensity => {
                self.field = Field::Value;
                if !self.rows.is_empty() {
                    self.selected = (self.selected + 1) % self.rows.len();
                }
            }
        }
    }

    /// Move focus to the previous field, wrapping across rows.
    pub fn focus_prev(&mut self) {
        match self.field {
            Field::Value => {
                self.field = Field::Intensity;
                if !self.rows.is_empty() {
                    self.selected = (self.selected + self.rows.len() - 1) % self.rows.len();
                }
            }
            Field::Intensity => self.field = Field::Value,
        }
    }

    /// Parse the selected row's text and apply it to the scene.
    ///
    /// The field is free-form like the original input widget: a leading `#`
    /// drives the group's colors, anything else its intensities.
    pub fn apply_text(&mut self) {
        let Some(row) = self.rows.get_mut(self.selected) else {
            return;
        };
        match ControlInput::parse(&row.value_text, self.policy) {
            Ok(input) => {
                row.control.binding.apply(input, &mut self.scene);
                if let ControlInput::Intensity(value) = input {
                    row.intensity = value * 100.0;
                }
                self.message = None;
            }
            Err(e) => {
                self.message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Step the selected row's intensity and apply it to the scene.
    pub fn adjust_intensity(&mut self, delta: f32) {
        let Some(row) = self.rows.get_mut(self.selected) else {
            return;
        };
        row.intensity = (row.intensity + delta).clamp(0.0, 100.0);
        let input = ControlInput::Intensity(row.intensity / 100.0);
        row.control.binding.apply(input, &mut self.scene);
        self.message = None;
    }

    /// Rebuild the scene from the original config, discarding edits.
    pub fn reset(&mut self) {
        match self.config.build() {
            Ok((scene, controls)) => {
                self.rows = build_rows(&scene, controls);
                self.scene = scene;
                self.selected = self.selected.min(self.rows.len().saturating_sub(1));
                self.editing_text = false;
                self.message = Some("Rig reset".to_string());
            }
            Err(e) => {
                self.message = Some(format!("Reset failed: {e}"));
            }
        }
    }

    /// Export the current rig state to a YAML file.
    pub fn export(&mut self) -> Result<()> {
        let yaml =
            serde_yaml::to_string(&self.scene.snapshot()).wrap_err("Failed to serialize state")?;

        let path = PathBuf::from(&self.export_path);
        std::fs::write(&path, &yaml)
            .wrap_err_with(|| format!("Failed to write to {}", path.display()))?;

        self.message = Some(format!("Exported to {}", path.display()));
        self.show_export = false;
        Ok(())
    }

    /// Check if the current focus is the text field.
    pub fn is_text_field(&self) -> bool {
        self.field == Field::Value
    }

    /// Get the currently focused text for editing.
    pub fn focused_text(&self) -> Option<&str> {
        if self.is_text_field() {
            self.selected_row().map(|r| r.value_text.as_str())
        } else {
            None
        }
    }

    /// Insert a character at the cursor position in the value field.
    ///
    /// The cursor is a byte offset and must stay on a char boundary, so it
    /// advances by the character's encoded length.
    pub fn insert_char(&mut self, c: char) {
        let cursor = self.text_cursor;
        if let Some(row) = self.rows.get_mut(self.selected) {
            let pos = cursor.min(row.value_text.len());
            row.value_text.insert(pos, c);
            self.text_cursor = pos + c.len_utf8();
        }
    }

    /// Delete the character before the cursor in the value field.
    pub fn delete_char_before(&mut self) {
        let cursor = self.text_cursor;
        if let Some(row) = self.rows.get_mut(self.selected) {
            let pos = cursor.min(row.value_text.len());
            if let Some(prev) = row.value_text[..pos].chars().next_back() {
                let start = pos - prev.len_utf8();
                row.value_text.remove(start);
                self.text_cursor = start;
            }
        }
    }

    /// Delete the character at the cursor position in the value field.
    pub fn delete_char_at(&mut self) {
        let cursor = self.text_cursor;
        if let Some(row) = self.rows.get_mut(self.selected)
            && cursor < row.value_text.len()
        {
            row.value_text.remove(cursor);
        }
    }

    /// Move the cursor one character left.
    pub fn cursor_left(&mut self) {
        let cursor = {
            let Some(text) = self.focused_text() else {
                return;
            };
            let pos = self.text_cursor.min(text.len());
            match text[..pos].chars().next_back() {
                Some(c) => pos - c.len_utf8(),
                None => 0,
            }
        };
        self.text_cursor = cursor;
    }

    /// Move the cursor one character right.
    pub fn cursor_right(&mut self) {
        let cursor = {
            let Some(text) = self.focused_text() else {
                return;
            };
            let pos = self.text_cursor.min(text.len());
            match text[pos..].chars().next() {
                Some(c) => pos + c.len_utf8(),
                None => pos,
            }
        };
        self.text_cursor = cursor;
    }
}

/// Seed control rows from the scene's current values.
///
/// The text shows the first target's color; the stepper its intensity.
fn build_rows(scene: &SceneRegistry, controls: Vec<NamedControl>) -> Vec<ControlRow> {
    controls
        .into_iter()
        .map(|control| {
            let (value_text, intensity) = control
                .binding
                .lights
                .targets()
                .first()
                .and_then(|&id| scene.light(id))
                .map(|l| (to_hex(l.color), l.intensity * 100.0))
                .or_else(|| {
                    control
                        .binding
                        .surfaces
                        .targets()
                        .first()
                        .and_then(|&id| scene.surface(id))
                        .map(|s| (to_hex(s.emissive), s.emissive_intensity * 100.0))
                })
                .unwrap_or_else(|| ("#ffffff".to_string(), 100.0));

            ControlRow {
                control,
                value_text,
                intensity,
            }
        })
        .collect()
}
