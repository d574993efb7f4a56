use clap::Parser;

use lumenrig::cli::Cli;
use lumenrig::config::RigConfig;
use lumenrig::tui::TuiState;

fn default_state() -> TuiState {
    let cli = Cli::parse_from(["lumenrig"]);
    TuiState::from_cli(&cli, &RigConfig::default()).unwrap()
}

#[test]
fn test_rows_seeded_from_scene_values() {
    let state = default_state();

    assert_eq!(state.rows.len(), 3);
    assert_eq!(state.rows[0].control.name, "lamp");
    assert_eq!(state.rows[0].value_text, "#ffd36c");
    assert_eq!(state.rows[0].intensity, 20.0);
}

#[test]
fn test_insert_after_multibyte_char() {
    let mut state = default_state();
    state.rows[0].value_text.clear();
    state.text_cursor = 0;

    // 'é' is two bytes; a byte-per-keystroke cursor would land mid-char here
    state.insert_char('é');
    state.insert_char('a');

    assert_eq!(state.rows[0].value_text, "éa");
    assert_eq!(state.text_cursor, "éa".len());
}

#[test]
fn test_backspace_removes_whole_multibyte_char() {
    let mut state = default_state();
    state.rows[0].value_text.clear();
    state.text_cursor = 0;

    state.insert_char('#');
    state.insert_char('é');
    state.delete_char_before();

    assert_eq!(state.rows[0].value_text, "#");
    assert_eq!(state.text_cursor, 1);

    state.delete_char_before();
    assert_eq!(state.rows[0].value_text, "");
    // Backspace on an empty field is a no-op
    state.delete_char_before();
    assert_eq!(state.text_cursor, 0);
}

#[test]
fn test_cursor_moves_by_char_boundaries() {
    let mut state = default_state();
    state.rows[0].value_text.clear();
    state.text_cursor = 0;

    state.insert_char('é');
    state.insert_char('a');

    state.cursor_left();
    assert_eq!(state.text_cursor, 'é'.len_utf8());
    state.cursor_left();
    assert_eq!(state.text_cursor, 0);
    state.cursor_left();
    assert_eq!(state.text_cursor, 0);

    state.cursor_right();
    assert_eq!(state.text_cursor, 'é'.len_utf8());

    // Delete-at-cursor removes the following char
    state.delete_char_at();
    assert_eq!(state.rows[0].value_text, "é");
}

#[test]
fn test_apply_text_drives_the_scene() {
    let mut state = default_state();
    state.rows[0].value_text = "#ff0000".to_string();
    state.apply_text();

    let lamp = state.scene.find_light("lamp").unwrap();
    assert_eq!(state.scene.light(lamp).unwrap().color.red, 1.0);
    assert!(state.message.is_none());
}

#[test]
fn test_apply_text_keeps_scene_on_parse_error() {
    let mut state = default_state();
    let before = state.scene.snapshot();

    state.rows[0].value_text = "#12ZZ34".to_string();
    state.apply_text();

    assert_eq!(state.scene.snapshot(), before);
    assert!(state.message.is_some());
}
