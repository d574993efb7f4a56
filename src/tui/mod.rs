//! Interactive TUI for driving the light rig.
//!
//! Left pane shows every light and surface with its current color and
//! intensity; right pane lists the named controls with an editable value
//! field and an intensity stepper.

mod input;
mod state;
mod ui;
mod widgets;

use std::io::stdout;
use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::{
    Terminal,
    crossterm::ExecutableCommand,
    crossterm::event::{self, Event, KeyEventKind},
    crossterm::terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    },
    prelude::CrosstermBackend,
};

use crate::cli::Cli;
use crate::config::RigConfig;

use input::{Action, EventHandler};
pub use state::TuiState;

/// Run the interactive TUI.
pub fn run(cli: &Cli, config: &RigConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut state = TuiState::from_cli(cli, config)?;
    let result = run_loop(&mut terminal, &mut state);

    // Cleanup terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    state: &mut TuiState,
) -> Result<()> {
    let handler = EventHandler::new();

    loop {
        terminal.draw(|frame| ui::draw(frame, state))?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match handler.handle(key, state) {
                Action::Quit => return Ok(()),
                Action::Export => {
                    if let Err(e) = state.export() {
                        state.message = Some(format!("Export failed: {e}"));
                        state.show_export = false;
                    }
                }
                Action::None => {}
            }
        }
    }
}
