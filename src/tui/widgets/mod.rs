//! Drawing widgets for the TUI panes.

mod controls;
mod help;
mod rig;

pub use controls::draw_controls;
pub use help::draw_help_overlay;
pub use rig::draw_rig;
