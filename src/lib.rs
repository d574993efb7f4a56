//! Light and emission rig control for isometric scene files.
//!
//! The core is a small controller abstraction: a named control fans a single
//! input value (a hex color or an intensity percentage) out to a group of
//! lights or emissive surfaces held in a [`scene::SceneRegistry`]. Everything
//! else is plumbing around it: a TOML rig format, a one-shot CLI and an
//! interactive TUI.

pub mod cli;
pub mod color;
pub mod config;
pub mod controller;
pub mod input;
pub mod logging;
pub mod scene;
pub mod tui;
