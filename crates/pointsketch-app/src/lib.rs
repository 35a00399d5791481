//! PointSketch Application
//!
//! Headless shell around the core: loads configuration, replays gesture
//! scripts against a session and prints a frame after every visible change.

mod app;
mod commands;
mod render;
pub mod script;

pub use app::{App, AppError, OutputFormat, Outcome};
pub use commands::{CommandHelp, CommandReference};
pub use render::{BrushView, Frame, PointView};
pub use script::{Command, ScriptError};
