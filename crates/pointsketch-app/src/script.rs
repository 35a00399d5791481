//! Gesture scripts: the commands a headless session replays.
//!
//! A script is either a JSON array of commands or one JSON command per line
//! (blank lines and lines starting with `#` are skipped).

use pointsketch_core::{GestureEvent, GestureKind, Mode, PointId};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Script errors.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid script command on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// One step of a script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    /// Switch the editing mode.
    Mode { mode: Mode },
    /// Pointer event in domain coordinates.
    Pointer {
        kind: GestureKind,
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
        #[serde(default)]
        target: Option<PointId>,
    },
    /// Pointer event in view pixels. A press without a target is hit-tested.
    Pixel {
        kind: GestureKind,
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
        #[serde(default)]
        target: Option<PointId>,
    },
    /// Press and release on the same spot.
    Click {
        x: f64,
        y: f64,
        #[serde(default)]
        target: Option<PointId>,
    },
    /// Save the working collection as a preset.
    Save {
        name: String,
        #[serde(default)]
        overwrite: bool,
    },
    Load { name: String },
    Delete { name: String },
    AddRandom { count: usize },
    /// Force a frame even if nothing changed.
    Render,
}

impl Command {
    /// Domain-space gesture(s) this command stands for, if any.
    pub fn gestures(&self) -> Vec<GestureEvent> {
        match *self {
            Command::Pointer { kind, x, y, target } => {
                vec![GestureEvent::new(kind, kurbo::Point::new(x, y), target)]
            }
            Command::Click { x, y, target } => vec![
                GestureEvent::new(GestureKind::Down, kurbo::Point::new(x, y), target),
                GestureEvent::up(x, y),
            ],
            _ => Vec::new(),
        }
    }
}

/// Parse a script from text.
pub fn parse(text: &str) -> Result<Vec<Command>, ScriptError> {
    if text.trim_start().starts_with('[') {
        return serde_json::from_str(text).map_err(|source| ScriptError::Parse {
            line: source.line(),
            source,
        });
    }

    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|source| ScriptError::Parse {
                line: index + 1,
                source,
            })
        })
        .collect()
}

/// Read and parse a script file.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Command>, ScriptError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ScriptError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let commands = parse(&text)?;
    log::debug!("loaded {} command(s) from {}", commands.len(), path.display());
    Ok(commands)
}
