//! Headless application shell: replays commands against a session and runs a
//! render pass whenever something visible changed.

use crate::render::Frame;
use crate::script::{Command, ScriptError};
use pointsketch_core::{
    ConfigError, Effect, GestureKind, POINT_RADIUS, PointCollection, PresetError, Registry, Session, SessionConfig,
};
use std::io::Write;
use thiserror::Error;

/// Top-level application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Script(#[from] ScriptError),
}

/// How frames are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per frame, one per line.
    Json,
}

/// Result of applying one command.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub effect: Effect,
    /// User-facing message for a rejected preset operation.
    pub error: Option<PresetError>,
}

impl Outcome {
    fn effect(effect: Effect) -> Self {
        Self { effect, error: None }
    }

    fn preset(result: Result<(), PresetError>) -> Self {
        match result {
            Ok(()) => Self::effect(Effect::POINTS | Effect::SELECTION),
            Err(err) => Self {
                effect: Effect::NONE,
                error: Some(err),
            },
        }
    }
}

/// The application: a session plus an output sink.
pub struct App {
    session: Session,
    format: OutputFormat,
    frames: usize,
}

impl App {
    pub fn new(config: SessionConfig, format: OutputFormat) -> Self {
        Self {
            session: Session::new(config),
            format,
            frames: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Number of frames rendered so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Apply one command to the session.
    pub fn apply(&mut self, command: &Command) -> Outcome {
        log::trace!("apply {:?}", command);
        match command {
            Command::Mode { mode } => Outcome::effect(self.session.set_mode(*mode)),
            Command::Pointer { .. } | Command::Click { .. } => {
                let effect = command
                    .gestures()
                    .into_iter()
                    .fold(Effect::NONE, |acc, event| acc | self.session.handle_gesture(event));
                Outcome::effect(effect)
            }
            Command::Pixel { kind, x, y, target } => {
                let mapping = self.session.view_mapping();
                let pixel = kurbo::Point::new(*x, *y);
                let target = match (kind, target) {
                    (GestureKind::Down, None) => mapping.hit_test(self.session.points(), pixel, POINT_RADIUS),
                    _ => *target,
                };
                let event = mapping.gesture(*kind, pixel, target);
                Outcome::effect(self.session.handle_gesture(event))
            }
            Command::Save { name, overwrite } => Outcome::preset(self.session.save_preset(name, *overwrite)),
            Command::Load { name } => Outcome::preset(self.session.load_preset(name)),
            Command::Delete { name } => {
                if !self.session.delete_preset(name) {
                    log::warn!("no preset named {:?} to delete", name);
                }
                Outcome::effect(Effect::NONE)
            }
            Command::AddRandom { count } => Outcome::effect(self.session.add_random(*count)),
            Command::Render => Outcome::effect(Effect::OVERLAY),
        }
    }

    /// Write the current frame.
    pub fn render(&mut self, out: &mut impl Write) -> Result<(), ScriptError> {
        let frame = Frame::capture(&self.session);
        match self.format {
            OutputFormat::Text => write!(out, "{}", frame)?,
            OutputFormat::Json => {
                let json = serde_json::to_string(&frame).map_err(std::io::Error::other)?;
                writeln!(out, "{}", json)?;
            }
        }
        self.frames += 1;
        Ok(())
    }

    /// Render the initial frame, then apply every command, rendering after
    /// each one that changed what is visible.
    pub fn run(&mut self, commands: &[Command], out: &mut impl Write) -> Result<(), ScriptError> {
        self.render(out)?;
        for command in commands {
            let outcome = self.apply(command);
            if let Some(err) = &outcome.error {
                match self.format {
                    OutputFormat::Text => writeln!(out, "! {}", err)?,
                    OutputFormat::Json => writeln!(out, "{}", serde_json::json!({ "error": err.to_string() }))?,
                }
            }
            if outcome.effect.needs_redraw() {
                self.render(out)?;
            }
        }
        Ok(())
    }

    /// End the session.
    pub fn shutdown(self) -> (Registry, PointCollection) {
        log::info!("rendered {} frame(s)", self.frames);
        self.session.close()
    }
}
