//! An editing session: the working collection plus everything acting on it.

use crate::collection::PointCollection;
use crate::config::SessionConfig;
use crate::controller::ModeController;
use crate::input::GestureEvent;
use crate::point::PointId;
use crate::preset::{PresetController, PresetResult};
use crate::registry::Registry;
use crate::selection::{Brush, Selection};
use crate::tools::{DragPreview, EditContext, Effect, Mode};
use crate::viewport::ViewMapping;

/// Runtime editing state for one user.
///
/// The session never redraws anything itself: after any call that returns
/// an [`Effect`] needing a redraw (or after a preset load), the caller runs
/// its own render pass from [`Session::points`] and friends.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    points: PointCollection,
    selection: Selection,
    modes: ModeController,
    presets: PresetController,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl Session {
    /// Start a session: register a random preset and load it.
    pub fn new(config: SessionConfig) -> Self {
        let mut seed = PointCollection::new(config.initial_preset.clone(), config.domain);
        seed.add_random(config.initial_points);

        let mut registry = Registry::new();
        registry.add(&seed);
        Self::with_registry(config, registry, seed)
    }

    /// Start a session from an existing registry and working collection.
    pub fn with_registry(config: SessionConfig, registry: Registry, points: PointCollection) -> Self {
        log::info!(
            "session started: working set {:?} with {} points, {} preset(s)",
            points.name(),
            points.len(),
            registry.len()
        );
        Self {
            modes: ModeController::new(config.drag_threshold),
            config,
            points,
            selection: Selection::new(),
            presets: PresetController::new(registry),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The working collection.
    pub fn points(&self) -> &PointCollection {
        &self.points
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_selected(&self, id: PointId) -> bool {
        self.selection.contains(id)
    }

    pub fn mode(&self) -> Mode {
        self.modes.mode()
    }

    /// Brush overlay to draw, if any.
    pub fn brush(&self) -> Option<&Brush> {
        self.modes.brush()
    }

    /// Drag in progress, if any.
    pub fn drag_preview(&self) -> Option<&DragPreview> {
        self.modes.drag_preview()
    }

    /// Mapping for the configured viewport over the working domain.
    pub fn view_mapping(&self) -> ViewMapping {
        ViewMapping::new(*self.points.domain(), self.config.viewport.size())
    }

    pub fn set_mode(&mut self, mode: Mode) -> Effect {
        self.modes.set_mode(mode)
    }

    /// Feed one pointer event (domain coordinates) to the active mode.
    pub fn handle_gesture(&mut self, event: GestureEvent) -> Effect {
        let mut ctx = EditContext::new(&mut self.points, &mut self.selection);
        self.modes.handle(event, &mut ctx)
    }

    /// Add random points over the working domain.
    pub fn add_random(&mut self, count: usize) -> Effect {
        if self.points.add_random(count).is_empty() {
            Effect::NONE
        } else {
            Effect::POINTS
        }
    }

    /// Save the working collection as preset `name`.
    pub fn save_preset(&mut self, name: &str, confirm_overwrite: bool) -> PresetResult<()> {
        self.presets
            .save(name, confirm_overwrite, &mut self.points, &mut self.selection)
    }

    /// Load preset `name` into the working collection.
    pub fn load_preset(&mut self, name: &str) -> PresetResult<()> {
        let result = self.presets.load(name, &mut self.points, &mut self.selection);
        if let Err(err) = &result {
            log::warn!("{}", err);
        }
        result
    }

    pub fn delete_preset(&mut self, name: &str) -> bool {
        self.presets.delete(name)
    }

    pub fn preset_exists(&self, name: &str) -> bool {
        self.presets.exists(name)
    }

    pub fn preset_names(&self) -> Vec<String> {
        self.presets.names()
    }

    pub fn registry(&self) -> &Registry {
        self.presets.registry()
    }

    /// End the session, handing back the registry and working collection.
    pub fn close(self) -> (Registry, PointCollection) {
        log::info!("session closed: working set {:?} with {} points", self.points.name(), self.points.len());
        (self.presets.into_registry(), self.points)
    }
}
