//! Saving and restoring named snapshots of the working collection.

use crate::collection::PointCollection;
use crate::registry::Registry;
use crate::selection::Selection;
use thiserror::Error;

/// Preset errors. Every failed operation leaves all state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresetError {
    #[error("Preset name is empty")]
    EmptyName,
    #[error("Preset {0:?} already exists and overwrite was not confirmed")]
    OverwriteNotConfirmed(String),
    #[error("Unknown preset {0:?}")]
    UnknownPreset(String),
}

/// Result type for preset operations.
pub type PresetResult<T> = Result<T, PresetError>;

/// Bridges the working collection and the preset registry.
///
/// The working collection and its selection are passed into each call.
#[derive(Debug, Default)]
pub struct PresetController {
    registry: Registry,
}

impl PresetController {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Give up the registry, e.g. when the session ends.
    pub fn into_registry(self) -> Registry {
        self.registry
    }

    /// Save a copy of `working` as `name`, then load it back so the working
    /// collection takes that name.
    ///
    /// Blank names are rejected. An existing preset is only replaced when
    /// `confirm_overwrite` is set.
    pub fn save(
        &mut self,
        name: &str,
        confirm_overwrite: bool,
        working: &mut PointCollection,
        selection: &mut Selection,
    ) -> PresetResult<()> {
        if name.trim().is_empty() {
            return Err(PresetError::EmptyName);
        }
        if self.registry.exists(name) && !confirm_overwrite {
            return Err(PresetError::OverwriteNotConfirmed(name.to_string()));
        }
        self.registry.add_as(working, name);
        log::debug!("preset {:?} saved ({} points)", name, working.len());
        self.load(name, working, selection)
    }

    /// Replace the working collection's contents with a copy of preset
    /// `name` and adopt its name. Clears the selection.
    pub fn load(&self, name: &str, working: &mut PointCollection, selection: &mut Selection) -> PresetResult<()> {
        let Some(entry) = self.registry.get(name) else {
            return Err(PresetError::UnknownPreset(name.to_string()));
        };
        working.clone_contents_from(&entry.borrow());
        working.rename(name);
        selection.clear();
        log::debug!("preset {:?} loaded ({} points)", name, working.len());
        Ok(())
    }

    /// Remove preset `name`. Returns false if there was none.
    ///
    /// The working collection is left alone even if it was loaded from it.
    pub fn delete(&mut self, name: &str) -> bool {
        let removed = self.registry.remove(name).is_some();
        if removed {
            log::debug!("preset {:?} deleted", name);
        }
        removed
    }

    pub fn exists(&self, name: &str) -> bool {
        self.registry.exists(name)
    }

    /// Preset names, sorted for display.
    pub fn names(&self) -> Vec<String> {
        self.registry.names()
    }
}
