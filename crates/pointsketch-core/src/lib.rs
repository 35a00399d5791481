//! PointSketch Core Library
//!
//! Platform-agnostic data structures and interaction logic for editing named
//! 2D point sets: the point collection, the preset registry, selection and
//! brushing, and the four editing modes.

pub mod collection;
pub mod config;
pub mod controller;
pub mod input;
pub mod point;
pub mod preset;
pub mod registry;
pub mod selection;
pub mod session;
pub mod tools;
pub mod viewport;

pub use collection::{PointCollection, random_name};
pub use config::{ConfigError, SessionConfig, ViewportConfig};
pub use controller::ModeController;
pub use input::{GestureEvent, GestureKind};
pub use point::{Domain, Point, PointId, PointInput};
pub use preset::{PresetController, PresetError, PresetResult};
pub use registry::{Registry, SharedCollection};
pub use selection::{Brush, Selection};
pub use session::Session;
pub use tools::{DragPreview, EditContext, Effect, Mode, ModeTool};
pub use viewport::{POINT_RADIUS, ViewMapping};
