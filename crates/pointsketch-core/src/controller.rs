//! The interaction state machine.
//!
//! Holds the active mode's tool and turns raw pointer events into clicks and
//! drags for it. Exactly one mode is active at a time; switching modes drops
//! the previous tool together with any overlay it owned.

use crate::input::{GestureEvent, GestureKind, Press};
use crate::selection::Brush;
use crate::tools::{DragPreview, EditContext, Effect, Mode, ModeTool};

/// Routes gestures to the active mode.
#[derive(Debug)]
pub struct ModeController {
    tool: Box<dyn ModeTool>,
    press: Option<Press>,
    /// Distance (domain units) a press must travel before it becomes a drag.
    drag_threshold: f64,
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl ModeController {
    /// Create a controller in Add mode.
    pub fn new(drag_threshold: f64) -> Self {
        Self {
            tool: Mode::default().tool(),
            press: None,
            drag_threshold: drag_threshold.max(0.0),
        }
    }

    /// The active mode.
    pub fn mode(&self) -> Mode {
        self.tool.mode()
    }

    /// Switch modes.
    ///
    /// An open gesture is abandoned without committing. Selecting the
    /// current mode again keeps its tool (and brush) as they are.
    pub fn set_mode(&mut self, mode: Mode) -> Effect {
        if mode == self.mode() {
            return Effect::NONE;
        }
        let mut effect = Effect::NONE;
        if self.press.take().is_some_and(|press| press.dragging) {
            effect = effect | self.tool.on_cancel();
        }
        let had_overlay = self.tool.brush().is_some();
        log::debug!("mode: {} -> {}", self.mode(), mode);
        self.tool = mode.tool();
        if had_overlay {
            effect = effect | Effect::OVERLAY;
        }
        effect
    }

    /// Check if a press has turned into a drag.
    pub fn is_dragging(&self) -> bool {
        self.press.is_some_and(|press| press.dragging)
    }

    /// Brush overlay to draw (Select mode only).
    pub fn brush(&self) -> Option<&Brush> {
        self.tool.brush()
    }

    /// Points being dragged and their preview positions (Move mode only).
    pub fn drag_preview(&self) -> Option<&DragPreview> {
        self.tool.drag_preview()
    }

    /// Feed one pointer event to the active tool.
    pub fn handle(&mut self, event: GestureEvent, ctx: &mut EditContext<'_>) -> Effect {
        let position = event.position();
        match event.kind {
            GestureKind::Down => {
                let mut effect = Effect::NONE;
                // A missing release: close the old gesture before starting over.
                if self.press.take().is_some_and(|press| press.dragging) {
                    effect = self.tool.on_cancel();
                }
                self.press = Some(Press::new(position, event.target));
                effect
            }
            GestureKind::Move => {
                let Some(press) = self.press.as_mut() else {
                    return Effect::NONE;
                };
                let mut effect = Effect::NONE;
                if !press.dragging {
                    if !press.exceeds(position, self.drag_threshold) {
                        return Effect::NONE;
                    }
                    press.dragging = true;
                    let (origin, target) = (press.origin, press.target);
                    log::trace!("{}: drag start at ({:.3}, {:.3})", self.mode(), origin.x, origin.y);
                    effect = self.tool.on_drag_start(ctx, origin, target);
                }
                effect | self.tool.on_drag(ctx, position)
            }
            GestureKind::Up => match self.press.take() {
                Some(press) if press.dragging => self.tool.on_drag_end(ctx, position),
                Some(press) => self.tool.on_click(ctx, position, press.target),
                None => Effect::NONE,
            },
            // The press stays open: a drag commits only on release.
            GestureKind::Leave => Effect::NONE,
        }
    }
}
