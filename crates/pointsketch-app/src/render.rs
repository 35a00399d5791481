//! Render pass: a snapshot of what the view would draw.
//!
//! Frames are built from scratch from the session after every change; the
//! session never pushes updates.

use pointsketch_core::{Mode, PointId, Session};
use serde::Serialize;
use std::fmt;

/// One drawn point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointView {
    pub id: PointId,
    pub label: String,
    /// Domain coordinates (preview position while dragged).
    pub x: f64,
    pub y: f64,
    /// View pixels.
    pub px: f64,
    pub py: f64,
    pub selected: bool,
    pub dragging: bool,
}

/// Brush overlay in domain coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BrushView {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

/// Everything the view shows at one moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub name: String,
    pub mode: Mode,
    pub presets: Vec<String>,
    pub points: Vec<PointView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brush: Option<BrushView>,
}

impl Frame {
    pub fn capture(session: &Session) -> Self {
        let mapping = session.view_mapping();
        let transform = mapping.transform();
        let preview = session.drag_preview().map(|drag| drag.positions()).unwrap_or_default();

        let points = session
            .points()
            .iter()
            .map(|point| {
                let dragged = preview.iter().find(|p| p.id == point.id);
                let shown = dragged.unwrap_or(point);
                let pixel = transform * shown.position();
                PointView {
                    id: point.id,
                    label: point.label(),
                    x: shown.x,
                    y: shown.y,
                    px: pixel.x,
                    py: pixel.y,
                    selected: session.is_selected(point.id),
                    dragging: dragged.is_some(),
                }
            })
            .collect();

        let brush = session.brush().map(|brush| {
            let extent = brush.extent();
            BrushView {
                x: [extent.x0, extent.x1],
                y: [extent.y0, extent.y1],
            }
        });

        Self {
            name: session.points().name().to_string(),
            mode: session.mode(),
            presets: session.preset_names(),
            points,
            brush,
        }
    }

    pub fn selected(&self) -> impl Iterator<Item = &PointView> {
        self.points.iter().filter(|p| p.selected)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "[{}] mode={} points={} selected={} presets={}",
            self.name,
            self.mode,
            self.points.len(),
            self.selected().count(),
            self.presets.join(",")
        )?;
        for point in &self.points {
            let marker = match (point.selected, point.dragging) {
                (true, true) => " *~",
                (true, false) => " *",
                (false, true) => " ~",
                (false, false) => "",
            };
            writeln!(
                f,
                "  {:>4} ({:8.3}, {:8.3}) @ ({:7.1}, {:7.1}){}",
                point.label, point.x, point.y, point.px, point.py, marker
            )?;
        }
        if let Some(brush) = &self.brush {
            writeln!(
                f,
                "  brush ({:.3}, {:.3})..({:.3}, {:.3})",
                brush.x[0], brush.y[0], brush.x[1], brush.y[1]
            )?;
        }
        Ok(())
    }
}
