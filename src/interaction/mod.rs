use serde::{Deserialize, Serialize};

use crate::core::Point;

/// Axis constraint applied when the chart's drawing origin is translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PanMode {
    #[default]
    Free,
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Panning,
}

/// Pointer-drag state machine feeding the chart's stored translation.
///
/// The gesture accumulates both axes; the render path applies the pan-mode
/// axis constraint when the translation is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanGesture {
    anchor: Option<(Point, Point)>,
}

impl PanGesture {
    /// Starts a drag at `pointer`, remembering the translation in effect so
    /// the gesture composes with it.
    pub fn begin(&mut self, pointer: Point, current_translation: Point) {
        self.anchor = Some((pointer, current_translation));
    }

    /// Translation for the current pointer position, or `None` while idle.
    #[must_use]
    pub fn update(&self, pointer: Point) -> Option<Point> {
        let (origin, start_translation) = self.anchor?;
        Some(Point::new(
            start_translation.x + (pointer.x - origin.x),
            start_translation.y + (pointer.y - origin.y),
        ))
    }

    pub fn end(&mut self) {
        self.anchor = None;
    }

    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        if self.anchor.is_some() {
            InteractionMode::Panning
        } else {
            InteractionMode::Idle
        }
    }
}
