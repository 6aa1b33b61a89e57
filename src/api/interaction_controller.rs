use tracing::trace;

use crate::core::Point;
use crate::interaction::InteractionMode;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Starts a pan drag at the given pointer position. Ignored while pan
    /// mode is disabled.
    pub fn begin_pan(&mut self, x: f64, y: f64) {
        if !self.chart.chart().pan_mode_enabled() {
            return;
        }
        let current = self.chart.chart().base().translation();
        self.pan_gesture.begin(Point::new(x, y), current);
        trace!(x, y, "pan gesture started");
    }

    /// Updates the chart translation from the current pointer position.
    /// No-op while idle or disabled.
    pub fn pan_to(&mut self, x: f64, y: f64) {
        if !self.chart.chart().pan_mode_enabled() {
            return;
        }
        if let Some(translation) = self.pan_gesture.update(Point::new(x, y)) {
            self.chart
                .chart_mut()
                .base_mut()
                .set_translation(translation.x, translation.y);
        }
    }

    pub fn end_pan(&mut self) {
        self.pan_gesture.end();
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.pan_gesture.mode()
    }
}
