use crate::core::Point;
use crate::core::arc_math::saturating_sub;
use crate::render::{Color, RectPrimitive, RenderFrame};

/// The rectangle charts plot into, after outer padding and the title band
/// have been carved out of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlotArea {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
    background: Option<Color>,
}

impl PlotArea {
    pub fn set_bounds(&mut self, left: f64, top: f64, right: f64, bottom: f64) {
        self.left = left;
        self.top = top;
        self.right = right.max(left);
        self.bottom = bottom.max(top);
    }

    pub fn set_background(&mut self, background: Option<Color>) {
        self.background = background;
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.top
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        saturating_sub(self.right, self.left)
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        saturating_sub(self.bottom, self.top)
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            self.left + self.width() / 2.0,
            self.top + self.height() / 2.0,
        )
    }

    /// Renders the plot-area background, if one is configured.
    pub fn render(&self, frame: &mut RenderFrame) {
        if let Some(background) = self.background {
            if self.width() > 0.0 && self.height() > 0.0 {
                frame.push_rect(RectPrimitive::new(
                    self.left,
                    self.top,
                    self.width(),
                    self.height(),
                    background,
                ));
            }
        }
    }
}
