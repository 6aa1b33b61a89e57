use tracing::warn;

use crate::core::{Point, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{DotPrimitive, LinePrimitive, RectPrimitive, SectorPrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// The frame carries a translation-offset stack (`save` / `translate` /
/// `restore`) applied to primitives as they are pushed, so chart code can
/// wrap a render pass in a coordinate-system translation without knowing
/// anything about the backend's transform model.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub dots: Vec<DotPrimitive>,
    pub sectors: Vec<SectorPrimitive>,
    offset: Point,
    saved_offsets: Vec<Point>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
            dots: Vec::new(),
            sectors: Vec::new(),
            offset: Point::default(),
            saved_offsets: Vec::new(),
        }
    }

    /// Saves the current translation so a later `restore` can reinstate it.
    pub fn save(&mut self) {
        self.saved_offsets.push(self.offset);
    }

    /// Shifts the drawing origin by `(dx, dy)`, composing with the current
    /// translation.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.offset.x += dx;
        self.offset.y += dy;
    }

    /// Reinstates the most recently saved translation. Unbalanced restores
    /// are ignored with a diagnostic.
    pub fn restore(&mut self) {
        match self.saved_offsets.pop() {
            Some(offset) => self.offset = offset,
            None => warn!("render frame restore without matching save"),
        }
    }

    #[must_use]
    pub fn current_offset(&self) -> Point {
        self.offset
    }

    pub fn push_line(&mut self, line: LinePrimitive) {
        self.lines.push(LinePrimitive {
            x1: line.x1 + self.offset.x,
            y1: line.y1 + self.offset.y,
            x2: line.x2 + self.offset.x,
            y2: line.y2 + self.offset.y,
            ..line
        });
    }

    pub fn push_rect(&mut self, rect: RectPrimitive) {
        self.rects.push(RectPrimitive {
            x: rect.x + self.offset.x,
            y: rect.y + self.offset.y,
            ..rect
        });
    }

    pub fn push_text(&mut self, text: TextPrimitive) {
        let x = text.x + self.offset.x;
        let y = text.y + self.offset.y;
        self.texts.push(TextPrimitive { x, y, ..text });
    }

    pub fn push_dot(&mut self, dot: DotPrimitive) {
        self.dots.push(DotPrimitive {
            x: dot.x + self.offset.x,
            y: dot.y + self.offset.y,
            ..dot
        });
    }

    pub fn push_sector(&mut self, sector: SectorPrimitive) {
        self.sectors.push(SectorPrimitive {
            cx: sector.cx + self.offset.x,
            cy: sector.cy + self.offset.y,
            ..sector
        });
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        for dot in &self.dots {
            dot.validate()?;
        }
        for sector in &self.sectors {
            sector.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.rects.is_empty()
            && self.texts.is_empty()
            && self.dots.is_empty()
            && self.sectors.is_empty()
    }
}
