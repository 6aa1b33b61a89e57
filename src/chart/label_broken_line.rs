use smallvec::SmallVec;

use crate::chart::LabelPaint;
use crate::core::arc_math::{arc_point, saturating_add};
use crate::core::Point;
use crate::render::{Color, DotPrimitive, LinePrimitive, RenderFrame, TextPrimitive};

/// Stroke styling for the label connector line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePaint {
    pub color: Color,
    pub stroke_width: f64,
}

impl Default for LinePaint {
    fn default() -> Self {
        Self {
            color: Color::rgb(0.35, 0.35, 0.35),
            stroke_width: 1.0,
        }
    }
}

/// Styling for the connector-point marker at the slice edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointPaint {
    pub color: Color,
    pub radius: f64,
}

impl Default for PointPaint {
    fn default() -> Self {
        Self {
            color: Color::rgb(0.35, 0.35, 0.35),
            radius: 3.0,
        }
    }
}

/// Renders a label outside the chart, connected to its slice by a bent
/// leader line plus an optional marker point.
///
/// The line starts at the slice edge, runs outward along the slice bisector
/// to an elbow at 1.25x the radius, then continues horizontally away from
/// the chart. The label sits just past the end of the horizontal run.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelBrokenLine {
    pub line_paint: LinePaint,
    pub point_paint: PointPaint,
    draw_point: bool,
    horizontal_run_px: f64,
}

impl Default for LabelBrokenLine {
    fn default() -> Self {
        Self {
            line_paint: LinePaint::default(),
            point_paint: PointPaint::default(),
            draw_point: true,
            horizontal_run_px: 12.0,
        }
    }
}

impl LabelBrokenLine {
    pub fn set_draw_point(&mut self, draw_point: bool) {
        self.draw_point = draw_point;
    }

    #[must_use]
    pub fn draws_point(&self) -> bool {
        self.draw_point
    }

    pub fn set_horizontal_run_px(&mut self, run_px: f64) {
        self.horizontal_run_px = run_px.max(0.0);
    }

    #[must_use]
    pub fn horizontal_run_px(&self) -> f64 {
        self.horizontal_run_px
    }

    pub fn render(
        &self,
        frame: &mut RenderFrame,
        text: &str,
        rotate_degrees: f64,
        center: Point,
        radius: f64,
        bisector_degrees: f64,
        label_paint: LabelPaint,
    ) {
        let anchor = arc_point(center, radius, bisector_degrees);
        let elbow_radius = saturating_add(radius, radius / 4.0);
        let elbow = arc_point(center, elbow_radius, bisector_degrees);

        let rightward = elbow.x >= center.x;
        let run = if rightward {
            self.horizontal_run_px
        } else {
            -self.horizontal_run_px
        };
        let line_end = Point::new(elbow.x + run, elbow.y);

        let points: SmallVec<[Point; 3]> = SmallVec::from_slice(&[anchor, elbow, line_end]);
        for pair in points.windows(2) {
            frame.push_line(LinePrimitive::new(
                pair[0].x,
                pair[0].y,
                pair[1].x,
                pair[1].y,
                self.line_paint.stroke_width,
                self.line_paint.color,
            ));
        }

        if self.draw_point {
            frame.push_dot(DotPrimitive::new(
                anchor.x,
                anchor.y,
                self.point_paint.radius,
                self.point_paint.color,
            ));
        }

        let label_gap = 2.0;
        let label_x = line_end.x + if rightward { label_gap } else { -label_gap };
        frame.push_text(
            TextPrimitive::new(
                text,
                label_x,
                line_end.y,
                label_paint.font_size_px,
                label_paint.color,
                label_paint.align,
            )
            .with_rotation(rotate_degrees),
        );
    }
}
