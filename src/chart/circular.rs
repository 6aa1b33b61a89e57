use tracing::{debug, error};

use crate::chart::{ChartBase, LabelBrokenLine};
use crate::core::arc_math::{arc_point, saturating_add, saturating_div, saturating_sub};
use crate::core::{Point, SliceLabelOverride, SliceLabelStyle, Viewport};
use crate::error::ChartResult;
use crate::interaction::PanMode;
use crate::render::{Color, RenderFrame, TextHAlign, TextPrimitive};

/// The label text style: color, alignment, and size in pixels.
///
/// Materialized lazily on first access and owned by the chart. Label
/// rendering mutates the color transiently for per-slice color sync and
/// restores it before returning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPaint {
    pub color: Color,
    pub align: TextHAlign,
    pub font_size_px: f64,
}

impl Default for LabelPaint {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            align: TextHAlign::Center,
            font_size_px: 18.0,
        }
    }
}

/// Per-slice label request, produced at render time and consumed
/// immediately.
#[derive(Debug, Clone, Copy)]
pub struct SliceLabelRequest<'a> {
    pub text: &'a str,
    pub rotate_degrees: f64,
    pub slice_color: Color,
    pub custom: Option<SliceLabelOverride>,
}

/// Shared machinery for circular charts (pie, doughnut, gauge): plot radius,
/// slice label placement, and pan/translate wrapping of the render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct CircularChart {
    base: ChartBase,
    radius: f64,
    offset_angle_degrees: f64,
    label_style: SliceLabelStyle,
    label_paint: Option<LabelPaint>,
    broken_line: Option<LabelBrokenLine>,
    sync_line_color: bool,
    sync_point_color: bool,
    sync_label_color: bool,
    pan_mode: PanMode,
    pan_enabled: bool,
}

impl CircularChart {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            base: ChartBase::new(viewport),
            radius: 0.0,
            offset_angle_degrees: 0.0,
            label_style: SliceLabelStyle::default(),
            label_paint: None,
            broken_line: None,
            sync_line_color: false,
            sync_point_color: false,
            sync_label_color: false,
            pan_mode: PanMode::default(),
            pan_enabled: true,
        }
    }

    #[must_use]
    pub fn base(&self) -> &ChartBase {
        &self.base
    }

    #[must_use]
    pub fn base_mut(&mut self) -> &mut ChartBase {
        &mut self.base
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_initial_angle(&mut self, degrees: f64) {
        self.offset_angle_degrees = degrees;
    }

    #[must_use]
    pub fn initial_angle(&self) -> f64 {
        self.offset_angle_degrees
    }

    /// Sets where slice labels are drawn. Inside labels are always centered
    /// on their anchor point, so selecting `Inside` forces the label paint's
    /// alignment to `Center`.
    pub fn set_label_style(&mut self, style: SliceLabelStyle) {
        self.label_style = style;
        if style == SliceLabelStyle::Inside {
            self.label_paint_mut().align = TextHAlign::Center;
        }
    }

    #[must_use]
    pub fn label_style(&self) -> SliceLabelStyle {
        self.label_style
    }

    /// The label paint, materialized on first access.
    pub fn label_paint_mut(&mut self) -> &mut LabelPaint {
        self.label_paint.get_or_insert_with(LabelPaint::default)
    }

    #[must_use]
    pub fn label_paint(&self) -> LabelPaint {
        self.label_paint.unwrap_or_default()
    }

    /// The broken-line label sub-renderer, materialized on first access.
    pub fn label_broken_line_mut(&mut self) -> &mut LabelBrokenLine {
        self.broken_line.get_or_insert_with(LabelBrokenLine::default)
    }

    /// Keeps the connector-line color in sync with each slice's color.
    /// One-way: there is no unsync.
    pub fn sync_label_line_color(&mut self) {
        self.sync_line_color = true;
    }

    /// Keeps the connector-point color in sync with each slice's color.
    /// One-way: there is no unsync.
    pub fn sync_label_point_color(&mut self) {
        self.sync_point_color = true;
    }

    /// Keeps the label text color in sync with each slice's color.
    /// One-way: there is no unsync.
    pub fn sync_label_color(&mut self) {
        self.sync_label_color = true;
    }

    pub fn set_plot_pan_mode(&mut self, mode: PanMode) {
        self.pan_mode = mode;
    }

    #[must_use]
    pub fn plot_pan_mode(&self) -> PanMode {
        self.pan_mode
    }

    pub fn enable_pan_mode(&mut self) {
        self.pan_enabled = true;
    }

    pub fn disable_pan_mode(&mut self) {
        self.pan_enabled = false;
    }

    #[must_use]
    pub fn pan_mode_enabled(&self) -> bool {
        self.pan_enabled
    }

    /// Recomputes the plot radius from the current plot area:
    /// `min(width, height) / 2`, failing closed to 0 for degenerate
    /// dimensions. Call after the plot-area bounds are established.
    pub fn compute_plot_geometry(&mut self) {
        let plot_area = self.base.plot_area();
        self.radius = saturating_div(plot_area.width(), 2.0)
            .min(saturating_div(plot_area.height(), 2.0));
        debug!(radius = self.radius, "computed plot radius");
    }

    /// Fixed backdrop sequence: base frame preparation, plot geometry,
    /// plot-area background, title. Any failure aborts and propagates.
    pub fn render_backdrop(&mut self, frame: &mut RenderFrame) -> ChartResult<()> {
        self.base.prepare_frame(frame)?;
        self.base.calc_plot_range();
        self.compute_plot_geometry();
        self.base.plot_area().render(frame);
        self.base.render_title(frame);
        Ok(())
    }

    /// Runs the full render pass (backdrop plus `draw_plot`), wrapped in the
    /// pan translation when pan mode is enabled.
    ///
    /// Returns `Ok(false)` without drawing when no frame is supplied. The
    /// translation save/restore pair brackets the wrapped pass even when it
    /// fails, so no offset leaks into later passes.
    pub fn render<F>(&mut self, frame: Option<&mut RenderFrame>, draw_plot: F) -> ChartResult<bool>
    where
        F: FnOnce(&mut Self, &mut RenderFrame) -> ChartResult<()>,
    {
        let Some(frame) = frame else {
            return Ok(false);
        };

        if !self.pan_enabled {
            self.render_backdrop(frame)?;
            draw_plot(self, frame)?;
            return Ok(true);
        }

        let translation = self.base.translation();
        frame.save();
        match self.pan_mode {
            PanMode::Horizontal => frame.translate(translation.x, 0.0),
            PanMode::Vertical => frame.translate(0.0, translation.y),
            PanMode::Free => frame.translate(translation.x, translation.y),
        }

        let mut result = self.render_backdrop(frame);
        if result.is_ok() {
            result = draw_plot(&mut *self, &mut *frame);
        }
        frame.restore();
        result?;
        Ok(true)
    }

    /// Places one slice's label according to the effective label style.
    ///
    /// Returns `false` when this slice's label was skipped (degenerate
    /// bisector angle, or a per-slice override with no drawable style);
    /// callers continue with the remaining slices. The label paint's color
    /// is restored on every exit path after the mutation point.
    pub fn render_slice_label(
        &mut self,
        frame: &mut RenderFrame,
        request: &SliceLabelRequest<'_>,
        center: Point,
        radius: f64,
        offset_angle_degrees: f64,
        sweep_degrees: f64,
    ) -> bool {
        if self.label_style == SliceLabelStyle::Hidden {
            return true;
        }
        if request.text.is_empty() {
            return true;
        }

        let bisector = offset_angle_degrees + sweep_degrees / 2.0;
        if !bisector.is_finite() || bisector <= 0.0 {
            error!(bisector, "slice bisector angle is not positive, skipping label");
            return false;
        }

        let saved_color = self.label_paint_mut().color;
        if self.sync_label_color {
            self.label_paint_mut().color = request.slice_color;
        }

        let mut effective_style = self.label_style;
        if let Some(custom) = request.custom {
            effective_style = custom.style;
            if custom.style == SliceLabelStyle::Inside {
                self.label_paint_mut().align = TextHAlign::Center;
            }
            self.label_paint_mut().color = custom.color;
        }

        let drawn = match effective_style {
            SliceLabelStyle::Inside => {
                let anchor_radius = saturating_sub(radius, radius / 2.0);
                self.draw_anchored_label(frame, request, center, anchor_radius, bisector);
                true
            }
            SliceLabelStyle::Outside => {
                let anchor_radius = saturating_add(radius, radius / 10.0);
                self.draw_anchored_label(frame, request, center, anchor_radius, bisector);
                true
            }
            SliceLabelStyle::BrokenLine => {
                self.draw_broken_line_label(frame, request, center, radius, bisector);
                true
            }
            SliceLabelStyle::Hidden => {
                error!("slice label override resolved to an undrawable style");
                false
            }
        };

        self.label_paint_mut().color = saved_color;
        drawn
    }

    fn draw_anchored_label(
        &mut self,
        frame: &mut RenderFrame,
        request: &SliceLabelRequest<'_>,
        center: Point,
        anchor_radius: f64,
        bisector_degrees: f64,
    ) {
        let paint = *self.label_paint_mut();
        let anchor = arc_point(center, anchor_radius, bisector_degrees);
        frame.push_text(
            TextPrimitive::new(
                request.text,
                anchor.x,
                anchor.y,
                paint.font_size_px,
                paint.color,
                paint.align,
            )
            .with_rotation(request.rotate_degrees),
        );
    }

    fn draw_broken_line_label(
        &mut self,
        frame: &mut RenderFrame,
        request: &SliceLabelRequest<'_>,
        center: Point,
        radius: f64,
        bisector_degrees: f64,
    ) {
        let paint = *self.label_paint_mut();
        let sync_line = self.sync_line_color;
        let sync_point = self.sync_point_color;

        let broken_line = self.broken_line.get_or_insert_with(LabelBrokenLine::default);
        if sync_line {
            broken_line.line_paint.color = request.slice_color;
        }
        if sync_point {
            broken_line.point_paint.color = request.slice_color;
        }

        broken_line.render(
            frame,
            request.text,
            request.rotate_degrees,
            center,
            radius,
            bisector_degrees,
            paint,
        );
    }
}
