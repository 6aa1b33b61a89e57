use crate::chart::PlotArea;
use crate::core::{Point, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

const DEFAULT_PADDING_PX: f64 = 8.0;
const TITLE_GAP_PX: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitleAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Chart title and optional subtitle drawn in the band above the plot area.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTitle {
    pub text: String,
    pub subtitle: String,
    pub align: TitleAlign,
    pub color: Color,
    pub font_size_px: f64,
    pub subtitle_font_size_px: f64,
}

impl Default for ChartTitle {
    fn default() -> Self {
        Self {
            text: String::new(),
            subtitle: String::new(),
            align: TitleAlign::default(),
            color: Color::BLACK,
            font_size_px: 16.0,
            subtitle_font_size_px: 12.0,
        }
    }
}

impl ChartTitle {
    /// Vertical space the title band occupies above the plot area.
    #[must_use]
    pub fn band_height(&self) -> f64 {
        let mut height = 0.0;
        if !self.text.is_empty() {
            height += self.font_size_px + TITLE_GAP_PX;
        }
        if !self.subtitle.is_empty() {
            height += self.subtitle_font_size_px + TITLE_GAP_PX;
        }
        height
    }
}

/// Shared chart state: viewport, plot area, title, and the stored 2D
/// translation written by the interaction layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBase {
    viewport: Viewport,
    padding_px: f64,
    background: Option<Color>,
    plot_area: PlotArea,
    title: ChartTitle,
    translation: Point,
}

impl ChartBase {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            padding_px: DEFAULT_PADDING_PX,
            background: None,
            plot_area: PlotArea::default(),
            title: ChartTitle::default(),
            translation: Point::default(),
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn set_padding_px(&mut self, padding_px: f64) {
        self.padding_px = padding_px.max(0.0);
    }

    pub fn set_background(&mut self, background: Option<Color>) {
        self.background = background;
    }

    #[must_use]
    pub fn plot_area(&self) -> &PlotArea {
        &self.plot_area
    }

    #[must_use]
    pub fn plot_area_mut(&mut self) -> &mut PlotArea {
        &mut self.plot_area
    }

    #[must_use]
    pub fn title(&self) -> &ChartTitle {
        &self.title
    }

    #[must_use]
    pub fn title_mut(&mut self) -> &mut ChartTitle {
        &mut self.title
    }

    #[must_use]
    pub fn translation(&self) -> Point {
        self.translation
    }

    /// Stores the 2D translation applied when pan mode is enabled. The pan
    /// mode decides at render time which axis of this vector is honored.
    pub fn set_translation(&mut self, dx: f64, dy: f64) {
        self.translation = Point::new(dx, dy);
    }

    /// Recomputes the plot-area bounds from the viewport, outer padding, and
    /// title band. Precedes any radius computation.
    pub fn calc_plot_range(&mut self) {
        let width = f64::from(self.viewport.width);
        let height = f64::from(self.viewport.height);
        let top = self.padding_px + self.title.band_height();
        self.plot_area.set_bounds(
            self.padding_px,
            top,
            width - self.padding_px,
            height - self.padding_px,
        );
    }

    /// Pre-render hook: validates the viewport and clears the chart
    /// background.
    pub fn prepare_frame(&self, frame: &mut RenderFrame) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if let Some(background) = self.background {
            frame.push_rect(RectPrimitive::new(
                0.0,
                0.0,
                f64::from(self.viewport.width),
                f64::from(self.viewport.height),
                background,
            ));
        }
        Ok(())
    }

    /// Renders title and subtitle into the band above the plot area.
    pub fn render_title(&self, frame: &mut RenderFrame) {
        if self.title.text.is_empty() && self.title.subtitle.is_empty() {
            return;
        }

        let (x, h_align) = match self.title.align {
            TitleAlign::Left => (self.plot_area.left(), TextHAlign::Left),
            TitleAlign::Center => (
                self.plot_area.left() + self.plot_area.width() / 2.0,
                TextHAlign::Center,
            ),
            TitleAlign::Right => (self.plot_area.right(), TextHAlign::Right),
        };

        let mut y = self.padding_px;
        if !self.title.text.is_empty() {
            frame.push_text(TextPrimitive::new(
                self.title.text.clone(),
                x,
                y,
                self.title.font_size_px,
                self.title.color,
                h_align,
            ));
            y += self.title.font_size_px + TITLE_GAP_PX;
        }
        if !self.title.subtitle.is_empty() {
            frame.push_text(TextPrimitive::new(
                self.title.subtitle.clone(),
                x,
                y,
                self.title.subtitle_font_size_px,
                self.title.color,
                h_align,
            ));
        }
    }
}
