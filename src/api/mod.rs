mod interaction_controller;
mod snapshot;

pub use snapshot::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot, SliceGeometry};

use crate::chart::{PieChart, PieRenderStats};
use crate::core::{SliceData, SliceLabelStyle, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::PanGesture;
use crate::render::{RenderFrame, Renderer};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    pub initial_angle_degrees: f64,
    pub label_style: SliceLabelStyle,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            initial_angle_degrees: 0.0,
            label_style: SliceLabelStyle::default(),
        }
    }

    #[must_use]
    pub fn with_initial_angle(mut self, degrees: f64) -> Self {
        self.initial_angle_degrees = degrees;
        self
    }

    #[must_use]
    pub fn with_label_style(mut self, style: SliceLabelStyle) -> Self {
        self.label_style = style;
        self
    }
}

/// Public engine facade: owns a pie chart plus a rendering backend.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    chart: PieChart,
    pan_gesture: PanGesture,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        if !config.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }

        let mut chart = PieChart::new(config.viewport);
        chart
            .chart_mut()
            .set_initial_angle(config.initial_angle_degrees);
        chart.chart_mut().set_label_style(config.label_style);

        Ok(Self {
            renderer,
            chart,
            pan_gesture: PanGesture::default(),
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.chart.chart().base().viewport()
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.chart.chart_mut().base_mut().set_viewport(viewport);
        Ok(())
    }

    pub fn set_slices(&mut self, slices: Vec<SliceData>) {
        self.chart.set_slices(slices);
    }

    pub fn add_slice(&mut self, slice: SliceData) {
        self.chart.add_slice(slice);
    }

    #[must_use]
    pub fn slices(&self) -> &[SliceData] {
        self.chart.slices()
    }

    #[must_use]
    pub fn chart(&self) -> &PieChart {
        &self.chart
    }

    #[must_use]
    pub fn chart_mut(&mut self) -> &mut PieChart {
        &mut self.chart
    }

    #[must_use]
    pub fn last_render_stats(&self) -> PieRenderStats {
        self.chart.last_stats()
    }

    /// Materializes the scene for one draw pass.
    pub fn build_render_frame(&mut self) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.viewport());
        self.chart.render(Some(&mut frame))?;
        Ok(frame)
    }

    /// Builds the scene and hands it to the owned renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
