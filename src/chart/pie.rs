use ordered_float::OrderedFloat;
use tracing::{debug, warn};

use crate::chart::{CircularChart, SliceLabelRequest};
use crate::core::arc_math::{arc_point, saturating_div};
use crate::core::{Palette, SliceData, Viewport};
use crate::error::ChartResult;
use crate::render::{RenderFrame, SectorPrimitive};

/// Counters for the most recent pie render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PieRenderStats {
    pub sectors_drawn: usize,
    pub labels_skipped: usize,
}

/// Pie/doughnut chart: circular chart machinery plus a slice series.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    chart: CircularChart,
    slices: Vec<SliceData>,
    palette: Palette,
    last_stats: PieRenderStats,
}

impl PieChart {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            chart: CircularChart::new(viewport),
            slices: Vec::new(),
            palette: Palette::default(),
            last_stats: PieRenderStats::default(),
        }
    }

    #[must_use]
    pub fn chart(&self) -> &CircularChart {
        &self.chart
    }

    #[must_use]
    pub fn chart_mut(&mut self) -> &mut CircularChart {
        &mut self.chart
    }

    pub fn set_slices(&mut self, slices: Vec<SliceData>) {
        debug!(count = slices.len(), "set pie slices");
        self.slices = slices;
    }

    pub fn add_slice(&mut self, slice: SliceData) {
        self.slices.push(slice);
    }

    #[must_use]
    pub fn slices(&self) -> &[SliceData] {
        &self.slices
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    #[must_use]
    pub fn last_stats(&self) -> PieRenderStats {
        self.last_stats
    }

    /// The slice with the largest value, if any.
    #[must_use]
    pub fn largest_slice(&self) -> Option<&SliceData> {
        self.slices
            .iter()
            .max_by_key(|slice| OrderedFloat(slice.value()))
    }

    #[must_use]
    pub fn total_value(&self) -> f64 {
        self.slices.iter().map(SliceData::value).sum()
    }

    /// Start angle and sweep (both degrees) per slice, beginning at the
    /// chart's initial angle. Zero-total series yield all-zero sweeps.
    #[must_use]
    pub fn slice_angles(&self) -> Vec<(f64, f64)> {
        let total = self.total_value();
        let mut start = self.chart.initial_angle();
        self.slices
            .iter()
            .map(|slice| {
                let sweep = saturating_div(slice.value(), total) * 360.0;
                let entry = (start, sweep);
                start += sweep;
                entry
            })
            .collect()
    }

    /// Runs the full pie render pass into `frame`.
    ///
    /// Returns `Ok(false)` when no frame is supplied. Labels that fail to
    /// place are skipped and counted; they never abort the pass.
    pub fn render(&mut self, frame: Option<&mut RenderFrame>) -> ChartResult<bool> {
        let angles = self.slice_angles();
        let mut stats = PieRenderStats::default();

        let Self {
            chart,
            slices,
            palette,
            ..
        } = self;

        let drawn = chart.render(frame, |chart, frame| {
            render_slices(chart, frame, slices, palette, &angles, &mut stats);
            Ok(())
        })?;

        if stats.labels_skipped > 0 {
            warn!(skipped = stats.labels_skipped, "pie labels were skipped");
        }
        self.last_stats = stats;
        Ok(drawn)
    }
}

fn render_slices(
    chart: &mut CircularChart,
    frame: &mut RenderFrame,
    slices: &[SliceData],
    palette: &Palette,
    angles: &[(f64, f64)],
    stats: &mut PieRenderStats,
) {
    let radius = chart.radius();
    if radius <= 0.0 {
        debug!("degenerate plot radius, skipping slices");
        return;
    }
    let center = chart.base().plot_area().center();

    for (index, (slice, &(start, sweep))) in slices.iter().zip(angles).enumerate() {
        if sweep <= 0.0 {
            continue;
        }
        let color = slice
            .color()
            .unwrap_or_else(|| palette.color_for(index));

        // Selected wedges render displaced outward along their bisector.
        let sector_center = if slice.is_selected() {
            arc_point(center, radius / 10.0, start + sweep / 2.0)
        } else {
            center
        };

        frame.push_sector(SectorPrimitive::new(
            sector_center.x,
            sector_center.y,
            radius,
            start,
            sweep,
            color,
        ));
        stats.sectors_drawn += 1;

        let request = SliceLabelRequest {
            text: slice.label(),
            rotate_degrees: slice.label_rotate_degrees(),
            slice_color: color,
            custom: slice.label_override(),
        };
        if !chart.render_slice_label(frame, &request, sector_center, radius, start, sweep) {
            stats.labels_skipped += 1;
        }
    }
}
