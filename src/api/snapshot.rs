use serde::{Deserialize, Serialize};

use crate::core::SliceLabelStyle;
use crate::core::arc_math::{arc_point, saturating_add, saturating_sub};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::ChartEngine;

pub const ENGINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Resolved angular geometry for one slice, for diagnostics and
/// differential testing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceGeometry {
    pub label: String,
    pub start_degrees: f64,
    pub sweep_degrees: f64,
    pub bisector_degrees: f64,
    pub label_anchor_x: f64,
    pub label_anchor_y: f64,
}

/// Engine-level geometry snapshot taken after a plot-range recomputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub radius: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub slices: Vec<SliceGeometry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct EngineSnapshotJsonContractV1 {
    schema_version: u32,
    snapshot: EngineSnapshot,
}

impl EngineSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = EngineSnapshotJsonContractV1 {
            schema_version: ENGINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Parses either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<EngineSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: EngineSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != ENGINE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> ChartEngine<R> {
    /// Captures the resolved circular geometry for the current slice series.
    #[must_use]
    pub fn snapshot(&mut self) -> EngineSnapshot {
        let circular = self.chart.chart_mut();
        circular.base_mut().calc_plot_range();
        circular.compute_plot_geometry();

        let radius = circular.radius();
        let center = circular.base().plot_area().center();
        let anchor_radius = match circular.label_style() {
            SliceLabelStyle::Inside => saturating_sub(radius, radius / 2.0),
            SliceLabelStyle::Outside => saturating_add(radius, radius / 10.0),
            SliceLabelStyle::BrokenLine => saturating_add(radius, radius / 4.0),
            SliceLabelStyle::Hidden => 0.0,
        };

        let slices = self
            .chart
            .slice_angles()
            .into_iter()
            .zip(self.chart.slices())
            .map(|((start, sweep), slice)| {
                let bisector = start + sweep / 2.0;
                let anchor = arc_point(center, anchor_radius, bisector);
                SliceGeometry {
                    label: slice.label().to_owned(),
                    start_degrees: start,
                    sweep_degrees: sweep,
                    bisector_degrees: bisector,
                    label_anchor_x: anchor.x,
                    label_anchor_y: anchor.y,
                }
            })
            .collect();

        let viewport = self.viewport();
        EngineSnapshot {
            viewport_width: viewport.width,
            viewport_height: viewport.height,
            radius,
            center_x: center.x,
            center_y: center.y,
            slices,
        }
    }

    pub fn snapshot_json_contract_v1_pretty(&mut self) -> ChartResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
