use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Where a slice's text label is drawn relative to its wedge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SliceLabelStyle {
    Hidden,
    #[default]
    Inside,
    Outside,
    BrokenLine,
}

/// Per-slice label override. When present it replaces the chart-level label
/// style and paints the label in `color` for that slice only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceLabelOverride {
    pub style: SliceLabelStyle,
    pub color: Color,
}

/// One wedge of a circular chart: a data category with its display label.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceData {
    label: String,
    value: f64,
    color: Option<Color>,
    label_rotate_degrees: f64,
    custom_label: Option<SliceLabelOverride>,
    selected: bool,
}

impl SliceData {
    pub fn new(label: impl Into<String>, value: f64) -> ChartResult<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidData(
                "slice value must be finite and >= 0".to_owned(),
            ));
        }
        Ok(Self {
            label: label.into(),
            value,
            color: None,
            label_rotate_degrees: 0.0,
            custom_label: None,
            selected: false,
        })
    }

    pub fn from_decimal(label: impl Into<String>, value: Decimal) -> ChartResult<Self> {
        Self::new(label, decimal_to_f64(value, "slice value")?)
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_label_rotate_degrees(mut self, degrees: f64) -> Self {
        self.label_rotate_degrees = degrees;
        self
    }

    #[must_use]
    pub fn with_label_override(mut self, style: SliceLabelStyle, color: Color) -> Self {
        self.custom_label = Some(SliceLabelOverride { style, color });
        self
    }

    /// Marks the slice as selected; selected wedges render displaced outward
    /// from the chart center.
    #[must_use]
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Explicit slice color, if any. Slices without one take a palette color
    /// assigned by position.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    #[must_use]
    pub fn label_rotate_degrees(&self) -> f64 {
        self.label_rotate_degrees
    }

    #[must_use]
    pub fn label_override(&self) -> Option<SliceLabelOverride> {
        self.custom_label
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }
}
