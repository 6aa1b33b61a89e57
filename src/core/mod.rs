pub mod arc_math;
mod palette;
mod slice;
mod types;

pub use palette::Palette;
pub use slice::{SliceData, SliceLabelOverride, SliceLabelStyle, decimal_to_f64};
pub use types::{Point, Viewport};
