use circular_chart_rs::chart::{CircularChart, PieChart, SliceLabelRequest};
use circular_chart_rs::core::arc_math::{
    arc_point, saturating_add, saturating_div, saturating_sub,
};
use circular_chart_rs::core::{Point, SliceLabelStyle, Viewport};
use circular_chart_rs::render::{Color, RenderFrame};
use proptest::prelude::*;

proptest! {
    #[test]
    fn arc_points_lie_on_the_requested_circle(
        radius in 0.0f64..10_000.0,
        angle in -720.0f64..720.0,
    ) {
        let center = Point::new(500.0, 500.0);
        let point = arc_point(center, radius, angle);
        let distance = ((point.x - center.x).powi(2) + (point.y - center.y).powi(2)).sqrt();
        prop_assert!((distance - radius).abs() <= 1e-6 * radius.max(1.0));
    }

    #[test]
    fn saturating_helpers_stay_in_the_radius_domain(
        a in 0.0f64..1.0e12,
        b in 0.0f64..1.0e12,
    ) {
        prop_assert!(saturating_add(a, b).is_finite());
        prop_assert!(saturating_sub(a, b) >= 0.0);
        prop_assert!(saturating_div(a, b).is_finite());
        prop_assert!(saturating_div(a, 0.0) == 0.0);
    }

    #[test]
    fn computed_radius_is_never_negative_or_nan(
        width in 0u32..5_000,
        height in 0u32..5_000,
    ) {
        let mut pie = PieChart::new(Viewport::new(width, height));
        pie.chart_mut().base_mut().set_padding_px(0.0);
        pie.chart_mut().base_mut().calc_plot_range();
        pie.chart_mut().compute_plot_geometry();

        let radius = pie.chart().radius();
        prop_assert!(radius.is_finite());
        prop_assert!(radius >= 0.0);
        prop_assert!(radius <= f64::from(width.min(height)) / 2.0 + 1e-9);
    }

    #[test]
    fn non_positive_bisectors_never_draw(
        offset in -360.0f64..0.0,
        fraction in 0.0f64..1.0,
    ) {
        // Choose a sweep that keeps offset + sweep / 2 at or below zero.
        let sweep = -2.0 * offset * fraction;
        prop_assume!(offset + sweep / 2.0 <= 0.0);

        let mut chart = CircularChart::new(Viewport::new(400, 400));
        chart.set_label_style(SliceLabelStyle::Inside);
        let mut frame = RenderFrame::new(Viewport::new(400, 400));
        let request = SliceLabelRequest {
            text: "label",
            rotate_degrees: 0.0,
            slice_color: Color::rgb(0.5, 0.5, 0.5),
            custom: None,
        };

        let drawn = chart.render_slice_label(
            &mut frame,
            &request,
            Point::new(200.0, 200.0),
            50.0,
            offset,
            sweep,
        );

        prop_assert!(!drawn);
        prop_assert!(frame.is_empty());
    }
}
