use circular_chart_rs::chart::PieChart;
use circular_chart_rs::core::Viewport;
use circular_chart_rs::render::{Color, RenderFrame};

fn chart_without_padding(width: u32, height: u32) -> PieChart {
    let mut pie = PieChart::new(Viewport::new(width, height));
    pie.chart_mut().base_mut().set_padding_px(0.0);
    pie
}

#[test]
fn radius_is_half_of_smaller_plot_dimension() {
    let mut pie = chart_without_padding(200, 100);
    pie.chart_mut().base_mut().calc_plot_range();
    pie.chart_mut().compute_plot_geometry();

    assert_eq!(pie.chart().radius(), 50.0);
}

#[test]
fn zero_dimension_yields_zero_radius_not_nan() {
    for (width, height) in [(0, 100), (100, 0), (0, 0)] {
        let mut pie = chart_without_padding(width, height);
        pie.chart_mut().base_mut().calc_plot_range();
        pie.chart_mut().compute_plot_geometry();

        let radius = pie.chart().radius();
        assert_eq!(radius, 0.0, "viewport {width}x{height}");
        assert!(radius.is_finite());
    }
}

#[test]
fn radius_recomputes_when_viewport_changes() {
    let mut pie = chart_without_padding(200, 100);
    pie.chart_mut().base_mut().calc_plot_range();
    pie.chart_mut().compute_plot_geometry();
    assert_eq!(pie.chart().radius(), 50.0);

    pie.chart_mut().base_mut().set_viewport(Viewport::new(400, 400));
    pie.chart_mut().base_mut().calc_plot_range();
    pie.chart_mut().compute_plot_geometry();
    assert_eq!(pie.chart().radius(), 200.0);
}

#[test]
fn title_band_shrinks_the_plot_area() {
    let mut pie = chart_without_padding(200, 200);
    pie.chart_mut().base_mut().title_mut().text = "share by region".to_owned();
    pie.chart_mut().base_mut().calc_plot_range();

    let plot_area = *pie.chart().base().plot_area();
    assert!(plot_area.top() > 0.0, "title band must reserve space");
    assert!(plot_area.height() < 200.0);

    pie.chart_mut().compute_plot_geometry();
    assert!(pie.chart().radius() < 100.0);
}

#[test]
fn backdrop_renders_background_title_and_plot_area() {
    let mut pie = PieChart::new(Viewport::new(200, 200));
    pie.chart_mut().base_mut().set_background(Some(Color::WHITE));
    pie.chart_mut()
        .base_mut()
        .plot_area_mut()
        .set_background(Some(Color::rgb(0.95, 0.95, 0.95)));
    pie.chart_mut().base_mut().title_mut().text = "share by region".to_owned();
    pie.chart_mut().base_mut().title_mut().subtitle = "rolling quarter".to_owned();

    let mut frame = RenderFrame::new(Viewport::new(200, 200));
    pie.chart_mut().render_backdrop(&mut frame).expect("backdrop");

    assert_eq!(frame.rects.len(), 2, "chart background + plot background");
    assert_eq!(frame.texts.len(), 2, "title + subtitle");
    assert!(
        frame.texts[1].y > frame.texts[0].y,
        "subtitle sits below the title"
    );
}

#[test]
fn padding_is_carved_out_of_the_plot_area() {
    let mut pie = PieChart::new(Viewport::new(200, 100));
    pie.chart_mut().base_mut().set_padding_px(10.0);
    pie.chart_mut().base_mut().calc_plot_range();

    let plot_area = pie.chart().base().plot_area();
    assert_eq!(plot_area.width(), 180.0);
    assert_eq!(plot_area.height(), 80.0);
}
