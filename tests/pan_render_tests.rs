use circular_chart_rs::api::{ChartEngine, ChartEngineConfig};
use circular_chart_rs::chart::PieChart;
use circular_chart_rs::core::{Point, SliceData, SliceLabelStyle, Viewport};
use circular_chart_rs::interaction::{InteractionMode, PanMode};
use circular_chart_rs::render::{NullRenderer, RenderFrame};

fn panned_pie() -> PieChart {
    let mut pie = PieChart::new(Viewport::new(200, 100));
    pie.chart_mut().base_mut().set_padding_px(0.0);
    pie.chart_mut().set_label_style(SliceLabelStyle::Hidden);
    pie.chart_mut().base_mut().set_translation(30.0, 40.0);
    pie.set_slices(vec![SliceData::new("all", 1.0).expect("valid slice")]);
    pie
}

#[test]
fn free_pan_translates_both_axes() {
    let mut pie = panned_pie();
    let mut frame = RenderFrame::new(Viewport::new(200, 100));

    assert!(pie.render(Some(&mut frame)).expect("render"));

    assert_eq!(frame.sectors.len(), 1);
    assert_eq!(frame.sectors[0].cx, 130.0);
    assert_eq!(frame.sectors[0].cy, 90.0);
    assert_eq!(frame.current_offset(), Point::default(), "restored");
}

#[test]
fn horizontal_pan_translates_only_x() {
    let mut pie = panned_pie();
    pie.chart_mut().set_plot_pan_mode(PanMode::Horizontal);
    let mut frame = RenderFrame::new(Viewport::new(200, 100));

    assert!(pie.render(Some(&mut frame)).expect("render"));

    assert_eq!(frame.sectors[0].cx, 130.0);
    assert_eq!(frame.sectors[0].cy, 50.0);
}

#[test]
fn vertical_pan_translates_only_y() {
    let mut pie = panned_pie();
    pie.chart_mut().set_plot_pan_mode(PanMode::Vertical);
    let mut frame = RenderFrame::new(Viewport::new(200, 100));

    assert!(pie.render(Some(&mut frame)).expect("render"));

    assert_eq!(frame.sectors[0].cx, 100.0);
    assert_eq!(frame.sectors[0].cy, 90.0);
}

#[test]
fn disabled_pan_renders_unshifted() {
    let mut pie = panned_pie();
    pie.chart_mut().disable_pan_mode();
    let mut frame = RenderFrame::new(Viewport::new(200, 100));

    assert!(pie.render(Some(&mut frame)).expect("render"));

    assert_eq!(frame.sectors[0].cx, 100.0);
    assert_eq!(frame.sectors[0].cy, 50.0);
    assert_eq!(frame.current_offset(), Point::default());

    // Re-enabling pan honors the stored translation again.
    pie.chart_mut().enable_pan_mode();
    let mut frame = RenderFrame::new(Viewport::new(200, 100));
    assert!(pie.render(Some(&mut frame)).expect("render"));
    assert_eq!(frame.sectors[0].cx, 130.0);
    assert_eq!(frame.sectors[0].cy, 90.0);
}

#[test]
fn pan_configuration_round_trips() {
    let mut pie = PieChart::new(Viewport::new(200, 100));
    assert!(pie.chart().pan_mode_enabled());
    assert_eq!(pie.chart().plot_pan_mode(), PanMode::Free);

    pie.chart_mut().set_plot_pan_mode(PanMode::Vertical);
    assert_eq!(pie.chart().plot_pan_mode(), PanMode::Vertical);

    pie.chart_mut().disable_pan_mode();
    assert!(!pie.chart().pan_mode_enabled());
}

#[test]
fn missing_frame_reports_nothing_to_draw() {
    let mut pie = panned_pie();
    assert!(!pie.render(None).expect("no frame is not an error"));
}

#[test]
fn failed_render_still_restores_the_transform() {
    let mut pie = PieChart::new(Viewport::new(0, 0));
    pie.chart_mut().base_mut().set_translation(30.0, 40.0);
    let mut frame = RenderFrame::new(Viewport::new(0, 0));

    let result = pie.render(Some(&mut frame));

    assert!(result.is_err(), "invalid viewport must propagate");
    assert_eq!(frame.current_offset(), Point::default(), "restored on error");
}

#[test]
fn pan_gesture_updates_the_chart_translation() {
    let config = ChartEngineConfig::new(Viewport::new(200, 100));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");

    engine.begin_pan(10.0, 10.0);
    assert_eq!(engine.interaction_mode(), InteractionMode::Panning);

    engine.pan_to(25.0, 40.0);
    let translation = engine.chart().chart().base().translation();
    assert_eq!(translation, Point::new(15.0, 30.0));

    engine.end_pan();
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
    // Translation persists after the gesture ends.
    assert_eq!(
        engine.chart().chart().base().translation(),
        Point::new(15.0, 30.0)
    );
}

#[test]
fn pan_gestures_are_ignored_while_disabled() {
    let config = ChartEngineConfig::new(Viewport::new(200, 100));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.chart_mut().chart_mut().disable_pan_mode();

    engine.begin_pan(10.0, 10.0);
    engine.pan_to(50.0, 50.0);

    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
    assert_eq!(
        engine.chart().chart().base().translation(),
        Point::default()
    );
}
