use approx::assert_relative_eq;
use circular_chart_rs::api::{ChartEngine, ChartEngineConfig, EngineSnapshot};
use circular_chart_rs::core::{SliceData, SliceLabelStyle, Viewport};
use circular_chart_rs::render::NullRenderer;

fn engine_with_two_halves() -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::new(Viewport::new(200, 100))
        .with_label_style(SliceLabelStyle::Inside);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .chart_mut()
        .chart_mut()
        .base_mut()
        .set_padding_px(0.0);
    engine.set_slices(vec![
        SliceData::new("first", 1.0).expect("valid slice"),
        SliceData::new("second", 1.0).expect("valid slice"),
    ]);
    engine
}

#[test]
fn snapshot_resolves_radius_center_and_bisectors() {
    let mut engine = engine_with_two_halves();
    let snapshot = engine.snapshot();

    assert_eq!(snapshot.radius, 50.0);
    assert_eq!(snapshot.center_x, 100.0);
    assert_eq!(snapshot.center_y, 50.0);

    assert_eq!(snapshot.slices.len(), 2);
    let first = &snapshot.slices[0];
    assert_relative_eq!(first.start_degrees, 0.0, epsilon = 1e-9);
    assert_relative_eq!(first.sweep_degrees, 180.0, epsilon = 1e-9);
    assert_relative_eq!(first.bisector_degrees, 90.0, epsilon = 1e-9);
    // Inside labels anchor at half the radius along the bisector.
    assert_relative_eq!(first.label_anchor_x, 100.0, epsilon = 1e-9);
    assert_relative_eq!(first.label_anchor_y, 75.0, epsilon = 1e-9);
}

#[test]
fn snapshot_tracks_viewport_resizes() {
    let mut engine = engine_with_two_halves();
    assert_eq!(engine.snapshot().radius, 50.0);

    engine
        .set_viewport(Viewport::new(400, 400))
        .expect("valid viewport");
    assert_eq!(engine.snapshot().radius, 200.0);

    assert!(engine.set_viewport(Viewport::new(0, 10)).is_err());
}

#[test]
fn snapshot_round_trips_through_the_versioned_contract() {
    let mut engine = engine_with_two_halves();
    let snapshot = engine.snapshot();

    let json = snapshot
        .to_json_contract_v1_pretty()
        .expect("serialize contract");
    let parsed = EngineSnapshot::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed, snapshot);

    let engine_json = engine
        .snapshot_json_contract_v1_pretty()
        .expect("engine convenience serializer");
    let parsed = EngineSnapshot::from_json_compat_str(&engine_json).expect("parse contract");
    assert_eq!(parsed, snapshot);
}

#[test]
fn bare_snapshot_json_still_parses() {
    let mut engine = engine_with_two_halves();
    let snapshot = engine.snapshot();

    let bare = serde_json::to_string(&snapshot).expect("serialize snapshot");
    let parsed = EngineSnapshot::from_json_compat_str(&bare).expect("parse bare payload");
    assert_eq!(parsed, snapshot);
}

#[test]
fn unknown_schema_versions_are_rejected() {
    let mut engine = engine_with_two_halves();
    let snapshot_json = serde_json::to_string(&engine.snapshot()).expect("serialize snapshot");
    let payload = format!(r#"{{"schema_version":99,"snapshot":{snapshot_json}}}"#);

    let result = EngineSnapshot::from_json_compat_str(&payload);
    assert!(result.is_err());
}
