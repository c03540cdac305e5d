#![allow(clippy::float_cmp)]

use super::*;

fn core_300() -> EngineCore {
    let cfg = ExplorerConfig { companion: false, ..ExplorerConfig::default() };
    let mut core = EngineCore::new(cfg).unwrap();
    core.set_viewport(300.0, 300.0);
    core
}

// =============================================================
// Gesture parsing
// =============================================================

#[test]
fn parses_pan() {
    assert_eq!("pan:10,-5".parse::<Gesture>().unwrap(), Gesture::Pan { dx: 10.0, dy: -5.0 });
}

#[test]
fn parses_zoom_with_spaces() {
    assert_eq!(
        "zoom:150, 150, -1".parse::<Gesture>().unwrap(),
        Gesture::Zoom { x: 150.0, y: 150.0, dy: -1.0 }
    );
}

#[test]
fn parses_controls() {
    assert_eq!("in".parse::<Gesture>().unwrap(), Gesture::Control(Control::ZoomIn));
    assert_eq!("reset".parse::<Gesture>().unwrap(), Gesture::Control(Control::Reset));
}

#[test]
fn rejects_wrong_arity() {
    assert!(matches!("pan:1".parse::<Gesture>(), Err(CliError::Gesture { .. })));
    assert!(matches!("zoom:1,2".parse::<Gesture>(), Err(CliError::Gesture { .. })));
}

#[test]
fn rejects_non_numeric_arguments() {
    assert!("pan:a,b".parse::<Gesture>().is_err());
}

#[test]
fn rejects_unknown_control() {
    let err = "sideways".parse::<Gesture>().unwrap_err();
    assert!(err.to_string().contains("sideways"));
}

#[test]
fn parse_numbers_exact_count() {
    assert_eq!(parse_numbers::<3>("1, 2.5, -3").unwrap(), [1.0, 2.5, -3.0]);
    assert!(parse_numbers::<2>("1,2,3").is_err());
}

#[test]
fn parse_numbers_rejects_non_finite() {
    for raw in ["NaN,0", "0,inf", "-infinity,1", "1e999,0"] {
        assert!(parse_numbers::<2>(raw).is_err(), "{raw}");
    }
}

#[test]
fn rejects_non_finite_gestures() {
    assert!(matches!("pan:NaN,0".parse::<Gesture>(), Err(CliError::Gesture { .. })));
    assert!(matches!("zoom:inf,0,-1".parse::<Gesture>(), Err(CliError::Gesture { .. })));
}

// =============================================================
// Gesture replay
// =============================================================

#[test]
fn pan_gesture_moves_scene() {
    let mut core = core_300();
    let before = core.triangles[0];
    Gesture::Pan { dx: 12.0, dy: -4.0 }.apply(&mut core);
    let after = core.triangles[0];
    assert_eq!(after.p1.x - before.p1.x, 12.0);
    assert_eq!(after.p1.y - before.p1.y, -4.0);
}

#[test]
fn zoom_gesture_scales_about_point() {
    let mut core = core_300();
    let before = core.triangles[0];
    Gesture::Zoom { x: 0.0, y: 0.0, dy: -1.0 }.apply(&mut core);
    let mut expected = before;
    expected.scale(Point::new(0.0, 0.0), 1.1);
    assert_eq!(core.triangles[0], expected);
}

#[test]
fn reset_gesture_undoes_earlier_gestures() {
    let mut core = core_300();
    let initial = core.triangles.clone();
    Gesture::Control(Control::Left).apply(&mut core);
    Gesture::Control(Control::Reset).apply(&mut core);
    assert_eq!(core.triangles, initial);
}

// =============================================================
// Config resolution
// =============================================================

fn cli(args: &[&str]) -> Cli {
    let mut argv = vec!["sierpinski-cli"];
    argv.extend_from_slice(args);
    argv.push("stats");
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn flags_override_config_file_before_validation() {
    let raw = r#"{ "max_depth": 0, "min_size": 2.0 }"#;
    let config = resolve_config(Some(raw), &cli(&["--max-depth", "4"])).unwrap();
    assert_eq!(config.max_depth, 4);
    assert_eq!(config.min_size, 2.0);
}

#[test]
fn invalid_merged_config_is_rejected() {
    let raw = r#"{ "max_depth": 0 }"#;
    let err = resolve_config(Some(raw), &cli(&[])).unwrap_err();
    assert!(matches!(err, CliError::Config(ConfigError::Invalid { field: "max_depth", .. })));
}

#[test]
fn malformed_config_file_is_invalid_json() {
    let err = resolve_config(Some("{ nope"), &cli(&[])).unwrap_err();
    assert!(matches!(err, CliError::InvalidJson(_)));
}

#[test]
fn flags_apply_without_config_file() {
    let config = resolve_config(None, &cli(&["--max-cuts", "99", "--no-companion"])).unwrap();
    assert_eq!(config.max_cuts, 99);
    assert!(!config.companion);
    assert_eq!(config.max_depth, ExplorerConfig::default().max_depth);
}

// =============================================================
// Colour flag
// =============================================================

#[test]
fn parse_color_accepts_css_forms() {
    assert_eq!(parse_color("rgb(0, 255, 0)").unwrap(), Color::rgb(0, 255, 0));
    assert!(parse_color("green").is_err());
}
