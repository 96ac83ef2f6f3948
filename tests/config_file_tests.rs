use std::fs;
use std::io::Write;

use pinball::PinballConfig;

#[test]
fn shipped_config_matches_defaults() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/config/pinball.ron");
    let cfg = PinballConfig::load_from_file(path).expect("shipped config loads");
    assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());

    let defaults = PinballConfig::default();
    assert_eq!(cfg.window, defaults.window);
    assert_eq!(cfg.physics, defaults.physics);
    assert_eq!(cfg.controls, defaults.controls);
    assert_eq!(cfg.table.walls, defaults.table.walls);
    assert_eq!(cfg.table.paddles.len(), 2);
    assert_eq!(cfg.table.bumpers[2].points, 25);
}

#[test]
fn partial_file_keeps_defaults_for_omitted_fields() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"(
            window: (title: "Test Table"),
            table: (launch: (velocity: (x: 0.0, y: -150.0))),
            controls: (spawn_ball: ["Enter", "Space"]),
        )"#
    )
    .expect("write config");

    let cfg = PinballConfig::load_from_file(file.path()).expect("load partial config");
    assert_eq!(cfg.window.title, "Test Table");
    assert_eq!(cfg.window.width, 600.0);
    assert_eq!(cfg.table.launch.velocity.y, -150.0);
    assert_eq!(cfg.table.launch.position.x, 300.0);
    assert_eq!(cfg.controls.spawn_ball, vec!["Enter".to_string(), "Space".to_string()]);
    assert_eq!(cfg.physics.substeps, 5);
    assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
}

#[test]
fn missing_file_falls_back_with_reason() {
    let dir = tempfile::tempdir().expect("temp dir");
    let (cfg, err) = PinballConfig::load_or_default(dir.path().join("absent.ron"));
    assert_eq!(cfg, PinballConfig::default());
    let err = err.expect("error reported");
    assert!(err.contains("read config"), "{err}");
}

#[test]
fn malformed_file_reports_parse_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("broken.ron");
    fs::write(&path, "(window: (width: \"wide\"))").expect("write config");

    let err = PinballConfig::load_from_file(&path).expect_err("type mismatch");
    assert!(format!("{err:#}").contains("parse RON"), "{err:#}");
    let (cfg, reason) = PinballConfig::load_or_default(&path);
    assert_eq!(cfg, PinballConfig::default());
    assert!(reason.is_some());
}

#[test]
fn unknown_key_names_warn_but_do_not_fail() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, r#"(controls: (reset: ["KeyR", "Hyper"]))"#).expect("write config");
    let cfg = PinballConfig::load_from_file(file.path()).expect("load");
    let warnings = cfg.validate();
    assert_eq!(warnings.len(), 1, "{warnings:?}");
    assert!(warnings[0].contains("Hyper"));
}
