use super::*;

#[test]
fn defaults_reproduce_the_classic_demo() {
    let cfg = StereogramConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.grid, GridSize::new(120, 200).unwrap());
    assert_eq!(cfg.dot_size, 4);
    assert_eq!(cfg.fps, Fps::new(30, 1).unwrap());
    assert_eq!(cfg.shift, 2);
    assert_eq!(cfg.pixel_size().unwrap(), (960, 800));
    assert_eq!(cfg.regions(), border_frame(cfg.grid, 10).to_vec());
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg = StereogramConfig::from_reader(
        r#"{ "grid": { "width": 40, "height": 30 }, "seed": 7 }"#.as_bytes(),
    )
    .unwrap();
    assert_eq!(cfg.grid, GridSize::new(40, 30).unwrap());
    assert_eq!(cfg.seed, Some(7));
    assert_eq!(cfg.dot_size, 4);
    assert_eq!(cfg.regions(), border_frame(cfg.grid, DEFAULT_BORDER).to_vec());
}

#[test]
fn explicit_regions_parse() {
    let cfg = StereogramConfig::from_reader(
        r#"{ "depth": { "regions": [ { "x": 5, "y": 5, "width": 10, "height": 10 } ] } }"#
            .as_bytes(),
    )
    .unwrap();
    assert_eq!(cfg.regions(), vec![ShiftRegion::new(5, 5, 10, 10)]);

    let cfg =
        StereogramConfig::from_reader(r#"{ "depth": { "border": { "thickness": 3 } } }"#.as_bytes())
            .unwrap();
    assert_eq!(cfg.depth, DepthLayout::Border { thickness: 3 });
}

#[test]
fn malformed_json_is_a_validation_error() {
    let err = StereogramConfig::from_reader("{ not json".as_bytes()).unwrap_err();
    assert!(err.to_string().contains("validation error:"));
}

#[test]
fn missing_file_is_reported() {
    let err = StereogramConfig::from_path("target/does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("open stereogram config"));
}

#[test]
fn validation_catches_bad_values() {
    let bad = [
        StereogramConfig {
            dot_size: 0,
            ..StereogramConfig::default()
        },
        StereogramConfig {
            shift: 0,
            ..StereogramConfig::default()
        },
        StereogramConfig {
            fps: Fps { num: 0, den: 1 },
            ..StereogramConfig::default()
        },
        StereogramConfig {
            grid: GridSize {
                width: 0,
                height: 10,
            },
            ..StereogramConfig::default()
        },
        StereogramConfig {
            dot_size: u32::MAX,
            ..StereogramConfig::default()
        },
    ];
    for cfg in bad {
        assert!(cfg.validate().is_err(), "{cfg:?}");
    }
}

#[test]
fn config_serializes_back_to_json() {
    let cfg = StereogramConfig {
        seed: Some(3),
        ..StereogramConfig::default()
    };
    let json = serde_json::to_string(&cfg).unwrap();
    let back = StereogramConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn depth_layout_lives_under_the_depth_key() {
    let json = serde_json::to_value(StereogramConfig::default()).unwrap();
    assert_eq!(json["depth"], serde_json::json!({ "border": { "thickness": 10 } }));
    assert_eq!(json["dot_size"], serde_json::json!(4));
    assert!(json.get("regions").is_none());

    let cfg = StereogramConfig::from_reader(
        r#"{ "grid": { "width": 20, "height": 20 }, "depth": { "border": { "thickness": 2 } } }"#
            .as_bytes(),
    )
    .unwrap();
    assert_eq!(
        cfg.regions(),
        vec![
            ShiftRegion::new(0, 0, 2, 20),
            ShiftRegion::new(18, 0, 2, 20),
            ShiftRegion::new(0, 0, 20, 2),
            ShiftRegion::new(0, 18, 20, 2),
        ]
    );
}
