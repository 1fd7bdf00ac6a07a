use super::*;

#[test]
fn defaults_are_white_base_black_shine() {
    let d = ShineOptions::default();
    assert_eq!(d.base, [255, 255, 255]);
    assert_eq!(d.shine, [0, 0, 0]);
    assert_eq!(d.cycle_duration, 8000.0);
    assert_eq!(d.flash_window, 0.075);
    assert_eq!(d.softness, 0.15);
    d.validate().unwrap();
}

#[test]
fn empty_overrides_resolve_to_defaults() {
    assert_eq!(
        ShineOverrides::default().resolve().unwrap(),
        ShineOptions::default()
    );
}

#[test]
fn overrides_replace_only_set_fields() {
    let o = ShineOverrides {
        shine: Some([10, 20, 30]),
        softness: Some(0.3),
        ..ShineOverrides::default()
    };
    let r = o.resolve().unwrap();
    assert_eq!(r.shine, [10, 20, 30]);
    assert_eq!(r.softness, 0.3);
    assert_eq!(r.base, [255, 255, 255]);
    assert_eq!(r.cycle_duration, 8000.0);
}

#[test]
fn json_uses_camel_case_keys() {
    let o = ShineOverrides::from_json_str(r#"{"cycleDuration": 1000, "flashWindow": 0.1}"#)
        .unwrap();
    assert_eq!(o.cycle_duration, Some(1000.0));
    assert_eq!(o.flash_window, Some(0.1));
    assert_eq!(o.base, None);
}

#[test]
fn json_rejects_unknown_keys() {
    let err = ShineOverrides::from_json_str(r#"{"speed": 2}"#).unwrap_err();
    assert!(matches!(err, SheenError::Serde(_)));
}

#[test]
fn validate_rejects_degenerate_timing() {
    for o in [
        ShineOverrides {
            cycle_duration: Some(0.0),
            ..ShineOverrides::default()
        },
        ShineOverrides {
            cycle_duration: Some(-5.0),
            ..ShineOverrides::default()
        },
        ShineOverrides {
            flash_window: Some(0.0),
            ..ShineOverrides::default()
        },
        ShineOverrides {
            flash_window: Some(1.5),
            ..ShineOverrides::default()
        },
        ShineOverrides {
            softness: Some(0.0),
            ..ShineOverrides::default()
        },
        ShineOverrides {
            softness: Some(f64::NAN),
            ..ShineOverrides::default()
        },
    ] {
        let err = o.resolve().unwrap_err();
        assert!(matches!(err, SheenError::InvalidArgument(_)), "{o:?}");
    }
}

#[test]
fn flash_window_of_one_is_allowed() {
    let o = ShineOverrides {
        flash_window: Some(1.0),
        ..ShineOverrides::default()
    };
    assert!(o.resolve().is_ok());
}
