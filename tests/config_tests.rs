// Host-side tests for editor configuration and its relationship to the constants.

use spectrum_core::*;

#[test]
fn default_config_is_valid() {
    let cfg = EditorConfig::default().validate().expect("defaults validate");
    assert_eq!(cfg.sample_count, WAVEFORM_SAMPLE_COUNT);
    assert_eq!(cfg.window_sec, WAVEFORM_WINDOW_SEC);
    assert_eq!(cfg.amplitude_axis, AxisRange::new(0.0, 1.2));
    assert_eq!(cfg.waveform_axis, AxisRange::new(-3.0, 3.0));
}

#[test]
fn overrides_are_parsed() {
    let cfg = EditorConfig::with_overrides(Some(" 500 "), Some("4.5")).unwrap();
    assert_eq!(cfg.sample_count, 500);
    assert_eq!(cfg.window_sec, 4.5);

    let cfg = EditorConfig::with_overrides(None, None).unwrap();
    assert_eq!(cfg, EditorConfig::default());
}

#[test]
fn bad_overrides_are_rejected() {
    assert_eq!(
        EditorConfig::with_overrides(Some("1"), None),
        Err(ConfigError::TooFewSamples(1))
    );
    assert_eq!(
        EditorConfig::with_overrides(None, Some("0")),
        Err(ConfigError::InvalidWindow(0.0))
    );
    assert!(matches!(
        EditorConfig::with_overrides(Some("abc"), None),
        Err(ConfigError::Parse { field: "samples", .. })
    ));
    assert!(matches!(
        EditorConfig::with_overrides(None, Some("NaN")),
        Err(ConfigError::InvalidWindow(_))
    ));
}

#[test]
fn huge_sample_counts_are_rejected_before_allocation() {
    assert_eq!(
        EditorConfig::with_overrides(Some("4000000000"), None),
        Err(ConfigError::TooManySamples {
            got: 4_000_000_000,
            max: WAVEFORM_MAX_SAMPLES,
        })
    );
    let at_limit = WAVEFORM_MAX_SAMPLES.to_string();
    let cfg = EditorConfig::with_overrides(Some(&at_limit), None).unwrap();
    assert_eq!(cfg.sample_count, WAVEFORM_MAX_SAMPLES);
}

#[test]
fn amplitude_axis_must_reach_the_editable_range() {
    let cfg = EditorConfig {
        amplitude_axis: AxisRange::new(0.0, 0.8),
        ..EditorConfig::default()
    };
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::InvalidAxis { name: "amplitude", .. })
    ));

    let cfg = EditorConfig {
        waveform_axis: AxisRange::new(3.0, -3.0),
        ..EditorConfig::default()
    };
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::InvalidAxis { name: "waveform", .. })
    ));
}

#[test]
fn config_errors_render_readable_messages() {
    let msg = ConfigError::TooFewSamples(1).to_string();
    assert!(msg.contains("at least 2"));
    let msg = ConfigError::Parse {
        field: "window",
        value: "x".into(),
    }
    .to_string();
    assert!(msg.contains("window"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    assert_eq!(MAX_FREQUENCY_HZ, 10.0);
    assert!(AMPLITUDE_AXIS[1] >= AMPLITUDE_MAX);
    assert!(AMPLITUDE_AXIS[0] <= AMPLITUDE_MIN);
    assert!(WAVEFORM_AXIS[0] < 0.0 && WAVEFORM_AXIS[1] > 0.0);
    assert!(WAVEFORM_SAMPLE_COUNT >= 2);
    assert!(WAVEFORM_SAMPLE_COUNT <= WAVEFORM_MAX_SAMPLES);
    for (hz, amp) in SEED_COMPONENTS {
        assert!(hz <= MAX_FREQUENCY_HZ);
        assert!((AMPLITUDE_MIN..=AMPLITUDE_MAX).contains(&amp));
    }
}
