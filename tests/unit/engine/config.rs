use super::*;

#[test]
fn defaults_match_reference_page() {
    let cfg = EngineConfig::default();
    assert_eq!(cfg.particles.count, 50);
    assert_eq!(cfg.particle_tick(), Duration::from_millis(50));
    assert_eq!(cfg.header_offset, 80.0);
    assert_eq!(cfg.reveal_margin, 100.0);
    assert_eq!(cfg.stagger_step(), Duration::from_millis(200));
    assert_eq!(cfg.scroll, ScrollMode::Native);
    assert!(cfg.validate().is_ok());
}

#[test]
fn partial_json_fills_defaults() {
    let cfg = EngineConfig::from_json_str(
        r#"{
            "seed": 7,
            "particle_tick_ms": 16,
            "scroll": { "mode": "animated", "duration_ms": 600, "ease": "OutCubic" }
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.seed, Some(7));
    assert_eq!(cfg.particle_tick_ms, 16);
    assert_eq!(cfg.particles.count, 50);
    assert_eq!(
        cfg.scroll,
        ScrollMode::Animated {
            duration_ms: 600,
            ease: Ease::OutCubic
        }
    );
}

#[test]
fn json_round_trip_preserves_config() {
    let cfg = EngineConfig {
        seed: Some(42),
        ..EngineConfig::default()
    };
    let json = cfg.to_json_string().unwrap();
    assert_eq!(EngineConfig::from_json_str(&json).unwrap(), cfg);
}

#[test]
fn invalid_values_are_config_errors() {
    for json in [
        r#"{"particle_tick_ms": 0}"#,
        r#"{"max_catch_up_ticks": 0}"#,
        r#"{"header_offset": -1.0}"#,
        r#"{"reveal_threshold": 1.5}"#,
        r#"{"particles": {"speed": {"min": 1.0, "max": 0.5}}}"#,
        r#"{"menu_transition": {"type": "spring", "stiffness": 0, "damping": 1}}"#,
    ] {
        let err = EngineConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, ScrollFxError::Config(_)), "{json}: {err}");
    }
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = EngineConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, ScrollFxError::Serde(_)));
}
