use super::*;

#[test]
fn seeded_field_has_exact_count_and_ranges() {
    let spec = FieldSpec::default();
    let particles = spec.generate(0xA215E);
    assert_eq!(particles.len(), 50);
    for p in &particles {
        assert!((0.0..100.0).contains(&p.x));
        assert!((0.0..100.0).contains(&p.y));
        assert!(spec.size.contains(p.size), "size {}", p.size);
        assert!(spec.speed.contains(p.speed), "speed {}", p.speed);
    }
}

#[test]
fn same_seed_same_field() {
    let spec = FieldSpec::default();
    assert_eq!(spec.generate(9), spec.generate(9));
    assert_ne!(spec.generate(9), spec.generate(10));
}

#[test]
fn wrap_keeps_y_in_field() {
    assert_eq!(wrap_y(101.0), 1.0);
    assert_eq!(wrap_y(100.0), 0.0);
    assert_eq!(wrap_y(42.5), 42.5);
    assert_eq!(wrap_y(-1e-18), 0.0);
    assert!((wrap_y(-10.0) - 90.0).abs() < 1e-12);
}

#[test]
fn validation_rejects_inverted_ranges() {
    let mut spec = FieldSpec::default();
    spec.speed = SampleRange::new(0.6, 0.1);
    assert!(spec.validate().is_err());

    let mut spec = FieldSpec::default();
    spec.size = SampleRange::new(0.0, 3.0);
    assert!(spec.validate().is_err());

    assert!(FieldSpec::default().validate().is_ok());
}
