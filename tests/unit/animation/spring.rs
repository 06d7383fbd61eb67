use super::*;

#[test]
fn starts_at_zero_and_rests_at_one() {
    for spring in [
        Spring::new(300.0, 30.0),
        Spring::new(50.0, 10.0),
        Spring::new(100.0, 20.0),
        Spring::new(100.0, 60.0),
    ] {
        assert_eq!(spring.position(0.0), 0.0);
        assert!((spring.position(10.0) - 1.0).abs() < 1e-3, "{spring:?}");
    }
}

#[test]
fn damping_ratio_classifies_regimes() {
    assert!(Spring::new(300.0, 30.0).damping_ratio() < 1.0);
    assert!((Spring::new(100.0, 20.0).damping_ratio() - 1.0).abs() < 1e-12);
    assert!(Spring::new(100.0, 60.0).damping_ratio() > 1.0);
}

#[test]
fn underdamped_spring_overshoots() {
    let spring = Spring::new(200.0, 4.0);
    let peak = (1..400)
        .map(|i| spring.position(f64::from(i) / 200.0))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);
}

#[test]
fn overdamped_spring_never_overshoots() {
    let spring = Spring::new(100.0, 60.0);
    for i in 0..2000 {
        assert!(spring.position(f64::from(i) / 100.0) <= 1.0 + 1e-12);
    }
}

#[test]
fn settle_time_bounds_remaining_motion() {
    let spring = Spring::new(300.0, 30.0);
    let settle = spring.settle_time().as_secs_f64();
    assert!(settle > 0.0 && settle < 30.0);
    for i in 0..100 {
        let t = settle + f64::from(i) * 0.01;
        assert!((spring.position(t) - 1.0).abs() < 1e-3);
    }
}

#[test]
fn validity_rejects_degenerate_parameters() {
    assert!(Spring::default().is_valid());
    assert!(!Spring::new(0.0, 10.0).is_valid());
    assert!(!Spring::new(10.0, -1.0).is_valid());
}
