use super::*;
use crate::foundation::rng::Rng64;

#[test]
fn anchored_window_scenario() {
    let range = AnchorRange::new(1000.0, 2000.0);
    assert_eq!(range.progress(1000.0), 0.0);
    assert_eq!(range.progress(1500.0), 0.5);
    assert_eq!(range.progress(2500.0), 1.0);
    assert_eq!(range.progress(0.0), 0.0);
}

#[test]
fn progress_is_always_clamped() {
    let mut rng = Rng64::new(42);
    for _ in 0..5_000 {
        let start = rng.next_in(-5_000.0, 5_000.0);
        let end = start + rng.next_in(0.001, 5_000.0);
        let offset = rng.next_in(-20_000.0, 20_000.0);
        let p = AnchorRange::new(start, end).progress(offset);
        assert!((0.0..=1.0).contains(&p), "{start} {end} {offset} -> {p}");
    }
}

#[test]
fn degenerate_ranges_yield_zero() {
    assert_eq!(AnchorRange::new(500.0, 500.0).progress(500.0), 0.0);
    assert_eq!(AnchorRange::new(500.0, 500.0).progress(900.0), 0.0);
    assert_eq!(AnchorRange::new(800.0, 200.0).progress(500.0), 0.0);
    assert_eq!(AnchorRange::new(0.0, 100.0).progress(f64::NAN), 0.0);
}

#[test]
fn hero_anchors_track_own_scroll_through() {
    let range = AnchorRange::resolve(Anchors::Hero, Bounds::new(0.0, 900.0), 900.0);
    assert_eq!(range, AnchorRange::new(0.0, 900.0));
    assert_eq!(range.progress(450.0), 0.5);
}

#[test]
fn ambient_anchors_track_visibility_window() {
    let range = AnchorRange::resolve(Anchors::Ambient, Bounds::new(2000.0, 600.0), 800.0);
    assert_eq!(range, AnchorRange::new(1200.0, 2600.0));
    assert_eq!(range.progress(1200.0), 0.0);
    assert_eq!(range.progress(1900.0), 0.5);
}

#[test]
fn zero_height_hero_region_is_degenerate() {
    let range = AnchorRange::resolve(Anchors::Hero, Bounds::new(300.0, 0.0), 800.0);
    assert_eq!(range.progress(300.0), 0.0);
    assert_eq!(range.progress(10_000.0), 0.0);
}

#[test]
fn zero_height_ambient_region_is_degenerate() {
    let range = AnchorRange::resolve(Anchors::Ambient, Bounds::new(2000.0, 0.0), 800.0);
    assert_eq!(range.progress(1200.0), 0.0);
    assert_eq!(range.progress(1600.0), 0.0);
    assert_eq!(range.progress(10_000.0), 0.0);
}

#[test]
fn negative_or_nan_height_is_degenerate_for_both_anchors() {
    for anchors in [Anchors::Hero, Anchors::Ambient] {
        for height in [-50.0, f64::NAN] {
            let range = AnchorRange::resolve(anchors, Bounds::new(1000.0, height), 800.0);
            assert_eq!(range.progress(900.0), 0.0);
            assert_eq!(range.progress(1500.0), 0.0);
        }
    }
}
