use super::*;

#[test]
fn margin_insets_both_edges() {
    let w = RevealWindow::new(0.0, 800.0, 100.0);
    // Top edge of the element only 50px into the viewport: not yet revealed.
    assert!(!w.is_visible(Bounds::new(750.0, 200.0), 0.0));
    assert!(w.is_visible(Bounds::new(690.0, 200.0), 0.0));
    // Element that sits in the top 100px band only.
    assert!(!w.is_visible(Bounds::new(0.0, 100.0), 0.0));
}

#[test]
fn ratio_reflects_overlap() {
    let w = RevealWindow::new(1000.0, 800.0, 0.0);
    assert_eq!(w.intersection_ratio(Bounds::new(1600.0, 400.0)), 0.5);
    assert_eq!(w.intersection_ratio(Bounds::new(1100.0, 100.0)), 1.0);
    assert_eq!(w.intersection_ratio(Bounds::new(3000.0, 100.0)), 0.0);
}

#[test]
fn threshold_requires_fraction() {
    let w = RevealWindow::new(0.0, 800.0, 0.0);
    let half_in = Bounds::new(600.0, 400.0);
    assert!(w.is_visible(half_in, 0.5));
    assert!(!w.is_visible(half_in, 0.6));
}

#[test]
fn collapsed_window_sees_nothing() {
    let w = RevealWindow::new(0.0, 150.0, 100.0);
    assert!(!w.is_open());
    assert_eq!(w.intersection_ratio(Bounds::new(0.0, 1000.0)), 0.0);
}

#[test]
fn zero_height_elements_use_their_position() {
    let w = RevealWindow::new(0.0, 800.0, 100.0);
    assert!(w.is_visible(Bounds::new(400.0, 0.0), 0.0));
    assert!(!w.is_visible(Bounds::new(750.0, 0.0), 0.0));
}
