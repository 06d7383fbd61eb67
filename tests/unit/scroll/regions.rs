use super::*;

#[test]
fn insert_replaces_and_remove_forgets() {
    let mut reg = RegionRegistry::new();
    assert!(reg.insert(TrackedRegion::new("pricing", || Bounds::new(10.0, 5.0))).is_none());
    assert!(reg.insert(TrackedRegion::new("pricing", || Bounds::new(20.0, 5.0))).is_some());
    assert_eq!(reg.len(), 1);
    assert_eq!(reg.bounds(&"pricing".into()), Some(Bounds::new(20.0, 5.0)));
    assert!(reg.remove(&"pricing".into()).is_some());
    assert!(reg.is_empty());
    assert_eq!(reg.bounds(&"pricing".into()), None);
}

#[test]
fn broken_geometry_is_sanitized() {
    let mut reg = RegionRegistry::new();
    reg.insert(TrackedRegion::new("nan", || Bounds::new(f64::NAN, 10.0)));
    reg.insert(TrackedRegion::new("neg", || Bounds::new(10.0, -3.0)));
    reg.insert(TrackedRegion::new("inf", || Bounds::new(10.0, f64::INFINITY)));
    assert_eq!(reg.bounds(&"nan".into()), None);
    assert_eq!(reg.bounds(&"inf".into()), None);
    assert_eq!(reg.bounds(&"neg".into()), Some(Bounds::new(10.0, 0.0)));
}
