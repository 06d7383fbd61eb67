use super::*;

#[test]
fn bounds_bottom_and_validation() {
    let b = Bounds::new(1000.0, 400.0);
    assert_eq!(b.bottom(), 1400.0);
    assert!(b.validate().is_ok());
    assert!(Bounds::new(0.0, -1.0).validate().is_err());
    assert!(Bounds::new(f64::NAN, 1.0).validate().is_err());
}

#[test]
fn length_display_carries_unit() {
    assert_eq!(Length::percent(-5.0).to_string(), "-5%");
    assert_eq!(Length::px(40.0).to_string(), "40px");
}

#[test]
fn ids_convert_from_str() {
    let r = RegionId::from("pricing");
    assert_eq!(r.as_str(), "pricing");
    assert_eq!(ElementId::from("card-0").to_string(), "card-0");
}
