use super::*;
use crate::foundation::core::Bounds;
use crate::parallax::progress::Anchors;
use crate::scroll::regions::TrackedRegion;
use std::cell::Cell;
use std::rc::Rc;

const VH: f64 = 800.0;

fn hero_setup() -> (RegionRegistry, ParallaxMapper) {
    let mut regions = RegionRegistry::new();
    regions.insert(TrackedRegion::new("hero", || Bounds::new(0.0, 800.0)));

    let mut mapper = ParallaxMapper::new();
    mapper
        .add_rule(
            "hero".into(),
            ParallaxRule::offset(
                Anchors::Hero,
                Length::percent(0.0),
                Length::percent(30.0),
            )
            .unwrap(),
        )
        .unwrap();
    mapper
        .add_rule(
            "hero".into(),
            ParallaxRule::opacity(Anchors::Hero, 1.0, 0.0).over(0.0, 0.5),
        )
        .unwrap();
    (regions, mapper)
}

#[test]
fn hero_offset_and_fade_are_independent() {
    let (regions, mapper) = hero_setup();
    let id = RegionId::from("hero");

    let t = mapper.transform(&regions, &id, 0.0, VH).unwrap();
    assert_eq!(t.offset, Length::percent(0.0));
    assert_eq!(t.opacity, 1.0);

    let t = mapper.transform(&regions, &id, 200.0, VH).unwrap();
    assert!((t.offset.value - 7.5).abs() < 1e-9);
    assert!((t.opacity - 0.5).abs() < 1e-9);

    let t = mapper.transform(&regions, &id, 400.0, VH).unwrap();
    assert_eq!(t.opacity, 0.0);
    assert!((t.offset.value - 15.0).abs() < 1e-9);

    let t = mapper.transform(&regions, &id, 5_000.0, VH).unwrap();
    assert_eq!(t.offset, Length::percent(30.0));
    assert_eq!(t.opacity, 0.0);
}

#[test]
fn missing_region_yields_nothing() {
    let (mut regions, mapper) = hero_setup();
    regions.remove(&RegionId::from("hero"));
    assert!(mapper.transform(&regions, &"hero".into(), 100.0, VH).is_none());
    assert!(mapper.transforms(&regions, 100.0, VH).is_empty());
}

#[test]
fn geometry_is_queried_live() {
    let top = Rc::new(Cell::new(1000.0));
    let mut regions = RegionRegistry::new();
    let t = top.clone();
    regions.insert(TrackedRegion::new("features", move || {
        Bounds::new(t.get(), 1000.0)
    }));
    let mut mapper = ParallaxMapper::new();
    let rule = ParallaxRule::offset(Anchors::Hero, Length::px(0.0), Length::px(100.0)).unwrap();
    mapper.add_rule("features".into(), rule).unwrap();

    let id = RegionId::from("features");
    assert_eq!(mapper.progress(&regions, &id, &rule, 1500.0, VH), Some(0.5));
    top.set(500.0);
    assert_eq!(mapper.progress(&regions, &id, &rule, 1500.0, VH), Some(1.0));
}

#[test]
fn zero_height_region_is_static() {
    let mut regions = RegionRegistry::new();
    regions.insert(TrackedRegion::new("empty", || Bounds::new(400.0, 0.0)));
    for anchors in [Anchors::Hero, Anchors::Ambient] {
        let mut mapper = ParallaxMapper::new();
        mapper
            .add_rule(
                "empty".into(),
                ParallaxRule::offset(anchors, Length::px(10.0), Length::px(-10.0)).unwrap(),
            )
            .unwrap();
        for offset in [0.0, 200.0, 400.0, 5_000.0] {
            let t = mapper
                .transform(&regions, &"empty".into(), offset, VH)
                .unwrap();
            assert_eq!(t.offset.value, 10.0, "{anchors:?} at {offset}");
        }
    }
}

#[test]
fn invalid_rules_are_rejected() {
    let mut mapper = ParallaxMapper::new();
    let rule = ParallaxRule::opacity(Anchors::Hero, 1.0, 0.0).over(0.7, 0.2);
    assert!(mapper.add_rule("hero".into(), rule).is_err());
    assert!(mapper.rules(&"hero".into()).is_empty());
}

#[test]
fn percent_offsets_resolve_against_layer_height() {
    let t = RegionTransform {
        offset: Length::percent(-5.0),
        opacity: 1.0,
    };
    assert_eq!(t.offset_px(1000.0), -50.0);
    assert_eq!(RegionTransform::default().offset_px(1000.0), 0.0);
}
