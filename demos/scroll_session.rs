use std::time::Duration;

use scrollfx::{
    AnimationDescriptor, AnimationEngine, Anchors, Bounds, Ease, ElementId, EngineConfig,
    InMemoryViewport, Length, LoopTrack, ParallaxRule, Transition, Trigger, Viewport, VisualState,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let cfg = EngineConfig::from_json_str(include_str!("../tests/data/landing_config.json"))?;
    let viewport = InMemoryViewport::new(800.0).with_document_height(4000.0);
    let mut engine = AnimationEngine::new(cfg, viewport)?;

    let sections = [
        ("hero", 0.0, 900.0),
        ("features", 900.0, 1200.0),
        ("pricing", 2100.0, 1000.0),
        ("contact", 3100.0, 900.0),
    ];
    for (id, top, height) in sections {
        engine.register_region(id, move || Bounds::new(top, height))?;
    }
    engine.add_parallax_rule(
        "hero",
        ParallaxRule::offset(Anchors::Hero, Length::percent(0.0), Length::percent(30.0))?,
    )?;
    engine.add_parallax_rule(
        "hero",
        ParallaxRule::opacity(Anchors::Hero, 1.0, 0.0).over(0.0, 0.5),
    )?;
    for (id, ..) in &sections[1..] {
        engine.add_parallax_rule(
            *id,
            ParallaxRule::offset(Anchors::Ambient, Length::percent(5.0), Length::percent(-5.0))?,
        )?;
    }

    let fade_up = AnimationDescriptor::new(
        VisualState::hidden_below(20.0),
        VisualState::identity(),
        Transition::tween(Duration::from_millis(800), Ease::OutCubic),
    );
    engine.observe(
        "hero-title",
        Trigger::Mount,
        fade_up.with_delay(Duration::from_millis(200)),
        Duration::ZERO,
    )?;
    let cards = (0..3)
        .map(|i| {
            let top = 1000.0 + 300.0 * f64::from(i);
            (
                ElementId(format!("feature-card-{i}")),
                Trigger::InView(Box::new(move || Bounds::new(top, 250.0))),
            )
        })
        .collect();
    engine.observe_group(cards, fade_up, Duration::ZERO)?;
    engine.add_loop(
        "scroll-indicator",
        LoopTrack::evenly_spaced(
            vec![0.0, 12.0, 0.0],
            Duration::from_millis(1500),
            Ease::InOutCubic,
        )?,
    )?;

    engine.mount(Duration::ZERO)?;

    // 60 fps host loop; the user scrolls every quarter second.
    for step in 0..=90u64 {
        let now = Duration::from_millis(step * 16);
        if step % 15 == 0 {
            engine.viewport_mut().set_offset(step as f64 * 16.0);
            let offset = engine.viewport().scroll_offset();
            engine.handle_scroll(offset);
        }
        let Some(frame) = engine.frame(now) else {
            break;
        };
        for t in &frame.triggered {
            println!(
                "{:>5}ms entrance {} (delay {:?})",
                now.as_millis(),
                t.id,
                t.descriptor.delay
            );
        }
        if step % 30 == 0 {
            let hero = frame.region(&"hero".into()).copied().unwrap_or_default();
            println!(
                "{:>5}ms offset {:>6.1} hero {} opacity {:.2} particle[0] y {:.2}",
                now.as_millis(),
                frame.scroll_offset,
                hero.offset,
                hero.opacity,
                frame.particles.first().map(|p| p.y).unwrap_or_default(),
            );
        }
    }

    engine.toggle_menu(Duration::from_millis(1500));
    for action in engine.navigate_to(&"pricing".into(), Duration::from_millis(1600)) {
        println!("nav: {action:?}");
    }
    println!("viewport calls: {:?}", engine.viewport().calls());

    engine.dispose();
    println!("listeners after dispose: {}", engine.viewport().attached_listeners());
    Ok(())
}
