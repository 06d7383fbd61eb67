use super::*;
use crate::particles::field::FIELD_EXTENT;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn single(y: f64, speed: f64) -> ParticleSimulator {
    ParticleSimulator::from_particles(
        vec![Particle {
            x: 10.0,
            y,
            size: 2.0,
            speed,
        }],
        ms(50),
        4,
    )
}

#[test]
fn particle_wraps_past_bottom_edge() {
    let mut sim = single(99.0, 2.0);
    sim.step();
    assert_eq!(sim.particles()[0].y, 1.0);
}

#[test]
fn ticks_follow_the_interval() {
    let mut sim = single(0.0, 0.5);
    sim.start(ms(0));
    assert_eq!(sim.advance(ms(49)), 0);
    assert_eq!(sim.advance(ms(50)), 1);
    assert_eq!(sim.advance(ms(150)), 2);
    assert_eq!(sim.ticks(), 3);
    assert!((sim.particles()[0].y - 1.5).abs() < 1e-12);
}

#[test]
fn invariants_hold_over_many_ticks() {
    let spec = FieldSpec::default();
    let mut sim = ParticleSimulator::new(&spec, 1234, ms(50), 4);
    let initial = sim.particles().to_vec();
    for _ in 0..10_000 {
        sim.step();
    }
    for (before, after) in initial.iter().zip(sim.particles()) {
        assert!(after.y >= 0.0 && after.y < FIELD_EXTENT);
        assert_eq!(before.x, after.x);
        assert_eq!(before.size, after.size);
        assert_eq!(before.speed, after.speed);
    }
}

#[test]
fn cancelled_simulator_ignores_ticks() {
    let mut sim = single(10.0, 1.0);
    sim.start(ms(0));
    sim.cancel();
    assert!(sim.is_cancelled());
    assert_eq!(sim.advance(ms(10_000)), 0);
    sim.step();
    assert_eq!(sim.ticks(), 0);
    assert!(sim.snapshot().is_empty());
}

#[test]
fn snapshot_drops_speed() {
    let sim = single(3.0, 0.2);
    let snap = sim.snapshot();
    assert_eq!(snap.len(), 1);
    assert_eq!((snap[0].x, snap[0].y, snap[0].size), (10.0, 3.0, 2.0));
}
