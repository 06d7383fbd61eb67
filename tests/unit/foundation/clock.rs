use super::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn fires_once_per_elapsed_period() {
    let mut t = IntervalTimer::new(ms(50));
    t.start(ms(0));
    assert_eq!(t.poll(ms(49), 10), 0);
    assert_eq!(t.poll(ms(50), 10), 1);
    assert_eq!(t.poll(ms(60), 10), 0);
    assert_eq!(t.poll(ms(200), 10), 3);
    assert_eq!(t.poll(ms(249), 10), 0);
    assert_eq!(t.poll(ms(250), 10), 1);
}

#[test]
fn catch_up_is_capped_and_drops_backlog() {
    let mut t = IntervalTimer::new(ms(50));
    t.start(ms(0));
    assert_eq!(t.poll(ms(10_000), 4), 4);
    assert_eq!(t.poll(ms(10_049), 4), 0);
    assert_eq!(t.poll(ms(10_050), 4), 1);
}

#[test]
fn unstarted_and_cancelled_timers_never_fire() {
    let mut t = IntervalTimer::new(ms(50));
    assert_eq!(t.poll(ms(1000), 10), 0);
    t.start(ms(0));
    assert!(t.is_running());
    t.cancel();
    assert!(t.is_cancelled());
    assert_eq!(t.poll(ms(1000), 10), 0);
    t.start(ms(1000));
    assert!(!t.is_running());
}
