use super::*;

#[test]
fn name_reveal_animates_each_letter() {
    let r = name_reveal("Ada Lovelace").unwrap();
    assert_eq!(r.sample().len(), 11);
    assert!(r.tween().is_playing());
    assert!((r.tween().total_duration() - 2.0).abs() < 1e-12);
    assert!(r.sample().iter().all(|s| !s.state.visible));
}

#[test]
fn name_reveal_finishes_fully_visible() {
    let mut r = name_reveal("Ada").unwrap();
    r.advance(5.0);
    for s in r.sample() {
        assert_eq!(s.state.opacity, 1.0);
        assert!(s.state.visible);
    }
}

#[test]
fn name_reveal_order_is_reproducible() {
    let mut a = name_reveal("Grace Hopper").unwrap();
    let mut b = name_reveal("Grace Hopper").unwrap();
    a.advance(0.7);
    b.advance(0.7);
    assert_eq!(a.sample(), b.sample());
}

#[test]
fn about_reveal_targets_lines_at_fifth_speed() {
    let mut r = about_reveal("I write Rust and design small tools.", Some(12)).unwrap();
    assert_eq!(r.split().lines().len(), 3);
    assert_eq!(r.tween().current_time_scale(), 0.2);

    let start = r.sample();
    assert!(start.iter().all(|s| s.state.y_percent == 100.0));
    assert!(start.iter().all(|s| s.visible_fraction == 0.0));

    r.advance(1.0);
    assert!((r.tween().time() - 0.2).abs() < 1e-12);
    let mid = r.sample();
    assert!(mid[0].state.y_percent < mid[1].state.y_percent);
}

#[test]
fn about_reveal_settles_in_place() {
    let mut r = about_reveal("one two", None).unwrap();
    r.advance(100.0);
    let s = r.sample();
    assert_eq!(s.len(), 1);
    assert_eq!(s[0].state.y_percent, 0.0);
    assert_eq!(s[0].state.opacity, 1.0);
    assert_eq!(s[0].visible_fraction, 1.0);
    assert!(r.tween().is_complete());
}

#[test]
fn resize_rebuilds_tween_and_keeps_clock() {
    let mut r = about_reveal("one two three four", Some(100)).unwrap();
    r.advance(1.0);
    let before = r.tween().time();

    assert!(r.resize(Some(5)).unwrap());
    assert_eq!(r.split().lines().len(), 4);
    assert_eq!(r.tween().target_count(), 4);
    assert_eq!(r.tween().time(), before);
    assert!(r.tween().is_playing());
    assert_eq!(r.tween().current_time_scale(), 0.2);

    assert!(!r.resize(Some(5)).unwrap());
}
