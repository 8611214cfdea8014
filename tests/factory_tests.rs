// Host-side tests for the heart factory.

mod common;

use common::*;
use glam::Vec2;
use heartfield_core::constants::*;
use heartfield_core::{Heart, HeartKind, SequenceRandom};

#[test]
fn sizes_stay_in_kind_range_over_many_trials() {
    let mut rng = seeded(1234);
    let (mut big_min, mut big_max) = (f32::MAX, f32::MIN);
    let (mut small_min, mut small_max) = (f32::MAX, f32::MIN);
    for _ in 0..1000 {
        let b = Heart::spawn(HeartKind::Big, BOUNDS, &mut rng);
        assert!(b.size >= BIG_SIZE.0 && b.size <= BIG_SIZE.1, "big size {}", b.size);
        big_min = big_min.min(b.size);
        big_max = big_max.max(b.size);

        let s = Heart::spawn(HeartKind::Small, BOUNDS, &mut rng);
        assert!(
            s.size >= SMALL_SIZE.0 && s.size <= SMALL_SIZE.1,
            "small size {}",
            s.size
        );
        small_min = small_min.min(s.size);
        small_max = small_max.max(s.size);
    }
    // big hearts are both larger and more varied
    assert!(big_min > small_max);
    assert!(big_max - big_min > small_max - small_min);
}

#[test]
fn spawned_hearts_fit_inside_the_surface() {
    let mut rng = seeded(99);
    for i in 0..1000 {
        let kind = if i % 2 == 0 { HeartKind::Big } else { HeartKind::Small };
        let h = Heart::spawn(kind, BOUNDS, &mut rng);
        let eps = 1e-3;
        assert!(h.pos.x >= h.size - eps && h.pos.x <= BOUNDS.x - h.size + eps);
        assert!(h.pos.y >= h.size - eps && h.pos.y <= BOUNDS.y - h.size + eps);
    }
}

#[test]
fn spawn_centres_heart_on_axes_too_small_for_it() {
    let mut rng = seeded(5);
    let h = Heart::spawn(HeartKind::Big, Vec2::new(50.0, 1000.0), &mut rng);
    assert_eq!(h.pos.x, 25.0);
    assert!(h.pos.y >= h.size - 1e-3 && h.pos.y <= 1000.0 - h.size + 1e-3);
}

#[test]
fn colors_use_a_fixed_hsla_format() {
    let mut rng = SequenceRandom::constant(0.5);
    let h = Heart::spawn(HeartKind::Big, BOUNDS, &mut rng);
    assert!(
        h.fill.css().starts_with("hsla(331.0, 92%, 79.0%, 0.45"),
        "fill was {}",
        h.fill.css()
    );
    assert_eq!(h.stroke.css(), "hsla(331.0, 95%, 55.0%, 0.300)");

    let s = Heart::spawn(HeartKind::Small, BOUNDS, &mut rng);
    assert_eq!(s.stroke.css(), "hsla(331.0, 95%, 55.0%, 0.180)");
    assert!(s.fill.css().starts_with("hsla(331.0, 92%, 77.0%, 0.32"));
}

#[test]
fn fresh_hearts_are_at_rest_with_no_stick() {
    let mut rng = seeded(3);
    let h = Heart::spawn(HeartKind::Small, BOUNDS, &mut rng);
    assert_eq!(h.drag_friction, 1.0);
    assert!(h.stick.is_none());
    assert!(h.rotation.abs() <= 0.35);
    assert!(h.angular_velocity.abs() <= 0.003);
    assert!(h.pulse_speed >= SMALL_PULSE_SPEED.0 && h.pulse_speed <= SMALL_PULSE_SPEED.1);
    assert!(h.vel.x.abs() <= SMALL_SPEED.1 && h.vel.y.abs() <= SMALL_SPEED.1);
}

#[test]
fn replacement_kind_is_big_below_threshold() {
    assert_eq!(
        HeartKind::random(&mut SequenceRandom::constant(0.44)),
        HeartKind::Big
    );
    assert_eq!(
        HeartKind::random(&mut SequenceRandom::constant(0.46)),
        HeartKind::Small
    );
}

#[test]
fn new_field_builds_configured_batches_in_order() {
    let mut rng = seeded(11);
    let field = make_field(2, 3, &mut rng);
    let kinds: Vec<HeartKind> = field.hearts().iter().map(|h| h.kind).collect();
    assert_eq!(
        kinds,
        vec![
            HeartKind::Big,
            HeartKind::Big,
            HeartKind::Small,
            HeartKind::Small,
            HeartKind::Small
        ]
    );
    assert_eq!(field.pointer(), BOUNDS * 0.5);
    assert!(field.particles().is_empty());
}
