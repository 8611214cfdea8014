use crate::color::{Hsla, Paint};
use crate::constants::*;
use crate::random::RandomSource;
use glam::Vec2;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeartKind {
    Big,
    Small,
}

impl HeartKind {
    /// Kind for a replacement heart after a pop.
    pub fn random(rng: &mut impl RandomSource) -> Self {
        if rng.chance(REPLACEMENT_BIG_CHANCE) {
            HeartKind::Big
        } else {
            HeartKind::Small
        }
    }

    pub fn size_range(self) -> (f32, f32) {
        match self {
            HeartKind::Big => BIG_SIZE,
            HeartKind::Small => SMALL_SIZE,
        }
    }

    pub fn pulse_amplitude(self) -> f32 {
        match self {
            HeartKind::Big => BIG_PULSE_AMPLITUDE,
            HeartKind::Small => SMALL_PULSE_AMPLITUDE,
        }
    }

    pub fn stick_strength(self) -> f32 {
        match self {
            HeartKind::Big => BIG_STICK_STRENGTH,
            HeartKind::Small => SMALL_STICK_STRENGTH,
        }
    }
}

/// Timed pointer attraction left on a heart after it is grabbed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stick {
    pub until_ms: f64,
    pub strength: f32,
}

#[derive(Clone, Debug)]
pub struct Heart {
    pub kind: HeartKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub rotation: f32,
    pub angular_velocity: f32,
    pub fill: Paint,
    pub stroke: Paint,
    pub pulse_phase: f32,
    pub pulse_speed: f32,
    pub drag_friction: f32,
    pub stick: Option<Stick>,
}

impl Heart {
    /// Build a heart of `kind` somewhere fully inside a `bounds` sized surface.
    pub fn spawn(kind: HeartKind, bounds: Vec2, rng: &mut impl RandomSource) -> Self {
        let big = kind == HeartKind::Big;
        let size = rng.range_of(kind.size_range());
        let speed = rng.range_of(if big { BIG_SPEED } else { SMALL_SPEED });
        let hue = BASE_HUE + rng.range_of(HUE_SHIFT);
        let lightness = rng.range_of(if big { BIG_LIGHTNESS } else { SMALL_LIGHTNESS });
        let alpha = rng.range_of(if big { BIG_ALPHA } else { SMALL_ALPHA });
        let stroke_alpha = if big { BIG_STROKE_ALPHA } else { SMALL_STROKE_ALPHA };

        let pos = Vec2::new(
            spawn_coordinate(size, bounds.x, rng),
            spawn_coordinate(size, bounds.y, rng),
        );
        let vel = Vec2::new(rng.range(-1.0, 1.0), rng.range(-1.0, 1.0)) * speed;

        Self {
            kind,
            pos,
            vel,
            size,
            rotation: rng.range_of(INITIAL_ROTATION),
            angular_velocity: rng.range_of(INITIAL_ANGULAR_VELOCITY),
            fill: Hsla::new(hue, FILL_SATURATION, lightness, alpha).into(),
            stroke: Hsla::new(hue, STROKE_SATURATION, STROKE_LIGHTNESS, stroke_alpha).into(),
            pulse_phase: rng.range(0.0, TAU),
            pulse_speed: rng.range_of(if big { BIG_PULSE_SPEED } else { SMALL_PULSE_SPEED }),
            drag_friction: 1.0,
            stick: None,
        }
    }

    /// Distance kept between the heart centre and every surface edge.
    #[inline]
    pub fn padding(&self) -> f32 {
        self.size * WALL_PADDING_FACTOR
    }

    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        let r = self.size * HIT_RADIUS_FACTOR;
        self.pos.distance_squared(point) <= r * r
    }

    #[inline]
    pub fn is_stuck(&self, now_ms: f64) -> bool {
        self.stick.map_or(false, |s| now_ms < s.until_ms)
    }

    /// Cosmetic size multiplier; never used for hit tests or padding.
    #[inline]
    pub fn pulse_scale(&self) -> f32 {
        1.0 + self.pulse_phase.sin() * self.kind.pulse_amplitude()
    }

    /// Clamp to the padded surface and reflect the velocity component that
    /// crossed an edge.
    pub fn bounce_walls(&mut self, bounds: Vec2) {
        let pad = self.padding();
        bounce_axis(&mut self.pos.x, &mut self.vel.x, pad, bounds.x);
        bounce_axis(&mut self.pos.y, &mut self.vel.y, pad, bounds.y);
    }

    /// Move `drag_friction` a step back toward 1.
    pub fn relax_drag_friction(&mut self) {
        self.drag_friction += (1.0 - self.drag_friction) * DRAG_FRICTION_RELAX;
        if (1.0 - self.drag_friction).abs() < DRAG_FRICTION_SNAP {
            self.drag_friction = 1.0;
        }
    }
}

fn spawn_coordinate(size: f32, extent: f32, rng: &mut impl RandomSource) -> f32 {
    let (lo, hi) = (size, extent - size);
    // always draw so the random stream does not depend on the surface size
    let u = rng.unit();
    if hi < lo {
        extent * 0.5
    } else {
        lo + u * (hi - lo)
    }
}

fn bounce_axis(pos: &mut f32, vel: &mut f32, pad: f32, extent: f32) {
    if extent < pad * 2.0 {
        *pos = extent * 0.5;
        return;
    }
    if *pos < pad {
        *pos = pad;
        *vel = -*vel;
    }
    if *pos > extent - pad {
        *pos = extent - pad;
        *vel = -*vel;
    }
}
