use crate::color::Paint;
use crate::constants::*;
use crate::random::RandomSource;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
    Heart,
    Dot,
}

/// Short-lived fragment of a popped heart.
#[derive(Clone, Debug)]
pub struct Particle {
    pub kind: ParticleKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub life_ms: f32,
    pub age_ms: f32,
    pub size: f32,
    pub rotation: f32,
    pub angular_velocity: f32,
    pub color: Paint,
}

impl Particle {
    /// One burst fragment launched from `origin` in a random direction, with
    /// an upward bias.
    pub fn launch(origin: Vec2, color: &Paint, rng: &mut impl RandomSource) -> Self {
        let angle = rng.angle();
        let speed = rng.range_of(BURST_SPEED);
        let vel = Vec2::from_angle(angle) * speed - Vec2::new(0.0, BURST_LIFT);
        Self {
            pos: origin,
            vel,
            life_ms: rng.range_of(PARTICLE_LIFE_MS),
            age_ms: 0.0,
            size: rng.range_of(PARTICLE_SIZE),
            rotation: rng.centered(PARTICLE_ROTATION_SPAN),
            angular_velocity: rng.centered(PARTICLE_SPIN_SPAN),
            color: color.clone(),
            kind: if rng.chance(PARTICLE_HEART_CHANCE) {
                ParticleKind::Heart
            } else {
                ParticleKind::Dot
            },
        }
    }

    /// Advance one nominal tick: age, drag, gravity, integrate.
    pub fn advance(&mut self) {
        self.age_ms += PARTICLE_TICK_MS;
        self.vel *= PARTICLE_DRAG;
        self.vel.y += PARTICLE_GRAVITY;
        self.pos += self.vel;
        self.rotation += self.angular_velocity;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.age_ms < self.life_ms
    }

    /// Linear fade from 1 at birth to 0 at end of life.
    #[inline]
    pub fn opacity(&self) -> f32 {
        if self.life_ms <= 0.0 {
            return 0.0;
        }
        (1.0 - self.age_ms / self.life_ms).max(0.0)
    }
}

/// Burst size for one pop.
pub fn burst_count(rng: &mut impl RandomSource) -> usize {
    BURST_MIN + (rng.unit() * BURST_SPREAD as f32) as usize
}
