//! The heart field simulator.
//!
//! `HeartField` owns the hearts, the pop particles and the pointer/drag
//! state. The caller drives it: `step` once per frame, `pointer_*` from
//! input handlers, `render` to draw. Time is passed in as monotonic
//! milliseconds and randomness through a [`RandomSource`], so the field has
//! no hidden globals.
//!
//! The heart list order is the z-order: index 0 is drawn first, the last
//! heart is drawn on top and wins hit tests. Grabbed hearts are moved to the
//! end; popped hearts are replaced by a new heart appended at the end.

use crate::config::{ConfigError, FieldConfig};
use crate::constants::*;
use crate::heart::{Heart, HeartKind, Stick};
use crate::interaction::{Burst, DragRecord, PointerOutcome};
use crate::outline::HeartOutline;
use crate::particle::{burst_count, Particle};
use crate::random::RandomSource;
use crate::render::{self, Surface};
use glam::Vec2;

pub struct HeartField {
    config: FieldConfig,
    bounds: Vec2,
    outline: HeartOutline,
    hearts: Vec<Heart>,
    particles: Vec<Particle>,
    pointer: Vec2,
    drag: Option<DragRecord>,
}

impl HeartField {
    pub fn new(
        config: FieldConfig,
        bounds: Vec2,
        rng: &mut impl RandomSource,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut field = Self {
            config,
            bounds,
            outline: HeartOutline::new(),
            hearts: Vec::new(),
            particles: Vec::new(),
            pointer: bounds * 0.5,
            drag: None,
        };
        field.reset(rng);
        log::info!(
            "[hearts] field {}x{} big={} small={}",
            bounds.x,
            bounds.y,
            field.config.big_count,
            field.config.small_count
        );
        Ok(field)
    }

    /// Throw away every heart and build a fresh batch. Particles survive.
    pub fn reset(&mut self, rng: &mut impl RandomSource) {
        self.drag = None;
        self.hearts.clear();
        for _ in 0..self.config.big_count {
            self.hearts.push(Heart::spawn(HeartKind::Big, self.bounds, rng));
        }
        for _ in 0..self.config.small_count {
            self.hearts.push(Heart::spawn(HeartKind::Small, self.bounds, rng));
        }
    }

    /// New surface size: the heart set is rebuilt, not rescaled.
    pub fn resize(&mut self, bounds: Vec2, rng: &mut impl RandomSource) {
        self.bounds = bounds;
        self.pointer = self.pointer.clamp(Vec2::ZERO, bounds.max(Vec2::ZERO));
        self.reset(rng);
        log::debug!("[hearts] resized to {}x{}", bounds.x, bounds.y);
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn outline(&self) -> &HeartOutline {
        &self.outline
    }

    pub fn hearts(&self) -> &[Heart] {
        &self.hearts
    }

    /// Mutable view for placement; the number of hearts cannot change.
    pub fn hearts_mut(&mut self) -> &mut [Heart] {
        &mut self.hearts
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn drag(&self) -> Option<&DragRecord> {
        self.drag.as_ref()
    }

    /// Index of the heart currently being dragged, if it still exists.
    pub fn dragged_index(&self) -> Option<usize> {
        self.drag
            .map(|d| d.index)
            .filter(|&i| i < self.hearts.len())
    }

    /// Top-most heart under `point`.
    pub fn hit_test(&self, point: Vec2) -> Option<usize> {
        self.hearts.iter().rposition(|h| h.contains(point))
    }

    // ---------------- Pointer gestures ----------------

    /// Press at `pos`: pop the heart under it, or grab it and start dragging.
    pub fn pointer_down(
        &mut self,
        pos: Vec2,
        now_ms: f64,
        rng: &mut impl RandomSource,
    ) -> PointerOutcome {
        self.pointer = pos;
        // a second press while dragging ends the first drag
        self.pointer_up();

        let Some(index) = self.hit_test(pos) else {
            return PointerOutcome::Missed;
        };
        if rng.chance(self.config.pop_chance) {
            // `index` came from hit_test, so the pop always happens
            return self
                .pop(index, rng)
                .map_or(PointerOutcome::Missed, PointerOutcome::Popped);
        }
        self.grab(index, pos, now_ms)
    }

    pub fn pointer_move(&mut self, pos: Vec2, now_ms: f64) {
        self.pointer = pos;
        self.follow_pointer(now_ms);
    }

    /// End the active drag, if any. The thrown heart keeps its last velocity
    /// and gets a short burst of extra friction. Returns whether a drag ended.
    pub fn pointer_up(&mut self) -> bool {
        let Some(drag) = self.drag.take() else {
            return false;
        };
        if let Some(h) = self.hearts.get_mut(drag.index) {
            h.drag_friction = RELEASE_FRICTION;
            log::debug!(
                "[hearts] released #{} vel=({:.2},{:.2})",
                drag.index,
                h.vel.x,
                h.vel.y
            );
        }
        true
    }

    fn grab(&mut self, index: usize, pos: Vec2, now_ms: f64) -> PointerOutcome {
        let mut heart = self.hearts.remove(index);
        heart.stick = Some(Stick {
            until_ms: now_ms + self.config.stick_ms,
            strength: heart.kind.stick_strength(),
        });
        heart.vel *= GRAB_DAMPING;
        heart.angular_velocity *= GRAB_DAMPING;
        let grab_offset = heart.pos - pos;

        self.hearts.push(heart);
        let top = self.hearts.len() - 1;
        self.drag = Some(DragRecord {
            index: top,
            grab_offset,
            last_pointer: pos,
            last_time_ms: now_ms,
        });
        log::debug!("[hearts] grabbed #{} -> #{}", index, top);
        PointerOutcome::Grabbed { index: top }
    }

    /// Remove the heart at `index`, burst it into particles and append a
    /// replacement. Out-of-range indices are ignored.
    pub fn pop(&mut self, index: usize, rng: &mut impl RandomSource) -> Option<Burst> {
        if index >= self.hearts.len() {
            return None;
        }
        let heart = self.hearts.remove(index);
        self.drag = match self.drag {
            Some(d) if d.index == index => None,
            Some(d) if d.index > index => Some(DragRecord {
                index: d.index - 1,
                ..d
            }),
            other => other,
        };

        let count = burst_count(rng);
        self.particles
            .extend((0..count).map(|_| Particle::launch(heart.pos, &heart.fill, rng)));
        self.enforce_particle_cap();

        let kind = HeartKind::random(rng);
        self.hearts.push(Heart::spawn(kind, self.bounds, rng));
        log::debug!(
            "[hearts] popped #{} at ({:.0},{:.0}) particles={} replacement={:?}",
            index,
            heart.pos.x,
            heart.pos.y,
            count,
            kind
        );
        Some(Burst {
            at: heart.pos,
            particles: count,
        })
    }

    fn enforce_particle_cap(&mut self) {
        if let Some(max) = self.config.max_particles {
            if self.particles.len() > max {
                let excess = self.particles.len() - max;
                self.particles.drain(..excess);
            }
        }
    }

    /// Pin the dragged heart to the pointer and refresh its throw velocity
    /// when the pointer has moved since the last sample.
    fn follow_pointer(&mut self, now_ms: f64) {
        let Some(index) = self.drag.map(|d| d.index) else {
            return;
        };
        let Some(heart) = self.hearts.get_mut(index) else {
            self.drag = None;
            return;
        };
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        heart.pos = self.pointer + drag.grab_offset;
        if self.pointer != drag.last_pointer {
            let dt = (now_ms - drag.last_time_ms).max(MIN_DRAG_DT_MS) as f32;
            heart.vel = (self.pointer - drag.last_pointer) / dt * self.config.throw_gain;
            drag.last_pointer = self.pointer;
            drag.last_time_ms = now_ms;
        }
    }

    // ---------------- Frame ----------------

    /// Advance the simulation by one tick.
    pub fn step(&mut self, now_ms: f64, rng: &mut impl RandomSource) {
        let dragged = self.dragged_index();
        if dragged.is_some() {
            self.follow_pointer(now_ms);
        }

        for i in 0..self.hearts.len() {
            let h = &mut self.hearts[i];
            h.pulse_phase += h.pulse_speed;
            if Some(i) == dragged {
                continue;
            }

            let stuck = self.hearts[i].is_stuck(now_ms);
            let push = if stuck {
                Vec2::ZERO
            } else {
                separation_push(&self.hearts, i)
            };

            let pointer = self.pointer;
            let h = &mut self.hearts[i];
            if stuck {
                if let Some(stick) = h.stick {
                    h.vel += (pointer - h.pos) * stick.strength * STICK_PULL;
                }
                h.rotation += rng.centered(STICK_WOBBLE);
            } else {
                h.stick = None;
                h.vel *= BASE_FRICTION * h.drag_friction;
                h.vel.x += rng.centered(WANDER_IMPULSE);
                h.vel.y += rng.centered(WANDER_IMPULSE);
                h.vel += push;
                // the release episode only counts down while it is applied
                h.relax_drag_friction();
            }

            h.pos += h.vel;
            h.rotation += h.angular_velocity;
            h.bounce_walls(self.bounds);
        }

        for p in &mut self.particles {
            p.advance();
        }
        self.particles.retain(Particle::is_alive);
    }

    pub fn render(&self, surface: &mut impl Surface) {
        render::draw_field(surface, self);
    }

    /// One full frame: simulate, then draw.
    pub fn tick(&mut self, now_ms: f64, rng: &mut impl RandomSource, surface: &mut impl Surface) {
        self.step(now_ms, rng);
        self.render(surface);
    }
}

/// Soft push away from every heart closer than the separation radius.
fn separation_push(hearts: &[Heart], i: usize) -> Vec2 {
    let pos = hearts[i].pos;
    hearts
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .fold(Vec2::ZERO, |acc, (_, other)| {
            let offset = pos - other.pos;
            let d2 = offset.length_squared();
            if d2 > 0.0 && d2 < SEPARATION_RADIUS_SQ {
                acc + offset / d2.sqrt() * SEPARATION_PUSH
            } else {
                acc
            }
        })
}
