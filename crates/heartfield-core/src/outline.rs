use crate::constants::{OUTLINE_STEP_RAD, OUTLINE_UNITS};
use glam::Vec2;
use std::f32::consts::TAU;

/// Closed heart polyline in local units, about `OUTLINE_UNITS` across,
/// centred near the origin with the point facing down (+y).
///
/// Computed once and handed to the surface so it can build its native path a
/// single time.
#[derive(Clone, Debug)]
pub struct HeartOutline {
    points: Vec<Vec2>,
}

impl HeartOutline {
    pub fn new() -> Self {
        let mut points = Vec::new();
        let mut t = 0.0_f32;
        while t <= TAU + 0.01 {
            points.push(heart_curve(t));
            t += OUTLINE_STEP_RAD;
        }
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Scale that maps the outline onto a heart of the given size.
    #[inline]
    pub fn scale_for(size: f32) -> f32 {
        size / OUTLINE_UNITS
    }
}

impl Default for HeartOutline {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn heart_curve(t: f32) -> Vec2 {
    let x = 16.0 * t.sin().powi(3);
    let y = -(13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos());
    Vec2::new(x, y)
}
