//! Drawing the field onto an abstract 2D surface.
//!
//! The surface is a thin imperative boundary shaped like the browser's 2D
//! canvas context. The heart outline is passed to the surface once
//! ([`Surface::set_heart_outline`]); afterwards `fill_heart`/`stroke_heart`
//! draw that cached path under the current transform.

use crate::constants::{HEART_STROKE_WIDTH, PARTICLE_DOT_RADIUS_FACTOR};
use crate::field::HeartField;
use crate::outline::HeartOutline;
use crate::particle::{Particle, ParticleKind};
use glam::Vec2;

pub trait Surface {
    /// Drawable size in CSS pixels.
    fn size(&self) -> Vec2;
    fn set_heart_outline(&mut self, outline: &HeartOutline);
    fn clear(&mut self);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, radians: f32);
    fn scale(&mut self, factor: f32);
    fn set_alpha(&mut self, alpha: f32);
    fn fill_heart(&mut self, style: &str);
    fn stroke_heart(&mut self, style: &str, line_width: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, style: &str);
}

/// One heart outline placed at `pos`, rotated and sized.
pub fn draw_heart(
    surface: &mut impl Surface,
    pos: Vec2,
    size: f32,
    rotation: f32,
    fill: &str,
    stroke: Option<&str>,
    alpha: f32,
) {
    surface.save();
    surface.translate(pos);
    surface.rotate(rotation);
    surface.set_alpha(alpha);
    surface.scale(HeartOutline::scale_for(size));
    surface.fill_heart(fill);
    if let Some(stroke) = stroke {
        surface.stroke_heart(stroke, HEART_STROKE_WIDTH);
    }
    surface.restore();
}

pub fn draw_particle(surface: &mut impl Surface, p: &Particle) {
    let alpha = p.opacity();
    match p.kind {
        ParticleKind::Dot => {
            surface.save();
            surface.set_alpha(alpha);
            surface.fill_circle(p.pos, p.size * PARTICLE_DOT_RADIUS_FACTOR, p.color.css());
            surface.restore();
        }
        ParticleKind::Heart => {
            draw_heart(surface, p.pos, p.size, p.rotation, p.color.css(), None, alpha);
        }
    }
}

/// Clear, then hearts bottom to top, then particles.
pub fn draw_field(surface: &mut impl Surface, field: &HeartField) {
    surface.clear();
    for h in field.hearts() {
        draw_heart(
            surface,
            h.pos,
            h.size * h.pulse_scale(),
            h.rotation,
            h.fill.css(),
            Some(h.stroke.css()),
            1.0,
        );
    }
    for p in field.particles() {
        draw_particle(surface, p);
    }
}
