// Shared fixtures for the host-side heart field tests.
#![allow(dead_code)]

use glam::Vec2;
use heartfield_core::{FieldConfig, HeartField, HeartOutline, RandomSource, Surface};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

pub fn config(big: usize, small: usize) -> FieldConfig {
    FieldConfig {
        big_count: big,
        small_count: small,
        ..FieldConfig::default()
    }
}

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn make_field(big: usize, small: usize, rng: &mut impl RandomSource) -> HeartField {
    HeartField::new(config(big, small), BOUNDS, rng).expect("valid config")
}

/// Pin every heart to the given positions and freeze its motion.
pub fn place(field: &mut HeartField, positions: &[Vec2]) {
    for (h, &p) in field.hearts_mut().iter_mut().zip(positions) {
        h.pos = p;
        h.vel = Vec2::ZERO;
        h.angular_velocity = 0.0;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Cmd {
    Outline(usize),
    Clear,
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f32),
    Scale(f32),
    Alpha(f32),
    FillHeart(String),
    StrokeHeart(String, f32),
    FillCircle(Vec2, f32, String),
}

#[derive(Default)]
pub struct RecordingSurface {
    pub size: Vec2,
    pub cmds: Vec<Cmd>,
}

impl RecordingSurface {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            cmds: Vec::new(),
        }
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }
    fn set_heart_outline(&mut self, outline: &HeartOutline) {
        self.cmds.push(Cmd::Outline(outline.points().len()));
    }
    fn clear(&mut self) {
        self.cmds.push(Cmd::Clear);
    }
    fn save(&mut self) {
        self.cmds.push(Cmd::Save);
    }
    fn restore(&mut self) {
        self.cmds.push(Cmd::Restore);
    }
    fn translate(&mut self, offset: Vec2) {
        self.cmds.push(Cmd::Translate(offset));
    }
    fn rotate(&mut self, radians: f32) {
        self.cmds.push(Cmd::Rotate(radians));
    }
    fn scale(&mut self, factor: f32) {
        self.cmds.push(Cmd::Scale(factor));
    }
    fn set_alpha(&mut self, alpha: f32) {
        self.cmds.push(Cmd::Alpha(alpha));
    }
    fn fill_heart(&mut self, style: &str) {
        self.cmds.push(Cmd::FillHeart(style.to_string()));
    }
    fn stroke_heart(&mut self, style: &str, line_width: f32) {
        self.cmds.push(Cmd::StrokeHeart(style.to_string(), line_width));
    }
    fn fill_circle(&mut self, center: Vec2, radius: f32, style: &str) {
        self.cmds.push(Cmd::FillCircle(center, radius, style.to_string()));
    }
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}
