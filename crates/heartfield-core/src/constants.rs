// Tuning constants for the heart field. Knobs an embedder may want to
// change live in `FieldConfig`; everything here is fixed behaviour.

// Heart outline (parametric curve sampled once)
pub const OUTLINE_STEP_RAD: f32 = 0.08;
pub const OUTLINE_UNITS: f32 = 32.0; // outline spans ~32 units at scale 1

// Factory ranges: big hearts
pub const BIG_SIZE: (f32, f32) = (90.0, 210.0);
pub const BIG_SPEED: (f32, f32) = (0.25, 0.85);
pub const BIG_LIGHTNESS: (f32, f32) = (72.0, 86.0);
pub const BIG_ALPHA: (f32, f32) = (0.33, 0.58);
pub const BIG_STROKE_ALPHA: f32 = 0.30;
pub const BIG_PULSE_SPEED: (f32, f32) = (0.006, 0.012);
pub const BIG_PULSE_AMPLITUDE: f32 = 0.04;
pub const BIG_STICK_STRENGTH: f32 = 0.18;

// Factory ranges: small hearts
pub const SMALL_SIZE: (f32, f32) = (28.0, 60.0);
pub const SMALL_SPEED: (f32, f32) = (0.5, 1.4);
pub const SMALL_LIGHTNESS: (f32, f32) = (70.0, 84.0);
pub const SMALL_ALPHA: (f32, f32) = (0.22, 0.42);
pub const SMALL_STROKE_ALPHA: f32 = 0.18;
pub const SMALL_PULSE_SPEED: (f32, f32) = (0.01, 0.018);
pub const SMALL_PULSE_AMPLITUDE: f32 = 0.06;
pub const SMALL_STICK_STRENGTH: f32 = 0.24;

// Shared palette
pub const BASE_HUE: f32 = 330.0;
pub const HUE_SHIFT: (f32, f32) = (-10.0, 12.0);
pub const FILL_SATURATION: f32 = 92.0;
pub const STROKE_SATURATION: f32 = 95.0;
pub const STROKE_LIGHTNESS: f32 = 55.0;
pub const INITIAL_ROTATION: (f32, f32) = (-0.35, 0.35);
pub const INITIAL_ANGULAR_VELOCITY: (f32, f32) = (-0.003, 0.003);

// Per-tick heart physics
pub const BASE_FRICTION: f32 = 0.995;
pub const DRAG_FRICTION_RELAX: f32 = 0.04; // fraction of the gap to 1 closed per tick
pub const DRAG_FRICTION_SNAP: f32 = 1e-3;
pub const RELEASE_FRICTION: f32 = 0.90;
pub const WANDER_IMPULSE: f32 = 0.006;
pub const SEPARATION_RADIUS_SQ: f32 = 900.0;
pub const SEPARATION_PUSH: f32 = 0.002;
pub const WALL_PADDING_FACTOR: f32 = 0.52;
pub const STICK_PULL: f32 = 0.02;
pub const STICK_WOBBLE: f32 = 0.004;

// Pointer interaction
pub const HIT_RADIUS_FACTOR: f32 = 0.55;
pub const GRAB_DAMPING: f32 = 0.6;
pub const MIN_DRAG_DT_MS: f64 = 1.0;
pub const REPLACEMENT_BIG_CHANCE: f32 = 0.45;

// Pop burst particles
pub const BURST_MIN: usize = 20;
pub const BURST_SPREAD: usize = 18; // count = BURST_MIN + floor(u * BURST_SPREAD)
pub const BURST_SPEED: (f32, f32) = (2.2, 7.2);
pub const BURST_LIFT: f32 = 1.2;
pub const PARTICLE_LIFE_MS: (f32, f32) = (520.0, 940.0);
pub const PARTICLE_SIZE: (f32, f32) = (6.0, 16.0);
pub const PARTICLE_ROTATION_SPAN: f32 = 1.2;
pub const PARTICLE_SPIN_SPAN: f32 = 0.08;
pub const PARTICLE_HEART_CHANCE: f32 = 0.55;
pub const PARTICLE_TICK_MS: f32 = 16.0; // nominal frame duration used for aging
pub const PARTICLE_DRAG: f32 = 0.985;
pub const PARTICLE_GRAVITY: f32 = 0.10;
pub const PARTICLE_DOT_RADIUS_FACTOR: f32 = 0.35;

// Drawing
pub const HEART_STROKE_WIDTH: f32 = 2.0;
