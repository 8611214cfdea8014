use glam::Vec2;

/// Live drag of one heart. `index` points into the field's heart list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragRecord {
    pub index: usize,
    /// Heart centre minus pointer at grab time.
    pub grab_offset: Vec2,
    /// Pointer position and time of the last throw-velocity sample.
    pub last_pointer: Vec2,
    pub last_time_ms: f64,
}

/// Particles spawned by a single pop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Burst {
    pub at: Vec2,
    pub particles: usize,
}

/// What a pointer press did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerOutcome {
    Missed,
    Popped(Burst),
    /// The heart now clinging to the pointer, at its new top-most index.
    Grabbed { index: usize },
}
