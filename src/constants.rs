// DOM wiring for the heart canvas.

pub const CANVAS_ID: &str = "heartCanvas";

// Optional `data-*` overrides read from the canvas element
pub const ATTR_BIG_COUNT: &str = "data-big-count";
pub const ATTR_SMALL_COUNT: &str = "data-small-count";
pub const ATTR_POP_CHANCE: &str = "data-pop-chance";
pub const ATTR_STICK_MS: &str = "data-stick-ms";
pub const ATTR_MAX_PARTICLES: &str = "data-max-particles";
