pub mod color;
pub mod config;
pub mod constants;
pub mod field;
pub mod heart;
pub mod interaction;
pub mod outline;
pub mod particle;
pub mod random;
pub mod render;

pub use color::*;
pub use config::*;
pub use field::HeartField;
pub use heart::*;
pub use interaction::*;
pub use outline::HeartOutline;
pub use particle::*;
pub use random::*;
pub use render::Surface;
