//! The gate flyer simulation. Knows nothing about windows, textures or
//! keyboards: the shell feeds it [Event]s once per tick and reads the
//! state back for drawing.

pub mod avatar;
pub mod collision;
pub mod config;
pub mod decoration;
pub mod event;
pub mod obstacle;
pub mod score;
pub mod timer;
pub mod world;

pub use avatar::*;
pub use collision::*;
pub use config::{Config, Span, sections};
pub use decoration::*;
pub use event::*;
pub use obstacle::*;
pub use score::*;
pub use timer::*;
pub use world::*;

/// Length of one simulation tick in seconds.
pub const FRAME_DT: f32 = 1.0 / 60.0;

/// Something that moves by one frame worth of motion.
pub trait Advance {
    fn advance(&mut self);
}
