pub mod color;
pub mod input;
pub mod pacer;

pub use color::{PackedColor, Rgba};
pub use input::{KeyAction, SpecialKey, KEY_ESCAPE};
pub use pacer::{FramePacer, FrameStats};
