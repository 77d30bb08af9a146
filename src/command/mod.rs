/// Command text rendering for the automation client.
pub mod buffer;
pub mod setblock;

pub use buffer::{CommandBuffer, DEFAULT_CAPACITY};
pub use setblock::{BlockRef, Point, SetBlock, format_setblock};
