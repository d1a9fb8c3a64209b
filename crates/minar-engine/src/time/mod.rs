//! Wall-clock time sources and the periodic ticker.
//!
//! Responsibilities:
//! - snapshot the host clock into a plain [`WallTime`] value once per tick
//! - keep the clock read behind [`ClockSource`] so tests inject fixed instants
//! - drive the render cycle on a fixed period via [`Ticker`]

mod source;
mod ticker;
mod wall;

pub use source::{ClockSource, FixedClock, SystemClock};
pub use ticker::Ticker;
pub use wall::WallTime;
