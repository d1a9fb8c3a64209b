//! Minar clock: the wall-clock display engine on top of `minar-engine`.
//!
//! Each tick captures one [`WallTime`](minar_engine::time::WallTime) and fans
//! it out to every attached target: calendar text sinks (long date, digital
//! time, Hijri approximation, short date, year) and the analog face surface.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use minar_clock::prelude::*;
//! use minar_engine::time::{SystemClock, Ticker};
//! use std::time::Duration;
//!
//! let digital = SharedText::new();
//! let mut targets = ClockTargets::default();
//! targets.digital = Some(Box::new(digital.clone()));
//! targets.face = Some(FaceSurface::new(120.0));
//!
//! let mut engine = ClockEngine::new(
//!     Box::new(SystemClock::new()),
//!     Box::new(UnsupportedHijri),
//!     targets,
//! );
//!
//! let mut ticker = Ticker::spawn(Duration::from_secs(1), move || engine.tick())?;
//! // ... later:
//! ticker.stop();
//! ```

pub mod angles;
pub mod calendar;
pub mod engine;
pub mod face;
pub mod surface;

/// Everything needed to assemble and drive a clock display.
pub mod prelude {
    pub use crate::angles::HandAngles;
    pub use crate::calendar::{CalendarError, HijriFormatter, UnsupportedHijri};
    pub use crate::engine::{ClockEngine, ClockTargets, SharedText, TextSink};
    pub use crate::face::FaceStyle;
    pub use crate::surface::FaceSurface;

    // Re-export the engine primitives callers commonly need.
    pub use minar_engine::coords::Vec2;
    pub use minar_engine::paint::Color;
    pub use minar_engine::time::{ClockSource, FixedClock, SystemClock, Ticker, WallTime};
}
