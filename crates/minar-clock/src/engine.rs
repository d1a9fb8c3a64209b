//! The clock engine: one instant in, every attached view updated.

use std::sync::Arc;

use minar_engine::time::ClockSource;
use parking_lot::Mutex;

use crate::angles::HandAngles;
use crate::calendar::{self, HijriFormatter};
use crate::face::{self, FaceStyle};
use crate::surface::FaceSurface;

/// Receives one formatted text view per tick.
///
/// The display-side analog of a text node: the engine overwrites the whole
/// content, it never appends.
pub trait TextSink: Send {
    fn set_text(&mut self, text: &str);
}

/// Shared text buffer sink.
///
/// Clone the handle before boxing it into [`ClockTargets`]; the clone reads
/// what the engine wrote. This is the kiosk's bridge from the tick thread to
/// the terminal and the test suite's observation point.
#[derive(Debug, Clone, Default)]
pub struct SharedText(Arc<Mutex<String>>);

impl SharedText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> String {
        self.0.lock().clone()
    }
}

impl TextSink for SharedText {
    fn set_text(&mut self, text: &str) {
        let mut slot = self.0.lock();
        slot.clear();
        slot.push_str(text);
    }
}

/// The display targets a [`ClockEngine`] renders into.
///
/// Every slot is optional: an absent target skips only its own sub-render,
/// the rest of the tick proceeds (a page without a digital clock node still
/// gets its dates and analog face).
#[derive(Default)]
pub struct ClockTargets {
    /// Long Gregorian date line.
    pub long_date: Option<Box<dyn TextSink>>,
    /// 12-hour digital clock line.
    pub digital: Option<Box<dyn TextSink>>,
    /// Hijri (approximate) date line.
    pub hijri: Option<Box<dyn TextSink>>,
    /// Compact date line.
    pub short_date: Option<Box<dyn TextSink>>,
    /// Bare year (footer).
    pub year: Option<Box<dyn TextSink>>,
    /// Analog face surface.
    pub face: Option<FaceSurface>,
}

impl ClockTargets {
    fn describe(&self) -> String {
        let mut present = Vec::new();
        let mut slot = |name: &'static str, on: bool| {
            if on {
                present.push(name);
            }
        };
        slot("long-date", self.long_date.is_some());
        slot("digital", self.digital.is_some());
        slot("hijri", self.hijri.is_some());
        slot("short-date", self.short_date.is_some());
        slot("year", self.year.is_some());
        slot("face", self.face.is_some());
        present.join(", ")
    }
}

/// Derives and renders every clock view from a single captured instant.
///
/// One `tick()` = one [`WallTime`]: the digital line, the three date lines
/// and the analog hands always agree, because they are all computed from the
/// same snapshot before anything is rendered.
pub struct ClockEngine {
    clock: Box<dyn ClockSource>,
    hijri: Box<dyn HijriFormatter>,
    style: FaceStyle,
    targets: ClockTargets,
    ticks: u64,
}

impl ClockEngine {
    pub fn new(
        clock: Box<dyn ClockSource>,
        hijri: Box<dyn HijriFormatter>,
        targets: ClockTargets,
    ) -> Self {
        log::info!(
            "clock engine ready (source: {}, targets: [{}])",
            clock.name(),
            targets.describe()
        );
        Self {
            clock,
            hijri,
            style: FaceStyle::default(),
            targets,
            ticks: 0,
        }
    }

    pub fn with_style(mut self, style: FaceStyle) -> Self {
        self.style = style;
        self
    }

    /// Runs one render cycle.
    ///
    /// Never fails: a missing target is skipped, a Hijri formatting error is
    /// substituted locally. Nothing here may abort the periodic schedule.
    pub fn tick(&mut self) {
        let t = self.clock.now();
        self.ticks += 1;

        if let Some(sink) = &mut self.targets.long_date {
            sink.set_text(&calendar::long_date(t));
        }
        if let Some(sink) = &mut self.targets.digital {
            sink.set_text(&calendar::digital_12h(t));
        }
        if let Some(sink) = &mut self.targets.hijri {
            let line = match self.hijri.format(t) {
                Ok(line) => line,
                Err(err) => {
                    log::debug!("hijri formatter unavailable ({err}), using fallback");
                    calendar::hijri_fallback(t)
                }
            };
            sink.set_text(&line);
        }
        if let Some(sink) = &mut self.targets.short_date {
            sink.set_text(&calendar::short_date(t));
        }
        if let Some(sink) = &mut self.targets.year {
            sink.set_text(&t.year.to_string());
        }

        if let Some(surface) = &mut self.targets.face {
            let angles = HandAngles::at(t);
            let (center, radius) = (surface.center(), surface.radius());
            surface.begin_frame();
            face::paint_face(surface.draw_list(), center, radius, angles, &self.style);
        }

        log::trace!("tick {} rendered {t:?}", self.ticks);
    }

    /// Number of completed ticks since construction.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn targets(&self) -> &ClockTargets {
        &self.targets
    }

    /// Mutable target access, e.g. to rasterize the face's draw list.
    pub fn targets_mut(&mut self) -> &mut ClockTargets {
        &mut self.targets
    }
}
