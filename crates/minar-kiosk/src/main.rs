//! Terminal kiosk: the full clock pipeline end to end.
//!
//! `SystemClock` → `Ticker` (1 s) → `ClockEngine` → text lines + rasterized
//! analog face, redrawn in place every second until Enter is pressed.

mod term;

use std::io::{BufRead, Write};
use std::time::Duration;

use minar_clock::prelude::*;
use minar_engine::logging::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging(None);

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║            MINAR WALL CLOCK            ║");
    println!("  ║   analog · digital · hijri (approx.)   ║");
    println!("  ╠════════════════════════════════════════╣");
    println!("  ║  Press Enter to stop the clock.        ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let long_date = SharedText::new();
    let digital = SharedText::new();
    let hijri = SharedText::new();
    let short_date = SharedText::new();
    let year = SharedText::new();

    let targets = ClockTargets {
        long_date: Some(Box::new(long_date.clone())),
        digital: Some(Box::new(digital.clone())),
        hijri: Some(Box::new(hijri.clone())),
        short_date: Some(Box::new(short_date.clone())),
        year: Some(Box::new(year.clone())),
        face: Some(FaceSurface::new(11.0)),
    };

    let mut engine = ClockEngine::new(
        Box::new(SystemClock::new()),
        Box::new(UnsupportedHijri),
        targets,
    );

    let mut ticker = Ticker::spawn(Duration::from_secs(1), move || {
        engine.tick();

        let mut out = String::new();
        if let Some(face) = engine.targets_mut().face.as_mut() {
            out = term::rasterize(face);
        }

        // Repaint in place: cursor home + clear below keeps the banner.
        print!("\x1b[8;1H\x1b[0J");
        println!("  {}", long_date.get());
        println!("  {}  ·  {}", digital.get(), hijri.get());
        println!();
        for line in out.lines() {
            println!("   {line}");
        }
        println!();
        println!("  {}  |  © {}", short_date.get(), year.get());
        let _ = std::io::stdout().flush();
    })?;

    // Block until the operator presses Enter, then wind down cleanly.
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;

    ticker.stop();
    log::info!("kiosk stopped");
    Ok(())
}
