//! Calendar text views.
//!
//! All formatting here is a pure function of one [`WallTime`]; nothing reads
//! the host clock. The Gregorian contracts are fixed (long/digital follow the
//! en-US shapes, the short date follows en-GB); locale plumbing is
//! intentionally absent.

use std::fmt;

use chrono::NaiveDate;
use minar_engine::time::WallTime;

/// Why a calendar view could not be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// The host has no converter for the requested calendar system.
    Unsupported,
    /// A plugged-in converter rejected the instant.
    Failed(String),
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarError::Unsupported => write!(f, "calendar system not supported on this host"),
            CalendarError::Failed(msg) => write!(f, "calendar conversion failed: {msg}"),
        }
    }
}

impl std::error::Error for CalendarError {}

/// Pluggable Hijri (Islamic calendar) date formatter.
///
/// The engine treats failure as reportable-but-non-fatal: any error is
/// replaced by [`hijri_fallback`] and never propagates out of a tick.
pub trait HijriFormatter: Send {
    fn format(&self, t: WallTime) -> Result<String, CalendarError>;
}

/// Stock formatter for hosts without a Hijri converter.
///
/// Always reports [`CalendarError::Unsupported`], so the engine emits the
/// tagged approximation string. A real tabular converter plugs in through
/// [`HijriFormatter`]; none ships here because an exact conversion is out of
/// scope.
#[derive(Debug, Default)]
pub struct UnsupportedHijri;

impl HijriFormatter for UnsupportedHijri {
    fn format(&self, _t: WallTime) -> Result<String, CalendarError> {
        Err(CalendarError::Unsupported)
    }
}

/// Deterministic Hijri substitute: the Gregorian day/month/year of the same
/// instant, tagged as approximate.
pub fn hijri_fallback(t: WallTime) -> String {
    format!("Approx. Hijri: {}/{}/{}", t.day, t.month, t.year)
}

/// Long-form Gregorian date: `Saturday, January 1, 2000`.
pub fn long_date(t: WallTime) -> String {
    match date_of(t) {
        Some(date) => date.format("%A, %B %-d, %Y").to_string(),
        None => numeric_date(t),
    }
}

/// Compact Gregorian date: `Sat, 1 Jan 2000`.
pub fn short_date(t: WallTime) -> String {
    match date_of(t) {
        Some(date) => date.format("%a, %-d %b %Y").to_string(),
        None => numeric_date(t),
    }
}

/// 12-hour digital time with meridiem: `07:05:09 PM`.
pub fn digital_12h(t: WallTime) -> String {
    let meridiem = if t.hour < 12 { "AM" } else { "PM" };
    let hour12 = match t.hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{:02}:{:02}:{:02} {}", hour12, t.minute, t.second, meridiem)
}

fn date_of(t: WallTime) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(t.year, t.month, t.day)
}

// Last-resort shape for instants that do not name a real calendar day
// (possible only with an injected test clock; the system clock cannot
// produce one).
fn numeric_date(t: WallTime) -> String {
    log::debug!("non-calendar instant {t:?}, using numeric date");
    format!("{}-{:02}-{:02}", t.year, t.month, t.day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn y2k(h: u32, m: u32, s: u32) -> WallTime {
        WallTime::new(2000, 1, 1, h, m, s)
    }

    // ── gregorian ─────────────────────────────────────────────────────────

    #[test]
    fn long_date_contract() {
        assert_eq!(long_date(y2k(0, 0, 0)), "Saturday, January 1, 2000");
        assert_eq!(
            long_date(WallTime::new(2024, 12, 25, 8, 0, 0)),
            "Wednesday, December 25, 2024"
        );
    }

    #[test]
    fn short_date_contract() {
        assert_eq!(short_date(y2k(0, 0, 0)), "Sat, 1 Jan 2000");
        assert_eq!(
            short_date(WallTime::new(2024, 12, 25, 8, 0, 0)),
            "Wed, 25 Dec 2024"
        );
    }

    #[test]
    fn single_digit_day_is_not_padded() {
        assert_eq!(
            long_date(WallTime::new(2026, 8, 6, 0, 0, 0)),
            "Thursday, August 6, 2026"
        );
    }

    // ── digital ───────────────────────────────────────────────────────────

    #[test]
    fn digital_afternoon() {
        assert_eq!(digital_12h(y2k(19, 5, 9)), "07:05:09 PM");
    }

    #[test]
    fn digital_midnight_is_twelve_am() {
        assert_eq!(digital_12h(y2k(0, 0, 0)), "12:00:00 AM");
    }

    #[test]
    fn digital_noon_is_twelve_pm() {
        assert_eq!(digital_12h(y2k(12, 0, 0)), "12:00:00 PM");
    }

    #[test]
    fn digital_last_second_before_noon() {
        assert_eq!(digital_12h(y2k(11, 59, 59)), "11:59:59 AM");
    }

    // ── hijri ─────────────────────────────────────────────────────────────

    #[test]
    fn stock_formatter_reports_unsupported() {
        assert_eq!(
            UnsupportedHijri.format(y2k(0, 0, 0)),
            Err(CalendarError::Unsupported)
        );
    }

    #[test]
    fn fallback_string_shape() {
        let t = WallTime::new(2026, 8, 6, 10, 30, 0);
        assert_eq!(hijri_fallback(t), "Approx. Hijri: 6/8/2026");
    }

    #[test]
    fn fallback_does_not_pad_fields() {
        let t = WallTime::new(2000, 1, 1, 0, 0, 0);
        assert_eq!(hijri_fallback(t), "Approx. Hijri: 1/1/2000");
    }

    // ── errors ────────────────────────────────────────────────────────────

    #[test]
    fn error_messages_name_the_condition() {
        assert!(CalendarError::Unsupported.to_string().contains("not supported"));
        assert!(
            CalendarError::Failed("bad year".into())
                .to_string()
                .contains("bad year")
        );
    }
}
