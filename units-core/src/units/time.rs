//! Time units.
//!
//! Calendar lengths follow the usual conventions:
//!
//! - `YR` is the 365-day common year used for rates ("per year"),
//! - `YEAR_JULIAN` (365.25 d) is the astronomical year behind the light year,
//! - `YEAR_GREGORIAN`, `YEAR_TROPICAL` and `YEAR_SIDEREAL` are kept for explicit locality qualifiers.
//!
//! Months are derived from the matching year length.

use super::si::{HR, MIN, S};
use crate::PreciseUnit;

pub use super::si::{MS, NS, US};

/// Day (24 h).
pub const DAY: PreciseUnit = HR.scaled(24.0);
/// Week.
pub const WEEK: PreciseUnit = DAY.scaled(7.0);
/// Fortnight.
pub const FORTNIGHT: PreciseUnit = DAY.scaled(14.0);
/// Common year (365 d).
pub const YR: PreciseUnit = DAY.scaled(365.0);
/// Julian year (365.25 d).
pub const YEAR_JULIAN: PreciseUnit = DAY.scaled(365.25);
/// Gregorian year (365.2425 d).
pub const YEAR_GREGORIAN: PreciseUnit = DAY.scaled(365.2425);
/// Mean tropical year.
pub const YEAR_TROPICAL: PreciseUnit = DAY.scaled(365.242_19);
/// Sidereal year.
pub const YEAR_SIDEREAL: PreciseUnit = DAY.scaled(365.256_363_004);
/// Mean synodal month.
pub const MONTH_SYNODAL: PreciseUnit = DAY.scaled(29.530_588);
/// Julian month.
pub const MONTH_JULIAN: PreciseUnit = YEAR_JULIAN.scaled(1.0 / 12.0);
/// Gregorian month.
pub const MONTH_GREGORIAN: PreciseUnit = YEAR_GREGORIAN.scaled(1.0 / 12.0);
/// Generic month (30 d).
pub const MONTH: PreciseUnit = DAY.scaled(30.0);
/// Sidereal day.
pub const DAY_SIDEREAL: PreciseUnit = S.scaled(86_164.090_5);
/// Decade.
pub const DECADE: PreciseUnit = YEAR_JULIAN.scaled(10.0);
/// Century.
pub const CENTURY: PreciseUnit = YEAR_JULIAN.scaled(100.0);
/// Millennium.
pub const MILLENNIUM: PreciseUnit = YEAR_GREGORIAN.scaled(1000.0);
/// Shake (10 ns).
pub const SHAKE: PreciseUnit = S.scaled(1e-8);
/// Svedberg (1e-13 s).
pub const SVEDBERG: PreciseUnit = S.scaled(1e-13);
/// Jiffy (1/60 s, the AC line cycle).
pub const JIFFY: PreciseUnit = S.scaled(1.0 / 60.0);
/// Moment (90 s).
pub const MOMENT: PreciseUnit = S.scaled(90.0);
/// Quarter hour.
pub const QUARTER_HOUR: PreciseUnit = MIN.scaled(15.0);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn calendar_lengths() {
        assert_relative_eq!(DAY.multiplier(), 86_400.0);
        assert_relative_eq!(YR.multiplier(), 31_536_000.0);
        assert_relative_eq!(YEAR_JULIAN.multiplier(), 31_557_600.0);
        assert_eq!(WEEK.base_units(), S.base_units());
    }

    #[test]
    fn months_follow_years() {
        assert_relative_eq!(MONTH_JULIAN.multiplier() * 12.0, YEAR_JULIAN.multiplier(), max_relative = 1e-12);
    }
}
