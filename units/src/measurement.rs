//! Values paired with units.
//!
//! [`Measurement`] is a plain `f64` together with the [`PreciseUnit`] it is expressed in. Arithmetic combines the
//! units the same way [`PreciseUnit`] does; addition and subtraction convert the right-hand side first.
//!
//! ```rust
//! use units::{parse_measurement, MatchFlags};
//!
//! let m = parse_measurement("23.7 m/s", MatchFlags::DEFAULT);
//! assert_eq!(m.value(), 23.7);
//! assert_eq!(m.to_string(), "23.7 m/s");
//! ```

use crate::error::{Result, UnitsError};
use crate::flags::MatchFlags;
use crate::generate::{format_significant, to_string};
use crate::parse::number::leading_number;
use crate::parse::unit_from_string;
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};
use units_core::si::{CURRENCY, ONE};
use units_core::special::ERROR;
use units_core::units::length::{FT, IN};
use units_core::units::temperature::{CELSIUS_ZERO_K, DEG_F};
use units_core::{cround_precise, PreciseUnit};

/// A numeric value expressed in a unit.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    value: f64,
    units: PreciseUnit,
}

impl Measurement {
    /// Create a measurement of `value` in `units`.
    pub const fn new(value: f64, units: PreciseUnit) -> Self {
        Self { value, units }
    }

    /// The numeric value, in [`Measurement::units`].
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// The unit the value is expressed in.
    pub const fn units(&self) -> PreciseUnit {
        self.units
    }

    /// The value expressed in `units`; NaN if the two units are not convertible.
    pub fn value_as(&self, units: PreciseUnit) -> f64 {
        convert(self.value, self.units, units)
    }

    /// The same quantity expressed in `units`.
    pub fn convert_to(&self, units: PreciseUnit) -> Self {
        Self::new(self.value_as(units), units)
    }

    /// The same quantity expressed in SI base units (multiplier folded into the value).
    pub fn convert_to_base(&self) -> Self {
        Self::new(
            self.value * self.units.multiplier(),
            PreciseUnit::with_all(self.units.base_units(), self.units.commodity(), 1.0),
        )
    }

    /// `true` when the unit is valid and the value is a number.
    pub fn is_valid(&self) -> bool {
        !self.units.is_error() && !self.value.is_nan()
    }
}

impl Default for Measurement {
    fn default() -> Self {
        Self::new(0.0, ONE)
    }
}

/// Equal when the right-hand side, converted to the left-hand unit, rounds to the same value.
impl PartialEq for Measurement {
    fn eq(&self, other: &Self) -> bool {
        let rhs = other.value_as(self.units);
        self.value == rhs || cround_precise(self.value) == cround_precise(rhs)
    }
}

impl Mul<f64> for Measurement {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.value * rhs, self.units)
    }
}

impl Mul<Measurement> for f64 {
    type Output = Measurement;
    fn mul(self, rhs: Measurement) -> Measurement {
        rhs * self
    }
}

impl Div<f64> for Measurement {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::new(self.value / rhs, self.units)
    }
}

impl Mul<PreciseUnit> for Measurement {
    type Output = Self;
    fn mul(self, rhs: PreciseUnit) -> Self {
        Self::new(self.value, self.units * rhs)
    }
}

impl Div<PreciseUnit> for Measurement {
    type Output = Self;
    fn div(self, rhs: PreciseUnit) -> Self {
        Self::new(self.value, self.units / rhs)
    }
}

impl Mul for Measurement {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.value * rhs.value, self.units * rhs.units)
    }
}

impl Div for Measurement {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(self.value / rhs.value, self.units / rhs.units)
    }
}

impl Add for Measurement {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value_as(self.units), self.units)
    }
}

impl Sub for Measurement {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value_as(self.units), self.units)
    }
}

impl Neg for Measurement {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.value, self.units)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&measurement_to_string(self, MatchFlags::DEFAULT))
    }
}

/// Render a measurement as its value with 12 significant digits, a space, and the unit string.
///
/// A dimensionless measurement renders as the bare number.
pub fn measurement_to_string(measurement: &Measurement, flags: MatchFlags) -> String {
    let value = format_significant(measurement.value, 12);
    let units = to_string(measurement.units, flags);
    if units.is_empty() {
        value
    } else {
        format!("{} {}", value, units)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion
// ─────────────────────────────────────────────────────────────────────────────

/// Convert `value` from one unit to another.
///
/// Offset temperature scales (°C, °F, Réaumur) are converted through kelvin with their zero offsets. The generic
/// default unit converts to anything unchanged.
///
/// # Returns
/// The converted value, or NaN when the units have different dimensions or commodities.
pub fn convert(value: f64, from: PreciseUnit, to: PreciseUnit) -> f64 {
    if from.is_exactly_the_same(to) || from.is_default() || to.is_default() {
        return value;
    }
    if from.commodity() != to.commodity() {
        return f64::NAN;
    }
    if (from.is_temperature() || to.is_temperature()) && from.has_same_base(to) {
        return convert_temperature(value, from, to);
    }
    if from.is_convertible(to) {
        return value * from.multiplier() / to.multiplier();
    }
    f64::NAN
}

fn convert_temperature(value: f64, from: PreciseUnit, to: PreciseUnit) -> f64 {
    let kelvin = if from.is_temperature() {
        let scaled = if from == DEG_F {
            (value - 32.0) * DEG_F.multiplier()
        } else {
            value * from.multiplier()
        };
        scaled + CELSIUS_ZERO_K
    } else {
        value * from.multiplier()
    };
    if !to.is_temperature() {
        return kelvin / to.multiplier();
    }
    let relative = kelvin - CELSIUS_ZERO_K;
    if to == DEG_F {
        relative / DEG_F.multiplier() + 32.0
    } else {
        relative / to.multiplier()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Parsing
// ─────────────────────────────────────────────────────────────────────────────

/// Parse a measurement string such as `"45 m"`, `"$9.99"` or `"5'7\""`.
///
/// Never fails: an unreadable unit yields a measurement whose unit is the error unit, and an out-of-range number
/// yields NaN in the error unit. Text without a leading number is read as one of the parsed unit.
///
/// # Arguments
/// * `text` - The measurement string
/// * `flags` - Parser options for the unit part
pub fn parse_measurement(text: &str, flags: MatchFlags) -> Measurement {
    match measurement_from_string(text, flags) {
        Ok(m) => m,
        Err(e) => {
            log::debug!("{}", e);
            Measurement::new(f64::NAN, ERROR)
        }
    }
}

/// Parse a measurement string, reporting failure as an error.
///
/// # Errors
/// * [`UnitsError::NumericOverflow`] if a numeric literal does not fit in an `f64`
/// * [`UnitsError::InvalidUnit`] if the unit part is not recognized
pub fn try_parse_measurement(text: &str, flags: MatchFlags) -> Result<Measurement> {
    let m = measurement_from_string(text, flags)?;
    if m.units.is_error() {
        return Err(UnitsError::InvalidUnit(text.to_string()));
    }
    Ok(m)
}

fn measurement_from_string(text: &str, flags: MatchFlags) -> Result<Measurement> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Measurement::default());
    }

    // $9.99, $ 9.99, $12/hr
    if let Some(amount) = text.strip_prefix('$') {
        let amount = amount.trim_start();
        if let Some((value, used)) = leading_number(amount)? {
            let rest = amount[used..].trim_start();
            if rest.is_empty() {
                return Ok(Measurement::new(value, CURRENCY));
            }
            let (rest, per) = match rest.strip_prefix('/') {
                Some(denominator) => (denominator.trim_start(), true),
                None => (rest, false),
            };
            let unit = unit_from_string(rest, flags)?;
            let unit = match (unit.is_error(), per) {
                (true, _) => ERROR,
                (false, true) => CURRENCY / unit,
                (false, false) => CURRENCY * unit,
            };
            return Ok(Measurement::new(value, unit));
        }
    }

    let Some((value, used)) = leading_number(text)? else {
        return Ok(Measurement::new(1.0, unit_from_string(text, flags)?));
    };
    let rest = text[used..].trim_start();
    if rest.is_empty() {
        return Ok(Measurement::new(value, ONE));
    }
    if let Some(feet_inches) = feet_and_inches(value, rest)? {
        return Ok(feet_inches);
    }

    let unit = unit_from_string(rest, flags)?;
    if !unit.is_error() {
        return Ok(Measurement::new(value, unit));
    }
    // 10^3 m and similar: the number is part of the unit expression
    if rest.starts_with('^') {
        let whole = unit_from_string(text, flags)?;
        if !whole.is_error() {
            return Ok(Measurement::new(1.0, whole));
        }
    }
    Ok(Measurement::new(value, ERROR))
}

/// `5'7"` style lengths: `value` feet plus the inches in `rest`.
fn feet_and_inches(feet: f64, rest: &str) -> Result<Option<Measurement>> {
    let Some(inches) = rest.strip_prefix('\'') else {
        return Ok(None);
    };
    let inches = inches.trim();
    let Some(inches) = inches.strip_suffix('"').or_else(|| inches.strip_suffix("''")) else {
        return Ok(None);
    };
    let inches = inches.trim_end();
    match leading_number(inches)? {
        Some((value, used)) if used == inches.len() => {
            Ok(Some(Measurement::new(feet, FT) + Measurement::new(value, IN)))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use units_core::si::{J, K, KG, KM, M, MIN, N, S};
    use units_core::special::DEFUNIT;
    use units_core::units::temperature::{DEG_C, DEG_R};

    fn pm(s: &str) -> Measurement {
        parse_measurement(s, MatchFlags::DEFAULT)
    }

    #[test]
    fn value_and_unit() {
        let m = pm("45 m");
        assert_eq!(m.value(), 45.0);
        assert_eq!(m.units(), M);
        let m = pm("23.7 m/s");
        assert_eq!(m.value(), 23.7);
        assert_eq!(m.units(), M.divide(S));
    }

    #[test]
    fn currency_shorthand() {
        let m = pm("$9.99");
        assert_eq!(m.value(), 9.99);
        assert_eq!(m.units(), CURRENCY);
        assert_eq!(pm("$ 9.99").units(), CURRENCY);
        assert_eq!(pm("$12/min").units(), CURRENCY.divide(MIN));
    }

    #[test]
    fn bare_numbers_and_bare_units() {
        assert_eq!(pm("12.5").units(), ONE);
        assert_eq!(pm("12.5").value(), 12.5);
        let m = pm("kg");
        assert_eq!(m.value(), 1.0);
        assert_eq!(m.units(), KG);
    }

    #[test]
    fn invalid_units_are_reported() {
        assert!(pm("345 blarg").units().is_error());
        assert!(!pm("345 blarg").is_valid());
        assert!(matches!(
            try_parse_measurement("345 blarg", MatchFlags::DEFAULT),
            Err(UnitsError::InvalidUnit(_))
        ));
        assert!(matches!(
            try_parse_measurement("1e999 m", MatchFlags::DEFAULT),
            Err(UnitsError::NumericOverflow(_))
        ));
        assert!(pm("1e999 m").value().is_nan());
    }

    #[test]
    fn feet_and_inches_add_up() {
        let m = pm("5'7\"");
        assert_eq!(m.units(), FT);
        assert_relative_eq!(m.value(), 5.0 + 7.0 / 12.0, max_relative = 1e-12);
    }

    #[test]
    fn operators_in_the_unit_part() {
        let m = pm("99.9 N * m");
        assert_eq!(m.value(), 99.9);
        assert_eq!(m.units(), N.multiply(M));
        assert_eq!(m.to_string(), "99.9 J");
    }

    #[test]
    fn display() {
        assert_eq!(pm("45 m").to_string(), "45 m");
        assert_eq!(Measurement::new(3.0, ONE).to_string(), "3");
        assert_eq!(Measurement::new(1.0 / 3.0, KG).to_string(), "0.333333333333 kg");
    }

    #[test]
    fn conversion() {
        assert_relative_eq!(convert(1.0, KM, M), 1000.0);
        assert_relative_eq!(convert(1.0, FT, IN), 12.0, max_relative = 1e-12);
        assert!(convert(1.0, M, S).is_nan());
        assert_eq!(convert(7.0, DEFUNIT, M), 7.0);
        let gold = crate::commodity::encode("gold");
        assert!(convert(1.0, KG.with_commodity(gold), KG).is_nan());
    }

    #[test]
    fn temperature_offsets() {
        assert_relative_eq!(convert(100.0, DEG_C, DEG_F), 212.0, max_relative = 1e-12);
        assert_relative_eq!(convert(32.0, DEG_F, DEG_C), 0.0, epsilon = 1e-9);
        assert_relative_eq!(convert(0.0, DEG_C, K), 273.15, max_relative = 1e-12);
        assert_relative_eq!(convert(0.0, K, DEG_F), -459.67, max_relative = 1e-9);
        assert_relative_eq!(convert(491.67, DEG_R, DEG_C), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn arithmetic() {
        let a = Measurement::new(2.0, M);
        let b = Measurement::new(50.0, M.scaled(0.01));
        let sum = a + b;
        assert_eq!(sum.units(), M);
        assert_relative_eq!(sum.value(), 2.5);
        assert_eq!((a * Measurement::new(3.0, N)).units(), J);
        assert_eq!((a / 2.0).value(), 1.0);
        assert_eq!((-a).value(), -2.0);
        assert_eq!(Measurement::new(1.0, KM), Measurement::new(1000.0, M));
        assert_eq!(Measurement::new(1.0, KM).convert_to(M).value(), 1000.0);
        assert_eq!(Measurement::new(2.0, KM).convert_to_base(), Measurement::new(2000.0, M));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_value_and_unit() {
        let m = Measurement::new(9.81, M.divide(S.pow(2)));
        let json = serde_json::to_string(&m).unwrap();
        let back: Measurement = serde_json::from_str(&json).unwrap();
        assert_eq!(back.value(), 9.81);
        assert_eq!(back.units(), m.units());
    }
}
