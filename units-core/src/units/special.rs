//! Degenerate values, marker units and dimensionless ratios.
//!
//! These are not physical units but show up constantly when parsing real-world strings: the error sentinel, the
//! "default" marker, per-unit flags, percentages and the √Hz family that needs the `e_flag`.

use super::si::{A, CURRENCY, HZ, M, MW, S, V, W};
use crate::{PreciseUnit, UnitData};

/// The error sentinel: empty vector with `flag` and `e_flag` set.
pub const ERROR: PreciseUnit = PreciseUnit::from_base(UnitData::error());
/// A NaN multiplier; also reported by `is_error`.
pub const INVALID: PreciseUnit = PreciseUnit::new(UnitData::error(), f64::NAN);
/// Dimensionless NaN.
pub const NAN: PreciseUnit = PreciseUnit::new(UnitData::NONE, f64::NAN);
/// Dimensionless infinity.
pub const INFINITE: PreciseUnit = PreciseUnit::new(UnitData::NONE, f64::INFINITY);
/// Dimensionless ratio (`1`).
pub const RATIO: PreciseUnit = PreciseUnit::ONE;
/// The "default unit" marker (empty vector with the generic flag).
pub const DEFUNIT: PreciseUnit = PreciseUnit::from_base(UnitData::NONE.with_flag(true));
/// A bare generic flag.
pub const FLAG: PreciseUnit = DEFUNIT;
/// A bare e_flag.
pub const EFLAG: PreciseUnit = PreciseUnit::from_base(UnitData::NONE.with_e_flag(true));
/// Per-unit marker.
pub const PU: PreciseUnit = PreciseUnit::from_base(UnitData::NONE.with_per_unit(true));

/// 1/100
pub const PERCENT: PreciseUnit = PreciseUnit::ONE.scaled(0.01);
/// 1e-6
pub const PPM: PreciseUnit = PreciseUnit::ONE.scaled(1e-6);
/// 1e-9
pub const PPB: PreciseUnit = PreciseUnit::ONE.scaled(1e-9);

/// Per-unit megawatt.
pub const PU_MW: PreciseUnit = PU.multiply(MW);
/// Per-unit volt.
pub const PU_V: PreciseUnit = PU.multiply(V);
/// Per-unit ampere.
pub const PU_A: PreciseUnit = PU.multiply(A);
/// Per-unit hertz.
pub const PU_HZ: PreciseUnit = PU.multiply(HZ);
/// Per-unit watt.
pub const PU_W: PreciseUnit = PU.multiply(W);

/// One million currency units.
pub const MEGABUCK: PreciseUnit = CURRENCY.scaled(1e6);
/// One billion currency units.
pub const GIGABUCK: PreciseUnit = CURRENCY.scaled(1e9);

/// Square root of hertz; the second exponent carries the `e_flag` so that squaring recovers `Hz`.
pub const ROOT_HERTZ: PreciseUnit = PreciseUnit::from_base(UnitData::new(
    0, 0, -1, 0, 0, 0, 0, 0, 0, 0, false, false, true, false,
));
/// Amplitude spectral density, `m/s^2/√Hz`.
pub const ASD: PreciseUnit = M.divide(S.pow(2)).divide(ROOT_HERTZ);
