//! The two unit value types: [`Unit`] (`f32` multiplier) and [`PreciseUnit`] (`f64` multiplier plus commodity).

use crate::dimension::UnitData;
use core::hash::{Hash, Hasher};
use core::ops::{Div, Mul};

// ─────────────────────────────────────────────────────────────────────────────
// Rounding helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Round an `f32` to 6 significant decimal digits of its binary mantissa.
///
/// Two multipliers that differ only by accumulated float drift round to the same value.
#[inline]
pub fn cround(val: f32) -> f32 {
    let (f, exp) = libm::frexpf(val);
    let f = libm::roundf(f * 1e6);
    libm::ldexpf(f * 1e-6, exp)
}

/// Round an `f64` to 12 significant decimal digits of its binary mantissa.
#[inline]
pub fn cround_precise(val: f64) -> f64 {
    let (f, exp) = libm::frexp(val);
    let f = libm::round(f * 1e12);
    libm::ldexp(f * 1e-12, exp)
}

/// Integer power by repeated multiplication; negative powers give the reciprocal.
pub const fn power_const(val: f64, power: i32) -> f64 {
    let mut result = 1.0;
    let mut n = if power < 0 { -power } else { power };
    while n > 0 {
        result *= val;
        n -= 1;
    }
    if power < 0 {
        1.0 / result
    } else {
        result
    }
}

const fn power_const_f32(val: f32, power: i32) -> f32 {
    let mut result = 1.0f32;
    let mut n = if power < 0 { -power } else { power };
    while n > 0 {
        result *= val;
        n -= 1;
    }
    if power < 0 {
        1.0 / result
    } else {
        result
    }
}

#[inline]
fn hash_bits32(v: f32) -> u32 {
    // 0.0 and -0.0 compare equal and must hash alike
    if v == 0.0 {
        0
    } else {
        v.to_bits()
    }
}

#[inline]
fn hash_bits64(v: f64) -> u64 {
    if v == 0.0 {
        0
    } else {
        v.to_bits()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit
// ─────────────────────────────────────────────────────────────────────────────

/// A dimension vector with a single-precision multiplier.
///
/// Equality is exact on the dimension vector and approximate (6 digits, see [`cround`]) on the multiplier.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    base: UnitData,
    multiplier: f32,
}

impl Unit {
    /// The dimensionless unit `1`.
    pub const ONE: Self = Self::from_base(UnitData::NONE);

    /// Construct from a dimension vector and a multiplier (narrowed to `f32`).
    pub const fn new(base: UnitData, multiplier: f64) -> Self {
        Self {
            base,
            multiplier: multiplier as f32,
        }
    }

    /// Construct a unit with multiplier `1`.
    pub const fn from_base(base: UnitData) -> Self {
        Self { base, multiplier: 1.0 }
    }

    /// The multiplier, widened to `f64`.
    pub const fn multiplier(self) -> f64 {
        self.multiplier as f64
    }

    /// The raw `f32` multiplier.
    pub const fn multiplier_f32(self) -> f32 {
        self.multiplier
    }

    /// The dimension vector.
    pub const fn base_units(self) -> UnitData {
        self.base
    }

    /// Rounded multiplier used for comparisons.
    pub fn cround(self) -> f32 {
        cround(self.multiplier)
    }

    /// Product of two units.
    pub const fn multiply(self, other: Self) -> Self {
        Self::new(self.base.multiply(other.base), self.multiplier() * other.multiplier())
    }

    /// Quotient of two units.
    pub const fn divide(self, other: Self) -> Self {
        Self::new(self.base.divide(other.base), self.multiplier() / other.multiplier())
    }

    /// `1 / self`.
    pub const fn inv(self) -> Self {
        Self::new(self.base.inv(), 1.0 / self.multiplier())
    }

    /// Integer power.
    pub const fn pow(self, power: i32) -> Self {
        Self {
            base: self.base.pow(power),
            multiplier: power_const_f32(self.multiplier, power),
        }
    }

    /// Copy with the multiplier scaled by `factor`.
    pub const fn scaled(self, factor: f64) -> Self {
        Self::new(self.base, factor * self.multiplier())
    }

    /// Integer root; invalid roots yield a unit whose dimension vector is the error pattern.
    pub fn root(self, power: i32) -> Self {
        if power == 0 {
            return Self::ONE;
        }
        if self.multiplier == 1.0 {
            return Self::from_base(self.base.root(power));
        }
        let bunits = self.base.root(power);
        let m = self.multiplier;
        match power {
            1 => self,
            -1 => self.inv(),
            2 => Self::new(bunits, libm::sqrtf(m) as f64),
            -2 => Self::new(bunits, 1.0 / libm::sqrtf(m) as f64),
            3 => Self::new(bunits, libm::cbrtf(m) as f64),
            -3 => Self::new(bunits, 1.0 / libm::cbrtf(m) as f64),
            4 => Self::new(bunits, libm::sqrtf(libm::sqrtf(m)) as f64),
            -4 => Self::new(bunits, 1.0 / libm::sqrtf(libm::sqrtf(m)) as f64),
            _ => Self::new(bunits, libm::pow(m as f64, 1.0 / power as f64)),
        }
    }

    /// `true` for a NaN multiplier or the reserved error dimension pattern.
    pub fn is_error(self) -> bool {
        self.multiplier.is_nan() || (self.base.has_e_flag() && self.base.is_flag() && self.base.empty())
    }

    /// Bit-exact comparison of vector and multiplier.
    pub fn is_exactly_the_same(self, other: Self) -> bool {
        self.base == other.base && self.multiplier == other.multiplier
    }

    /// Same exponents for all ten dimensions.
    pub const fn has_same_base(self, other: Self) -> bool {
        self.base.has_same_base(other.base)
    }

    /// Same exponents ignoring the counting dimensions.
    pub const fn equivalent_non_counting(self, other: Self) -> bool {
        self.base.equivalent_non_counting(other.base)
    }

    /// `true` if a value in `self` can be expressed in `other`.
    pub const fn is_convertible(self, other: Self) -> bool {
        self.base.equivalent_non_counting(other.base)
    }

    /// Flagged pure-kelvin unit (offset temperature scale).
    pub const fn is_temperature(self) -> bool {
        self.base.is_temperature()
    }

    /// Empty vector with the generic flag set.
    pub const fn is_default(self) -> bool {
        self.base.empty() && self.base.is_flag()
    }

    /// Per-unit flag.
    pub const fn is_per_unit(self) -> bool {
        self.base.is_per_unit()
    }

    /// Equation flag.
    pub const fn is_equation(self) -> bool {
        self.base.is_equation()
    }
}

impl Default for Unit {
    fn default() -> Self {
        Self::ONE
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base && cround(self.multiplier) == cround(other.multiplier)
    }
}

impl Eq for Unit {}

impl Hash for Unit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.base.bits() ^ hash_bits32(self.cround())).hash(state);
    }
}

impl Mul for Unit {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

impl Div for Unit {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        self.divide(rhs)
    }
}

impl From<UnitData> for Unit {
    fn from(base: UnitData) -> Self {
        Self::from_base(base)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// PreciseUnit
// ─────────────────────────────────────────────────────────────────────────────

/// A dimension vector with a double-precision multiplier and a commodity code.
///
/// Commodity `0` means "no commodity". A code with the high bit set is the bitwise complement of a plain code and
/// marks the commodity as appearing in a denominator.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreciseUnit {
    base: UnitData,
    commodity: u32,
    multiplier: f64,
}

/// Product rule for commodity codes.
const fn commodity_mul(a: u32, b: u32) -> u32 {
    if a == 0 {
        b
    } else if b == 0 {
        a
    } else {
        a & b
    }
}

/// Quotient rule for commodity codes.
const fn commodity_div(a: u32, b: u32) -> u32 {
    if a == 0 {
        if b == 0 {
            0
        } else {
            !b
        }
    } else if b == 0 {
        a
    } else {
        a & !b
    }
}

impl PreciseUnit {
    /// The dimensionless unit `1`.
    pub const ONE: Self = Self::from_base(UnitData::NONE);

    /// Construct from a dimension vector and a multiplier.
    pub const fn new(base: UnitData, multiplier: f64) -> Self {
        Self {
            base,
            commodity: 0,
            multiplier,
        }
    }

    /// Construct from a dimension vector, a commodity code and a multiplier.
    pub const fn with_all(base: UnitData, commodity: u32, multiplier: f64) -> Self {
        Self {
            base,
            commodity,
            multiplier,
        }
    }

    /// Construct a unit with multiplier `1` and no commodity.
    pub const fn from_base(base: UnitData) -> Self {
        Self::new(base, 1.0)
    }

    /// Widen a [`Unit`].
    pub const fn from_unit(unit: Unit) -> Self {
        Self::new(unit.base_units(), unit.multiplier())
    }

    /// The multiplier.
    pub const fn multiplier(self) -> f64 {
        self.multiplier
    }

    /// The dimension vector.
    pub const fn base_units(self) -> UnitData {
        self.base
    }

    /// The commodity code (`0` for none).
    pub const fn commodity(self) -> u32 {
        self.commodity
    }

    /// `true` if a commodity code is attached.
    pub const fn has_commodity(self) -> bool {
        self.commodity != 0
    }

    /// Copy with the commodity replaced.
    pub const fn with_commodity(self, commodity: u32) -> Self {
        Self { commodity, ..self }
    }

    /// Copy with the given dimension vector, keeping multiplier and commodity.
    pub const fn with_base(self, base: UnitData) -> Self {
        Self { base, ..self }
    }

    /// Rounded multiplier used for comparisons.
    pub fn cround(self) -> f64 {
        cround_precise(self.multiplier)
    }

    /// Product of two units.
    pub const fn multiply(self, other: Self) -> Self {
        Self {
            base: self.base.multiply(other.base),
            commodity: commodity_mul(self.commodity, other.commodity),
            multiplier: self.multiplier * other.multiplier,
        }
    }

    /// Quotient of two units.
    pub const fn divide(self, other: Self) -> Self {
        Self {
            base: self.base.divide(other.base),
            commodity: commodity_div(self.commodity, other.commodity),
            multiplier: self.multiplier / other.multiplier,
        }
    }

    /// `1 / self`; a commodity moves to the denominator.
    pub const fn inv(self) -> Self {
        Self {
            base: self.base.inv(),
            commodity: if self.commodity == 0 { 0 } else { !self.commodity },
            multiplier: 1.0 / self.multiplier,
        }
    }

    /// Integer power.
    pub const fn pow(self, power: i32) -> Self {
        Self {
            base: self.base.pow(power),
            commodity: self.commodity,
            multiplier: power_const(self.multiplier, power),
        }
    }

    /// Copy with the multiplier scaled by `factor`.
    pub const fn scaled(self, factor: f64) -> Self {
        Self {
            multiplier: factor * self.multiplier,
            ..self
        }
    }

    /// Integer root; the commodity is dropped and invalid roots yield the error dimension pattern.
    pub fn root(self, power: i32) -> Self {
        if power == 0 {
            return Self::ONE;
        }
        if self.multiplier == 1.0 {
            return Self::from_base(self.base.root(power));
        }
        let bunits = self.base.root(power);
        let m = self.multiplier;
        match power {
            1 => self,
            -1 => self.inv(),
            2 => Self::new(bunits, libm::sqrt(m)),
            -2 => Self::new(bunits, 1.0 / libm::sqrt(m)),
            3 => Self::new(bunits, libm::cbrt(m)),
            -3 => Self::new(bunits, 1.0 / libm::cbrt(m)),
            4 => Self::new(bunits, libm::sqrt(libm::sqrt(m))),
            -4 => Self::new(bunits, 1.0 / libm::sqrt(libm::sqrt(m))),
            _ => Self::new(bunits, libm::pow(m, 1.0 / power as f64)),
        }
    }

    /// `true` for a NaN multiplier or the reserved error dimension pattern.
    pub fn is_error(self) -> bool {
        self.multiplier.is_nan() || (self.base.has_e_flag() && self.base.is_flag() && self.base.empty())
    }

    /// Bit-exact comparison of vector, commodity and multiplier.
    pub fn is_exactly_the_same(self, other: Self) -> bool {
        self.base == other.base && self.commodity == other.commodity && self.multiplier == other.multiplier
    }

    /// Same exponents for all ten dimensions.
    pub const fn has_same_base(self, other: Self) -> bool {
        self.base.has_same_base(other.base)
    }

    /// Same exponents ignoring the counting dimensions.
    pub const fn equivalent_non_counting(self, other: Self) -> bool {
        self.base.equivalent_non_counting(other.base)
    }

    /// `true` if a value in `self` can be expressed in `other` (commodities must match).
    pub const fn is_convertible(self, other: Self) -> bool {
        self.commodity == other.commodity && self.base.equivalent_non_counting(other.base)
    }

    /// Flagged pure-kelvin unit (offset temperature scale).
    pub const fn is_temperature(self) -> bool {
        self.base.is_temperature()
    }

    /// Empty vector with the generic flag set.
    pub const fn is_default(self) -> bool {
        self.base.empty() && self.base.is_flag()
    }

    /// Per-unit flag.
    pub const fn is_per_unit(self) -> bool {
        self.base.is_per_unit()
    }

    /// Equation flag.
    pub const fn is_equation(self) -> bool {
        self.base.is_equation()
    }

    /// Clear the four dimension-vector flags in place.
    pub fn clear_flags(&mut self) {
        self.base.clear_flags();
    }
}

impl Default for PreciseUnit {
    fn default() -> Self {
        Self::ONE
    }
}

impl PartialEq for PreciseUnit {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
            && self.commodity == other.commodity
            && cround_precise(self.multiplier) == cround_precise(other.multiplier)
    }
}

impl Eq for PreciseUnit {}

impl Hash for PreciseUnit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (u64::from(self.base.bits()) ^ hash_bits64(self.cround())).hash(state);
    }
}

impl PartialEq<Unit> for PreciseUnit {
    fn eq(&self, other: &Unit) -> bool {
        self.base == other.base_units() && cround(self.multiplier as f32) == cround(other.multiplier_f32())
    }
}

impl PartialEq<PreciseUnit> for Unit {
    fn eq(&self, other: &PreciseUnit) -> bool {
        other == self
    }
}

impl Mul for PreciseUnit {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

impl Div for PreciseUnit {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        self.divide(rhs)
    }
}

impl Mul<Unit> for PreciseUnit {
    type Output = Self;
    fn mul(self, rhs: Unit) -> Self {
        Self {
            base: self.base.multiply(rhs.base_units()),
            commodity: self.commodity,
            multiplier: self.multiplier * rhs.multiplier(),
        }
    }
}

impl Div<Unit> for PreciseUnit {
    type Output = Self;
    fn div(self, rhs: Unit) -> Self {
        Self {
            base: self.base.divide(rhs.base_units()),
            commodity: self.commodity,
            multiplier: self.multiplier / rhs.multiplier(),
        }
    }
}

impl From<Unit> for PreciseUnit {
    fn from(unit: Unit) -> Self {
        Self::from_unit(unit)
    }
}

impl From<UnitData> for PreciseUnit {
    fn from(base: UnitData) -> Self {
        Self::from_base(base)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Narrowing
// ─────────────────────────────────────────────────────────────────────────────

/// Narrow a [`PreciseUnit`] to a [`Unit`]; the commodity is dropped and the multiplier rounded to `f32`.
pub const fn unit_cast(val: PreciseUnit) -> Unit {
    Unit::new(val.base_units(), val.multiplier())
}

/// `true` if [`unit_cast`] keeps the multiplier exactly.
pub fn is_unit_cast_lossless(val: PreciseUnit) -> bool {
    val.multiplier() == (val.multiplier() as f32) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    const M: UnitData = UnitData::new(1, 0, 0, 0, 0, 0, 0, 0, 0, 0, false, false, false, false);
    const S: UnitData = UnitData::new(0, 0, 1, 0, 0, 0, 0, 0, 0, 0, false, false, false, false);

    #[test]
    fn cround_absorbs_float_drift() {
        let a = 0.1f32 + 0.2f32;
        assert_eq!(cround(a), cround(0.3f32));
        assert_ne!(cround(1.0), cround(1.001));
        assert_eq!(cround_precise(0.1 + 0.2), cround_precise(0.3));
    }

    #[test]
    fn unit_equality_is_approximate_on_the_multiplier() {
        let km = Unit::new(M, 1000.0);
        let roundabout = Unit::new(M, 3.0).multiply(Unit::new(UnitData::NONE, 1000.0 / 3.0));
        assert_eq!(km, roundabout);
        assert_ne!(km, Unit::new(S, 1000.0));
    }

    #[test]
    fn unit_arithmetic() {
        let m = Unit::from_base(M);
        let s = Unit::from_base(S);
        let v = m / s;
        assert_eq!(v.base_units().meter(), 1);
        assert_eq!(v.base_units().second(), -1);
        assert_eq!((v * s), m);
        let km = m.scaled(1000.0);
        assert_relative_eq!(km.inv().multiplier(), 0.001, max_relative = 1e-6);
        assert_relative_eq!(km.pow(2).multiplier(), 1e6, max_relative = 1e-6);
        assert_relative_eq!(km.pow(-1).multiplier(), 1e-3, max_relative = 1e-6);
    }

    #[test]
    fn roots() {
        let km2 = Unit::new(M, 1000.0).pow(2);
        assert_eq!(km2.root(2), Unit::new(M, 1000.0));
        assert_eq!(km2.root(-2), Unit::new(M, 1000.0).inv());
        assert_eq!(Unit::new(M.pow(3), 8.0).root(3), Unit::new(M, 2.0));
        assert_eq!(Unit::new(M.pow(4), 16.0).root(4), Unit::new(M, 2.0));
        assert_eq!(Unit::new(UnitData::NONE, 32.0).root(5), Unit::new(UnitData::NONE, 2.0));
        assert_eq!(Unit::new(M, 3.0).root(0), Unit::ONE);
        assert!(Unit::from_base(M).root(2).is_error());
    }

    #[test]
    fn negative_roots_of_scaled_units() {
        let km = PreciseUnit::new(M, 1000.0);
        let back = km.pow(-2).root(-2);
        assert_eq!(back.base_units().meter(), 1);
        assert_relative_eq!(back.multiplier(), 1000.0, max_relative = 1e-12);
        assert_eq!(km.pow(2).root(-2), km.inv());
        assert_eq!(PreciseUnit::new(M.pow(3), 8.0).root(-3), PreciseUnit::new(M.inv(), 0.5));
        assert_eq!(PreciseUnit::new(M.pow(4), 16.0).root(-4), PreciseUnit::new(M.inv(), 0.5));
        assert_eq!(Unit::new(M, 1000.0).pow(-2).root(-2), Unit::new(M, 1000.0));
        assert_eq!(Unit::new(M.pow(3), 8.0).root(-3), Unit::new(M.inv(), 0.5));
        // the unscaled shortcut agrees with the general path
        assert_eq!(
            PreciseUnit::from_base(M).pow(-2).root(-2).base_units(),
            PreciseUnit::new(M, 2.0).pow(-2).root(-2).base_units()
        );
    }

    #[test]
    fn error_detection() {
        assert!(Unit::new(M, f64::NAN).is_error());
        assert!(Unit::from_base(UnitData::error()).is_error());
        assert!(!Unit::ONE.is_error());
        assert!(PreciseUnit::from_base(UnitData::error()).is_error());
    }

    #[test]
    fn commodity_algebra() {
        let gold = PreciseUnit::from_base(M).with_commodity(0x0000_0F00);
        let plain = PreciseUnit::from_base(S);
        assert_eq!((gold * plain).commodity(), 0x0000_0F00);
        assert_eq!((plain * gold).commodity(), 0x0000_0F00);
        assert_eq!((plain / gold).commodity(), !0x0000_0F00u32);
        assert_eq!((gold / plain).commodity(), 0x0000_0F00);
        assert_eq!(gold.inv().commodity(), !0x0000_0F00u32);
        assert_eq!(gold.inv().inv().commodity(), 0x0000_0F00);
        assert_eq!(plain.inv().commodity(), 0);
        assert_eq!((gold * Unit::from_base(S)).commodity(), 0x0000_0F00);
        assert_ne!(gold, PreciseUnit::from_base(M));
    }

    #[test]
    fn precise_and_single_cross_compare() {
        let p = PreciseUnit::new(M, 0.3048);
        let u = unit_cast(p);
        assert_eq!(p, u);
        assert_eq!(u, p);
        assert!(!is_unit_cast_lossless(p));
        assert!(is_unit_cast_lossless(PreciseUnit::new(M, 0.5)));
    }

    #[test]
    fn hash_agrees_with_equality() {
        use std::collections::hash_map::DefaultHasher;
        fn h<T: Hash>(t: &T) -> u64 {
            let mut s = DefaultHasher::new();
            t.hash(&mut s);
            s.finish()
        }
        let a = Unit::new(M, 0.1 + 0.2);
        let b = Unit::new(M, 0.3);
        assert_eq!(a, b);
        assert_eq!(h(&a), h(&b));
        assert_eq!(h(&PreciseUnit::new(M, 0.0)), h(&PreciseUnit::new(M, -0.0)));
    }

    #[test]
    fn power_const_handles_negative_exponents() {
        assert_relative_eq!(power_const(10.0, 3), 1000.0);
        assert_relative_eq!(power_const(10.0, -2), 0.01);
        assert_relative_eq!(power_const(10.0, 0), 1.0);
    }

    fn rootable_vector() -> impl Strategy<Value = UnitData> {
        (-1i32..=1, -1i32..=1).prop_map(|(m, s)| UnitData::new(m, 0, s, 0, 0, 0, 0, 0, 0, 0, false, false, false, false))
    }

    fn nonzero_power() -> impl Strategy<Value = i32> {
        prop_oneof![-4i32..=-1, 1i32..=4]
    }

    proptest! {
        #[test]
        fn precise_root_undoes_pow(
            base in rootable_vector(),
            mult in prop::sample::select(vec![0.5f64, 2.0, 3.0, 10.0, 1000.0, 0.3048]),
            n in nonzero_power(),
        ) {
            let unit = PreciseUnit::new(base, mult);
            let back = unit.pow(n).root(n);
            prop_assert_eq!(back.base_units(), base);
            prop_assert!((back.multiplier() - mult).abs() <= 1e-12 * mult);
        }

        #[test]
        fn single_root_undoes_pow(
            base in rootable_vector(),
            mult in prop::sample::select(vec![0.5f64, 2.0, 3.0, 10.0, 1000.0, 0.3048]),
            n in nonzero_power(),
        ) {
            let unit = Unit::new(base, mult);
            let back = unit.pow(n).root(n);
            prop_assert_eq!(back.base_units(), base);
            prop_assert!((back.multiplier() - mult).abs() <= 1e-5 * mult);
        }
    }
}
