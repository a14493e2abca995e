//! The packed dimension vector.
//!
//! [`UnitData`] stores the exponents of the ten base dimensions plus four marker flags in a single `u32`.
//! The layout (least significant bit first) is fixed:
//!
//! | field      | bits | range    |
//! |------------|------|----------|
//! | meter      | 4    | -8 ..= 7 |
//! | second     | 4    | -8 ..= 7 |
//! | kilogram   | 3    | -4 ..= 3 |
//! | ampere     | 3    | -4 ..= 3 |
//! | candela    | 2    | -2 ..= 1 |
//! | kelvin     | 3    | -4 ..= 3 |
//! | mole       | 2    | -2 ..= 1 |
//! | radian     | 3    | -4 ..= 3 |
//! | currency   | 2    | -2 ..= 1 |
//! | count      | 2    | -2 ..= 1 |
//! | per_unit   | 1    | flag     |
//! | flag       | 1    | flag     |
//! | e_flag     | 1    | flag     |
//! | equation   | 1    | flag     |
//!
//! Exponent arithmetic is performed modulo the width of each field: composing two vectors whose exponent sum leaves
//! the representable range wraps around in two's complement. This is a deliberate property of the fixed 32-bit
//! layout and is relied upon by the custom-unit encodings in [`crate::custom`].

use core::fmt;
use core::ops::{Div, Mul};

// ─────────────────────────────────────────────────────────────────────────────
// Field layout
// ─────────────────────────────────────────────────────────────────────────────

const METER: (u32, u32) = (0, 4);
const SECOND: (u32, u32) = (4, 4);
const KILOGRAM: (u32, u32) = (8, 3);
const AMPERE: (u32, u32) = (11, 3);
const CANDELA: (u32, u32) = (14, 2);
const KELVIN: (u32, u32) = (16, 3);
const MOLE: (u32, u32) = (19, 2);
const RADIAN: (u32, u32) = (21, 3);
const CURRENCY: (u32, u32) = (24, 2);
const COUNT: (u32, u32) = (26, 2);

const PER_UNIT_BIT: u32 = 1 << 28;
const FLAG_BIT: u32 = 1 << 29;
const E_FLAG_BIT: u32 = 1 << 30;
const EQUATION_BIT: u32 = 1 << 31;
const FLAG_MASK: u32 = PER_UNIT_BIT | FLAG_BIT | E_FLAG_BIT | EQUATION_BIT;

#[inline]
const fn field_mask(width: u32) -> u32 {
    (1 << width) - 1
}

/// Read a signed field.
#[inline]
const fn get(bits: u32, field: (u32, u32)) -> i32 {
    let (offset, width) = field;
    let raw = ((bits >> offset) & field_mask(width)) as i32;
    if raw >= 1 << (width - 1) {
        raw - (1 << width)
    } else {
        raw
    }
}

/// Pack a signed value into a field, wrapping to the field width.
#[inline]
const fn put(value: i32, field: (u32, u32)) -> u32 {
    let (offset, width) = field;
    ((value as u32) & field_mask(width)) << offset
}

#[inline]
const fn bit(set: bool, mask: u32) -> u32 {
    if set {
        mask
    } else {
        0
    }
}

/// Bit-packed exponents of the ten base dimensions and the four marker flags.
///
/// Two vectors compare equal when every field (exponents and flags) is identical; hashing is consistent with that.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UnitData(u32);

impl UnitData {
    /// The dimensionless vector with no flags.
    pub const NONE: Self = Self(0);

    /// Construct a vector from exponents and flags.
    ///
    /// Values outside a field's range wrap around (see the module documentation).
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        meter: i32,
        kilogram: i32,
        second: i32,
        ampere: i32,
        kelvin: i32,
        mole: i32,
        candela: i32,
        currency: i32,
        count: i32,
        radian: i32,
        per_unit: bool,
        flag: bool,
        e_flag: bool,
        equation: bool,
    ) -> Self {
        Self(
            put(meter, METER)
                | put(second, SECOND)
                | put(kilogram, KILOGRAM)
                | put(ampere, AMPERE)
                | put(candela, CANDELA)
                | put(kelvin, KELVIN)
                | put(mole, MOLE)
                | put(radian, RADIAN)
                | put(currency, CURRENCY)
                | put(count, COUNT)
                | bit(per_unit, PER_UNIT_BIT)
                | bit(flag, FLAG_BIT)
                | bit(e_flag, E_FLAG_BIT)
                | bit(equation, EQUATION_BIT),
        )
    }

    /// The reserved error pattern: no exponents, `flag` and `e_flag` set.
    pub const fn error() -> Self {
        Self(FLAG_BIT | E_FLAG_BIT)
    }

    /// Reinterpret raw bits as a vector.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// The raw 32-bit representation.
    pub const fn bits(self) -> u32 {
        self.0
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Field accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Exponent of the metre.
    pub const fn meter(self) -> i32 {
        get(self.0, METER)
    }
    /// Exponent of the kilogram.
    pub const fn kg(self) -> i32 {
        get(self.0, KILOGRAM)
    }
    /// Exponent of the second.
    pub const fn second(self) -> i32 {
        get(self.0, SECOND)
    }
    /// Exponent of the ampere.
    pub const fn ampere(self) -> i32 {
        get(self.0, AMPERE)
    }
    /// Exponent of the kelvin.
    pub const fn kelvin(self) -> i32 {
        get(self.0, KELVIN)
    }
    /// Exponent of the mole.
    pub const fn mole(self) -> i32 {
        get(self.0, MOLE)
    }
    /// Exponent of the candela.
    pub const fn candela(self) -> i32 {
        get(self.0, CANDELA)
    }
    /// Exponent of the currency dimension.
    pub const fn currency(self) -> i32 {
        get(self.0, CURRENCY)
    }
    /// Exponent of the count dimension.
    pub const fn count(self) -> i32 {
        get(self.0, COUNT)
    }
    /// Exponent of the radian.
    pub const fn radian(self) -> i32 {
        get(self.0, RADIAN)
    }

    /// Raw (unsigned) bits of the radian field.
    pub(crate) const fn radian_raw(self) -> u32 {
        (self.0 >> RADIAN.0) & field_mask(RADIAN.1)
    }
    /// Raw (unsigned) bits of the count field.
    pub(crate) const fn count_raw(self) -> u32 {
        (self.0 >> COUNT.0) & field_mask(COUNT.1)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Flags
    // ─────────────────────────────────────────────────────────────────────────

    /// `true` when the per-unit flag is set.
    pub const fn is_per_unit(self) -> bool {
        self.0 & PER_UNIT_BIT != 0
    }
    /// `true` when the generic marker flag is set.
    pub const fn is_flag(self) -> bool {
        self.0 & FLAG_BIT != 0
    }
    /// `true` when the square-root-of-time flag is set.
    pub const fn has_e_flag(self) -> bool {
        self.0 & E_FLAG_BIT != 0
    }
    /// `true` when the vector marks an equation unit.
    pub const fn is_equation(self) -> bool {
        self.0 & EQUATION_BIT != 0
    }

    /// A flagged pure-kelvin vector, the marker used by offset temperature scales (°C, °F).
    pub const fn is_temperature(self) -> bool {
        self.is_flag() && self.0 & !(PER_UNIT_BIT | FLAG_BIT | E_FLAG_BIT) == put(1, KELVIN)
    }

    /// Copy with all four flags cleared.
    pub const fn without_flags(self) -> Self {
        Self(self.0 & !FLAG_MASK)
    }

    /// Clear all four flags in place.
    pub fn clear_flags(&mut self) {
        self.0 &= !FLAG_MASK;
    }

    /// Copy with the per-unit flag set or cleared.
    pub const fn with_per_unit(self, set: bool) -> Self {
        Self((self.0 & !PER_UNIT_BIT) | bit(set, PER_UNIT_BIT))
    }

    /// Copy with the generic flag set or cleared.
    pub const fn with_flag(self, set: bool) -> Self {
        Self((self.0 & !FLAG_BIT) | bit(set, FLAG_BIT))
    }

    /// Copy with the e_flag set or cleared.
    pub const fn with_e_flag(self, set: bool) -> Self {
        Self((self.0 & !E_FLAG_BIT) | bit(set, E_FLAG_BIT))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Comparisons
    // ─────────────────────────────────────────────────────────────────────────

    /// Same exponents for all ten dimensions; flags are ignored.
    pub const fn has_same_base(self, other: Self) -> bool {
        self.without_flags().0 == other.without_flags().0
    }

    /// Same exponents ignoring the counting dimensions (mole, count, radian); flags are ignored.
    pub const fn equivalent_non_counting(self, other: Self) -> bool {
        const COUNTING: u32 = (field_mask(MOLE.1) << MOLE.0)
            | (field_mask(COUNT.1) << COUNT.0)
            | (field_mask(RADIAN.1) << RADIAN.0);
        (self.0 & !FLAG_MASK & !COUNTING) == (other.0 & !FLAG_MASK & !COUNTING)
    }

    /// No exponents and no equation flag (the other flags may be set).
    pub const fn empty(self) -> bool {
        self.0 & !(PER_UNIT_BIT | FLAG_BIT | E_FLAG_BIT) == 0
    }

    /// Sum of the absolute exponents of the ten dimensions.
    pub const fn order(self) -> i32 {
        self.meter().abs()
            + self.kg().abs()
            + self.second().abs()
            + self.ampere().abs()
            + self.kelvin().abs()
            + self.mole().abs()
            + self.candela().abs()
            + self.currency().abs()
            + self.count().abs()
            + self.radian().abs()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Algebra
    // ─────────────────────────────────────────────────────────────────────────

    /// Exponent-wise sum; flags are OR-ed.
    pub const fn multiply(self, other: Self) -> Self {
        Self::new(
            self.meter() + other.meter(),
            self.kg() + other.kg(),
            self.second() + other.second(),
            self.ampere() + other.ampere(),
            self.kelvin() + other.kelvin(),
            self.mole() + other.mole(),
            self.candela() + other.candela(),
            self.currency() + other.currency(),
            self.count() + other.count(),
            self.radian() + other.radian(),
            false,
            false,
            false,
            false,
        )
        .or_flags(self.0 | other.0)
    }

    /// Exponent-wise difference; flags are OR-ed.
    pub const fn divide(self, other: Self) -> Self {
        Self::new(
            self.meter() - other.meter(),
            self.kg() - other.kg(),
            self.second() - other.second(),
            self.ampere() - other.ampere(),
            self.kelvin() - other.kelvin(),
            self.mole() - other.mole(),
            self.candela() - other.candela(),
            self.currency() - other.currency(),
            self.count() - other.count(),
            self.radian() - other.radian(),
            false,
            false,
            false,
            false,
        )
        .or_flags(self.0 | other.0)
    }

    /// Negate every exponent, keeping the flags.
    pub const fn inv(self) -> Self {
        Self::NONE.divide(self.without_flags()).or_flags(self.0)
    }

    /// Raise to an integer power.
    ///
    /// When the e_flag is set and the second exponent is non-zero, the second exponent is corrected by `power / 2`
    /// (rounded toward zero) in the direction that undoes the square-root-of-time encoding, so that e.g. a √Hz unit
    /// squared yields hertz. `flag` and `e_flag` are cleared, `per_unit` and `equation` are kept.
    pub const fn pow(self, power: i32) -> Self {
        let second = self.second();
        let correction = if self.has_e_flag() && second != 0 {
            if second < 0 {
                power / 2
            } else {
                -(power / 2)
            }
        } else {
            0
        };
        Self::new(
            self.meter() * power,
            self.kg() * power,
            second * power + correction,
            self.ampere() * power,
            self.kelvin() * power,
            self.mole() * power,
            self.candela() * power,
            self.currency() * power,
            self.count() * power,
            self.radian() * power,
            self.is_per_unit(),
            false,
            false,
            self.is_equation(),
        )
    }

    /// `true` if [`UnitData::root`] with this power produces a valid vector.
    pub const fn has_valid_root(self, power: i32) -> bool {
        power != 0
            && self.meter() % power == 0
            && self.second() % power == 0
            && self.kg() % power == 0
            && self.ampere() % power == 0
            && self.kelvin() % power == 0
            && self.radian() % power == 0
            && self.candela() == 0
            && self.mole() == 0
            && self.currency() == 0
            && self.count() == 0
            && !self.is_equation()
            && !self.has_e_flag()
    }

    /// Integer root; returns [`UnitData::error`] when any exponent is not divisible or an incompatible flag is set.
    pub const fn root(self, power: i32) -> Self {
        if !self.has_valid_root(power) {
            return Self::error();
        }
        Self::new(
            self.meter() / power,
            self.kg() / power,
            self.second() / power,
            self.ampere() / power,
            self.kelvin() / power,
            0,
            0,
            0,
            0,
            self.radian() / power,
            self.is_per_unit(),
            false,
            false,
            false,
        )
    }

    #[inline]
    const fn or_flags(self, flags: u32) -> Self {
        Self(self.0 | (flags & FLAG_MASK))
    }
}

impl Default for UnitData {
    fn default() -> Self {
        Self::NONE
    }
}

impl Mul for UnitData {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

impl Div for UnitData {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        self.divide(rhs)
    }
}

impl fmt::Debug for UnitData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitData")
            .field("m", &self.meter())
            .field("kg", &self.kg())
            .field("s", &self.second())
            .field("A", &self.ampere())
            .field("K", &self.kelvin())
            .field("mol", &self.mole())
            .field("cd", &self.candela())
            .field("$", &self.currency())
            .field("count", &self.count())
            .field("rad", &self.radian())
            .field("per_unit", &self.is_per_unit())
            .field("flag", &self.is_flag())
            .field("e_flag", &self.has_e_flag())
            .field("equation", &self.is_equation())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const METER_D: UnitData = UnitData::new(1, 0, 0, 0, 0, 0, 0, 0, 0, 0, false, false, false, false);
    const SECOND_D: UnitData = UnitData::new(0, 0, 1, 0, 0, 0, 0, 0, 0, 0, false, false, false, false);
    const KG_D: UnitData = UnitData::new(0, 1, 0, 0, 0, 0, 0, 0, 0, 0, false, false, false, false);

    #[test]
    fn layout_is_32_bits() {
        assert_eq!(core::mem::size_of::<UnitData>(), 4);
    }

    #[test]
    fn accessors_round_trip_signed_values() {
        let d = UnitData::new(-8, 3, 7, -4, 2, -2, 1, -1, 1, -3, true, false, true, false);
        assert_eq!(d.meter(), -8);
        assert_eq!(d.kg(), 3);
        assert_eq!(d.second(), 7);
        assert_eq!(d.ampere(), -4);
        assert_eq!(d.kelvin(), 2);
        assert_eq!(d.mole(), -2);
        assert_eq!(d.candela(), 1);
        assert_eq!(d.currency(), -1);
        assert_eq!(d.count(), 1);
        assert_eq!(d.radian(), -3);
        assert!(d.is_per_unit());
        assert!(!d.is_flag());
        assert!(d.has_e_flag());
        assert!(!d.is_equation());
    }

    #[test]
    fn multiply_and_divide_combine_exponents() {
        let v = METER_D / SECOND_D;
        assert_eq!(v.meter(), 1);
        assert_eq!(v.second(), -1);
        let a = v / SECOND_D;
        assert_eq!(a.second(), -2);
        let n = KG_D * a;
        assert_eq!(n.kg(), 1);
        assert_eq!(n.meter(), 1);
        assert_eq!(n.second(), -2);
    }

    #[test]
    fn flags_are_or_combined() {
        let pu = UnitData::NONE.with_per_unit(true);
        let prod = METER_D * pu;
        assert!(prod.is_per_unit());
        assert_eq!(prod.meter(), 1);
        assert!((pu / METER_D).is_per_unit());
    }

    #[test]
    fn overflow_wraps() {
        let m7 = UnitData::new(7, 0, 0, 0, 0, 0, 0, 0, 0, 0, false, false, false, false);
        assert_eq!((m7 * METER_D).meter(), -8);
        let count = UnitData::new(0, 0, 0, 0, 0, 0, 0, 0, 1, 0, false, false, false, false);
        assert_eq!((count * count).count(), -2);
    }

    #[test]
    fn inverse_keeps_flags() {
        let d = METER_D.with_flag(true);
        let i = d.inv();
        assert_eq!(i.meter(), -1);
        assert!(i.is_flag());
    }

    #[test]
    fn pow_clears_marker_flags() {
        let d = METER_D.with_flag(true).with_per_unit(true);
        let p = d.pow(3);
        assert_eq!(p.meter(), 3);
        assert!(!p.is_flag());
        assert!(p.is_per_unit());
    }

    #[test]
    fn pow_recovers_root_hertz() {
        let root_hz = UnitData::new(0, 0, -1, 0, 0, 0, 0, 0, 0, 0, false, false, true, false);
        let hz = UnitData::new(0, 0, -1, 0, 0, 0, 0, 0, 0, 0, false, false, false, false);
        assert_eq!(root_hz.pow(2), hz);
        assert_eq!(root_hz.pow(4), hz.pow(2));
        assert!(!root_hz.pow(2).has_e_flag());
    }

    #[test]
    fn root_requires_divisible_exponents() {
        let m2 = METER_D.pow(2);
        assert_eq!(m2.root(2), METER_D);
        assert_eq!(METER_D.root(2), UnitData::error());
        let mol = UnitData::new(0, 0, 0, 0, 0, 1, 0, 0, 0, 0, false, false, false, false);
        assert_eq!(mol.pow(2).root(2), UnitData::error());
        assert_eq!(m2.with_e_flag(true).root(2), UnitData::error());
        assert_eq!(m2.root(-2), METER_D.inv());
    }

    #[test]
    fn temperature_and_empty() {
        let k = UnitData::new(0, 0, 0, 0, 1, 0, 0, 0, 0, 0, false, true, false, false);
        assert!(k.is_temperature());
        assert!(!k.with_flag(false).is_temperature());
        assert!(UnitData::error().empty());
        assert!(!UnitData::NONE.is_equation());
        assert!(UnitData::NONE.with_flag(true).empty());
    }

    #[test]
    fn base_comparisons_ignore_flags() {
        let rad = UnitData::new(0, 0, 0, 0, 0, 0, 0, 0, 0, 1, false, false, false, false);
        let hz = SECOND_D.inv();
        assert!((rad / SECOND_D).equivalent_non_counting(hz));
        assert!(!(rad / SECOND_D).has_same_base(hz));
        assert!(METER_D.with_flag(true).has_same_base(METER_D));
    }

    #[test]
    fn order_sums_absolute_exponents() {
        let d = METER_D.pow(2) * KG_D / SECOND_D.pow(3);
        assert_eq!(d.order(), 6);
    }

    fn small_vector() -> impl Strategy<Value = UnitData> {
        (-2i32..=2, -1i32..=1, -2i32..=2, -1i32..=1, -1i32..=1, 0i32..=0, 0i32..=0, 0i32..=0, 0i32..=0, -1i32..=1)
            .prop_map(|(m, kg, s, a, k, mol, cd, cur, cnt, rad)| {
                UnitData::new(m, kg, s, a, k, mol, cd, cur, cnt, rad, false, false, false, false)
            })
    }

    proptest! {
        #[test]
        fn multiply_is_commutative(a in small_vector(), b in small_vector()) {
            prop_assert_eq!(a * b, b * a);
        }

        #[test]
        fn multiply_is_associative(a in small_vector(), b in small_vector(), c in small_vector()) {
            prop_assert_eq!((a * b) * c, a * (b * c));
        }

        #[test]
        fn divide_undoes_multiply(a in small_vector(), b in small_vector()) {
            prop_assert_eq!((a * b) / b, a);
        }

        #[test]
        fn root_undoes_pow(a in small_vector(), n in prop_oneof![-2i32..=-1, 1i32..=2]) {
            prop_assert_eq!(a.pow(n).root(n), a);
        }
    }
}
