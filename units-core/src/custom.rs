//! Custom and equation unit encodings.
//!
//! Some unit standards reserve opaque "extension" slots that have no physical dimension. These are stored inside the
//! ordinary [`UnitData`] layout using bit patterns no physical unit produces:
//!
//! - **Custom units** (`CXUN[n]`, `n` in `0..64`): `ampere = -4`, `candela = -2`, `mole = ±1`, index bits 0..2 in
//!   the metre field and bits 3..5 in the second field. The inverted form is exactly [`UnitData::inv`] of the normal
//!   form (the marker fields are their own negation under wraparound), so `mole = -1` identifies an inverse.
//! - **Custom count units** (`CXCUN[n]`, `n` in `0..16`): the same marker with `count = ±1` and `mole = 0`, index
//!   bits 0..2 in the metre field and bit 3 in the second field.
//! - **Equation units** (`EQXUN[n]`, `n` in `0..32`): the `equation` flag, with the index stored in the raw bits of
//!   the radian field (low three bits) and the count field (high two bits).

use crate::dimension::UnitData;
use crate::unit::PreciseUnit;

const MARK_AMPERE: i32 = -4;
const MARK_CANDELA: i32 = -2;

/// Number of custom unit slots.
pub const CUSTOM_UNIT_SLOTS: u16 = 64;
/// Number of custom count unit slots.
pub const CUSTOM_COUNT_UNIT_SLOTS: u16 = 16;
/// Number of equation unit slots.
pub const EQUATION_UNIT_SLOTS: u16 = 32;

const fn has_marker(base: UnitData) -> bool {
    base.ampere() == MARK_AMPERE
        && base.candela() == MARK_CANDELA
        && base.kg() == 0
        && base.kelvin() == 0
        && base.currency() == 0
        && base.radian() == 0
        && !base.is_equation()
}

// ─────────────────────────────────────────────────────────────────────────────
// Custom units
// ─────────────────────────────────────────────────────────────────────────────

/// Dimension vector of custom unit `index` (taken modulo 64).
pub const fn custom_unit(index: u16) -> UnitData {
    let index = (index % CUSTOM_UNIT_SLOTS) as i32;
    UnitData::new(
        index & 0x07,
        0,
        (index >> 3) & 0x07,
        MARK_AMPERE,
        0,
        1,
        MARK_CANDELA,
        0,
        0,
        0,
        false,
        false,
        false,
        false,
    )
}

/// `true` if `base` is a custom unit or its inverse.
pub const fn is_custom_unit(base: UnitData) -> bool {
    has_marker(base) && base.count() == 0 && (base.mole() == 1 || base.mole() == -1)
}

/// `true` if `base` is the inverse of a custom unit.
pub const fn is_custom_unit_inverted(base: UnitData) -> bool {
    is_custom_unit(base) && base.mole() == -1
}

/// Index of a custom unit (normal or inverted).
pub const fn custom_unit_index(base: UnitData) -> u16 {
    let sign = if base.mole() < 0 { -1 } else { 1 };
    let low = (base.meter() * sign) & 0x07;
    let high = (base.second() * sign) & 0x07;
    (low | (high << 3)) as u16
}

/// Custom unit `index` as a [`PreciseUnit`].
pub const fn generate_custom_unit(index: u16) -> PreciseUnit {
    PreciseUnit::from_base(custom_unit(index))
}

// ─────────────────────────────────────────────────────────────────────────────
// Custom count units
// ─────────────────────────────────────────────────────────────────────────────

/// Dimension vector of custom count unit `index` (taken modulo 16).
pub const fn custom_count_unit(index: u16) -> UnitData {
    let index = (index % CUSTOM_COUNT_UNIT_SLOTS) as i32;
    UnitData::new(
        index & 0x07,
        0,
        (index >> 3) & 0x01,
        MARK_AMPERE,
        0,
        0,
        MARK_CANDELA,
        0,
        1,
        0,
        false,
        false,
        false,
        false,
    )
}

/// `true` if `base` is a custom count unit or its inverse.
pub const fn is_custom_count_unit(base: UnitData) -> bool {
    has_marker(base) && base.mole() == 0 && (base.count() == 1 || base.count() == -1)
}

/// `true` if `base` is the inverse of a custom count unit.
pub const fn is_custom_count_unit_inverted(base: UnitData) -> bool {
    is_custom_count_unit(base) && base.count() == -1
}

/// Index of a custom count unit (normal or inverted).
pub const fn custom_count_unit_index(base: UnitData) -> u16 {
    let sign = if base.count() < 0 { -1 } else { 1 };
    let low = (base.meter() * sign) & 0x07;
    let high = (base.second() * sign) & 0x01;
    (low | (high << 3)) as u16
}

/// Custom count unit `index` as a [`PreciseUnit`].
pub const fn generate_custom_count_unit(index: u16) -> PreciseUnit {
    PreciseUnit::from_base(custom_count_unit(index))
}

// ─────────────────────────────────────────────────────────────────────────────
// Equation units
// ─────────────────────────────────────────────────────────────────────────────

/// Dimension vector of equation unit `index` (taken modulo 32).
pub const fn equation_unit(index: u16) -> UnitData {
    let index = (index % EQUATION_UNIT_SLOTS) as u32;
    let radian = (index & 0x07) as i32;
    let count = ((index >> 3) & 0x03) as i32;
    UnitData::new(0, 0, 0, 0, 0, 0, 0, 0, count, radian, false, false, false, true)
}

/// Index of an equation unit.
pub const fn equation_unit_index(base: UnitData) -> u16 {
    (base.radian_raw() | (base.count_raw() << 3)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_units_round_trip_every_slot() {
        for i in 0..CUSTOM_UNIT_SLOTS {
            let base = custom_unit(i);
            assert!(is_custom_unit(base), "slot {i}");
            assert!(!is_custom_unit_inverted(base));
            assert!(!is_custom_count_unit(base));
            assert_eq!(custom_unit_index(base), i);

            let inv = base.inv();
            assert!(is_custom_unit(inv), "inverse slot {i}");
            assert!(is_custom_unit_inverted(inv));
            assert_eq!(custom_unit_index(inv), i);
        }
    }

    #[test]
    fn custom_count_units_round_trip_every_slot() {
        for i in 0..CUSTOM_COUNT_UNIT_SLOTS {
            let base = custom_count_unit(i);
            assert!(is_custom_count_unit(base));
            assert!(!is_custom_unit(base));
            assert_eq!(custom_count_unit_index(base), i);
            assert!(is_custom_count_unit_inverted(base.inv()));
            assert_eq!(custom_count_unit_index(base.inv()), i);
        }
    }

    #[test]
    fn equation_units_round_trip_every_slot() {
        for i in 0..EQUATION_UNIT_SLOTS {
            let base = equation_unit(i);
            assert!(base.is_equation());
            assert_eq!(equation_unit_index(base), i);
        }
    }

    #[test]
    fn physical_units_are_not_custom() {
        let newton = UnitData::new(1, 1, -2, 0, 0, 0, 0, 0, 0, 0, false, false, false, false);
        assert!(!is_custom_unit(newton));
        assert!(!is_custom_count_unit(newton));
        assert!(!is_custom_unit(UnitData::NONE));
    }

    #[test]
    fn generated_units_have_unit_multiplier() {
        assert_eq!(generate_custom_unit(5).multiplier(), 1.0);
        assert_eq!(generate_custom_count_unit(3).base_units(), custom_count_unit(3));
    }
}
