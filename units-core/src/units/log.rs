//! Logarithmic and other equation-defined units.
//!
//! These have no linear relation to the base dimensions, so they are stored as equation slots
//! ([`crate::custom::equation_unit`]) that keep an index instead of exponents. Scaled forms such as `dBm` multiply the
//! slot by the reference quantity; the slot index survives because reference quantities never touch the radian or
//! count fields that hold it.

use super::si::{L, M, MOL, MW_MILLI, S, V, W};
use crate::custom::equation_unit;
use crate::PreciseUnit;

/// Slot of the base-10 logarithm.
pub const LOG10_SLOT: u16 = 0;
/// Slot of the neper (natural log).
pub const NEPER_SLOT: u16 = 1;
/// Slot of the bel.
pub const BEL_SLOT: u16 = 2;
/// Slot of the decibel.
pub const DECIBEL_SLOT: u16 = 3;
/// Slot of `-log10`.
pub const NEGLOG10_SLOT: u16 = 5;
/// Slot of `-log100`.
pub const NEGLOG100_SLOT: u16 = 6;
/// Slot of `-log1000`.
pub const NEGLOG1000_SLOT: u16 = 7;
/// Slot of `-log50000`.
pub const NEGLOG50000_SLOT: u16 = 8;
/// Slot of the Saffir–Simpson hurricane scale.
pub const SAFFIR_SIMPSON_SLOT: u16 = 22;
/// Slot of the Beaufort wind scale.
pub const BEAUFORT_SLOT: u16 = 23;
/// Slot of the Fujita tornado scale.
pub const FUJITA_SLOT: u16 = 24;
/// Slot of the Richter magnitude.
pub const RICHTER_SLOT: u16 = 27;
/// Slot of the moment magnitude.
pub const MOMENT_MAGNITUDE_SLOT: u16 = 29;

const fn slot(index: u16) -> PreciseUnit {
    PreciseUnit::from_base(equation_unit(index))
}

/// Base-10 logarithm.
pub const LOG: PreciseUnit = slot(LOG10_SLOT);
/// Neper.
pub const NEPER: PreciseUnit = slot(NEPER_SLOT);
/// Bel.
pub const BEL: PreciseUnit = slot(BEL_SLOT);
/// Decibel.
pub const DB: PreciseUnit = slot(DECIBEL_SLOT);
/// Negative base-10 logarithm.
pub const NEGLOG10: PreciseUnit = slot(NEGLOG10_SLOT);
/// Negative base-100 logarithm.
pub const NEGLOG100: PreciseUnit = slot(NEGLOG100_SLOT);
/// Negative base-1000 logarithm.
pub const NEGLOG1000: PreciseUnit = slot(NEGLOG1000_SLOT);
/// Negative base-50000 logarithm.
pub const NEGLOG50000: PreciseUnit = slot(NEGLOG50000_SLOT);

/// Decibel relative to a milliwatt.
pub const DBM: PreciseUnit = DB.multiply(MW_MILLI);
/// Decibel relative to a watt.
pub const DBW: PreciseUnit = DB.multiply(W);
/// Decibel relative to a volt.
pub const DBV: PreciseUnit = DB.multiply(V);
/// Bel relative to a watt.
pub const BEL_W: PreciseUnit = BEL.multiply(W);
/// Bel relative to a volt.
pub const BEL_V: PreciseUnit = BEL.multiply(V);
/// Acidity, `-log10` of the molar concentration.
pub const PH: PreciseUnit = NEGLOG10.multiply(MOL.divide(L));

/// Saffir–Simpson hurricane category.
pub const SAFFIR_SIMPSON: PreciseUnit = slot(SAFFIR_SIMPSON_SLOT);
/// Beaufort wind force, referenced to a wind speed.
pub const BEAUFORT: PreciseUnit = slot(BEAUFORT_SLOT).multiply(M.divide(S));
/// Fujita tornado rating, referenced to a wind speed.
pub const FUJITA: PreciseUnit = slot(FUJITA_SLOT).multiply(M.divide(S));
/// Richter local magnitude.
pub const RICHTER: PreciseUnit = slot(RICHTER_SLOT);
/// Moment magnitude.
pub const MOMENT_MAGNITUDE: PreciseUnit = slot(MOMENT_MAGNITUDE_SLOT);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::custom::equation_unit_index;

    #[test]
    fn reference_quantities_keep_the_slot() {
        assert!(DBM.is_equation());
        assert_eq!(equation_unit_index(DBM.base_units()), DECIBEL_SLOT);
        assert_eq!(equation_unit_index(PH.base_units()), NEGLOG10_SLOT);
        assert_eq!(PH.base_units().mole(), 1);
        assert_eq!(PH.base_units().meter(), -3);
    }

    #[test]
    fn slots_are_distinct() {
        assert_ne!(DB, BEL);
        assert_ne!(NEPER, LOG);
        assert_ne!(NEGLOG10, NEGLOG100);
    }
}
