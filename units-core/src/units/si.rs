//! SI base units, coherent derived units and decimal prefixes.
//!
//! Base vectors are built with [`UnitData::new`] in the canonical argument order; everything else is composed from
//! them with the `const` algebra of [`PreciseUnit`].
//!
//! ```rust
//! use units_core::units::si::{J, M, N};
//!
//! assert_eq!(N.multiply(M), J);
//! ```

use crate::{PreciseUnit, UnitData};

const fn base(
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
) -> PreciseUnit {
    PreciseUnit::from_base(UnitData::new(
        meter, kilogram, second, ampere, kelvin, mole, candela, currency, count, radian, false, false, false, false,
    ))
}

// ─────────────────────────────────────────────────────────────────────────────
// Base units
// ─────────────────────────────────────────────────────────────────────────────

/// Metre.
pub const M: PreciseUnit = base(1, 0, 0, 0, 0, 0, 0, 0, 0, 0);
/// Kilogram.
pub const KG: PreciseUnit = base(0, 1, 0, 0, 0, 0, 0, 0, 0, 0);
/// Second.
pub const S: PreciseUnit = base(0, 0, 1, 0, 0, 0, 0, 0, 0, 0);
/// Ampere.
pub const A: PreciseUnit = base(0, 0, 0, 1, 0, 0, 0, 0, 0, 0);
/// Kelvin.
pub const K: PreciseUnit = base(0, 0, 0, 0, 1, 0, 0, 0, 0, 0);
/// Mole.
pub const MOL: PreciseUnit = base(0, 0, 0, 0, 0, 1, 0, 0, 0, 0);
/// Candela.
pub const CD: PreciseUnit = base(0, 0, 0, 0, 0, 0, 1, 0, 0, 0);
/// Generic currency unit (`$`).
pub const CURRENCY: PreciseUnit = base(0, 0, 0, 0, 0, 0, 0, 1, 0, 0);
/// Generic count of items.
pub const COUNT: PreciseUnit = base(0, 0, 0, 0, 0, 0, 0, 0, 1, 0);
/// Radian.
pub const RAD: PreciseUnit = base(0, 0, 0, 0, 0, 0, 0, 0, 0, 1);

// ─────────────────────────────────────────────────────────────────────────────
// Decimal prefixes (dimensionless scale factors)
// ─────────────────────────────────────────────────────────────────────────────

/// Dimensionless `1`.
pub const ONE: PreciseUnit = PreciseUnit::ONE;
/// 10
pub const TEN: PreciseUnit = ONE.scaled(10.0);
/// 100
pub const HUNDRED: PreciseUnit = ONE.scaled(100.0);
/// 1e-1
pub const DECI: PreciseUnit = ONE.scaled(0.1);
/// 1e-2
pub const CENTI: PreciseUnit = ONE.scaled(0.01);
/// 1e-3
pub const MILLI: PreciseUnit = ONE.scaled(1e-3);
/// 1e-6
pub const MICRO: PreciseUnit = ONE.scaled(1e-6);
/// 1e-9
pub const NANO: PreciseUnit = ONE.scaled(1e-9);
/// 1e-12
pub const PICO: PreciseUnit = ONE.scaled(1e-12);
/// 1e-15
pub const FEMTO: PreciseUnit = ONE.scaled(1e-15);
/// 1e-18
pub const ATTO: PreciseUnit = ONE.scaled(1e-18);
/// 1e3
pub const KILO: PreciseUnit = ONE.scaled(1e3);
/// 1e6
pub const MEGA: PreciseUnit = ONE.scaled(1e6);
/// 1e9
pub const GIGA: PreciseUnit = ONE.scaled(1e9);
/// 1e12
pub const TERA: PreciseUnit = ONE.scaled(1e12);
/// 1e15
pub const PETA: PreciseUnit = ONE.scaled(1e15);
/// 1e18
pub const EXA: PreciseUnit = ONE.scaled(1e18);

// ─────────────────────────────────────────────────────────────────────────────
// Coherent derived units
// ─────────────────────────────────────────────────────────────────────────────

/// Hertz.
pub const HZ: PreciseUnit = S.inv();
/// Newton.
pub const N: PreciseUnit = KG.multiply(M).divide(S.pow(2));
/// Pascal.
pub const PA: PreciseUnit = N.divide(M.pow(2));
/// Joule.
pub const J: PreciseUnit = N.multiply(M);
/// Watt.
pub const W: PreciseUnit = J.divide(S);
/// Coulomb.
pub const C: PreciseUnit = A.multiply(S);
/// Volt.
pub const V: PreciseUnit = W.divide(A);
/// Ohm.
pub const OHM: PreciseUnit = V.divide(A);
/// Siemens.
pub const SIEMENS: PreciseUnit = OHM.inv();
/// Farad.
pub const F: PreciseUnit = C.divide(V);
/// Weber.
pub const WB: PreciseUnit = V.multiply(S);
/// Tesla.
pub const T: PreciseUnit = WB.divide(M.pow(2));
/// Henry.
pub const H: PreciseUnit = WB.divide(A);
/// Steradian (square radian).
pub const SR: PreciseUnit = RAD.pow(2);
/// Lumen.
pub const LM: PreciseUnit = CD.multiply(SR);
/// Lux.
pub const LX: PreciseUnit = LM.divide(M.pow(2));
/// Becquerel.
pub const BQ: PreciseUnit = S.inv();
/// Gray.
pub const GY: PreciseUnit = J.divide(KG);
/// Sievert.
pub const SV: PreciseUnit = J.divide(KG);
/// Katal.
pub const KAT: PreciseUnit = MOL.divide(S);

// ─────────────────────────────────────────────────────────────────────────────
// Common prefixed forms
// ─────────────────────────────────────────────────────────────────────────────

/// Centimetre.
pub const CM: PreciseUnit = M.scaled(0.01);
/// Millimetre.
pub const MM: PreciseUnit = M.scaled(1e-3);
/// Micrometre.
pub const UM: PreciseUnit = M.scaled(1e-6);
/// Nanometre.
pub const NM: PreciseUnit = M.scaled(1e-9);
/// Kilometre.
pub const KM: PreciseUnit = M.scaled(1e3);
/// Gram.
pub const G: PreciseUnit = KG.scaled(1e-3);
/// Milligram.
pub const MG: PreciseUnit = KG.scaled(1e-6);
/// Millisecond.
pub const MS: PreciseUnit = S.scaled(1e-3);
/// Microsecond.
pub const US: PreciseUnit = S.scaled(1e-6);
/// Nanosecond.
pub const NS: PreciseUnit = S.scaled(1e-9);
/// Milliampere.
pub const MA: PreciseUnit = A.scaled(1e-3);
/// Kilovolt.
pub const KV: PreciseUnit = V.scaled(1e3);
/// Milliwatt.
pub const MW_MILLI: PreciseUnit = W.scaled(1e-3);
/// Kilowatt.
pub const KW: PreciseUnit = W.scaled(1e3);
/// Megawatt.
pub const MW: PreciseUnit = W.scaled(1e6);
/// Litre.
pub const L: PreciseUnit = M.pow(3).scaled(1e-3);
/// Millilitre.
pub const ML: PreciseUnit = L.scaled(1e-3);
/// Minute.
pub const MIN: PreciseUnit = S.scaled(60.0);
/// Hour.
pub const HR: PreciseUnit = S.scaled(3600.0);
/// Kilowatt-hour.
pub const KWH: PreciseUnit = KW.multiply(HR);
/// Megawatt-hour.
pub const MWH: PreciseUnit = MW.multiply(HR);
