//! Energy, power and pressure units.

use super::length::{FT, IN};
use super::mass::{LB, LBF};
use super::si::{HR, J, KG, KW, M, MIN, N, PA, S, W};
use super::time::YR;
use crate::PreciseUnit;

// ─────────────────────────────────────────────────────────────────────────────
// Energy
// ─────────────────────────────────────────────────────────────────────────────

/// Kilojoule.
pub const KJ: PreciseUnit = J.scaled(1e3);
/// Megajoule.
pub const MJ: PreciseUnit = J.scaled(1e6);
/// Electronvolt.
pub const EV: PreciseUnit = J.scaled(1.602_176_634e-19);
/// Thermochemical calorie.
pub const CAL: PreciseUnit = J.scaled(4.184);
/// International table calorie.
pub const CAL_IT: PreciseUnit = J.scaled(4.1868);
/// Calorie at 15 °C.
pub const CAL_15: PreciseUnit = J.scaled(4.1855);
/// Calorie at 20 °C.
pub const CAL_20: PreciseUnit = J.scaled(4.1819);
/// Mean calorie.
pub const CAL_MEAN: PreciseUnit = J.scaled(4.190_02);
/// Nutritional (kilo)calorie.
pub const KCAL: PreciseUnit = CAL.scaled(1000.0);
/// International table British thermal unit.
pub const BTU_IT: PreciseUnit = J.scaled(1055.055_852_62);
/// Thermochemical British thermal unit.
pub const BTU_TH: PreciseUnit = J.scaled(1054.350);
/// British thermal unit at 39 °F.
pub const BTU_39: PreciseUnit = J.scaled(1059.67);
/// British thermal unit at 59 °F.
pub const BTU_59: PreciseUnit = J.scaled(1054.80);
/// British thermal unit at 60 °F.
pub const BTU_60: PreciseUnit = J.scaled(1054.68);
/// Mean British thermal unit.
pub const BTU_MEAN: PreciseUnit = J.scaled(1055.87);
/// ISO British thermal unit.
pub const BTU_ISO: PreciseUnit = J.scaled(1055.056);
/// US therm.
pub const THERM_US: PreciseUnit = J.scaled(105.4804e6);
/// EC therm.
pub const THERM_EC: PreciseUnit = J.scaled(105.506e6);
/// UK therm.
pub const THERM_BR: PreciseUnit = J.scaled(105.505_585_257_348e6);
/// Quad (10^15 BTU).
pub const QUAD: PreciseUnit = BTU_IT.scaled(1e15);
/// Ton of TNT.
pub const TON_TNT: PreciseUnit = J.scaled(4.184e9);
/// Tonne of oil equivalent.
pub const TOE: PreciseUnit = J.scaled(41.868e9);
/// Barrel of oil equivalent.
pub const BOE: PreciseUnit = BTU_IT.scaled(5.8e6);
/// Tonne of coal equivalent.
pub const TCE: PreciseUnit = J.scaled(29.3076e9);
/// Foot-pound.
pub const FOOT_POUND: PreciseUnit = FT.multiply(LBF);
/// Hartree.
pub const HARTREE: PreciseUnit = J.scaled(4.359_744_722_207_1e-18);
/// Rydberg energy.
pub const RYDBERG_ENERGY: PreciseUnit = HARTREE.scaled(0.5);
/// Watt-second.
pub const WS: PreciseUnit = W.multiply(S);
/// Gigawatt-hour.
pub const GWH: PreciseUnit = W.multiply(HR).scaled(1e9);

// ─────────────────────────────────────────────────────────────────────────────
// Power
// ─────────────────────────────────────────────────────────────────────────────

/// Mechanical (imperial) horsepower.
pub const HP: PreciseUnit = W.scaled(745.699_871_582_270_2);
/// Electrical horsepower.
pub const HP_ELECTRIC: PreciseUnit = W.scaled(746.0);
/// Metric horsepower.
pub const HP_METRIC: PreciseUnit = W.scaled(735.498_75);
/// Boiler horsepower.
pub const HP_BOILER: PreciseUnit = W.scaled(9809.5);
/// Ton of refrigeration.
pub const TON_COOLING: PreciseUnit = BTU_IT.scaled(12_000.0).divide(HR);
/// BTU per hour.
pub const BTU_PER_HOUR: PreciseUnit = BTU_IT.divide(HR);
/// Kilowatt-year.
pub const KW_YEAR: PreciseUnit = KW.multiply(YR);
/// Volt-ampere.
pub const VA: PreciseUnit = W;
/// Kilovolt-ampere.
pub const KVA: PreciseUnit = KW;
/// Volt-ampere reactive.
pub const VAR: PreciseUnit = W;
/// Gigawatt.
pub const GW: PreciseUnit = W.scaled(1e9);

// ─────────────────────────────────────────────────────────────────────────────
// Pressure
// ─────────────────────────────────────────────────────────────────────────────

/// Bar.
pub const BAR: PreciseUnit = PA.scaled(1e5);
/// Millibar.
pub const MBAR: PreciseUnit = PA.scaled(100.0);
/// Kilopascal.
pub const KPA: PreciseUnit = PA.scaled(1e3);
/// Megapascal.
pub const MPA: PreciseUnit = PA.scaled(1e6);
/// Standard atmosphere.
pub const ATM: PreciseUnit = PA.scaled(101_325.0);
/// Technical atmosphere.
pub const ATT: PreciseUnit = PA.scaled(98_066.5);
/// Pound per square inch.
pub const PSI: PreciseUnit = LBF.divide(IN.pow(2));
/// Kilopound per square inch.
pub const KSI: PreciseUnit = PSI.scaled(1000.0);
/// Pound per square foot.
pub const PSF: PreciseUnit = LBF.divide(FT.pow(2));
/// Inch of mercury.
pub const INHG: PreciseUnit = PA.scaled(3386.389);
/// Inch of water.
pub const INH2O: PreciseUnit = PA.scaled(249.0889);
/// Millimetre of mercury.
pub const MMHG: PreciseUnit = PA.scaled(133.322_387_415);
/// Millimetre of water.
pub const MMH2O: PreciseUnit = PA.scaled(9.806_65);
/// Torr.
pub const TORR: PreciseUnit = PA.scaled(101_325.0 / 760.0);
/// Centimetre of water.
pub const CMH2O: PreciseUnit = MMH2O.scaled(10.0);

// ─────────────────────────────────────────────────────────────────────────────
// Mechanics helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Metre per second.
pub const MPS: PreciseUnit = M.divide(S);
/// Miles per hour.
pub const MPH: PreciseUnit = super::length::MILE.divide(HR);
/// Knot.
pub const KNOT: PreciseUnit = super::length::NAUTICAL_MILE.divide(HR);
/// Kilometre per hour.
pub const KPH: PreciseUnit = M.scaled(1000.0).divide(HR);
/// Feet per minute.
pub const FPM: PreciseUnit = FT.divide(MIN);
/// Newton-metre of torque (same vector as the joule).
pub const NEWTON_METER: PreciseUnit = N.multiply(M);
/// Pound mass per cubic foot.
pub const LB_PER_FT3: PreciseUnit = LB.divide(FT.pow(3));
/// Kilogram per cubic metre.
pub const KG_PER_M3: PreciseUnit = KG.divide(M.pow(3));
