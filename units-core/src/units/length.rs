//! Length and area units.
//!
//! The canonical scaling unit is the metre. International (1959) definitions are used for the plain customary
//! names; the US survey and older British (imperial) variants live under their own prefixes because the locality
//! modifiers of the parser select between them (`ft_us`, `ft_br`, …).

use super::si::{CM, M};
use crate::PreciseUnit;
use core::f64::consts::PI;

// ─────────────────────────────────────────────────────────────────────────────
// International customary
// ─────────────────────────────────────────────────────────────────────────────

/// International inch, exactly 2.54 cm.
pub const IN: PreciseUnit = CM.scaled(2.54);
/// International foot.
pub const FT: PreciseUnit = IN.scaled(12.0);
/// International yard.
pub const YD: PreciseUnit = FT.scaled(3.0);
/// International (statute) mile.
pub const MILE: PreciseUnit = FT.scaled(5280.0);
/// International mil (thousandth of an inch).
pub const MIL: PreciseUnit = IN.scaled(0.001);
/// Circular mil.
pub const CIRC_MIL: PreciseUnit = MIL.pow(2).scaled(PI / 4.0);
/// Hand (4 in).
pub const HAND: PreciseUnit = IN.scaled(4.0);
/// League (3 mi).
pub const LEAGUE: PreciseUnit = MILE.scaled(3.0);

// ─────────────────────────────────────────────────────────────────────────────
// US survey
// ─────────────────────────────────────────────────────────────────────────────

/// US survey foot, 1200/3937 m.
pub const US_FOOT: PreciseUnit = M.scaled(1200.0 / 3937.0);
/// US survey inch.
pub const US_INCH: PreciseUnit = US_FOOT.scaled(1.0 / 12.0);
/// US survey yard.
pub const US_YARD: PreciseUnit = US_FOOT.scaled(3.0);
/// US survey mile.
pub const US_MILE: PreciseUnit = US_FOOT.scaled(5280.0);
/// US survey rod.
pub const US_ROD: PreciseUnit = US_FOOT.scaled(16.5);
/// Gunter's chain.
pub const US_CHAIN: PreciseUnit = US_FOOT.scaled(66.0);
/// Link of a Gunter's chain.
pub const US_LINK: PreciseUnit = US_CHAIN.scaled(0.01);
/// Furlong.
pub const US_FURLONG: PreciseUnit = US_FOOT.scaled(660.0);
/// US mil.
pub const US_MIL: PreciseUnit = US_INCH.scaled(0.001);
/// Ramsden's (engineer's) chain.
pub const ENGINEERS_CHAIN: PreciseUnit = US_FOOT.scaled(100.0);
/// Link of an engineer's chain.
pub const ENGINEERS_LINK: PreciseUnit = US_FOOT;

// ─────────────────────────────────────────────────────────────────────────────
// British imperial (pre-1959 standards)
// ─────────────────────────────────────────────────────────────────────────────

/// British inch.
pub const IMP_INCH: PreciseUnit = CM.scaled(2.539998);
/// British foot.
pub const IMP_FOOT: PreciseUnit = IMP_INCH.scaled(12.0);
/// British yard.
pub const IMP_YARD: PreciseUnit = IMP_FOOT.scaled(3.0);
/// British rod.
pub const IMP_ROD: PreciseUnit = IMP_FOOT.scaled(16.5);
/// British chain.
pub const IMP_CHAIN: PreciseUnit = IMP_FOOT.scaled(66.0);
/// British link.
pub const IMP_LINK: PreciseUnit = IMP_CHAIN.scaled(0.01);
/// British mile.
pub const IMP_MILE: PreciseUnit = IMP_FOOT.scaled(5280.0);
/// British pace.
pub const IMP_PACE: PreciseUnit = IMP_FOOT.scaled(2.5);
/// British nautical mile.
pub const IMP_NAUTICAL_MILE: PreciseUnit = IMP_FOOT.scaled(6080.0);
/// Barleycorn (a third of an inch).
pub const BARLEYCORN: PreciseUnit = IMP_INCH.scaled(1.0 / 3.0);
/// Thou.
pub const THOU: PreciseUnit = IMP_INCH.scaled(0.001);

// ─────────────────────────────────────────────────────────────────────────────
// Nautical and astronomical
// ─────────────────────────────────────────────────────────────────────────────

/// International nautical mile.
pub const NAUTICAL_MILE: PreciseUnit = M.scaled(1852.0);
/// Nautical league.
pub const NAUTICAL_LEAGUE: PreciseUnit = NAUTICAL_MILE.scaled(3.0);
/// Fathom (6 ft).
pub const FATHOM: PreciseUnit = FT.scaled(6.0);
/// Astronomical unit (IAU 2012).
pub const AU: PreciseUnit = M.scaled(149_597_870_700.0);
/// Light year (Julian year).
pub const LY: PreciseUnit = M.scaled(9.460_730_472_580_8e15);
/// Parsec.
pub const PARSEC: PreciseUnit = AU.scaled(648_000.0 / PI);
/// Ångström.
pub const ANGSTROM: PreciseUnit = M.scaled(1e-10);
/// X unit.
pub const XU: PreciseUnit = M.scaled(1.0021e-13);

// ─────────────────────────────────────────────────────────────────────────────
// Historical and regional
// ─────────────────────────────────────────────────────────────────────────────

/// Cubit.
pub const CUBIT: PreciseUnit = M.scaled(0.4572);
/// Long cubit.
pub const LONG_CUBIT: PreciseUnit = M.scaled(0.5334);
/// US arpent.
pub const ARPENT_US: PreciseUnit = M.scaled(58.471_308);
/// French arpent.
pub const ARPENT_FR: PreciseUnit = M.scaled(71.465_85);
/// Japanese ken.
pub const KEN: PreciseUnit = M.scaled(1.82);
/// Chinese cun.
pub const CUN: PreciseUnit = M.scaled(1.0 / 30.0);
/// Chinese chi.
pub const CHI: PreciseUnit = M.scaled(1.0 / 3.0);
/// Chinese zhang.
pub const ZHANG: PreciseUnit = M.scaled(10.0 / 3.0);
/// Chinese li.
pub const LI: PreciseUnit = M.scaled(500.0);
/// Smoot.
pub const SMOOT: PreciseUnit = M.scaled(1.7018);

// ─────────────────────────────────────────────────────────────────────────────
// Typographic and textile
// ─────────────────────────────────────────────────────────────────────────────

/// American typographic point.
pub const POINT: PreciseUnit = IN.scaled(1.0 / 72.0);
/// American pica.
pub const PICA: PreciseUnit = POINT.scaled(12.0);
/// Line (1/12 in).
pub const LINE: PreciseUnit = IN.scaled(1.0 / 12.0);
/// Twip.
pub const TWIP: PreciseUnit = POINT.scaled(1.0 / 20.0);
/// Printer's point.
pub const PRINTERS_POINT: PreciseUnit = IN.scaled(0.013_837);
/// Printer's pica.
pub const PRINTERS_PICA: PreciseUnit = PRINTERS_POINT.scaled(12.0);
/// French pied.
pub const PIED: PreciseUnit = CM.scaled(32.48);
/// French pouce.
pub const POUCE: PreciseUnit = PIED.scaled(1.0 / 12.0);
/// French ligne.
pub const LIGNE: PreciseUnit = POUCE.scaled(1.0 / 12.0);
/// Didot point.
pub const DIDOT: PreciseUnit = LIGNE.scaled(1.0 / 6.0);
/// Cicero.
pub const CICERO: PreciseUnit = DIDOT.scaled(12.0);

// ─────────────────────────────────────────────────────────────────────────────
// Area
// ─────────────────────────────────────────────────────────────────────────────

/// US survey acre.
pub const ACRE: PreciseUnit = US_FOOT.pow(2).scaled(43_560.0);
/// International acre.
pub const IMP_ACRE: PreciseUnit = YD.pow(2).scaled(4840.0);
/// Are.
pub const ARE: PreciseUnit = M.pow(2).scaled(100.0);
/// Hectare.
pub const HECTARE: PreciseUnit = M.pow(2).scaled(10_000.0);
/// Barn.
pub const BARN: PreciseUnit = M.pow(2).scaled(1e-28);
/// US survey section (one square mile).
pub const SECTION: PreciseUnit = US_MILE.pow(2);
/// US survey township.
pub const TOWNSHIP: PreciseUnit = SECTION.scaled(36.0);
/// Homestead.
pub const HOMESTEAD: PreciseUnit = ACRE.scaled(160.0);
