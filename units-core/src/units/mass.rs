//! Mass and force units (avoirdupois, troy, apothecaries, metric, gravitational).

use super::constants::G0;
use super::si::{G, KG, M, N, PA, S};
use crate::PreciseUnit;

/// Avoirdupois pound, exactly 0.45359237 kg.
pub const LB: PreciseUnit = KG.scaled(0.453_592_37);
/// Avoirdupois ounce.
pub const OZ: PreciseUnit = LB.scaled(1.0 / 16.0);
/// Grain.
pub const GRAIN: PreciseUnit = LB.scaled(1.0 / 7000.0);
/// Avoirdupois dram.
pub const DRAM: PreciseUnit = OZ.scaled(1.0 / 16.0);
/// Stone.
pub const STONE: PreciseUnit = LB.scaled(14.0);
/// Short hundredweight.
pub const HUNDREDWEIGHT: PreciseUnit = LB.scaled(100.0);
/// Long hundredweight.
pub const LONG_HUNDREDWEIGHT: PreciseUnit = LB.scaled(112.0);
/// Short ton.
pub const TON: PreciseUnit = LB.scaled(2000.0);
/// Long ton.
pub const LONG_TON: PreciseUnit = LB.scaled(2240.0);
/// Metric tonne.
pub const TONNE: PreciseUnit = KG.scaled(1000.0);
/// Quintal.
pub const QUINTAL: PreciseUnit = KG.scaled(100.0);
/// Slug.
pub const SLUG: PreciseUnit = KG.scaled(14.593_902_94);
/// Metric carat.
pub const CARAT: PreciseUnit = G.scaled(0.2);
/// Unified atomic mass unit (dalton).
pub const DALTON: PreciseUnit = KG.scaled(1.660_539_066_60e-27);
/// Short assay ton.
pub const ASSAY_TON: PreciseUnit = G.scaled(29.166_667);
/// Long assay ton.
pub const LONG_ASSAY_TON: PreciseUnit = G.scaled(32.666_667);

/// Troy ounce.
pub const TROY_OZ: PreciseUnit = GRAIN.scaled(480.0);
/// Troy pound.
pub const TROY_POUND: PreciseUnit = TROY_OZ.scaled(12.0);
/// Pennyweight.
pub const PENNYWEIGHT: PreciseUnit = GRAIN.scaled(24.0);

/// Apothecaries' scruple.
pub const SCRUPLE: PreciseUnit = GRAIN.scaled(20.0);
/// Apothecaries' drachm.
pub const DRACHM: PreciseUnit = SCRUPLE.scaled(3.0);
/// Apothecaries' ounce.
pub const AP_OUNCE: PreciseUnit = DRACHM.scaled(8.0);
/// Apothecaries' pound.
pub const AP_POUND: PreciseUnit = AP_OUNCE.scaled(12.0);
/// Metric ounce.
pub const METRIC_OUNCE: PreciseUnit = G.scaled(25.0);

/// Chinese jin.
pub const JIN: PreciseUnit = KG.scaled(0.5);
/// Chinese liang.
pub const LIANG: PreciseUnit = G.scaled(50.0);
/// Chinese qian.
pub const QIAN: PreciseUnit = G.scaled(5.0);

// ─────────────────────────────────────────────────────────────────────────────
// Force
// ─────────────────────────────────────────────────────────────────────────────

/// Pound-force.
pub const LBF: PreciseUnit = LB.multiply(G0);
/// Ounce-force.
pub const OZF: PreciseUnit = OZ.multiply(G0);
/// Kip-force.
pub const KIPF: PreciseUnit = LBF.scaled(1000.0);
/// Poundal.
pub const POUNDAL: PreciseUnit = LB.multiply(super::length::FT).divide(S.pow(2));
/// Gram-force (pond).
pub const POND: PreciseUnit = G.multiply(G0);
/// Tonne-force.
pub const TONNE_FORCE: PreciseUnit = TONNE.multiply(G0);
/// Hyl (metric slug).
pub const HYL: PreciseUnit = KG.scaled(9.806_65);
/// Sthene.
pub const STHENE: PreciseUnit = N.scaled(1000.0);
/// Pieze.
pub const PIEZE: PreciseUnit = PA.scaled(1000.0);

/// Tex (g/km).
pub const TEX: PreciseUnit = G.divide(M.scaled(1000.0));
/// Denier (g/9 km).
pub const DENIER: PreciseUnit = G.divide(M.scaled(9000.0));
