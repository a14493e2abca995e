//! Volume units: US liquid and dry measures, British imperial measures and metric kitchen measures.

use super::length::{FT, IN};
use super::si::{L, M, ML};
use crate::PreciseUnit;

/// Cubic centimetre.
pub const CC: PreciseUnit = ML;
/// Stere (cubic metre of firewood).
pub const STERE: PreciseUnit = M.pow(3);
/// Board foot.
pub const BOARD_FOOT: PreciseUnit = IN.pow(3).scaled(144.0);
/// Cord.
pub const CORD: PreciseUnit = FT.pow(3).scaled(128.0);

// ─────────────────────────────────────────────────────────────────────────────
// US liquid
// ─────────────────────────────────────────────────────────────────────────────

/// US gallon (231 in³).
pub const GAL: PreciseUnit = IN.pow(3).scaled(231.0);
/// US quart.
pub const QUART: PreciseUnit = GAL.scaled(0.25);
/// US pint.
pub const PINT: PreciseUnit = GAL.scaled(0.125);
/// US cup.
pub const CUP: PreciseUnit = GAL.scaled(1.0 / 16.0);
/// US gill.
pub const GILL: PreciseUnit = GAL.scaled(1.0 / 32.0);
/// US fluid ounce.
pub const FLOZ: PreciseUnit = GAL.scaled(1.0 / 128.0);
/// US tablespoon.
pub const TBSP: PreciseUnit = FLOZ.scaled(0.5);
/// US teaspoon.
pub const TSP: PreciseUnit = TBSP.scaled(1.0 / 3.0);
/// US fluid dram.
pub const FLDRAM: PreciseUnit = FLOZ.scaled(0.125);
/// US minim.
pub const MINIM: PreciseUnit = FLOZ.scaled(1.0 / 480.0);
/// Oil barrel (42 US gal).
pub const BARREL: PreciseUnit = GAL.scaled(42.0);
/// US fluid barrel (31.5 US gal).
pub const FLBARREL: PreciseUnit = GAL.scaled(31.5);
/// Hogshead.
pub const HOGSHEAD: PreciseUnit = GAL.scaled(63.0);
/// Drum (55 US gal).
pub const DRUM: PreciseUnit = GAL.scaled(55.0);

// ─────────────────────────────────────────────────────────────────────────────
// US dry
// ─────────────────────────────────────────────────────────────────────────────

/// US bushel.
pub const BUSHEL: PreciseUnit = IN.pow(3).scaled(2150.42);
/// US peck.
pub const PECK: PreciseUnit = BUSHEL.scaled(0.25);
/// US dry gallon.
pub const DRY_GALLON: PreciseUnit = BUSHEL.scaled(0.125);
/// US dry quart.
pub const DRY_QUART: PreciseUnit = DRY_GALLON.scaled(0.25);
/// US dry pint.
pub const DRY_PINT: PreciseUnit = DRY_GALLON.scaled(0.125);

// ─────────────────────────────────────────────────────────────────────────────
// British imperial
// ─────────────────────────────────────────────────────────────────────────────

/// Imperial gallon.
pub const IMP_GALLON: PreciseUnit = L.scaled(4.54609);
/// Imperial quart.
pub const IMP_QUART: PreciseUnit = IMP_GALLON.scaled(0.25);
/// Imperial pint.
pub const IMP_PINT: PreciseUnit = IMP_GALLON.scaled(0.125);
/// Imperial gill.
pub const IMP_GILL: PreciseUnit = IMP_GALLON.scaled(1.0 / 32.0);
/// Imperial cup.
pub const IMP_CUP: PreciseUnit = IMP_PINT.scaled(0.5);
/// Imperial fluid ounce.
pub const IMP_FLOZ: PreciseUnit = IMP_GALLON.scaled(1.0 / 160.0);
/// Imperial tablespoon.
pub const IMP_TBSP: PreciseUnit = IMP_FLOZ.scaled(0.625);
/// Imperial teaspoon.
pub const IMP_TSP: PreciseUnit = IMP_TBSP.scaled(1.0 / 3.0);
/// Imperial fluid drachm.
pub const IMP_DRAM: PreciseUnit = IMP_FLOZ.scaled(0.125);
/// Imperial minim.
pub const IMP_MINIM: PreciseUnit = IMP_FLOZ.scaled(1.0 / 480.0);
/// Imperial barrel.
pub const IMP_BARREL: PreciseUnit = IMP_GALLON.scaled(36.0);
/// Imperial bushel.
pub const IMP_BUSHEL: PreciseUnit = IMP_GALLON.scaled(8.0);
/// Imperial peck.
pub const IMP_PECK: PreciseUnit = IMP_GALLON.scaled(2.0);

// ─────────────────────────────────────────────────────────────────────────────
// Metric kitchen
// ─────────────────────────────────────────────────────────────────────────────

/// Metric cup.
pub const METRIC_CUP: PreciseUnit = ML.scaled(250.0);
/// US legal cup.
pub const CUP_US_LEGAL: PreciseUnit = ML.scaled(240.0);
/// Metric teaspoon.
pub const METRIC_TSP: PreciseUnit = ML.scaled(5.0);
/// Metric tablespoon.
pub const METRIC_TBSP: PreciseUnit = ML.scaled(15.0);
/// Metric fluid ounce.
pub const METRIC_FLOZ: PreciseUnit = ML.scaled(30.0);
/// Metric drop.
pub const DROP: PreciseUnit = ML.scaled(0.05);
