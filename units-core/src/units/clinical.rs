//! Laboratory and clinical units.
//!
//! Most "units" used in assays are procedure-defined and have no physical dimension, so they occupy custom-unit
//! slots. Countable ones (plaques, colonies, fields of view) use custom count slots so that a ratio such as
//! `PFU/mL` stays distinguishable from a plain `1/mL`.

use super::si::{G, KG, L, M, MIN, ML, MOL};
use crate::custom::{generate_custom_count_unit, generate_custom_unit};
use crate::PreciseUnit;

/// Arbitrary unit.
pub const ARB_UNIT: PreciseUnit = generate_custom_unit(1);
/// International unit.
pub const IU: PreciseUnit = generate_custom_unit(2);
/// United States Pharmacopeia unit.
pub const USP_UNIT: PreciseUnit = generate_custom_unit(3);
/// IgG anticardiolipin unit.
pub const GPL_UNIT: PreciseUnit = generate_custom_unit(4);
/// IgM anticardiolipin unit.
pub const MPL_UNIT: PreciseUnit = generate_custom_unit(5);
/// IgA anticardiolipin unit.
pub const APL_UNIT: PreciseUnit = generate_custom_unit(6);
/// Bethesda unit.
pub const BETHESDA_UNIT: PreciseUnit = generate_custom_unit(7);
/// Anti factor Xa unit.
pub const ANTI_XA_UNIT: PreciseUnit = generate_custom_unit(8);
/// Todd unit.
pub const TODD_UNIT: PreciseUnit = generate_custom_unit(9);
/// Dye unit.
pub const DYE_UNIT: PreciseUnit = generate_custom_unit(10);
/// Somogyi unit.
pub const SOMOGYI_UNIT: PreciseUnit = generate_custom_unit(11);
/// Bodansky unit.
pub const BODANSKY_UNIT: PreciseUnit = generate_custom_unit(12);
/// King-Armstrong unit.
pub const KING_ARMSTRONG_UNIT: PreciseUnit = generate_custom_unit(13);
/// Kunkel unit.
pub const KUNKEL_UNIT: PreciseUnit = generate_custom_unit(14);
/// Mac Lagan unit.
pub const MAC_LAGAN_UNIT: PreciseUnit = generate_custom_unit(15);
/// Tuberculin unit.
pub const TUBERCULIN_UNIT: PreciseUnit = generate_custom_unit(16);
/// ELISA unit.
pub const ELISA_UNIT: PreciseUnit = generate_custom_unit(17);
/// Allergen unit.
pub const ALLERGEN_UNIT: PreciseUnit = generate_custom_unit(18);
/// Hounsfield unit.
pub const HOUNSFIELD_UNIT: PreciseUnit = generate_custom_unit(19);

/// Plaque forming unit.
pub const PFU: PreciseUnit = generate_custom_count_unit(1);
/// Focus forming unit.
pub const FFU: PreciseUnit = generate_custom_count_unit(2);
/// Colony forming unit.
pub const CFU: PreciseUnit = generate_custom_count_unit(3);
/// High power field.
pub const HPF: PreciseUnit = generate_custom_count_unit(4);
/// Low power field.
pub const LPF: PreciseUnit = generate_custom_count_unit(5);
/// Limit of flocculation.
pub const LF: PreciseUnit = generate_custom_count_unit(6);

/// Equivalent (amount of reactive species).
pub const EQ: PreciseUnit = MOL;
/// Milliequivalent.
pub const MEQ: PreciseUnit = MOL.scaled(1e-3);
/// Osmole.
pub const OSM: PreciseUnit = MOL;
/// Metabolic equivalent of task, `3.5 mL/(min·kg)`.
pub const MET: PreciseUnit = ML.divide(MIN).divide(KG).scaled(3.5);
/// Diopter.
pub const DIOPTER: PreciseUnit = M.inv();
/// French catheter gauge (1/3 mm).
pub const CHARRIERE: PreciseUnit = M.scaled(1e-3 / 3.0);
/// Gram percent (g/dL).
pub const GRAM_PERCENT: PreciseUnit = G.divide(L.scaled(0.1));
/// Mesh (per inch).
pub const MESH: PreciseUnit = super::length::IN.inv();
