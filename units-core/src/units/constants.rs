//! Physical constants expressed as units (CODATA 2018, exact SI 2019 values where defined).
//!
//! Treating constants as units lets strings like `"2 c"` or `"[k]*K"` parse into ordinary [`PreciseUnit`] values.

use super::si::{A, C, F, H, J, K, KG, M, MOL, S, W};
use crate::PreciseUnit;

/// Speed of light in vacuum.
pub const C_LIGHT: PreciseUnit = M.divide(S).scaled(299_792_458.0);
/// Standard acceleration of gravity.
pub const G0: PreciseUnit = M.divide(S.pow(2)).scaled(9.806_65);
/// Newtonian constant of gravitation.
pub const G_GRAV: PreciseUnit = M.pow(3).divide(KG).divide(S.pow(2)).scaled(6.674_30e-11);
/// Planck constant.
pub const PLANCK: PreciseUnit = J.multiply(S).scaled(6.626_070_15e-34);
/// Reduced Planck constant.
pub const HBAR: PreciseUnit = PLANCK.scaled(1.0 / (2.0 * core::f64::consts::PI));
/// Boltzmann constant.
pub const BOLTZMANN: PreciseUnit = J.divide(K).scaled(1.380_649e-23);
/// Elementary charge.
pub const ELEMENTARY_CHARGE: PreciseUnit = C.scaled(1.602_176_634e-19);
/// Avogadro constant.
pub const AVOGADRO: PreciseUnit = MOL.inv().scaled(6.022_140_76e23);
/// Molar gas constant.
pub const GAS_CONSTANT: PreciseUnit = J.divide(MOL).divide(K).scaled(8.314_462_618);
/// Faraday constant.
pub const FARADAY: PreciseUnit = C.divide(MOL).scaled(96_485.332_12);
/// Vacuum permittivity.
pub const EPSILON0: PreciseUnit = F.divide(M).scaled(8.854_187_812_8e-12);
/// Vacuum permeability.
pub const MU0: PreciseUnit = H.divide(M).scaled(1.256_637_062_12e-6);
/// Electron mass.
pub const ELECTRON_MASS: PreciseUnit = KG.scaled(9.109_383_701_5e-31);
/// Proton mass.
pub const PROTON_MASS: PreciseUnit = KG.scaled(1.672_621_923_69e-27);
/// Neutron mass.
pub const NEUTRON_MASS: PreciseUnit = KG.scaled(1.674_927_498_04e-27);
/// Stefan–Boltzmann constant.
pub const STEFAN_BOLTZMANN: PreciseUnit = W.divide(M.pow(2)).divide(K.pow(4)).scaled(5.670_374_419e-8);
/// Rydberg constant.
pub const RYDBERG: PreciseUnit = M.inv().scaled(10_973_731.568_160);
/// Bohr radius.
pub const BOHR_RADIUS: PreciseUnit = M.scaled(5.291_772_109_03e-11);
/// Fine-structure constant (dimensionless).
pub const FINE_STRUCTURE: PreciseUnit = PreciseUnit::ONE.scaled(7.297_352_569_3e-3);
/// Bohr magneton.
pub const BOHR_MAGNETON: PreciseUnit = J.divide(super::si::T).scaled(9.274_010_078_3e-24);
/// Conductance quantum.
pub const CONDUCTANCE_QUANTUM: PreciseUnit = A.divide(super::si::V).scaled(7.748_091_729e-5);

/// Planck length.
pub const PLANCK_LENGTH: PreciseUnit = M.scaled(1.616_255e-35);
/// Planck mass.
pub const PLANCK_MASS: PreciseUnit = KG.scaled(2.176_434e-8);
/// Planck time.
pub const PLANCK_TIME: PreciseUnit = S.scaled(5.391_247e-44);
/// Planck temperature.
pub const PLANCK_TEMPERATURE: PreciseUnit = K.scaled(1.416_784e32);
/// Planck charge.
pub const PLANCK_CHARGE: PreciseUnit = C.scaled(1.875_545_956e-18);
