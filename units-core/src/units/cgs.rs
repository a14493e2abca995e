//! Centimetre–gram–second units, radiation units and a few photometric relics.

use super::si::{A, BQ, C, CD, GY, J, KG, LX, M, N, PA, S, SV, T, WB};
use crate::PreciseUnit;
use core::f64::consts::PI;

/// Dyne.
pub const DYN: PreciseUnit = N.scaled(1e-5);
/// Erg.
pub const ERG: PreciseUnit = J.scaled(1e-7);
/// Barye.
pub const BARYE: PreciseUnit = PA.scaled(0.1);
/// Gal (acceleration).
pub const GAL_ACCEL: PreciseUnit = M.divide(S.pow(2)).scaled(0.01);
/// Poise.
pub const POISE: PreciseUnit = PA.multiply(S).scaled(0.1);
/// Stokes.
pub const STOKES: PreciseUnit = M.pow(2).divide(S).scaled(1e-4);
/// Kayser.
pub const KAYSER: PreciseUnit = M.inv().scaled(100.0);
/// Gauss.
pub const GAUSS: PreciseUnit = T.scaled(1e-4);
/// Maxwell.
pub const MAXWELL: PreciseUnit = WB.scaled(1e-8);
/// Oersted.
pub const OERSTED: PreciseUnit = A.divide(M).scaled(1000.0 / (4.0 * PI));
/// Gilbert.
pub const GILBERT: PreciseUnit = A.scaled(10.0 / (4.0 * PI));
/// Biot (abampere).
pub const BIOT: PreciseUnit = A.scaled(10.0);
/// Statcoulomb (franklin).
pub const STATCOULOMB: PreciseUnit = C.scaled(3.335_640_951e-10);
/// Phot.
pub const PHOT: PreciseUnit = LX.scaled(1e4);
/// Stilb.
pub const STILB: PreciseUnit = CD.divide(M.pow(2)).scaled(1e4);
/// Lambert.
pub const LAMBERT: PreciseUnit = CD.divide(M.pow(2)).scaled(1e4 / PI);
/// Debye.
pub const DEBYE: PreciseUnit = C.multiply(M).scaled(3.335_64e-30);
/// Langley.
pub const LANGLEY: PreciseUnit = J.divide(M.pow(2)).scaled(41_840.0);

/// Curie.
pub const CURIE: PreciseUnit = BQ.scaled(3.7e10);
/// Rutherford.
pub const RUTHERFORD: PreciseUnit = BQ.scaled(1e6);
/// Roentgen.
pub const ROENTGEN: PreciseUnit = C.divide(KG).scaled(2.58e-4);
/// Radiation absorbed dose.
pub const RAD_DOSE: PreciseUnit = GY.scaled(0.01);
/// Roentgen equivalent man.
pub const REM: PreciseUnit = SV.scaled(0.01);
