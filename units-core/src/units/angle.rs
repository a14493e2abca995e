//! Plane angle units and rotational frequency.
//!
//! The radian is a base dimension here (not dimensionless), which lets `rpm` and `Hz` stay distinguishable.

use super::si::{RAD, S};
use crate::PreciseUnit;
use core::f64::consts::PI;

pub use super::si::SR;

/// Degree of arc.
pub const DEG: PreciseUnit = RAD.scaled(PI / 180.0);
/// Gradian (gon).
pub const GON: PreciseUnit = DEG.scaled(0.9);
/// Arc minute.
pub const ARCMIN: PreciseUnit = DEG.scaled(1.0 / 60.0);
/// Arc second.
pub const ARCSEC: PreciseUnit = ARCMIN.scaled(1.0 / 60.0);
/// Milliarcsecond.
pub const MAS: PreciseUnit = ARCSEC.scaled(1e-3);
/// Full revolution.
pub const REV: PreciseUnit = RAD.scaled(2.0 * PI);
/// Binary radian (1/256 turn).
pub const BRAD: PreciseUnit = REV.scaled(1.0 / 256.0);
/// NATO angular mil (1/6400 turn).
pub const ANGULAR_MIL: PreciseUnit = REV.scaled(1.0 / 6400.0);
/// Compass point (1/32 turn).
pub const COMPASS_POINT: PreciseUnit = REV.scaled(1.0 / 32.0);
/// Hour angle (15°).
pub const HOUR_ANGLE: PreciseUnit = DEG.scaled(15.0);
/// Square degree.
pub const SQUARE_DEGREE: PreciseUnit = DEG.pow(2);
/// Spat (full sphere solid angle).
pub const SPAT: PreciseUnit = SR.scaled(4.0 * PI);

/// Revolutions per minute, `(π/30) rad/s`.
pub const RPM: PreciseUnit = RAD.divide(S).scaled(PI / 30.0);
