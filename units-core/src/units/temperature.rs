//! Temperature units.
//!
//! Interval and absolute scales share the kelvin dimension. Scales with an offset zero (Celsius, Fahrenheit,
//! Réaumur) carry the generic `flag`, which [`crate::PreciseUnit::is_temperature`] reports and which conversion
//! routines use to apply the affine part. Rankine has no offset and is therefore unflagged.
//!
//! ```rust
//! use units_core::units::temperature::{DEG_C, DEG_F, K};
//!
//! assert!(DEG_C.is_temperature());
//! assert!(DEG_F.is_temperature());
//! assert!(!K.is_temperature());
//! assert!(DEG_C.has_same_base(K));
//! ```

use crate::PreciseUnit;

pub use super::si::K;

/// Degree Celsius.
pub const DEG_C: PreciseUnit = PreciseUnit::from_base(K.base_units().with_flag(true));
/// Degree Fahrenheit.
pub const DEG_F: PreciseUnit = PreciseUnit::new(K.base_units().with_flag(true), 5.0 / 9.0);
/// Degree Rankine.
pub const DEG_R: PreciseUnit = K.scaled(5.0 / 9.0);
/// Degree Réaumur.
pub const REAUMUR: PreciseUnit = PreciseUnit::new(K.base_units().with_flag(true), 5.0 / 4.0);
/// Millikelvin.
pub const MK: PreciseUnit = K.scaled(1e-3);

/// Offset of the Celsius zero on the kelvin scale.
pub const CELSIUS_ZERO_K: f64 = 273.15;
/// Offset of the Fahrenheit zero on the Rankine scale.
pub const FAHRENHEIT_ZERO_R: f64 = 459.67;
