//! Core value types for run-time physical units.
//!
//! `units-core` provides the numeric representation that the `units` string engine parses into and generates from:
//!
//! - A dimension vector [`UnitData`]: ten signed base-dimension exponents and four marker flags packed into a `u32`.
//! - A single-precision unit [`Unit`] (dimension vector plus `f32` multiplier), compact enough for lookup keys.
//! - A double-precision unit [`PreciseUnit`] (dimension vector, commodity code and `f64` multiplier).
//! - Encoders for opaque extension slots (custom, custom-count and equation units) in [`custom`].
//! - A catalogue of `const` unit values in [`units`].
//!
//! Most users should depend on `units` (the facade crate) unless they only need the value types.
//!
//! # What this crate solves
//!
//! - Exact, allocation-free composition of units at run time (`*`, `/`, `pow`, `root`).
//! - Tolerant equality: multipliers are compared after rounding so accumulated float drift does not break matching.
//! - A stable 32-bit layout for the dimension vector that can be hashed, stored and compared bitwise.
//!
//! # What this crate does not try to solve
//!
//! - Parsing or printing unit strings; that lives in `units`.
//! - Dimensional analysis beyond exponent bookkeeping. Exponents that leave their field range wrap around silently.
//! - Affine conversions. Offset temperature scales are only *marked* with a flag here.
//!
//! # Quick start
//!
//! ```rust
//! use units_core::units::si::{J, M, N, S};
//! use units_core::units::length::FT;
//! use units_core::{unit_cast, Unit};
//!
//! let torque = N.multiply(M);
//! assert_eq!(torque, J);
//!
//! let speed = FT.divide(S);
//! assert!(speed.has_same_base(M.divide(S)));
//!
//! let single: Unit = unit_cast(speed);
//! assert_eq!(single, speed);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `units-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! units-core = { version = "0.3.0", default-features = false }
//! ```
//!
//! Rounding and root extraction always go through `libm`, so results are bit-identical with and without `std`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: derives `Serialize`/`Deserialize` for [`UnitData`], [`Unit`] and [`PreciseUnit`]; the dimension vector
//!   serializes as its raw `u32`.
//!
//! # Panics and errors
//!
//! This crate does not define an error type. Invalid operations (for example the square root of `m^3`) return the
//! error sentinel, which [`Unit::is_error`] and [`PreciseUnit::is_error`] report. Nothing in this crate panics.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`. The bit layout of
//! [`UnitData`] is considered part of the public contract.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

pub mod custom;
mod dimension;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::UnitData;
pub use unit::{cround, cround_precise, is_unit_cast_lossless, power_const, unit_cast, PreciseUnit, Unit};

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by family)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit constants (grouped by family).
pub mod units;

pub use units::si;
pub use units::special;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::{FT, IN};
    use crate::units::si::{HZ, KG, M, S, W};
    use proptest::prelude::*;

    #[test]
    fn unit_cast_round_trips_simple_units() {
        assert!(is_unit_cast_lossless(M));
        assert!(is_unit_cast_lossless(KG.scaled(0.5)));
        assert!(!is_unit_cast_lossless(FT.divide(IN).scaled(0.1)));
    }

    #[test]
    fn precise_and_single_compare_through_f32() {
        let w = unit_cast(W);
        assert_eq!(W, w);
        assert_eq!(w, W);
    }

    #[test]
    fn commodity_survives_plain_unit_arithmetic() {
        let cells = M.with_commodity(7);
        let per_second = cells / unit_cast(S);
        assert_eq!(per_second.commodity(), 7);
        assert!(per_second.has_same_base(M.divide(S)));
    }

    #[test]
    fn inverse_of_frequency_is_time() {
        assert_eq!(HZ.inv(), S);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn dimension_vector_serializes_as_raw_bits() {
        let json = serde_json::to_string(&M.base_units()).unwrap();
        assert_eq!(json, "1");
        let back: UnitData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, M.base_units());

        let json = serde_json::to_string(&W).unwrap();
        let back: PreciseUnit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, W);
    }

    proptest! {
        #[test]
        fn multiplier_rounding_is_stable(m in 1e-6f64..1e6) {
            let u = M.scaled(m);
            prop_assert_eq!(u, u.multiply(S).divide(S));
        }
    }
}
