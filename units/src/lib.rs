//! Free-form unit strings to dimension-typed values, and back.
//!
//! `units` reads the unit notation found in real data (`"45 m"`, `"23.7 m/s"`, `"$9.99"`, `"kWh"`, `"ft^2"`,
//! `"square feet"`, `"mL{water}"`) into a [`PreciseUnit`] and renders a [`PreciseUnit`] back into a compact string.
//! The value types themselves live in [`units_core`] and are re-exported here.
//!
//! # Quick start
//!
//! ```rust
//! use units::{parse, parse_measurement, to_string, MatchFlags};
//! use units_core::units::si::{KG, M, S};
//!
//! let speed = parse("m/s", MatchFlags::DEFAULT);
//! assert_eq!(speed, M.divide(S));
//! assert_eq!(to_string(speed, MatchFlags::DEFAULT), "m/s");
//!
//! let torque = parse_measurement("99.9 N * m", MatchFlags::DEFAULT);
//! assert_eq!(torque.to_string(), "99.9 J");
//!
//! assert_eq!(parse("kilograms", MatchFlags::DEFAULT), KG);
//! assert!(parse("345 blarg", MatchFlags::DEFAULT).is_error());
//! ```
//!
//! # How parsing works
//!
//! A string is first looked up literally, then normalized ([`normalize`]) and looked up again. After that an
//! ordered list of strategies takes turns: operator splitting, powers, SI prefixes, plural and case variants,
//! modifier words (`square`, `cubic`, `US`, `British`), commodity braces and finally splitting merged tokens.
//! Nested attempts draw on fixed recursion and partition budgets so every input terminates.
//!
//! Failure is a value, not a panic: unrecognized text yields the error unit. The `try_` variants turn that into a
//! [`UnitsError`].
//!
//! # Shared state
//!
//! Two process-wide tables can be changed at run time: the [`registry`] of custom units and the commodity
//! names in [`commodity`]. Both sit behind read-write locks. A [`UnitsConfig`] file can fill them at startup.
//!
//! # Feature flags
//!
//! - `serde`: serialization for the value types and [`Measurement`].

// ─────────────────────────────────────────────────────────────────────────────
// Modules
// ─────────────────────────────────────────────────────────────────────────────

pub mod commodity;
mod config;
mod defaults;
mod error;
pub mod flags;
mod generate;
mod measurement;
pub mod normalize;
mod parse;
pub mod registry;
pub mod table;

// ─────────────────────────────────────────────────────────────────────────────
// Public API
// ─────────────────────────────────────────────────────────────────────────────

pub use config::{CommodityEntry, CustomUnitEntry, ParseSettings, UnitsConfig};
pub use defaults::default_unit;
pub use error::{Result, UnitsError};
pub use flags::MatchFlags;
pub use generate::to_string;
pub use measurement::{
    convert, measurement_to_string, parse_measurement, try_parse_measurement, Measurement,
};
pub use parse::{parse, try_parse};

pub use units_core::{unit_cast, PreciseUnit, Unit, UnitData};
