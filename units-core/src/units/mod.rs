//! Predefined unit constants grouped by family.
//!
//! Every constant is a `const` [`crate::PreciseUnit`] composed from the SI base vectors, so the whole catalogue is
//! evaluated at compile time and can be used in `match`-free lookup tables by downstream crates.
//!
//! ## Modules
//!
//! - [`si`]: base units, coherent derived units, decimal scale factors and common prefixed forms.
//! - [`special`]: error/default/NaN sentinels, per-unit markers, percentages and `√Hz`.
//! - [`length`]: international, US survey, imperial, nautical, astronomical and typographic lengths, plus areas.
//! - [`volume`]: US liquid and dry, imperial and metric kitchen volumes.
//! - [`mass`]: avoirdupois, troy and apothecaries' masses; gravitational force units; textile linear densities.
//! - [`time`]: calendar and astronomical time spans.
//! - [`angle`]: plane and solid angles, `rpm`.
//! - [`temperature`]: flagged offset scales (°C, °F, Réaumur) and Rankine.
//! - [`energy`]: energy, power, pressure and speed.
//! - [`cgs`]: centimetre–gram–second and radiation units.
//! - [`constants`]: physical constants as units.
//! - [`data`]: information units.
//! - [`log`]: logarithmic (equation) units.
//! - [`clinical`]: procedure-defined laboratory units in custom slots.

pub mod angle;
pub mod cgs;
pub mod clinical;
pub mod constants;
pub mod data;
pub mod energy;
pub mod length;
pub mod log;
pub mod mass;
pub mod si;
pub mod special;
pub mod temperature;
pub mod time;
pub mod volume;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn customary_lengths() {
        assert_relative_eq!(length::FT.multiplier(), 0.3048, max_relative = 1e-12);
        assert_relative_eq!(length::MILE.multiplier(), 1609.344, max_relative = 1e-12);
        assert!(length::US_FOOT.multiplier() > length::FT.multiplier());
    }

    #[test]
    fn gallon_is_231_cubic_inches() {
        assert_relative_eq!(volume::GAL.multiplier(), 3.785_411_784e-3, max_relative = 1e-12);
        assert_eq!(volume::GAL.base_units(), si::M.pow(3).base_units());
    }

    #[test]
    fn force_and_pressure() {
        assert_relative_eq!(mass::LBF.multiplier(), 4.448_221_615_260_5, max_relative = 1e-12);
        assert_relative_eq!(energy::PSI.multiplier(), 6894.757_293_168, max_relative = 1e-9);
        assert_eq!(energy::PSI.base_units(), si::PA.base_units());
    }

    #[test]
    fn derived_si_units_compose() {
        assert_eq!(si::N.multiply(si::M), si::J);
        assert_eq!(si::V.multiply(si::A), si::W);
        assert_eq!(si::OHM.multiply(si::SIEMENS), si::ONE);
        assert_eq!(si::W.multiply(si::S), energy::WS);
    }

    #[test]
    fn temperature_flags() {
        assert!(temperature::DEG_F.is_temperature());
        assert!(!temperature::DEG_R.is_temperature());
        assert_relative_eq!(temperature::DEG_F.multiplier(), temperature::DEG_R.multiplier());
    }

    #[test]
    fn clinical_slots_are_distinct() {
        assert_ne!(clinical::IU, clinical::ARB_UNIT);
        assert_ne!(clinical::PFU, clinical::CFU);
        assert!(crate::custom::is_custom_count_unit(clinical::HPF.base_units()));
        assert!(crate::custom::is_custom_unit(clinical::IU.base_units()));
    }

    #[test]
    fn sentinels() {
        assert!(special::ERROR.is_error());
        assert!(special::INVALID.is_error());
        assert!(special::DEFUNIT.is_default());
        assert!(!special::RATIO.is_error());
    }

    #[test]
    fn root_hertz_squares_back_to_hertz() {
        assert_eq!(special::ROOT_HERTZ.pow(2), si::HZ);
    }
}
