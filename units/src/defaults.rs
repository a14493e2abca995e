//! Default units for named kinds of measurement.
//!
//! Data sources often label a column with what it measures ("length", "pressure", "mass concentration") rather
//! than a unit. [`default_unit`] maps such a label to the SI unit a value of that kind is assumed to be in.

use crate::commodity::PARTICLES;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use units_core::si::*;
use units_core::special::{ASD, DEFUNIT, ERROR, PU};
use units_core::units::data::BIT;
use units_core::units::log::{NEPER, PH};
use units_core::PreciseUnit;

const MEASUREMENT_TYPES: &[(&str, PreciseUnit)] = &[
    ("", DEFUNIT),
    ("arb", DEFUNIT),
    ("arbitrary", DEFUNIT),
    ("length", M),
    ("len", M),
    ("distance", M),
    ("height", M),
    ("depth", M),
    ("width", M),
    ("diameter", M),
    ("thickness", M),
    ("gauge", M),
    ("invlen", M.inv()),
    ("volume", M.pow(3)),
    ("dryvolume", M.pow(3)),
    ("vol", M.pow(3)),
    ("fluidvolume", L),
    ("time", S),
    ("duration", S),
    ("mass", KG),
    ("current", A),
    ("electriccurrent", A),
    ("temperature", K),
    ("temp", K),
    ("thermodynamictemperature", K),
    ("amount", MOL),
    ("amountofsubstance", MOL),
    ("substance", MOL),
    ("sub", MOL),
    ("luminousintensity", CD),
    ("area", M.pow(2)),
    ("speed", M.divide(S)),
    ("velocity", M.divide(S)),
    ("vel", M.divide(S)),
    ("wavenumber", M.inv()),
    ("acceleration", M.divide(S.pow(2))),
    ("accel", M.divide(S.pow(2))),
    ("density", KG.divide(M.pow(3))),
    ("massconcentration", KG.divide(M.pow(3))),
    ("surfacedensity", KG.divide(M.pow(2))),
    ("lineardensity", KG.divide(M)),
    ("lineicmass", KG.divide(M)),
    ("linearmassdensity", KG.divide(M)),
    ("armass", KG.divide(M.pow(2))),
    ("specificvolume", M.pow(3).divide(KG)),
    ("vcnt", L.divide(KG)),
    ("currentdensity", A.divide(M.pow(2))),
    ("magneticfieldstrength", A.divide(M)),
    ("magneticfieldintensity", A.divide(M)),
    ("magnetictension", PA.divide(M)),
    ("concentration", MOL.divide(M.pow(3))),
    ("luminance", CD.divide(M.pow(2))),
    ("brightness", CD.divide(M.pow(2))),
    ("lum.intensitydensity", CD.divide(M.pow(2))),
    ("planeangle", RAD),
    ("angle", RAD),
    ("solidangle", RAD.pow(2)),
    ("frequency", HZ),
    ("freq", HZ),
    ("force", N),
    ("weight", N),
    ("pressure", PA),
    ("pres", PA),
    ("press", PA),
    ("stress", PA),
    ("energy", J),
    ("eng", J),
    ("enrg", J),
    ("work", J),
    ("heat", J),
    ("power", W),
    ("powerlevel", W.multiply(NEPER)),
    ("radiantflux", W),
    ("electriccharge", C),
    ("charge", C),
    ("quantityofelectricity", C),
    ("voltage", V),
    ("electricalpotential", V),
    ("elpot", V),
    ("electricpotential", V),
    ("electricpotentiallevel", V.multiply(NEPER)),
    ("logrtoelp", V.multiply(NEPER)),
    ("emf", V),
    ("capacitance", F),
    ("electriccapacitance", F),
    ("resistance", OHM),
    ("impedance", OHM),
    ("reactance", OHM),
    ("conductance", SIEMENS),
    ("electricresistance", OHM),
    ("electricresistivity", OHM.multiply(M)),
    ("electricimpedance", OHM),
    ("electricreactance", OHM),
    ("electricalconductance", SIEMENS),
    ("electricconductance", SIEMENS),
    ("magneticflux", WB),
    ("fluxofmagneticinduction", WB),
    ("magneticfluxdensity", T),
    ("magneticfield", T),
    ("magnetic", T),
    ("inductance", H),
    ("luminousflux", LM),
    ("illuminance", LX),
    ("radioactivity", BQ),
    ("activity", BQ),
    ("absorbeddose", GY),
    ("energydose", GY),
    ("engcnt", GY),
    ("ionizingradiationdose", GY),
    ("iondose", GY),
    ("absorbeddoserate", GY.divide(S)),
    ("equivalentdose", SV),
    ("doseequivalent", SV),
    ("catalyticactivity", KAT),
    ("cact", KAT),
    ("specificenergy", J.divide(KG)),
    ("engcnc", J.divide(M.pow(3))),
    ("engmass", J.divide(M.pow(3))),
    ("massicenergy", J.divide(M.pow(3))),
    ("momentofforce", N.multiply(M)),
    ("moment", N.multiply(M)),
    ("torque", N.multiply(M)),
    ("angularvelocity", RAD.divide(S)),
    ("angularacceleration", RAD.divide(S.pow(2))),
    ("surfacetension", N.divide(M)),
    ("stiffness", N.divide(M)),
    ("elasticity", N.divide(M.pow(2))),
    ("compliance", M.divide(N)),
    ("compli", M.divide(N)),
    ("electricfield", V.divide(M)),
    ("permittivity", F.divide(M)),
    ("electricpermittivity", F.divide(M)),
    ("permeability", H.divide(M)),
    ("magneticpermeability", H.divide(M)),
    ("exposure", C.divide(KG)),
    ("heatcapacity", J.divide(K)),
    ("entropy", J.divide(K)),
    ("dynamicviscosity", PA.multiply(S)),
    ("viscosity", PA.multiply(S)),
    ("visc", PA.multiply(S).inv()),
    ("fluidity", PA.multiply(S)),
    ("kinematicviscosity", M.pow(2).divide(S)),
    ("fluidresistance", PA.multiply(S).divide(M.pow(3))),
    ("radiantintensity", W.divide(RAD.pow(2))),
    ("radiance", W.divide(RAD.pow(2)).divide(M.pow(2))),
    ("dimless", ONE),
    ("ratio", ONE),
    ("fraction", ONE),
    ("number", ONE),
    ("nfr", ONE),
    ("num", ONE),
    ("impulse", N.multiply(S)),
    ("imp", N.multiply(S)),
    ("mcnc", KG.divide(M.pow(3))),
    ("scnc", MOL.divide(M.pow(3))),
    ("substanceconcentration", MOL.divide(M.pow(3))),
    ("scnt", MOL.divide(KG)),
    ("ncnc", M.pow(3).inv()),
    ("ncncn", M.pow(3).inv()),
    ("ncnt", KG.inv()),
    ("level", NEPER),
    ("logrto", NEPER),
    ("arvol", M.pow(3).divide(M.pow(2))),
    ("arsub", MOL.divide(M.pow(2))),
    ("lineicvolume", M.pow(3).divide(M)),
    ("lineicnumber", M.inv()),
    ("refraction", M.inv()),
    ("naric", M.pow(2).inv()),
    ("nlen", M.inv()),
    ("fluence", M.pow(2).inv()),
    ("acidity", PH),
    ("mcnt", PU.multiply(M)),
    ("ccnt", KAT.divide(KG)),
    ("ccnc", KAT.divide(L)),
    ("acnc", L.inv()),
    ("velcnc", M.divide(S).divide(L)),
    ("mrat", KG.divide(S)),
    ("osmol", PreciseUnit::with_all(MOL.base_units(), PARTICLES, 1.0)),
    ("massfraction", PU.multiply(KG)),
    ("mfr", PU.multiply(KG)),
    ("amplitudespectraldensity", ASD),
    ("signaltransmissionrate", BIT.divide(S)),
    ("entsub", MOL),
    ("mnum", KG),
    ("cmass", KG.divide(KAT)),
];

static DEFAULTS: Lazy<HashMap<&'static str, PreciseUnit>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(MEASUREMENT_TYPES.len());
    for &(kind, unit) in MEASUREMENT_TYPES {
        map.entry(kind).or_insert(unit);
    }
    map
});

/// Default unit for a kind of measurement such as `"length"`, `"Electric Current"` or `"speed of light"`.
///
/// Case and spaces are ignored. When the label is not known directly, these rules are tried in order:
///
/// - `X of Y` uses `X`;
/// - a bracketed qualifier is dropped: `pressure (gauge)`;
/// - an `inv` or `inverse` prefix inverts the rest: `invtime`;
/// - anything ending in `rto` or `fr` (ratio, fraction) is dimensionless;
/// - a trailing plural `s` is dropped.
///
/// # Returns
/// The unit, or the error unit when the label is not recognized.
pub fn default_unit(kind: &str) -> PreciseUnit {
    let kind: String = kind.chars().filter(|c| *c != ' ').collect::<String>().to_lowercase();
    lookup_kind(&kind)
}

fn lookup_kind(kind: &str) -> PreciseUnit {
    if let Some(unit) = DEFAULTS.get(kind) {
        return *unit;
    }
    if let Some(pos) = kind.rfind("of") {
        return lookup_kind(&kind[..pos]);
    }
    if let Some(pos) = kind.find(['(', '[', '{']) {
        return lookup_kind(&kind[..pos]);
    }
    for prefix in ["inverse", "inv"] {
        if let Some(rest) = kind.strip_prefix(prefix) {
            let unit = lookup_kind(rest);
            if !unit.is_error() {
                return unit.inv();
            }
        }
    }
    if kind.ends_with("rto") || kind.ends_with("fr") {
        return ONE;
    }
    if let Some(singular) = kind.strip_suffix('s') {
        if !singular.is_empty() {
            return lookup_kind(singular);
        }
    }
    ERROR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_kinds() {
        assert_eq!(default_unit("length"), M);
        assert_eq!(default_unit("Electric Current"), A);
        assert_eq!(default_unit("speed"), M.divide(S));
        assert_eq!(default_unit("torque"), J);
        assert!(default_unit("").is_default());
    }

    #[test]
    fn first_entry_wins_for_duplicates() {
        assert_eq!(default_unit("specificenergy"), J.divide(KG));
    }

    #[test]
    fn fallbacks() {
        assert_eq!(default_unit("speed of light"), M.divide(S));
        assert_eq!(default_unit("pressure (gauge)"), PA);
        assert_eq!(default_unit("invtime"), HZ);
        assert_eq!(default_unit("inverse length"), M.inv());
        assert_eq!(default_unit("massrto"), ONE);
        assert_eq!(default_unit("volfr"), ONE);
        assert_eq!(default_unit("Lengths"), M);
    }

    #[test]
    fn commodities_and_flags() {
        assert_eq!(default_unit("osmol").commodity(), PARTICLES);
        assert!(default_unit("mfr").is_per_unit());
    }

    #[test]
    fn unknown_kinds() {
        assert!(default_unit("flavour").is_error());
        assert!(default_unit("xyz").is_error());
    }
}
