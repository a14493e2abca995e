//! Integration tests for the `units` facade: strings in, units and measurements out, and back again.

use approx::assert_relative_eq;
use parking_lot::Mutex;
use proptest::prelude::*;
use std::io::Write;
use units::*;
use units_core::units::length::FT;
use units_core::units::si::{CURRENCY, J, KG, KM, KWH, L, M, MM, N, PA, S, W};
use units_core::UnitData;

// The registry and commodity tables are process-wide; tests that touch them take this lock.
static SHARED_STATE: Mutex<()> = Mutex::new(());

fn p(s: &str) -> PreciseUnit {
    parse(s, MatchFlags::DEFAULT)
}

#[test]
fn everyday_measurements() {
    let m = parse_measurement("45 m", MatchFlags::DEFAULT);
    assert_eq!((m.value(), m.units()), (45.0, M));

    let m = parse_measurement("23.7 m/s", MatchFlags::DEFAULT);
    assert_eq!(m.value(), 23.7);
    assert_eq!(m.units(), M.divide(S));

    assert_eq!(p("$9.99"), CURRENCY.scaled(9.99));
    assert_eq!(p("$ 9.99"), CURRENCY.scaled(9.99));
    assert_eq!(p("kWh"), KWH);
    assert_eq!(p("ft^2"), FT.pow(2));
}

#[test]
fn newton_meters_render_as_joules() {
    assert_eq!(p("99.9 N * m"), N.multiply(M).scaled(99.9));
    let m = parse_measurement("99.9 N * m", MatchFlags::DEFAULT);
    assert_eq!(m.to_string(), "99.9 J");
}

#[test]
fn unrecognized_text_is_invalid() {
    assert!(p("345 blarg").is_error());
    assert!(try_parse("345 blarg", MatchFlags::DEFAULT).is_err());
    assert!(matches!(
        try_parse("1e500 m", MatchFlags::DEFAULT),
        Err(UnitsError::NumericOverflow(_))
    ));
}

#[test]
fn spelled_out_units() {
    assert_eq!(p("kilometers"), KM);
    assert_eq!(p("millimeters"), MM);
    assert_eq!(p("joules"), J);
    assert_eq!(p("kg/m^3"), KG.divide(M.pow(3)));
}

#[test]
fn case_insensitive_matching() {
    let ci = MatchFlags::CASE_INSENSITIVE;
    assert_eq!(parse("KG", ci), KG);
    assert_eq!(parse("METER", ci), M);
    assert_eq!(parse("PASCAL", ci), PA);
}

#[test]
fn generated_strings() {
    assert_eq!(to_string(M, MatchFlags::DEFAULT), "m");
    assert_eq!(to_string(M.divide(S), MatchFlags::DEFAULT), "m/s");
    assert_eq!(to_string(KM, MatchFlags::DEFAULT), "km");
    assert_eq!(to_string(S.inv(), MatchFlags::DEFAULT), "Hz");
    assert_eq!(to_string(KG.scaled(1e-3), MatchFlags::DEFAULT), "g");
    assert_eq!(to_string(CURRENCY, MatchFlags::DEFAULT), "$");
    assert_eq!(to_string(PreciseUnit::ONE, MatchFlags::DEFAULT), "");
}

#[test]
fn round_trips_through_strings() {
    for unit in [M, KG, J, W, PA, L, KWH, FT.pow(2), KG.divide(M.pow(3)), M.divide(S.pow(2)), CURRENCY.divide(KWH)] {
        let text = to_string(unit, MatchFlags::DEFAULT);
        assert_eq!(p(&text), unit, "{:?}", text);
    }
}

#[test]
fn commodities_survive_a_round_trip() {
    let _guard = SHARED_STATE.lock();
    let unit = p("kg{gold}");
    assert_eq!(unit.commodity(), commodity::encode("gold"));
    let text = to_string(unit, MatchFlags::DEFAULT);
    assert_eq!(text, "kg{gold}");
    assert_eq!(p(&text), unit);
}

#[test]
fn conversions() {
    let m = parse_measurement("3 ft", MatchFlags::DEFAULT);
    assert_relative_eq!(m.value_as(M), 0.9144, max_relative = 1e-12);
    assert_relative_eq!(convert(1.0, KWH, J), 3.6e6, max_relative = 1e-12);
    assert!(convert(1.0, KG, M).is_nan());
}

#[test]
fn measurement_kinds() {
    assert_eq!(default_unit("Pressure"), PA);
    assert_eq!(default_unit("energy"), J);
    assert!(default_unit("not a kind").is_error());
}

#[test]
fn config_file_registers_units() {
    let _guard = SHARED_STATE.lock();
    registry::clear_custom_units();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[parse]
single_slash = true

[[custom_units]]
name = "widget"
definition = "3.5 kg"

[[commodities]]
name = "bananas"
code = 1234
"#
    )
    .unwrap();

    let config = UnitsConfig::from_file(file.path()).unwrap();
    assert!(config.match_flags().contains(MatchFlags::SINGLE_SLASH));
    config.apply().unwrap();

    assert_eq!(p("widget"), KG.scaled(3.5));
    assert_eq!(to_string(KG.scaled(3.5), MatchFlags::DEFAULT), "widget");
    assert_eq!(commodity::encode("bananas"), 1234);

    registry::clear_custom_units();
    assert!(registry::custom_unit_lookup("widget").is_none());
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = UnitsConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, UnitsError::ConfigurationError(_)));
}

const SIMPLE_UNITS: &[&str] = &["m", "kg", "s", "N", "J", "W", "Pa", "ft", "lb", "kWh", "mL", "Hz"];

proptest! {
    #[test]
    fn value_and_unit_strings(v in 0.001f64..1e6, idx in 0..SIMPLE_UNITS.len()) {
        let name = SIMPLE_UNITS[idx];
        let m = parse_measurement(&format!("{} {}", v, name), MatchFlags::DEFAULT);
        prop_assert_eq!(m.value(), v);
        prop_assert_eq!(Some(m.units()), table::lookup(name));
    }

    #[test]
    fn mechanical_units_round_trip(a in -2i32..=2, b in -2i32..=2, c in -2i32..=2) {
        let unit = PreciseUnit::from_base(UnitData::new(a, b, c, 0, 0, 0, 0, 0, 0, 0, false, false, false, false));
        let text = to_string(unit, MatchFlags::DEFAULT);
        prop_assert_eq!(p(&text), unit, "{:?}", text);
    }
}
