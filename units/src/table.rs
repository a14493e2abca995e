//! Recognition table.
//!
//! Two static dictionaries, both built once on first use:
//!
//! - the forward table maps a literal key (`"kWh"`, `"[FT_US]"`, `"°C"`, `"fl oz"`, ...) to a [`PreciseUnit`];
//! - the reverse table maps a [`Unit`] to the preferred name the generator prints for it.
//!
//! Both are assembled from grouped `const` slices. When a key (or, for the reverse table, a unit) appears more than
//! once, the first listing wins.

use crate::commodity;
use core::f64::consts::PI;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use units_core::units::si::*;
use units_core::units::{
    angle, cgs, clinical, constants, data, energy, length, log, mass, special, temperature, time, volume,
};
use units_core::{unit_cast, PreciseUnit, Unit};

type Entry = (&'static str, PreciseUnit);

const TAU: f64 = 2.0 * PI;

// ─────────────────────────────────────────────────────────────────────────────
// Units without a catalogue constant
// ─────────────────────────────────────────────────────────────────────────────

const PI_UNIT: PreciseUnit = ONE.scaled(PI);
const MOLARITY: PreciseUnit = MOL.divide(L);
const ENZYME_UNIT: PreciseUnit = MOL.scaled(1e-6).divide(MIN);
const CANDLE: PreciseUnit = CD.scaled(0.981);
const AB_FARAD: PreciseUnit = F.scaled(1e9);
const STAT_FARAD: PreciseUnit = F.scaled(1.112_650_056e-12);
const AB_OHM: PreciseUnit = OHM.scaled(1e-9);
const STAT_OHM: PreciseUnit = OHM.scaled(8.987_551_787e11);
const AB_HENRY: PreciseUnit = H.scaled(1e-9);
const STAT_HENRY: PreciseUnit = H.scaled(8.987_551_787e11);
const AB_VOLT: PreciseUnit = V.scaled(1e-8);
const STAT_VOLT: PreciseUnit = V.scaled(299.792_458);
const JANSKY: PreciseUnit = W.divide(M.pow(2)).divide(HZ).scaled(1e-26);
const FOOT_CANDLE: PreciseUnit = LM.divide(length::FT.pow(2));
const REVOLUTION: PreciseUnit = RAD.scaled(TAU);
const SPHERE: PreciseUnit = SR.scaled(4.0 * PI);
const CFM: PreciseUnit = length::FT.pow(3).divide(MIN);
const FOEB: PreciseUnit = J.scaled(6.117_863_2e9);
const TON_HOUR: PreciseUnit = energy::TON_COOLING.multiply(HR);
const EER: PreciseUnit = energy::BTU_IT.divide(W.multiply(HR));
const THERMIE: PreciseUnit = J.scaled(4.1868e6);
const UNIT_POLE: PreciseUnit = WB.scaled(1.256_637e-7);
const ROENTGEN_UNIT: PreciseUnit = C.divide(KG).scaled(2.58e-4);
const KNOT_BR: PreciseUnit = length::IMP_NAUTICAL_MILE.divide(HR);
const CARAT_GOLD: PreciseUnit = ONE.scaled(1.0 / 24.0).with_commodity(commodity::GOLD);
const WOOD_UNIT: PreciseUnit = PA.multiply(S).divide(M.pow(3)).scaled(7.999_342e6);
const PRU: PreciseUnit = PA.multiply(S).divide(M.pow(3)).scaled(1.333_224e8);
const PRISM_DIOPTER: PreciseUnit = RAD.scaled(0.01);
const MICROLITER: PreciseUnit = L.scaled(1e-6);
const SPL_REFERENCE: PreciseUnit = PA.scaled(2e-5);
const TISSUE_DOSE: PreciseUnit = clinical::PFU.scaled(0.69);

// ─────────────────────────────────────────────────────────────────────────────
// Forward table
// ─────────────────────────────────────────────────────────────────────────────

const NUMBERS: &[Entry] = &[
    ("", special::DEFUNIT),
    ("[]", special::DEFUNIT),
    ("def", special::DEFUNIT),
    ("default", special::DEFUNIT),
    ("defunit", special::DEFUNIT),
    ("1", ONE),
    ("one", ONE),
    ("inf", special::INFINITE),
    ("infinity", special::INFINITE),
    ("infinite", special::INFINITE),
    ("\u{221e}", special::INFINITE),
    ("nan", special::NAN),
    ("NaN", special::NAN),
    ("NaN%", special::NAN),
    ("NAN", special::NAN),
    ("NaNQ", special::NAN),
    ("NaNS", special::NAN),
    ("qNaN", special::NAN),
    ("sNaN", special::NAN),
    ("1.#SNAN", special::NAN),
    ("1.#QNAN", special::NAN),
    ("1.#IND", special::NAN),
    ("0.1", DECI),
    (".1", DECI),
    ("deci", DECI),
    ("0.01", CENTI),
    (".01", CENTI),
    ("centi", CENTI),
    ("0.001", MILLI),
    (".001", MILLI),
    ("milli", MILLI),
    ("1e-3", MILLI),
    ("1e-6", MICRO),
    ("micro", MICRO),
    ("1e-9", NANO),
    ("1e-12", PICO),
    ("1e-15", FEMTO),
    ("1e-18", ATTO),
    ("nano", NANO),
    ("pico", PICO),
    ("femto", FEMTO),
    ("atto", ATTO),
    ("10", TEN),
    ("ten", TEN),
    ("two", ONE.scaled(2.0)),
    ("twenty", ONE.scaled(20.0)),
    ("twelve", ONE.scaled(12.0)),
    ("eight", ONE.scaled(8.0)),
    ("100", HUNDRED),
    ("hundred", HUNDRED),
    ("fifty", ONE.scaled(50.0)),
    ("centum", HUNDRED),
    ("1000", KILO),
    ("thousand", KILO),
    ("1000000", MEGA),
    ("million", MEGA),
    ("1000000000", GIGA),
    ("billion", GIGA),
    ("trillion", TERA),
    ("quadrillion", PETA),
    ("1e3", KILO),
    ("1e6", MEGA),
    ("1e9", GIGA),
    ("1e12", TERA),
    ("1e15", PETA),
    ("1e18", EXA),
    ("kilo", KILO),
    ("mega", MEGA),
    ("giga", GIGA),
    ("tera", TERA),
    ("peta", PETA),
    ("exa", EXA),
    ("%", special::PERCENT),
    ("percent", special::PERCENT),
    ("percentage", special::PERCENT),
    ("pct", special::PERCENT),
    ("permille", MILLI),
    ("\u{2030}", MILLI),
    ("bp", MILLI.scaled(0.1)),
    ("basispoint", MILLI.scaled(0.1)),
    ("\u{2031}", MILLI.scaled(0.1)),
    ("pi", PI_UNIT),
    ("PI", PI_UNIT),
    ("Pi", PI_UNIT),
    ("[pi]", PI_UNIT),
    ("[PI]", PI_UNIT),
    ("thenumberpi", PI_UNIT),
    ("\u{3c0}", PI_UNIT),
    ("half", ONE.scaled(0.5)),
    ("quarter", ONE.scaled(0.25)),
    ("third", ONE.scaled(1.0 / 3.0)),
    ("fourth", ONE.scaled(0.25)),
    ("fifth", ONE.scaled(0.2)),
    ("sixth", ONE.scaled(1.0 / 6.0)),
    ("eighth", ONE.scaled(0.125)),
    ("tenth", ONE.scaled(0.1)),
    ("ratio", special::RATIO),
    ("rat", special::RATIO),
    ("ERR", special::ERROR),
    ("ERROR", special::ERROR),
    ("error", special::ERROR),
    ("br", special::ERROR),
    ("pu", special::PU),
    ("perunit", special::PU),
    ("flag", special::FLAG),
    ("eflag", special::EFLAG),
];

const SI_UNITS: &[Entry] = &[
    ("m", M),
    ("Sm", M),
    ("meter", M),
    ("metre", M),
    ("micron", UM),
    ("fermi", M.scaled(1e-15)),
    ("m/s^2", M.divide(S.pow(2))),
    ("kg/m^3", KG.divide(M.pow(3))),
    ("kg", KG),
    ("KG", KG),
    ("kilogram", KG),
    ("mol", MOL),
    ("gmol", MOL),
    ("lbmol", MOL.scaled(424.0)),
    ("MOL", MOL),
    ("mOL", MOL),
    ("mole", MOL),
    ("atom", constants::AVOGADRO.inv()),
    ("M", MOLARITY),
    ("molar", MOLARITY),
    ("Molar", MOLARITY),
    ("eq", clinical::EQ),
    ("equivalent", clinical::EQ),
    ("EQ", clinical::EQ),
    ("osm", clinical::OSM.with_commodity(commodity::PARTICLES)),
    ("osmole", clinical::OSM.with_commodity(commodity::PARTICLES)),
    ("osmol", clinical::OSM.with_commodity(commodity::PARTICLES)),
    ("OSM", clinical::OSM.with_commodity(commodity::PARTICLES)),
    ("g%", clinical::GRAM_PERCENT),
    ("gram%", clinical::GRAM_PERCENT),
    ("grampercent", clinical::GRAM_PERCENT),
    ("G%", clinical::GRAM_PERCENT),
    ("U", ENZYME_UNIT),
    ("enzymeunit", ENZYME_UNIT),
    ("enzymaticactivity", ENZYME_UNIT),
    ("A", A),
    ("amp", A),
    ("amps", A),
    ("ampere", A),
    ("ampturn", A.multiply(COUNT)),
    ("At", A.multiply(COUNT)),
    ("V", V),
    ("volt", V),
    ("W", W),
    ("W/m^2", W.divide(M.pow(2))),
    ("watt", W),
    ("kW", KW),
    ("kilowatt", KW),
    ("MW", MW),
    ("megawatt", MW),
    ("GW", energy::GW),
    ("MVA", MW),
    ("mvar", MW),
    ("VA", energy::VA),
    ("kVA", energy::KVA),
    ("VAR", energy::VAR),
    ("var", energy::VAR),
    ("s", S),
    ("sec", S),
    ("MAS", S.scaled(1e6)),
    ("mAS", S.scaled(1e6)),
    ("second", S),
    ("second-time", S),
    ("cd", CD),
    ("CD", CD),
    ("candela", CD),
    ("candle", CANDLE),
    ("candlepower", CANDLE),
    ("CP", CANDLE),
    ("footcandle", FOOT_CANDLE),
    ("fc", FOOT_CANDLE),
    ("ftc", FOOT_CANDLE),
    ("metercandle", LM.divide(M.pow(2))),
    ("centimetercandle", LM.divide(CM.pow(2))),
    ("K", K),
    ("kelvin", K),
    ("kelvins", K),
    ("degreeKelvin", K),
    ("mK", temperature::MK),
    ("N", N),
    ("newton", N),
    ("kN", N.scaled(1e3)),
    ("Pa", PA),
    ("pa", PA),
    ("pascal", PA),
    ("PAL", PA),
    ("pAL", PA),
    ("hPa", PA.scaled(100.0)),
    ("kPa", energy::KPA),
    ("MPa", energy::MPA),
    ("J", J),
    ("joule", J),
    ("Joule", J),
    ("Joules", J),
    ("kJ", energy::KJ),
    ("MJ", energy::MJ),
    ("C", C),
    ("coulomb", C),
    ("faraday", constants::FARADAY),
    ("farady", constants::FARADAY),
    ("F", F),
    ("farad", F),
    ("abF", AB_FARAD),
    ("abfarad", AB_FARAD),
    ("stF", STAT_FARAD),
    ("statfarad", STAT_FARAD),
    ("OHM", OHM),
    ("ohm", OHM),
    ("Ohm", OHM),
    ("\u{3a9}", OHM),
    ("\u{2126}", OHM),
    ("abOhm", AB_OHM),
    ("abohm", AB_OHM),
    ("statohm", STAT_OHM),
    ("statOhm", STAT_OHM),
    ("S", SIEMENS),
    ("siemen", SIEMENS),
    ("siemens", SIEMENS),
    ("SIE", SIEMENS),
    ("mho", SIEMENS),
    ("gemmho", SIEMENS.scaled(1e-6)),
    ("MHO", SIEMENS),
    ("mHO", SIEMENS),
    ("\u{1b1}", SIEMENS),
    ("absiemen", SIEMENS.scaled(1e9)),
    ("abmho", SIEMENS.scaled(1e9)),
    ("statmho", SIEMENS.scaled(1.0 / 8.987_551_787e11)),
    ("Wb", WB),
    ("weber", WB),
    ("T", T),
    ("tesla", T),
    ("H", H),
    ("henry", H),
    ("henries", H),
    ("abhenry", AB_HENRY),
    ("abH", AB_HENRY),
    ("stathenry", STAT_HENRY),
    ("stH", STAT_HENRY),
    ("statH", STAT_HENRY),
    ("lm", LM),
    ("LM", LM),
    ("lumen", LM),
    ("lux", LX),
    ("luxes", LX),
    ("nox", LX.scaled(1e-3)),
    ("lx", LX),
    ("LX", LX),
    ("Bq", BQ),
    ("BQ", BQ),
    ("becquerel", BQ),
    ("rutherford", cgs::RUTHERFORD),
    ("activity", BQ),
    ("Gy", GY),
    ("gy", GY),
    ("GY", GY),
    ("gray", GY),
    ("Sv", SV),
    ("SV", SV),
    ("sievert", SV),
    ("Hz", HZ),
    ("HZ", HZ),
    ("hertz", HZ),
    ("kHz", HZ.scaled(1e3)),
    ("MHz", HZ.scaled(1e6)),
    ("GHz", HZ.scaled(1e9)),
    ("kat", KAT),
    ("kats", KAT),
    ("KAT", KAT),
    ("katal", KAT),
    ("sr", SR),
    ("SR", SR),
    ("steradian", SR),
    ("steradian-solidangle", SR),
    ("mW", MW_MILLI),
    ("milliwatt", MW_MILLI),
    ("mA", MA),
    ("milliamp", MA),
    ("kV", KV),
    ("kilovolt", KV),
    ("abvolt", AB_VOLT),
    ("abV", AB_VOLT),
    ("statvolt", STAT_VOLT),
    ("stV", STAT_VOLT),
    ("puW", special::PU_W),
    ("puMW", special::PU_MW),
    ("puMVA", special::PU_MW),
    ("pumw", special::PU_MW),
    ("pumegawatt", special::PU_MW),
    ("puV", special::PU_V),
    ("puvolt", special::PU_V),
    ("puA", special::PU_A),
    ("puamp", special::PU_A),
    ("puOhm", special::PU.multiply(OHM)),
    ("puohm", special::PU.multiply(OHM)),
    ("puHz", special::PU_HZ),
    ("puhertz", special::PU_HZ),
];

const CGS_UNITS: &[Entry] = &[
    ("curie", cgs::CURIE),
    ("Ci", cgs::CURIE),
    ("CI", cgs::CURIE),
    ("gauss", cgs::GAUSS),
    ("G", cgs::GAUSS),
    ("Gs", cgs::GAUSS),
    ("Gal", cgs::GAL_ACCEL),
    ("Gals", cgs::GAL_ACCEL),
    ("galileos", cgs::GAL_ACCEL),
    ("stC", cgs::STATCOULOMB),
    ("statC", cgs::STATCOULOMB),
    ("statC{charge}", cgs::STATCOULOMB),
    ("statcoulomb", cgs::STATCOULOMB),
    ("statcoulomb{charge}", cgs::STATCOULOMB),
    ("Fr", cgs::STATCOULOMB),
    ("franklin", cgs::STATCOULOMB),
    ("esu", cgs::STATCOULOMB),
    ("rem", cgs::REM),
    ("[REM]", cgs::REM),
    ("REM", cgs::REM),
    ("radiationequivalentman", cgs::REM),
    ("roentgenequivalentinman", cgs::REM),
    ("Ky", cgs::KAYSER),
    ("KY", cgs::KAYSER),
    ("kayser", cgs::KAYSER),
    ("Bi", cgs::BIOT),
    ("BI", cgs::BIOT),
    ("biot", cgs::BIOT),
    ("abamp", cgs::BIOT),
    ("abA", cgs::BIOT),
    ("abcoulomb", cgs::BIOT.multiply(S)),
    ("abC", cgs::BIOT.multiply(S)),
    ("statamp", cgs::STATCOULOMB.divide(S)),
    ("stA", cgs::STATCOULOMB.divide(S)),
    ("St", cgs::STOKES),
    ("ST", cgs::STOKES),
    ("stoke", cgs::STOKES),
    ("stokes", cgs::STOKES),
    ("Mx", cgs::MAXWELL),
    ("MX", cgs::MAXWELL),
    ("mX", cgs::MAXWELL),
    ("maxwell", cgs::MAXWELL),
    ("Oe", cgs::OERSTED),
    ("OE", cgs::OERSTED),
    ("oersted", cgs::OERSTED),
    ("gilbert", cgs::GILBERT),
    ("Gb", cgs::GILBERT),
    ("Gi", cgs::GILBERT),
    ("p", cgs::POISE),
    ("P", cgs::POISE),
    ("poise", cgs::POISE),
    ("cP", cgs::POISE.scaled(0.01)),
    ("Ba", cgs::BARYE),
    ("BA", cgs::BARYE),
    ("barye", cgs::BARYE),
    ("debye", cgs::DEBYE),
    ("roentgen", cgs::ROENTGEN),
    ("parker", cgs::ROENTGEN),
    ("r\u{f6}entgen", cgs::ROENTGEN),
    ("Roe", cgs::ROENTGEN),
    ("ROE", cgs::ROENTGEN),
    ("R", cgs::ROENTGEN),
    ("Lmb", cgs::LAMBERT),
    ("LMB", cgs::LAMBERT),
    ("lambert", cgs::LAMBERT),
    ("Lb", cgs::LAMBERT),
    ("bril", cgs::LAMBERT.scaled(1e-11)),
    ("skot", cgs::LAMBERT.scaled(1e-7)),
    ("footlambert", CD.divide(length::FT.pow(2)).scaled(1.0 / PI)),
    ("fl", CD.divide(length::FT.pow(2)).scaled(1.0 / PI)),
    ("langley", cgs::LANGLEY),
    ("Ly", cgs::LANGLEY),
    ("unitpole", UNIT_POLE),
    ("sb", cgs::STILB),
    ("SB", cgs::STILB),
    ("stilb", cgs::STILB),
    ("apostilb", cgs::STILB.scaled(1e-4 / PI)),
    ("asb", cgs::STILB.scaled(1e-4 / PI)),
    ("blondel", cgs::STILB.scaled(1e-4 / PI)),
    ("nit", CD.divide(M.pow(2))),
    ("nt", CD.divide(M.pow(2))),
    ("ph", cgs::PHOT),
    ("PHT", cgs::PHOT),
    ("pHT", cgs::PHOT),
    ("phot", cgs::PHOT),
    ("[RAD]", cgs::RAD_DOSE),
    ("RAD", cgs::RAD_DOSE),
    ("radiationabsorbeddose", cgs::RAD_DOSE),
    ("erg", cgs::ERG),
    ("ERG", cgs::ERG),
    ("dyn", cgs::DYN),
    ("DYN", cgs::DYN),
    ("dyne", cgs::DYN),
    ("jansky", JANSKY),
    ("Jy", JANSKY),
];

const LENGTHS: &[Entry] = &[
    ("xunit", length::XU),
    ("xu", length::XU),
    ("X", length::XU),
    ("in", length::IN),
    ("in_i", length::IN),
    ("[IN_I]", length::IN),
    ("inch_i", length::IN),
    ("inches", length::IN),
    ("inches_i", length::IN),
    ("inch", length::IN),
    ("\"", length::IN),
    ("\u{2033}", length::IN),
    ("in_us", length::US_INCH),
    ("inus", length::US_INCH),
    ("usin", length::US_INCH),
    ("[IN_US]", length::US_INCH),
    ("inch_us", length::US_INCH),
    ("inches_us", length::US_INCH),
    ("caliber", length::IN.scaled(0.01)),
    ("rd", length::US_ROD),
    ("rod", length::US_ROD),
    ("rd_us", length::US_ROD),
    ("rdus", length::US_ROD),
    ("[RD_US]", length::US_ROD),
    ("rod_us", length::US_ROD),
    ("rods_us", length::US_ROD),
    ("ch", length::US_CHAIN),
    ("chain", length::US_CHAIN),
    ("chain_us", length::US_CHAIN),
    ("ch_us", length::US_CHAIN),
    ("[CH_US]", length::US_CHAIN),
    ("gunter'schain_us", length::US_CHAIN),
    ("surveyors'schain_us", length::US_CHAIN),
    ("surveyors'schain", length::US_CHAIN),
    ("lk_us", length::US_LINK),
    ("li", length::US_LINK),
    ("lnk", length::US_LINK),
    ("link_us", length::US_LINK),
    ("li_us", length::US_LINK),
    ("link", length::US_LINK),
    ("[LK_US]", length::US_LINK),
    ("linkforGunter'schain_us", length::US_LINK),
    ("rch_us", length::ENGINEERS_CHAIN),
    ("[RCH_US]", length::ENGINEERS_CHAIN),
    ("ramden'schain_us", length::ENGINEERS_CHAIN),
    ("rlk_us", length::ENGINEERS_LINK),
    ("[RLK_US]", length::ENGINEERS_LINK),
    ("linkforRamden'schain_us", length::ENGINEERS_LINK),
    ("fur", length::US_FURLONG),
    ("furlong", length::US_FURLONG),
    ("fur_us", length::US_FURLONG),
    ("[FUR_US]", length::US_FURLONG),
    ("furlong_us", length::US_FURLONG),
    ("[FUR_I]", length::US_FURLONG),
    ("fth", length::FATHOM),
    ("fath", length::FATHOM),
    ("fathom", length::FATHOM),
    ("fth_us", length::FATHOM),
    ("fthus", length::FATHOM),
    ("[FTH_US]", length::FATHOM),
    ("fathom_us", length::FATHOM),
    ("fathom_i", length::FATHOM),
    ("fathoms_i", length::FATHOM),
    ("fth_i", length::FATHOM),
    ("[FTH_I]", length::FATHOM),
    ("fth_br", length::FATHOM),
    ("[FTH_BR]", length::FATHOM),
    ("fathom_br", length::FATHOM),
    ("fathoms_br", length::FATHOM),
    ("mi_us", length::US_MILE),
    ("[MI_US]", length::US_MILE),
    ("mile_us", length::US_MILE),
    ("lea_us", length::US_MILE.scaled(3.0)),
    ("league_us", length::US_MILE.scaled(3.0)),
    ("mil_us", length::US_MIL),
    ("[MIL_US]", length::US_MIL),
    ("thou", length::THOU),
    ("thousandth", length::IN.scaled(1e-3)),
    ("mil", length::MIL),
    ("mil_i", length::MIL),
    ("[MIL_I]", length::MIL),
    ("cml", length::CIRC_MIL),
    ("circularmil", length::CIRC_MIL),
    ("circularinch", length::IN.pow(2).scaled(PI / 4.0)),
    ("cml_i", length::CIRC_MIL),
    ("[CML_I]", length::CIRC_MIL),
    ("hd", length::HAND),
    ("hd_i", length::HAND),
    ("[HD_I]", length::HAND),
    ("hand", length::HAND),
    ("ft", length::FT),
    ("ft_i", length::FT),
    ("[FT_I]", length::FT),
    ("ftus", length::FT),
    ("ft_us", length::US_FOOT),
    ("[FT_US]", length::US_FOOT),
    ("foot_us", length::US_FOOT),
    ("feet_us", length::US_FOOT),
    ("\u{2032}", length::FT),
    ("foot", length::FT),
    ("foot_i", length::FT),
    ("feet", length::FT),
    ("feet_i", length::FT),
    ("yd", length::YD),
    ("yd_i", length::YD),
    ("yard_i", length::YD),
    ("yards_i", length::YD),
    ("[YD_I]", length::YD),
    ("yard", length::YD),
    ("ydus", length::US_YARD),
    ("yd_us", length::US_YARD),
    ("ydsus", length::US_YARD),
    ("[YD_US]", length::US_YARD),
    ("yardus", length::US_YARD),
    ("yard_us", length::US_YARD),
    ("yards_us", length::US_YARD),
    ("in_br", length::IMP_INCH),
    ("inch_br", length::IMP_INCH),
    ("inches_br", length::IMP_INCH),
    ("[IN_BR]", length::IMP_INCH),
    ("barleycorn", length::BARLEYCORN),
    ("ft_br", length::IMP_FOOT),
    ("[FT_BR]", length::IMP_FOOT),
    ("foot_br", length::IMP_FOOT),
    ("rd_br", length::IMP_ROD),
    ("[RD_BR]", length::IMP_ROD),
    ("rod_br", length::IMP_ROD),
    ("perch", length::IMP_ROD),
    ("pole", length::IMP_ROD),
    ("ch_br", length::IMP_CHAIN),
    ("[CH_BR]", length::IMP_CHAIN),
    ("gunter'schain_br", length::IMP_CHAIN),
    ("lk_br", length::IMP_LINK),
    ("[LK_BR]", length::IMP_LINK),
    ("linkforGunter'schain_br", length::IMP_LINK),
    ("pc_br", length::IMP_PACE),
    ("[PC_BR]", length::IMP_PACE),
    ("pace_br", length::IMP_PACE),
    ("yd_br", length::IMP_YARD),
    ("[YD_BR]", length::IMP_YARD),
    ("yard_br", length::IMP_YARD),
    ("nmi_br", length::IMP_NAUTICAL_MILE),
    ("[NMI_BR]", length::IMP_NAUTICAL_MILE),
    ("nauticalmile_br", length::IMP_NAUTICAL_MILE),
    ("nauticalleague_br", length::IMP_NAUTICAL_MILE.scaled(3.0)),
    ("kn_br", KNOT_BR),
    ("[KN_BR]", KNOT_BR),
    ("knot_br", KNOT_BR),
    ("mi_br", length::IMP_MILE),
    ("[MI_BR]", length::IMP_MILE),
    ("mile_br", length::IMP_MILE),
    ("cubit", length::CUBIT),
    ("cubit_br", length::CUBIT),
    ("cubit(UK)", length::CUBIT),
    ("longcubit", length::LONG_CUBIT),
    ("arpent", length::ARPENT_US),
    ("arpent_fr", length::ARPENT_FR),
    ("ken", length::KEN),
    ("cun", length::CUN),
    ("cun(Chinese)", length::CUN),
    ("cun_ch", length::CUN),
    ("chi", length::CHI),
    ("chi_ch", length::CHI),
    ("zhang", length::ZHANG),
    ("zhang_ch", length::ZHANG),
    ("li_ch", length::LI),
    ("mi", length::MILE),
    ("mi_i", length::MILE),
    ("league", length::LEAGUE),
    ("lea", length::LEAGUE),
    ("[MI_I]", length::MILE),
    ("miI", length::MILE),
    ("mile", length::MILE),
    ("mile_i", length::MILE),
    ("miles_i", length::MILE),
    ("cm", CM),
    ("centimeter", CM),
    ("km", KM),
    ("kilometer", KM),
    ("mm", MM),
    ("millimeter", MM),
    ("nm", NM),
    ("nanometer", NM),
    ("um", UM),
    ("ly", length::LY),
    ("[LY]", length::LY),
    ("lightyear", length::LY),
    ("light-year", length::LY),
    ("pc", length::PARSEC),
    ("parsec", length::PARSEC),
    ("PRS", length::PARSEC),
    ("pRS", length::PARSEC),
    ("au", length::AU),
    ("AU", length::AU),
    ("ASU", length::AU),
    ("astronomicalunit", length::AU),
    ("astronomicunit", length::AU),
    ("nauticalmile", length::NAUTICAL_MILE),
    ("nauticalmile_i", length::NAUTICAL_MILE),
    ("nauticalleague", length::NAUTICAL_LEAGUE),
    ("nauticalleague_i", length::NAUTICAL_LEAGUE),
    ("nmi", length::NAUTICAL_MILE),
    ("nmi_i", length::NAUTICAL_MILE),
    ("[NMI_I]", length::NAUTICAL_MILE),
    ("angstrom", length::ANGSTROM),
    ("\u{c5}ngstr\u{f6}m", length::ANGSTROM),
    ("Ao", length::ANGSTROM),
    ("AO", length::ANGSTROM),
    ("\u{c5}", length::ANGSTROM),
    ("\u{212b}", length::ANGSTROM),
    ("smoot", length::SMOOT),
    ("[SMOOT]", length::SMOOT),
];

const AREAS_AND_VOLUMES: &[Entry] = &[
    ("cc", volume::CC),
    ("cubiccentimeter", volume::CC),
    ("ft^2", length::FT.pow(2)),
    ("sin", length::IN.pow(2)),
    ("sin_i", length::IN.pow(2)),
    ("[SIN_I]", length::IN.pow(2)),
    ("cin", length::IN.pow(3)),
    ("cin_i", length::IN.pow(3)),
    ("[CIN_I]", length::IN.pow(3)),
    ("sf", length::FT.pow(2)),
    ("sft", length::FT.pow(2)),
    ("sft_i", length::FT.pow(2)),
    ("[SFT_I]", length::FT.pow(2)),
    ("SCF", length::FT.pow(3)),
    ("CCF", length::FT.pow(3).scaled(100.0)),
    ("MCF", length::FT.pow(3).scaled(1000.0)),
    ("MMCF", length::FT.pow(3).scaled(1e6)),
    ("BCF", length::FT.pow(3).scaled(1e9)),
    ("TCF", length::FT.pow(3).scaled(1e12)),
    ("Mm^3", M.pow(3).scaled(1000.0)),
    ("MMm^3", M.pow(3).scaled(1e6)),
    ("bm^3", M.pow(3).scaled(1e9)),
    ("tm^3", M.pow(3).scaled(1e12)),
    ("cf", length::FT.pow(3)),
    ("mcf", length::FT.pow(3).scaled(1000.0)),
    ("ccf", length::FT.pow(3).scaled(100.0)),
    ("cft", length::FT.pow(3)),
    ("[cft_i]", length::FT.pow(3)),
    ("[CFT_I]", length::FT.pow(3)),
    ("sy", length::YD.pow(2)),
    ("syd", length::YD.pow(2)),
    ("syd_i", length::YD.pow(2)),
    ("[SYD_I]", length::YD.pow(2)),
    ("cy", length::YD.pow(3)),
    ("cyd", length::YD.pow(3)),
    ("cyd_i", length::YD.pow(3)),
    ("[CYD_I]", length::YD.pow(3)),
    ("smi", length::MILE.pow(2)),
    ("smi_us", length::US_MILE.pow(2)),
    ("[SMI_US]", length::US_MILE.pow(2)),
    ("srd_us", length::US_ROD.pow(2)),
    ("[SRD_US]", length::US_ROD.pow(2)),
    ("sct", length::SECTION),
    ("[SCT]", length::SECTION),
    ("section", length::SECTION),
    ("homestead", length::HOMESTEAD),
    ("twp", length::TOWNSHIP),
    ("[TWP]", length::TOWNSHIP),
    ("township", length::TOWNSHIP),
    ("acre", length::ACRE),
    ("acr", length::ACRE),
    ("ac", length::ACRE),
    ("acft", length::ACRE.multiply(length::US_FOOT)),
    ("ac*ft", length::ACRE.multiply(length::US_FOOT)),
    ("acre-foot", length::ACRE.multiply(length::US_FOOT)),
    ("acrefoot", length::ACRE.multiply(length::US_FOOT)),
    ("acre_us", length::ACRE),
    ("acr_us", length::ACRE),
    ("[ACR_US]", length::ACRE),
    ("[ACR_BR]", length::IMP_ACRE),
    ("acr_br", length::IMP_ACRE),
    ("acre_br", length::IMP_ACRE),
    ("acres_br", length::IMP_ACRE),
    ("rood", length::IMP_ACRE.scaled(0.25)),
    ("are", length::ARE),
    ("ar", length::ARE),
    ("AR", length::ARE),
    ("hectare", length::HECTARE),
    ("ha", length::HECTARE),
    ("barn", length::BARN),
    ("b", length::BARN),
    ("BRN", length::BARN),
    ("bf", volume::BOARD_FOOT),
    ("BF", volume::BOARD_FOOT),
    ("bf_i", volume::BOARD_FOOT),
    ("BDFT", volume::BOARD_FOOT),
    ("FBM", volume::BOARD_FOOT),
    ("[BF_I]", volume::BOARD_FOOT),
    ("boardfoot", volume::BOARD_FOOT),
    ("boardfeet", volume::BOARD_FOOT),
    ("cr", volume::CORD),
    ("crd", volume::CORD),
    ("cord", volume::CORD),
    ("crd_i", volume::CORD),
    ("cords_i", volume::CORD),
    ("cr_i", volume::CORD),
    ("[CR_I]", volume::CORD),
    ("crd_us", volume::CORD),
    ("[CRD_US]", volume::CORD),
    ("cord_us", volume::CORD),
    ("FEU", length::FT.pow(3).scaled(40.0 * 8.0 * 8.5)),
    ("TEU", length::FT.pow(3).scaled(20.0 * 8.0 * 8.5)),
    ("fortyfootequivalent", length::FT.pow(3).scaled(40.0 * 8.0 * 8.5)),
    ("twentyfootequivalent", length::FT.pow(3).scaled(20.0 * 8.0 * 8.5)),
    ("L", L),
    ("l", L),
    ("LT", L),
    ("liter", L),
    ("litre", L),
    ("mL", ML),
    ("ml", ML),
    ("uL", MICROLITER),
    ("st", volume::STERE),
    ("stere", volume::STERE),
    ("STR", volume::STERE),
    ("gal", volume::GAL),
    ("gallon", volume::GAL),
    ("gal_us", volume::GAL),
    ("[GAL_US]", volume::GAL),
    ("gallon_us", volume::GAL),
    ("[gal_wi]", volume::DRY_GALLON),
    ("[GAL_WI]", volume::DRY_GALLON),
    ("gallon-historical", volume::DRY_GALLON),
    ("gal_br", volume::IMP_GALLON),
    ("[GAL_BR]", volume::IMP_GALLON),
    ("gallon_br", volume::IMP_GALLON),
    ("bbl", volume::BARREL),
    ("bbl(oil)", volume::BARREL),
    ("barrel(oil)", volume::BARREL),
    ("bbl_us", volume::BARREL),
    ("[bbl_us]", volume::BARREL),
    ("[BBL_US]", volume::BARREL),
    ("barrel_us", volume::BARREL),
    ("flbarrel_us", volume::FLBARREL),
    ("fluidbarrel_us", volume::FLBARREL),
    ("flbarrel", volume::FLBARREL),
    ("fluidbarrel", volume::FLBARREL),
    ("drum", volume::DRUM),
    ("hogshead", volume::HOGSHEAD),
    ("tonregister", length::FT.pow(3).scaled(100.0)),
    ("tonreg", length::FT.pow(3).scaled(100.0)),
    ("registerton", length::FT.pow(3).scaled(100.0)),
    ("waterton", volume::IMP_GALLON.scaled(224.0)),
    ("bu", volume::BUSHEL),
    ("bushel", volume::BUSHEL),
    ("oz fl", volume::FLOZ),
    ("ozfl", volume::FLOZ),
    ("fl oz", volume::FLOZ),
    ("floz", volume::FLOZ),
    ("floz_us", volume::FLOZ),
    ("foz_us", volume::FLOZ),
    ("foz", volume::FLOZ),
    ("[FOZ_US]", volume::FLOZ),
    ("fluidounce", volume::FLOZ),
    ("fluidounces_us", volume::FLOZ),
    ("fluidounce_us", volume::FLOZ),
    ("ouncefl", volume::FLOZ),
    ("fluidoz", volume::FLOZ),
    ("fdr_us", volume::FLDRAM),
    ("[FDR_US]", volume::FLDRAM),
    ("fluiddram_us", volume::FLDRAM),
    ("min_us", volume::MINIM),
    ("[MIN_US]", volume::MINIM),
    ("minim_us", volume::MINIM),
    ("dr", volume::FLDRAM),
    ("dram", volume::FLDRAM),
    ("cup", volume::CUP),
    ("cup_us", volume::CUP),
    ("[CUP_US]", volume::CUP),
    ("cupUScustomary", volume::CUP),
    ("tsp", volume::TSP),
    ("tsp_us", volume::TSP),
    ("[TSP_US]", volume::TSP),
    ("teaspoon", volume::TSP),
    ("teaspoon_us", volume::TSP),
    ("tbsp", volume::TBSP),
    ("tbs", volume::TBSP),
    ("tbs_us", volume::TBSP),
    ("[TBS_US]", volume::TBSP),
    ("tablespoon", volume::TBSP),
    ("tablespoon_us", volume::TBSP),
    ("cup_m", volume::METRIC_CUP),
    ("[CUP_M]", volume::CUP_US_LEGAL),
    ("[cup_m]", volume::CUP_US_LEGAL),
    ("cupUSlegal", volume::CUP_US_LEGAL),
    ("tsp_m", volume::METRIC_TSP),
    ("[TSP_M]", volume::METRIC_TSP),
    ("teaspoon-metric", volume::METRIC_TSP),
    ("teaspoon_m", volume::METRIC_TSP),
    ("tbs_m", volume::METRIC_TBSP),
    ("tbsm", volume::METRIC_TBSP),
    ("[TBS_M]", volume::METRIC_TBSP),
    ("tablespoon-metric", volume::METRIC_TBSP),
    ("tablespoon_m", volume::METRIC_TBSP),
    ("foz_m", volume::METRIC_FLOZ),
    ("[FOZ_M]", volume::METRIC_FLOZ),
    ("fluidounce-metric", volume::METRIC_FLOZ),
    ("fluidounce_m", volume::METRIC_FLOZ),
    ("quart", volume::QUART),
    ("qt", volume::QUART),
    ("qt_us", volume::QUART),
    ("[QT_US]", volume::QUART),
    ("quart_us", volume::QUART),
    ("pint", volume::PINT),
    ("pint_us", volume::PINT),
    ("pt_us", volume::PINT),
    ("[PT_US]", volume::PINT),
    ("gill", volume::GILL),
    ("gi", volume::GILL),
    ("gill_us", volume::GILL),
    ("gil_us", volume::GILL),
    ("[GIL_US]", volume::GILL),
    ("pk_us", volume::PECK),
    ("[PK_US]", volume::PECK),
    ("peck_us", volume::PECK),
    ("bu_us", volume::BUSHEL),
    ("[BU_US]", volume::BUSHEL),
    ("bushel_us", volume::BUSHEL),
    ("dqt_us", volume::DRY_QUART),
    ("[DQT_US]", volume::DRY_QUART),
    ("dryquart_us", volume::DRY_QUART),
    ("dpt_us", volume::DRY_PINT),
    ("[DPT_US]", volume::DRY_PINT),
    ("drypint_us", volume::DRY_PINT),
    ("qt_br", volume::IMP_QUART),
    ("[QT_BR]", volume::IMP_QUART),
    ("quart_br", volume::IMP_QUART),
    ("pt_br", volume::IMP_PINT),
    ("[PT_BR]", volume::IMP_PINT),
    ("pint_br", volume::IMP_PINT),
    ("gil_br", volume::IMP_GILL),
    ("[GIL_BR]", volume::IMP_GILL),
    ("gill_br", volume::IMP_GILL),
    ("gi_br", volume::IMP_GILL),
    ("pk_br", volume::IMP_PECK),
    ("[PK_BR]", volume::IMP_PECK),
    ("peck_br", volume::IMP_PECK),
    ("bu_br", volume::IMP_BUSHEL),
    ("[BU_BR]", volume::IMP_BUSHEL),
    ("bushel_br", volume::IMP_BUSHEL),
    ("foz_br", volume::IMP_FLOZ),
    ("floz_br", volume::IMP_FLOZ),
    ("[FOZ_BR]", volume::IMP_FLOZ),
    ("fluidounce_br", volume::IMP_FLOZ),
    ("fdr_br", volume::IMP_DRAM),
    ("[FDR_BR]", volume::IMP_DRAM),
    ("fluiddram_br", volume::IMP_DRAM),
    ("min_br", volume::IMP_MINIM),
    ("[MIN_BR]", volume::IMP_MINIM),
    ("minim_br", volume::IMP_MINIM),
    ("barrel_br", volume::IMP_BARREL),
    ("bbl_br", volume::IMP_BARREL),
    ("tablespoon_br", volume::IMP_TBSP),
    ("teaspoon_br", volume::IMP_TSP),
    ("tbsp_br", volume::IMP_TBSP),
    ("tsp_br", volume::IMP_TSP),
    ("cup_br", volume::IMP_CUP),
    ("drp", volume::DROP),
    ("[drp]", volume::DROP),
    ("[DRP]", volume::DROP),
    ("drop", volume::DROP),
    ("drop_m", volume::DROP),
    ("drop-metric", volume::DROP),
];

const TIMES: &[Entry] = &[
    ("min", MIN),
    ("mins", MIN),
    ("mIN", MIN),
    ("minute", MIN),
    ("ms", MS),
    ("millisecond", MS),
    ("us", US),
    ("ns", NS),
    ("shake", time::SHAKE),
    ("hr", HR),
    ("HR", HR),
    ("h", HR),
    ("hour", HR),
    ("day", time::DAY),
    ("dy", time::DAY),
    ("D", time::DAY),
    ("d", time::DAY),
    ("week", time::WEEK),
    ("weekly", time::WEEK.inv()),
    ("biweekly", time::WEEK.inv().scaled(0.5)),
    ("fortnight", time::FORTNIGHT),
    ("wk", time::WEEK),
    ("WK", time::WEEK),
    ("y", time::YR),
    ("yr", time::YR),
    ("a", time::YR),
    ("year", time::YR),
    ("yearly", time::YR.inv()),
    ("annum", time::YR),
    ("ANN", time::YR),
    ("decade", time::DECADE),
    ("century", time::CENTURY),
    ("millennia", time::MILLENNIUM),
    ("millennium", time::MILLENNIUM),
    ("syr", time::YEAR_SIDEREAL),
    ("year_sdr", time::YEAR_SIDEREAL),
    ("yr_sdr", time::YEAR_SIDEREAL),
    ("sday", time::DAY_SIDEREAL),
    ("day_sdr", time::DAY_SIDEREAL),
    ("dy_sdr", time::DAY_SIDEREAL),
    ("d_sdr", time::DAY_SIDEREAL),
    ("a_t", time::YEAR_TROPICAL),
    ("year_t", time::YEAR_TROPICAL),
    ("solaryear", time::YEAR_TROPICAL),
    ("ANN_T", time::YEAR_TROPICAL),
    ("a_j", time::YEAR_JULIAN),
    ("meanyear_j", time::YEAR_JULIAN),
    ("meanyr_j", time::YEAR_JULIAN),
    ("year_j", time::YEAR_JULIAN),
    ("yr_j", time::YEAR_JULIAN),
    ("ANN_J", time::YEAR_JULIAN),
    ("year(leap)", time::DAY.scaled(366.0)),
    ("a_g", time::YEAR_GREGORIAN),
    ("meanyear_g", time::YEAR_GREGORIAN),
    ("meanyr_g", time::YEAR_GREGORIAN),
    ("year_g", time::YEAR_GREGORIAN),
    ("yr_g", time::YEAR_GREGORIAN),
    ("ANN_G", time::YEAR_GREGORIAN),
    ("mo", time::MONTH_GREGORIAN),
    ("month", time::MONTH_GREGORIAN),
    ("monthly", time::MONTH_GREGORIAN.inv()),
    ("MO", time::MONTH_GREGORIAN),
    ("mO", time::MONTH_GREGORIAN),
    ("mos", time::MONTH_SYNODAL),
    ("mo_s", time::MONTH_SYNODAL),
    ("mO_S", time::MONTH_SYNODAL),
    ("synodalmonth", time::MONTH_SYNODAL),
    ("month_s", time::MONTH_SYNODAL),
    ("lunarmonth", time::MONTH_SYNODAL),
    ("moon", time::MONTH_SYNODAL),
    ("mo_j", time::MONTH_JULIAN),
    ("month_j", time::MONTH_JULIAN),
    ("mO_J", time::MONTH_JULIAN),
    ("meanmonth_j", time::MONTH_JULIAN),
    ("mo_g", time::MONTH_GREGORIAN),
    ("mog", time::MONTH_GREGORIAN),
    ("month_g", time::MONTH_GREGORIAN),
    ("mO_G", time::MONTH_GREGORIAN),
    ("meanmonth_g", time::MONTH_GREGORIAN),
    ("jiffy", time::JIFFY),
    ("moment", time::MOMENT),
    ("[S]", time::SVEDBERG),
    ("svedbergunit", time::SVEDBERG),
];

const ANGLES: &[Entry] = &[
    ("degrees", angle::DEG),
    ("degree", angle::DEG),
    ("arcdegree", angle::DEG),
    ("degree-planeangle", angle::DEG),
    ("degree(planeangle)", angle::DEG),
    ("deg", angle::DEG),
    ("DEG", angle::DEG),
    ("o", angle::DEG),
    ("\u{b0}", angle::DEG),
    ("arcminute", angle::ARCMIN),
    ("arcmin", angle::ARCMIN),
    ("amin", angle::ARCMIN),
    ("am", angle::ARCMIN),
    ("'", angle::ARCMIN),
    ("arcsecond", angle::ARCSEC),
    ("''", angle::ARCSEC),
    ("arcsec", angle::ARCSEC),
    ("asec", angle::ARCSEC),
    ("as", angle::ARCSEC),
    ("mas", angle::MAS),
    ("rad", RAD),
    ("radian", RAD),
    ("gon", angle::GON),
    ("gon(grade)", angle::GON),
    ("GON", angle::GON),
    ("^g", angle::GON),
    ("grad", angle::GON),
    ("gradians", angle::GON),
    ("mil(angle)", angle::ANGULAR_MIL),
    ("circ", REVOLUTION),
    ("CIRC", REVOLUTION),
    ("quadrant", angle::DEG.scaled(90.0)),
    ("circle", REVOLUTION),
    ("turn", REVOLUTION),
    ("brad", angle::BRAD),
    ("circle-planeangle", REVOLUTION),
    ("sph", SPHERE),
    ("spere-solidangle", SPHERE),
    ("spere", SPHERE),
    ("speres", SPHERE),
    ("Spere", SPHERE),
    ("SPH", SPHERE),
    ("rpm", angle::RPM),
    ("r", REVOLUTION),
    ("revolutions", REVOLUTION),
    ("revolution", REVOLUTION),
    ("rev", REVOLUTION),
    ("revs", REVOLUTION),
    ("rev/min", angle::RPM),
    ("rad/s", RAD.divide(S)),
];

const TEMPERATURES: &[Entry] = &[
    ("\u{b0}C", temperature::DEG_C),
    ("degC", temperature::DEG_C),
    ("oC", temperature::DEG_C),
    ("Cel", temperature::DEG_C),
    ("CEL", temperature::DEG_C),
    ("celsius", temperature::DEG_C),
    ("degreesCelsius", temperature::DEG_C),
    ("degreeCelsius", temperature::DEG_C),
    ("degF", temperature::DEG_F),
    ("[DEGF]", temperature::DEG_F),
    ("oF", temperature::DEG_F),
    ("\u{b0}F", temperature::DEG_F),
    ("fahrenheit", temperature::DEG_F),
    ("degreesFahrenheit", temperature::DEG_F),
    ("degreeFahrenheit", temperature::DEG_F),
    ("degR", temperature::DEG_R),
    ("[DEGR]", temperature::DEG_R),
    ("\u{b0}R", temperature::DEG_R),
    ("degreesRankine", temperature::DEG_R),
    ("degreeRankine", temperature::DEG_R),
    ("[DEGRE]", temperature::REAUMUR),
    ("degRe", temperature::REAUMUR),
    ("degreesR\u{e9}aumur", temperature::REAUMUR),
    ("\u{b0}R\u{e9}", temperature::REAUMUR),
    ("\u{b0}Re", temperature::REAUMUR),
    ("degreesReaumur", temperature::REAUMUR),
    ("degreeReaumur", temperature::REAUMUR),
];

const PHYSICAL_CONSTANTS: &[Entry] = &[
    ("[c]", constants::C_LIGHT),
    ("[C]", constants::C_LIGHT),
    ("speedoflight", constants::C_LIGHT),
    ("speedoflightinvacuum", constants::C_LIGHT),
    ("light", constants::C_LIGHT),
    ("[h]", constants::PLANCK),
    ("[H]", constants::PLANCK),
    ("[k]", constants::BOLTZMANN),
    ("[K]", constants::BOLTZMANN),
    ("eps_0", constants::EPSILON0),
    ("[EPS_0]", constants::EPSILON0),
    ("mu_0", constants::MU0),
    ("[MU_0]", constants::MU0),
    ("[e]", constants::ELEMENTARY_CHARGE),
    ("e", constants::ELEMENTARY_CHARGE),
    ("[E]", constants::ELEMENTARY_CHARGE),
    ("elementarycharge", constants::ELEMENTARY_CHARGE),
    ("[G]", constants::G_GRAV),
    ("[GC]", constants::G_GRAV),
    ("[g]", constants::G0),
    ("standardgravity", constants::G0),
    ("standardaccelerationoffreefall", constants::G0),
    ("accelerationofgravity", constants::G0),
    ("m_e", constants::ELECTRON_MASS),
    ("electronmass", constants::ELECTRON_MASS),
    ("[M_E]", constants::ELECTRON_MASS),
    ("m_p", constants::PROTON_MASS),
    ("[M_P]", constants::PROTON_MASS),
    ("protonmass", constants::PROTON_MASS),
    ("neutronmass", constants::NEUTRON_MASS),
    ("planckmass", constants::PLANCK_MASS),
    ("plancklength", constants::PLANCK_LENGTH),
    ("plancktime", constants::PLANCK_TIME),
    ("planckcharge", constants::PLANCK_CHARGE),
    ("plancktemperature", constants::PLANCK_TEMPERATURE),
    ("bohrradius", constants::BOHR_RADIUS),
    ("a_0", constants::BOHR_RADIUS),
    ("avogadro", constants::AVOGADRO),
    ("gasconstant", constants::GAS_CONSTANT),
    ("stefanboltzmann", constants::STEFAN_BOLTZMANN),
];

const CURRENCY_AND_COUNTS: &[Entry] = &[
    ("$", CURRENCY),
    ("dollar", CURRENCY),
    ("currency", CURRENCY),
    ("\u{a2}", CURRENCY.scaled(0.01)),
    ("\u{a3}", CURRENCY),
    ("\u{a4}", CURRENCY),
    ("\u{a5}", CURRENCY),
    ("\u{20ac}", CURRENCY),
    ("\u{20bd}", CURRENCY),
    ("$/MWh", CURRENCY.divide(MWH)),
    ("$/kWh", CURRENCY.divide(KWH)),
    ("$/gal", CURRENCY.divide(volume::GAL)),
    ("M$", special::MEGABUCK),
    ("mil$", special::MEGABUCK),
    ("B$", special::GIGABUCK),
    ("bil$", special::GIGABUCK),
    ("count", COUNT),
    ("unit", COUNT),
    ("pair", COUNT.scaled(2.0)),
    ("dozen", COUNT.scaled(12.0)),
    ("gross", COUNT.scaled(144.0)),
    ("cell", COUNT.with_commodity(commodity::CELLS)),
    ("{cells}", COUNT.with_commodity(commodity::CELLS)),
    ("{#}", COUNT),
    ("[#]", COUNT),
    ("#", COUNT),
    ("number", COUNT),
    ("pix", COUNT.with_commodity(commodity::PIXELS)),
    ("pixel", COUNT.with_commodity(commodity::PIXELS)),
    ("dot", COUNT.with_commodity(commodity::VOXELS)),
    ("voxel", COUNT.with_commodity(commodity::VOXELS)),
    ("item", COUNT),
    ("part", COUNT),
];

const MASSES_AND_FORCES: &[Entry] = &[
    ("jin", mass::JIN),
    ("jin_ch", mass::JIN),
    ("liang", mass::LIANG),
    ("liang_ch", mass::LIANG),
    ("qian", mass::QIAN),
    ("qian_ch", mass::QIAN),
    ("lb", mass::LB),
    ("kip", mass::LB.scaled(1000.0)),
    ("lb_tr", mass::TROY_POUND),
    ("[LB_TR]", mass::TROY_POUND),
    ("pound-troy", mass::TROY_POUND),
    ("pound", mass::LB),
    ("ton", mass::TON),
    ("ton(short)", mass::TON),
    ("t", mass::TONNE),
    ("mt", mass::TONNE),
    ("ton_m", mass::TONNE),
    ("tonne", mass::TONNE),
    ("TNE", mass::TONNE),
    ("Da", mass::DALTON),
    ("dalton", mass::DALTON),
    ("u", mass::DALTON),
    ("amu", mass::DALTON),
    ("AMU", mass::DALTON),
    ("unifiedatomicmassunit", mass::DALTON),
    ("atomicmassunit", mass::DALTON),
    ("longton", mass::LONG_TON),
    ("oz", mass::OZ),
    ("gr", mass::GRAIN),
    ("[GR]", mass::GRAIN),
    ("grain", mass::GRAIN),
    ("oz_av", mass::OZ),
    ("oz_i", mass::OZ),
    ("[OZ_AV]", mass::OZ),
    ("pound_i", mass::LB),
    ("pound_av", mass::LB),
    ("lb_av", mass::LB),
    ("[LB_AV]", mass::LB),
    ("dr_av", mass::DRAM),
    ("dr_i", mass::DRAM),
    ("dram_av", mass::DRAM),
    ("dram_i", mass::DRAM),
    ("[DR_AV]", mass::DRAM),
    ("drammassunit", mass::DRAM),
    ("scwt", mass::HUNDREDWEIGHT),
    ("scwt_av", mass::HUNDREDWEIGHT),
    ("[SCWT_AV]", mass::HUNDREDWEIGHT),
    ("shorthundredweight", mass::HUNDREDWEIGHT),
    ("lcwt_av", mass::LONG_HUNDREDWEIGHT),
    ("[LCWT_AV]", mass::LONG_HUNDREDWEIGHT),
    ("longhundredweight", mass::LONG_HUNDREDWEIGHT),
    ("quintal", mass::QUINTAL),
    ("quintal_m", mass::QUINTAL),
    ("cwt", mass::HUNDREDWEIGHT),
    ("cwt_us", mass::HUNDREDWEIGHT),
    ("cwt_br", mass::LONG_HUNDREDWEIGHT),
    ("hundredweight", mass::HUNDREDWEIGHT),
    ("hundredweight_us", mass::HUNDREDWEIGHT),
    ("hundredweight_br", mass::LONG_HUNDREDWEIGHT),
    ("hundredweight(short)", mass::HUNDREDWEIGHT),
    ("hundredweight(long)", mass::LONG_HUNDREDWEIGHT),
    ("assayton", mass::ASSAY_TON),
    ("tonassay", mass::ASSAY_TON),
    ("ton(assayUS)", mass::ASSAY_TON),
    ("ton(assay)", mass::ASSAY_TON),
    ("ton(assay)_br", mass::LONG_ASSAY_TON),
    ("longassayton", mass::LONG_ASSAY_TON),
    ("stone_av", mass::STONE),
    ("stone_us", mass::HUNDREDWEIGHT.scaled(0.125)),
    ("[STONE_AV]", mass::STONE),
    ("ston_av", mass::TON),
    ("[STON_AV]", mass::TON),
    ("shortton", mass::TON),
    ("shortton_us", mass::TON),
    ("ton_us", mass::TON),
    ("ton_av", mass::TON),
    ("stone", mass::STONE),
    ("stone_br", mass::STONE),
    ("lton_av", mass::LONG_TON),
    ("[LTON_AV]", mass::LONG_TON),
    ("longton_av", mass::LONG_TON),
    ("ton(long)", mass::LONG_TON),
    ("longton_br", mass::LONG_TON),
    ("ton_br", mass::LONG_TON),
    ("oz_tr", mass::TROY_OZ),
    ("[OZ_TR]", mass::TROY_OZ),
    ("ounce_tr", mass::TROY_OZ),
    ("pound_tr", mass::TROY_POUND),
    ("pwt_tr", mass::PENNYWEIGHT),
    ("[PWT_TR]", mass::PENNYWEIGHT),
    ("pennyweight_tr", mass::PENNYWEIGHT),
    ("sc_ap", mass::SCRUPLE),
    ("[SC_AP]", mass::SCRUPLE),
    ("scruple", mass::SCRUPLE),
    ("scruple_ap", mass::SCRUPLE),
    ("dr_ap", mass::DRACHM),
    ("dram_ap", mass::DRACHM),
    ("[DR_AP]", mass::DRACHM),
    ("oz_ap", mass::AP_OUNCE),
    ("[OZ_AP]", mass::AP_OUNCE),
    ("ounce_ap", mass::AP_OUNCE),
    ("lb_ap", mass::AP_POUND),
    ("[LB_AP]", mass::AP_POUND),
    ("pound_ap", mass::AP_POUND),
    ("oz_m", mass::METRIC_OUNCE),
    ("[OZ_M]", mass::METRIC_OUNCE),
    ("ounce_m", mass::METRIC_OUNCE),
    ("[car_m]", mass::CARAT),
    ("ct_m", mass::CARAT),
    ("[CAR_M]", mass::CARAT),
    ("carat_m", mass::CARAT),
    ("car_Au", CARAT_GOLD),
    ("carau", CARAT_GOLD),
    ("[CAR_AU]", CARAT_GOLD),
    ("caratofgoldalloys", CARAT_GOLD),
    ("ounce", mass::OZ),
    ("ounce_av", mass::OZ),
    ("g", G),
    ("gm", G),
    ("gram", G),
    ("gamma", G.scaled(1e-6)),
    ("gamma(geo)", T.scaled(1e-9)),
    ("mg", MG),
    ("mcg", G.scaled(1e-6)),
    ("milligram", MG),
    ("carat", mass::CARAT),
    ("karat", mass::CARAT),
    ("ct", mass::CARAT),
    ("gf", G.multiply(constants::G0)),
    ("gramforce", G.multiply(constants::G0)),
    ("GF", G.multiply(constants::G0)),
    ("pond", mass::POND),
    ("kp", mass::POND.scaled(1000.0)),
    ("kipf", mass::KIPF),
    ("kipforce", mass::KIPF),
    ("tonforce", mass::TON.multiply(constants::G0)),
    ("tonforce_m", mass::TONNE_FORCE),
    ("tonneforce", mass::TONNE_FORCE),
    ("tf", mass::TONNE_FORCE),
    ("longtonforce", mass::LONG_TON.multiply(constants::G0)),
    ("shorttonforce", mass::TON.multiply(constants::G0)),
    ("tonforce(long)", mass::LONG_TON.multiply(constants::G0)),
    ("tonforce(short)", mass::TON.multiply(constants::G0)),
    ("tonforce_us", mass::TON.multiply(constants::G0)),
    ("tonforce_br", mass::LONG_TON.multiply(constants::G0)),
    ("tonf_us", mass::TON.multiply(constants::G0)),
    ("tonf_br", mass::LONG_TON.multiply(constants::G0)),
    ("hyl", mass::HYL),
    ("sn", mass::STHENE),
    ("sthene", mass::STHENE),
    ("pz", mass::PIEZE),
    ("pieze", mass::PIEZE),
    ("lbf_av", mass::LBF),
    ("lbf_us", mass::LBF),
    ("[LBF_AV]", mass::LBF),
    ("lbf", mass::LBF),
    ("ounceforce", mass::OZF),
    ("ozf", mass::OZF),
    ("poundforce", mass::LBF),
    ("poundforce_us", mass::LBF),
    ("poundal", mass::POUNDAL),
    ("pdl", mass::POUNDAL),
    ("slug", mass::SLUG),
    ("Gasolineat15.5C", KG.divide(M.pow(3)).scaled(739.33)),
];

const ENERGY_AND_POWER: &[Entry] = &[
    ("hp", energy::HP),
    ("horsepower", energy::HP),
    ("horsepower_i", energy::HP),
    ("[HP]", energy::HP),
    ("hpI", energy::HP),
    ("hp(I)", energy::HP),
    ("horsepower-mechanical", energy::HP),
    ("horsepower(mechanical)", energy::HP),
    ("horsepower(water)", energy::HP),
    ("horsepower(hydraulic)", energy::HP),
    ("horsepower(air)", energy::HP),
    ("hp(mechanical)", energy::HP),
    ("hp(water)", energy::HP),
    ("hp(hydraulic)", energy::HP),
    ("hp(air)", energy::HP),
    ("hpE", energy::HP_ELECTRIC),
    ("hp(E)", energy::HP_ELECTRIC),
    ("horsepower-electrical", energy::HP_ELECTRIC),
    ("horsepower(electrical)", energy::HP_ELECTRIC),
    ("horsepower(electric)", energy::HP_ELECTRIC),
    ("hp(electric)", energy::HP_ELECTRIC),
    ("hpM", energy::HP_METRIC),
    ("hp_m", energy::HP_METRIC),
    ("hp(M)", energy::HP_METRIC),
    ("horsepower_m", energy::HP_METRIC),
    ("hpS", energy::HP_BOILER),
    ("hp(S)", energy::HP_BOILER),
    ("horsepower-steam", energy::HP_BOILER),
    ("horsepower(steam)", energy::HP_BOILER),
    ("horsepower(boiler)", energy::HP_BOILER),
    ("hp(boiler)", energy::HP_BOILER),
    ("mph", energy::MPH),
    ("mileperhour", energy::MPH),
    ("kph", energy::KPH),
    ("kn", energy::KNOT),
    ("knot", energy::KNOT),
    ("knot_i", energy::KNOT),
    ("knots_i", energy::KNOT),
    ("kn_i", energy::KNOT),
    ("[KN_I]", energy::KNOT),
    ("knots", energy::KNOT),
    ("fps", length::FT.divide(S)),
    ("fpm", energy::FPM),
    ("fph", length::FT.divide(HR)),
    ("mps", energy::MPS),
    ("eV", energy::EV),
    ("EV", energy::EV),
    ("electronvolt", energy::EV),
    ("electronVolt", energy::EV),
    ("Ry", energy::RYDBERG_ENERGY),
    ("hartree", energy::HARTREE),
    ("E_h", energy::HARTREE),
    ("cal", energy::CAL),
    ("Cal", energy::KCAL),
    ("CAL", energy::CAL),
    ("[Cal]", energy::KCAL),
    ("[CAL]", energy::KCAL),
    ("nutritionlabelCalories", energy::KCAL),
    ("foodcalories", energy::KCAL),
    ("largecalories", energy::KCAL),
    ("kilogramcalories", energy::KCAL),
    ("calorie(nutritional)", energy::CAL_IT),
    ("cal_[15]", energy::CAL_15),
    ("cal_15\u{b0}C", energy::CAL_15),
    ("calorieat15\u{b0}C", energy::CAL_15),
    ("cal_[20]", energy::CAL_20),
    ("calorieat20\u{b0}C", energy::CAL_20),
    ("cal_20\u{b0}C", energy::CAL_20),
    ("CAL_[15]", energy::CAL_15),
    ("CAL_[20]", energy::CAL_20),
    ("cal_m", energy::CAL_MEAN),
    ("meancalorie", energy::CAL_MEAN),
    ("cal_IT", energy::CAL_IT),
    ("CAL_M", energy::CAL_MEAN),
    ("CAL_IT", energy::CAL_IT),
    ("calorie_IT", energy::CAL_IT),
    ("cal_th", energy::CAL),
    ("CAL_TH", energy::CAL),
    ("calorie_th", energy::CAL),
    ("calorie", energy::CAL),
    ("kcal", energy::KCAL),
    ("kCal", energy::KCAL),
    ("KCAL", energy::KCAL),
    ("Kcal", energy::KCAL),
    ("kilocalorie", energy::KCAL),
    ("btu", energy::BTU_IT),
    ("Btu", energy::BTU_IT),
    ("BTU", energy::BTU_IT),
    ("Mbtu", energy::BTU_IT.scaled(1000.0)),
    ("MBtu", energy::BTU_IT.scaled(1000.0)),
    ("MBTU", energy::BTU_IT.scaled(1000.0)),
    ("[Btu]", energy::BTU_TH),
    ("[BTU]", energy::BTU_TH),
    ("britishthermalunit", energy::BTU_TH),
    ("Btu_39", energy::BTU_39),
    ("BTU_39", energy::BTU_39),
    ("britishthermalunitat39\u{b0}F", energy::BTU_39),
    ("btu_39\u{b0}F", energy::BTU_39),
    ("Btu_59", energy::BTU_59),
    ("BTU_59", energy::BTU_59),
    ("britishthermalunitat59\u{b0}F", energy::BTU_59),
    ("btu_59\u{b0}F", energy::BTU_59),
    ("Btu_60", energy::BTU_60),
    ("BTU_60", energy::BTU_60),
    ("britishthermalunitat60\u{b0}F", energy::BTU_60),
    ("btu_60\u{b0}F", energy::BTU_60),
    ("Btu_m", energy::BTU_MEAN),
    ("BTU_M", energy::BTU_MEAN),
    ("meanBritishthermalunit", energy::BTU_MEAN),
    ("Btu_IT", energy::BTU_IT),
    ("BTU_IT", energy::BTU_IT),
    ("Britishthermalunit_IT", energy::BTU_IT),
    ("Btu_th", energy::BTU_TH),
    ("[BTU_TH]", energy::BTU_TH),
    ("BTU_th", energy::BTU_TH),
    ("Britishthermalunit_th", energy::BTU_TH),
    ("Btu_iso", energy::BTU_ISO),
    ("CHU", J.scaled(1899.0)),
    ("tontnt", energy::TON_TNT),
    ("tonoftnt", energy::TON_TNT),
    ("tonsoftnt", energy::TON_TNT),
    ("tonsofTNT", energy::TON_TNT),
    ("ton(explosives)", energy::TON_TNT),
    ("kiloton", energy::TON_TNT.scaled(1e3)),
    ("megaton", energy::TON_TNT.scaled(1e6)),
    ("gigaton", energy::TON_TNT.scaled(1e9)),
    ("kton", energy::TON_TNT.scaled(1e3)),
    ("Mton", energy::TON_TNT.scaled(1e6)),
    ("Gton", energy::TON_TNT.scaled(1e9)),
    ("boe", energy::BOE),
    ("toe", energy::TOE),
    ("tce", energy::TCE),
    ("foeb", FOEB),
    ("fueloilequivalentof1barrel", FOEB),
    ("fueloilequivalentof1kiloliter", FOEB.divide(volume::BARREL).multiply(M.pow(3))),
    ("CFM", CFM),
    ("CFS", length::FT.pow(3).divide(S)),
    ("cfm", CFM),
    ("cfs", length::FT.pow(3).divide(S)),
    ("cubicfeetperminute", CFM),
    ("gps", volume::GAL.divide(S)),
    ("gpm", volume::GAL.divide(MIN)),
    ("gph", volume::GAL.divide(HR)),
    ("quad", energy::QUAD),
    ("therm", energy::THERM_EC),
    ("thm", energy::THERM_EC),
    ("therm(EC)", energy::THERM_EC),
    ("thm_ec", energy::THERM_EC),
    ("therm_ec", energy::THERM_EC),
    ("therm_us", energy::THERM_US),
    ("thm_us", energy::THERM_US),
    ("therm_br", energy::THERM_BR),
    ("thermie", THERMIE),
    ("kWh", KWH),
    ("kwh", KWH),
    ("kilowatthour", KWH),
    ("MWh", MWH),
    ("megawatthour", MWH),
    ("GWh", energy::GWH),
    ("Wh", W.multiply(HR)),
    ("tonc", energy::TON_COOLING),
    ("ton(refrigeration)", energy::TON_COOLING),
    ("ton(cooling)", energy::TON_COOLING),
    ("tonhour", TON_HOUR),
    ("tonhour(refrigeration)", TON_HOUR),
    ("RT", energy::TON_COOLING),
    ("TR", energy::TON_COOLING),
    ("tons", energy::TON_COOLING.multiply(S)),
    ("tonh", TON_HOUR),
    ("EER", EER),
    ("ft*lb", energy::FOOT_POUND),
    ("ftlb", energy::FOOT_POUND),
    ("ft-lb", energy::FOOT_POUND),
];

const PRESSURES: &[Entry] = &[
    ("bar", energy::BAR),
    ("BAR", energy::BAR),
    ("mbar", energy::MBAR),
    ("atm", energy::ATM),
    ("ATM", energy::ATM),
    ("atmos", energy::ATM),
    ("atmosphere", energy::ATM),
    ("standardatmosphere", energy::ATM),
    ("stdatmosphere", energy::ATM),
    ("stdatm", energy::ATM),
    ("att", energy::ATT),
    ("at", energy::ATT),
    ("technicalatmosphere", energy::ATT),
    ("atmospheretechnical", energy::ATT),
    ("techatmosphere", energy::ATT),
    ("techatm", energy::ATT),
    ("ATT", energy::ATT),
    ("psi", energy::PSI),
    ("ksi", energy::KSI),
    ("psia", energy::PSI),
    ("psf", energy::PSF),
    ("poundpersquareinch", energy::PSI),
    ("poundspersquareinch", energy::PSI),
    ("pound/squareinch", energy::PSI),
    ("pounds/squareinch", energy::PSI),
    ("[PSI]", energy::PSI),
    ("[psi]", energy::PSI),
    ("inHg", energy::INHG),
    ("ftH2O", energy::INH2O.scaled(12.0)),
    ("footwater", energy::INH2O.scaled(12.0)),
    ("inH2O", energy::INH2O),
    ("in[Hg]", energy::INHG),
    ("in[H2O]", energy::INH2O),
    ("IN[HG]", energy::INHG),
    ("IN[H2O]", energy::INH2O),
    ("[in_i'Hg]", energy::INHG),
    ("[IN_I'HG]", energy::INHG),
    ("inchofmercury", energy::INHG),
    ("inchmercury", energy::INHG),
    ("inch{mercury}", energy::INHG),
    ("inchofmercury_i", energy::INHG),
    ("inchofmercurycolumn", energy::INHG),
    ("[in_i'H2O]", energy::INH2O),
    ("[IN_I'H2O]", energy::INH2O),
    ("inchwater", energy::INH2O),
    ("inch(international)ofwater", energy::INH2O),
    ("inchofwater", energy::INH2O),
    ("inchofwater_i", energy::INH2O),
    ("inch{water}", energy::INH2O),
    ("inchofwatercolumn", energy::INH2O),
    ("mmHg", energy::MMHG),
    ("mm[Hg]", energy::MMHG),
    ("MM[HG]", energy::MMHG),
    ("cmHg", energy::MMHG.scaled(10.0)),
    ("cm[Hg]", energy::MMHG.scaled(10.0)),
    ("CM[HG]", energy::MMHG.scaled(10.0)),
    ("mHg", energy::MMHG.scaled(1000.0)),
    ("m*Hg", energy::MMHG.scaled(1000.0)),
    ("m[Hg]", energy::MMHG.scaled(1000.0)),
    ("M[HG]", energy::MMHG.scaled(1000.0)),
    ("m[HG]", energy::MMHG.scaled(1000.0)),
    ("metermercury", energy::MMHG.scaled(1000.0)),
    ("meterofmercury", energy::MMHG.scaled(1000.0)),
    ("metreofmercury", energy::MMHG.scaled(1000.0)),
    ("meter{mercury}", energy::MMHG.scaled(1000.0)),
    ("meter(mercury)", energy::MMHG.scaled(1000.0)),
    ("metersofmercury", energy::MMHG.scaled(1000.0)),
    ("metre{mercury}", energy::MMHG.scaled(1000.0)),
    ("metre(mercury)", energy::MMHG.scaled(1000.0)),
    ("metresofmercury", energy::MMHG.scaled(1000.0)),
    ("meterofmercurycolumn", energy::MMHG.scaled(1000.0)),
    ("metreofmercurycolumn", energy::MMHG.scaled(1000.0)),
    ("mmH2O", energy::MMH2O),
    ("mm[H2O]", energy::MMH2O),
    ("MM[H2O]", energy::MMH2O),
    ("cmH2O", energy::CMH2O),
    ("cm[H2O]", energy::CMH2O),
    ("CM[H2O]", energy::CMH2O),
    ("mH2O", energy::MMH2O.scaled(1000.0)),
    ("m*H2O", energy::MMH2O.scaled(1000.0)),
    ("m[H2O]", energy::MMH2O.scaled(1000.0)),
    ("M[H2O]", energy::MMH2O.scaled(1000.0)),
    ("meterwater", energy::MMH2O.scaled(1000.0)),
    ("meterofwater", energy::MMH2O.scaled(1000.0)),
    ("metreofwater", energy::MMH2O.scaled(1000.0)),
    ("metersofwater", energy::MMH2O.scaled(1000.0)),
    ("meters{water}", energy::MMH2O.scaled(1000.0)),
    ("meter{water}", energy::MMH2O.scaled(1000.0)),
    ("meters(water)", energy::MMH2O.scaled(1000.0)),
    ("meter(water)", energy::MMH2O.scaled(1000.0)),
    ("meterofwatercolumn", energy::MMH2O.scaled(1000.0)),
    ("metresofwater", energy::MMH2O.scaled(1000.0)),
    ("metres{water}", energy::MMH2O.scaled(1000.0)),
    ("metre{water}", energy::MMH2O.scaled(1000.0)),
    ("metres(water)", energy::MMH2O.scaled(1000.0)),
    ("metre(water)", energy::MMH2O.scaled(1000.0)),
    ("metreofwatercolumn", energy::MMH2O.scaled(1000.0)),
    ("torr", energy::TORR),
    ("Torr", energy::TORR),
    ("TORR", energy::TORR),
];

const DATA_UNITS: &[Entry] = &[
    ("bps", data::BPS),
    ("baud", data::BAUD),
    ("Bd", data::BAUD),
    ("BD", data::BAUD),
    ("bit", data::BIT),
    ("BIT", data::BIT),
    ("Bps", data::BYTE.divide(S)),
    ("byte", data::BYTE),
    ("By", data::BYTE),
    ("BY", data::BYTE),
    ("nibble", data::NIBBLE),
    ("kB", data::KB),
    ("MB", data::MB),
    ("GB", data::GB),
    ("TB", data::TB),
    ("kiB", data::KIB),
    ("KiB", data::KIB),
    ("MiB", data::MIB),
    ("GiB", data::GIB),
    ("TiB", data::TIB),
    ("shannon", data::SHANNON),
    ("hartley", data::HARTLEY),
    ("nat", data::NAT),
    ("floatingpointoperation", data::FLOP),
    ("flop", data::FLOP),
    ("flops", data::FLOPS),
    ("mips", data::MIPS),
];

const RATIOS_AND_MISC: &[Entry] = &[
    ("ppth", special::PPM.scaled(1e3)),
    ("PPTH", special::PPM.scaled(1e3)),
    ("ppm", special::PPM),
    ("PPM", special::PPM),
    ("[PPM]", special::PPM),
    ("partspermillion", special::PPM),
    ("ppb", special::PPB),
    ("PPB", special::PPB),
    ("[PPB]", special::PPB),
    ("partsperbillion", special::PPB),
    ("ppt", special::PPB.scaled(1e-3)),
    ("pptr", special::PPB.scaled(1e-3)),
    ("PPTR", special::PPB.scaled(1e-3)),
    ("[PPTR]", special::PPB.scaled(1e-3)),
    ("partspertrillion", special::PPB.scaled(1e-3)),
    ("[lne]", length::LINE),
    ("[LNE]", length::LINE),
    ("line", length::LINE),
    ("pnt", length::POINT),
    ("[PNT]", length::POINT),
    ("point", length::POINT),
    ("pca", length::PICA),
    ("[PCA]", length::PICA),
    ("pica", length::PICA),
    ("twip", length::TWIP),
    ("printer'spoint", length::PRINTERS_POINT),
    ("pointprinter", length::PRINTERS_POINT),
    ("pnt_pr", length::PRINTERS_POINT),
    ("[PNT_PR]", length::PRINTERS_POINT),
    ("printer'spica", length::PRINTERS_PICA),
    ("picaprinter", length::PRINTERS_PICA),
    ("pca_pr", length::PRINTERS_PICA),
    ("[PCA_PR]", length::PRINTERS_PICA),
    ("pied", length::PIED),
    ("[PIED]", length::PIED),
    ("pouce", length::POUCE),
    ("[POUCE]", length::POUCE),
    ("ligne", length::LIGNE),
    ("[LIGNE]", length::LIGNE),
    ("didot", length::DIDOT),
    ("[DIDOT]", length::DIDOT),
    ("cicero", length::CICERO),
    ("[CICERO]", length::CICERO),
    ("tex", mass::TEX),
    ("texes", mass::TEX),
    ("TEX", mass::TEX),
    ("denier", mass::DENIER),
    ("denier(linearmassdensity)", mass::DENIER),
    ("den", mass::DENIER),
    ("[DEN]", mass::DENIER),
    ("span(cloth)", length::IN.scaled(9.0)),
    ("finger(cloth)", length::IN.scaled(4.5)),
    ("nail(cloth)", length::IN.scaled(2.25)),
];

const CLINICAL_UNITS: &[Entry] = &[
    ("PRU", PRU),
    ("peripheralvascularresistanceunit", PRU),
    ("peripheralresistanceunit", PRU),
    ("[MET]", clinical::MET),
    ("MET", clinical::MET),
    ("metabolicEquivalentofTask", clinical::MET),
    ("metabolicequivalents", clinical::MET),
    ("[wood'U]", WOOD_UNIT),
    ("[WOOD'U]", WOOD_UNIT),
    ("woodunit", WOOD_UNIT),
    ("dpt", clinical::DIOPTER),
    ("diop", clinical::DIOPTER),
    ("[DIOP]", clinical::DIOPTER),
    ("diopter", clinical::DIOPTER),
    ("dioptre", clinical::DIOPTER),
    ("diopter(lens)", clinical::DIOPTER),
    ("[p'diop]", PRISM_DIOPTER),
    ("pdiop", PRISM_DIOPTER),
    ("[P'DIOP]", PRISM_DIOPTER),
    ("PD", PRISM_DIOPTER),
    ("prismdiopter", PRISM_DIOPTER),
    ("prismdiopter(magnifyingpower)", PRISM_DIOPTER),
    ("%slope", PRISM_DIOPTER),
    ("%[slope]", PRISM_DIOPTER),
    ("%[SLOPE]", PRISM_DIOPTER),
    ("percentofslope", PRISM_DIOPTER),
    ("Ch", clinical::CHARRIERE),
    ("[CH]", clinical::CHARRIERE),
    ("french(cathetergauge)", clinical::CHARRIERE),
    ("mesh_i", clinical::MESH),
    ("[MESH_I]", clinical::MESH),
    ("mesh", clinical::MESH),
    ("meshes", clinical::MESH),
    ("ASD", special::ASD),
    ("[m/s2/Hz^(1/2)]", special::ASD),
    ("[M/s2/HZ^(1/2)]", special::ASD),
    ("Hz^(1/2)", special::ROOT_HERTZ),
    ("HZ^(1/2)", special::ROOT_HERTZ),
    ("squarerootofhertz", special::ROOT_HERTZ),
    ("squareroothertz", special::ROOT_HERTZ),
    ("roothertz", special::ROOT_HERTZ),
    ("HPF", clinical::HPF),
    ("highpowerfield", clinical::HPF),
    ("LPF", clinical::LPF),
    ("lowpowerfield", clinical::LPF),
    ("[arb'U]", clinical::ARB_UNIT),
    ("[ARB'U]", clinical::ARB_UNIT),
    ("[IU]", clinical::IU),
    ("[iU]", clinical::IU),
    ("IU", clinical::IU),
    ("[USP'U]", clinical::USP_UNIT),
    ("[GPL'U]", clinical::GPL_UNIT),
    ("[MPL'U]", clinical::MPL_UNIT),
    ("[APL'U]", clinical::APL_UNIT),
    ("[beth'U]", clinical::BETHESDA_UNIT),
    ("[BETH'U]", clinical::BETHESDA_UNIT),
    ("[anti'Xa'U]", clinical::ANTI_XA_UNIT),
    ("[todd'U]", clinical::TODD_UNIT),
    ("[dye'U]", clinical::DYE_UNIT),
    ("[smgy'U]", clinical::SOMOGYI_UNIT),
    ("[bdsk'U]", clinical::BODANSKY_UNIT),
    ("[ka'U]", clinical::KING_ARMSTRONG_UNIT),
    ("[knk'U]", clinical::KUNKEL_UNIT),
    ("[mclg'U]", clinical::MAC_LAGAN_UNIT),
    ("[tb'U]", clinical::TUBERCULIN_UNIT),
    ("[EU]", clinical::ELISA_UNIT),
    ("[AU]", clinical::ALLERGEN_UNIT),
    ("[hnsf'U]", clinical::HOUNSFIELD_UNIT),
    ("[HNSF'U]", clinical::HOUNSFIELD_UNIT),
    ("[PFU]", clinical::PFU),
    ("PFU", clinical::PFU),
    ("plaqueformingunits", clinical::PFU),
    ("[FFU]", clinical::FFU),
    ("[CFU]", clinical::CFU),
    ("CFU", clinical::CFU),
    ("[Lf]", clinical::LF),
    ("[LF]", clinical::LF),
    ("50%tissuecultureinfectiousdose", TISSUE_DOSE),
    ("50%cellcultureinfectiousdose", TISSUE_DOSE.with_commodity(commodity::CELLS)),
    ("50%embryoinfectiousdose", TISSUE_DOSE.with_commodity(commodity::EMBRYOS)),
    ("TCID50", TISSUE_DOSE),
    ("CCID50", TISSUE_DOSE.with_commodity(commodity::CELLS)),
    ("EID50", TISSUE_DOSE.with_commodity(commodity::EMBRYOS)),
    ("meq", clinical::MEQ),
    ("mEq", clinical::MEQ),
];

const LOGARITHMIC: &[Entry] = &[
    ("B", log::BEL),
    ("bel", log::BEL),
    ("dB", log::DB),
    ("decibel", log::DB),
    ("decibels", log::DB),
    ("DB", log::DB),
    ("Np", log::NEPER),
    ("NEP", log::NEPER),
    ("nepers", log::NEPER),
    ("neper", log::NEPER),
    ("BSPL", log::BEL.multiply(SPL_REFERENCE)),
    ("B[SPL]", log::BEL.multiply(SPL_REFERENCE)),
    ("B(SPL)", log::BEL.multiply(SPL_REFERENCE)),
    ("belSPL", log::BEL.multiply(SPL_REFERENCE)),
    ("belsoundpressure", log::BEL.multiply(SPL_REFERENCE)),
    ("dB[SPL]", log::DB.multiply(SPL_REFERENCE)),
    ("decibel(SPL)", log::DB.multiply(SPL_REFERENCE)),
    ("DB[SPL]", log::DB.multiply(SPL_REFERENCE)),
    ("DBSPL", log::DB.multiply(SPL_REFERENCE)),
    ("B[V]", log::BEL_V),
    ("B(V)", log::BEL_V),
    ("BV", log::BEL_V),
    ("Bvolt", log::BEL_V),
    ("belvolt", log::BEL_V),
    ("belV", log::BEL_V),
    ("dB[V]", log::DBV),
    ("decibelV", log::DBV),
    ("dB(V)", log::DBV),
    ("DB[V]", log::DBV),
    ("dBV", log::DBV),
    ("B[mV]", log::BEL.multiply(V.scaled(1e-3))),
    ("B(mV)", log::BEL.multiply(V.scaled(1e-3))),
    ("belmillivolt", log::BEL.multiply(V.scaled(1e-3))),
    ("belmV", log::BEL.multiply(V.scaled(1e-3))),
    ("dB[mV]", log::DB.multiply(V.scaled(1e-3))),
    ("dB(mV)", log::DB.multiply(V.scaled(1e-3))),
    ("B[MV]", log::BEL.multiply(V.scaled(1e-3))),
    ("DB[MV]", log::DB.multiply(V.scaled(1e-3))),
    ("B[uV]", log::BEL.multiply(V.scaled(1e-6))),
    ("dB[uV]", log::DB.multiply(V.scaled(1e-6))),
    ("decibelmicrovolt", log::DB.multiply(V.scaled(1e-6))),
    ("B[UV]", log::BEL.multiply(V.scaled(1e-6))),
    ("B(uV)", log::BEL.multiply(V.scaled(1e-6))),
    ("belmicrovolt", log::BEL.multiply(V.scaled(1e-6))),
    ("DB[UV]", log::DB.multiply(V.scaled(1e-6))),
    ("B[10.nV]", log::BEL.multiply(V.scaled(1e-8))),
    ("B(10nV)", log::BEL.multiply(V.scaled(1e-8))),
    ("bel10nanovolt", log::BEL.multiply(V.scaled(1e-8))),
    ("dB[10.nV]", log::DB.multiply(V.scaled(1e-8))),
    ("decibel10nanovolt", log::DB.multiply(V.scaled(1e-8))),
    ("B[10*NV]", log::BEL.multiply(V.scaled(1e-8))),
    ("DB[10*NV]", log::DB.multiply(V.scaled(1e-8))),
    ("B[W]", log::BEL_W),
    ("B(W)", log::BEL_W),
    ("belwatt", log::BEL_W),
    ("belW", log::BEL_W),
    ("dB[W]", log::DBW),
    ("DB[W]", log::DBW),
    ("dBW", log::DBW),
    ("dBm", log::DBM),
    ("dB[mW]", log::DBM),
    ("B[kW]", log::BEL.multiply(KW)),
    ("B(kW)", log::BEL.multiply(KW)),
    ("DB[kW]", log::DB.multiply(KW)),
    ("B[KW]", log::BEL.multiply(KW)),
    ("belkilowatt", log::BEL.multiply(KW)),
    ("belkW", log::BEL.multiply(KW)),
    ("DB[KW]", log::DB.multiply(KW)),
    ("[hp'_X]", log::NEGLOG10),
    ("[HP'_X]", log::NEGLOG10),
    ("[hp'_C]", log::NEGLOG100),
    ("[HP'_C]", log::NEGLOG100),
    ("[hp'_M]", log::NEGLOG1000),
    ("[HP'_M]", log::NEGLOG1000),
    ("[hp'_Q]", log::NEGLOG50000),
    ("[HP'_Q]", log::NEGLOG50000),
    ("[hp_X]", log::NEGLOG10.with_commodity(commodity::HAHNEMANN)),
    ("[HP_X]", log::NEGLOG10.with_commodity(commodity::HAHNEMANN)),
    ("[hp_C]", log::NEGLOG100.with_commodity(commodity::HAHNEMANN)),
    ("[HP_C]", log::NEGLOG100.with_commodity(commodity::HAHNEMANN)),
    ("[hp_M]", log::NEGLOG1000.with_commodity(commodity::HAHNEMANN)),
    ("[HP_M]", log::NEGLOG1000.with_commodity(commodity::HAHNEMANN)),
    ("[hp_Q]", log::NEGLOG50000.with_commodity(commodity::HAHNEMANN)),
    ("[HP_Q]", log::NEGLOG50000.with_commodity(commodity::HAHNEMANN)),
    ("[kp_X]", log::NEGLOG10.with_commodity(commodity::KORSAKOV)),
    ("[KP_X]", log::NEGLOG10.with_commodity(commodity::KORSAKOV)),
    ("[kp_C]", log::NEGLOG100.with_commodity(commodity::KORSAKOV)),
    ("[KP_C]", log::NEGLOG100.with_commodity(commodity::KORSAKOV)),
    ("[kp_M]", log::NEGLOG1000.with_commodity(commodity::KORSAKOV)),
    ("[KP_M]", log::NEGLOG1000.with_commodity(commodity::KORSAKOV)),
    ("[kp_Q]", log::NEGLOG50000.with_commodity(commodity::KORSAKOV)),
    ("[KP_Q]", log::NEGLOG50000.with_commodity(commodity::KORSAKOV)),
    ("pH", log::PH),
    ("[PH]", log::PH),
    ("Richter", log::RICHTER),
    ("richter", log::RICHTER),
    ("Mw", log::MOMENT_MAGNITUDE),
    ("Beaufort", log::BEAUFORT),
    ("beaufort", log::BEAUFORT),
    ("Fujita", log::FUJITA),
    ("SaffirSimpson", log::SAFFIR_SIMPSON),
];

const FORWARD_SECTIONS: &[&[Entry]] = &[
    NUMBERS,
    SI_UNITS,
    CGS_UNITS,
    LENGTHS,
    AREAS_AND_VOLUMES,
    TIMES,
    ANGLES,
    TEMPERATURES,
    PHYSICAL_CONSTANTS,
    CURRENCY_AND_COUNTS,
    MASSES_AND_FORCES,
    ENERGY_AND_POWER,
    PRESSURES,
    DATA_UNITS,
    RATIOS_AND_MISC,
    CLINICAL_UNITS,
    LOGARITHMIC,
];

static FORWARD: Lazy<HashMap<&'static str, PreciseUnit>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(FORWARD_SECTIONS.iter().map(|s| s.len()).sum());
    for section in FORWARD_SECTIONS {
        for &(name, unit) in section.iter() {
            map.entry(name).or_insert(unit);
        }
    }
    ::log::debug!("recognition table loaded with {} keys", map.len());
    map
});

/// Look up a literal unit key.
///
/// Keys are case-sensitive; no normalization is applied here.
///
/// ```rust
/// use units::table::lookup;
/// use units_core::units::si::KWH;
///
/// assert_eq!(lookup("kWh"), Some(KWH));
/// assert!(lookup("kilowatt hour").is_none());
/// ```
pub fn lookup(name: &str) -> Option<PreciseUnit> {
    FORWARD.get(name).copied()
}

/// Number of keys in the forward table.
pub fn len() -> usize {
    FORWARD.len()
}

// ─────────────────────────────────────────────────────────────────────────────
// Reverse table
// ─────────────────────────────────────────────────────────────────────────────

/// Preferred output names, most preferred first.
const OUTPUT_NAMES: &[(PreciseUnit, &str)] = &[
    (M, "m"),
    (M.pow(2), "m^2"),
    (M.pow(3), "m^3"),
    (KG, "kg"),
    (MOL, "mol"),
    (A, "A"),
    (V, "V"),
    (S, "s"),
    (CD, "cd"),
    (K, "K"),
    (N, "N"),
    (PA, "Pa"),
    (J, "J"),
    (C, "C"),
    (F, "F"),
    (SIEMENS, "S"),
    (WB, "Wb"),
    (T, "T"),
    (H, "H"),
    (LM, "lm"),
    (LX, "lux"),
    (HZ, "Hz"),
    (BQ, "Bq"),
    (ROENTGEN_UNIT, "R"),
    (length::IN, "in"),
    (length::IN.pow(2), "in^2"),
    (length::IN.pow(3), "in^3"),
    (length::FT, "ft"),
    (length::IMP_FOOT, "ft_br"),
    (length::IMP_INCH, "in_br"),
    (length::IMP_YARD, "yd_br"),
    (length::IMP_ROD, "rd_br"),
    (length::IMP_MILE, "mi_br"),
    (length::IMP_CHAIN, "ch_br"),
    (length::IMP_PACE, "pc_br"),
    (length::IMP_LINK, "lk_br"),
    (length::IMP_NAUTICAL_MILE, "nmi_br"),
    (KNOT_BR, "kn_br"),
    (cgs::CURIE, "Ci"),
    (cgs::GAUSS, "Gs"),
    (energy::BAR, "bar"),
    (energy::KNOT, "knot"),
    (length::FT.pow(2), "ft^2"),
    (length::FT.pow(3), "ft^3"),
    (length::YD, "yd"),
    (length::YD.pow(2), "yd^2"),
    (length::YD.pow(3), "yd^3"),
    (MIN, "min"),
    (MS, "ms"),
    (NS, "ns"),
    (HR, "hr"),
    (time::DAY, "day"),
    (time::WEEK, "week"),
    (time::YR, "yr"),
    (time::YEAR_SIDEREAL, "syr"),
    (time::YEAR_GREGORIAN, "a_g"),
    (time::YEAR_TROPICAL, "a_t"),
    (time::YEAR_JULIAN, "a_j"),
    (angle::DEG, "deg"),
    (RAD, "rad"),
    (angle::GON, "grad"),
    (temperature::DEG_C, "\u{b0}C"),
    (temperature::DEG_F, "\u{b0}F"),
    (length::MILE, "mi"),
    (length::MILE.pow(2), "mi^2"),
    (CM, "cm"),
    (KM, "km"),
    (KM.pow(2), "km^2"),
    (MM, "mm"),
    (NM, "nm"),
    (length::LY, "ly"),
    (length::AU, "au"),
    (MILLI, "milli"),
    (MICRO, "micro"),
    (NANO, "nano"),
    (PICO, "pico"),
    (TEN, "ten"),
    (HUNDRED, "hundred"),
    (FEMTO, "femto"),
    (ATTO, "atto"),
    (KILO, "kilo"),
    (MEGA, "mega"),
    (GIGA, "giga"),
    (TERA, "tera"),
    (special::PERCENT, "%"),
    (special::ASD, "ASD"),
    (EXA, "exa"),
    (CURRENCY, "$"),
    (COUNT, "item"),
    (special::RATIO, ""),
    (special::ERROR, "ERROR"),
    (special::DEFUNIT, "defunit"),
    (GY, "Gy"),
    (SV, "Sv"),
    (angle::RPM, "rpm"),
    (RAD.divide(S), "rad/s"),
    (KAT, "kat"),
    (SR, "sr"),
    (W, "W"),
    (CURRENCY.divide(MWH), "$/MWh"),
    (length::ACRE, "acre"),
    (MW, "MW"),
    (KW, "kW"),
    (MW_MILLI, "mW"),
    (special::PU_MW, "puMW"),
    (special::PU_W, "puW"),
    (special::PU_V, "puV"),
    (special::PU_A, "puA"),
    (MA, "mA"),
    (KV, "kV"),
    (energy::THERM_EC, "therm"),
    (energy::TON_COOLING, "tonc"),
    (length::ARE, "are"),
    (length::HECTARE, "hectare"),
    (length::BARN, "barn"),
    (CURRENCY.divide(volume::GAL), "$/gal"),
    (special::PU.multiply(OHM), "puOhm"),
    (special::PU_HZ, "puHz"),
    (energy::HP, "hp"),
    (energy::MPH, "mph"),
    (energy::EV, "eV"),
    (energy::KCAL, "kcal"),
    (energy::BTU_IT, "btu"),
    (CFM, "CFM"),
    (energy::ATM, "atm"),
    (energy::PSI, "psi"),
    (energy::INHG, "inHg"),
    (energy::INH2O, "inH2O"),
    (energy::MMHG, "mmHg"),
    (energy::MMH2O, "mmH2O"),
    (energy::TORR, "torr"),
    (EER, "EER"),
    (energy::QUAD, "quad"),
    (clinical::IU, "[IU]"),
    (CURRENCY.divide(KWH), "$/kWh"),
    (KWH, "kWh"),
    (MWH, "MWh"),
    (special::MEGABUCK, "M$"),
    (special::GIGABUCK, "B$"),
    (L, "L"),
    (ML, "mL"),
    (MICROLITER, "uL"),
    (volume::GAL, "gal"),
    (volume::BARREL, "bbl"),
    (mass::LB, "lb"),
    (mass::TON, "ton"),
    (mass::TONNE, "t"),
    (mass::DALTON, "u"),
    (data::KB, "kB"),
    (data::MB, "MB"),
    (data::GB, "GB"),
    (data::KIB, "kiB"),
    (data::MIB, "MiB"),
    (volume::BUSHEL, "bu"),
    (volume::FLOZ, "fl oz"),
    (mass::OZ, "oz"),
    (length::ANGSTROM, "\u{c5}"),
    (G, "g"),
    (MG, "mg"),
    (volume::CUP, "cup"),
    (volume::TSP, "tsp"),
    (volume::TBSP, "tbsp"),
    (volume::QUART, "qt"),
    (data::GIB, "GiB"),
    (special::PPM, "ppm"),
    (special::PPB, "ppb"),
];

static REVERSE: Lazy<HashMap<Unit, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(OUTPUT_NAMES.len());
    for &(unit, name) in OUTPUT_NAMES {
        map.entry(unit_cast(unit)).or_insert(name);
    }
    map
});

/// Preferred printed name of `unit`, if it has one.
pub fn unit_name(unit: Unit) -> Option<&'static str> {
    REVERSE.get(&unit).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn common_keys_resolve() {
        assert_eq!(lookup("m"), Some(M));
        assert_eq!(lookup("kWh"), Some(KWH));
        assert_eq!(lookup("\u{b0}C"), Some(temperature::DEG_C));
        assert_eq!(lookup("fl oz"), Some(volume::FLOZ));
        assert!(lookup("blarg").is_none());
    }

    #[test]
    fn first_listing_wins() {
        // "D" is listed as day before debye
        assert_eq!(lookup("D"), Some(time::DAY));
        assert_eq!(lookup("fur"), Some(length::US_FURLONG));
    }

    #[test]
    fn sentinel_keys() {
        assert!(lookup("ERROR").is_some_and(|u| u.is_error()));
        assert!(lookup("br").is_some_and(|u| u.is_error()));
        assert!(lookup("NaN").is_some_and(|u| u.multiplier().is_nan()));
        assert!(lookup("").is_some_and(|u| u.is_default()));
    }

    #[test]
    fn commodity_entries_keep_their_commodity() {
        let cell = lookup("cell").unwrap();
        assert_eq!(cell.commodity(), commodity::CELLS);
        let osm = lookup("osm").unwrap();
        assert_eq!(osm.commodity(), commodity::PARTICLES);
        assert!(osm.has_same_base(MOL));
    }

    #[test]
    fn scaled_entries() {
        assert_relative_eq!(lookup("dozen").unwrap().multiplier(), 12.0);
        assert_relative_eq!(lookup("kiloton").unwrap().multiplier(), 4.184e12, max_relative = 1e-9);
        assert_relative_eq!(lookup("caliber").unwrap().multiplier(), 0.000_254, max_relative = 1e-12);
    }

    #[test]
    fn reverse_names() {
        assert_eq!(unit_name(unit_cast(M)), Some("m"));
        assert_eq!(unit_name(unit_cast(N.multiply(M))), Some("J"));
        assert_eq!(unit_name(unit_cast(S.inv())), Some("Hz"));
        assert_eq!(unit_name(unit_cast(ONE)), Some(""));
        assert_eq!(unit_name(unit_cast(M.divide(S))), None);
    }

    #[test]
    fn every_reverse_name_parses_back_through_the_table() {
        for &(unit, name) in OUTPUT_NAMES {
            if name.is_empty() {
                continue;
            }
            if let Some(found) = lookup(name) {
                if found.is_error() {
                    continue;
                }
                assert!(found.has_same_base(unit), "{name}");
            }
        }
    }
}
