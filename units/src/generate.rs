//! Unit to string conversion.
//!
//! [`to_string`] tries progressively more generic renderings and returns the first that fits:
//!
//! 1. a direct name from the registry or the reverse table, or the name of its inverse or square root;
//! 2. a named dimension with a prefix or numeric multiplier (`km^2`, `0.3048m`);
//! 3. a named unit times or divided by one of a short list of everyday units (`kg/m^3`, `W*hr`);
//! 4. the `EQXUN[n]`, `CXUN[n]` and `CXCUN[n]` tags for units in the extension slots;
//! 5. the same combinations on the bare dimensions, keeping the shortest numeric candidate;
//! 6. a raw product of base units, after trying to lower its order with `V` or `W`.
//!
//! Any commodity is spliced into the result as `{name}`. Every string produced parses back to the same unit.
//!
//! ```rust
//! use units::{to_string, MatchFlags};
//! use units_core::units::si::{J, KM, M, S};
//!
//! assert_eq!(to_string(J, MatchFlags::DEFAULT), "J");
//! assert_eq!(to_string(KM.pow(2), MatchFlags::DEFAULT), "km^2");
//! assert_eq!(to_string(M.divide(S), MatchFlags::DEFAULT), "m/s");
//! ```

use crate::commodity::{self, INVERSE_BIT};
use crate::flags::MatchFlags;
use crate::parse::number::leading_number;
use crate::{registry, table};
use std::borrow::Cow;
use units_core::custom::{
    custom_count_unit_index, custom_unit_index, equation_unit, equation_unit_index, generate_custom_count_unit,
    generate_custom_unit, is_custom_count_unit, is_custom_count_unit_inverted, is_custom_unit,
    is_custom_unit_inverted,
};
use units_core::si::{CURRENCY, COUNT, HR, KG, KM, KW, L, M, MIN, MS, MW, MW_MILLI, S, V, W};
use units_core::units::length::FT;
use units_core::units::mass::LB;
use units_core::units::time::DAY;
use units_core::{unit_cast, PreciseUnit, Unit, UnitData};

/// Everyday units tried as a numerator or denominator partner.
const TEST_UNITS: [(PreciseUnit, &str); 22] = [
    (M, "m"),
    (S, "s"),
    (MS, "ms"),
    (MIN, "min"),
    (HR, "hr"),
    (DAY, "day"),
    (LB, "lb"),
    (FT, "ft"),
    (FT.pow(2), "ft^2"),
    (FT.pow(3), "ft^3"),
    (M.pow(2), "m^2"),
    (L, "L"),
    (KG, "kg"),
    (KM, "km"),
    (CURRENCY, "$"),
    (V, "V"),
    (W, "W"),
    (KW, "kW"),
    (MW_MILLI, "mW"),
    (MW, "MW"),
    (S.pow(2), "s^2"),
    (COUNT, "item"),
];

/// Units that may lower the order of an otherwise raw base-unit string.
const REDUCERS: [(PreciseUnit, &str); 4] = [
    (V.inv(), "V*"),
    (V, "V^-1*"),
    (W, "W^-1*"),
    (W.inv(), "W*"),
];

const SI_PREFIXES: [(f32, char); 10] = [
    (1e-3, 'm'),
    (1e3, 'k'),
    (1e-6, 'u'),
    (1e-2, 'c'),
    (1e6, 'M'),
    (1e9, 'G'),
    (1e-9, 'n'),
    (1e-12, 'p'),
    (1e-15, 'f'),
    (1e12, 'T'),
];

/// Render a unit as a string that [`parse`](crate::parse) maps back to the same unit.
///
/// # Arguments
/// * `unit` - The unit to render
/// * `flags` - Parser options; the generator currently has none of its own
pub fn to_string(unit: PreciseUnit, _flags: MatchFlags) -> String {
    let names = Names::new();
    splice_commodity(render(unit, &names), unit.commodity())
}

/// Name source for one rendering: registered output names shadow the reverse table.
struct Names {
    registry: bool,
}

impl Names {
    fn new() -> Self {
        Self {
            registry: registry::is_active(),
        }
    }

    fn find(&self, unit: Unit) -> Option<Cow<'static, str>> {
        if self.registry {
            if let Some(name) = registry::custom_unit_name(unit) {
                return Some(Cow::Owned(name));
            }
        }
        table::unit_name(unit).map(Cow::Borrowed)
    }

    /// Like [`Names::find`] but skipping the empty name of the dimensionless one.
    fn find_named(&self, unit: Unit) -> Option<Cow<'static, str>> {
        self.find(unit).filter(|name| !name.is_empty())
    }
}

fn is_numerical(s: &str) -> bool {
    s.bytes().next().is_some_and(crate::normalize::is_numerical)
}

fn render(un: PreciseUnit, names: &Names) -> String {
    let multiplier = un.multiplier();
    if un.is_error() && !multiplier.is_nan() {
        return "ERROR".to_string();
    }
    if multiplier.is_nan() {
        return if un.base_units() == UnitData::error() { "ERROR" } else { "NaN" }.to_string();
    }
    if multiplier.is_infinite() {
        return if multiplier > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let llunit = unit_cast(un);
    if let Some(name) = names.find(llunit) {
        return name.into_owned();
    }
    if let Some(name) = names.find_named(llunit.inv()) {
        return format!("1/{}", name);
    }
    if !un.base_units().root(2).has_e_flag() {
        let square = llunit.root(2);
        if let Some(name) = names.find_named(square) {
            return format!("{}^2", name);
        }
        if let Some(name) = names.find_named(square.inv()) {
            return format!("1/{}^2", name);
        }
    }

    let bunit = Unit::from_base(un.base_units());
    if let Some(name) = names.find_named(bunit) {
        return generate_unit_sequence(multiplier, &name);
    }
    if let Some(name) = names.find_named(bunit.inv()) {
        let prefix = generate_unit_sequence(1.0 / multiplier, &name);
        return match split_number(&prefix) {
            Some((mx, rest)) => format!("{}/{}", multiplier_string(1.0 / mx, true), rest),
            None => format!("1/{}", prefix),
        };
    }

    if let Some(found) = test_unit_combinations(un, names) {
        return found;
    }
    if let Some(tagged) = extension_tag(un) {
        return tagged;
    }
    if let Some(found) = base_combinations(un, names) {
        return found;
    }

    // lower the order with V or W when it helps
    let mut min_order = llunit.base_units().order();
    let mut reduced = un;
    let mut reducer = "";
    if min_order > 3 {
        for (unit, tag) in REDUCERS {
            let candidate = un * unit;
            let order = 1 + candidate.base_units().order();
            if order < min_order {
                min_order = order;
                reduced = candidate;
                reducer = tag;
            }
        }
    }
    generate_unit_sequence(reduced.multiplier(), &format!("{}{}", reducer, raw_unit_string(reduced.base_units())))
}

fn test_unit_combinations(un: PreciseUnit, names: &Names) -> Option<String> {
    for (unit, tag) in TEST_UNITS {
        if let Some(name) = names.find_named(unit_cast(un * unit)) {
            return Some(format!("{}/{}", name, tag));
        }
    }
    for (unit, tag) in TEST_UNITS {
        if let Some(name) = names.find_named(unit_cast(un / unit)) {
            return Some(format!("{}*{}", name, tag));
        }
    }
    for (unit, tag) in TEST_UNITS {
        if let Some(name) = names.find_named(unit_cast((un / unit).inv())) {
            return Some(format!("{}/{}", tag, name));
        }
    }
    for (unit, tag) in TEST_UNITS {
        if let Some(name) = names.find_named(unit_cast((un * unit).inv())) {
            return Some(format!("1/({}*{})", name, tag));
        }
    }
    None
}

/// `EQXUN[n]`, `CXUN[n]` or `CXCUN[n]`, with whatever is left over rendered in front.
fn extension_tag(un: PreciseUnit) -> Option<String> {
    let base = un.base_units();
    let (tag, mut rem) = if un.is_equation() {
        let slot = equation_unit_index(base);
        (format!("EQXUN[{}]", slot), un / PreciseUnit::from_base(equation_unit(slot)))
    } else if is_custom_unit(base) {
        let slot = custom_unit_index(base);
        if is_custom_unit_inverted(base) {
            (format!("CXUN[{}]^-1", slot), un * generate_custom_unit(slot))
        } else {
            (format!("CXUN[{}]", slot), un / generate_custom_unit(slot))
        }
    } else if is_custom_count_unit(base) {
        let slot = custom_count_unit_index(base);
        if is_custom_count_unit_inverted(base) {
            (format!("CXCUN[{}]^-1", slot), un * generate_custom_count_unit(slot))
        } else {
            (format!("CXCUN[{}]", slot), un / generate_custom_count_unit(slot))
        }
    } else {
        return None;
    };
    rem.clear_flags();
    let rem = rem.with_commodity(0);
    if rem.multiplier() != 1.0 || !rem.base_units().empty() {
        return Some(format!("{}*{}", to_string(rem, MatchFlags::DEFAULT), tag));
    }
    Some(tag)
}

/// Partner combinations on the bare dimension vector, where the multiplier becomes a prefix.
fn base_combinations(un: PreciseUnit, names: &Names) -> Option<String> {
    let mut best: Option<String> = None;
    let mut consider = |candidate: String| {
        if best.as_ref().map_or(true, |b| candidate.len() < b.len()) {
            best = Some(candidate);
        }
    };

    for (unit, tag) in TEST_UNITS {
        let ext = un * unit;
        if let Some(name) = names.find_named(Unit::from_base(ext.base_units())) {
            let candidate = format!("{}/{}", generate_unit_sequence(ext.multiplier(), &name), tag);
            if !is_numerical(&candidate) {
                return Some(candidate);
            }
            consider(candidate);
        }
    }
    for (unit, tag) in TEST_UNITS {
        let ext = un / unit;
        if let Some(name) = names.find_named(Unit::from_base(ext.base_units())) {
            let candidate = format!("{}*{}", generate_unit_sequence(ext.multiplier(), &name), tag);
            if !is_numerical(&candidate) {
                return Some(candidate);
            }
            consider(candidate);
        }
    }
    for (unit, tag) in TEST_UNITS {
        let ext = un / unit;
        if let Some(name) = names.find_named(Unit::from_base(ext.base_units()).inv()) {
            let prefix = generate_unit_sequence(1.0 / ext.multiplier(), &name);
            match split_number(&prefix) {
                Some((mx, rest)) => consider(format!("{}{}/{}", multiplier_string(1.0 / mx, true), tag, rest)),
                None => return Some(format!("{}/{}", tag, prefix)),
            }
        }
    }
    for (unit, tag) in TEST_UNITS {
        let ext = un * unit;
        if let Some(name) = names.find_named(Unit::from_base(ext.base_units()).inv()) {
            let prefix = multiplier_string(1.0 / ext.multiplier(), false);
            let candidate = format!("1/({}{}*{})", prefix, name, tag);
            if prefix.len() == 1 {
                return Some(candidate);
            }
            consider(candidate);
        }
    }
    best
}

/// Leading number of a generated string and the text after it.
fn split_number(s: &str) -> Option<(f64, &str)> {
    if !is_numerical(s) {
        return None;
    }
    let (value, used) = leading_number(s).ok().flatten()?;
    Some((value, &s[used..]))
}

/// Product of base units with their powers, in a fixed order.
fn raw_unit_string(base: UnitData) -> String {
    let mut out = String::new();
    let powers = [
        ("m", base.meter()),
        ("kg", base.kg()),
        ("s", base.second()),
        ("A", base.ampere()),
        ("K", base.kelvin()),
        ("mol", base.mole()),
        ("cd", base.candela()),
        ("item", base.count()),
        ("$", base.currency()),
        ("rad", base.radian()),
    ];
    for (name, power) in powers {
        if power == 0 {
            continue;
        }
        if !out.is_empty() {
            out.push('*');
        }
        out.push_str(name);
        if power != 1 {
            out.push('^');
            out.push_str(&power.to_string());
        }
    }
    if base.is_flag() {
        out.push_str("*flag");
    }
    if base.is_per_unit() {
        out.insert_str(0, "pu*");
    }
    if base.has_e_flag() {
        out.insert_str(0, "eflag*");
    }
    out
}

/// SI prefix letter or number to put in front of a unit.
///
/// An exact `1` renders as nothing. With `numeric_only` the prefix letters are not used.
pub(crate) fn multiplier_string(multiplier: f64, numeric_only: bool) -> String {
    if multiplier == 1.0 {
        return String::new();
    }
    if !numeric_only {
        let single = multiplier as f32;
        if let Some((_, prefix)) = SI_PREFIXES.iter().find(|(value, _)| *value == single) {
            return prefix.to_string();
        }
    }
    format_number(multiplier)
}

/// Shortest decimal that reads back as `value`, switching to exponent notation for very large or small values.
fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-5..1e16).contains(&magnitude) {
        format!("{:e}", value)
    } else {
        format!("{}", value)
    }
}

/// Put `multiplier` in front of the unit sequence `seq`, as a prefix where one fits.
///
/// `m^3` becomes `L` and `kg` becomes `g` when that gives a nicer prefix; a `kg` that stays `kg` never takes a
/// letter prefix.
fn generate_unit_sequence(mut multiplier: f64, seq: &str) -> String {
    let mut seq = seq.to_string();
    let mut no_prefix = false;
    if seq.starts_with("m^3") {
        if multiplier <= 0.1 {
            seq.replace_range(..3, "L");
            multiplier *= 1000.0;
        }
    } else if seq.starts_with("m^-3") || seq.starts_with("/m^3") {
        if multiplier > 10.0 {
            seq.replace_range(..4, "L^-1");
            multiplier /= 1000.0;
        }
    } else if seq.starts_with("kg^-1") {
        if multiplier > 100.0 {
            seq.replace_range(..5, "g^-1");
            multiplier /= 1000.0;
        } else {
            no_prefix = true;
        }
    } else if seq.starts_with("/kg") {
        if multiplier > 100.0 {
            seq.replace_range(..3, "g^-1");
            multiplier /= 1000.0;
        } else {
            no_prefix = true;
        }
    } else if seq.starts_with("kg") {
        if multiplier <= 0.1 {
            seq.replace_range(..2, "g");
            multiplier *= 1000.0;
        } else {
            no_prefix = true;
        }
    }
    if multiplier == 1.0 {
        return seq;
    }

    let Some(caret) = seq.find('^') else {
        return multiplier_string(multiplier, no_prefix) + &seq;
    };
    if seq.find('*').is_some_and(|star| star < caret) {
        return multiplier_string(multiplier, no_prefix) + &seq;
    }
    let power = crate::parse::number::leading_int(&seq[caret + 1..]);
    // the prefix applies before the power, so take the matching root of the multiplier
    let root = match power {
        1 => Some(multiplier),
        -1 => Some(1.0 / multiplier),
        2 => Some(multiplier.sqrt()),
        -2 => Some((1.0 / multiplier).sqrt()),
        3 => Some(multiplier.cbrt()),
        -3 => Some((1.0 / multiplier).cbrt()),
        _ => None,
    };
    let prefix = match root {
        Some(value) => {
            let prefix = multiplier_string(value, no_prefix);
            if is_numerical(&prefix) {
                multiplier_string(multiplier, true)
            } else {
                prefix
            }
        }
        None => multiplier_string(multiplier, true),
    };
    prefix + &seq
}

/// Collapse doubled powers and attach the commodity of the unit as `{name}`.
fn splice_commodity(mut text: String, code: u32) -> String {
    for (from, to) in [("^2^2", "^4"), ("^3^2", "^6")] {
        while let Some(pos) = text.find(from) {
            text.replace_range(pos..pos + 4, to);
        }
    }
    if code == 0 {
        return text;
    }
    let inverse = code & INVERSE_BIT != 0;
    let name = commodity::decode(code);
    let tag = format!("{{{}}}", escape(&name));

    if !inverse {
        if !text.contains(['/', '^']) {
            text.push_str(&tag);
        } else if text.starts_with("1/") {
            text.replace_range(..1, &tag);
        } else {
            let pos = text.find(['^', '*', '/']).unwrap_or(text.len());
            if text[pos..].starts_with("^-") {
                text = format!("{}*{}", tag, text);
            } else {
                text.insert_str(pos, &tag);
            }
        }
        return text;
    }

    match text.rfind('/') {
        None => {
            text.push('/');
            text.push_str(&tag);
        }
        Some(slash) => match text.rfind(['^', '*']) {
            Some(pos) if pos > slash => text.insert_str(pos, &tag),
            _ => text.push_str(&tag),
        },
    }
    text
}

/// Backslash-escape brackets inside a commodity name.
fn escape(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut previous = '\0';
    for c in name.chars() {
        if matches!(c, '{' | '}' | '[' | ']' | '(' | ')') && previous != '\\' {
            out.push('\\');
        }
        out.push(c);
        previous = c;
    }
    out
}

/// Format `value` with `digits` significant digits the way `%g` does: trailing zeros trimmed, exponent notation
/// outside `1e-4 ..= 10^digits`.
pub(crate) fn format_significant(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let digits = digits.max(1);
    let scientific = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs());
    }
    let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
    trim_fraction(&format!("{:.*}", decimals, value)).to_string()
}

fn trim_fraction(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;
    use units_core::si::{G, J, MM, N, PA};
    use units_core::special::{ERROR, NAN};

    fn gen(u: PreciseUnit) -> String {
        to_string(u, MatchFlags::DEFAULT)
    }

    #[test]
    fn direct_names() {
        assert_eq!(gen(M), "m");
        assert_eq!(gen(N.multiply(M)), "J");
        assert_eq!(gen(KW), "kW");
        assert_eq!(gen(PA), "Pa");
        assert_eq!(gen(PreciseUnit::ONE), "");
    }

    #[test]
    fn inverse_and_square() {
        assert_eq!(gen(FT.inv()), "1/ft");
        assert_eq!(gen(MM.pow(2)), "mm^2");
        assert_eq!(gen(FT.pow(2).inv()), "1/ft^2");
    }

    #[test]
    fn prefixed_base() {
        assert_eq!(gen(M.scaled(1e-6)), "um");
        assert_eq!(gen(M.pow(3).scaled(1e-6)), "mL");
        assert_eq!(gen(N.scaled(1000.0)), "kN");
    }

    #[test]
    fn partner_units() {
        assert_eq!(gen(M.divide(S)), "m/s");
        assert_eq!(gen(KG.divide(M.pow(3))), "g/L");
        assert_eq!(gen(M.scaled(0.3048).pow(2).divide(S)), "ft^2/s");
    }

    #[test]
    fn sentinels() {
        assert_eq!(gen(ERROR), "ERROR");
        assert_eq!(gen(NAN), "NaN");
    }

    #[test]
    fn extension_tags() {
        assert_eq!(gen(generate_custom_unit(5)), "CXUN[5]");
        assert_eq!(gen(generate_custom_count_unit(2)), "CXCUN[2]");
        assert_eq!(gen(generate_custom_unit(5).inv()), "CXUN[5]^-1");
    }

    #[test]
    fn commodity_is_spliced() {
        let gold = commodity::encode("gold");
        assert_eq!(gen(KG.with_commodity(gold)), "kg{gold}");
        assert_eq!(gen(G.divide(L).with_commodity(gold)), "g{gold}/L");
        assert_eq!(splice_commodity("m^-2".to_string(), gold), "{gold}*m^-2");
        assert_eq!(splice_commodity("kg".to_string(), !gold), "kg/{gold}");
        assert_eq!(splice_commodity("1/m".to_string(), gold), "{gold}/m");
    }

    #[test]
    fn commodity_names_are_escaped() {
        assert_eq!(escape("a(b)"), "a\\(b\\)");
        assert_eq!(escape("a\\(b"), "a\\(b");
    }

    #[test]
    fn raw_strings() {
        let odd = M.pow(3).multiply(KG).multiply(COUNT);
        assert_eq!(raw_unit_string(odd.base_units()), "m^3*kg*item");
        assert_eq!(raw_unit_string(M.pow(-4).base_units()), "m^-4");
    }

    #[test]
    fn multiplier_strings() {
        assert_eq!(multiplier_string(1.0, false), "");
        assert_eq!(multiplier_string(1000.0, false), "k");
        assert_eq!(multiplier_string(1000.0, true), "1000");
        assert_eq!(multiplier_string(0.3048, false), "0.3048");
        assert_eq!(multiplier_string(1e20, false), "1e20");
    }

    #[test]
    fn significant_digits() {
        assert_eq!(format_significant(99.9, 12), "99.9");
        assert_eq!(format_significant(45.0, 12), "45");
        assert_eq!(format_significant(1e20, 12), "1e+20");
        assert_eq!(format_significant(1.5e-7, 12), "1.5e-07");
        assert_eq!(format_significant(0.000123, 12), "0.000123");
        assert_eq!(format_significant(-2.5, 3), "-2.5");
        assert_eq!(format_significant(123456.0, 3), "1.23e+05");
    }

    #[test]
    fn generated_strings_parse_back() {
        for unit in [
            M,
            J,
            KG.divide(M.pow(3)),
            FT.pow(2),
            M.scaled(0.3048).pow(2).divide(S),
            M.pow(3).multiply(KG).multiply(COUNT),
            KG.multiply(M.pow(2)).divide(S.pow(3)).divide(V),
        ] {
            let text = gen(unit);
            assert_eq!(parse(&text, MatchFlags::DEFAULT), unit, "{:?}", text);
        }
    }
}
