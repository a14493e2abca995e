//! String to unit conversion.
//!
//! [`parse`] normalizes its input and then runs a fixed, ordered list of strategies over it. A strategy either
//! claims the string, returning a unit (possibly the error unit), or passes it on to the next one. Every nested call
//! advances one of the budgets carried in [`MatchFlags`], so any input terminates.
//!
//! ```rust
//! use units::{parse, MatchFlags};
//! use units_core::units::si::{KG, M, S};
//!
//! assert_eq!(parse("kg*m/s^2", MatchFlags::DEFAULT), KG.multiply(M).divide(S.pow(2)));
//! assert_eq!(parse("kilometers per hour", MatchFlags::DEFAULT), M.scaled(1000.0 / 3600.0).divide(S));
//! assert!(parse("blarg", MatchFlags::DEFAULT).is_error());
//! ```

pub(crate) mod modifiers;
pub(crate) mod number;
mod partition;
pub(crate) mod prefix;
pub(crate) mod segment;

use crate::commodity;
use crate::error::{Result, UnitsError};
use crate::flags::MatchFlags;
use crate::normalize::{clean_phase2, clean_unit_string};
use crate::{registry, table};
use modifiers::Locality;
use number::{leading_int, leading_number, looks_like_number};
use prefix::{prefix_multiplier, prefix_multiplier_2char, prefix_word};
use segment::{check_valid_unit_string, find_operator_sep, find_word_operator_sep, match_char, rfind_byte};
use segment::{segment_check, segment_check_reverse};
use sha2::{Digest, Sha256};
use units_core::custom::{equation_unit, generate_custom_count_unit, generate_custom_unit};
use units_core::si::{CURRENCY, ONE};
use units_core::special::ERROR;
use units_core::units::data::{BIT, BYTE};
use units_core::PreciseUnit;

/// Parse a unit string.
///
/// Never fails: text that does not describe a unit yields the error unit, which
/// [`PreciseUnit::is_error`] reports. A numeric literal too large or too small for an `f64` also yields the error
/// unit; use [`try_parse`] to tell the two apart.
///
/// # Arguments
/// * `text` - The unit expression, e.g. `"kg*m/s^2"`, `"square feet"` or `"mL{water}"`
/// * `flags` - Parser options
pub fn parse(text: &str, flags: MatchFlags) -> PreciseUnit {
    match unit_from_string(text, flags) {
        Ok(unit) => unit,
        Err(e) => {
            log::debug!("{}", e);
            ERROR
        }
    }
}

/// Parse a unit string, reporting failure as an error.
///
/// # Errors
/// * [`UnitsError::NumericOverflow`] if a numeric literal does not fit in an `f64`
/// * [`UnitsError::InvalidUnit`] if no strategy recognizes the string
pub fn try_parse(text: &str, flags: MatchFlags) -> Result<PreciseUnit> {
    let unit = unit_from_string(text, flags)?;
    if unit.is_error() {
        return Err(UnitsError::InvalidUnit(text.to_string()));
    }
    Ok(unit)
}

/// Working state shared by the strategies for one call of [`unit_from_string`].
struct Attempt {
    text: String,
    /// Flags for nested heuristic calls, with the recursion counter advanced.
    flags: MatchFlags,
    /// Flags for the halves of an operator split; these do not count against recursion.
    split_flags: MatchFlags,
    contains_per: bool,
}

type Outcome = Result<Option<PreciseUnit>>;
type Strategy = fn(&mut Attempt) -> Outcome;

const STRATEGIES: &[(&str, Strategy)] = &[
    ("leading commodity", leading_commodity),
    ("leading number", leading_number_unit),
    ("operator split", operator_split),
    ("power", power),
    ("trailing commodity", trailing_commodity),
    ("si prefix", si_prefix),
    ("recursion limit", recursion_limit),
    ("upper-case first letter", uppercase_retry),
    ("prefix word", prefix_word_unit),
    ("bracket strip", bracket_strip),
    ("plural before tag", plural_before_tag),
    ("hyphens", hyphens),
    ("secondary cleanup", secondary_cleanup),
    ("per operator", per_operator),
    ("number with remainder", number_with_remainder),
    ("plural", plural),
    ("word modifiers", word_modifiers),
    ("of operator", of_operator),
    ("lower case", lower_case),
    ("custom unit", custom_unit),
    ("locality", locality),
    ("partition", partition),
];

/// The recursive core behind [`parse`].
///
/// Only numeric overflow is an `Err`; every other failure is the error unit.
pub(crate) fn unit_from_string(text: &str, flags: MatchFlags) -> Result<PreciseUnit> {
    if text.is_empty() {
        return Ok(ONE);
    }
    if !flags.contains(MatchFlags::CASE_INSENSITIVE) {
        if let Some(unit) = get_unit(text) {
            return Ok(unit);
        }
    }
    let mut text = text.to_string();
    if clean_unit_string(&mut text, flags) {
        if text.is_empty() {
            return Ok(ONE);
        }
        if let Some(unit) = get_unit(&text) {
            return Ok(unit);
        }
    }
    if !check_valid_unit_string(&text, flags) {
        return Ok(ERROR);
    }

    let mut base = flags | MatchFlags::SKIP_CODE_REPLACEMENTS;
    if !base.contains(MatchFlags::NOT_FIRST_PASS) {
        base = (base | MatchFlags::NOT_FIRST_PASS).partition_step();
    }
    let mut attempt = Attempt {
        contains_per: text.contains("per"),
        text,
        flags: base.recursion_step(),
        split_flags: base,
    };
    for (name, strategy) in STRATEGIES {
        if let Some(unit) = strategy(&mut attempt)? {
            log::trace!("{:?} resolved by {}", attempt.text, name);
            return Ok(unit);
        }
    }
    Ok(ERROR)
}

// ─────────────────────────────────────────────────────────────────────────────
// Lookup helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Literal lookup: registered names, then the static table, then `CXUN[n]`-style codes.
pub(crate) fn get_unit(text: &str) -> Option<PreciseUnit> {
    if registry::is_active() {
        if let Some(unit) = registry::custom_unit_lookup(text) {
            return Some(unit);
        }
    }
    table::lookup(text).or_else(|| custom_unit_code(text))
}

fn lookup_valid(text: &str) -> Option<PreciseUnit> {
    get_unit(text).filter(|unit| !unit.is_error())
}

fn equation_precise(index: u16) -> PreciseUnit {
    PreciseUnit::from_base(equation_unit(index))
}

/// Codes the generator writes for units in the extension slots: `CXUN[n]`, `CXCUN[n]` and `EQXUN[n]`, each with an
/// optional `{commodity}`.
fn custom_unit_code(text: &str) -> Option<PreciseUnit> {
    let bytes = text.as_bytes();
    if bytes.len() < 6 || !matches!(bytes[0], b'C' | b'E') {
        return None;
    }
    let limit = text.rfind('{').unwrap_or(bytes.len());
    if rfind_byte(bytes, limit, |c| matches!(c, b'*' | b'^' | b'(' | b'/')).is_some() {
        return None;
    }
    let codes: [(&str, fn(u16) -> PreciseUnit); 3] = [
        ("CXUN[", generate_custom_unit),
        ("CXCUN[", generate_custom_count_unit),
        ("EQXUN[", equation_precise),
    ];
    for (tag, make) in codes {
        if let Some(rest) = text.strip_prefix(tag) {
            let slot = u16::try_from(leading_int(rest)).unwrap_or(0);
            let mut index = 0;
            return Some(commodity_at(text, make(slot), &mut index));
        }
    }
    None
}

/// Cheap match without the heuristics: literal lookup, a plural `s`, a trailing commodity or a bracketed name.
pub(crate) fn quick_match(text: &str, flags: MatchFlags) -> Result<PreciseUnit> {
    let mut text = text.to_string();
    if flags.contains(MatchFlags::CASE_INSENSITIVE) {
        clean_unit_string(&mut text, flags);
    }
    if let Some(unit) = get_unit(&text) {
        return Ok(unit);
    }
    let len = text.len();
    if len > 2 && text.ends_with('s') {
        if let Some(unit) = lookup_valid(&text[..len - 1]) {
            return Ok(unit);
        }
    } else if text.ends_with('}') {
        return trailing_commodity_unit(&text, flags);
    } else if len >= 2 && text.starts_with('[') && text.ends_with(']') {
        let inner = &text[1..len - 1];
        if !inner.ends_with(|c| c == 'U' || c == 'u') {
            if let Some(unit) = lookup_valid(inner) {
                return Ok(unit);
            }
        }
    }
    Ok(ERROR)
}

/// Attach the first `{...}` group at or after `*index` to `unit` as its commodity.
///
/// `*index` ends up just past the closing brace. Without a group, `unit` is returned unchanged.
fn commodity_at(text: &str, unit: PreciseUnit, index: &mut usize) -> PreciseUnit {
    let Some(open) = text.get(*index..).and_then(|rest| rest.find('{')).map(|p| p + *index) else {
        return unit;
    };
    let start = open + 1;
    let mut close = start;
    let name = if segment_check(text.as_bytes(), b'}', &mut close) {
        &text[start..close - 1]
    } else {
        &text[start..]
    };
    *index = close;
    unit.with_commodity(commodity::encode(name))
}

/// Parse `unit{commodity}` where the brace group comes last.
pub(crate) fn trailing_commodity_unit(text: &str, flags: MatchFlags) -> Result<PreciseUnit> {
    let Some(finish) = text.rfind('}') else {
        return Ok(ERROR);
    };
    let mut index = finish as isize - 1;
    segment_check_reverse(text.as_bytes(), b'{', &mut index);
    let start = ((index + 2) as usize).min(finish);
    let code = commodity::encode(text.get(start..finish).unwrap_or_default());
    if index < 0 {
        return Ok(ONE.with_commodity(code));
    }
    let base = unit_from_string(&text[..=index as usize], flags | MatchFlags::NO_COMMODITIES)?;
    if base.is_error() {
        return Ok(ERROR);
    }
    Ok(base.with_commodity(code))
}

/// Bracketed user codes: `[widgetU]`, `{thing'U}`, `[item_index]`.
///
/// A `U` code hashes its lower-cased contents into one of the 64 custom slots. An `index` code becomes the first
/// custom count unit carrying the contents as its commodity.
fn check_for_custom_unit(text: &str) -> Option<PreciseUnit> {
    let (unit_tag, index_tag) = if text.starts_with('[') && text.ends_with(']') {
        ("U]", "index]")
    } else if text.starts_with('{') && text.ends_with('}') {
        ("U}", "index}")
    } else {
        return None;
    };
    let (mut loc, is_index) = match text.find(unit_tag) {
        Some(loc) => (loc, false),
        None => (text.find(index_tag)?, true),
    };
    if loc > 1 && matches!(text.as_bytes()[loc - 1], b'\'' | b'_') {
        loc -= 1;
    }
    let contents = &text[1..loc.max(1)];
    if is_index {
        return Some(generate_custom_count_unit(0).with_commodity(commodity::encode(contents)));
    }
    let digest = Sha256::digest(contents.to_ascii_lowercase().as_bytes());
    Some(generate_custom_unit(u16::from(digest[0] & 0x3F)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Strategies, in the order they run
// ─────────────────────────────────────────────────────────────────────────────

fn leading_commodity(a: &mut Attempt) -> Outcome {
    let t = a.text.as_str();
    if !(t.len() >= 2 && t.starts_with('{') && t.ends_with('}')) || t[..t.len() - 1].contains('}') {
        return Ok(None);
    }
    if let Some(unit) = check_for_custom_unit(t) {
        return Ok(Some(unit));
    }
    let mut index = 0;
    Ok(Some(commodity_at(t, ONE, &mut index)))
}

fn leading_number_unit(a: &mut Attempt) -> Outcome {
    let t = a.text.as_str();
    if let Some(amount) = t.strip_prefix('$') {
        if let Some((value, used)) = leading_number(amount)? {
            if used == amount.len() {
                return Ok(Some(CURRENCY.scaled(value)));
            }
        }
    }
    if !looks_like_number(t) || t.starts_with("1/") {
        return Ok(None);
    }
    let Some((mut front, mut index)) = leading_number(t)? else {
        return Ok(None);
    };
    if front == 0.0 {
        return Ok(Some(ONE.scaled(0.0)));
    }
    let bytes = t.as_bytes();
    // a literal raised to a power, 2.6^2
    while bytes.get(index) == Some(&b'^') {
        let tail = &t[index + 1..];
        if !looks_like_number(tail) {
            return Ok(Some(ERROR));
        }
        let Some((power, used)) = leading_number(tail)? else {
            return Ok(Some(ERROR));
        };
        front = front.powf(power);
        if !front.is_finite() {
            return Err(UnitsError::NumericOverflow(t.to_string()));
        }
        index += 1 + used;
    }
    let mut front_unit = ONE.scaled(front);
    if index >= bytes.len() {
        return Ok(Some(front_unit));
    }
    if bytes[index] == b'*' {
        index += 1;
    }
    if !a.flags.contains(MatchFlags::NO_COMMODITIES) && bytes.get(index) == Some(&b'{') {
        front_unit = commodity_at(t, front_unit, &mut index);
        if index >= bytes.len() {
            return Ok(Some(front_unit));
        }
    }

    let rest = unit_from_string(&t[index..], a.flags.partition_step())?;
    if !rest.is_error() {
        return finite_product(front_unit, rest, t).map(Some);
    }
    // 3(bags), 3[boxes]kg: a bracketed word after the number is a commodity
    if let Some(open) = bytes.get(index).copied().filter(|c| matches!(c, b'(' | b'[')) {
        let mut close = index + 1;
        if !segment_check(bytes, match_char(open), &mut close) {
            return Ok(Some(ERROR));
        }
        let front_unit = front_unit.with_commodity(commodity::encode(&t[index + 1..close - 1]));
        if close >= bytes.len() {
            return Ok(Some(front_unit));
        }
        let tail = unit_from_string(&t[close..], a.flags)?;
        if tail.is_error() {
            return Ok(Some(ERROR));
        }
        return Ok(Some(front_unit * tail));
    }
    Ok(Some(ERROR))
}

fn operator_split(a: &mut Attempt) -> Outcome {
    let t = a.text.as_str();
    let Some(sep) = find_operator_sep(t, b"*/") else {
        return Ok(None);
    };
    let flags = a.split_flags;
    let (head, tail) = (&t[..sep], &t[sep + 1..]);
    // the longer half goes first so a failure is found early
    let (lhs, rhs) = if sep + 1 > t.len() / 2 {
        let rhs = unit_from_string(tail, flags)?;
        if rhs.is_error() {
            return Ok(Some(ERROR));
        }
        (unit_from_string(head, flags)?, rhs)
    } else {
        let lhs = unit_from_string(head, flags)?;
        if lhs.is_error() {
            return Ok(Some(ERROR));
        }
        (lhs, unit_from_string(tail, flags)?)
    };
    if lhs.is_error() || rhs.is_error() {
        return Ok(Some(ERROR));
    }
    let unit = if t.as_bytes()[sep] == b'/' { lhs / rhs } else { lhs * rhs };
    finite_result(unit, lhs, rhs, t).map(Some)
}

/// `lhs * rhs`, or [`UnitsError::NumericOverflow`] when two finite multipliers combine to a non-finite one.
fn finite_product(lhs: PreciseUnit, rhs: PreciseUnit, text: &str) -> Result<PreciseUnit> {
    finite_result(lhs * rhs, lhs, rhs, text)
}

fn finite_result(unit: PreciseUnit, lhs: PreciseUnit, rhs: PreciseUnit, text: &str) -> Result<PreciseUnit> {
    if !unit.multiplier().is_finite() && lhs.multiplier().is_finite() && rhs.multiplier().is_finite() {
        return Err(UnitsError::NumericOverflow(text.to_string()));
    }
    Ok(unit)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Exponent {
    Power(i32),
    Root(i32),
}

impl Exponent {
    fn apply(self, unit: PreciseUnit) -> PreciseUnit {
        match self {
            Exponent::Power(p) => unit.pow(p),
            Exponent::Root(r) => unit.root(r),
        }
    }

    fn value(self) -> f64 {
        match self {
            Exponent::Power(p) => f64::from(p),
            Exponent::Root(r) => 1.0 / f64::from(r),
        }
    }
}

/// Exponent at the start of `tail` and the number of bytes it spans.
///
/// Accepts a signed integer, or a signed integer or decimal in parentheses. A decimal exponent must be the
/// reciprocal of an integer (`^(0.5)`, `^(-0.25)`) and becomes a root.
fn parse_exponent(tail: &str) -> Option<(Exponent, usize)> {
    let bytes = tail.as_bytes();
    if bytes.first() == Some(&b'(') {
        let close = tail.find(')')?;
        let inner = &tail[1..close];
        if inner.is_empty() || !inner.bytes().all(|c| c.is_ascii_digit() || matches!(c, b'-' | b'+' | b'.')) {
            return None;
        }
        let value: f64 = inner.parse().ok()?;
        return Some((exponent_from_value(value)?, close + 1));
    }
    let sign = usize::from(matches!(bytes.first(), Some(b'-' | b'+')));
    let digits = bytes[sign..].iter().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let power: i32 = tail[..sign + digits].parse().ok()?;
    Some((Exponent::Power(power), sign + digits))
}

fn exponent_from_value(value: f64) -> Option<Exponent> {
    if value.fract() == 0.0 && value.abs() <= f64::from(i32::MAX) {
        return Some(Exponent::Power(value as i32));
    }
    let inverse = 1.0 / value;
    let rounded = inverse.round();
    if rounded == 0.0 || (inverse - rounded).abs() > 1e-3 || rounded.abs() > f64::from(i32::MAX) {
        return None;
    }
    Some(Exponent::Root(rounded as i32))
}

fn power(a: &mut Attempt) -> Outcome {
    let t = a.text.as_str();
    let Some(sep) = find_operator_sep(t, b"^") else {
        return Ok(None);
    };
    let Some((exponent, span)) = parse_exponent(&t[sep + 1..]) else {
        return Ok(Some(ERROR));
    };
    let powered = if sep == 2 && t.starts_with("10") {
        ONE.scaled(10f64.powf(exponent.value()))
    } else {
        match power_base(a, sep, exponent)? {
            Some(unit) => unit,
            None => return Ok(None),
        }
    };
    let remainder = &t[sep + 1 + span..];
    if remainder.is_empty() || powered.is_error() {
        return Ok(Some(powered));
    }
    let rest = unit_from_string(remainder, a.split_flags)?;
    Ok(Some(if rest.is_error() { ERROR } else { powered * rest }))
}

/// Raise the operand in front of the `^` at `sep`.
fn power_base(a: &Attempt, sep: usize, exponent: Exponent) -> Outcome {
    let t = a.text.as_str();
    let bytes = t.as_bytes();
    let pchar = sep - 1;
    if bytes[pchar] == b')' {
        let mut index = pchar as isize - 1;
        segment_check_reverse(bytes, b'(', &mut index);
        let inner = &t[((index + 2) as usize).min(pchar)..pchar];
        let mut unit = unit_from_string(inner, a.split_flags)?;
        let mut open = index + 1;
        if unit.is_error() {
            // km(2)^2 style: the group may belong to the name in front of it
            if index < 0 || inner.contains(|c| matches!(c, '(' | '*' | '/' | '^' | '{' | '[')) {
                return Ok(Some(ERROR));
            }
            unit = unit_from_string(&t[..=pchar], a.split_flags)?;
            if unit.is_error() {
                return Ok(Some(ERROR));
            }
            open = 0;
        }
        let unit = exponent.apply(unit);
        if open <= 0 {
            return Ok(Some(unit));
        }
        let head = unit_from_string(&t[..open as usize], a.split_flags)?;
        return Ok((!head.is_error()).then(|| head * unit));
    }

    let operand = &t[..sep];
    let mut cleaned = operand.to_string();
    if a.flags.contains(MatchFlags::CASE_INSENSITIVE) {
        clean_unit_string(&mut cleaned, a.flags);
    }
    if let Some(unit) = lookup_valid(&cleaned) {
        return Ok(Some(exponent.apply(unit)));
    }
    if operand.contains("per") {
        return Ok(None);
    }
    let unit = unit_from_string(operand, a.split_flags)?;
    Ok(Some(if unit.is_error() { ERROR } else { exponent.apply(unit) }))
}

fn trailing_commodity(a: &mut Attempt) -> Outcome {
    if a.flags.contains(MatchFlags::NO_COMMODITIES) || !a.text.ends_with('}') {
        return Ok(None);
    }
    trailing_commodity_unit(&a.text, a.flags).map(Some)
}

fn prefixed(rest: &str, flags: MatchFlags) -> Outcome {
    match rest {
        "B" => Ok(Some(BYTE)),
        "b" => Ok(Some(BIT)),
        _ => {
            let unit = quick_match(rest, flags)?;
            Ok((!unit.is_error()).then_some(unit))
        }
    }
}

fn si_prefix(a: &mut Attempt) -> Outcome {
    let t = a.text.as_str();
    let bytes = t.as_bytes();
    if bytes.len() >= 3 {
        if let Some(mult) = prefix_multiplier_2char(bytes[0], bytes[1]) {
            if let Some(unit) = prefixed(&t[2..], a.flags)? {
                return Ok(Some(unit.scaled(mult)));
            }
        }
    }
    if bytes.len() >= 2 {
        let first = match bytes[0] {
            b'N' if a.flags.contains(MatchFlags::CASE_INSENSITIVE) => b'n',
            c => c,
        };
        if let Some(mult) = prefix_multiplier(first) {
            if let Some(unit) = prefixed(&t[1..], a.flags)? {
                return Ok(Some(unit.scaled(mult)));
            }
        }
    }
    Ok(None)
}

fn recursion_limit(a: &mut Attempt) -> Outcome {
    if a.flags.contains(MatchFlags::NO_RECURSION) {
        return quick_match(&a.text, a.flags).map(Some);
    }
    Ok(None)
}

fn has_operator(text: &str) -> bool {
    text.contains(|c| matches!(c, '*' | '/' | '^'))
}

fn uppercase_retry(a: &mut Attempt) -> Outcome {
    let bytes = a.text.as_bytes();
    let len = bytes.len();
    // a short leading N is more likely newton than a capitalized word
    if len < 3
        || a.contains_per
        || bytes[len - 1].is_ascii_digit()
        || !bytes[0].is_ascii_uppercase()
        || (len <= 5 && bytes[0] == b'N')
        || has_operator(&a.text)
    {
        return Ok(None);
    }
    let mut lowered = a.text.clone();
    lowered[..1].make_ascii_lowercase();
    let unit = unit_from_string(&lowered, a.flags.without(MatchFlags::CASE_INSENSITIVE))?;
    Ok((!unit.is_error()).then_some(unit))
}

fn prefix_word_unit(a: &mut Attempt) -> Outcome {
    let Some((mult, used)) = prefix_word(&a.text) else {
        return Ok(None);
    };
    let rest = &a.text[used..];
    if rest.is_empty() {
        return Ok(None);
    }
    let unit = quick_match(rest, a.flags)?;
    if !unit.is_error() {
        return Ok(Some(unit.scaled(mult)));
    }
    let first = rest.as_bytes()[0];
    if first.is_ascii_uppercase() && (rest.len() > 4 || first != b'N') && !has_operator(rest) {
        let mut lowered = rest.to_string();
        lowered[..1].make_ascii_lowercase();
        let unit = quick_match(&lowered, a.flags.without(MatchFlags::CASE_INSENSITIVE))?;
        if !unit.is_error() {
            return Ok(Some(unit.scaled(mult)));
        }
    }
    Ok(None)
}

fn bracket_strip(a: &mut Attempt) -> Outcome {
    let t = a.text.as_str();
    if t.len() >= 2 && t.starts_with('[') && t.ends_with(']') {
        let inner = &t[1..t.len() - 1];
        // [fooU] is a custom unit code, handled later
        if !inner.ends_with('U') {
            return Ok(lookup_valid(inner));
        }
    }
    Ok(None)
}

fn plural_before_tag(a: &mut Attempt) -> Outcome {
    let Some(pos) = a.text.find("s_") else {
        return Ok(None);
    };
    let singular = format!("{}_{}", &a.text[..pos], &a.text[pos + 2..]);
    Ok(lookup_valid(&singular))
}

fn hyphens(a: &mut Attempt) -> Outcome {
    if a.contains_per {
        return Ok(None);
    }
    let t = a.text.as_str();
    let Some(first) = t.find('-') else {
        return Ok(None);
    };
    if !t[first + 1..].contains('-') {
        let merged = format!("{}{}", &t[..first], &t[first + 1..]);
        let unit = quick_match(&merged, a.flags)?;
        if !unit.is_error() {
            return Ok(Some(unit));
        }
    }
    let mut rewritten = t.to_string();
    let mut found = Some(first);
    while let Some(fd) = found {
        let bytes = rewritten.as_bytes();
        let mut resume = fd + 1;
        if fd + 1 == bytes.len() {
            rewritten.pop();
            break;
        } else if bytes[fd + 1].is_ascii_digit() {
            // m-2 is a negative exponent, kg-m a product
            if fd > 0 && bytes[fd - 1] != b'^' {
                rewritten.insert(fd, '^');
                resume += 1;
            }
        } else {
            rewritten.replace_range(fd..fd + 1, "*");
        }
        found = rewritten.get(resume..).and_then(|rest| rest.find('-')).map(|p| p + resume);
    }
    if rewritten == t {
        return Ok(None);
    }
    let unit = unit_from_string(&rewritten, a.flags | MatchFlags::SKIP_PARTITION_CHECK)?;
    Ok((!unit.is_error()).then_some(unit))
}

fn secondary_cleanup(a: &mut Attempt) -> Outcome {
    if clean_phase2(&mut a.text) {
        if a.text.is_empty() {
            return Ok(Some(ERROR));
        }
        if let Some(unit) = lookup_valid(&a.text) {
            return Ok(Some(unit));
        }
    }
    bracket_strip(a)
}

fn per_operator(a: &mut Attempt) -> Outcome {
    if !a.contains_per || a.flags.contains(MatchFlags::NO_PER_OPERATORS) {
        return Ok(None);
    }
    let Some(pos) = find_word_operator_sep(&a.text, "per") else {
        return Ok(None);
    };
    let mut rewritten = a.text.clone();
    rewritten.replace_range(pos..pos + 3, if pos == 0 { "1/" } else { "/" });
    let unit = unit_from_string(&rewritten, a.flags.per_operator_step())?;
    Ok((!unit.is_error()).then_some(unit))
}

/// `1/...` strings skip the leading number strategy so the division is kept; the number is applied here.
fn number_with_remainder(a: &mut Attempt) -> Outcome {
    let t = a.text.as_str();
    if !looks_like_number(t) {
        return Ok(None);
    }
    let Some((number, used)) = leading_number(t)? else {
        return Ok(None);
    };
    if used >= t.len() {
        return Ok(Some(ONE.scaled(number)));
    }
    let rest = &t[used..];
    if rest.starts_with('{') {
        return Ok(Some(trailing_commodity_unit(rest, a.flags)?.scaled(number)));
    }
    let unit = unit_from_string(rest, a.flags)?;
    Ok(Some(if unit.is_error() { ERROR } else { unit.scaled(number) }))
}

fn plural(a: &mut Attempt) -> Outcome {
    let t = a.text.as_str();
    if t.len() >= 3 && t.ends_with('s') {
        return Ok(lookup_valid(&t[..t.len() - 1]));
    }
    Ok(None)
}

fn word_modifiers(a: &mut Attempt) -> Outcome {
    let mut rewritten = a.text.clone();
    if !modifiers::word_modifiers(&mut rewritten) {
        return Ok(None);
    }
    log::debug!("word modifier: {:?} -> {:?}", a.text, rewritten);
    unit_from_string(&rewritten, a.flags).map(Some)
}

fn of_operator(a: &mut Attempt) -> Outcome {
    if a.flags.contains(MatchFlags::NO_COMMODITIES) || a.flags.contains(MatchFlags::NO_OF_OPERATOR) {
        return Ok(None);
    }
    let t = a.text.as_str();
    if let Some(pos) = find_word_operator_sep(t, "of") {
        if pos != 0 && pos + 2 < t.len() {
            let mut rewritten = t.to_string();
            rewritten.replace_range(pos..pos + 2, "{");
            let close = rewritten
                .get(pos + 3..)
                .and_then(|rest| rest.find(|c| matches!(c, '{' | '[' | '(')))
                .map(|p| p + pos + 3);
            match close {
                Some(p) => rewritten.insert(p, '}'),
                None => rewritten.push('}'),
            }
            let unit = trailing_commodity_unit(&rewritten, a.flags)?;
            if !unit.is_error() {
                return Ok(Some(unit));
            }
        }
    }
    if !t.starts_with('{') && t.ends_with('}') {
        let unit = trailing_commodity_unit(t, a.flags)?;
        return Ok((!unit.is_error()).then_some(unit));
    }
    Ok(None)
}

fn lower_case(a: &mut Attempt) -> Outcome {
    let lower = a.text.to_ascii_lowercase();
    if lower == a.text {
        return Ok(None);
    }
    let unit = quick_match(&lower, a.flags.without(MatchFlags::CASE_INSENSITIVE))?;
    Ok((!unit.is_error()).then_some(unit))
}

fn custom_unit(a: &mut Attempt) -> Outcome {
    Ok(check_for_custom_unit(&a.text))
}

fn locality(a: &mut Attempt) -> Outcome {
    if a.flags.contains(MatchFlags::NO_LOCALITY_MODIFIERS) {
        return Ok(None);
    }
    match modifiers::locality_modifiers(&a.text) {
        Locality::Rewritten(rewritten) => {
            log::debug!("locality modifier: {:?} -> {:?}", a.text, rewritten);
            let flags = a.flags | MatchFlags::NO_LOCALITY_MODIFIERS | MatchFlags::NO_OF_OPERATOR;
            let unit = unit_from_string(&rewritten, flags)?;
            Ok((!unit.is_error()).then_some(unit))
        }
        Locality::Key(key) => Ok(lookup_valid(&key)),
        Locality::Reject | Locality::None => Ok(None),
    }
}

fn partition(a: &mut Attempt) -> Outcome {
    if a.flags.contains(MatchFlags::SKIP_PARTITION_CHECK) {
        return Ok(None);
    }
    log::debug!("partitioning {:?}", a.text);
    let unit = partition::try_partitioning(&a.text, a.flags.partition_step())?;
    Ok((!unit.is_error()).then_some(unit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use units_core::custom::{custom_count_unit, custom_unit};
    use units_core::si::{G, HZ, J, KG, KM, L, M, MM, N, PA, S, W};
    use units_core::units::length::{FT, IN};
    use units_core::units::temperature::DEG_C;
    use units_core::units::time::DAY;

    fn p(s: &str) -> PreciseUnit {
        parse(s, MatchFlags::DEFAULT)
    }

    fn ci(s: &str) -> PreciseUnit {
        parse(s, MatchFlags::CASE_INSENSITIVE)
    }

    #[test]
    fn literal_and_empty() {
        assert_eq!(p("m"), M);
        assert_eq!(p(""), ONE);
        assert_eq!(p("kg"), KG);
        assert_eq!(p("\u{b0}C"), DEG_C);
    }

    #[test]
    fn operators() {
        assert_eq!(p("m/s"), M.divide(S));
        assert_eq!(p("N*m"), J);
        assert_eq!(p("kg*m/s^2"), N);
        assert_eq!(p("kg/(m*s^2)"), PA);
        assert_eq!(p("1/s"), HZ);
        assert!(p("m/blarg").is_error());
    }

    #[test]
    fn powers() {
        assert_eq!(p("m^2"), M.pow(2));
        assert_eq!(p("m^-1"), M.inv());
        assert_eq!(p("(m/s)^2"), M.divide(S).pow(2));
        assert_eq!(p("10^3"), ONE.scaled(1000.0));
        assert_eq!(p("m^(2)"), M.pow(2));
        assert_eq!(p("(m^2)^(0.5)"), M);
        assert!(p("m^(0.7)").is_error());
        assert_eq!(p("ft^2"), FT.pow(2));
    }

    #[test]
    fn leading_numbers() {
        assert_eq!(p("1000m"), KM);
        assert_eq!(p("0 m"), ONE.scaled(0.0));
        assert_eq!(p("2^3"), ONE.scaled(8.0));
        assert_eq!(p("$9.99"), CURRENCY.scaled(9.99));
        assert_eq!(p("$ 9.99"), CURRENCY.scaled(9.99));
        assert!(p("345 blarg").is_error());
        assert!(p("2^m").is_error());
    }

    #[test]
    fn number_then_bracketed_commodity() {
        let u = p("3(zqxw)");
        assert_relative_eq!(u.multiplier(), 3.0);
        assert_eq!(u.commodity(), commodity::encode("zqxw"));
    }

    #[test]
    fn prefixes() {
        assert_eq!(p("mm"), MM);
        assert_eq!(p("km"), KM);
        assert_eq!(p("kilometer"), KM);
        assert_eq!(p("millimeters"), MM);
        assert_eq!(p("KiB"), BYTE.scaled(1024.0));
        assert_eq!(p("kb"), BIT.scaled(1e3));
        assert_eq!(p("mL"), L.scaled(1e-3));
    }

    #[test]
    fn words_and_plurals() {
        assert_eq!(p("meters"), M);
        assert_eq!(p("square meter"), M.pow(2));
        assert_eq!(p("cubic feet"), FT.pow(3));
        assert_eq!(p("miles per hour"), p("mi/hr"));
        assert_eq!(p("per second"), HZ);
        assert_eq!(p("Watts"), W);
        assert_eq!(p("days"), DAY);
    }

    #[test]
    fn hyphens_and_merged_tokens() {
        assert_eq!(p("kg-m"), KG.multiply(M));
        assert_eq!(p("m-2"), M.pow(-2));
        assert_eq!(p("N-m"), J);
        // a capital N alone is read as nano when nothing else fits
        assert_eq!(p("Nm"), p("nm"));
    }

    #[test]
    fn commodities() {
        let gold = commodity::encode("gold");
        assert_eq!(p("kg{gold}"), KG.with_commodity(gold));
        assert_eq!(p("kg of gold"), KG.with_commodity(gold));
        assert_eq!(p("{gold}"), ONE.with_commodity(gold));
        assert_eq!(p("g{gold}"), G.with_commodity(gold));
        assert!(p("kg{gold}").commodity() != 0);
    }

    #[test]
    fn custom_bracket_codes() {
        let a = p("[widgetU]");
        assert!(units_core::custom::is_custom_unit(a.base_units()));
        assert_eq!(a, p("[WIDGETU]"));
        assert_eq!(a, p("{widget'U}"));
        let idx = p("[cells_index]");
        assert_eq!(idx.base_units(), custom_count_unit(0));
        assert_eq!(idx.commodity(), commodity::encode("cells"));
    }

    #[test]
    fn generated_codes_parse_back() {
        assert_eq!(p("CXUN[5]").base_units(), custom_unit(5));
        assert_eq!(p("CXCUN[3]").base_units(), custom_count_unit(3));
        assert_eq!(p("EQXUN[7]").base_units(), equation_unit(7));
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(ci("KG"), KG);
        assert_eq!(ci("METER"), M);
        assert_eq!(ci("mm"), MM);
        assert_eq!(ci("PASCAL"), PA);
        assert_eq!(ci("LB"), units_core::units::mass::LB);
        assert_eq!(ci("PSI"), units_core::units::energy::PSI);
    }

    #[test]
    fn feet_and_inches_names() {
        assert_eq!(p("feet"), FT);
        assert_eq!(p("inch"), IN);
    }

    #[test]
    fn overflow_is_a_hard_error() {
        assert!(matches!(try_parse("1e999 m", MatchFlags::DEFAULT), Err(UnitsError::NumericOverflow(_))));
        assert!(p("1e999 m").is_error());
        assert!(matches!(try_parse("2^2000 m", MatchFlags::DEFAULT), Err(UnitsError::NumericOverflow(_))));
        assert!(matches!(try_parse("1e308*1e308", MatchFlags::DEFAULT), Err(UnitsError::NumericOverflow(_))));
        assert!(p("2^2000 m").is_error());
        assert!(matches!(try_parse("blarg", MatchFlags::DEFAULT), Err(UnitsError::InvalidUnit(_))));
        assert_eq!(try_parse("m", MatchFlags::DEFAULT).unwrap(), M);
    }

    #[test]
    fn malformed_strings_are_errors() {
        assert!(p("m//s").is_error());
        assert!(p("(m/s").is_error());
        assert!(p("m^x").is_error());
    }

    #[test]
    fn exponent_forms() {
        assert_eq!(parse_exponent("2"), Some((Exponent::Power(2), 1)));
        assert_eq!(parse_exponent("-12"), Some((Exponent::Power(-12), 3)));
        assert_eq!(parse_exponent("(-1)"), Some((Exponent::Power(-1), 4)));
        assert_eq!(parse_exponent("(0.5)"), Some((Exponent::Root(2), 5)));
        assert_eq!(parse_exponent("(1.5)"), None);
        assert_eq!(parse_exponent("x"), None);
    }

    #[test]
    fn every_input_terminates() {
        for s in ["ababababababababab", "(((((m)))))", "kg-m-s-A-K-mol", "perperperper", "ofofofofof m", "NNNNNNNN"] {
            let _ = p(s);
            let _ = ci(s);
        }
    }
}
