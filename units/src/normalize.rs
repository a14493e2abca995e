//! Text normalizer applied before dictionary lookups.
//!
//! [`clean_unit_string`] rewrites free-form input into the spelling the recognition table uses: whitespace is
//! dropped or promoted to `*`, `per` becomes `/`, Unicode operators and superscripts are folded to ASCII, powers of
//! ten become `1e` literals, dot notation becomes `*`, and in case-insensitive mode the token is re-cased the way SI
//! symbols are usually written.
//!
//! The passes are repeated until the string stops changing, so the normalizer is idempotent: feeding it its own
//! output reports no change.

use crate::flags::MatchFlags;
use crate::parse::prefix::{prefix_multiplier, prefix_multiplier_2char};
use crate::parse::segment::{clear_empty_segments, match_char, remove_outer_parentheses, segment_check};

const MAX_PASSES: usize = 16;

/// Characters treated as whitespace. NUL shows up in strings that came through C APIs.
pub(crate) const SPACE_CHARS: &[char] = &[' ', '\t', '\n', '\r', '\0'];

/// Operators a space may sit next to without becoming a multiply.
const OPERATOR_CHARS: &[char] = &['*', '/', '^', '\u{00d7}', '\u{00f7}', '\u{00b7}', '\u{22c5}', '\u{2217}', '\u{2215}'];

const CODE_REPLACEMENTS: &[(&str, &str)] = &[
    ("sq.", "square"),
    ("cu.", "cubic"),
    ("(US)", "US"),
    ("10^", "1e"),
    ("10-", "1e-"),
    ("^+", "^"),
    ("ampere", "amp"),
    ("Ampere", "amp"),
    ("-US", "US"),
    ("perunit", "pu"),
    ("per-unit", "pu"),
    ("/square*", "/square"),
    ("/cubic*", "/cubic"),
];

/// Unicode folding. Multi-character sequences come before their single-character tails.
const UNICODE_REPLACEMENTS: &[(&str, &str)] = &[
    ("\u{00d7}", "*"),
    ("\u{00f7}", "/"),
    ("\u{00b7}", "*"),
    ("\u{22c5}", "*"),
    ("\u{2217}", "*"),
    ("\u{2215}", "/"),
    ("\u{00b5}", "u"),
    ("\u{03bc}", "u"),
    ("\u{2212}", "-"),
    ("\u{207b}\u{00b9}", "^(-1)"),
    ("\u{207b}\u{00b2}", "^(-2)"),
    ("\u{207b}\u{00b3}", "^(-3)"),
    ("\u{207b}\u{2074}", "^(-4)"),
    ("-\u{00b9}", "^(-1)"),
    ("-\u{00b2}", "^(-2)"),
    ("-\u{00b3}", "^(-3)"),
    ("\u{00b2}", "^(2)"),
    ("\u{00b9}", "*"),
    ("\u{00b3}", "^(3)"),
    ("\u{2074}", "^(4)"),
    ("\u{2075}", "^(5)"),
    ("\u{2076}", "^(6)"),
    ("\u{2077}", "^(7)"),
    ("\u{2078}", "^(8)"),
    ("\u{2079}", "^(9)"),
    ("\u{00bd}", "(0.5)"),
    ("\u{00bc}", "(0.25)"),
    ("\u{00be}", "(0.75)"),
    ("\u{2153}", "(1/3)"),
    ("\u{2154}", "(2/3)"),
    ("\u{215b}", "(0.125)"),
];

/// All-caps spellings whose canonical case cannot be recovered by the generic rule.
const CI_CONVERSIONS: &[(&str, &str)] = &[
    ("S", "s"),
    ("G", "g"),
    ("M", "m"),
    ("MM", "mm"),
    ("NM", "nm"),
    ("ML", "mL"),
    ("GS", "Gs"),
    ("GL", "Gal"),
    ("MG", "mg"),
    ("[G]", "[g]"),
    ("PG", "pg"),
    ("NG", "ng"),
    ("UG", "ug"),
    ("US", "us"),
    ("PS", "ps"),
    ("RAD", "rad"),
    ("GB", "gilbert"),
    ("WB", "Wb"),
    ("CP", "cP"),
];

/// Normalize `text` in place.
///
/// Returns `true` if the string changed. Running it again on the result returns `false`.
///
/// # Arguments
/// * `text` - The unit string to rewrite
/// * `flags` - Only `CASE_INSENSITIVE`, `SINGLE_SLASH` and `SKIP_CODE_REPLACEMENTS` are consulted
pub fn clean_unit_string(text: &mut String, flags: MatchFlags) -> bool {
    let original = text.clone();
    for _ in 0..MAX_PASSES {
        if !clean_pass(text, flags) {
            break;
        }
    }
    *text != original
}

/// Normalized copy of `text` with default options.
///
/// ```rust
/// use units::normalize::normalize;
///
/// assert_eq!(normalize("kg per m2"), "kg/m^2");
/// assert_eq!(normalize("N \u{00b7} m"), "N*m");
/// ```
pub fn normalize(text: &str) -> String {
    let mut out = text.to_string();
    clean_unit_string(&mut out, MatchFlags::DEFAULT);
    out
}

fn clean_pass(text: &mut String, flags: MatchFlags) -> bool {
    let before = text.clone();
    let skip_codes = flags.contains(MatchFlags::SKIP_CODE_REPLACEMENTS);
    let mut skip_multiply = false;
    let mut skip_multiply_insertion = skip_codes;

    while matches!(text.as_bytes().last(), Some(b'^' | b'*' | b'/' | b'.')) {
        text.pop();
    }
    let Some(first) = text.find(|c: char| !SPACE_CHARS.contains(&c)) else {
        text.clear();
        return !before.is_empty();
    };
    if text.as_bytes()[first] == b'/' {
        text.insert(first, '1');
        skip_multiply = true;
    }

    if !skip_codes {
        if text.starts_with("per ") {
            text.replace_range(0..4, "1/");
            skip_multiply = true;
        }
        while let Some(pos) = text.find(" per ") {
            text.replace_range(pos..pos + 5, "/");
            skip_multiply = true;
        }
        if rewrite_of_groups(text) {
            skip_multiply_insertion = true;
        }
        clean_spaces(text, skip_multiply);
        if text.is_empty() {
            return !before.is_empty();
        }
        rewrite_powers_of_ten(text);
    }

    if text.starts_with('(') {
        remove_outer_parentheses(text);
    }
    if !skip_codes {
        replace_all(text, "**", "^");
    }
    if flags.contains(MatchFlags::CASE_INSENSITIVE) {
        ci_conversion(text);
    }
    if !skip_codes {
        if text.contains('<') {
            rewrite_html_tags(text);
        }
        for (from, to) in CODE_REPLACEMENTS {
            replace_all(text, from, to);
        }
    }
    insert_trailing_power(text);

    if !skip_codes {
        if let Some(dot) = text.rfind('.') {
            if !text.as_bytes().get(dot + 1).is_some_and(u8::is_ascii_digit) {
                clean_dot_notation(text);
            }
        }
        if !text.is_ascii() {
            for (from, to) in UNICODE_REPLACEMENTS {
                replace_all(text, from, to);
            }
        }
        remove_unit_powers(text);
        remove_empty_parentheses(text);
        clear_empty_segments(text);
        remove_unit_bases(text);
    }

    while matches!(text.as_bytes().first(), Some(b'*' | b'}' | b')' | b']')) {
        text.remove(0);
    }
    if !skip_multiply_insertion {
        insert_bracket_multiplies(text);
    }
    if text.starts_with('/') {
        text.insert(0, '1');
    }
    if flags.contains(MatchFlags::SINGLE_SLASH) {
        wrap_denominator(text);
    }
    *text != before
}

fn replace_all(text: &mut String, from: &str, to: &str) {
    let mut start = 0;
    while let Some(found) = text[start..].find(from).map(|p| p + start) {
        text.replace_range(found..found + from.len(), to);
        start = found + to.len();
    }
}

/// `X of (Y)` and `X of [Y]` ending the string become `X{Y}`.
///
/// Returns `true` if an `of` group was seen, rewritten or not.
fn rewrite_of_groups(text: &mut String) -> bool {
    let Some(pos) = text.find(" of ") else {
        return false;
    };
    let Some(open) = text[pos + 4..]
        .find(|c: char| !SPACE_CHARS.contains(&c))
        .map(|p| p + pos + 4)
    else {
        return false;
    };
    let opener = text.as_bytes()[open];
    if opener != b'(' && opener != b'[' {
        return false;
    }
    let closer = if opener == b'(' { b')' } else { b']' };
    if text.as_bytes().last() == Some(&closer) {
        let inner = text[open + 1..text.len() - 1].to_string();
        if !inner.contains(['(', ')', '[', ']']) {
            text.replace_range(pos.., &format!("{{{}}}", inner.trim()));
        }
    }
    true
}

/// Drop whitespace, promoting some spaces to an implicit `*`.
///
/// A space becomes `*` when it separates two tokens that are clearly meant to be multiplied: after a purely numeric
/// prefix, after the second character of a short string, or after a single `/` with a plain token on each side.
/// A space next to an explicit operator is always dropped.
pub(crate) fn clean_spaces(text: &mut String, mut skip_multiply: bool) -> bool {
    let mut removed = false;
    let mut pos = find_space(text, 0);
    while let Some(fnd) = pos {
        removed = true;
        if fnd > 0 && !skip_multiply && promote_space(text, fnd) {
            text.replace_range(fnd..fnd + 1, "*");
            skip_multiply = true;
            pos = find_space(text, fnd);
            continue;
        }
        text.remove(fnd);
        if fnd > 0 {
            skip_multiply = true;
        }
        pos = find_space(text, fnd);
    }
    removed
}

fn find_space(text: &str, from: usize) -> Option<usize> {
    text.get(from..)?.find(SPACE_CHARS).map(|p| p + from)
}

fn promote_space(text: &str, fnd: usize) -> bool {
    let bytes = text.as_bytes();
    let prev = bytes[fnd - 1];
    if prev == b'/' || prev == b'*' {
        return false;
    }
    let next = text[fnd..].find(|c: char| !SPACE_CHARS.contains(&c)).map(|p| p + fnd);
    let Some(next) = next else {
        return false;
    };
    if text[next..].starts_with(OPERATOR_CHARS) {
        return false;
    }
    if fnd == 1 && text.len() < 8 {
        return true;
    }
    let head = &bytes[..fnd];
    if head.iter().all(|&b| is_numerical(b) || b == b'/' || b == b'*') {
        return true;
    }
    if head.iter().filter(|&&b| b == b'/').count() == 1 {
        let head = &text[..fnd];
        if !head.contains("/sq") && !head.contains("/cu") {
            return !matches!(bytes[next], b'(' | b'[' | b'{') && !prev.is_ascii_digit();
        }
    }
    false
}

pub(crate) fn is_numerical(b: u8) -> bool {
    b.is_ascii_digit() || matches!(b, b'-' | b'+' | b'.')
}

/// `10*3` style exponents become `1e3` when the exponent is a plausible power of ten.
fn rewrite_powers_of_ten(text: &mut String) {
    let mut start = 0;
    while let Some(found) = text[start..].find("10*").map(|p| p + start) {
        let rest = &text[found + 3..];
        let power = leading_integer(rest);
        if rest.as_bytes().first().is_some_and(|&b| is_numerical(b)) && power.is_some_and(|p| p.abs() <= 38) {
            text.replace_range(found..found + 3, "1e");
        }
        start = found + 2;
    }
}

fn leading_integer(text: &str) -> Option<i64> {
    let bytes = text.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    if bytes.get(end) == Some(&b'.') {
        return None;
    }
    text[..end].parse().ok()
}

/// Case-insensitive folding: upper-case the token, then restore the usual SI spelling.
pub(crate) fn ci_conversion(text: &mut String) {
    text.make_ascii_uppercase();
    if let Some((_, canonical)) = CI_CONVERSIONS.iter().find(|(upper, _)| *upper == text.as_str()) {
        *text = (*canonical).to_string();
        return;
    }
    // only ASCII bytes are rewritten below, so the buffer stays UTF-8
    let mut bytes = std::mem::take(text).into_bytes();
    match bytes.first() {
        Some(b'P') => bytes[0] = b'p',
        Some(b'M') => bytes[0] = b'm',
        _ => {}
    }
    let len = bytes.len();
    if bytes.last() == Some(&b'M') {
        let prefixed = match len {
            2 => prefix_multiplier(bytes[0]).is_some(),
            3 => prefix_multiplier_2char(bytes[0], bytes[1]).is_some(),
            _ => false,
        };
        if prefixed {
            bytes[len - 1] = b'm';
        }
    }
    *text = String::from_utf8(bytes).unwrap_or_default();
    replace_all(text, "/S", "/s");
    replace_all(text, "/G", "/g");
}

fn rewrite_html_tags(text: &mut String) {
    for (open, close, marker) in [("<sup>", "</sup>", "^"), ("<sub>", "</sub>", "_")] {
        while let Some(pos) = text.find(open) {
            text.replace_range(pos..pos + open.len(), marker);
            if let Some(end) = text.find(close) {
                text.replace_range(end..end + close.len(), "");
            }
        }
    }
}

/// `m2` → `m^2`, `ft-3` → `ft^-3`, `s*2` → `s^2`.
fn insert_trailing_power(text: &mut String) {
    let bytes = text.as_bytes();
    let len = bytes.len();
    if len < 2 || !matches!(bytes[len - 1], b'2' | b'3') {
        return;
    }
    let mut e = len - 1;
    if matches!(bytes[e - 1], b'-' | b'+') && len >= 3 {
        e -= 1;
    }
    let prev = bytes[e - 1];
    if prev.is_ascii_digit() {
        return;
    }
    match prev {
        b'^' | b'e' | b'E' | b'/' | b'+' | b'-' => {}
        b'*' => text.replace_range(e - 1..e, "^"),
        _ => {
            if bytes[e] == b'+' {
                text.replace_range(e..e + 1, "^");
            } else {
                text.insert(e, '^');
            }
        }
    }
}

fn clean_dot_notation(text: &mut String) {
    *text = text.replace('.', "*");
}

/// Parenthesize everything after the first top-level `/`; later top-level slashes become `*` inside the group.
fn wrap_denominator(text: &mut String) {
    let bytes = text.as_bytes();
    let mut index = 0;
    let slash = loop {
        let Some(&current) = bytes.get(index) else {
            return;
        };
        index += 1;
        match current {
            b'/' => break index - 1,
            b'(' | b'[' | b'{' => {
                if !segment_check(bytes, match_char(current), &mut index) {
                    return;
                }
            }
            _ => {}
        }
    };
    let rest = &bytes[slash + 1..];
    if !rest.iter().any(|&c| c == b'*' || c == b'/') {
        return;
    }
    if rest.first() == Some(&b'(') {
        let mut close = slash + 2;
        if segment_check(bytes, b')', &mut close) && close == bytes.len() {
            return;
        }
    }
    let mut depth = 0usize;
    let denominator: String = text[slash + 1..]
        .chars()
        .map(|c| {
            match c {
                '(' | '[' | '{' => depth += 1,
                ')' | ']' | '}' => depth = depth.saturating_sub(1),
                '/' if depth == 0 => return '*',
                _ => {}
            }
            c
        })
        .collect();
    text.truncate(slash + 1);
    text.push('(');
    text.push_str(&denominator);
    text.push(')');
}

/// Drop `^1` and `^(1)` powers.
fn remove_unit_powers(text: &mut String) {
    let mut start = 0;
    while let Some(found) = text[start..].find("^1").map(|p| p + start) {
        if text.as_bytes().get(found + 2).is_some_and(u8::is_ascii_digit) {
            start = found + 2;
            continue;
        }
        text.replace_range(found..found + 2, "");
        start = found;
    }
    while let Some(found) = text.find("^(1)") {
        multiply_replace(text, found, 4);
    }
}

fn remove_empty_parentheses(text: &mut String) {
    while let Some(found) = text.find("()") {
        if text.as_bytes().get(found + 2) == Some(&b'^') {
            text.replace_range(found..found + 2, "*1");
        } else {
            text.replace_range(found..found + 2, "");
        }
    }
}

/// `(1)^n` is a no-op factor.
fn remove_unit_bases(text: &mut String) {
    while let Some(found) = text.find("(1)^") {
        let bytes = text.as_bytes();
        let mut count = 4;
        if matches!(bytes.get(found + count), Some(b'+' | b'-')) {
            count += 1;
        }
        while bytes.get(found + count).is_some_and(u8::is_ascii_digit) {
            count += 1;
        }
        multiply_replace(text, found, count);
    }
}

/// Remove `len` bytes at `loc`, keeping the operators around it consistent.
fn multiply_replace(text: &mut String, loc: usize, len: usize) {
    if loc == 0 || text.len() <= loc + len {
        text.replace_range(loc..(loc + len).min(text.len()), "");
        return;
    }
    let is_op = |b: u8| matches!(b, b'*' | b'/' | b'^');
    let before = text.as_bytes()[loc - 1];
    let after = text.as_bytes()[loc + len];
    if is_op(before) && is_op(after) {
        text.replace_range(loc - 1..loc + len, "");
    } else if is_op(before) || is_op(after) {
        text.replace_range(loc..loc + len, "");
    } else {
        text.replace_range(loc..loc + len, "*");
    }
}

/// `m(kg)` style juxtaposition after a closing bracket becomes an explicit multiply.
fn insert_bracket_multiplies(text: &mut String) {
    let find_close = |text: &str, from: usize| text.get(from..)?.find([')', ']', '}']).map(|p| p + from);
    let mut pos = find_close(text, 0);
    while let Some(fnd) = pos {
        if fnd + 1 >= text.len() {
            break;
        }
        let bytes = text.as_bytes();
        let next = bytes[fnd + 1];
        let of_form = next == b'o'
            && bytes.get(fnd + 2) == Some(&b'f')
            && bytes.get(fnd + 3).is_some_and(|b| !matches!(b, b')' | b']' | b'}'));
        if matches!(next, b'*' | b'/' | b'^' | b')' | b']' | b'}') {
            pos = find_close(text, fnd + 1);
        } else if of_form {
            pos = find_close(text, fnd + 3);
        } else {
            text.insert(fnd + 1, '*');
            pos = find_close(text, fnd + 2);
        }
    }
}

/// Second, lighter cleanup: drop underscores, plus signs and dashes that do not introduce a number.
pub(crate) fn clean_phase2(text: &mut String) -> bool {
    let before = text.len();
    text.retain(|c| c != '_' && c != '+');
    let mut start = 0;
    while let Some(found) = text[start..].find('-').map(|p| p + start) {
        if text.as_bytes().get(found + 1).is_some_and(u8::is_ascii_digit) {
            start = found + 1;
        } else {
            text.remove(found);
            start = found;
        }
    }
    clear_empty_segments(text);
    text.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(s: &str) -> String {
        normalize(s)
    }

    fn clean_ci(s: &str) -> String {
        let mut out = s.to_string();
        clean_unit_string(&mut out, MatchFlags::CASE_INSENSITIVE);
        out
    }

    #[test]
    fn spaces_are_dropped_or_promoted() {
        assert_eq!(clean(" m"), "m");
        assert_eq!(clean("N * m"), "N*m");
        assert_eq!(clean("kg m"), "kgm");
        assert_eq!(clean("3 kg"), "3*kg");
        assert_eq!(clean("m/s s"), "m/s*s");
    }

    #[test]
    fn per_becomes_division() {
        assert_eq!(clean("miles per hour"), "miles/hour");
        assert_eq!(clean("per second"), "1/second");
        assert_eq!(clean("/s"), "1/s");
    }

    #[test]
    fn of_groups_become_commodities() {
        assert_eq!(clean("kg of (gold)"), "kg{gold}");
    }

    #[test]
    fn powers_and_exponents() {
        assert_eq!(clean("m2"), "m^2");
        assert_eq!(clean("ft-3"), "ft^-3");
        assert_eq!(clean("m**2"), "m^2");
        assert_eq!(clean("10^3"), "1e3");
        assert_eq!(clean("10*3"), "1e3");
        assert_eq!(clean("m^1"), "m");
        assert_eq!(clean("m<sup>2</sup>"), "m^2");
    }

    #[test]
    fn unicode_is_folded() {
        assert_eq!(clean("\u{00b5}m"), "um");
        assert_eq!(clean("m\u{00b2}"), "m^(2)");
        assert_eq!(clean("m\u{00b7}s\u{207b}\u{00b9}"), "m*s^(-1)");
        assert_eq!(clean("kg\u{00d7}m"), "kg*m");
    }

    #[test]
    fn dots_and_brackets() {
        assert_eq!(clean("kg.m"), "kg*m");
        assert_eq!(clean("2.5"), "2.5");
        assert_eq!(clean("(m)"), "m");
        assert_eq!(clean("(m)kg"), "(m)*kg");
        assert_eq!(clean("m[]"), "m");
    }

    #[test]
    fn case_insensitive_restores_si_spelling() {
        assert_eq!(clean_ci("mm"), "mm");
        assert_eq!(clean_ci("ml"), "mL");
        assert_eq!(clean_ci("MPA"), "mPA");
        assert_eq!(clean_ci("kg"), "KG");
        assert_eq!(clean_ci("km"), "Km");
        assert_eq!(clean_ci("m/s"), "m/s");
    }

    #[test]
    fn single_slash_wraps_the_denominator() {
        let slash = |s: &str| {
            let mut out = s.to_string();
            clean_unit_string(&mut out, MatchFlags::SINGLE_SLASH);
            out
        };
        assert_eq!(slash("kg/m*s"), "kg/(m*s)");
        assert_eq!(slash("J/kg/K"), "J/(kg*K)");
        assert_eq!(slash("kg/(m*s)"), "kg/(m*s)");
        assert_eq!(slash("m/s"), "m/s");
        assert_eq!(clean("kg/m*s"), "kg/m*s");
    }

    #[test]
    fn trailing_operators_are_stripped() {
        assert_eq!(normalize("m//////"), "m");
        assert_eq!(normalize("kg^^^^^^"), "kg");
        assert_eq!(normalize("s*./"), "s");
    }

    #[test]
    fn normalizer_is_idempotent() {
        for input in [
            "kg per m2",
            "N \u{00b7} m",
            "10^3 m",
            "(m/s)2",
            "kg.m/s",
            " per hour",
            "ft-3",
            "m\u{00b2}",
            "BTU / hr",
            "mi of (gold)",
            "m//////",
            "kg^^^^^^",
            "k-/^. \u{00b7}",
        ] {
            let once = normalize(input);
            let mut twice = once.clone();
            assert!(
                !clean_unit_string(&mut twice, MatchFlags::DEFAULT),
                "{:?} -> {:?} -> {:?}",
                input,
                once,
                twice
            );
        }
    }

    #[test]
    fn phase_two_strips_underscores_and_stray_dashes() {
        let mut s = "kg_m-s-2".to_string();
        assert!(clean_phase2(&mut s));
        assert_eq!(s, "kgms-2");
    }
}
