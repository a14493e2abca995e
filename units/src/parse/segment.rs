//! Bracket-aware scanning helpers.
//!
//! Unit strings nest `(...)`, `[...]`, `{...}` and `"..."` groups, and a backslash escapes the character after it.
//! Everything here works on byte offsets; the characters looked at are all ASCII, so every offset returned is a
//! valid `str` boundary.

use crate::flags::MatchFlags;

/// Closing character of an opening bracket and the other way round.
pub(crate) fn match_char(c: u8) -> u8 {
    match c {
        b'(' => b')',
        b')' => b'(',
        b'[' => b']',
        b']' => b'[',
        b'{' => b'}',
        b'}' => b'{',
        b'<' => b'>',
        b'>' => b'<',
        other => other,
    }
}

/// Scan forward from `*index` for `close`, skipping nested groups.
///
/// On success `*index` is one past the closing character. On failure it is `bytes.len()`.
pub(crate) fn segment_check(bytes: &[u8], close: u8, index: &mut usize) -> bool {
    while *index < bytes.len() {
        let current = bytes[*index];
        *index += 1;
        if current == close {
            return true;
        }
        match current {
            b'\\' => *index += 1,
            b'(' | b'[' | b'{' | b'"' => {
                if !segment_check(bytes, match_char(current), index) {
                    return false;
                }
            }
            b')' | b']' | b'}' => return false,
            _ => {}
        }
    }
    *index = (*index).min(bytes.len());
    false
}

/// Scan backward from `*index` for the opening character `open`, skipping nested groups.
///
/// On success `*index` is one before the opening character (`-1` when it was the first byte).
pub(crate) fn segment_check_reverse(bytes: &[u8], open: u8, index: &mut isize) -> bool {
    while *index >= 0 {
        let current = bytes[*index as usize];
        *index -= 1;
        if *index >= 0 && bytes[*index as usize] == b'\\' {
            *index -= 1;
            continue;
        }
        if current == open {
            return true;
        }
        match current {
            b')' | b']' | b'}' | b'"' => {
                let nested = if current == b'"' { b'"' } else { match_char(current) };
                if !segment_check_reverse(bytes, nested, index) {
                    return false;
                }
            }
            b'(' | b'[' | b'{' => return false,
            _ => {}
        }
    }
    false
}

/// Last position `<= upto` whose byte satisfies `pred`.
pub(crate) fn rfind_byte(bytes: &[u8], upto: usize, pred: impl Fn(u8) -> bool) -> Option<usize> {
    if bytes.is_empty() {
        return None;
    }
    let upto = upto.min(bytes.len() - 1);
    (0..=upto).rev().find(|&i| pred(bytes[i]))
}

/// Last occurrence of `needle` starting at or before `max_start`.
pub(crate) fn rfind_str(text: &str, needle: &str, max_start: usize) -> Option<usize> {
    let hay = text.as_bytes();
    let needle = needle.as_bytes();
    if needle.len() > hay.len() {
        return None;
    }
    let last = max_start.min(hay.len() - needle.len());
    (0..=last).rev().find(|&i| hay[i..].starts_with(needle))
}

/// Position of the rightmost top-level operator out of `ops`.
///
/// Bracketed groups are skipped while scanning backwards. An operator in the first position does not count.
pub(crate) fn find_operator_sep(text: &str, ops: &[u8]) -> Option<usize> {
    let bytes = text.as_bytes();
    let is_close = |c: u8| matches!(c, b')' | b'}' | b']');
    let is_sep = |c: u8| ops.contains(&c) || is_close(c);
    let mut sep = rfind_byte(bytes, bytes.len(), is_sep);
    while let Some(s) = sep {
        if s == 0 || !is_close(bytes[s]) {
            break;
        }
        let mut index = s as isize - 1;
        segment_check_reverse(bytes, match_char(bytes[s]), &mut index);
        sep = if index > 0 { rfind_byte(bytes, index as usize, is_sep) } else { None };
    }
    match sep {
        Some(0) => None,
        other => other.filter(|&s| !is_close(bytes[s])),
    }
}

/// Position of the rightmost top-level occurrence of a word operator such as `per` or `of`.
///
/// Occurrences directly followed by `^`, `*` or `/` belong to a unit name and are skipped, as are occurrences
/// inside brackets.
pub(crate) fn find_word_operator_sep(text: &str, keyword: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let klen = keyword.len();
    let mut sep = text.rfind(keyword)?;
    if bytes.len() > sep + klen + 1 {
        while matches!(bytes.get(sep + klen), Some(b'^' | b'*' | b'/')) {
            if sep == 0 {
                return None;
            }
            sep = rfind_str(text, keyword, sep - 1)?;
        }
    }
    let mut findex = bytes.len();
    loop {
        let Some(close) = rfind_byte(bytes, findex, |c| matches!(c, b')' | b'}' | b']')) else {
            return Some(sep);
        };
        if close < sep {
            return Some(sep);
        }
        let mut index = close as isize - 1;
        segment_check_reverse(bytes, match_char(bytes[close]), &mut index);
        if index < 0 {
            return None;
        }
        findex = index as usize;
        if findex < sep {
            sep = rfind_str(text, keyword, findex)?;
        }
    }
}

/// Strip parentheses that enclose the whole string.
pub(crate) fn remove_outer_parentheses(text: &mut String) {
    while text.len() >= 2 && text.starts_with('(') && text.ends_with(')') {
        let bytes = text.as_bytes();
        let mut open = 1;
        for &b in &bytes[1..bytes.len() - 1] {
            match b {
                b'(' => open += 1,
                b')' => {
                    open -= 1;
                    if open == 0 {
                        return;
                    }
                }
                _ => {}
            }
        }
        if open != 1 {
            return;
        }
        text.pop();
        text.remove(0);
    }
}

/// Remove empty `()`, `[]`, `{}` and `<>` groups.
pub(crate) fn clear_empty_segments(text: &mut String) -> bool {
    let before = text.len();
    for seg in ["()", "[]", "{}", "<>"] {
        while let Some(pos) = text.find(seg) {
            if pos > 0 && text.as_bytes()[pos - 1] == b'\\' {
                break;
            }
            text.replace_range(pos..pos + 2, "");
        }
    }
    text.len() != before
}

/// Structural validity: balanced groups, no doubled operators, well-formed exponents.
pub(crate) fn check_valid_unit_string(text: &str, flags: MatchFlags) -> bool {
    let bytes = text.as_bytes();
    if bytes.first() == Some(&b'^') || bytes.last() == Some(&b'^') {
        return false;
    }
    let is_op = |c: u8| matches!(c, b'*' | b'/' | b'^');
    if bytes.windows(2).any(|w| is_op(w[0]) && is_op(w[1])) {
        return false;
    }
    if !flags.contains(MatchFlags::SKIP_CODE_REPLACEMENTS) {
        if text.contains("-+") || text.contains("+-") {
            return false;
        }
        let mut index = 0;
        while index < bytes.len() {
            let current = bytes[index];
            index += 1;
            match current {
                b'\\' => index += 1,
                b'(' | b'[' | b'{' | b'"' => {
                    if !segment_check(bytes, match_char(current), &mut index) {
                        return false;
                    }
                }
                b')' | b']' | b'}' => return false,
                _ => {}
            }
        }
        for (pos, _) in text.match_indices('^') {
            if !valid_exponent(&bytes[pos + 1..]) {
                return false;
            }
        }
    }
    // chained powers such as m^2^3 are ambiguous
    for (pos, _) in text.match_indices('^') {
        if let Some(len) = exponent_len(&bytes[pos + 1..]) {
            if bytes.get(pos + 1 + len) == Some(&b'^') {
                return false;
            }
        }
    }
    true
}

fn valid_exponent(rest: &[u8]) -> bool {
    match rest.first() {
        Some(c) if c.is_ascii_digit() => true,
        Some(b'-') => rest.get(1).is_some_and(u8::is_ascii_digit),
        Some(b'(') => {
            let mut i = 1;
            if rest.get(i) == Some(&b'-') {
                i += 1;
            }
            let start = i;
            let mut dot = false;
            while let Some(&c) = rest.get(i) {
                match c {
                    b')' => return i > start,
                    b'.' if !dot => dot = true,
                    c if c.is_ascii_digit() => {}
                    _ => return false,
                }
                i += 1;
            }
            false
        }
        _ => false,
    }
}

fn exponent_len(rest: &[u8]) -> Option<usize> {
    match rest.first()? {
        b'(' => rest.iter().position(|&c| c == b')').map(|p| p + 1),
        b'-' => Some(1 + rest[1..].iter().take_while(|c| c.is_ascii_digit()).count()),
        _ => Some(rest.iter().take_while(|c| c.is_ascii_digit()).count()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_split_skips_groups() {
        assert_eq!(find_operator_sep("m/s", b"*/"), Some(1));
        assert_eq!(find_operator_sep("kg*m/s", b"*/"), Some(4));
        assert_eq!(find_operator_sep("kg/(m*s)", b"*/"), Some(2));
        assert_eq!(find_operator_sep("(m*s)", b"*/"), None);
        assert_eq!(find_operator_sep("/s", b"*/"), None);
        assert_eq!(find_operator_sep("m^2", b"^"), Some(1));
        assert_eq!(find_operator_sep("(m/s)^2", b"^"), Some(5));
        assert_eq!(find_operator_sep("kg{a/b}", b"*/"), None);
    }

    #[test]
    fn word_operator_ignores_unit_names_and_groups() {
        assert_eq!(find_word_operator_sep("miles per hour", "per"), Some(6));
        assert_eq!(find_word_operator_sep("kgofgold", "of"), Some(2));
        assert_eq!(find_word_operator_sep("kg(of)", "of"), None);
        assert_eq!(find_word_operator_sep("meter", "per"), None);
    }

    #[test]
    fn segments_nest_and_escape() {
        let s = b"(a[b]c)d";
        let mut i = 1;
        assert!(segment_check(s, b')', &mut i));
        assert_eq!(i, 7);
        let s = b"(a\\)b)";
        let mut i = 1;
        assert!(segment_check(s, b')', &mut i));
        assert_eq!(i, 6);
        let s = b"x{a(b)}";
        let mut i = 5;
        assert!(segment_check_reverse(s, b'{', &mut i));
        assert_eq!(i, 0);
    }

    #[test]
    fn outer_parentheses() {
        let mut s = "((m/s))".to_string();
        remove_outer_parentheses(&mut s);
        assert_eq!(s, "m/s");
        let mut s = "(m)/(s)".to_string();
        remove_outer_parentheses(&mut s);
        assert_eq!(s, "(m)/(s)");
    }

    #[test]
    fn validity() {
        let ok = |s| check_valid_unit_string(s, MatchFlags::DEFAULT);
        assert!(ok("m/s^2"));
        assert!(ok("m^-2"));
        assert!(ok("m^(-1.5)"));
        assert!(ok("kg{gold}"));
        assert!(!ok("m//s"));
        assert!(!ok("m^"));
        assert!(!ok("^m"));
        assert!(!ok("m^x"));
        assert!(!ok("(m/s"));
        assert!(!ok("m/s)"));
        assert!(!ok("m^2^3"));
        assert!(!ok("m+-s"));
    }
}
