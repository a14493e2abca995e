//! Splitting of merged tokens such as `Nm`, `kgmeter` or `amphour`.
//!
//! This is the last and most expensive fallback: it grows a prefix one character at a time and tries to read the
//! prefix and the remainder as two units. The caller's partition budget caps how deep it may nest.

use super::prefix::prefix_word;
use super::segment::{find_word_operator_sep, match_char, rfind_byte, segment_check};
use super::{quick_match, unit_from_string};
use crate::error::Result;
use crate::flags::MatchFlags;
use units_core::si::{A, M};
use units_core::special::ERROR;
use units_core::PreciseUnit;

pub(super) fn try_partitioning(text: &str, flags: MatchFlags) -> Result<PreciseUnit> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    // a closed group followed by more text: (m/s)kg
    if let Some(last) = rfind_byte(bytes, len, |c| matches!(c, b'}' | b']' | b')')) {
        if last + 1 < len {
            let tail = unit_from_string(&text[last + 1..], flags)?;
            if tail.is_error() {
                return Ok(ERROR);
            }
            let head = unit_from_string(&text[..=last], flags)?;
            if head.is_error() {
                return Ok(ERROR);
            }
            return Ok(head * tail);
        }
    }

    if let Some(pos) = find_word_operator_sep(text, "meter") {
        let rest = format!("{}{}", &text[..pos], &text[pos + 5..]);
        let unit = unit_from_string(&rest, flags)?;
        if !unit.is_error() {
            return Ok(M * unit);
        }
    }
    if let Some(rest) = text.strip_prefix("amp") {
        let unit = unit_from_string(rest, flags)?;
        if !unit.is_error() {
            return Ok(A * unit);
        }
    }
    if let Some((mult, used)) = prefix_word(text) {
        let unit = unit_from_string(&text[used..], flags)?;
        return Ok(if unit.is_error() { ERROR } else { unit.scaled(mult) });
    }

    // a leading N is usually newton, so it gets to stand alone
    let mut part = if bytes.first() == Some(&b'N') { 1 } else { 2 };
    part = ceil_boundary(text, part.min(len));
    if matches!(bytes[part - 1], b'(' | b'[' | b'{') {
        part -= 1;
    }

    let mut valid = Vec::new();
    while part > 0 && part + 1 < len {
        let head = quick_match(&text[..part], flags)?;
        if !head.is_error() {
            let tail = unit_from_string(&text[part..], flags | MatchFlags::SKIP_PARTITION_CHECK)?;
            if !tail.is_error() {
                return Ok(head * tail);
            }
            valid.push(part);
        }

        part += text[part..].chars().next().map_or(1, char::len_utf8);
        let last = bytes[part - 1];
        if matches!(last, b'(' | b'[' | b'{') {
            let start = part;
            segment_check(bytes, match_char(last), &mut part);
            // a parenthesized group holding its own expression is never split
            if last == b'(' && text[start..part].contains(|c| matches!(c, '(' | '{' | '[' | '*' | '/')) {
                break;
            }
        }
        if bytes[part - 1].is_ascii_digit() {
            while part + 1 < len && (bytes[part] == b'.' || bytes[part].is_ascii_digit()) {
                part += 1;
            }
        }
    }

    for &split in valid.iter().rev() {
        let head = quick_match(&text[..split], flags)?;
        let tail = unit_from_string(&text[split..], flags)?;
        if !tail.is_error() {
            return Ok(head * tail);
        }
    }
    Ok(ERROR)
}

fn ceil_boundary(text: &str, mut index: usize) -> usize {
    while !text.is_char_boundary(index) {
        index += 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use units_core::si::{HR, KG, MIN, N};

    fn split(s: &str) -> PreciseUnit {
        try_partitioning(s, MatchFlags::NOT_FIRST_PASS).unwrap()
    }

    #[test]
    fn merged_symbols() {
        assert_eq!(split("kgmin"), KG.multiply(MIN));
        assert_eq!(split("Nmin"), N.multiply(MIN));
        // the remainder must be at least two characters long
        assert!(split("kgs").is_error());
    }

    #[test]
    fn meter_and_amp_words() {
        assert_eq!(split("kilogrammeter"), KG.multiply(M));
        assert_eq!(split("amphour"), A.multiply(HR));
    }

    #[test]
    fn trailing_group() {
        assert_eq!(split("(m)kg"), M.multiply(KG));
    }

    #[test]
    fn nothing_to_split() {
        assert!(split("zqxw").is_error());
        assert!(split("\u{e9}\u{e9}").is_error());
    }
}
