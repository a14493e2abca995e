//! SI and binary prefix tables.

use std::cmp::Ordering;

const KIBI: f64 = 1024.0;
const MEBI: f64 = KIBI * KIBI;
const GIBI: f64 = MEBI * KIBI;
const TEBI: f64 = GIBI * KIBI;
const PEBI: f64 = TEBI * KIBI;
const EXBI: f64 = PEBI * KIBI;

/// Multiplier of a single-character prefix.
///
/// A few upper-case letters double for their lower-case prefix (`K`, `U`, `D`, `C`, `H`, `F`, `A`) because that is
/// how they appear in all-caps sources; `B` is "billion".
pub(crate) fn prefix_multiplier(c: u8) -> Option<f64> {
    let m = match c {
        b'm' => 1e-3,
        b'k' | b'K' => 1e3,
        b'M' => 1e6,
        b'u' | b'U' => 1e-6,
        b'd' | b'D' => 0.1,
        b'c' | b'C' => 0.01,
        b'h' | b'H' => 100.0,
        b'n' => 1e-9,
        b'p' => 1e-12,
        b'G' | b'B' => 1e9,
        b'T' => 1e12,
        b'f' | b'F' => 1e-15,
        b'E' => 1e18,
        b'P' => 1e15,
        b'Z' => 1e21,
        b'Y' => 1e24,
        b'a' | b'A' => 1e-18,
        b'z' => 1e-21,
        b'y' => 1e-24,
        _ => return None,
    };
    Some(m)
}

/// Two-character prefixes, sorted by their byte pair.
const TWO_CHAR_PREFIXES: &[([u8; 2], f64)] = &[
    (*b"DA", 10.0),
    (*b"EX", 1e18),
    (*b"Ei", EXBI),
    (*b"GA", 1e9),
    (*b"Gi", GIBI),
    (*b"Ki", KIBI),
    (*b"MA", 1e6),
    (*b"MM", 1e6),
    (*b"Mi", MEBI),
    (*b"PT", 1e15),
    (*b"Pi", PEBI),
    (*b"TR", 1e15),
    (*b"Ti", TEBI),
    (*b"YA", 1e24),
    (*b"YO", 1e-24),
    (*b"ZA", 1e21),
    (*b"ZO", 1e-21),
    (*b"da", 10.0),
    (*b"mA", 1e6),
    (*b"mc", 1e-6),
    (*b"pT", 1e15),
];

/// Multiplier of a two-character prefix (binary prefixes and all-caps spellings).
pub(crate) fn prefix_multiplier_2char(c1: u8, c2: u8) -> Option<f64> {
    TWO_CHAR_PREFIXES
        .binary_search_by(|(key, _)| key.cmp(&[c1, c2]))
        .ok()
        .map(|i| TWO_CHAR_PREFIXES[i].1)
}

/// Prefix words, sorted.
const PREFIX_WORDS: &[(&str, f64)] = &[
    ("atto", 1e-18),
    ("centi", 0.01),
    ("deca", 10.0),
    ("deci", 0.1),
    ("deka", 10.0),
    ("exa", 1e18),
    ("exbi", EXBI),
    ("femto", 1e-15),
    ("gibi", GIBI),
    ("giga", 1e9),
    ("hecto", 100.0),
    ("kibi", KIBI),
    ("kilo", 1e3),
    ("mebi", MEBI),
    ("mega", 1e6),
    ("micro", 1e-6),
    ("milli", 1e-3),
    ("nano", 1e-9),
    ("pebi", PEBI),
    ("peta", 1e15),
    ("pico", 1e-12),
    ("tebi", TEBI),
    ("tera", 1e12),
    ("yocto", 1e-24),
    ("yotta", 1e24),
    ("zepto", 1e-21),
    ("zetta", 1e21),
];

/// Prefix word at the start of `text`, with its multiplier and byte length.
///
/// ```text
/// "kilometer" -> (1000.0, 4)
/// "centimeter" -> (0.01, 5)
/// ```
pub(crate) fn prefix_word(text: &str) -> Option<(f64, usize)> {
    let bytes = text.as_bytes();
    let head = |word: &str| &bytes[..word.len().min(bytes.len())];
    let idx = PREFIX_WORDS.partition_point(|(word, _)| word.as_bytes().cmp(head(word)) == Ordering::Less);
    let (word, mult) = PREFIX_WORDS.get(idx)?;
    bytes.starts_with(word.as_bytes()).then_some((*mult, word.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_sorted() {
        assert!(TWO_CHAR_PREFIXES.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(PREFIX_WORDS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn single_char() {
        assert_eq!(prefix_multiplier(b'k'), Some(1e3));
        assert_eq!(prefix_multiplier(b'M'), Some(1e6));
        assert_eq!(prefix_multiplier(b'm'), Some(1e-3));
        assert_eq!(prefix_multiplier(b'N'), None);
        assert_eq!(prefix_multiplier(b'x'), None);
    }

    #[test]
    fn two_char() {
        assert_eq!(prefix_multiplier_2char(b'K', b'i'), Some(1024.0));
        assert_eq!(prefix_multiplier_2char(b'd', b'a'), Some(10.0));
        assert_eq!(prefix_multiplier_2char(b'k', b'm'), None);
    }

    #[test]
    fn words() {
        assert_eq!(prefix_word("kilometer"), Some((1e3, 4)));
        assert_eq!(prefix_word("centimeter"), Some((0.01, 5)));
        assert_eq!(prefix_word("zettabyte"), Some((1e21, 5)));
        assert_eq!(prefix_word("exameter"), Some((1e18, 3)));
        assert_eq!(prefix_word("meter"), None);
        assert_eq!(prefix_word("kil"), None);
    }
}
