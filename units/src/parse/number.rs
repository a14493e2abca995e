//! Numeric literals at the front of a unit string.

use crate::error::{Result, UnitsError};

/// `true` if `text` starts with something [`leading_number`] can read.
pub(crate) fn looks_like_number(text: &str) -> bool {
    let b = text.as_bytes();
    let digit = |i: usize| b.get(i).is_some_and(u8::is_ascii_digit);
    match b.first() {
        None => false,
        Some(c) if c.is_ascii_digit() => true,
        Some(b'.') => digit(1),
        Some(b'-' | b'+') => digit(1) || (b.get(1) == Some(&b'.') && digit(2)),
        _ => false,
    }
}

/// Read the longest decimal literal at the start of `text`.
///
/// Accepts an optional sign, digits with an optional fraction, and an optional exponent. Returns the value and the
/// number of bytes consumed, or `None` if `text` does not start with a number.
///
/// # Errors
/// [`UnitsError::NumericOverflow`] when the literal does not fit in an `f64`: it overflows to infinity, or it
/// underflows to zero although its mantissa is not zero.
pub(crate) fn leading_number(text: &str) -> Result<Option<(f64, usize)>> {
    let b = text.as_bytes();
    let mut end = 0;
    if matches!(b.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = count_digits(&b[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if b.get(end) == Some(&b'.') {
        frac_digits = count_digits(&b[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return Ok(None);
    }
    let mantissa_end = end;
    if matches!(b.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(b.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&b[exp_end.min(b.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }
    let literal = &text[..end];
    let value: f64 = literal
        .parse()
        .map_err(|_| UnitsError::NumericOverflow(literal.to_string()))?;
    if value.is_infinite() {
        return Err(UnitsError::NumericOverflow(literal.to_string()));
    }
    if value == 0.0 && text[..mantissa_end].bytes().any(|c| (b'1'..=b'9').contains(&c)) {
        return Err(UnitsError::NumericOverflow(literal.to_string()));
    }
    Ok(Some((value, end)))
}

fn count_digits(b: &[u8]) -> usize {
    b.iter().take_while(|c| c.is_ascii_digit()).count()
}

/// Leading integer as `atoi` reads it: optional sign, then digits; `0` when there are none.
pub(crate) fn leading_int(text: &str) -> i64 {
    let b = text.as_bytes();
    let (sign, start) = match b.first() {
        Some(b'-') => (-1, 1),
        Some(b'+') => (1, 1),
        _ => (1, 0),
    };
    let digits = count_digits(&b[start..]);
    text[start..start + digits]
        .parse::<i64>()
        .map(|v| sign * v)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn recognizes_number_starts() {
        assert!(looks_like_number("45 m"));
        assert!(looks_like_number(".5m"));
        assert!(looks_like_number("-2"));
        assert!(looks_like_number("+.5"));
        assert!(!looks_like_number("m"));
        assert!(!looks_like_number("."));
        assert!(!looks_like_number("-m"));
        assert!(!looks_like_number(""));
    }

    #[test]
    fn reads_longest_literal() {
        assert_eq!(leading_number("45 m").unwrap(), Some((45.0, 2)));
        let (v, n) = leading_number("23.7m/s").unwrap().unwrap();
        assert_relative_eq!(v, 23.7);
        assert_eq!(n, 4);
        assert_eq!(leading_number("1e3m").unwrap(), Some((1000.0, 3)));
        assert_eq!(leading_number("2em").unwrap(), Some((2.0, 1)));
        assert_eq!(leading_number("5.").unwrap(), Some((5.0, 2)));
        assert_eq!(leading_number("-.25").unwrap(), Some((-0.25, 4)));
        assert_eq!(leading_number("m").unwrap(), None);
    }

    #[test]
    fn out_of_range_literals_fail() {
        assert!(matches!(leading_number("1e999"), Err(UnitsError::NumericOverflow(_))));
        assert!(matches!(leading_number("1e-999"), Err(UnitsError::NumericOverflow(_))));
        assert_eq!(leading_number("0e-999").unwrap(), Some((0.0, 6)));
    }

    #[test]
    fn atoi_semantics() {
        assert_eq!(leading_int("12]"), 12);
        assert_eq!(leading_int("-3"), -3);
        assert_eq!(leading_int("x"), 0);
    }
}
