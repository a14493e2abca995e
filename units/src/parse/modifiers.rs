//! Textual rewrites for modifier words: `square`, `cubic`, `half`, `million`, `US`, `British`, `troy`...
//!
//! Both tables only rewrite text; the parser decides what to do with the result.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    /// Word at the start, replaced by a suffix.
    StartTail,
    /// Word at the start, replaced in place.
    StartReplace,
    /// Word anywhere, replaced by `*` (or removed at the start) plus a suffix.
    AnywhereTail,
    /// Word anywhere, replaced in place.
    AnywhereReplace,
    /// Word at the end, replaced in place.
    TailReplace,
}

use Placement::*;

const WORD_MODIFIERS: &[(&str, &str, Placement)] = &[
    ("cubic", "^3", StartTail),
    ("reciprocal", "^-1", StartTail),
    ("reciprocal", "^-1", TailReplace),
    ("square", "^2", StartTail),
    ("squared", "^2", TailReplace),
    ("cubed", "^3", TailReplace),
    ("cu", "^3", StartTail),
    ("sq", "^2", StartTail),
    ("tenth", "0.1", AnywhereReplace),
    ("ten", "10", AnywhereReplace),
    ("one", "", StartReplace),
    ("quarter", "0.25", AnywhereReplace),
    ("half", "0.5", AnywhereReplace),
    ("hundred", "100", AnywhereReplace),
    ("million", "1e6", AnywhereReplace),
    ("billion", "1e9", AnywhereReplace),
    ("trillion", "1e12", AnywhereReplace),
    ("thousand", "1000", AnywhereReplace),
    ("tothethirdpower", "^3", AnywhereReplace),
    ("tothefourthpower", "^4", AnywhereReplace),
    ("tothefifthpower", "^5", AnywhereReplace),
    ("tothesixthpower", "^6", AnywhereReplace),
    ("square", "^2", AnywhereTail),
    ("cubic", "^3", AnywhereTail),
    ("sq", "^2", TailReplace),
    ("cu", "^3", TailReplace),
];

/// Rewrite the first modifier word found in `unit`.
///
/// Returns `true` if `unit` changed. A string that is nothing but a modifier word is left alone. When no word
/// matches, a bare trailing exponent (`m2`, `s-1`) gets its missing `^`.
pub(crate) fn word_modifiers(unit: &mut String) -> bool {
    if unit.starts_with("cup") || unit.starts_with("hundredweight") {
        return false;
    }
    for &(word, replacement, placement) in WORD_MODIFIERS {
        let wlen = word.len();
        if unit.len() < wlen {
            continue;
        }
        let found = match placement {
            TailReplace => unit.ends_with(word).then(|| unit.len() - wlen),
            StartTail | StartReplace => unit.starts_with(word).then_some(0),
            AnywhereTail | AnywhereReplace => unit.find(word),
        };
        let Some(pos) = found else {
            continue;
        };
        if unit.len() == wlen {
            return false;
        }
        match placement {
            TailReplace | AnywhereReplace | StartReplace => unit.replace_range(pos..pos + wlen, replacement),
            StartTail => {
                unit.replace_range(..wlen, "");
                unit.push_str(replacement);
            }
            AnywhereTail => {
                let filler = if pos == 0 { "" } else { "*" };
                unit.replace_range(pos..pos + wlen, filler);
                unit.push_str(replacement);
            }
        }
        return true;
    }

    let bytes = unit.as_bytes();
    let len = bytes.len();
    if len >= 2 && bytes[len - 1].is_ascii_digit() {
        if bytes[len - 2] == b'-' {
            unit.insert(len - 2, '^');
            return true;
        }
        if !bytes[len - 2].is_ascii_digit() {
            unit.insert(len - 1, '^');
            return true;
        }
    }
    false
}

const LOCALITY_MODIFIERS: &[(&str, &str)] = &[
    ("internationaltable", "_IT"),
    ("international", "_i"),
    ("USandBritish", "_av"),
    ("US&British", "_av"),
    ("USAsurvey", "_us"),
    ("USsurvey", "_us"),
    ("USSurvey", "_us"),
    ("USA", "_us"),
    ("statute", "_us"),
    ("gregorian", "_g"),
    ("Gregorian", "_g"),
    ("synodic", "_s"),
    ("sidereal", "_sdr"),
    ("julian", "_j"),
    ("Julian", "_j"),
    ("thermochemical", "_th"),
    ("(th)", "_th"),
    ("metric", "_m"),
    ("imperial", "_br"),
    ("imp", "_br"),
    ("US", "_us"),
    ("(IT)", "_IT"),
    ("troy", "_tr"),
    ("apothecary", "_ap"),
    ("apothecaries", "_ap"),
    ("avoirdupois", "_av"),
    ("Chinese", "_ch"),
    ("survey", "_us"),
    ("tropical", "_t"),
    ("British", "_br"),
    ("british", "_br"),
    ("Br", "_br"),
    ("BR", "_br"),
    ("UK", "_br"),
];

/// Locale tags that may already be glued to the front or back of a token.
const LOCALE_TAGS: &[&str] = &["us", "br", "av", "ch", "IT", "th", "ap", "tr"];

/// Outcome of [`locality_modifiers`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Locality {
    /// The string is only a qualifier; it cannot be a unit.
    Reject,
    /// A qualifier was moved to a suffix tag; parse the new string again.
    Rewritten(String),
    /// A glued locale tag was found; look up this key.
    Key(String),
    /// Nothing to do.
    None,
}

/// Move a locality qualifier to the `_tag` suffix form the table uses.
///
/// ```text
/// "USgallon"   -> Rewritten("gallon_us")
/// "ozttroy"    -> Rewritten("ozt_tr")
/// "brgallons"  -> Key("gallon_br")
/// ```
pub(crate) fn locality_modifiers(unit: &str) -> Locality {
    let mut unit = unit.to_string();
    let mut changed = false;
    for (word, tag) in LOCALITY_MODIFIERS {
        if let Some(pos) = unit.find(word) {
            if word.len() == unit.len() {
                return Locality::Reject;
            }
            unit.replace_range(pos..pos + word.len(), "");
            unit.push_str(tag);
            changed = true;
            break;
        }
    }
    changed |= super::segment::clear_empty_segments(&mut unit);
    if changed {
        return Locality::Rewritten(unit);
    }
    if unit.len() < 4 {
        return Locality::None;
    }
    for tag in LOCALE_TAGS {
        if let Some(rest) = unit.strip_prefix(tag) {
            let rest = rest.strip_suffix('s').unwrap_or(rest);
            return Locality::Key(format!("{}_{}", rest, tag));
        }
        if unit.ends_with(tag) {
            let split = unit.len() - tag.len();
            return Locality::Key(format!("{}_{}", &unit[..split], tag));
        }
    }
    Locality::None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modified(s: &str) -> Option<String> {
        let mut s = s.to_string();
        word_modifiers(&mut s).then_some(s)
    }

    #[test]
    fn powers_from_words() {
        assert_eq!(modified("cubicmeter").as_deref(), Some("meter^3"));
        assert_eq!(modified("squarefoot").as_deref(), Some("foot^2"));
        assert_eq!(modified("metersquared").as_deref(), Some("meter^2"));
        assert_eq!(modified("reciprocalsecond").as_deref(), Some("second^-1"));
    }

    #[test]
    fn numbers_from_words() {
        assert_eq!(modified("halfinch").as_deref(), Some("0.5inch"));
        assert_eq!(modified("millionbtu").as_deref(), Some("1e6btu"));
        assert_eq!(modified("oneday").as_deref(), Some("day"));
    }

    #[test]
    fn guarded_words() {
        assert_eq!(modified("cups"), None);
        assert_eq!(modified("hundredweight"), None);
        assert_eq!(modified("square"), None);
    }

    #[test]
    fn trailing_exponent() {
        assert_eq!(modified("m2").as_deref(), Some("m^2"));
        assert_eq!(modified("s-1").as_deref(), Some("s^-1"));
        assert_eq!(modified("m12"), None);
    }

    #[test]
    fn locality() {
        assert_eq!(locality_modifiers("USgallon"), Locality::Rewritten("gallon_us".into()));
        assert_eq!(locality_modifiers("ozttroy"), Locality::Rewritten("ozt_tr".into()));
        assert_eq!(locality_modifiers("troy"), Locality::Reject);
        assert_eq!(locality_modifiers("brgallons"), Locality::Key("gallon_br".into()));
        assert_eq!(locality_modifiers("gallonbr"), Locality::Key("gallon_br".into()));
        assert_eq!(locality_modifiers("xyz"), Locality::None);
    }
}
