//! Commodity codec.
//!
//! A commodity is a free-form annotation on a unit ("kg of gold", `mL{water}`). It is carried in the 32-bit
//! commodity field of [`PreciseUnit`](units_core::PreciseUnit) and only has to survive a round trip through the
//! parser and the generator, so the codec is deliberately simple:
//!
//! - well-known names map to small fixed codes (case-insensitive);
//! - names registered with [`add_commodity`] map to the code they were registered with;
//! - `CXCOMM[n]` decodes back to `n`;
//! - anything else is hashed (SHA-256, first four bytes) into a code with bit 28 set, so it can never collide with
//!   the fixed codes. Hashed names are remembered so they decode back within the same process.
//!
//! Codes never have the high bit set: that bit marks an inverse commodity (`!code`).

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// Bit marking a commodity that sits in a denominator.
pub const INVERSE_BIT: u32 = 0x8000_0000;
/// Bit set on every hashed code.
pub const HASH_BIT: u32 = 0x1000_0000;

/// Code of `water`.
pub const WATER: u32 = 1;
/// Code of `gold`.
pub const GOLD: u32 = 2;
/// Code of `cells`.
pub const CELLS: u32 = 61;
/// Code of `particles`.
pub const PARTICLES: u32 = 62;
/// Code of `embryos`.
pub const EMBRYOS: u32 = 67;
/// Code of `pixels`.
pub const PIXELS: u32 = 68;
/// Code of `voxels`.
pub const VOXELS: u32 = 69;
/// Code of `hahnemann` (homeopathic dilution, centesimal method).
pub const HAHNEMANN: u32 = 90;
/// Code of `korsakov` (homeopathic dilution, single-vessel method).
pub const KORSAKOV: u32 = 91;

/// Well-known commodities and their fixed codes.
const KNOWN_COMMODITIES: &[(&str, u32)] = &[
    ("water", WATER),
    ("gold", GOLD),
    ("silver", 3),
    ("platinum", 4),
    ("palladium", 5),
    ("copper", 6),
    ("aluminum", 7),
    ("iron", 8),
    ("steel", 9),
    ("lead", 10),
    ("zinc", 11),
    ("nickel", 12),
    ("tin", 13),
    ("mercury", 14),
    ("oil", 20),
    ("crude", 21),
    ("gasoline", 22),
    ("diesel", 23),
    ("naturalgas", 24),
    ("coal", 25),
    ("electricity", 26),
    ("corn", 40),
    ("wheat", 41),
    ("rice", 42),
    ("soybeans", 43),
    ("sugar", 44),
    ("coffee", 45),
    ("cotton", 46),
    ("cattle", 47),
    ("hogs", 48),
    ("lumber", 49),
    ("people", 60),
    ("cells", CELLS),
    ("particles", PARTICLES),
    ("cases", 63),
    ("items", 64),
    ("tickets", 65),
    ("vehicles", 66),
    ("embryos", EMBRYOS),
    ("pixels", PIXELS),
    ("voxels", VOXELS),
    ("molecules", 70),
    ("atoms", 71),
    ("photons", 72),
    ("creatinine", 80),
    ("hemoglobin", 81),
    ("protein", 82),
    ("dna", 83),
    ("rna", 84),
    ("cholesterol", 85),
    ("glucose", 86),
    ("bacteria", 87),
    ("hahnemann", HAHNEMANN),
    ("korsakov", KORSAKOV),
];

/// Alternate spellings folded onto a known name before lookup.
const ALIASES: &[(&str, &str)] = &[
    ("cell", "cells"),
    ("particle", "particles"),
    ("case", "cases"),
    ("item", "items"),
    ("ticket", "tickets"),
    ("vehicle", "vehicles"),
    ("person", "people"),
    ("embryo", "embryos"),
    ("pixel", "pixels"),
    ("voxel", "voxels"),
    ("molecule", "molecules"),
    ("atom", "atoms"),
    ("photon", "photons"),
    ("aluminium", "aluminum"),
    ("h2o", "water"),
    ("hg", "mercury"),
    ("au", "gold"),
    ("ag", "silver"),
    ("gas", "naturalgas"),
    ("hgb", "hemoglobin"),
    ("soybean", "soybeans"),
];

static KNOWN_BY_NAME: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| KNOWN_COMMODITIES.iter().copied().collect());

static KNOWN_BY_CODE: Lazy<HashMap<u32, &'static str>> =
    Lazy::new(|| KNOWN_COMMODITIES.iter().map(|&(name, code)| (code, name)).collect());

/// Hashed names remembered for decoding. Past this, unseen names still encode but decode as `CXCOMM[n]`.
const LEARNED_LIMIT: usize = 1024;

#[derive(Default)]
struct RuntimeCommodities {
    by_name: HashMap<String, u32>,
    by_code: HashMap<u32, String>,
    learned: usize,
}

impl RuntimeCommodities {
    fn learn(&mut self, key: String, name: &str, code: u32) {
        if self.learned >= LEARNED_LIMIT || self.by_name.contains_key(&key) {
            return;
        }
        self.by_code.entry(code).or_insert_with(|| name.to_string());
        self.by_name.insert(key, code);
        self.learned += 1;
    }
}

static RUNTIME: Lazy<RwLock<RuntimeCommodities>> = Lazy::new(|| RwLock::new(RuntimeCommodities::default()));

fn canonical_name(name: &str) -> String {
    let lower: String = name.trim().to_lowercase();
    match ALIASES.iter().find(|(alias, _)| *alias == lower) {
        Some((_, target)) => (*target).to_string(),
        None => lower,
    }
}

fn parse_cxcomm(name: &str) -> Option<u32> {
    let digits = name.strip_prefix("CXCOMM[")?.strip_suffix(']')?;
    digits.parse().ok()
}

fn hash_code(name: &str) -> u32 {
    let digest = Sha256::digest(name.as_bytes());
    let word = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
    (word & !INVERSE_BIT) | HASH_BIT
}

/// Encode a commodity name.
///
/// The empty string encodes to `0` (no commodity). Escaped brackets (`\{`, `\(`, ...) written by the generator are
/// unescaped first so that a generated string parses back to the same code.
pub fn encode(name: &str) -> u32 {
    let unescaped = unescape(name);
    let name = unescaped.trim();
    if name.is_empty() {
        return 0;
    }
    if let Some(code) = parse_cxcomm(name) {
        return code & !INVERSE_BIT;
    }
    let key = canonical_name(name);
    if let Some(&code) = KNOWN_BY_NAME.get(key.as_str()) {
        return code;
    }
    if let Some(&code) = RUNTIME.read().by_name.get(&key) {
        return code;
    }
    let code = hash_code(&key);
    RUNTIME.write().learn(key, name, code);
    log::trace!("hashed commodity {:?} to {:#x}", name, code);
    code
}

/// Decode a commodity code to its name.
///
/// The inverse bit is stripped; placing an inverse commodity in a denominator is the generator's job.
/// Unknown codes render as `CXCOMM[n]`, which [`encode`] maps back to `n`.
pub fn decode(code: u32) -> String {
    let code = if code & INVERSE_BIT != 0 { !code } else { code };
    if code == 0 {
        return String::new();
    }
    if let Some(name) = KNOWN_BY_CODE.get(&code) {
        return (*name).to_string();
    }
    if let Some(name) = RUNTIME.read().by_code.get(&code) {
        return name.clone();
    }
    format!("CXCOMM[{}]", code)
}

/// Register `name` as commodity `code` for this process.
///
/// A later registration of the same name wins. Registering over a well-known name only affects decoding of `code`.
pub fn add_commodity(name: &str, code: u32) {
    let code = code & !INVERSE_BIT;
    let key = canonical_name(name);
    let mut runtime = RUNTIME.write();
    runtime.by_name.insert(key, code);
    runtime.by_code.insert(code, name.trim().to_string());
    log::info!("registered commodity {:?} as {}", name, code);
}

/// Forget every commodity registered with [`add_commodity`] or learned by hashing.
pub fn clear_commodities() {
    let mut runtime = RUNTIME.write();
    runtime.by_name.clear();
    runtime.by_code.clear();
    runtime.learned = 0;
}

fn unescape(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if matches!(next, '{' | '}' | '[' | ']' | '(' | ')') {
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_are_case_insensitive() {
        assert_eq!(encode("gold"), 2);
        assert_eq!(encode("Gold"), 2);
        assert_eq!(encode("cell"), encode("cells"));
        assert_eq!(decode(2), "gold");
        assert_eq!(decode(!2u32), "gold");
    }

    #[test]
    fn cxcomm_round_trips() {
        assert_eq!(encode("CXCOMM[12345]"), 12345);
        assert_eq!(decode(0x0000_3039), "CXCOMM[12345]");
    }

    #[test]
    fn hashed_names_decode_in_process() {
        let code = encode("unobtainium-ore");
        assert_ne!(code & HASH_BIT, 0);
        assert_eq!(code & INVERSE_BIT, 0);
        assert_eq!(encode("unobtainium-ore"), code);
        assert_eq!(decode(code), "unobtainium-ore");
    }

    #[test]
    fn learned_names_are_capped() {
        let mut runtime = RuntimeCommodities::default();
        for i in 0..LEARNED_LIMIT + 50 {
            let name = format!("ore-{}", i);
            runtime.learn(name.clone(), &name, hash_code(&name));
        }
        assert_eq!(runtime.by_name.len(), LEARNED_LIMIT);
        assert!(runtime.by_code.len() <= LEARNED_LIMIT);
        assert!(!runtime.by_name.contains_key("ore-1060"));

        // names past the cap still encode deterministically and survive a round trip by code
        let code = hash_code("ore-1060");
        assert_eq!(encode(&format!("CXCOMM[{}]", code)), code);
    }

    #[test]
    fn empty_name_is_no_commodity() {
        assert_eq!(encode(""), 0);
        assert_eq!(encode("  "), 0);
        assert_eq!(decode(0), "");
    }

    #[test]
    fn escaped_brackets_are_ignored() {
        assert_eq!(encode("rock\\(lunar\\)"), encode("rock(lunar)"));
    }

    #[test]
    fn runtime_registration() {
        add_commodity("bananas", 0x0100_0001);
        assert_eq!(encode("Bananas"), 0x0100_0001);
        assert_eq!(decode(0x0100_0001), "bananas");
    }
}
