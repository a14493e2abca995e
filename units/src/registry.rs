//! Runtime registry of user-defined units.
//!
//! The recognition table is static; this registry is the mutable overlay on top of it. The parser consults it before
//! the static table and the generator consults it before the static reverse names, so a registered name shadows a
//! built-in one in both directions.
//!
//! Two kinds of entries are kept:
//!
//! - **units**, registered with a ready [`PreciseUnit`] via [`add_custom_unit`];
//! - **definitions**, registered as an expression string via [`add_unit_definition`] and parsed the first time
//!   they are looked up.
//!
//! All state sits behind a single `parking_lot::RwLock`. Writers win in arrival order.

use crate::flags::MatchFlags;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use units_core::{unit_cast, PreciseUnit, Unit};

#[derive(Debug, Clone)]
enum Definition {
    Pending(String),
    Resolving,
    Resolved(PreciseUnit),
}

#[derive(Debug, Default)]
struct Registry {
    inputs: HashMap<String, PreciseUnit>,
    outputs: HashMap<Unit, String>,
    definitions: HashMap<String, Definition>,
    disabled: bool,
}

static REGISTRY: Lazy<RwLock<Registry>> = Lazy::new(|| RwLock::new(Registry::default()));

/// Register `name` as `unit` for both parsing and generation.
///
/// # Arguments
/// * `name` - The string the parser should accept and the generator should print
/// * `unit` - The unit the name stands for
pub fn add_custom_unit(name: &str, unit: PreciseUnit) {
    let name = name.trim();
    if name.is_empty() {
        log::warn!("ignoring custom unit with an empty name");
        return;
    }
    let mut registry = REGISTRY.write();
    registry.inputs.insert(name.to_string(), unit);
    registry.outputs.insert(unit_cast(unit), name.to_string());
    registry.definitions.remove(name);
    log::info!("registered custom unit {:?}", name);
}

/// Register `name` for parsing only; the generator keeps printing `unit` the usual way.
pub fn add_custom_input_unit(name: &str, unit: PreciseUnit) {
    let name = name.trim();
    if name.is_empty() {
        return;
    }
    let mut registry = REGISTRY.write();
    registry.inputs.insert(name.to_string(), unit);
    registry.definitions.remove(name);
}

/// Register a named definition, parsed lazily on first lookup.
///
/// The expression is parsed with default flags. A definition that fails to parse, or that refers back to itself,
/// resolves to nothing.
///
/// # Arguments
/// * `name` - The name to register
/// * `expression` - Any string [`parse`](crate::parse) accepts, e.g. `"3.5 kg"` or `"ft*lb/s"`
pub fn add_unit_definition(name: &str, expression: &str) {
    let name = name.trim();
    if name.is_empty() {
        return;
    }
    let mut registry = REGISTRY.write();
    registry.inputs.remove(name);
    registry
        .definitions
        .insert(name.to_string(), Definition::Pending(expression.to_string()));
    log::info!("registered unit definition {:?} = {:?}", name, expression);
}

/// Remove every entry registered under `name`.
///
/// Returns `true` if something was removed.
pub fn remove_custom_unit(name: &str) -> bool {
    let name = name.trim();
    let mut registry = REGISTRY.write();
    let mut removed = registry.definitions.remove(name).is_some();
    if let Some(unit) = registry.inputs.remove(name) {
        let key = unit_cast(unit);
        if registry.outputs.get(&key).is_some_and(|n| n == name) {
            registry.outputs.remove(&key);
        }
        removed = true;
    }
    removed
}

/// Forget every registered unit and definition.
pub fn clear_custom_units() {
    let mut registry = REGISTRY.write();
    registry.inputs.clear();
    registry.outputs.clear();
    registry.definitions.clear();
}

/// Turn the registry on or off without clearing it.
///
/// While disabled, lookups behave as if nothing had been registered.
pub fn set_custom_units_enabled(enabled: bool) {
    REGISTRY.write().disabled = !enabled;
}

/// `true` if anything at all is registered and the registry is enabled.
pub(crate) fn is_active() -> bool {
    let registry = REGISTRY.read();
    !registry.disabled && !(registry.inputs.is_empty() && registry.definitions.is_empty())
}

/// Look up a registered name.
///
/// Definitions are parsed here on first use and the result is cached.
pub fn custom_unit_lookup(name: &str) -> Option<PreciseUnit> {
    let expression = {
        let registry = REGISTRY.read();
        if registry.disabled {
            return None;
        }
        if let Some(unit) = registry.inputs.get(name) {
            return Some(*unit);
        }
        match registry.definitions.get(name)? {
            Definition::Resolved(unit) => return Some(*unit),
            Definition::Resolving => return None,
            Definition::Pending(expression) => expression.clone(),
        }
    };

    // mark before parsing so a self-referencing definition terminates
    REGISTRY
        .write()
        .definitions
        .insert(name.to_string(), Definition::Resolving);

    let unit = crate::parse::parse(&expression, MatchFlags::DEFAULT);
    let mut registry = REGISTRY.write();
    if unit.is_error() {
        log::warn!("unit definition {:?} = {:?} does not parse", name, expression);
        registry.definitions.remove(name);
        return None;
    }
    registry
        .definitions
        .insert(name.to_string(), Definition::Resolved(unit));
    Some(unit)
}

/// Registered output name of `unit`, if any.
pub fn custom_unit_name(unit: Unit) -> Option<String> {
    let registry = REGISTRY.read();
    if registry.disabled {
        return None;
    }
    registry.outputs.get(&unit).cloned()
}

#[cfg(test)]
pub(crate) static TEST_LOCK: parking_lot::Mutex<()> = parking_lot::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;
    use units_core::units::si::{KG, M, S};

    #[test]
    fn add_lookup_and_remove() {
        let _guard = TEST_LOCK.lock();
        clear_custom_units();
        let widget = KG.scaled(3.5);
        add_custom_unit("widget", widget);
        assert_eq!(custom_unit_lookup("widget"), Some(widget));
        assert_eq!(custom_unit_name(unit_cast(widget)).as_deref(), Some("widget"));
        assert!(remove_custom_unit("widget"));
        assert!(custom_unit_lookup("widget").is_none());
        assert!(custom_unit_name(unit_cast(widget)).is_none());
        assert!(!remove_custom_unit("widget"));
    }

    #[test]
    fn input_only_units_have_no_output_name() {
        let _guard = TEST_LOCK.lock();
        clear_custom_units();
        add_custom_input_unit("stride", M.scaled(0.8));
        assert_eq!(custom_unit_lookup("stride"), Some(M.scaled(0.8)));
        assert!(custom_unit_name(unit_cast(M.scaled(0.8))).is_none());
        clear_custom_units();
    }

    #[test]
    fn definitions_resolve_lazily() {
        let _guard = TEST_LOCK.lock();
        clear_custom_units();
        add_unit_definition("gait", "m/s");
        assert_eq!(custom_unit_lookup("gait"), Some(M.divide(S)));
        // second call hits the cache
        assert_eq!(custom_unit_lookup("gait"), Some(M.divide(S)));
        add_unit_definition("bogus", "345 blarg");
        assert!(custom_unit_lookup("bogus").is_none());
        clear_custom_units();
    }

    #[test]
    fn self_reference_terminates() {
        let _guard = TEST_LOCK.lock();
        clear_custom_units();
        add_unit_definition("qzqz", "qzqz*m");
        assert!(custom_unit_lookup("qzqz").is_none());
        clear_custom_units();
    }

    #[test]
    fn disabling_hides_entries() {
        let _guard = TEST_LOCK.lock();
        clear_custom_units();
        add_custom_unit("widget", KG.scaled(3.5));
        set_custom_units_enabled(false);
        assert!(custom_unit_lookup("widget").is_none());
        assert!(!is_active());
        set_custom_units_enabled(true);
        assert!(custom_unit_lookup("widget").is_some());
        clear_custom_units();
    }
}
