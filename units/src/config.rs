//! Startup configuration file support.
//!
//! A `units.toml` file can set the default parser options and register custom units and commodities before the
//! first string is parsed:
//!
//! ```toml
//! [parse]
//! case_insensitive = false
//! single_slash = true
//!
//! [[custom_units]]
//! name = "widget"
//! definition = "3.5 kg"
//!
//! [[commodities]]
//! name = "bananas"
//! code = 1234
//! ```

use crate::error::{Result, UnitsError};
use crate::flags::MatchFlags;
use crate::{commodity, parse, registry};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Contents of a units configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitsConfig {
    pub parse: ParseSettings,
    pub custom_units: Vec<CustomUnitEntry>,
    pub commodities: Vec<CommodityEntry>,
}

/// Default parser options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseSettings {
    pub case_insensitive: bool,
    pub single_slash: bool,
    pub no_per_operators: bool,
    pub no_locality_modifiers: bool,
    pub no_commodities: bool,
    pub no_of_operator: bool,
    pub no_recursion: bool,
}

/// A named unit and the expression that defines it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomUnitEntry {
    pub name: String,
    pub definition: String,
    /// Also print matching units with this name.
    #[serde(default = "default_output")]
    pub output: bool,
}

fn default_output() -> bool {
    true
}

/// A commodity name with a fixed code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommodityEntry {
    pub name: String,
    pub code: u32,
}

impl UnitsConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(UnitsConfig)` if successful
    /// * `Err(UnitsError::ConfigurationError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| UnitsError::ConfigurationError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: UnitsConfig = toml::from_str(content)
            .map_err(|e| UnitsError::ConfigurationError(format!("Failed to parse config file: {}", e)))?;
        Ok(config)
    }

    /// Load configuration from the first `units.toml` found in the current directory, `config/` or the parent
    /// directory.
    pub fn from_default_location() -> Result<Self> {
        let search_paths = [
            PathBuf::from("units.toml"),
            PathBuf::from("config/units.toml"),
            PathBuf::from("../units.toml"),
        ];
        for path in search_paths {
            if path.exists() {
                log::info!("loading units configuration from {}", path.display());
                return Self::from_file(&path);
            }
        }
        Err(UnitsError::ConfigurationError(
            "No units.toml found in standard locations".to_string(),
        ))
    }

    /// Parser flags for the `[parse]` settings.
    pub fn match_flags(&self) -> MatchFlags {
        let p = &self.parse;
        [
            (p.case_insensitive, MatchFlags::CASE_INSENSITIVE),
            (p.single_slash, MatchFlags::SINGLE_SLASH),
            (p.no_per_operators, MatchFlags::NO_PER_OPERATORS),
            (p.no_locality_modifiers, MatchFlags::NO_LOCALITY_MODIFIERS),
            (p.no_commodities, MatchFlags::NO_COMMODITIES),
            (p.no_of_operator, MatchFlags::NO_OF_OPERATOR),
            (p.no_recursion, MatchFlags::NO_RECURSION),
        ]
        .into_iter()
        .filter(|(set, _)| *set)
        .fold(MatchFlags::DEFAULT, |flags, (_, flag)| flags | flag)
    }

    /// Register the configured commodities and custom units.
    ///
    /// Commodities go first so unit definitions may refer to them. Every definition is parsed with
    /// [`UnitsConfig::match_flags`]; the first one that does not parse aborts the rest.
    ///
    /// # Errors
    /// [`UnitsError::ConfigurationError`] naming the entry whose definition is empty or does not parse.
    pub fn apply(&self) -> Result<()> {
        for entry in &self.commodities {
            commodity::add_commodity(&entry.name, entry.code);
        }
        let flags = self.match_flags();
        for entry in &self.custom_units {
            if entry.name.trim().is_empty() {
                return Err(UnitsError::ConfigurationError(
                    "custom unit entry without a name".to_string(),
                ));
            }
            let unit = parse::try_parse(&entry.definition, flags).map_err(|e| {
                UnitsError::ConfigurationError(format!("custom unit {:?}: {}", entry.name, e))
            })?;
            if entry.output {
                registry::add_custom_unit(&entry.name, unit);
            } else {
                registry::add_custom_input_unit(&entry.name, unit);
            }
        }
        log::info!(
            "applied units configuration: {} commodities, {} custom units",
            self.commodities.len(),
            self.custom_units.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use units_core::si::KG;

    #[test]
    fn empty_config_is_default() {
        let config = UnitsConfig::from_toml_str("").unwrap();
        assert_eq!(config, UnitsConfig::default());
        assert_eq!(config.match_flags(), MatchFlags::DEFAULT);
    }

    #[test]
    fn parse_section() {
        let config = UnitsConfig::from_toml_str(
            r#"
[parse]
case_insensitive = true
single_slash = true
"#,
        )
        .unwrap();
        let flags = config.match_flags();
        assert!(flags.contains(MatchFlags::CASE_INSENSITIVE));
        assert!(flags.contains(MatchFlags::SINGLE_SLASH));
        assert!(!flags.contains(MatchFlags::NO_PER_OPERATORS));
    }

    #[test]
    fn entries() {
        let config = UnitsConfig::from_toml_str(
            r#"
[[custom_units]]
name = "widget"
definition = "3.5 kg"

[[custom_units]]
name = "stride"
definition = "0.8 m"
output = false

[[commodities]]
name = "bananas"
code = 1234
"#,
        )
        .unwrap();
        assert_eq!(config.custom_units.len(), 2);
        assert!(config.custom_units[0].output);
        assert!(!config.custom_units[1].output);
        assert_eq!(config.commodities[0].code, 1234);
    }

    #[test]
    fn malformed_toml_is_a_configuration_error() {
        let err = UnitsConfig::from_toml_str("[parse\ncase_insensitive = 1").unwrap_err();
        assert!(matches!(err, UnitsError::ConfigurationError(_)));
    }

    #[test]
    fn apply_registers_units() {
        let _guard = registry::TEST_LOCK.lock();
        registry::clear_custom_units();
        let config = UnitsConfig::from_toml_str(
            r#"
[[custom_units]]
name = "widget"
definition = "3.5 kg"
"#,
        )
        .unwrap();
        config.apply().unwrap();
        assert_eq!(registry::custom_unit_lookup("widget"), Some(KG.scaled(3.5)));
        registry::clear_custom_units();
    }

    #[test]
    fn bad_definitions_are_rejected() {
        let _guard = registry::TEST_LOCK.lock();
        registry::clear_custom_units();
        let config = UnitsConfig::from_toml_str(
            r#"
[[custom_units]]
name = "gizmo"
definition = "zqxw"
"#,
        )
        .unwrap();
        let err = config.apply().unwrap_err();
        assert!(err.to_string().contains("gizmo"));
        assert!(registry::custom_unit_lookup("gizmo").is_none());
    }
}
