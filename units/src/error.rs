//! Error types for the fallible entry points.
//!
//! The parser itself never fails on malformed text: it returns the error unit, which callers test with
//! [`PreciseUnit::is_error`](units_core::PreciseUnit::is_error). [`UnitsError`] is only produced by the `try_`
//! variants and by configuration loading.

/// Result type for fallible unit operations.
pub type Result<T> = std::result::Result<T, UnitsError>;

/// Error type for fallible unit operations.
#[derive(Debug, thiserror::Error)]
pub enum UnitsError {
    #[error("Numeric overflow: {0}")]
    NumericOverflow(String),

    #[error("Invalid unit: {0}")]
    InvalidUnit(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for UnitsError {
    fn from(e: toml::de::Error) -> Self {
        UnitsError::ConfigurationError(format!("Failed to parse config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_offending_input() {
        let e = UnitsError::InvalidUnit("blarg".to_string());
        assert_eq!(e.to_string(), "Invalid unit: blarg");
        let e = UnitsError::NumericOverflow("1e999".to_string());
        assert!(e.to_string().contains("1e999"));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let e: UnitsError = io.into();
        assert!(matches!(e, UnitsError::Io(_)));
    }
}
