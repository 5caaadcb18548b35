//! Error taxonomy.
//!
//! The engine has a single error class: configuration errors. They are
//! always fatal to the call that detects them, never retried internally,
//! and surfaced to the caller to fix its input. Given well-formed input,
//! generation always succeeds — a scenario with zero people produces a
//! valid (maximally deficient) solution rather than an error.

use thiserror::Error;

/// A fatal configuration error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The requested shift model id is not one of the known models.
    #[error("unknown shift model '{0}'")]
    UnknownModel(String),

    /// An area (or assignment) references a shift code absent from the
    /// shift library.
    #[error("area '{area}' references unknown shift code '{code}'")]
    UnknownShiftCode {
        /// Area whose minimums name the code.
        area: String,
        /// The unresolved shift code.
        code: String,
    },

    /// A clock time string is not valid `HH:MM`.
    #[error("invalid clock time '{0}' (expected HH:MM)")]
    InvalidClockTime(String),

    /// The scenario violates a structural invariant (duplicate IDs, ...).
    #[error("malformed scenario: {0}")]
    MalformedScenario(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = ConfigError::UnknownModel("3x12".into());
        assert_eq!(e.to_string(), "unknown shift model '3x12'");

        let e = ConfigError::UnknownShiftCode {
            area: "icu".into(),
            code: "X".into(),
        };
        assert_eq!(
            e.to_string(),
            "area 'icu' references unknown shift code 'X'"
        );

        let e = ConfigError::InvalidClockTime("25:99".into());
        assert!(e.to_string().contains("25:99"));
    }
}
