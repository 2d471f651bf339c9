//! Error types for the Walkplan planner.

use thiserror::Error;

/// A shared error type for the planner crates.
///
/// Precondition violations (slot index, assignment value, date key) are
/// reported here rather than clamped, so collaborator bugs surface early.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlannerError {
    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON", "TOML"
        message: String,
    },

    /// Configuration rejected at the validation boundary
    #[error("Configuration error: {0}")]
    Config(String),

    /// No configuration has been stored yet (first run pending)
    #[error("Planner is not configured yet; run setup first")]
    NotConfigured,

    /// Slot index outside Morning/Afternoon/Evening
    #[error("Invalid slot index: {0} (expected 0..=2)")]
    InvalidSlot(usize),

    /// Assignment value outside the user cycle
    #[error("Invalid assignment value: {0} (expected 0..=3)")]
    InvalidAssignment(u64),

    /// Text that is not a `YYYY-MM-DD` calendar date
    #[error("Invalid date key '{0}' (expected YYYY-MM-DD)")]
    InvalidDateKey(String),

    /// A date computation left the representable calendar
    #[error("Date out of range: {0}")]
    DateOutOfRange(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PlannerError {
    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    pub fn is_not_configured(&self) -> bool {
        matches!(self, Self::NotConfigured)
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// True for the fail-fast precondition variants.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::InvalidSlot(_) | Self::InvalidAssignment(_) | Self::InvalidDateKey(_)
        )
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for PlannerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for PlannerError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for PlannerError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, PlannerError>`.
pub type Result<T> = std::result::Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_conversion_keeps_kind() {
        let err: PlannerError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope").into();
        assert!(err.is_io());
        assert!(err.to_string().contains("PermissionDenied"));
    }

    #[test]
    fn test_json_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PlannerError = parse_err.into();
        assert!(matches!(err, PlannerError::Serialization { ref format, .. } if format == "JSON"));
    }

    #[test]
    fn test_precondition_variants() {
        assert!(PlannerError::InvalidSlot(3).is_precondition());
        assert!(PlannerError::InvalidAssignment(4).is_precondition());
        assert!(PlannerError::InvalidDateKey("x".into()).is_precondition());
        assert!(!PlannerError::NotConfigured.is_precondition());
        assert!(PlannerError::NotConfigured.is_not_configured());
        assert!(PlannerError::config("empty").is_config());
    }
}
