//! Domain error types

use std::path::PathBuf;

use thiserror::Error;

/// Error from the settings store or its CLI
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write settings file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not saving over unreadable settings file {0}")]
    Unreadable(PathBuf),

    #[error("Invalid value \"{value}\" for type {kind}")]
    InvalidValue { value: String, kind: String },

    #[error("Unknown value type: \"{0}\". Valid types are: s8, s16, s32, s64, u8, u16, u32, u64, hex, str")]
    UnknownKind(String),

    #[error("Invalid name \"{name}\": {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("Section not found: [{0}]")]
    SectionNotFound(String),

    #[error("Key not found: [{section}] {key}")]
    KeyNotFound { section: String, key: String },

    #[error("Failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),
}

impl SettingsError {
    /// Whether the error comes from bad user input rather than the environment
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::InvalidValue { .. } | Self::UnknownKind(_) | Self::InvalidName { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_errors_are_classified() {
        let invalid = SettingsError::InvalidValue {
            value: "abc".to_string(),
            kind: "u8".to_string(),
        };
        assert!(invalid.is_usage());
        assert!(SettingsError::UnknownKind("f32".to_string()).is_usage());
        assert!(SettingsError::InvalidName {
            name: "a=b".to_string(),
            reason: "contains '='",
        }
        .is_usage());
        assert!(!SettingsError::Unreadable(PathBuf::from("x.ini")).is_usage());
        assert!(!SettingsError::SectionNotFound("a".to_string()).is_usage());
    }

    #[test]
    fn messages_name_the_input() {
        let err = SettingsError::InvalidValue {
            value: "300".to_string(),
            kind: "s8".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value \"300\" for type s8");
    }
}
