//! Application layer - Settings facade and port interfaces
//!
//! Contains the typed settings store and the trait definitions
//! for document persistence.

pub mod ports;
pub mod settings;

// Re-export use cases
pub use settings::{SettingsStore, DEFAULT_SETTINGS_PATH};
