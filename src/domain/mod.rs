//! Domain layer - Core data model
//!
//! Contains the configuration document, integer value model,
//! and domain errors. This layer has no dependencies on the filesystem.

pub mod config;
pub mod error;
pub mod value;

// Re-export common types
pub use config::{ConfigDocument, Section};
pub use error::SettingsError;
pub use value::{CopyStatus, DumpStatus, IntKind, IntValue, IntWidth, SettingInt, Signedness};
