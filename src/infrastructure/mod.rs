//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! backed by the filesystem.

pub mod config;

// Re-export adapters
pub use config::IniFileStore;
