//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod document_store;

// Re-export common types
pub use document_store::DocumentStore;
