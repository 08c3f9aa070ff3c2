//! Configuration document model

pub mod document;

pub use document::{ConfigDocument, Section};
