//! settings-ini - Typed settings store backed by an INI file
//!
//! This crate provides typed read/write access to a sectioned key-value
//! configuration file. Integers of every width, hex values and strings are
//! stored as text and converted at the accessor boundary, with default
//! fallback on read.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Configuration document, integer value model, and errors
//! - **Application**: The `SettingsStore` facade and the `DocumentStore` port
//! - **Infrastructure**: INI codec and file-backed adapter
//! - **CLI**: Command-line interface, argument parsing, and output
//!
//! # Example
//!
//! ```no_run
//! use settings_ini::SettingsStore;
//!
//! let mut settings = SettingsStore::with_path("settings.ini");
//! let port = settings.get_u16("net", "port", 8080);
//! settings.set_hex64("net", "mask", 0xffff_ff00);
//! settings.close().ok();
//! # let _ = port;
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

pub use application::{SettingsStore, DEFAULT_SETTINGS_PATH};
pub use domain::{CopyStatus, DumpStatus, IntKind, IntValue, SettingsError};
