//! Document storage port interface

use std::path::Path;

use crate::domain::config::ConfigDocument;
use crate::domain::error::SettingsError;

/// Port for loading and persisting a configuration document
pub trait DocumentStore {
    /// Load the document stored at `path`.
    ///
    /// # Returns
    /// An empty document if nothing exists at `path` yet
    fn load(&self, path: &Path) -> Result<ConfigDocument, SettingsError>;

    /// Write the document to `path`, replacing any previous content.
    fn save(&self, path: &Path, document: &ConfigDocument) -> Result<(), SettingsError>;
}
