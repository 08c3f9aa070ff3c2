//! INI file store adapter

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::application::ports::DocumentStore;
use crate::domain::config::ConfigDocument;
use crate::domain::error::SettingsError;

use super::ini_codec;

/// Stores documents as INI text files
#[derive(Debug, Clone, Copy, Default)]
pub struct IniFileStore;

impl IniFileStore {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentStore for IniFileStore {
    fn load(&self, path: &Path) -> Result<ConfigDocument, SettingsError> {
        // Invalid UTF-8 must not make an existing file look unreadable
        match fs::read(path) {
            Ok(bytes) => Ok(ini_codec::parse(&String::from_utf8_lossy(&bytes))),
            // Missing file is a fresh start
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(ConfigDocument::new()),
            Err(source) => Err(SettingsError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn save(&self, path: &Path, document: &ConfigDocument) -> Result<(), SettingsError> {
        let write_err = |source: std::io::Error| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        };

        // Ensure parent directory exists
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        fs::write(path, ini_codec::serialize(document)).map_err(write_err)
    }
}
