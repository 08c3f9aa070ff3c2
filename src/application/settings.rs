//! Typed settings store over a lazily loaded document
//!
//! [`SettingsStore`] owns one [`ConfigDocument`], the path it lives at and a
//! loaded flag. The document is read on the first accessor call, served
//! from memory afterwards, and written back on [`SettingsStore::save`],
//! [`SettingsStore::close`] or drop.
//!
//! Reading an absent key returns the caller's default. Decimal and string
//! getters also store that default so the file documents its own defaults;
//! the hex getter does not.
//!
//! A file that exists but cannot be read is never written over: the store
//! serves an empty document and refuses to save until it is re-targeted.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::application::ports::DocumentStore;
use crate::domain::config::ConfigDocument;
use crate::domain::error::SettingsError;
use crate::domain::value::integer::parse_u64_prefix;
use crate::domain::value::output::copy_bounded;
use crate::domain::value::{CopyStatus, DumpStatus, IntKind, IntValue, SettingInt};
use crate::infrastructure::IniFileStore;

/// Default settings file location
#[cfg(not(target_os = "espidf"))]
pub const DEFAULT_SETTINGS_PATH: &str = "./settings.ini";

/// Default settings file location
#[cfg(target_os = "espidf")]
pub const DEFAULT_SETTINGS_PATH: &str = "/data/settings.ini";

/// Typed read/write access to a sectioned key-value document
pub struct SettingsStore<S: DocumentStore = IniFileStore> {
    store: S,
    path: PathBuf,
    document: ConfigDocument,
    loaded: bool,
    load_failed: bool,
}

impl SettingsStore<IniFileStore> {
    /// Create a store for the default settings file
    pub fn new() -> Self {
        Self::with_path(DEFAULT_SETTINGS_PATH)
    }

    /// Create a store for an INI file at `path`
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self::with_store(IniFileStore::new(), path)
    }
}

impl Default for SettingsStore<IniFileStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DocumentStore> SettingsStore<S> {
    /// Create a store with a custom storage adapter
    pub fn with_store(store: S, path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            path: path.into(),
            document: ConfigDocument::new(),
            loaded: false,
            load_failed: false,
        }
    }

    /// Active file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The document, loading it on first use.
    ///
    /// A file that cannot be read yields an empty document and blocks saving.
    fn document(&mut self) -> &mut ConfigDocument {
        if !self.loaded {
            self.document = match self.store.load(&self.path) {
                Ok(doc) => {
                    debug!(path = %self.path.display(), sections = doc.sections().len(), "settings loaded");
                    self.load_failed = false;
                    doc
                }
                Err(e) => {
                    warn!("{e}; starting with empty settings, saving disabled");
                    self.load_failed = true;
                    ConfigDocument::new()
                }
            };
            self.loaded = true;
        }
        &mut self.document
    }

    // ── Integers ────────────────────────────────────────────────────────────

    /// Read an integer through the 64-bit core.
    ///
    /// Absent keys store and return `default`. Stored text is parsed
    /// leniently in base 10; a result outside `kind` returns `default`
    /// and leaves the stored text as is.
    pub fn get_integer(
        &mut self,
        section: &str,
        key: &str,
        kind: IntKind,
        default: IntValue,
    ) -> IntValue {
        let doc = self.document();
        match doc.get(section, key) {
            None => {
                doc.set(section, key, &default.to_string());
                default
            }
            Some(text) => {
                let value = kind.parse_lenient(text);
                if kind.contains(value) {
                    value
                } else {
                    debug!(section, key, %kind, stored = text, "stored value out of range, using default");
                    default
                }
            }
        }
    }

    /// Store an integer as decimal text
    pub fn set_integer(&mut self, section: &str, key: &str, value: IntValue) {
        self.document().set(section, key, &value.to_string());
    }

    /// Typed read for any [`SettingInt`]
    pub fn get<T: SettingInt>(&mut self, section: &str, key: &str, default: T) -> T {
        let value = self.get_integer(section, key, T::KIND, default.into_value());
        T::from_value(value).unwrap_or(default)
    }

    /// Typed write for any [`SettingInt`]
    pub fn set<T: SettingInt>(&mut self, section: &str, key: &str, value: T) {
        self.set_integer(section, key, value.into_value());
    }

    pub fn get_s8(&mut self, section: &str, key: &str, default: i8) -> i8 {
        self.get(section, key, default)
    }

    pub fn get_s16(&mut self, section: &str, key: &str, default: i16) -> i16 {
        self.get(section, key, default)
    }

    pub fn get_s32(&mut self, section: &str, key: &str, default: i32) -> i32 {
        self.get(section, key, default)
    }

    pub fn get_s64(&mut self, section: &str, key: &str, default: i64) -> i64 {
        self.get(section, key, default)
    }

    pub fn get_u8(&mut self, section: &str, key: &str, default: u8) -> u8 {
        self.get(section, key, default)
    }

    pub fn get_u16(&mut self, section: &str, key: &str, default: u16) -> u16 {
        self.get(section, key, default)
    }

    pub fn get_u32(&mut self, section: &str, key: &str, default: u32) -> u32 {
        self.get(section, key, default)
    }

    pub fn get_u64(&mut self, section: &str, key: &str, default: u64) -> u64 {
        self.get(section, key, default)
    }

    pub fn set_s8(&mut self, section: &str, key: &str, value: i8) {
        self.set(section, key, value);
    }

    pub fn set_s16(&mut self, section: &str, key: &str, value: i16) {
        self.set(section, key, value);
    }

    pub fn set_s32(&mut self, section: &str, key: &str, value: i32) {
        self.set(section, key, value);
    }

    pub fn set_s64(&mut self, section: &str, key: &str, value: i64) {
        self.set(section, key, value);
    }

    pub fn set_u8(&mut self, section: &str, key: &str, value: u8) {
        self.set(section, key, value);
    }

    pub fn set_u16(&mut self, section: &str, key: &str, value: u16) {
        self.set(section, key, value);
    }

    pub fn set_u32(&mut self, section: &str, key: &str, value: u32) {
        self.set(section, key, value);
    }

    pub fn set_u64(&mut self, section: &str, key: &str, value: u64) {
        self.set(section, key, value);
    }

    // ── Hex ─────────────────────────────────────────────────────────────────

    /// Read a base-16 value. An absent key returns `default` without
    /// storing it.
    pub fn get_hex64(&mut self, section: &str, key: &str, default: u64) -> u64 {
        self.document()
            .get(section, key)
            .map(|text| parse_u64_prefix(text, 16))
            .unwrap_or(default)
    }

    /// Store a value as lowercase hex without prefix
    pub fn set_hex64(&mut self, section: &str, key: &str, value: u64) {
        self.document().set(section, key, &format!("{:x}", value));
    }

    // ── Strings ─────────────────────────────────────────────────────────────

    /// Read a string. An absent key stores and returns `default` when one
    /// is given.
    pub fn get_string(&mut self, section: &str, key: &str, default: Option<&str>) -> Option<String> {
        let doc = self.document();
        if let Some(value) = doc.get(section, key) {
            return Some(value.to_string());
        }
        let default = default?;
        doc.set(section, key, default);
        Some(default.to_string())
    }

    /// [`get_string`](Self::get_string) into a fixed buffer.
    ///
    /// Never writes past `buf`; a NUL follows the text when there is room.
    pub fn get_string_into(
        &mut self,
        section: &str,
        key: &str,
        default: Option<&str>,
        buf: &mut [u8],
    ) -> CopyStatus {
        match self.get_string(section, key, default) {
            Some(value) => copy_bounded(value.as_bytes(), buf),
            None => CopyStatus::Missing,
        }
    }

    /// Store a string. `None` or an empty string deletes the key instead.
    pub fn set_string(&mut self, section: &str, key: &str, value: Option<&str>) {
        match value {
            Some(v) if !v.is_empty() => self.document().set(section, key, v),
            _ => {
                self.document().remove_key(section, key);
            }
        }
    }

    // ── Raw access and enumeration ──────────────────────────────────────────

    /// Whether `key` exists in `section`
    pub fn contains(&mut self, section: &str, key: &str) -> bool {
        self.document().get(section, key).is_some()
    }

    /// Stored text without conversion or write-back
    pub fn raw_value(&mut self, section: &str, key: &str) -> Option<String> {
        self.document().get(section, key).map(str::to_string)
    }

    /// Section names in document order
    pub fn sections(&mut self) -> Vec<String> {
        self.document()
            .sections()
            .iter()
            .map(|s| s.name().to_string())
            .collect()
    }

    /// Entries of a section, `None` when the section does not exist
    pub fn section_entries(&mut self, section: &str) -> Option<Vec<(String, String)>> {
        self.document()
            .section(section)
            .map(|s| s.entries().to_vec())
    }

    /// Serialize a section as NUL-separated `key=value\n` records.
    ///
    /// The length of the result counts the separators. A missing or
    /// empty section gives an empty buffer.
    pub fn dump_section(&mut self, section: &str) -> Vec<u8> {
        let mut out = Vec::new();
        if let Some(s) = self.document().section(section) {
            for (key, value) in s.entries() {
                out.extend_from_slice(format!("{}={}\n", key, value).as_bytes());
                out.push(0);
            }
        }
        out
    }

    /// [`dump_section`](Self::dump_section) into a fixed buffer.
    ///
    /// Stops before the first record that does not fit, so the buffer
    /// only ever holds whole records.
    pub fn dump_section_into(&mut self, section: &str, buf: &mut [u8]) -> DumpStatus {
        let mut written = 0;
        let Some(s) = self.document().section(section) else {
            return DumpStatus::Complete(0);
        };
        for (key, value) in s.entries() {
            let record = format!("{}={}\n", key, value);
            let end = written + record.len();
            if end + 1 > buf.len() {
                return DumpStatus::Truncated { written };
            }
            buf[written..end].copy_from_slice(record.as_bytes());
            buf[end] = 0;
            written = end + 1;
        }
        DumpStatus::Complete(written)
    }

    // ── Structure ───────────────────────────────────────────────────────────

    /// Remove every key in `section`, keeping its header
    pub fn clear_section(&mut self, section: &str) {
        if section.is_empty() {
            return;
        }
        if let Some(s) = self.document().section_mut(section) {
            s.clear();
        }
    }

    /// Delete one key
    pub fn remove_entry(&mut self, section: &str, key: &str) {
        if section.is_empty() {
            return;
        }
        self.document().remove_key(section, key);
    }

    /// Make sure a section header exists
    pub fn create_section(&mut self, section: &str) {
        if section.is_empty() {
            return;
        }
        self.document().ensure_section(section);
    }

    /// Delete a section and all its keys
    pub fn remove_section(&mut self, section: &str) {
        if section.is_empty() {
            return;
        }
        self.document().remove_section(section);
    }

    // ── Lifecycle ───────────────────────────────────────────────────────────

    /// Re-target or reset the store.
    ///
    /// A loaded document is flushed first. With a non-empty path the store
    /// switches to it and reloads on next access. Without one, the
    /// in-memory document is emptied and the path kept.
    ///
    /// The switch or reset happens even when the flush fails; the flush
    /// error is returned afterwards.
    pub fn init(&mut self, path: Option<&Path>) -> Result<(), SettingsError> {
        let flushed = self.save();

        match path {
            Some(p) if !p.as_os_str().is_empty() => {
                info!(from = %self.path.display(), to = %p.display(), "switching settings file");
                self.path = p.to_path_buf();
                self.document.reset();
                self.loaded = false;
                self.load_failed = false;
            }
            _ => {
                info!(path = %self.path.display(), "resetting settings");
                self.document.reset();
            }
        }
        flushed
    }

    /// Write the document to the active path if it has been loaded.
    /// The store stays loaded.
    ///
    /// Fails without writing when the file at the path could not be read.
    pub fn save(&mut self) -> Result<(), SettingsError> {
        if !self.loaded {
            return Ok(());
        }
        if self.load_failed {
            return Err(SettingsError::Unreadable(self.path.clone()));
        }
        self.store.save(&self.path, &self.document)?;
        debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }

    /// Save and unload
    pub fn close(mut self) -> Result<(), SettingsError> {
        let result = self.save();
        self.loaded = false;
        result
    }
}

impl<S: DocumentStore> Drop for SettingsStore<S> {
    fn drop(&mut self) {
        // Best-effort flush
        if let Err(e) = self.save() {
            warn!("{e}");
        }
        self.loaded = false;
    }
}
