//! Settings command handler

use serde::Serialize;

use crate::application::ports::DocumentStore;
use crate::application::SettingsStore;
use crate::domain::error::SettingsError;
use crate::domain::value::{IntKind, IntValue, Signedness};

use super::args::{Commands, SectionAction, ValueType};
use super::presenter::Presenter;

/// JSON shape of a dumped section
#[derive(Debug, Serialize)]
struct SectionListing<'a> {
    name: &'a str,
    entries: Vec<Entry>,
}

#[derive(Debug, Serialize)]
struct Entry {
    key: String,
    value: String,
}

/// Handle a settings subcommand against an open store
pub fn handle_settings_command<S: DocumentStore>(
    command: Commands,
    store: &mut SettingsStore<S>,
    presenter: &Presenter,
) -> Result<(), SettingsError> {
    match command {
        Commands::Get {
            section,
            key,
            kind,
            default,
        } => {
            check_section_name(&section)?;
            check_key(&key)?;
            handle_get(store, presenter, &section, &key, kind, default.as_deref())
        }
        Commands::Set {
            section,
            key,
            value,
            kind,
        } => {
            check_section_name(&section)?;
            check_key(&key)?;
            check_value(&value)?;
            handle_set(store, presenter, &section, &key, &value, kind)
        }
        Commands::Unset { section, key } => {
            store.remove_entry(&section, &key);
            presenter.success(&format!("Removed [{}] {}", section, key));
            Ok(())
        }
        Commands::Section { action } => handle_section(store, presenter, action),
        Commands::Sections { json } => handle_sections(store, presenter, json),
        Commands::Path => {
            presenter.output(&store.path().display().to_string());
            Ok(())
        }
    }
}

fn handle_get<S: DocumentStore>(
    store: &mut SettingsStore<S>,
    presenter: &Presenter,
    section: &str,
    key: &str,
    kind: ValueType,
    default: Option<&str>,
) -> Result<(), SettingsError> {
    let text = match kind {
        ValueType::Int(int_kind) => {
            let default = match default {
                Some(d) => int_kind.parse_strict(d)?,
                None => zero(int_kind),
            };
            store
                .get_integer(section, key, int_kind, default)
                .to_string()
        }
        ValueType::Hex => {
            let default = match default {
                Some(d) => parse_hex_strict(d)?,
                None => 0,
            };
            format!("{:#x}", store.get_hex64(section, key, default))
        }
        ValueType::Str => store
            .get_string(section, key, default)
            .ok_or_else(|| SettingsError::KeyNotFound {
                section: section.to_string(),
                key: key.to_string(),
            })?,
    };

    presenter.output(&text);
    Ok(())
}

fn handle_set<S: DocumentStore>(
    store: &mut SettingsStore<S>,
    presenter: &Presenter,
    section: &str,
    key: &str,
    value: &str,
    kind: ValueType,
) -> Result<(), SettingsError> {
    match kind {
        ValueType::Int(int_kind) => {
            let parsed = int_kind.parse_strict(value)?;
            store.set_integer(section, key, parsed);
        }
        ValueType::Hex => store.set_hex64(section, key, parse_hex_strict(value)?),
        ValueType::Str => {
            store.set_string(section, key, Some(value));
            if value.is_empty() {
                presenter.success(&format!("Removed [{}] {}", section, key));
                return Ok(());
            }
        }
    }

    presenter.success(&format!("[{}] {} = {}", section, key, value));
    Ok(())
}

fn handle_section<S: DocumentStore>(
    store: &mut SettingsStore<S>,
    presenter: &Presenter,
    action: SectionAction,
) -> Result<(), SettingsError> {
    match action {
        SectionAction::Dump { section, json } => {
            let entries = store
                .section_entries(&section)
                .ok_or_else(|| SettingsError::SectionNotFound(section.clone()))?;

            if json {
                let listing = SectionListing {
                    name: &section,
                    entries: entries
                        .into_iter()
                        .map(|(key, value)| Entry { key, value })
                        .collect(),
                };
                presenter.output(&serde_json::to_string_pretty(&listing)?);
            } else {
                let dump = store.dump_section(&section);
                // Records are NUL-separated; print them as plain lines
                for record in dump.split(|b| *b == 0).filter(|r| !r.is_empty()) {
                    let line = String::from_utf8_lossy(record);
                    let line = line.trim_end_matches('\n');
                    match line.split_once('=') {
                        Some((k, v)) => presenter.output(&presenter.format_entry(k, v)),
                        None => presenter.output(line),
                    }
                }
            }
            Ok(())
        }
        SectionAction::Clear { section } => {
            store.clear_section(&section);
            presenter.success(&format!("Cleared [{}]", section));
            Ok(())
        }
        SectionAction::Create { section } => {
            check_section_name(&section)?;
            store.create_section(&section);
            presenter.success(&format!("Created [{}]", section));
            Ok(())
        }
        SectionAction::Remove { section } => {
            store.remove_section(&section);
            presenter.success(&format!("Removed [{}]", section));
            Ok(())
        }
    }
}

fn handle_sections<S: DocumentStore>(
    store: &mut SettingsStore<S>,
    presenter: &Presenter,
    json: bool,
) -> Result<(), SettingsError> {
    let names = store.sections();
    if json {
        presenter.output(&serde_json::to_string(&names)?);
    } else {
        // The unnamed section prints as `[]`, matching the "" JSON entry
        for name in &names {
            presenter.section_header(name);
        }
    }
    Ok(())
}

fn invalid_name(name: &str, reason: &'static str) -> SettingsError {
    SettingsError::InvalidName {
        name: name.to_string(),
        reason,
    }
}

/// Reject names the INI file could not read back as written
fn check_section_name(name: &str) -> Result<(), SettingsError> {
    if name.contains(['\n', '\r']) {
        return Err(invalid_name(name, "contains a line break"));
    }
    if name.contains(']') {
        return Err(invalid_name(name, "contains ']'"));
    }
    if name.trim() != name {
        return Err(invalid_name(name, "has surrounding whitespace"));
    }
    Ok(())
}

fn check_key(key: &str) -> Result<(), SettingsError> {
    if key.trim().is_empty() {
        return Err(invalid_name(key, "key is empty"));
    }
    if key.contains(['\n', '\r']) {
        return Err(invalid_name(key, "contains a line break"));
    }
    if key.contains('=') {
        return Err(invalid_name(key, "contains '='"));
    }
    if key.starts_with([';', '#', '[']) {
        return Err(invalid_name(key, "starts with a comment or section marker"));
    }
    if key.trim() != key {
        return Err(invalid_name(key, "has surrounding whitespace"));
    }
    Ok(())
}

fn check_value(value: &str) -> Result<(), SettingsError> {
    if value.contains(['\n', '\r']) {
        return Err(SettingsError::InvalidValue {
            value: value.to_string(),
            kind: "single-line text".to_string(),
        });
    }
    Ok(())
}

fn zero(kind: IntKind) -> IntValue {
    match kind.signedness {
        Signedness::Signed => IntValue::Signed(0),
        Signedness::Unsigned => IntValue::Unsigned(0),
    }
}

/// Parse a hex argument, with or without `0x`
fn parse_hex_strict(text: &str) -> Result<u64, SettingsError> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    u64::from_str_radix(digits, 16).map_err(|_| SettingsError::InvalidValue {
        value: text.to_string(),
        kind: "hex".to_string(),
    })
}
