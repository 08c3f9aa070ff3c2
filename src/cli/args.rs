//! CLI argument definitions using Clap

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};

use crate::application::DEFAULT_SETTINGS_PATH;
use crate::domain::error::SettingsError;
use crate::domain::value::IntKind;

/// settings-ini - typed access to an INI settings file
#[derive(Parser, Debug)]
#[command(name = "settings-ini")]
#[command(version)]
#[command(about = "Read and write typed values in an INI settings file")]
#[command(long_about = None)]
pub struct Cli {
    /// Settings file to operate on
    #[arg(
        short = 'f',
        long,
        value_name = "PATH",
        env = "SETTINGS_INI_FILE",
        default_value = DEFAULT_SETTINGS_PATH
    )]
    pub file: PathBuf,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read a value (absent decimal and string keys store the default)
    Get {
        /// Section name
        section: String,
        /// Key name
        key: String,
        /// Value type
        #[arg(short = 't', long = "type", value_name = "TYPE", default_value = "str")]
        kind: ValueType,
        /// Value returned (and stored) when the key is absent
        #[arg(short = 'd', long, value_name = "VALUE", allow_hyphen_values = true)]
        default: Option<String>,
    },
    /// Write a value
    Set {
        /// Section name
        section: String,
        /// Key name
        key: String,
        /// New value (an empty string removes a string key)
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Value type
        #[arg(short = 't', long = "type", value_name = "TYPE", default_value = "str")]
        kind: ValueType,
    },
    /// Remove a key
    Unset {
        /// Section name
        section: String,
        /// Key name
        key: String,
    },
    /// Manage a whole section
    Section {
        #[command(subcommand)]
        action: SectionAction,
    },
    /// List section names
    Sections {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show settings file path
    Path,
}

/// Section action subcommands
#[derive(Subcommand, Debug)]
pub enum SectionAction {
    /// Print every key=value pair of a section
    Dump {
        /// Section name
        section: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove all keys, keeping the section header
    Clear {
        /// Section name
        section: String,
    },
    /// Create an empty section
    Create {
        /// Section name
        section: String,
    },
    /// Remove a section and all its keys
    Remove {
        /// Section name
        section: String,
    },
}

/// Value type selected with `--type`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Int(IntKind),
    Hex,
    Str,
}

impl FromStr for ValueType {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hex" | "x64" => Ok(Self::Hex),
            "str" | "string" => Ok(Self::Str),
            other => other.parse().map(Self::Int),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(kind) => write!(f, "{}", kind),
            Self::Hex => write!(f, "hex"),
            Self::Str => write!(f, "str"),
        }
    }
}
