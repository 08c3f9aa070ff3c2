//! Settings file persistence

pub mod ini_codec;
pub mod ini_file;

pub use ini_file::IniFileStore;
