//! Typed views over stored text

pub mod integer;
pub mod output;

pub use integer::{IntKind, IntValue, IntWidth, SettingInt, Signedness};
pub use output::{CopyStatus, DumpStatus};
