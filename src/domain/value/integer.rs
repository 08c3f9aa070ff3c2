//! Integer widths and the 64-bit parse/format core
//!
//! Every integer setting is stored as text and parsed through a single
//! 64-bit routine, signed or unsigned. Narrower widths are range-checked
//! projections of that core: a stored value that does not fit the
//! requested width is reported as out of range rather than truncated.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::SettingsError;

/// Bit width of an integer setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
}

impl IntWidth {
    pub fn bits(self) -> u32 {
        match self {
            Self::W8 => 8,
            Self::W16 => 16,
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signedness {
    Signed,
    Unsigned,
}

/// Width plus signedness, e.g. `s8` or `u64`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntKind {
    pub width: IntWidth,
    pub signedness: Signedness,
}

impl IntKind {
    pub const fn new(width: IntWidth, signedness: Signedness) -> Self {
        Self { width, signedness }
    }

    /// Inclusive value range of this kind
    fn bounds(self) -> (i128, i128) {
        let bits = self.width.bits();
        match self.signedness {
            Signedness::Signed => (-(1i128 << (bits - 1)), (1i128 << (bits - 1)) - 1),
            Signedness::Unsigned => (0, (1i128 << bits) - 1),
        }
    }

    /// Check whether a core value fits this kind
    pub fn contains(self, value: IntValue) -> bool {
        let (min, max) = self.bounds();
        let v = value.as_i128();
        v >= min && v <= max
    }

    /// Parse stored text with C `strtoll`/`strtoull` semantics.
    ///
    /// The result is a full 64-bit value; callers range-check it with
    /// [`IntKind::contains`].
    pub fn parse_lenient(self, text: &str) -> IntValue {
        match self.signedness {
            Signedness::Signed => IntValue::Signed(parse_i64_prefix(text, 10)),
            Signedness::Unsigned => IntValue::Unsigned(parse_u64_prefix(text, 10)),
        }
    }

    /// Strictly parse user input (CLI arguments) for this kind
    pub fn parse_strict(self, text: &str) -> Result<IntValue, SettingsError> {
        let invalid = || SettingsError::InvalidValue {
            value: text.to_string(),
            kind: self.to_string(),
        };

        let value = match self.signedness {
            Signedness::Signed => IntValue::Signed(text.trim().parse().map_err(|_| invalid())?),
            Signedness::Unsigned => {
                IntValue::Unsigned(text.trim().parse().map_err(|_| invalid())?)
            }
        };

        if self.contains(value) {
            Ok(value)
        } else {
            Err(invalid())
        }
    }
}

impl fmt::Display for IntKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.signedness {
            Signedness::Signed => 's',
            Signedness::Unsigned => 'u',
        };
        write!(f, "{}{}", prefix, self.width.bits())
    }
}

impl FromStr for IntKind {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (signedness, bits) =
            if let Some(bits) = s.strip_prefix('s').or_else(|| s.strip_prefix('i')) {
                (Signedness::Signed, bits)
            } else if let Some(bits) = s.strip_prefix('u') {
                (Signedness::Unsigned, bits)
            } else {
                return Err(SettingsError::UnknownKind(s.to_string()));
            };
        let width = match bits {
            "8" => IntWidth::W8,
            "16" => IntWidth::W16,
            "32" => IntWidth::W32,
            "64" => IntWidth::W64,
            _ => return Err(SettingsError::UnknownKind(s.to_string())),
        };
        Ok(Self::new(width, signedness))
    }
}

/// A value of the 64-bit core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntValue {
    Signed(i64),
    Unsigned(u64),
}

impl IntValue {
    fn as_i128(self) -> i128 {
        match self {
            Self::Signed(v) => v as i128,
            Self::Unsigned(v) => v as i128,
        }
    }
}

impl fmt::Display for IntValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signed(v) => write!(f, "{}", v),
            Self::Unsigned(v) => write!(f, "{}", v),
        }
    }
}

/// Rust integer types usable as settings.
///
/// Implemented for `i8..=i64` and `u8..=u64`.
pub trait SettingInt: Copy {
    const KIND: IntKind;

    fn into_value(self) -> IntValue;

    /// Project a core value, `None` when it does not fit
    fn from_value(value: IntValue) -> Option<Self>;
}

macro_rules! impl_setting_int {
    ($($ty:ty => $width:ident, $sign:ident, $variant:ident, $wide:ty;)*) => {
        $(
            impl SettingInt for $ty {
                const KIND: IntKind = IntKind::new(IntWidth::$width, Signedness::$sign);

                fn into_value(self) -> IntValue {
                    IntValue::$variant(self as $wide)
                }

                fn from_value(value: IntValue) -> Option<Self> {
                    match value {
                        IntValue::Signed(v) => <$ty>::try_from(v).ok(),
                        IntValue::Unsigned(v) => <$ty>::try_from(v).ok(),
                    }
                }
            }
        )*
    };
}

impl_setting_int! {
    i8 => W8, Signed, Signed, i64;
    i16 => W16, Signed, Signed, i64;
    i32 => W32, Signed, Signed, i64;
    i64 => W64, Signed, Signed, i64;
    u8 => W8, Unsigned, Unsigned, u64;
    u16 => W16, Unsigned, Unsigned, u64;
    u32 => W32, Unsigned, Unsigned, u64;
    u64 => W64, Unsigned, Unsigned, u64;
}

/// Digits scanned from the front of a string
struct Prefix {
    negative: bool,
    magnitude: u64,
    overflow: bool,
}

fn scan_prefix(text: &str, radix: u32) -> Prefix {
    let s = text.trim_start();
    let (negative, mut rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    if radix == 16 {
        if let Some(stripped) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
            rest = stripped;
        }
    }

    let mut magnitude: u64 = 0;
    let mut overflow = false;
    for digit in rest.chars().map_while(|c| c.to_digit(radix)) {
        match magnitude
            .checked_mul(radix as u64)
            .and_then(|m| m.checked_add(digit as u64))
        {
            Some(m) => magnitude = m,
            None => overflow = true,
        }
    }

    Prefix {
        negative,
        magnitude,
        overflow,
    }
}

/// `strtoll` equivalent: leading digits only, saturating on overflow.
/// Text without digits yields 0.
pub fn parse_i64_prefix(text: &str, radix: u32) -> i64 {
    let p = scan_prefix(text, radix);
    if p.negative {
        if p.overflow || p.magnitude > i64::MAX as u64 + 1 {
            i64::MIN
        } else {
            (p.magnitude as i64).wrapping_neg()
        }
    } else if p.overflow || p.magnitude > i64::MAX as u64 {
        i64::MAX
    } else {
        p.magnitude as i64
    }
}

/// `strtoull` equivalent: saturates to `u64::MAX` on overflow, and a
/// leading `-` negates modulo 2^64.
pub fn parse_u64_prefix(text: &str, radix: u32) -> u64 {
    let p = scan_prefix(text, radix);
    if p.overflow {
        u64::MAX
    } else if p.negative {
        p.magnitude.wrapping_neg()
    } else {
        p.magnitude
    }
}
