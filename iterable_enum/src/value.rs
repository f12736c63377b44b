//! Enum values: either an integer or a string.

use std::borrow::Cow;
use std::fmt;

/// The value side of an enum entry.
///
/// String values borrow when they come from static tables (see
/// [`EnumValue::from_static`]) and own otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum EnumValue {
    Int(i64),
    Str(Cow<'static, str>),
}

impl EnumValue {
    /// Build a string value in `const` context.
    pub const fn from_static(s: &'static str) -> Self {
        EnumValue::Str(Cow::Borrowed(s))
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            EnumValue::Int(i) => Some(*i),
            EnumValue::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            EnumValue::Int(_) => None,
            EnumValue::Str(s) => Some(s),
        }
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumValue::Int(i) => write!(f, "{}", i),
            EnumValue::Str(s) => write!(f, "{:?}", s),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for EnumValue {
                fn from(v: $t) -> Self {
                    EnumValue::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<&str> for EnumValue {
    fn from(s: &str) -> Self {
        EnumValue::Str(Cow::Owned(s.to_owned()))
    }
}

impl From<String> for EnumValue {
    fn from(s: String) -> Self {
        EnumValue::Str(Cow::Owned(s))
    }
}

impl From<Cow<'static, str>> for EnumValue {
    fn from(s: Cow<'static, str>) -> Self {
        EnumValue::Str(s)
    }
}

impl PartialEq<i64> for EnumValue {
    fn eq(&self, other: &i64) -> bool {
        self.as_int() == Some(*other)
    }
}

impl PartialEq<str> for EnumValue {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for EnumValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}
