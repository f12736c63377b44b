use thiserror::Error;

use crate::EnumValue;

/// Errors raised while constructing an [`IterableEnum`](crate::IterableEnum).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IterableEnumError {
    /// The builder was given neither the entries form nor the mapping form.
    #[error("The arguments are improper: {0}")]
    ImproperArguments(&'static str),

    /// Strict mode only.
    #[error("Duplicate name `{0}` in enum source")]
    DuplicateName(String),

    /// Strict mode only.
    #[error("Duplicate value {0} in enum source")]
    DuplicateValue(EnumValue),

    /// Strict mode only: an explicit order entry that no name maps to.
    #[error("Order value {0} does not belong to any name")]
    UnknownOrderValue(EnumValue),
}

pub type Result<T> = std::result::Result<T, IterableEnumError>;
