//! # iterable_enum
//!
//! Enum-like constants that can be looped through: a name/value mapping with
//! reverse lookup (value to name), alias lookup for display strings, and
//! ordered projections for UI select widgets.
//!
//! ```rust
//! use iterable_enum::{EnumValue, IterableEnum};
//!
//! let week = IterableEnum::builder()
//!     .mapping([("SUNDAY", 0), ("MONDAY", 1)])
//!     .aliases([("SUNDAY", "Sun"), ("MONDAY", "Mon")])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(week.get("SUNDAY"), Some(&EnumValue::from(0)));
//! assert_eq!(week.name(&EnumValue::from(1)), Some("MONDAY"));
//! assert_eq!(week.value_by_alias("Sun"), Some(&EnumValue::from(0)));
//!
//! let labels: Vec<_> = week
//!     .select_options(None)
//!     .into_iter()
//!     .filter_map(|o| o.label)
//!     .collect();
//! assert_eq!(labels, ["Sun", "Mon"]);
//! ```
//!
//! ## Native enums
//!
//! With the default `derive` feature a Rust enum can carry the same table:
//!
//! ```rust
//! use iterable_enum::{EnumValue, IterableEnum, IterableEnumType};
//!
//! #[derive(IterableEnum, Clone, Copy, Debug, PartialEq)]
//! enum Weekday {
//!     #[iterable(alias = "Sun")]
//!     Sunday,
//!     #[iterable(alias = "Mon")]
//!     Monday,
//! }
//!
//! assert_eq!(Weekday::Monday.value(), EnumValue::from(1));
//! assert_eq!(Weekday::from_alias("Sun"), Some(Weekday::Sunday));
//! assert_eq!(Weekday::iterable().len(), 2);
//! ```

pub mod builder;
pub mod error;
pub mod item;
pub mod iterable;
pub mod table;
pub mod typed;
pub mod value;

pub use builder::{IterableEnumBuilder, SourceForm};
pub use error::{IterableEnumError, Result};
pub use item::{EnumItem, SelectOption};
pub use iterable::IterableEnum;
pub use table::EnumTable;
pub use typed::{EntryDef, IterableEnumType};
pub use value::EnumValue;

// Re-export the derive macro
#[cfg(feature = "derive")]
pub use iterable_enum_derive::IterableEnum;
