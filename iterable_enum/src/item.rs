//! Items produced by an iterable enum.

use crate::EnumValue;

/// One row of the enum table: `(name, value, alias)`.
///
/// `name` is `None` only when the row was produced for a value that no
/// name maps to (a stray order entry, or an unknown value passed to
/// [`IterableEnum::data_source`](crate::IterableEnum::data_source)).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumItem {
    pub name: Option<String>,
    pub value: EnumValue,
    pub alias: Option<String>,
}

impl EnumItem {
    pub fn new(name: Option<String>, value: EnumValue, alias: Option<String>) -> Self {
        Self { name, value, alias }
    }

    /// An item for a value that has no name.
    pub fn unnamed(value: EnumValue) -> Self {
        Self {
            name: None,
            value,
            alias: None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// The select option shown for this item: the alias is the label.
    pub fn to_select_option(&self) -> SelectOption {
        SelectOption {
            label: self.alias.clone(),
            value: self.value.clone(),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for EnumItem {
    /// Serialized as `[name, value, alias]`.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeTuple;

        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(&self.name)?;
        tuple.serialize_element(&self.value)?;
        tuple.serialize_element(&self.alias)?;
        tuple.end()
    }
}

/// A `{label, value}` pair for UI select widgets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SelectOption {
    pub label: Option<String>,
    pub value: EnumValue,
}
