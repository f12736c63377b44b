//! The [`IterableEnum`] container and its lookup operations.

use indexmap::IndexMap;

use crate::builder::IterableEnumBuilder;
use crate::error::Result;
use crate::{EnumItem, EnumTable, EnumValue, SelectOption};

/// A name/value mapping with reverse lookup, alias lookup and ordered
/// projections.
///
/// The source mapping is reachable through [`get`](Self::get) and
/// [`mapping`](Self::mapping); everything else goes through the
/// value-keyed [`EnumTable`].
///
/// Every lookup accepts either a key or `None`, and `None` always yields
/// `None`.
///
/// ```rust
/// use iterable_enum::{EnumValue, IterableEnum};
///
/// let week = IterableEnum::from_entries(
///     [("SUNDAY", 0), ("MONDAY", 1)],
///     [("SUNDAY", "Sun"), ("MONDAY", "Mon")],
/// )
/// .unwrap();
///
/// assert_eq!(week.get("MONDAY"), Some(&EnumValue::from(1)));
/// assert_eq!(week.name(&EnumValue::from(0)), Some("SUNDAY"));
/// assert_eq!(week.name(None), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterableEnum {
    source: IndexMap<String, EnumValue>,
    table: EnumTable,
}

impl IterableEnum {
    pub fn builder() -> IterableEnumBuilder {
        IterableEnumBuilder::new()
    }

    /// Entries form: the pair order is the display order.
    pub fn from_entries<I, N, V, A, AN, AL>(entries: I, aliases: A) -> Result<Self>
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<EnumValue>,
        A: IntoIterator<Item = (AN, AL)>,
        AN: Into<String>,
        AL: Into<String>,
    {
        Self::builder().entries(entries).aliases(aliases).build()
    }

    /// Mapping form with an optional explicit order of values.
    pub fn from_mapping<I, N, V, A, AN, AL>(
        mapping: I,
        aliases: A,
        order: Option<Vec<EnumValue>>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<EnumValue>,
        A: IntoIterator<Item = (AN, AL)>,
        AN: Into<String>,
        AL: Into<String>,
    {
        let builder = Self::builder().mapping(mapping).aliases(aliases);
        match order {
            Some(order) => builder.order(order).build(),
            None => builder.build(),
        }
    }

    pub(crate) fn from_parts(source: IndexMap<String, EnumValue>, table: EnumTable) -> Self {
        Self { source, table }
    }

    /// Value of a name in the source mapping, like a field access.
    pub fn get(&self, name: &str) -> Option<&EnumValue> {
        self.source.get(name)
    }

    /// The source mapping in source order.
    pub fn mapping(&self) -> &IndexMap<String, EnumValue> {
        &self.source
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.source.keys().map(String::as_str)
    }

    /// Source values in source order. Use [`iter`](Self::iter) for table order.
    pub fn values(&self) -> impl Iterator<Item = &EnumValue> + '_ {
        self.source.values()
    }

    pub fn table(&self) -> &EnumTable {
        &self.table
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn contains_value(&self, value: &EnumValue) -> bool {
        self.table.contains(value)
    }

    pub fn item(&self, value: &EnumValue) -> Option<&EnumItem> {
        self.table.get(value)
    }

    /// Items in table order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &EnumItem> + '_ {
        self.table.iter()
    }

    pub fn name<'v>(&self, value: impl Into<Option<&'v EnumValue>>) -> Option<&str> {
        let value: Option<&EnumValue> = value.into();
        self.table.get(value?)?.name()
    }

    pub fn alias<'v>(&self, value: impl Into<Option<&'v EnumValue>>) -> Option<&str> {
        let value: Option<&EnumValue> = value.into();
        self.table.get(value?)?.alias()
    }

    pub fn value_by_name<'n>(&self, name: impl Into<Option<&'n str>>) -> Option<&EnumValue> {
        let name: Option<&str> = name.into();
        let name = name?;
        self.table
            .find(|item| item.name() == Some(name))
            .map(|item| &item.value)
    }

    pub fn alias_by_name<'n>(&self, name: impl Into<Option<&'n str>>) -> Option<&str> {
        let name: Option<&str> = name.into();
        let name = name?;
        self.table.find(|item| item.name() == Some(name))?.alias()
    }

    /// First value in table order carrying `alias`.
    pub fn value_by_alias<'a>(&self, alias: impl Into<Option<&'a str>>) -> Option<&EnumValue> {
        let alias: Option<&str> = alias.into();
        let alias = alias?;
        self.table
            .find(|item| item.alias() == Some(alias))
            .map(|item| &item.value)
    }

    /// Items in table order, or one item per requested value in request
    /// order. A requested value missing from the table yields an unnamed item.
    pub fn data_source(&self, values: Option<&[EnumValue]>) -> Vec<EnumItem> {
        match values {
            None => self.table.iter().cloned().collect(),
            Some(values) => values
                .iter()
                .map(|v| {
                    self.table
                        .get(v)
                        .cloned()
                        .unwrap_or_else(|| EnumItem::unnamed(v.clone()))
                })
                .collect(),
        }
    }

    pub fn select_options(&self, values: Option<&[EnumValue]>) -> Vec<SelectOption> {
        self.data_source(values)
            .iter()
            .map(EnumItem::to_select_option)
            .collect()
    }
}

impl<'a> IntoIterator for &'a IterableEnum {
    type Item = &'a EnumItem;
    type IntoIter = indexmap::map::Values<'a, EnumValue, EnumItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.table.iter()
    }
}
