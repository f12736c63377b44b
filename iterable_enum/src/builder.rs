//! Builder for [`IterableEnum`].
//!
//! The builder accepts one of two argument shapes:
//!
//! * the **entries** form: ordered `(name, value)` pairs, with optional
//!   aliases. The pair order is the display order.
//! * the **mapping** form: a `name -> value` mapping, with optional aliases
//!   and an optional explicit order of values.
//!
//! Anything else is rejected with [`IterableEnumError::ImproperArguments`].

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::error::{IterableEnumError, Result};
use crate::{EnumTable, EnumValue, IterableEnum};

/// Which argument shape produced an enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceForm {
    Entries,
    Mapping,
}

/// Fluent builder for an [`IterableEnum`].
///
/// ```rust
/// use iterable_enum::{EnumValue, IterableEnum};
///
/// let week = IterableEnum::builder()
///     .mapping([("SUNDAY", 0), ("MONDAY", 1)])
///     .alias("SUNDAY", "Sun")
///     .alias("MONDAY", "Mon")
///     .order([1, 0])
///     .build()
///     .unwrap();
///
/// assert_eq!(week.name(&EnumValue::from(0)), Some("SUNDAY"));
/// assert_eq!(week.value_by_alias("Mon"), Some(&EnumValue::from(1)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct IterableEnumBuilder {
    entries: Option<Vec<(String, EnumValue)>>,
    mapping: Option<Vec<(String, EnumValue)>>,
    aliases: HashMap<String, String>,
    order: Option<Vec<EnumValue>>,
    strict: bool,
}

impl IterableEnumBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the entries form.
    pub fn entries<I, N, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<EnumValue>,
    {
        self.entries = Some(collect_pairs(entries));
        self
    }

    /// Use the mapping form.
    pub fn mapping<I, N, V>(mut self, mapping: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<EnumValue>,
    {
        self.mapping = Some(collect_pairs(mapping));
        self
    }

    pub fn alias(mut self, name: impl Into<String>, alias: impl Into<String>) -> Self {
        self.aliases.insert(name.into(), alias.into());
        self
    }

    pub fn aliases<I, N, A>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = (N, A)>,
        N: Into<String>,
        A: Into<String>,
    {
        self.aliases
            .extend(aliases.into_iter().map(|(n, a)| (n.into(), a.into())));
        self
    }

    /// Explicit display order. Only valid with the mapping form.
    pub fn order<I, V>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<EnumValue>,
    {
        self.order = Some(order.into_iter().map(Into::into).collect());
        self
    }

    /// Reject duplicate names, duplicate values and stray order values
    /// instead of tolerating them.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn build(self) -> Result<IterableEnum> {
        let (form, pairs, order) = match (self.entries, self.mapping) {
            (Some(_), Some(_)) => {
                return Err(IterableEnumError::ImproperArguments(
                    "entries and a mapping cannot both be supplied",
                ));
            }
            (None, None) => {
                return Err(IterableEnumError::ImproperArguments(
                    "either entries or a mapping is required",
                ));
            }
            (Some(entries), None) => {
                if self.order.is_some() {
                    return Err(IterableEnumError::ImproperArguments(
                        "an explicit order only applies to the mapping form",
                    ));
                }
                let order = entries.iter().map(|(_, v)| v.clone()).collect();
                (SourceForm::Entries, entries, order)
            }
            (None, Some(mapping)) => (SourceForm::Mapping, mapping, self.order.unwrap_or_default()),
        };

        if self.strict {
            validate(&pairs, &order)?;
        }

        let source = collapse(pairs);
        let table = EnumTable::build(&source, &self.aliases, &order);
        debug!(?form, items = table.len(), strict = self.strict, "built iterable enum");

        Ok(IterableEnum::from_parts(source, table))
    }
}

fn collect_pairs<I, N, V>(pairs: I) -> Vec<(String, EnumValue)>
where
    I: IntoIterator<Item = (N, V)>,
    N: Into<String>,
    V: Into<EnumValue>,
{
    pairs
        .into_iter()
        .map(|(n, v)| (n.into(), v.into()))
        .collect()
}

/// Collapse pairs into a mapping. A repeated name keeps its first position
/// and takes its last value.
fn collapse(pairs: Vec<(String, EnumValue)>) -> IndexMap<String, EnumValue> {
    let mut source = IndexMap::with_capacity(pairs.len());
    for (name, value) in pairs {
        if let Some(previous) = source.insert(name.clone(), value) {
            warn!(name = %name, %previous, "duplicate enum name, last value wins");
        }
    }
    source
}

fn validate(pairs: &[(String, EnumValue)], order: &[EnumValue]) -> Result<()> {
    let mut names = HashSet::with_capacity(pairs.len());
    let mut values = HashSet::with_capacity(pairs.len());
    for (name, value) in pairs {
        if !names.insert(name.as_str()) {
            return Err(IterableEnumError::DuplicateName(name.clone()));
        }
        if !values.insert(value) {
            return Err(IterableEnumError::DuplicateValue(value.clone()));
        }
    }
    match order.iter().find(|v| !values.contains(v)) {
        Some(stray) => Err(IterableEnumError::UnknownOrderValue(stray.clone())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_arguments_are_improper() {
        let err = IterableEnumBuilder::new().build().unwrap_err();
        assert!(matches!(err, IterableEnumError::ImproperArguments(_)));
    }

    #[test]
    fn both_forms_are_improper() {
        let err = IterableEnumBuilder::new()
            .entries([("A", 0)])
            .mapping([("A", 0)])
            .build()
            .unwrap_err();
        assert!(matches!(err, IterableEnumError::ImproperArguments(_)));
    }

    #[test]
    fn order_with_entries_is_improper() {
        let err = IterableEnumBuilder::new()
            .entries([("A", 0)])
            .order([0])
            .build()
            .unwrap_err();
        assert!(matches!(err, IterableEnumError::ImproperArguments(_)));
    }

    #[test]
    fn aliases_alone_are_improper() {
        let err = IterableEnumBuilder::new().alias("A", "a").build().unwrap_err();
        assert!(matches!(err, IterableEnumError::ImproperArguments(_)));
    }

    #[test]
    fn improper_message_mentions_arguments() {
        let err = IterableEnumBuilder::new().build().unwrap_err();
        assert!(err.to_string().starts_with("The arguments are improper"));
    }

    #[test]
    fn collapse_keeps_first_position_last_value() {
        let source = collapse(vec![
            ("A".into(), 0.into()),
            ("B".into(), 1.into()),
            ("A".into(), 2.into()),
        ]);
        let flat: Vec<(&str, i64)> = source
            .iter()
            .filter_map(|(n, v)| v.as_int().map(|v| (n.as_str(), v)))
            .collect();
        assert_eq!(flat, vec![("A", 2), ("B", 1)]);
    }

    #[test]
    fn lax_mode_tolerates_contract_violations() -> Result<()> {
        let e = IterableEnumBuilder::new()
            .mapping([("A", 0), ("B", 0)])
            .order([7])
            .build()?;
        assert_eq!(e.len(), 2);
        Ok(())
    }

    #[test]
    fn strict_mode_rejects_duplicate_names() {
        let err = IterableEnumBuilder::new()
            .entries([("A", 0), ("A", 1)])
            .strict(true)
            .build()
            .unwrap_err();
        assert_eq!(err, IterableEnumError::DuplicateName("A".into()));
    }

    #[test]
    fn strict_mode_rejects_duplicate_values() {
        let err = IterableEnumBuilder::new()
            .mapping([("A", 0), ("B", 0)])
            .strict(true)
            .build()
            .unwrap_err();
        assert_eq!(err, IterableEnumError::DuplicateValue(EnumValue::from(0)));
    }

    #[test]
    fn strict_mode_rejects_stray_order_values() {
        let err = IterableEnumBuilder::new()
            .mapping([("A", 0), ("B", 1)])
            .order([1, 5])
            .strict(true)
            .build()
            .unwrap_err();
        assert_eq!(err, IterableEnumError::UnknownOrderValue(EnumValue::from(5)));
    }

    #[test]
    fn strict_mode_accepts_partial_order() -> Result<()> {
        let e = IterableEnumBuilder::new()
            .mapping([("A", 0), ("B", 1), ("C", 2)])
            .order([2])
            .strict(true)
            .build()?;
        let names: Vec<_> = e.iter().filter_map(|item| item.name()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
        Ok(())
    }
}
