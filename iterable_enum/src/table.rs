//! The value-keyed, insertion-ordered table behind every iterable enum.

use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::warn;

use crate::{EnumItem, EnumValue};

/// Ordered mapping from value to [`EnumItem`].
///
/// Iteration order is insertion order: explicit order values first, then the
/// remaining source values in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumTable {
    items: IndexMap<EnumValue, EnumItem>,
}

impl EnumTable {
    /// Build the table from the collapsed `name -> value` source, the alias
    /// map (keyed by name) and an explicit order.
    ///
    /// Never fails. When two names share a value the last one wins, and an
    /// order value with no name yields an unnamed item.
    pub fn build(
        source: &IndexMap<String, EnumValue>,
        aliases: &HashMap<String, String>,
        order: &[EnumValue],
    ) -> Self {
        let mut value_names: HashMap<&EnumValue, &str> = HashMap::with_capacity(source.len());
        for (name, value) in source {
            if let Some(previous) = value_names.insert(value, name) {
                warn!(%value, previous, name = name.as_str(), "duplicate enum value, last name wins");
            }
        }

        let mut items = IndexMap::with_capacity(source.len());
        for value in order.iter().chain(source.values()) {
            if items.contains_key(value) {
                continue;
            }
            let item = match value_names.get(value) {
                Some(&name) => EnumItem::new(
                    Some(name.to_owned()),
                    value.clone(),
                    aliases.get(name).cloned(),
                ),
                None => {
                    warn!(%value, "order value does not belong to any name");
                    EnumItem::unnamed(value.clone())
                }
            };
            items.insert(value.clone(), item);
        }

        Self { items }
    }

    pub fn get(&self, value: &EnumValue) -> Option<&EnumItem> {
        self.items.get(value)
    }

    pub fn contains(&self, value: &EnumValue) -> bool {
        self.items.contains_key(value)
    }

    /// First item in table order matching `pred`.
    pub fn find(&self, mut pred: impl FnMut(&EnumItem) -> bool) -> Option<&EnumItem> {
        self.items.values().find(|item| pred(item))
    }

    pub fn iter(&self) -> indexmap::map::Values<'_, EnumValue, EnumItem> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(pairs: &[(&str, i64)]) -> IndexMap<String, EnumValue> {
        pairs
            .iter()
            .map(|(n, v)| (n.to_string(), EnumValue::from(*v)))
            .collect()
    }

    fn values(table: &EnumTable) -> Vec<i64> {
        table.iter().filter_map(|item| item.value.as_int()).collect()
    }

    #[test]
    fn source_order_without_explicit_order() {
        let table = EnumTable::build(&source(&[("A", 3), ("B", 1), ("C", 2)]), &HashMap::new(), &[]);
        assert_eq!(values(&table), vec![3, 1, 2]);
    }

    #[test]
    fn explicit_order_first_then_remaining() {
        let table = EnumTable::build(
            &source(&[("A", 0), ("B", 1), ("C", 2)]),
            &HashMap::new(),
            &[2.into()],
        );
        assert_eq!(values(&table), vec![2, 0, 1]);
    }

    #[test]
    fn stray_order_value_is_unnamed() {
        let table = EnumTable::build(&source(&[("A", 0)]), &HashMap::new(), &[9.into()]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(&9.into()), Some(&EnumItem::unnamed(9.into())));
        assert_eq!(table.get(&0.into()).and_then(EnumItem::name), Some("A"));
    }

    #[test]
    fn duplicate_value_keeps_last_name() {
        let table = EnumTable::build(&source(&[("A", 0), ("B", 0)]), &HashMap::new(), &[]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&0.into()).and_then(EnumItem::name), Some("B"));
    }

    #[test]
    fn aliases_are_keyed_by_name() {
        let aliases = HashMap::from([("A".to_string(), "Alpha".to_string())]);
        let table = EnumTable::build(&source(&[("A", 0), ("B", 1)]), &aliases, &[]);
        assert_eq!(table.get(&0.into()).and_then(EnumItem::alias), Some("Alpha"));
        assert_eq!(table.get(&1.into()).and_then(EnumItem::alias), None);
    }
}
