//! Statically typed iterable enums, usually produced by
//! `#[derive(IterableEnum)]`.

use crate::{EnumTable, EnumValue, IterableEnum};

/// A compile-time entry: `(name, value, alias)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDef {
    pub name: &'static str,
    pub value: EnumValue,
    pub alias: Option<&'static str>,
}

/// A Rust enum whose variants form an iterable enum.
///
/// The enum type itself is the precise type of the enum's values: a variant
/// maps to exactly one entry, and [`value`](Self::value) /
/// [`from_value`](Self::from_value) convert between the two.
///
/// Implementations are generated by the derive macro, which guarantees that
/// names and values are unique and that `VARIANTS[i]` corresponds to
/// `ENTRIES[i]`.
pub trait IterableEnumType: Sized + Copy + 'static {
    /// Entries in declaration order.
    const ENTRIES: &'static [EntryDef];

    /// Variants in declaration order.
    const VARIANTS: &'static [Self];

    /// Position of this variant in [`ENTRIES`](Self::ENTRIES).
    fn index(&self) -> usize;

    /// The shared runtime table for this enum, built on first use.
    fn iterable() -> &'static IterableEnum;

    fn entry(&self) -> &'static EntryDef {
        &Self::ENTRIES[self.index()]
    }

    fn value(&self) -> EnumValue {
        self.entry().value.clone()
    }

    fn entry_name(&self) -> &'static str {
        self.entry().name
    }

    fn entry_alias(&self) -> Option<&'static str> {
        self.entry().alias
    }

    fn from_value(value: &EnumValue) -> Option<Self> {
        Self::position(|e| &e.value == value)
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::position(|e| e.name == name)
    }

    /// First variant in declaration order carrying `alias`.
    fn from_alias(alias: &str) -> Option<Self> {
        Self::position(|e| e.alias == Some(alias))
    }

    fn position(pred: impl FnMut(&EntryDef) -> bool) -> Option<Self> {
        Self::ENTRIES
            .iter()
            .position(pred)
            .and_then(|i| Self::VARIANTS.get(i).copied())
    }
}

impl IterableEnum {
    /// Build from static entries in the entries form.
    ///
    /// Infallible: the entries form never carries an explicit order, and
    /// duplicate names or values are tolerated as in lax mode.
    pub fn from_entry_defs(entries: &[EntryDef]) -> Self {
        let source = entries
            .iter()
            .map(|e| (e.name.to_owned(), e.value.clone()))
            .collect();
        let aliases = entries
            .iter()
            .filter_map(|e| e.alias.map(|a| (e.name.to_owned(), a.to_owned())))
            .collect();
        let order: Vec<EnumValue> = entries.iter().map(|e| e.value.clone()).collect();
        let table = EnumTable::build(&source, &aliases, &order);
        Self::from_parts(source, table)
    }
}
