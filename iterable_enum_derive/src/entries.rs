//! Collect `(name, value, alias)` entries from an enum definition.

use std::collections::HashMap;

use syn::{Data, DeriveInput, Expr, ExprLit, ExprUnary, Fields, Ident, Lit, UnOp, Variant};

/// Entry value as written in the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntryValue {
    Int(i64),
    Str(String),
}

#[derive(Debug, Clone)]
pub struct Entry {
    pub ident: Ident,
    pub name: String,
    pub value: EntryValue,
    pub alias: Option<String>,
}

/// Options from `#[iterable(...)]` on a variant.
#[derive(Default)]
struct VariantOptions {
    name: Option<String>,
    value: Option<EntryValue>,
    alias: Option<String>,
}

pub fn collect_entries(input: &DeriveInput) -> syn::Result<Vec<Entry>> {
    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "IterableEnum can only be derived for enums",
            ));
        }
    };

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "IterableEnum does not support generic enums",
        ));
    }

    let mut entries = Vec::with_capacity(data.variants.len());
    let mut names: HashMap<String, Ident> = HashMap::new();
    let mut values: HashMap<EntryValue, Ident> = HashMap::new();
    let mut next_discriminant = 0i64;

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                &variant.fields,
                "IterableEnum variants cannot carry fields",
            ));
        }

        let discriminant = match &variant.discriminant {
            Some((_, expr)) => parse_discriminant(expr)?,
            None => next_discriminant,
        };
        next_discriminant = discriminant.checked_add(1).ok_or_else(|| {
            syn::Error::new_spanned(&variant.ident, "discriminant overflows i64")
        })?;

        let options = parse_options(variant)?;
        let name = options.name.unwrap_or_else(|| variant.ident.to_string());
        let value = options.value.unwrap_or(EntryValue::Int(discriminant));

        if let Some(first) = names.insert(name.clone(), variant.ident.clone()) {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                format!("duplicate enum name `{}` (first used by `{}`)", name, first),
            ));
        }
        if let Some(first) = values.insert(value.clone(), variant.ident.clone()) {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                format!("duplicate enum value (first used by `{}`)", first),
            ));
        }

        entries.push(Entry {
            ident: variant.ident.clone(),
            name,
            value,
            alias: options.alias,
        });
    }

    Ok(entries)
}

/// Integer literal, optionally negated.
pub fn parse_discriminant(expr: &Expr) -> syn::Result<i64> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(int), ..
        }) => int.base10_parse::<i64>(),
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr,
            ..
        }) => parse_discriminant(expr).map(|v| -v),
        Expr::Group(group) => parse_discriminant(&group.expr),
        Expr::Paren(paren) => parse_discriminant(&paren.expr),
        _ => Err(syn::Error::new_spanned(
            expr,
            "discriminant must be an integer literal",
        )),
    }
}

fn parse_options(variant: &Variant) -> syn::Result<VariantOptions> {
    let mut options = VariantOptions::default();

    for attr in &variant.attrs {
        if !attr.path().is_ident("iterable") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("alias") {
                let lit: syn::LitStr = meta.value()?.parse()?;
                options.alias = Some(lit.value());
                Ok(())
            } else if meta.path.is_ident("name") {
                let lit: syn::LitStr = meta.value()?.parse()?;
                options.name = Some(lit.value());
                Ok(())
            } else if meta.path.is_ident("value") {
                let lit: Lit = meta.value()?.parse()?;
                options.value = Some(match lit {
                    Lit::Str(s) => EntryValue::Str(s.value()),
                    Lit::Int(i) => EntryValue::Int(i.base10_parse()?),
                    other => {
                        return Err(syn::Error::new_spanned(
                            other,
                            "value must be a string or integer literal",
                        ));
                    }
                });
                Ok(())
            } else {
                Err(meta.error("unknown iterable attribute, expected `alias`, `name` or `value`"))
            }
        })?;
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn values(entries: &[Entry]) -> Vec<EntryValue> {
        entries.iter().map(|e| e.value.clone()).collect()
    }

    #[test]
    fn implicit_discriminants_count_up() {
        let input: DeriveInput = parse_quote! {
            enum Week { Sunday, Monday = 5, Tuesday }
        };
        let entries = collect_entries(&input).unwrap();
        assert_eq!(
            values(&entries),
            vec![EntryValue::Int(0), EntryValue::Int(5), EntryValue::Int(6)]
        );
    }

    #[test]
    fn negative_discriminants() {
        let input: DeriveInput = parse_quote! {
            enum Delta { Down = -1, Flat, Up }
        };
        let entries = collect_entries(&input).unwrap();
        assert_eq!(
            values(&entries),
            vec![EntryValue::Int(-1), EntryValue::Int(0), EntryValue::Int(1)]
        );
    }

    #[test]
    fn attribute_overrides() {
        let input: DeriveInput = parse_quote! {
            enum Size {
                #[iterable(value = "s", alias = "Small")]
                S,
                #[iterable(name = "MEDIUM", value = 10)]
                M,
            }
        };
        let entries = collect_entries(&input).unwrap();
        assert_eq!(entries[0].value, EntryValue::Str("s".into()));
        assert_eq!(entries[0].alias.as_deref(), Some("Small"));
        assert_eq!(entries[0].name, "S");
        assert_eq!(entries[1].name, "MEDIUM");
        assert_eq!(entries[1].value, EntryValue::Int(10));
        assert_eq!(entries[1].alias, None);
    }

    #[test]
    fn duplicate_values_are_rejected() {
        let input: DeriveInput = parse_quote! {
            enum Clash { A = 1, #[iterable(value = 1)] B }
        };
        let err = collect_entries(&input).unwrap_err();
        assert!(err.to_string().contains("duplicate enum value"));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let input: DeriveInput = parse_quote! {
            enum Clash { A, #[iterable(name = "A")] B }
        };
        let err = collect_entries(&input).unwrap_err();
        assert!(err.to_string().contains("duplicate enum name `A`"));
    }

    #[test]
    fn rejects_non_enums_and_fields() {
        let input: DeriveInput = parse_quote! { struct Nope { a: u8 } };
        assert!(collect_entries(&input).is_err());

        let input: DeriveInput = parse_quote! { enum Nope { A(u8) } };
        assert!(collect_entries(&input).is_err());

        let input: DeriveInput = parse_quote! { enum Nope<T> { A } };
        assert!(collect_entries(&input).is_err());
    }

    #[test]
    fn rejects_unknown_attribute_keys() {
        let input: DeriveInput = parse_quote! {
            enum Nope { #[iterable(label = "x")] A }
        };
        let err = collect_entries(&input).unwrap_err();
        assert!(err.to_string().contains("unknown iterable attribute"));
    }

    #[test]
    fn rejects_computed_discriminants() {
        let expr: Expr = parse_quote!(1 + 2);
        assert!(parse_discriminant(&expr).is_err());
        let expr: Expr = parse_quote!(-7);
        assert_eq!(parse_discriminant(&expr).unwrap(), -7);
    }
}
