extern crate proc_macro;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

mod entries;

use entries::{Entry, EntryValue, collect_entries};

/// Derives `iterable_enum::IterableEnumType` for a fieldless enum.
///
/// Each variant becomes an entry whose name is the variant identifier and
/// whose value is its discriminant. Per-variant options:
///
/// * `#[iterable(alias = "...")]` - display alias
/// * `#[iterable(value = "..." | 123)]` - value other than the discriminant
/// * `#[iterable(name = "...")]` - name other than the identifier
///
/// Duplicate names or values are compile errors. The enum must also derive
/// `Clone` and `Copy`.
///
/// ```ignore
/// #[derive(IterableEnum, Clone, Copy)]
/// enum Weekday {
///     #[iterable(alias = "Sun")]
///     Sunday,
///     #[iterable(alias = "Mon")]
///     Monday,
/// }
/// ```
#[proc_macro_derive(IterableEnum, attributes(iterable))]
pub fn derive_iterable_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match collect_entries(&input) {
        Ok(entries) => expand(&input, &entries).into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn value_tokens(value: &EntryValue) -> TokenStream2 {
    match value {
        EntryValue::Int(i) => quote! { ::iterable_enum::EnumValue::Int(#i) },
        EntryValue::Str(s) => quote! { ::iterable_enum::EnumValue::from_static(#s) },
    }
}

fn expand(input: &DeriveInput, entries: &[Entry]) -> TokenStream2 {
    let ident = &input.ident;

    let defs = entries.iter().map(|e| {
        let name = &e.name;
        let value = value_tokens(&e.value);
        let alias = match &e.alias {
            Some(a) => quote! { ::core::option::Option::Some(#a) },
            None => quote! { ::core::option::Option::None },
        };
        quote! {
            ::iterable_enum::EntryDef { name: #name, value: #value, alias: #alias }
        }
    });

    let variants = entries.iter().map(|e| &e.ident).collect::<Vec<_>>();
    let positions = 0..entries.len();

    // Empty enums have no arms; `match *self {}` is exhaustive for them.
    let index_body = if entries.is_empty() {
        quote! { match *self {} }
    } else {
        quote! { match self { #( Self::#variants => #positions, )* } }
    };

    quote! {
        impl ::iterable_enum::IterableEnumType for #ident {
            const ENTRIES: &'static [::iterable_enum::EntryDef] = &[ #( #defs ),* ];

            const VARIANTS: &'static [Self] = &[ #( Self::#variants ),* ];

            fn index(&self) -> usize {
                #index_body
            }

            fn iterable() -> &'static ::iterable_enum::IterableEnum {
                static TABLE: ::std::sync::OnceLock<::iterable_enum::IterableEnum> =
                    ::std::sync::OnceLock::new();
                TABLE.get_or_init(|| {
                    ::iterable_enum::IterableEnum::from_entry_defs(
                        <Self as ::iterable_enum::IterableEnumType>::ENTRIES,
                    )
                })
            }
        }
    }
}
