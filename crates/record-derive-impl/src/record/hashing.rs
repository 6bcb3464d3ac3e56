// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `Record` trait and `Hash` generation.
//!
//! The record hash starts from the runtime seed and folds in every field as
//! `(name, value)`, so two records of different shape holding the same
//! values do not collide by construction:
//!
//! ```rust,ignore
//! impl ::record_derive::Record for Point {
//!     const NAME: &'static str = "Point";
//!     const FIELD_NAMES: &'static [&'static str] = &["x", "y"];
//!
//!     fn record_hash(&self) -> u64 {
//!         ::record_derive::RecordHasher::new()
//!             .field("x", &self.x)
//!             .field("y", &self.y)
//!             .finish()
//!     }
//! }
//!
//! impl ::core::hash::Hash for Point {
//!     fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
//!         state.write_u64(::record_derive::Record::record_hash(self));
//!     }
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse_quote;

use super::parse::RecordDef;
use crate::utils::bounds::with_bound;

/// Generates `Record` and `Hash`, unless `#[record(no_hash)]` is set.
pub fn generate(record: &RecordDef) -> TokenStream {
    if !record.has_hash() {
        return TokenStream::new();
    }

    let krate = record.krate();
    let name = record.name();
    let name_str = record.name_str();
    let field_names = record.field_names();
    let fields = record.all_fields().iter().map(|f| {
        let ident = f.name();
        let label = f.name_str();
        quote! { .field(#label, &self.#ident) }
    });

    let bounded = with_bound(&record.generics, parse_quote!(::core::hash::Hash));
    let (impl_generics, ty_generics, where_clause) = bounded.split_for_impl();

    quote! {
        impl #impl_generics #krate::Record for #name #ty_generics #where_clause {
            const NAME: &'static str = #name_str;
            const FIELD_NAMES: &'static [&'static str] = &[#(#field_names),*];

            fn record_hash(&self) -> u64 {
                #krate::RecordHasher::new()
                    #(#fields)*
                    .finish()
            }
        }

        impl #impl_generics ::core::hash::Hash for #name #ty_generics #where_clause {
            #[inline]
            fn hash<__H: ::core::hash::Hasher>(&self, state: &mut __H) {
                state.write_u64(#krate::Record::record_hash(self));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(input: syn::DeriveInput) -> String {
        generate(&RecordDef::from_derive_input(&input).unwrap()).to_string()
    }

    #[test]
    fn record_impl_lists_shape() {
        let output = expand(syn::parse_quote! {
            struct Point {
                x: i32,
                y: i32,
            }
        });
        assert!(output.contains(":: record_derive :: Record for Point"));
        assert!(output.contains("const NAME : & 'static str = \"Point\""));
        assert!(output.contains("& [\"x\" , \"y\"]"));
    }

    #[test]
    fn hash_folds_named_fields() {
        let output = expand(syn::parse_quote! {
            struct Point {
                x: i32,
                y: i32,
            }
        });
        assert!(output.contains(
            ":: record_derive :: RecordHasher :: new () . field (\"x\" , & self . x) . field (\"y\" , & self . y) . finish ()"
        ));
        assert!(output.contains("state . write_u64"));
    }

    #[test]
    fn raw_identifiers_hash_by_plain_name() {
        let output = expand(syn::parse_quote! {
            struct Token {
                r#type: String,
            }
        });
        assert!(output.contains(". field (\"type\" , & self . r#type)"));
    }

    #[test]
    fn crate_path_override() {
        let output = expand(syn::parse_quote! {
            #[record(crate = "record_core")]
            struct Point {
                x: i32,
            }
        });
        assert!(output.contains("record_core :: Record for Point"));
        assert!(output.contains("record_core :: RecordHasher :: new ()"));
    }

    #[test]
    fn no_hash_generates_nothing() {
        let output = expand(syn::parse_quote! {
            #[record(no_hash)]
            struct Sample {
                value: f64,
            }
        });
        assert!(output.is_empty());
    }

    #[test]
    fn generic_params_are_hash_bounded() {
        let output = expand(syn::parse_quote! {
            struct Pair<T> {
                left: T,
                right: T,
            }
        });
        assert!(output.contains("impl < T : :: core :: hash :: Hash >"));
    }
}
