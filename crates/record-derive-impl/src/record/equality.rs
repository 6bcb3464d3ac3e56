// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Structural equality.
//!
//! Two records are equal when every field compares equal, in declaration
//! order. `Eq` is emitted alongside `Hash`, so `#[record(no_hash)]` records
//! (for example ones holding floats) only get `PartialEq`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse_quote;

use super::parse::RecordDef;
use crate::utils::bounds::with_bound;

/// Generates `PartialEq` and, unless hashing is disabled, `Eq`.
pub fn generate(record: &RecordDef) -> TokenStream {
    let name = record.name();
    let fields: Vec<_> = record.all_fields().iter().map(|f| f.name()).collect();

    let partial = with_bound(&record.generics, parse_quote!(::core::cmp::PartialEq));
    let (impl_generics, ty_generics, where_clause) = partial.split_for_impl();

    let eq_fn = if fields.is_empty() {
        quote! {
            #[inline]
            fn eq(&self, _: &Self) -> bool {
                true
            }
        }
    } else {
        quote! {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                #(self.#fields == other.#fields)&&*
            }
        }
    };

    let partial_eq = quote! {
        impl #impl_generics ::core::cmp::PartialEq for #name #ty_generics #where_clause {
            #eq_fn
        }
    };

    if !record.has_hash() {
        return partial_eq;
    }

    let total = with_bound(&record.generics, parse_quote!(::core::cmp::Eq));
    let (impl_generics, ty_generics, where_clause) = total.split_for_impl();

    quote! {
        #partial_eq

        impl #impl_generics ::core::cmp::Eq for #name #ty_generics #where_clause {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(input: syn::DeriveInput) -> String {
        generate(&RecordDef::from_derive_input(&input).unwrap()).to_string()
    }

    #[test]
    fn compares_every_field() {
        let output = expand(syn::parse_quote! {
            struct Point {
                x: i32,
                y: i32,
            }
        });
        assert!(output.contains("self . x == other . x && self . y == other . y"));
        assert!(output.contains(":: core :: cmp :: Eq for Point"));
    }

    #[test]
    fn no_hash_skips_eq() {
        let output = expand(syn::parse_quote! {
            #[record(no_hash)]
            struct Sample {
                value: f64,
            }
        });
        assert!(output.contains(":: core :: cmp :: PartialEq for Sample"));
        assert!(!output.contains(":: core :: cmp :: Eq for"));
    }

    #[test]
    fn empty_record_is_always_equal() {
        let output = expand(syn::parse_quote! {
            struct Unit {}
        });
        assert!(output.contains("fn eq (& self , _ : & Self) -> bool { true }"));
    }

    #[test]
    fn generic_params_are_bounded() {
        let output = expand(syn::parse_quote! {
            struct Pair<T> {
                left: T,
                right: T,
            }
        });
        assert!(output.contains("impl < T : :: core :: cmp :: PartialEq >"));
        assert!(output.contains("impl < T : :: core :: cmp :: Eq >"));
    }
}
