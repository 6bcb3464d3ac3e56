// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Copy-with-one-field-replaced methods.
//!
//! `with_<field>` never touches the receiver. It clones every other field
//! into a fresh record and moves the new value in:
//!
//! ```rust,ignore
//! pub fn with_x(&self, x: i32) -> Self {
//!     Self {
//!         x,
//!         y: ::core::clone::Clone::clone(&self.y)
//!     }
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::{FieldDef, RecordDef};
use crate::utils::bounds::{clone_bound, with_bound};

/// Generates `with_<field>` for every selected field.
pub fn generate(record: &RecordDef) -> TokenStream {
    let targets = record.with_fields();
    if targets.is_empty() {
        return TokenStream::new();
    }

    let name = record.name();
    let vis = &record.vis;
    let bounded = with_bound(&record.generics, clone_bound());
    let (impl_generics, ty_generics, where_clause) = bounded.split_for_impl();

    let methods = targets
        .iter()
        .map(|target| with_method(vis, target, record.all_fields()));

    quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            #(#methods)*
        }
    }
}

fn with_method(vis: &syn::Visibility, target: &FieldDef, fields: &[FieldDef]) -> TokenStream {
    let method = target.with_ident();
    let param = target.name();
    let ty = target.ty();
    let doc = format!(
        " Returns a copy of this record with `{}` replaced.",
        target.name_str()
    );

    let inits = fields.iter().map(|f| {
        let ident = f.name();
        if ident == param {
            quote! { #ident }
        } else {
            quote! { #ident: ::core::clone::Clone::clone(&self.#ident) }
        }
    });

    quote! {
        #[doc = #doc]
        #[must_use]
        #vis fn #method(&self, #param: #ty) -> Self {
            Self {
                #(#inits),*
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
    fn clones_the_other_fields() {
        let output = expand(syn::parse_quote! {
            #[record(with)]
            pub struct Point {
                x: i32,
                y: i32,
            }
        });
        assert!(output.contains(
            "pub fn with_x (& self , x : i32) -> Self { Self { x , y : :: core :: clone :: Clone :: clone (& self . y) } }"
        ));
        assert!(output.contains(
            "pub fn with_y (& self , y : i32) -> Self { Self { x : :: core :: clone :: Clone :: clone (& self . x) , y } }"
        ));
    }

    #[test]
    fn only_selected_fields() {
        let output = expand(syn::parse_quote! {
            struct Person {
                #[record(with)]
                age: u8,
                name: String,
            }
        });
        assert!(output.contains("fn with_age"));
        assert!(!output.contains("fn with_name"));
    }

    #[test]
    fn camel_case_field_gets_snake_method() {
        let output = expand(syn::parse_quote! {
            #[allow(non_snake_case)]
            #[record(with)]
            struct Legacy {
                firstName: String,
            }
        });
        assert!(output.contains("fn with_first_name (& self , firstName : String)"));
    }

    #[test]
    fn disabled_by_default() {
        let output = expand(syn::parse_quote! {
            struct Point {
                x: i32,
            }
        });
        assert!(output.is_empty());
    }

    #[test]
    fn generic_params_are_clone_bounded() {
        let output = expand(syn::parse_quote! {
            #[record(with)]
            struct Pair<T> {
                left: T,
                right: T,
            }
        });
        assert!(output.contains("impl < T : :: core :: clone :: Clone > Pair < T >"));
    }
}
