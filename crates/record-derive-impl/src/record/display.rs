// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `Display` and `Debug` generation.
//!
//! Records render as `Name(v1, v2, ...)`. Each value is written with its own
//! `Debug` form so strings and chars come out quoted and nested records
//! render recursively:
//!
//! ```text
//! Person("Ada", ["King"], "Lovelace", 36)
//! Rectangle(Point(0, 0), Point(3, 4))
//! ```
//!
//! `Debug` delegates to `Display`, so `{:?}` and `{}` agree.

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse_quote;

use super::parse::RecordDef;
use crate::utils::bounds::with_bound;

/// Generates `Display` and, unless `#[record(no_debug)]` is set, `Debug`.
pub fn generate(record: &RecordDef) -> TokenStream {
    let name = record.name();
    let name_str = record.name_str();

    let writes = record.all_fields().iter().enumerate().map(|(i, f)| {
        let ident = f.name();
        let sep = (i > 0).then(|| quote! { f.write_str(", ")?; });
        quote! {
            #sep
            ::core::fmt::Debug::fmt(&self.#ident, f)?;
        }
    });

    let bounded = with_bound(&record.generics, parse_quote!(::core::fmt::Debug));
    let (impl_generics, ty_generics, where_clause) = bounded.split_for_impl();

    let display = quote! {
        impl #impl_generics ::core::fmt::Display for #name #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(#name_str)?;
                f.write_str("(")?;
                #(#writes)*
                f.write_str(")")
            }
        }
    };

    if !record.has_debug() {
        return display;
    }

    quote! {
        #display

        impl #impl_generics ::core::fmt::Debug for #name #ty_generics #where_clause {
            #[inline]
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(self, f)
            }
        }
    }
}
