// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Positional constructor generation.
//!
//! # Generated Code
//!
//! ```rust,ignore
//! impl Point {
//!     /// Create a `Point` from its fields in declaration order.
//!     pub fn new(x: i32, y: i32) -> Self {
//!         Self { x, y }
//!     }
//! }
//! ```
//!
//! Skipped with `#[record(no_constructor)]`.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::RecordDef;

/// Generates `new` unless the constructor is suppressed.
pub fn generate(record: &RecordDef) -> TokenStream {
    if !record.has_constructor() {
        return TokenStream::new();
    }

    let vis = &record.vis;
    let name = record.name();
    let (impl_generics, ty_generics, where_clause) = record.generics.split_for_impl();

    let params = record.all_fields().iter().map(|f| {
        let ident = f.name();
        let ty = f.ty();
        quote! { #ident: #ty }
    });
    let idents = record.all_fields().iter().map(|f| f.name());

    let doc = format!(
        " Create a `{}` from its fields in declaration order.",
        record.name_str()
    );

    quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            #[doc = #doc]
            #[must_use]
            #[allow(clippy::too_many_arguments)]
            #vis fn new(#(#params),*) -> Self {
                Self { #(#idents),* }
            }
        }
    }
}
