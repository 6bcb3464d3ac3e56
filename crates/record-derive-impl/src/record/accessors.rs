// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Read-only accessor generation.
//!
//! Every field gets an accessor with the field's own name. The field doc
//! comment is copied onto it; undocumented fields get a generic line.
//!
//! # Generated Code
//!
//! ```rust,ignore
//! impl Person {
//!     /// Given names.
//!     pub fn middle_names(&self) -> &Vec<String> {
//!         &self.middle_names
//!     }
//!
//!     /// Returns the `age` field.
//!     pub fn age(&self) -> u8 {   // #[record(copy)]
//!         self.age
//!     }
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::{FieldDef, RecordDef};
use crate::utils::docs::doc_attrs;

/// Generates one accessor per field.
pub fn generate(record: &RecordDef) -> TokenStream {
    if record.all_fields().is_empty() {
        return TokenStream::new();
    }

    let vis = &record.vis;
    let name = record.name();
    let (impl_generics, ty_generics, where_clause) = record.generics.split_for_impl();
    let accessors = record.all_fields().iter().map(|f| accessor(vis, f));

    quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            #(#accessors)*
        }
    }
}

fn accessor(vis: &syn::Visibility, field: &FieldDef) -> TokenStream {
    let ident = field.name();
    let ty = field.ty();
    let docs = doc_attrs(
        field.doc(),
        &format!("Returns the `{}` field.", field.name_str())
    );

    if field.is_copy() {
        quote! {
            #docs
            #[inline]
            #[must_use]
            #vis fn #ident(&self) -> #ty {
                self.#ident
            }
        }
    } else {
        quote! {
            #docs
            #[inline]
            #[must_use]
            #vis fn #ident(&self) -> &#ty {
                &self.#ident
            }
        }
    }
}
