// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! In-place setters, opt-in with `#[record(setters)]` or
//! `#[record(setter)]` on a field.
//!
//! Setters take `&mut self`. A record stored as a `HashMap` key or behind
//! a shared reference cannot be reached mutably, so its hash stays valid.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::RecordDef;

/// Generates `set_<field>` for every selected field.
pub fn generate(record: &RecordDef) -> TokenStream {
    let targets = record.setter_fields();
    if targets.is_empty() {
        return TokenStream::new();
    }

    let name = record.name();
    let vis = &record.vis;
    let (impl_generics, ty_generics, where_clause) = record.generics.split_for_impl();

    let methods = targets.iter().map(|field| {
        let method = field.setter_ident();
        let ident = field.name();
        let ty = field.ty();
        let doc = format!(" Replaces the `{}` field in place.", field.name_str());
        quote! {
            #[doc = #doc]
            #[inline]
            #vis fn #method(&mut self, #ident: #ty) {
                self.#ident = #ident;
            }
        }
    });

    quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            #(#methods)*
        }
    }
}
