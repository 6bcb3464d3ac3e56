// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Destructuring, opt-in with `#[record(destructure)]`.
//!
//! Two forms are generated:
//!
//! | Method | Receiver | Result |
//! |--------|----------|--------|
//! | `destructure(&self, &mut a, &mut b, ..)` | borrowed | clones into caller slots |
//! | `into_parts(self)` | owned | `(a, b, ..)` tuple, no clones |
//!
//! The slots written by `destructure` are independent of the record:
//! mutating them afterwards never changes the record.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::RecordDef;
use crate::utils::bounds::{clone_bound, with_bound};

/// Generates `destructure` and `into_parts`.
pub fn generate(record: &RecordDef) -> TokenStream {
    if !record.has_destructure() {
        return TokenStream::new();
    }

    let name = record.name();
    let vis = &record.vis;
    let idents: Vec<_> = record.all_fields().iter().map(|f| f.name()).collect();
    let types: Vec<_> = record.all_fields().iter().map(|f| f.ty()).collect();

    let (impl_generics, ty_generics, where_clause) = record.generics.split_for_impl();
    let bounded = with_bound(&record.generics, clone_bound());
    let (clone_impl_generics, clone_ty_generics, clone_where_clause) = bounded.split_for_impl();

    quote! {
        impl #clone_impl_generics #name #clone_ty_generics #clone_where_clause {
            /// Copies every field into the given slots, in declaration order.
            #[allow(clippy::too_many_arguments)]
            #vis fn destructure(&self, #(#idents: &mut #types),*) {
                #(::core::clone::Clone::clone_from(#idents, &self.#idents);)*
            }
        }

        impl #impl_generics #name #ty_generics #where_clause {
            /// Consumes the record and returns its fields, in declaration order.
            #[must_use]
            #vis fn into_parts(self) -> (#(#types,)*) {
                (#(self.#idents,)*)
            }
        }
    }
}
