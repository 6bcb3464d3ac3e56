// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Trait bounds for generic records.
//!
//! Generated impls follow the std derives: every type parameter receives the
//! bound of the trait being implemented.
//!
//! ```rust,ignore
//! struct Pair<T> { left: T, right: T }
//!
//! // PartialEq generator:
//! impl<T: ::core::cmp::PartialEq> ::core::cmp::PartialEq for Pair<T> { .. }
//! ```

use syn::{GenericParam, Generics, TypeParamBound, parse_quote};

/// Clone `generics` and add `bound` to every type parameter.
pub fn with_bound(generics: &Generics, bound: TypeParamBound) -> Generics {
    let mut generics = generics.clone();
    for param in &mut generics.params {
        if let GenericParam::Type(type_param) = param {
            type_param.bounds.push(bound.clone());
        }
    }
    generics
}

/// Bound used by impls that clone field values.
pub fn clone_bound() -> TypeParamBound {
    parse_quote!(::core::clone::Clone)
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    #[test]
    fn adds_bound_to_type_params() {
        let generics: Generics = parse_quote!(<T, U>);
        let bounded = with_bound(&generics, clone_bound());
        let (impl_generics, ..) = bounded.split_for_impl();
        let text = quote!(#impl_generics).to_string();
        assert_eq!(text.matches("Clone").count(), 2);
    }

    #[test]
    fn lifetimes_and_consts_untouched() {
        let generics: Generics = parse_quote!(<'a, T, const N: usize>);
        let bounded = with_bound(&generics, parse_quote!(::core::fmt::Debug));
        let (impl_generics, ..) = bounded.split_for_impl();
        let text = quote!(#impl_generics).to_string();
        assert_eq!(text.matches("Debug").count(), 1);
    }

    #[test]
    fn original_generics_unchanged() {
        let generics: Generics = parse_quote!(<T>);
        let _ = with_bound(&generics, clone_bound());
        let (impl_generics, ..) = generics.split_for_impl();
        assert!(!quote!(#impl_generics).to_string().contains("Clone"));
    }
}
