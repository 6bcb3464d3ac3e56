// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Documentation extraction and emission.
//!
//! Field doc comments are stored by rustc as `#[doc = "..."]` attributes.
//! They are collected at parse time and re-emitted on the generated accessor,
//! so `cargo doc` shows the same text on `Point::x()` as on the `x` field.
//!
//! ```rust,ignore
//! #[derive(Record)]
//! pub struct Point {
//!     /// Horizontal position.
//!     x: i32,
//! }
//!
//! // Generates:
//! /// Horizontal position.
//! pub fn x(&self) -> &i32 { &self.x }
//! ```

use proc_macro2::TokenStream;
use quote::quote;
use syn::Attribute;

/// Extract doc comments from attributes.
///
/// Combines all `#[doc = "..."]` attributes into a single string, trimming
/// each line. Returns `None` when there is no non-empty doc text.
pub fn extract_doc_comments(attrs: &[Attribute]) -> Option<String> {
    let doc_lines: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| {
            if let syn::Meta::NameValue(meta) = &attr.meta
                && let syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(lit_str),
                    ..
                }) = &meta.value
            {
                return Some(lit_str.value());
            }
            None
        })
        .collect();

    let combined = doc_lines
        .iter()
        .map(|line| line.trim())
        .collect::<Vec<_>>()
        .join("\n");

    let trimmed = combined.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Emit `#[doc = ...]` attributes for `doc`, or for `fallback` when absent.
///
/// One attribute per line, so multi-paragraph comments keep their layout.
pub fn doc_attrs(doc: Option<&str>, fallback: &str) -> TokenStream {
    let text = doc.unwrap_or(fallback);
    let lines = text.lines().map(|line| format!(" {line}"));
    quote! { #(#[doc = #lines])* }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_attrs(input: &str) -> Vec<Attribute> {
        let item: syn::ItemStruct = syn::parse_str(input).unwrap();
        item.fields.into_iter().next().unwrap().attrs
    }

    #[test]
    fn extract_single_line_doc() {
        let attrs = field_attrs(
            r#"
            struct Point {
                /// Horizontal position.
                x: i32,
            }
        "#
        );
        assert_eq!(extract_doc_comments(&attrs), Some("Horizontal position.".to_string()));
    }

    #[test]
    fn extract_multi_paragraph_doc() {
        let attrs = field_attrs(
            r#"
            struct Person {
                /// Given names.
                ///
                /// Empty when unknown.
                middle_names: Vec<String>,
            }
        "#
        );
        assert_eq!(
            extract_doc_comments(&attrs),
            Some("Given names.\n\nEmpty when unknown.".to_string())
        );
    }

    #[test]
    fn extract_ignores_other_attributes() {
        let attrs = field_attrs(
            r#"
            struct Point {
                #[record(copy)]
                x: i32,
            }
        "#
        );
        assert_eq!(extract_doc_comments(&attrs), None);
    }

    #[test]
    fn blank_doc_is_none() {
        let attrs = field_attrs(
            r#"
            struct Point {
                ///
                x: i32,
            }
        "#
        );
        assert_eq!(extract_doc_comments(&attrs), None);
    }

    #[test]
    fn doc_attrs_uses_fallback() {
        let tokens = doc_attrs(None, "Returns the `x` field.").to_string();
        assert!(tokens.contains("Returns the `x` field."));
    }

    #[test]
    fn doc_attrs_one_attribute_per_line() {
        let tokens = doc_attrs(Some("First.\n\nSecond."), "unused").to_string();
        assert_eq!(tokens.matches("doc =").count(), 3);
        assert!(!tokens.contains("unused"));
    }
}
