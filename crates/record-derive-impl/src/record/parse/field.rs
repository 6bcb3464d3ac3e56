// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! Every named struct field becomes a [`FieldDef`]. Access options come from
//! [`access`]; the field doc comment is kept so generated accessors carry it.
//!
//! # Example
//!
//! ```rust,ignore
//! /// Age in whole years.
//! #[record(copy, with)]   // FieldAttrs { copy: true, with: true, .. }
//! age: u8,
//! ```

mod access;

pub use access::FieldAttrs;
use darling::FromField;
use proc_macro2::Span;
use syn::{Field, Ident, Type, Visibility, ext::IdentExt};

use crate::utils::{docs::extract_doc_comments, naming};

/// Field definition with all parsed attributes.
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier as written (may be raw, e.g. `r#type`).
    pub ident: Ident,

    /// Field type.
    pub ty: Type,

    /// Declared visibility; must be inherited (private).
    pub vis: Visibility,

    /// Access options from `#[record(...)]`.
    pub access: FieldAttrs,

    /// Documentation comment, copied to the accessor.
    pub doc: Option<String>
}

impl FieldDef {
    /// Parse field definition from syn's `Field`.
    ///
    /// # Errors
    ///
    /// Returns error if the field has no identifier (tuple struct field) or
    /// carries unknown `#[record(...)]` options.
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("Record fields must be named").with_span(field)
        })?;
        let access = FieldAttrs::from_field(field)?;

        Ok(Self {
            ident,
            ty: field.ty.clone(),
            vis: field.vis.clone(),
            access,
            doc: extract_doc_comments(&field.attrs)
        })
    }

    /// Get the field name as an identifier.
    #[must_use]
    pub fn name(&self) -> &Ident {
        &self.ident
    }

    /// Get the field name as a string, without the `r#` prefix.
    #[must_use]
    pub fn name_str(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Get the field type.
    #[must_use]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// Check if the accessor returns by copy.
    #[must_use]
    pub fn is_copy(&self) -> bool {
        self.access.copy
    }

    /// Check if the field is declared without a visibility modifier.
    #[must_use]
    pub fn is_private(&self) -> bool {
        matches!(self.vis, Visibility::Inherited)
    }

    /// Name of the generated `with_<field>` method.
    #[must_use]
    pub fn with_ident(&self) -> Ident {
        Ident::new(&naming::method_name("with", &self.name_str()), self.span())
    }

    /// Name of the generated `set_<field>` method.
    #[must_use]
    pub fn setter_ident(&self) -> Ident {
        Ident::new(&naming::method_name("set", &self.name_str()), self.span())
    }

    /// Span of the field identifier.
    #[must_use]
    pub fn span(&self) -> Span {
        self.ident.span()
    }

    /// Get the documentation comment if present.
    #[must_use]
    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use syn::FieldsNamed;

    use super::*;

    fn parse(fields: FieldsNamed) -> Vec<FieldDef> {
        fields
            .named
            .iter()
            .map(FieldDef::from_field)
            .collect::<darling::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn plain_field() {
        let fields = parse(syn::parse_quote!({ x: i32 }));
        let x = &fields[0];
        assert_eq!(x.name_str(), "x");
        assert!(x.is_private());
        assert!(!x.is_copy());
        assert!(x.doc().is_none());
        assert_eq!(x.with_ident().to_string(), "with_x");
        assert_eq!(x.setter_ident().to_string(), "set_x");
    }

    #[test]
    fn raw_identifier_is_unrawed() {
        let fields = parse(syn::parse_quote!({ r#type: String }));
        assert_eq!(fields[0].name_str(), "type");
        assert_eq!(fields[0].with_ident().to_string(), "with_type");
    }

    #[test]
    fn camel_case_methods_are_snake_case() {
        let fields = parse(syn::parse_quote!({ firstName: String }));
        assert_eq!(fields[0].with_ident().to_string(), "with_first_name");
        assert_eq!(fields[0].setter_ident().to_string(), "set_first_name");
    }

    #[test]
    fn doc_comment_is_kept() {
        let fields = parse(syn::parse_quote!({
            /// Horizontal position.
            x: i32
        }));
        assert_eq!(fields[0].doc(), Some("Horizontal position."));
    }

    #[test]
    fn pub_field_is_not_private() {
        let fields = parse(syn::parse_quote!({ pub x: i32 }));
        assert!(!fields[0].is_private());
    }
}
