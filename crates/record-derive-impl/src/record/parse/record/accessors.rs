// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Accessor methods for RecordDef.

use syn::{Ident, ext::IdentExt};

use super::{super::field::FieldDef, RecordDef};

impl RecordDef {
    /// Get all fields in declaration order.
    pub fn all_fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Get fields that receive a `with_<field>` method.
    ///
    /// Returns fields where:
    /// - `#[record(with)]` is on the field, OR
    /// - `#[record(with)]` is on the struct and the field is not `no_with`
    pub fn with_fields(&self) -> Vec<&FieldDef> {
        self.fields
            .iter()
            .filter(|f| f.access.with || (self.options.with && !f.access.no_with))
            .collect()
    }

    /// Get fields that receive a `set_<field>` method.
    pub fn setter_fields(&self) -> Vec<&FieldDef> {
        self.fields
            .iter()
            .filter(|f| self.options.setters || f.access.setter)
            .collect()
    }

    /// Get the record name as an identifier.
    pub fn name(&self) -> &Ident {
        &self.ident
    }

    /// Get the record name as a string, without the `r#` prefix.
    pub fn name_str(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Get field names as strings, in declaration order.
    pub fn field_names(&self) -> Vec<String> {
        self.fields.iter().map(FieldDef::name_str).collect()
    }

    /// Get the runtime crate path.
    pub fn krate(&self) -> &syn::Path {
        &self.krate
    }

    /// Check if the positional constructor should be generated.
    pub fn has_constructor(&self) -> bool {
        self.options.constructor
    }

    /// Check if destructuring methods should be generated.
    pub fn has_destructure(&self) -> bool {
        self.options.destructure
    }

    /// Check if `Eq`, `Hash` and `Record` should be generated.
    pub fn has_hash(&self) -> bool {
        self.options.hash
    }

    /// Check if `Debug` should be generated.
    pub fn has_debug(&self) -> bool {
        self.options.debug
    }
}
