// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! RecordDef constructor (from_derive_input).

use darling::FromDeriveInput;
use syn::DeriveInput;

use super::{
    super::field::FieldDef,
    RecordAttrs, RecordDef, RecordOptions,
    validate::validate
};

impl RecordDef {
    /// Parse record definition from syn's `DeriveInput`.
    ///
    /// 1. Parses record-level attributes using darling
    /// 2. Parses every named field with its `#[record(...)]` options
    /// 3. Validates the field contract
    ///
    /// # Errors
    ///
    /// - Applied to an enum, union, tuple struct or unit struct
    /// - Unknown or malformed `#[record(...)]` options
    /// - Any field contract violation (all of them, accumulated)
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = RecordAttrs::from_derive_input(input)?;

        let fields: Vec<FieldDef> = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => {
                    let mut errors = darling::Error::accumulator();
                    let fields: Vec<FieldDef> = named
                        .named
                        .iter()
                        .filter_map(|f| errors.handle(FieldDef::from_field(f)))
                        .collect();
                    errors.finish()?;
                    fields
                }
                _ => {
                    return Err(darling::Error::custom("Record requires named fields")
                        .with_span(&input.ident));
                }
            },
            _ => {
                return Err(
                    darling::Error::custom("Record can only be derived for structs")
                        .with_span(&input.ident)
                );
            }
        };

        let record = Self {
            ident: attrs.ident,
            vis: attrs.vis,
            generics: attrs.generics,
            options: RecordOptions {
                constructor: !attrs.no_constructor,
                destructure: attrs.destructure,
                with:        attrs.with,
                setters:     attrs.setters,
                hash:        !attrs.no_hash,
                debug:       !attrs.no_debug
            },
            krate: attrs.krate,
            fields
        };

        validate(&record)?;
        Ok(record)
    }
}
