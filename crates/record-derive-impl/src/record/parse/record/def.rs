// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! RecordDef struct definition.
//!
//! [`RecordDef`] is created once per macro expansion and passed to every
//! generator. It owns all its data.

use syn::{Generics, Ident, Visibility};

use super::super::field::FieldDef;

/// Which optional items to generate.
///
/// Resolved from [`RecordAttrs`](super::RecordAttrs): the `no_*` flags are
/// inverted so every field reads as "generate this".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordOptions {
    /// Generate `new`.
    pub constructor: bool,

    /// Generate `destructure` and `into_parts`.
    pub destructure: bool,

    /// Generate `with_<field>` for every field.
    pub with: bool,

    /// Generate `set_<field>` for every field.
    pub setters: bool,

    /// Generate `Eq`, `Hash` and `Record`.
    pub hash: bool,

    /// Generate `Debug`.
    pub debug: bool
}

/// Complete parsed record definition.
///
/// # Construction
///
/// ```rust,ignore
/// let record = RecordDef::from_derive_input(&input)?;
/// ```
#[derive(Debug)]
pub struct RecordDef {
    /// Struct identifier (e.g., `Point`).
    pub ident: Ident,

    /// Struct visibility, propagated to generated methods.
    pub vis: Visibility,

    /// Struct generics, propagated to every impl block.
    pub generics: Generics,

    /// Generation options.
    pub options: RecordOptions,

    /// Path to the runtime crate.
    pub krate: syn::Path,

    /// Fields in declaration order.
    pub fields: Vec<FieldDef>
}
