// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Record-level attribute parsing with darling.
//!
//! # Supported Attributes
//!
//! | Attribute | Default | Description |
//! |-----------|---------|-------------|
//! | `no_constructor` | `false` | Skip the positional constructor |
//! | `destructure` | `false` | Generate `destructure` and `into_parts` |
//! | `with` | `false` | Generate `with_<field>` for every field |
//! | `setters` | `false` | Generate `set_<field>` for every field |
//! | `no_hash` | `false` | Skip `Eq`, `Hash` and the `Record` trait |
//! | `no_debug` | `false` | Skip the generated `Debug` |
//! | `crate` | `::record_derive` | Path to the runtime crate |

use darling::FromDeriveInput;
use syn::{Generics, Ident, Visibility};

/// Default runtime crate path used by generated code.
pub fn default_crate_path() -> syn::Path {
    syn::parse_quote!(::record_derive)
}

/// Record-level attributes parsed from `#[record(...)]`.
///
/// Internal struct used by darling. The public API uses
/// [`RecordDef`](super::RecordDef).
///
/// # Example
///
/// ```rust,ignore
/// #[record(with, destructure, crate = "record_core")]
/// ```
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(record), supports(struct_named))]
pub struct RecordAttrs {
    /// Struct identifier (e.g., `Point`).
    pub ident: Ident,

    /// Struct visibility.
    pub vis: Visibility,

    /// Struct generics.
    pub generics: Generics,

    /// Skip `new`.
    ///
    /// Use when the record needs a validating constructor of its own.
    #[darling(default)]
    pub no_constructor: bool,

    /// Generate `destructure(&self, &mut ..)` and `into_parts(self)`.
    #[darling(default)]
    pub destructure: bool,

    /// Generate `with_<field>` for every field not marked `no_with`.
    #[darling(default)]
    pub with: bool,

    /// Generate `set_<field>` for every field.
    ///
    /// Setters take `&mut self`, so a record behind a shared reference or
    /// used as a map key still cannot change.
    #[darling(default)]
    pub setters: bool,

    /// Skip `Eq`, `Hash` and `Record`, for records holding floats.
    #[darling(default)]
    pub no_hash: bool,

    /// Skip the generated `Debug`.
    #[darling(default)]
    pub no_debug: bool,

    /// Path to the runtime crate.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// #[record(crate = "record_core")]
    /// #[record(crate = "::my_app::records")]
    /// ```
    #[darling(rename = "crate", default = "default_crate_path")]
    pub krate: syn::Path
}
