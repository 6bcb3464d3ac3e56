// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Attribute Quick Reference
//!
//! ## Struct-Level `#[record(...)]`
//!
//! ```rust,ignore
//! #[derive(Record)]
//! #[record(
//!     no_constructor,        // Optional: skip `new`
//!     destructure,           // Optional: generate `destructure` and `into_parts`
//!     with,                  // Optional: `with_<field>` for every field
//!     setters,               // Optional: `set_<field>` for every field
//!     no_hash,               // Optional: skip `Eq`, `Hash` and `Record`
//!     no_debug,              // Optional: skip the generated `Debug`
//!     crate = "record_core"  // Optional: runtime crate path (default: `::record_derive`)
//! )]
//! pub struct Point { /* ... */ }
//! ```
//!
//! ## Field-Level `#[record(...)]`
//!
//! ```rust,ignore
//! pub struct Person {
//!     #[record(with)]        // `with_first_name` even without struct-level `with`
//!     first_name: String,
//!
//!     #[record(no_with)]     // Excluded from struct-level `with`
//!     middle_names: Vec<String>,
//!
//!     #[record(setter)]      // `set_last_name(&mut self, ..)`
//!     last_name: String,
//!
//!     #[record(copy)]        // Accessor returns `u8` instead of `&u8`
//!     age: u8,
//! }
//! ```
//!
//! # Generated Code Overview
//!
//! | Generated Item | Condition |
//! |----------------|-----------|
//! | `fn new(..) -> Self` | unless `no_constructor` |
//! | `fn <field>(&self) -> &T` | always |
//! | `impl PartialEq` | always |
//! | `impl Eq`, `impl Hash`, `impl Record` | unless `no_hash` |
//! | `impl Display` | always |
//! | `impl Debug` | unless `no_debug` |
//! | `fn with_<field>(&self, T) -> Self` | `with` on the struct or field |
//! | `fn set_<field>(&mut self, T)` | `setters` on the struct, `setter` on the field |
//! | `fn destructure(&self, &mut T1, ..)`, `fn into_parts(self)` | `destructure` |
//!
//! # Field Contract
//!
//! Record fields are private and read through accessors, so the derive
//! rejects at compile time:
//!
//! - `pub` fields
//! - names starting with `_`
//! - names that collide with generated methods (`new`, `destructure`,
//!   `into_parts`, `record_hash`)
//! - `with_<f>` / `set_<f>` methods that collide with another field or
//!   with each other
//! - tuple structs, unit structs, enums and unions

mod record;
mod utils;

use proc_macro::TokenStream;

/// Derive macro for immutable record value types.
///
/// # Example
///
/// ```rust,ignore
/// use record_derive::Record;
///
/// #[derive(Clone, Record)]
/// #[record(with)]
/// pub struct Point {
///     x: i32,
///     y: i32
/// }
///
/// let p = Point::new(3, 7);
/// assert_eq!(*p.x(), 3);
/// assert_eq!(p.to_string(), "Point(3, 7)");
/// assert_eq!(p.with_x(9), Point::new(9, 7));
/// ```
///
/// # Hashing
///
/// The generated `Hash` writes [`Record::record_hash`] into the hasher. The
/// hash starts at `486187739` and folds over fields in declaration order:
///
/// ```text
/// hash = (hash * 15485863) ^ hash_of(field_name) ^ hash_of(field_value)
/// ```
///
/// [`Record::record_hash`]: https://docs.rs/record-core/latest/record_core/trait.Record.html
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive(input)
}
