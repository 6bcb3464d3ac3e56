// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Record derive macro implementation.
//!
//! This module contains all code generation logic for the `#[derive(Record)]`
//! macro. It parses the record definition once and hands it to one generator
//! per concern.
//!
//! # Architecture
//!
//! ```text
//! record.rs (orchestrator)
//! │
//! ├── parse/          → Attribute parsing and validation (RecordDef, FieldDef)
//! │
//! ├── constructor.rs  → `new`
//! ├── accessors.rs    → One read-only accessor per field
//! ├── equality.rs     → PartialEq, Eq
//! ├── hashing.rs      → Record trait, Hash
//! ├── display.rs      → Display, Debug
//! ├── mutation.rs     → `with_<field>` copy-updates
//! ├── setters.rs      → `set_<field>` in-place updates
//! └── destructure.rs  → `destructure`, `into_parts`
//! ```
//!
//! # Generated Code
//!
//! For a record like:
//!
//! ```rust,ignore
//! #[derive(Record)]
//! #[record(with)]
//! pub struct Point {
//!     x: i32,
//!     y: i32
//! }
//! ```
//!
//! The macro generates:
//!
//! | Item | Purpose |
//! |------|---------|
//! | `Point::new(x, y)` | Positional constructor |
//! | `Point::x()`, `Point::y()` | Read-only accessors |
//! | `Point::with_x(x)`, `Point::with_y(y)` | Copy with one field replaced |
//! | `impl PartialEq, Eq, Hash` | Structural equality and hashing |
//! | `impl Record` | `NAME`, `FIELD_NAMES`, `record_hash` |
//! | `impl Display, Debug` | `Point(3, 7)` |

mod accessors;
mod constructor;
mod destructure;
mod display;
mod equality;
mod hashing;
mod mutation;
pub mod parse;
mod setters;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use self::parse::RecordDef;

/// Main entry point for the Record derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match RecordDef::from_derive_input(&input) {
        Ok(record) => generate(&record).into(),
        Err(err) => err.write_errors().into()
    }
}

fn generate(record: &RecordDef) -> TokenStream2 {
    let constructor = constructor::generate(record);
    let accessors = accessors::generate(record);
    let equality = equality::generate(record);
    let hashing = hashing::generate(record);
    let display = display::generate(record);
    let mutation = mutation::generate(record);
    let setters = setters::generate(record);
    let destructure = destructure::generate(record);

    quote! {
        #constructor
        #accessors
        #equality
        #hashing
        #display
        #mutation
        #setters
        #destructure
    }
}
