// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for the Record derive macro.
//!
//! Both struct-level and field-level `#[record(...)]` attributes are parsed
//! with [`darling`]. After parsing, the whole definition is validated against
//! the field contract so that every violation is reported in one compile
//! error batch.
//!
//! # Architecture
//!
//! ```text
//! parse.rs (coordinator)
//! ├── record.rs        - Record-level parsing (RecordDef)
//! │   ├── attrs.rs     - RecordAttrs (darling parsing struct)
//! │   ├── def.rs       - RecordDef structure
//! │   ├── constructor.rs - RecordDef::from_derive_input
//! │   ├── accessors.rs - Field selection helpers
//! │   └── validate.rs  - Field contract checks
//! └── field.rs         - Field-level parsing (FieldDef)
//!     └── access.rs    - FieldAttrs (with, no_with, setter, copy)
//! ```
//!
//! # Data Structures
//!
//! ```text
//! RecordDef
//! ├── ident: Ident          (struct name, e.g., "Point")
//! ├── vis: Visibility       (propagated to generated methods)
//! ├── generics: Generics    (propagated to every impl)
//! ├── options: RecordOptions
//! │   ├── constructor: bool
//! │   ├── destructure: bool
//! │   ├── with: bool
//! │   ├── setters: bool
//! │   ├── hash: bool
//! │   └── debug: bool
//! ├── krate: Path           (runtime crate path)
//! └── fields: Vec<FieldDef>
//!     └── FieldDef
//!         ├── ident: Ident
//!         ├── ty: Type
//!         ├── vis: Visibility
//!         ├── access: FieldAttrs
//!         └── doc: Option<String>
//! ```

mod field;
mod record;

pub use field::FieldDef;
pub use record::RecordDef;
