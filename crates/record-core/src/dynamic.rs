// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dynamic records.
//!
//! Runtime counterpart of `#[derive(Record)]` for record shapes that are only
//! known while the program runs. The schema is declared once and shared by
//! every instance; values are checked against it eagerly.
//!
//! # Module Structure
//!
//! ```text
//! dynamic/
//! ├── schema.rs   - RecordType, FieldSpec, TypeTag, RecordOptions, builder
//! ├── value.rs    - Value enum and its rendering
//! └── instance.rs - RecordInstance operations
//! ```
//!
//! # Example
//!
//! ```rust
//! use record_core::{RecordType, TypeTag, Value};
//!
//! let point = RecordType::builder("Point")
//!     .mutable_field("x", TypeTag::Int)
//!     .field("y", TypeTag::Int)
//!     .build()
//!     .unwrap();
//!
//! let a = point.construct(vec![Value::Int(3), Value::Int(7)]).unwrap();
//! let b = a.with_field("x", Value::Int(9)).unwrap();
//!
//! assert_eq!(a.to_string(), "Point(3, 7)");
//! assert_eq!(b.to_string(), "Point(9, 7)");
//! ```

mod instance;
mod schema;
mod value;

pub use instance::RecordInstance;
pub use schema::{FieldSpec, RecordOptions, RecordType, RecordTypeBuilder, TypeTag};
pub use value::Value;
