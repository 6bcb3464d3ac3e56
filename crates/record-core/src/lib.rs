// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core traits and types for record-derive.
//!
//! This crate provides the runtime half of the record engine. Code generated
//! by `#[derive(Record)]` calls into it, and it can also be used on its own
//! for records whose shape is only known at run time.
//!
//! # Overview
//!
//! - [`Record`]: Trait implemented by every generated record type
//! - [`RecordHasher`]: Field-name-aware hash combinator
//! - [`RecordType`] / [`RecordInstance`]: Dynamic records
//! - [`RecordError`]: Errors reported by the dynamic engine
//! - [`prelude`]: Convenient re-exports
//!
//! # Usage
//!
//! Most users should use `record-derive` directly, which re-exports this
//! crate. For dynamic records:
//!
//! ```rust
//! use record_core::{RecordType, TypeTag, Value};
//!
//! let point = RecordType::builder("Point")
//!     .field("x", TypeTag::Int)
//!     .field("y", TypeTag::Int)
//!     .build()
//!     .unwrap();
//!
//! let p = point.construct(vec![Value::Int(3), Value::Int(7)]).unwrap();
//! assert_eq!(p.to_string(), "Point(3, 7)");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod dynamic;
mod error;
mod hash;
pub mod prelude;

pub use dynamic::{
    FieldSpec, RecordInstance, RecordOptions, RecordType, RecordTypeBuilder, TypeTag, Value
};
pub use error::RecordError;
pub use hash::{HASH_MULTIPLIER, HASH_SEED, RecordHasher, hash_of};

/// Base trait for record value types.
///
/// Implemented by `#[derive(Record)]` unless `#[record(no_hash)]` is set.
/// Exposes the static shape of the record and its field-name-aware hash.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Record)]
/// struct Point {
///     x: i32,
///     y: i32
/// }
///
/// assert_eq!(Point::NAME, "Point");
/// assert_eq!(Point::FIELD_NAMES, &["x", "y"]);
/// ```
pub trait Record {
    /// Record type name, used as the prefix of the rendered form.
    const NAME: &'static str;

    /// Field names in declaration order.
    const FIELD_NAMES: &'static [&'static str];

    /// Hash of the record combining field names and values.
    ///
    /// Equal records always produce equal hashes. The generated
    /// [`Hash`](std::hash::Hash) impl feeds this value into the caller's
    /// hasher, so nested records hash through their own `record_hash`.
    fn record_hash(&self) -> u64;

    /// Number of fields in the record.
    fn arity() -> usize {
        Self::FIELD_NAMES.len()
    }
}
