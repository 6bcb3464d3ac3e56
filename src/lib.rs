// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # record-derive
//!
//! One crate, both halves. Re-exports:
//! - [`Record`](macro@Record) derive macro from `record-derive-impl`
//! - All types from `record-core` ([`RecordHasher`], [`RecordType`],
//!   [`RecordError`], the [`Record`](trait@Record) trait)
//!
//! # Quick Start
//!
//! ```rust
//! use record_derive::Record;
//!
//! #[derive(Clone, Record)]
//! #[record(with)]
//! pub struct Point {
//!     x: i32,
//!     y: i32
//! }
//!
//! let p = Point::new(3, 7);
//! assert_eq!(p.to_string(), "Point(3, 7)");
//! assert_eq!(p.with_y(0), Point::new(3, 0));
//! assert_eq!(*p.x(), 3);
//! ```

pub use record_core::*;
pub use record_derive_impl::Record;
