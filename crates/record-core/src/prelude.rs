// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports.
//!
//! ```rust
//! use record_core::prelude::*;
//! ```

pub use crate::{
    Record, RecordError, RecordHasher, RecordInstance, RecordOptions, RecordType, TypeTag, Value
};
