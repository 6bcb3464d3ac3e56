// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Errors reported by the dynamic record engine.
//!
//! All variants describe programmer errors: a record type declared with a bad
//! field name, or an instance built or used against its own declaration. The
//! derive macro reports the same conditions at compile time instead.

use thiserror::Error;

/// Error returned by [`RecordType`](crate::RecordType) and
/// [`RecordInstance`](crate::RecordInstance) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Wrong number of values or output slots.
    #[error("record `{record}` has {expected} fields, got {actual} values")]
    Arity {
        /// Record type name.
        record:   String,
        /// Declared field count.
        expected: usize,
        /// Supplied value or slot count.
        actual:   usize
    },

    /// A value does not match the declared field type.
    #[error("field `{record}.{field}` expects {expected}, got {actual}")]
    Type {
        /// Record type name.
        record:   String,
        /// Field name.
        field:    String,
        /// Declared type.
        expected: String,
        /// Type of the supplied value.
        actual:   String
    },

    /// A declared field name breaks the naming contract.
    #[error("invalid field name `{name}` in record `{record}`: {reason}")]
    InvalidFieldName {
        /// Record type name.
        record: String,
        /// Offending field name.
        name:   String,
        /// Which rule was broken.
        reason: &'static str
    },

    /// Lookup of a field the record type does not declare.
    #[error("record `{record}` has no field `{field}`")]
    UnknownField {
        /// Record type name.
        record: String,
        /// Requested field name.
        field:  String
    },

    /// The operation is not enabled by the record type's options.
    #[error("{operation} is not enabled for record `{record}`")]
    Disabled {
        /// Record type name.
        record:    String,
        /// Operation that was attempted.
        operation: &'static str
    }
}
