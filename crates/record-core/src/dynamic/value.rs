// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dynamic field values.

use std::fmt;

use super::{instance::RecordInstance, schema::TypeTag};

/// A single dynamic field value.
///
/// Rendering follows the record format: strings and chars are quoted and
/// escaped, sequences are bracketed, nested records render as
/// `Name(v1, v2)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    UInt(u64),
    /// Unsigned byte.
    Byte(u8),
    /// Character.
    Char(char),
    /// String.
    Str(String),
    /// Sequence of values.
    Seq(Vec<Value>),
    /// Nested record.
    Record(RecordInstance)
}

impl Value {
    /// Check the value against a declared type.
    ///
    /// Empty sequences match every sequence type.
    #[must_use]
    pub fn matches(&self, ty: &TypeTag) -> bool {
        match (self, ty) {
            (Self::Bool(_), TypeTag::Bool)
            | (Self::Int(_), TypeTag::Int)
            | (Self::UInt(_), TypeTag::UInt)
            | (Self::Byte(_), TypeTag::Byte)
            | (Self::Char(_), TypeTag::Char)
            | (Self::Str(_), TypeTag::Str) => true,
            (Self::Seq(items), TypeTag::Seq(element)) => items.iter().all(|v| v.matches(element)),
            (Self::Record(instance), TypeTag::Record(ty)) => instance.record_type() == ty,
            _ => false
        }
    }

    /// Describe how the value fails to match `ty`, for error messages.
    ///
    /// For a sequence the first offending element is named, so a mixed
    /// sequence does not read as the expected type.
    pub(super) fn mismatch(&self, ty: &TypeTag) -> String {
        if let (Self::Seq(items), TypeTag::Seq(element)) = (self, ty) {
            if let Some((index, item)) = items.iter().enumerate().find(|(_, v)| !v.matches(element)) {
                return format!("[{}] at index {index}", item.type_name());
            }
        }
        self.type_name()
    }

    /// Human-readable type of the value, used in error messages.
    #[must_use]
    pub fn type_name(&self) -> String {
        match self {
            Self::Bool(_) => "bool".to_string(),
            Self::Int(_) => "int".to_string(),
            Self::UInt(_) => "uint".to_string(),
            Self::Byte(_) => "byte".to_string(),
            Self::Char(_) => "char".to_string(),
            Self::Str(_) => "str".to_string(),
            Self::Seq(items) => match items.first() {
                Some(first) => format!("[{}]", first.type_name()),
                None => "[]".to_string()
            },
            Self::Record(instance) => instance.record_type().name().to_string()
        }
    }

    /// Integer payload.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None
        }
    }

    /// Unsigned integer payload.
    #[must_use]
    pub fn as_uint(&self) -> Option<u64> {
        match self {
            Self::UInt(v) => Some(*v),
            _ => None
        }
    }

    /// Byte payload.
    #[must_use]
    pub fn as_byte(&self) -> Option<u8> {
        match self {
            Self::Byte(v) => Some(*v),
            _ => None
        }
    }

    /// Boolean payload.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None
        }
    }

    /// Character payload.
    #[must_use]
    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(v) => Some(*v),
            _ => None
        }
    }

    /// String payload.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(v) => Some(v),
            _ => None
        }
    }

    /// Sequence payload.
    #[must_use]
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Self::Seq(v) => Some(v),
            _ => None
        }
    }

    /// Mutable sequence payload.
    pub fn as_seq_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Self::Seq(v) => Some(v),
            _ => None
        }
    }

    /// Nested record payload.
    #[must_use]
    pub fn as_record(&self) -> Option<&RecordInstance> {
        match self {
            Self::Record(v) => Some(v),
            _ => None
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Byte(v) => write!(f, "{v}"),
            Self::Char(v) => write!(f, "{v:?}"),
            Self::Str(v) => write!(f, "{v:?}"),
            Self::Seq(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(item, f)?;
                }
                f.write_str("]")
            }
            Self::Record(instance) => fmt::Display::fmt(instance, f)
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::UInt(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Self::Byte(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Self::Char(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl From<RecordInstance> for Value {
    fn from(v: RecordInstance) -> Self {
        Self::Record(v)
    }
}
