// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dynamic record instances.

use std::{
    fmt,
    hash::{Hash, Hasher}
};

use super::{schema::RecordType, value::Value};
use crate::{RecordError, RecordHasher, hash_of};

/// Values bound to a [`RecordType`], in declaration order.
///
/// Created by [`RecordType::construct`] or [`RecordInstance::with_field`].
/// Equality, hashing and rendering follow the same rules as generated
/// records.
#[derive(Clone)]
pub struct RecordInstance {
    ty:     RecordType,
    values: Vec<Value>
}

impl RecordInstance {
    pub(super) fn from_parts(ty: RecordType, values: Vec<Value>) -> Self {
        Self {
            ty,
            values
        }
    }

    /// Type of this instance.
    #[must_use]
    pub fn record_type(&self) -> &RecordType {
        &self.ty
    }

    /// Read one field.
    ///
    /// # Errors
    ///
    /// [`RecordError::UnknownField`] if the type does not declare `field`.
    pub fn get(&self, field: &str) -> Result<&Value, RecordError> {
        let index = self.ty.resolve(field)?;
        Ok(&self.values[index])
    }

    /// All values in declaration order.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// `(name, value)` pairs in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.ty.field_names().zip(self.values.iter())
    }

    /// Copy with one field replaced.
    ///
    /// The receiver is left untouched.
    ///
    /// # Errors
    ///
    /// - [`RecordError::UnknownField`] for an undeclared field
    /// - [`RecordError::Disabled`] if the field is not mutable
    /// - [`RecordError::Type`] if `value` does not match the field type
    pub fn with_field(&self, field: &str, value: impl Into<Value>) -> Result<Self, RecordError> {
        let index = self.ty.resolve(field)?;
        if !self.ty.is_mutable(&self.ty.fields()[index]) {
            return Err(self.ty.disabled("with-field mutation"));
        }

        let value = value.into();
        self.ty.check_value(index, &value)?;

        let mut values = self.values.clone();
        values[index] = value;
        Ok(Self::from_parts(self.ty.clone(), values))
    }

    /// Replace one field in place.
    ///
    /// # Errors
    ///
    /// - [`RecordError::Disabled`] unless the type enables setters
    /// - [`RecordError::UnknownField`] for an undeclared field
    /// - [`RecordError::Type`] if `value` does not match the field type
    pub fn set_field(&mut self, field: &str, value: impl Into<Value>) -> Result<(), RecordError> {
        if !self.ty.options().setters {
            return Err(self.ty.disabled("setters"));
        }
        let index = self.ty.resolve(field)?;

        let value = value.into();
        self.ty.check_value(index, &value)?;
        self.values[index] = value;
        Ok(())
    }

    /// Copy every field value into `outputs`, in declaration order.
    ///
    /// Sequences are cloned, so modifying an output never reaches the
    /// record.
    ///
    /// # Errors
    ///
    /// - [`RecordError::Disabled`] unless the type enables destructuring
    /// - [`RecordError::Arity`] if `outputs.len()` differs from the field
    ///   count
    pub fn destructure(&self, outputs: &mut [Value]) -> Result<(), RecordError> {
        if !self.ty.options().destructure {
            return Err(self.ty.disabled("destructuring"));
        }
        self.ty.check_arity(outputs.len())?;
        outputs.clone_from_slice(&self.values);
        Ok(())
    }

    /// Move the values out, in declaration order.
    ///
    /// # Errors
    ///
    /// [`RecordError::Disabled`] unless the type enables destructuring.
    pub fn into_values(self) -> Result<Vec<Value>, RecordError> {
        if !self.ty.options().destructure {
            return Err(self.ty.disabled("destructuring"));
        }
        Ok(self.values)
    }

    /// Field-name-aware hash, same fold as generated records.
    #[must_use]
    pub fn record_hash(&self) -> u64 {
        self.fields()
            .fold(RecordHasher::new(), |hasher, (name, value)| {
                hasher.combine(hash_of(name), hash_of(value))
            })
            .finish()
    }
}

impl PartialEq for RecordInstance {
    fn eq(&self, other: &Self) -> bool {
        self.ty == other.ty && self.values == other.values
    }
}

impl Eq for RecordInstance {}

impl Hash for RecordInstance {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.record_hash());
    }
}

impl fmt::Display for RecordInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ty.name())?;
        f.write_str("(")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(value, f)?;
        }
        f.write_str(")")
    }
}

impl fmt::Debug for RecordInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
