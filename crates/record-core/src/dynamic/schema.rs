// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Record type declarations.

use std::{collections::HashSet, fmt, sync::Arc};

use super::{instance::RecordInstance, value::Value};
use crate::RecordError;

/// Declared type of a dynamic field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeTag {
    /// `bool`
    Bool,
    /// Signed 64-bit integer.
    Int,
    /// Unsigned 64-bit integer.
    UInt,
    /// Unsigned byte.
    Byte,
    /// Unicode scalar value.
    Char,
    /// UTF-8 string.
    Str,
    /// Homogeneous sequence of the inner type.
    Seq(Box<TypeTag>),
    /// Nested record of the given type.
    Record(RecordType)
}

impl TypeTag {
    /// Sequence of `element`.
    #[must_use]
    pub fn seq(element: TypeTag) -> Self {
        Self::Seq(Box::new(element))
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::Int => f.write_str("int"),
            Self::UInt => f.write_str("uint"),
            Self::Byte => f.write_str("byte"),
            Self::Char => f.write_str("char"),
            Self::Str => f.write_str("str"),
            Self::Seq(element) => write!(f, "[{element}]"),
            Self::Record(ty) => f.write_str(ty.name())
        }
    }
}

/// One declared field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name, unique within the record.
    pub name:    String,
    /// Declared value type.
    pub ty:      TypeTag,
    /// Whether `with_field` may replace this field.
    pub mutable: bool
}

impl FieldSpec {
    /// Immutable field.
    pub fn new(name: impl Into<String>, ty: TypeTag) -> Self {
        Self {
            name: name.into(),
            ty,
            mutable: false
        }
    }

    /// Mark the field as replaceable through `with_field`.
    #[must_use]
    pub fn mutable(mut self) -> Self {
        self.mutable = true;
        self
    }
}

/// Generation flags of a record type.
///
/// | Flag | Effect when set |
/// |------|-----------------|
/// | `suppress_constructor` | [`RecordType::construct`] is refused |
/// | `destructure` | [`RecordInstance::destructure`] and `into_values` are allowed |
/// | `mutation` | every field is replaceable through `with_field` |
/// | `setters` | [`RecordInstance::set_field`] is allowed |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordOptions {
    /// Refuse positional construction.
    pub suppress_constructor: bool,
    /// Allow copying values out into caller slots.
    pub destructure:          bool,
    /// Allow `with_field` on every field.
    pub mutation:             bool,
    /// Allow in-place mutation.
    pub setters:              bool
}

#[derive(Debug, PartialEq, Eq)]
struct Schema {
    name:    String,
    fields:  Vec<FieldSpec>,
    options: RecordOptions
}

/// Shared, immutable record type.
///
/// Cloning is cheap: all clones point at the same schema. Two types are equal
/// when they are the same schema or structurally identical ones.
#[derive(Clone)]
pub struct RecordType {
    inner: Arc<Schema>
}

impl RecordType {
    /// Declare a record type, validating every field name.
    ///
    /// # Errors
    ///
    /// [`RecordError::InvalidFieldName`] when a name is not an identifier,
    /// starts with an underscore, or is declared twice.
    pub fn new(
        name: impl Into<String>,
        fields: Vec<FieldSpec>,
        options: RecordOptions
    ) -> Result<Self, RecordError> {
        let name = name.into();
        let mut seen = HashSet::new();

        for field in &fields {
            let invalid = |reason| RecordError::InvalidFieldName {
                record: name.clone(),
                name: field.name.clone(),
                reason
            };

            check_identifier(&field.name).map_err(invalid)?;
            if !seen.insert(field.name.as_str()) {
                return Err(invalid("duplicate field name"));
            }
        }

        Ok(Self {
            inner: Arc::new(Schema {
                name,
                fields,
                options
            })
        })
    }

    /// Start declaring a record type named `name`.
    pub fn builder(name: impl Into<String>) -> RecordTypeBuilder {
        RecordTypeBuilder {
            name:    name.into(),
            fields:  Vec::new(),
            options: RecordOptions::default()
        }
    }

    /// Record type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Declared fields in order.
    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.inner.fields
    }

    /// Field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.inner.fields.iter().map(|f| f.name.as_str())
    }

    /// Generation flags.
    #[must_use]
    pub fn options(&self) -> RecordOptions {
        self.inner.options
    }

    /// Number of fields.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.inner.fields.len()
    }

    /// Position of a field by name.
    #[must_use]
    pub fn position(&self, field: &str) -> Option<usize> {
        self.inner.fields.iter().position(|f| f.name == field)
    }

    /// Whether `with_field` may replace `field`.
    #[must_use]
    pub fn is_mutable(&self, field: &FieldSpec) -> bool {
        self.inner.options.mutation || field.mutable
    }

    /// Build an instance from one value per field, in declaration order.
    ///
    /// # Errors
    ///
    /// - [`RecordError::Disabled`] if the constructor is suppressed
    /// - [`RecordError::Arity`] on a wrong value count
    /// - [`RecordError::Type`] on the first mismatching value
    pub fn construct(&self, values: Vec<Value>) -> Result<RecordInstance, RecordError> {
        if self.inner.options.suppress_constructor {
            return Err(self.disabled("positional construction"));
        }
        self.check_arity(values.len())?;
        for (index, value) in values.iter().enumerate() {
            self.check_value(index, value)?;
        }
        Ok(RecordInstance::from_parts(self.clone(), values))
    }

    pub(super) fn resolve(&self, field: &str) -> Result<usize, RecordError> {
        self.position(field)
            .ok_or_else(|| RecordError::UnknownField {
                record: self.name().to_string(),
                field:  field.to_string()
            })
    }

    pub(super) fn check_arity(&self, actual: usize) -> Result<(), RecordError> {
        if actual == self.arity() {
            return Ok(());
        }
        Err(RecordError::Arity {
            record: self.name().to_string(),
            expected: self.arity(),
            actual
        })
    }

    pub(super) fn check_value(&self, index: usize, value: &Value) -> Result<(), RecordError> {
        let field = &self.inner.fields[index];
        if value.matches(&field.ty) {
            return Ok(());
        }
        Err(RecordError::Type {
            record:   self.name().to_string(),
            field:    field.name.clone(),
            expected: field.ty.to_string(),
            actual:   value.mismatch(&field.ty)
        })
    }

    pub(super) fn disabled(&self, operation: &'static str) -> RecordError {
        RecordError::Disabled {
            record: self.name().to_string(),
            operation
        }
    }
}

impl PartialEq for RecordType {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.inner == other.inner
    }
}

impl Eq for RecordType {}

impl fmt::Debug for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordType")
            .field("name", &self.inner.name)
            .field("fields", &self.inner.fields)
            .field("options", &self.inner.options)
            .finish()
    }
}

/// Builder for [`RecordType`].
///
/// ```rust
/// use record_core::{RecordType, TypeTag};
///
/// let person = RecordType::builder("Person")
///     .field("first_name", TypeTag::Str)
///     .field("middle_names", TypeTag::seq(TypeTag::Str))
///     .field("last_name", TypeTag::Str)
///     .field("age", TypeTag::Byte)
///     .destructure()
///     .build()
///     .unwrap();
///
/// assert_eq!(person.arity(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct RecordTypeBuilder {
    name:    String,
    fields:  Vec<FieldSpec>,
    options: RecordOptions
}

impl RecordTypeBuilder {
    /// Append an immutable field.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, ty: TypeTag) -> Self {
        self.fields.push(FieldSpec::new(name, ty));
        self
    }

    /// Append a field replaceable through `with_field`.
    #[must_use]
    pub fn mutable_field(mut self, name: impl Into<String>, ty: TypeTag) -> Self {
        self.fields.push(FieldSpec::new(name, ty).mutable());
        self
    }

    /// Replace all generation flags at once.
    #[must_use]
    pub fn options(mut self, options: RecordOptions) -> Self {
        self.options = options;
        self
    }

    /// Refuse positional construction.
    #[must_use]
    pub fn suppress_constructor(mut self) -> Self {
        self.options.suppress_constructor = true;
        self
    }

    /// Allow destructuring.
    #[must_use]
    pub fn destructure(mut self) -> Self {
        self.options.destructure = true;
        self
    }

    /// Allow `with_field` on every field.
    #[must_use]
    pub fn mutation(mut self) -> Self {
        self.options.mutation = true;
        self
    }

    /// Allow in-place setters.
    #[must_use]
    pub fn setters(mut self) -> Self {
        self.options.setters = true;
        self
    }

    /// Validate and freeze the declaration.
    ///
    /// # Errors
    ///
    /// See [`RecordType::new`].
    pub fn build(self) -> Result<RecordType, RecordError> {
        RecordType::new(self.name, self.fields, self.options)
    }
}

/// Field names are ASCII identifiers without a leading underscore.
fn check_identifier(name: &str) -> Result<(), &'static str> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err("empty name");
    };
    if first == '_' {
        return Err("leading underscore is reserved");
    }
    if !first.is_ascii_alphabetic() {
        return Err("must start with a letter");
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err("only letters, digits and underscores are allowed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point() -> RecordType {
        RecordType::builder("Point")
            .field("x", TypeTag::Int)
            .field("y", TypeTag::Int)
            .build()
            .unwrap()
    }

    #[test]
    fn builder_keeps_field_order() {
        let ty = point();
        assert_eq!(ty.field_names().collect::<Vec<_>>(), vec!["x", "y"]);
        assert_eq!(ty.arity(), 2);
        assert_eq!(ty.position("y"), Some(1));
        assert_eq!(ty.position("z"), None);
    }

    #[test]
    fn default_options_are_off() {
        let options = point().options();
        assert_eq!(options, RecordOptions::default());
        assert!(!options.suppress_constructor);
        assert!(!options.destructure);
        assert!(!options.mutation);
        assert!(!options.setters);
    }

    #[test]
    fn duplicate_field_rejected() {
        let err = RecordType::builder("Point")
            .field("x", TypeTag::Int)
            .field("x", TypeTag::Int)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            RecordError::InvalidFieldName {
                record: "Point".to_string(),
                name:   "x".to_string(),
                reason: "duplicate field name"
            }
        );
    }

    #[test]
    fn invalid_identifiers_rejected() {
        for name in ["", "_x", "1x", "first-name", "a b"] {
            let result = RecordType::builder("R").field(name, TypeTag::Int).build();
            assert!(
                matches!(result, Err(RecordError::InvalidFieldName { .. })),
                "`{name}` should be rejected"
            );
        }
    }

    #[test]
    fn valid_identifiers_accepted() {
        let ty = RecordType::builder("R")
            .field("x", TypeTag::Int)
            .field("first_name", TypeTag::Str)
            .field("field2", TypeTag::Bool)
            .field("camelCase", TypeTag::Char)
            .build();
        assert!(ty.is_ok());
    }

    #[test]
    fn structurally_equal_types_are_equal() {
        assert_eq!(point(), point());
        let other = RecordType::builder("Size")
            .field("x", TypeTag::Int)
            .field("y", TypeTag::Int)
            .build()
            .unwrap();
        assert_ne!(point(), other);
    }

    #[test]
    fn clones_share_schema() {
        let ty = point();
        let clone = ty.clone();
        assert!(Arc::ptr_eq(&ty.inner, &clone.inner));
    }

    #[test]
    fn type_tag_display() {
        assert_eq!(TypeTag::Int.to_string(), "int");
        assert_eq!(TypeTag::seq(TypeTag::Str).to_string(), "[str]");
        assert_eq!(TypeTag::Record(point()).to_string(), "Point");
    }

    #[test]
    fn mutable_flag_per_field_or_global() {
        let ty = RecordType::builder("P")
            .mutable_field("x", TypeTag::Int)
            .field("y", TypeTag::Int)
            .build()
            .unwrap();
        assert!(ty.is_mutable(&ty.fields()[0]));
        assert!(!ty.is_mutable(&ty.fields()[1]));

        let all = RecordType::builder("P")
            .field("x", TypeTag::Int)
            .mutation()
            .build()
            .unwrap();
        assert!(all.is_mutable(&all.fields()[0]));
    }
}
