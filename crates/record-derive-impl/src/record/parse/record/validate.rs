// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field contract checks.
//!
//! Runs after parsing and reports every violation at once, each spanned at
//! the offending field.
//!
//! | Rule | Reason shown |
//! |------|--------------|
//! | Field must be private | Record fields are read through accessors |
//! | No leading `_` | Reserved for private helpers |
//! | No reserved name | Would shadow a generated method |
//! | `with_<f>` / `set_<f>` free | Would collide with another field's accessor |
//! | `with_<f>` / `set_<f>` unique | Two fields must not map to one method name |
//! | `with` + `no_with` | Contradictory options |

use std::collections::HashSet;

use super::{super::field::FieldDef, RecordDef};

/// Method names the derive may generate on every record.
const RESERVED: &[&str] = &["new", "destructure", "into_parts", "record_hash"];

/// Validate every field of `record`.
///
/// # Errors
///
/// One accumulated `darling::Error` listing every violation.
pub fn validate(record: &RecordDef) -> darling::Result<()> {
    let mut errors = darling::Error::accumulator();
    let names: HashSet<String> = record.field_names().into_iter().collect();

    for field in record.all_fields() {
        let name = field.name_str();

        if !field.is_private() {
            errors.push(
                darling::Error::custom(format!(
                    "record field `{name}` must be private; read it through the generated accessor"
                ))
                .with_span(&field.vis)
            );
        }

        if name.starts_with('_') {
            errors.push(
                darling::Error::custom(format!(
                    "record field `{name}` must not start with an underscore"
                ))
                .with_span(field.name())
            );
        }

        if RESERVED.contains(&name.as_str()) {
            errors.push(
                darling::Error::custom(format!(
                    "record field `{name}` collides with a generated method"
                ))
                .with_span(field.name())
            );
        }

        if field.access.with && field.access.no_with {
            errors.push(
                darling::Error::custom(format!(
                    "record field `{name}` cannot be both `with` and `no_with`"
                ))
                .with_span(field.name())
            );
        }
    }

    let mut generated = HashSet::new();

    for field in record.with_fields() {
        let method = field.with_ident().to_string();
        if !generated.insert(method.clone()) {
            errors.push(duplicate_method(&method, field));
        }
        if names.contains(&method) {
            errors.push(
                darling::Error::custom(format!(
                    "`{method}` for field `{}` collides with the field of the same name",
                    field.name_str()
                ))
                .with_span(field.name())
            );
        }
    }

    for field in record.setter_fields() {
        let method = field.setter_ident().to_string();
        if !generated.insert(method.clone()) {
            errors.push(duplicate_method(&method, field));
        }
        if names.contains(&method) {
            errors.push(
                darling::Error::custom(format!(
                    "`{method}` for field `{}` collides with the field of the same name",
                    field.name_str()
                ))
                .with_span(field.name())
            );
        }
    }

    errors.finish()
}

fn duplicate_method(method: &str, field: &FieldDef) -> darling::Error {
    darling::Error::custom(format!(
        "`{method}` for field `{}` is already generated for another field",
        field.name_str()
    ))
    .with_span(field.name())
}
