// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generated method names.
//!
//! Method names are always snake_case, whatever case the field uses.
//! Names without uppercase letters are already snake_case and are kept
//! verbatim, digits included:
//!
//! | Field | `with` method | `set` method |
//! |-------|---------------|--------------|
//! | `x` | `with_x` | `set_x` |
//! | `first_name` | `with_first_name` | `set_first_name` |
//! | `point2` | `with_point2` | `set_point2` |
//! | `firstName` | `with_first_name` | `set_first_name` |

use convert_case::{Case, Casing};

/// Build `<prefix>_<field in snake_case>`.
pub fn method_name(prefix: &str, field: &str) -> String {
    if field.chars().any(|c| c.is_ascii_uppercase()) {
        format!("{prefix}_{}", field.to_case(Case::Snake))
    } else {
        format!("{prefix}_{field}")
    }
}
