// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level `#[record(...)]` options.
//!
//! | Option | Effect |
//! |--------|--------|
//! | `with` | Generate `with_<field>` for this field |
//! | `no_with` | Skip this field under struct-level `with` |
//! | `setter` | Generate `set_<field>` for this field |
//! | `copy` | Accessor returns the value instead of a reference |

use darling::FromField;

/// Field access options parsed by darling.
#[derive(Debug, Default, Clone, FromField)]
#[darling(attributes(record))]
pub struct FieldAttrs {
    /// Generate a `with_<field>` copy-update.
    #[darling(default)]
    pub with: bool,

    /// Opt out of struct-level `with`.
    #[darling(default)]
    pub no_with: bool,

    /// Generate a `set_<field>` in-place update.
    #[darling(default)]
    pub setter: bool,

    /// Return the field by copy from its accessor.
    #[darling(default)]
    pub copy: bool
}
