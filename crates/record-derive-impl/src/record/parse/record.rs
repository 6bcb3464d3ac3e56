// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Record-level attribute parsing.
//!
//! # Module Structure
//!
//! ```text
//! record/
//! ├── attrs.rs       - RecordAttrs (darling parsing struct)
//! ├── def.rs         - RecordDef and RecordOptions
//! ├── constructor.rs - RecordDef::from_derive_input
//! ├── accessors.rs   - Field selection helpers
//! ├── validate.rs    - Field contract checks
//! └── tests.rs       - Parsing tests
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::record::parse::RecordDef;
//!
//! let record = RecordDef::from_derive_input(&input)?;
//!
//! let with_fields = record.with_fields();
//! let setter_fields = record.setter_fields();
//! ```

mod accessors;
mod attrs;
mod constructor;
mod def;
mod validate;


pub use attrs::RecordAttrs;
pub use def::{RecordDef, RecordOptions};
