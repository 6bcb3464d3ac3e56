// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared utilities for code generation.
//!
//! # Submodules
//!
//! - [`bounds`] - Trait bounds for generic records
//! - [`docs`] - Doc comment extraction and emission
//! - [`naming`] - Generated method names

pub mod bounds;
pub mod docs;
pub mod naming;
