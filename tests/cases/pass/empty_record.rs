// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use record_derive::Record;

#[derive(Record)]
#[record(destructure)]
pub struct Unit {}

fn main() {
    assert_eq!(Unit::new(), Unit::new());
    assert_eq!(Unit::new().to_string(), "Unit()");
    let () = Unit::new().into_parts();
}
