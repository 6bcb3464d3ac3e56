// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use record_derive::Record;

#[derive(Record)]
#[record(no_hash, with)]
pub struct Sample {
    #[record(copy)]
    value: f64,
    unit: String,
}

fn main() {
    let s = Sample::new(1.5, "m".into());
    assert_eq!(s.value(), 1.5);
    assert_eq!(s.with_value(2.0), Sample::new(2.0, "m".into()));
    assert_eq!(s.to_string(), "Sample(1.5, \"m\")");
}
