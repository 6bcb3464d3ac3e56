// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use record_derive::Record;

#[derive(Record)]
#[record(no_constructor)]
pub struct Percent {
    value: u8,
}

impl Percent {
    pub fn new(value: u8) -> Option<Self> {
        (value <= 100).then_some(Self { value })
    }
}

fn main() {
    assert!(Percent::new(101).is_none());
    let p = Percent::new(42).unwrap();
    assert_eq!(*p.value(), 42);
    assert_eq!(p.to_string(), "Percent(42)");
}
