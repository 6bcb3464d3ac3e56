// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::collections::HashSet;

use record_derive::Record;

#[derive(Record)]
#[record(with, destructure)]
pub struct Pair<T> {
    left: T,
    right: T,
}

fn main() {
    let pair = Pair::new("a", "b");
    assert_eq!(pair.to_string(), "Pair(\"a\", \"b\")");
    assert_eq!(pair.with_right("c"), Pair::new("a", "c"));

    let mut set = HashSet::new();
    set.insert(Pair::new(1, 2));
    assert!(set.contains(&Pair::new(1, 2)));
}
