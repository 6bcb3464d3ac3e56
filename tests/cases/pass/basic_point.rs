// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use record_derive::Record;

#[derive(Record)]
pub struct Point {
    x: i32,
    y: i32,
}

fn main() {
    let p = Point::new(3, 7);
    assert_eq!(*p.x(), 3);
    assert_eq!(*p.y(), 7);
    assert_eq!(p, Point::new(3, 7));
    assert_eq!(p.to_string(), "Point(3, 7)");
    assert_eq!(Point::NAME, "Point");
    assert_eq!(Point::FIELD_NAMES, &["x", "y"]);
}
