// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use record_derive::Record;

#[derive(Record)]
#[record(with, setters, destructure)]
pub struct Person {
    /// Given name.
    first_name: String,
    middle_names: Vec<String>,
    #[record(no_with)]
    last_name: String,
    #[record(copy)]
    age: u8,
}

fn main() {
    let mut p = Person::new("Ada".into(), vec!["King".into()], "Lovelace".into(), 36);

    let renamed = p.with_first_name("Augusta".into());
    assert_eq!(renamed.first_name(), "Augusta");

    p.set_age(37);
    assert_eq!(p.age(), 37);

    let mut first = String::new();
    let mut middle = Vec::new();
    let mut last = String::new();
    let mut age = 0;
    p.destructure(&mut first, &mut middle, &mut last, &mut age);
    assert_eq!(last, "Lovelace");

    let (first, _, _, age) = p.into_parts();
    assert_eq!(first, "Ada");
    assert_eq!(age, 37);
}
