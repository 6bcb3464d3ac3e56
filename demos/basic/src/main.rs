// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Walkthrough of generated and dynamic records.
//!
//! Run with `RUST_LOG=demo_basic=debug cargo run -p demo-basic` to see the
//! hash values as well.

use std::collections::HashMap;

use record_derive::{Record, RecordError, RecordType, TypeTag, Value};
use tracing_subscriber::EnvFilter;

/// A person as a value type.
#[derive(Record)]
#[record(with, destructure)]
pub struct Person {
    /// Given name.
    first_name:   String,
    /// Further given names.
    middle_names: Vec<String>,
    /// Family name.
    last_name:    String,
    /// Age in whole years.
    #[record(copy)]
    age:          u8
}

#[derive(Record)]
pub struct Point {
    x: i32,
    y: i32
}

#[derive(Record)]
pub struct Rectangle {
    top_left:     Point,
    bottom_right: Point
}

fn generated() {
    let ada = Person::new(
        "Ada".to_string(),
        vec!["King".to_string()],
        "Lovelace".to_string(),
        36
    );
    tracing::info!(person = %ada, "constructed");

    let older = ada.with_age(37);
    tracing::info!(before = ada.age(), after = older.age(), "with_age leaves the original untouched");

    let mut first = String::new();
    let mut middle = Vec::new();
    let mut last = String::new();
    let mut age = 0;
    ada.destructure(&mut first, &mut middle, &mut last, &mut age);
    middle.push("Byron".to_string());
    tracing::info!(
        slots = ?middle,
        record = ?ada.middle_names(),
        "destructured slots are independent copies"
    );

    let rect = Rectangle::new(Point::new(0, 0), Point::new(3, 4));
    tracing::debug!(hash = rect.record_hash(), %rect, "nested record hash");

    let mut areas = HashMap::new();
    areas.insert(rect, 12);
    let probe = Rectangle::new(Point::new(0, 0), Point::new(3, 4));
    tracing::info!(found = ?areas.get(&probe), "equal records find the same map entry");
}

fn dynamic() -> Result<(), RecordError> {
    let point = RecordType::builder("Point")
        .field("x", TypeTag::Int)
        .field("y", TypeTag::Int)
        .mutation()
        .build()?;

    let p = point.construct(vec![Value::Int(3), Value::Int(7)])?;
    let q = p.with_field("x", 9_i64)?;
    tracing::info!(%p, %q, "dynamic with_field");

    match point.construct(vec![Value::Int(1)]) {
        Ok(r) => tracing::warn!(%r, "short construction unexpectedly succeeded"),
        Err(err) => tracing::info!(%err, "arity is checked")
    }

    match RecordType::builder("Bad").field("_hidden", TypeTag::Str).build() {
        Ok(_) => tracing::warn!("leading underscore unexpectedly accepted"),
        Err(err) => tracing::info!(%err, "field names are checked")
    }

    Ok(())
}

fn main() -> Result<(), RecordError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("demo_basic=info"))
        )
        .init();

    generated();
    dynamic()
}
