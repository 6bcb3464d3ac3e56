// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

mod runtime {
    pub use record_derive::*;
}

use record_derive::Record;

#[derive(Record)]
#[record(crate = "crate::runtime")]
pub struct Token {
    r#type: String,
    text: String,
}

fn main() {
    let token = Token::new("ident".into(), "x".into());
    assert_eq!(token.r#type(), "ident");
    assert_eq!(<Token as runtime::Record>::FIELD_NAMES, &["type", "text"]);
}
