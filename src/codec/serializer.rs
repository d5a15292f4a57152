//! INI serializer
//!
//! Inverse of the parser. Numeric-looking scalars are written bare, all
//! other scalars are double-quoted. This is a textual convention only: the
//! parser hands every value back as a string.

use std::fmt::Write as _;

use crate::domain::entities::{Document, Section};
use crate::domain::value_objects::Value;

/// First two lines of every generated file
pub const HEADER: &str = "; inistack local configuration, DO NOT REMOVE THIS LINE\n\
; automatically generated; redefine a key from global.ini here to override its default.\n";

/// Serialize a document.
///
/// Sections without any key (or holding only empty lists) are omitted.
pub fn serialize(document: &Document) -> String {
    let mut out = String::from(HEADER);

    for (name, section) in document.iter() {
        let body = serialize_section(section);
        if body.is_empty() {
            continue;
        }
        let _ = write!(out, "\n[{}]\n{}", name, body);
    }

    out
}

fn serialize_section(section: &Section) -> String {
    let mut body = String::new();
    for (key, value) in section.iter() {
        match value {
            Value::Scalar(s) => {
                let _ = writeln!(body, "{} = {}", key, format_scalar(s));
            }
            Value::List(items) => {
                for item in items {
                    let _ = writeln!(body, "{}[] = {}", key, format_scalar(item));
                }
            }
        }
    }
    body
}

/// Bare if numeric, otherwise quoted with escapes.
pub fn format_scalar(value: &str) -> String {
    if is_numeric(value) {
        return value.to_string();
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            other => quoted.push(other),
        }
    }
    quoted.push('"');
    quoted
}

/// Decimal number shape: optional sign, digits with at most one `.`,
/// optional exponent. No surrounding whitespace.
pub fn is_numeric(value: &str) -> bool {
    let bytes = value.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let mut digits = 0;
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(i) {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        i += 1;
    }
    if digits == 0 {
        return false;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let start = i;
        while matches!(bytes.get(i), Some(b'0'..=b'9')) {
            i += 1;
        }
        if i == start {
            return false;
        }
    }

    i == bytes.len()
}
