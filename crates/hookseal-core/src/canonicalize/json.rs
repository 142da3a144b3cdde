//! Pretty JSON output matching ECMAScript `JSON.stringify(value, null, 2)`.

use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use serde_json::{Map, Value};

use super::errors::{CanonicalizeError, CanonicalizeResult};

/// Array indices are canonical decimals strictly below this.
const ARRAY_INDEX_LIMIT: u64 = u32::MAX as u64;

/// Serialize a JSON value with two-space indentation.
///
/// Object keys keep parse order, except array-index keys which come first
/// in ascending numeric order. Numbers are read from their source text as
/// correctly rounded binary64 and render as ECMAScript `Number::toString`
/// would; literals beyond the binary64 range render as `null`.
pub fn to_canonical_bytes(value: &Value) -> CanonicalizeResult<Vec<u8>> {
    let ordered = with_property_order(value);
    let mut out = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut out, EcmaFormatter::new());
    ordered
        .serialize(&mut ser)
        .map_err(|e| CanonicalizeError::SerializeError {
            message: e.to_string(),
        })?;
    Ok(out)
}

/// Rebuild objects so that iteration follows ECMAScript property order.
fn with_property_order(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut indices: Vec<(u64, &String, &Value)> = Vec::new();
            let mut named: Vec<(&String, &Value)> = Vec::new();
            for (key, value) in map {
                match array_index(key) {
                    Some(index) => indices.push((index, key, value)),
                    None => named.push((key, value)),
                }
            }
            indices.sort_by_key(|(index, _, _)| *index);

            let mut ordered = Map::with_capacity(map.len());
            for (_, key, value) in indices {
                ordered.insert(key.clone(), with_property_order(value));
            }
            for (key, value) in named {
                ordered.insert(key.clone(), with_property_order(value));
            }
            Value::Object(ordered)
        }
        Value::Array(items) => Value::Array(items.iter().map(with_property_order).collect()),
        other => other.clone(),
    }
}

/// Parse `key` as an array index: canonical decimal, below 2^32 - 1.
fn array_index(key: &str) -> Option<u64> {
    if key.is_empty() || key.len() > 10 || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    let index: u64 = key.parse().ok()?;
    (index < ARRAY_INDEX_LIMIT).then_some(index)
}

/// ECMAScript `Number::toString` for finite values.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return "null".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{}", value);
    }

    let exponential = format!("{:e}", value);
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => exponential,
    }
}

/// Two-space pretty printer with ECMAScript number rendering.
struct EcmaFormatter {
    inner: PrettyFormatter<'static>,
}

impl EcmaFormatter {
    fn new() -> Self {
        Self {
            inner: PrettyFormatter::with_indent(b"  "),
        }
    }
}

impl Formatter for EcmaFormatter {
    fn write_i64<W: ?Sized + io::Write>(&mut self, writer: &mut W, value: i64) -> io::Result<()> {
        writer.write_all(format_number(value as f64).as_bytes())
    }

    fn write_u64<W: ?Sized + io::Write>(&mut self, writer: &mut W, value: u64) -> io::Result<()> {
        writer.write_all(format_number(value as f64).as_bytes())
    }

    fn write_f64<W: ?Sized + io::Write>(&mut self, writer: &mut W, value: f64) -> io::Result<()> {
        writer.write_all(format_number(value).as_bytes())
    }

    // Parsed numbers keep their source text; `str::parse` rounds correctly
    // and saturates to infinity instead of failing.
    fn write_number_str<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        value: &str,
    ) -> io::Result<()> {
        match value.parse::<f64>() {
            Ok(number) => writer.write_all(format_number(number).as_bytes()),
            Err(_) => writer.write_all(value.as_bytes()),
        }
    }

    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }
}
