//! A small combinator-based JSON parser.
//!
//! Lexing and parsing are fused: a handful of matching primitives defined over an
//! immutable [cursor::Cursor] are composed into parsers for each JSON value type.
//! The only failure signal anywhere in the crate is absence - a parser either
//! produces a value or it produces nothing.

use std::borrow::Cow;
use std::fmt::{Display, Formatter};

pub mod combinators;
pub mod cursor;
mod decoders;
pub mod parser;
#[cfg(test)]
mod test_macros;

pub use crate::decoders::Encoding;
pub use crate::parser::Parser;

/// Basic enumeration of different Json values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonValue<'a> {
    /// Ordered sequence of key/value pairs. Entries are kept in source order and
    /// duplicate keys are retained rather than deduplicated
    Object(Vec<(Cow<'a, str>, JsonValue<'a>)>),
    /// Array of values
    Array(Vec<JsonValue<'a>>),
    /// Canonical string value. Contents are the raw characters between the
    /// delimiting quotes, no escape sequences are decoded
    String(Cow<'a, str>),
    /// Non-negative integer numeric value
    Number(u64),
    /// Canonical boolean value
    Boolean(bool),
    /// Canonical null value
    Null,
}

impl<'a> JsonValue<'a> {
    /// The canonical null value
    pub const NULL: JsonValue<'a> = JsonValue::Null;
    /// The canonical true value
    pub const TRUE: JsonValue<'a> = JsonValue::Boolean(true);
    /// The canonical false value
    pub const FALSE: JsonValue<'a> = JsonValue::Boolean(false);

    /// Detach a value from the input buffer it was parsed from, cloning any
    /// borrowed string contents
    pub fn into_owned(self) -> JsonValue<'static> {
        match self {
            JsonValue::Object(pairs) => JsonValue::Object(
                pairs
                    .into_iter()
                    .map(|(key, value)| (Cow::Owned(key.into_owned()), value.into_owned()))
                    .collect(),
            ),
            JsonValue::Array(values) => {
                JsonValue::Array(values.into_iter().map(JsonValue::into_owned).collect())
            }
            JsonValue::String(value) => JsonValue::String(Cow::Owned(value.into_owned())),
            JsonValue::Number(value) => JsonValue::Number(value),
            JsonValue::Boolean(value) => JsonValue::Boolean(value),
            JsonValue::Null => JsonValue::Null,
        }
    }
}

impl<'a> Display for JsonValue<'a> {
    /// Render a value back into the textual grammar it was parsed from, with
    /// normalised whitespace. Re-parsing the rendered form yields a structurally
    /// equal value
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonValue::Object(pairs) => {
                write!(f, "{{")?;
                for (index, (key, value)) in pairs.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{}\": {}", key, value)?;
                }
                write!(f, "}}")
            }
            JsonValue::Array(values) => {
                write!(f, "[")?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, "]")
            }
            JsonValue::String(value) => write!(f, "\"{}\"", value),
            JsonValue::Number(value) => write!(f, "{}", value),
            JsonValue::Boolean(value) => write!(f, "{}", value),
            JsonValue::Null => write!(f, "null"),
        }
    }
}

/// Parse a single JSON value from the input. The value must start at the very
/// beginning of the input, and nothing other than whitespace may follow it.
/// Returns [None] for anything which fails to match the grammar
pub fn parse(input: &str) -> Option<JsonValue> {
    Parser::default().parse_str(input)
}
