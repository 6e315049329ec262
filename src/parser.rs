//! The value parsers, composed from the primitives in [crate::combinators], and
//! the [Parser] entry points used to run them over strings, byte buffers and
//! files.
//!
//! Parsing is plain recursive descent with no memoisation: the dispatcher tries
//! each alternative in a fixed order and recursion bottoms out at the leaf
//! parsers. Failing branches consume nothing, so each parse completes in a single
//! synchronous pass over the input.

use std::borrow::Cow;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::combinators::{delimited_list, Scan};
use crate::cursor::Cursor;
use crate::decoders::{DecoderSelector, Encoding};
use crate::JsonValue;

/// The shape shared by every value parser: an attempt to match at the cursor
/// position, producing an advanced cursor carrying the parsed value
type ValueParser = for<'a> fn(&Cursor<'a>) -> Option<Cursor<'a>>;

/// Registry of the value parsers tried by [parse_value], in priority order.
/// Constructed once and shared freely - the registry is never mutated
const PARSERS: &[ValueParser] = &[
    parse_boolean,
    parse_null,
    parse_number,
    parse_string,
    parse_array,
    parse_object,
];

/// The alternation dispatcher. Tries each parser in the registry at the same
/// starting position and returns the first success; once one alternative has
/// matched, no others are considered
pub(crate) fn parse_value<'a>(cursor: &Cursor<'a>) -> Option<Cursor<'a>> {
    PARSERS.iter().find_map(|parser| parser(cursor))
}

fn parse_null<'a>(cursor: &Cursor<'a>) -> Option<Cursor<'a>> {
    cursor.match_literal("null", Some(JsonValue::NULL))
}

/// The true keyword is tried first, the false keyword only if it fails
fn parse_boolean<'a>(cursor: &Cursor<'a>) -> Option<Cursor<'a>> {
    cursor
        .match_literal("true", Some(JsonValue::TRUE))
        .or_else(|| cursor.match_literal("false", Some(JsonValue::FALSE)))
}

/// A number is a non-empty run of decimal digits. An empty run is how the
/// dispatcher distinguishes "not a number here" from a parsed zero, and a run
/// too large for a [u64] is treated as no match rather than a panic
fn parse_number<'a>(cursor: &Cursor<'a>) -> Option<Cursor<'a>> {
    cursor.scan_while(
        |c| c.is_ascii_digit(),
        |token| {
            if token.is_empty() {
                return None;
            }
            convert_digits(token).map(|value| Scan::Produce(JsonValue::Number(value)))
        },
    )
}

/// Convert a scanned digit run into its numeric value
#[cfg(feature = "fast_numerics")]
fn convert_digits(token: &str) -> Option<u64> {
    lexical::parse(token).ok()
}

/// Convert a scanned digit run into its numeric value
#[cfg(not(feature = "fast_numerics"))]
fn convert_digits(token: &str) -> Option<u64> {
    token.parse().ok()
}

/// A string is an opening quote, a scan over anything which isn't a quote, and a
/// closing quote. The inner scan accepts an empty token so that `""` is valid;
/// a missing closing quote fails the whole parse with no partial result
fn parse_string<'a>(cursor: &Cursor<'a>) -> Option<Cursor<'a>> {
    let cursor = cursor.match_literal("\"", None)?;
    let cursor = cursor.scan_while(
        |c| c != '"',
        |token| Some(Scan::Produce(JsonValue::String(Cow::Borrowed(token)))),
    )?;
    cursor.match_literal("\"", None)
}

fn parse_array<'a>(cursor: &Cursor<'a>) -> Option<Cursor<'a>> {
    let (cursor, values) = delimited_list(cursor, "[", "]", |item| {
        parse_value(item).and_then(Cursor::take_value)
    })?;
    Some(cursor.with_value(JsonValue::Array(values)))
}

/// A single object entry: a string key, a colon, and any value, with whitespace
/// permitted around the colon. Any step failing fails the whole entry
fn parse_entry<'a>(cursor: &Cursor<'a>) -> Option<(Cursor<'a>, (Cow<'a, str>, JsonValue<'a>))> {
    let (cursor, key) = parse_string(cursor).and_then(Cursor::take_value)?;
    let key = match key {
        JsonValue::String(key) => key,
        _ => return None,
    };
    let cursor = cursor.skip_whitespace().match_literal(":", None)?;
    let (cursor, value) = parse_value(&cursor.skip_whitespace()).and_then(Cursor::take_value)?;
    Some((cursor, (key, value)))
}

fn parse_object<'a>(cursor: &Cursor<'a>) -> Option<Cursor<'a>> {
    let (cursor, pairs) = delimited_list(cursor, "{", "}", parse_entry)?;
    Some(cursor.with_value(JsonValue::Object(pairs)))
}

/// Main JSON parser struct
pub struct Parser {
    decoders: DecoderSelector,
    encoding: Encoding,
}

impl Default for Parser {
    /// The default encoding is Utf-8
    fn default() -> Self {
        Self {
            decoders: Default::default(),
            encoding: Default::default(),
        }
    }
}

impl Parser {
    /// Create a new instance of the parser using a specific [Encoding]
    pub fn with_encoding(encoding: Encoding) -> Self {
        Self {
            decoders: Default::default(),
            encoding,
        }
    }

    /// Parse a single value from a string slice. The value must start at the
    /// very beginning of the input; once it has been matched, anything other
    /// than trailing whitespace makes the whole parse a no-match
    pub fn parse_str<'a>(&self, input: &'a str) -> Option<JsonValue<'a>> {
        let cursor = parse_value(&Cursor::new(input))?;
        let (cursor, value) = cursor.take_value()?;
        if !cursor.skip_whitespace().is_exhausted() {
            return None;
        }
        Some(value)
    }

    /// Decode a byte buffer using the configured [Encoding] and parse a single
    /// value from it. The result owns its string contents
    pub fn parse_bytes(&self, bytes: &[u8]) -> Option<JsonValue<'static>> {
        let mut reader = BufReader::new(bytes);
        let input: String = self
            .decoders
            .new_decoder(&mut reader, self.encoding)
            .collect();
        self.parse_str(&input).map(JsonValue::into_owned)
    }

    /// Decode and parse the contents of a file. An unreadable file is reported
    /// the same way as any other failure to match
    pub fn parse_file<PathLike: AsRef<Path>>(&self, path: PathLike) -> Option<JsonValue<'static>> {
        match File::open(&path) {
            Ok(f) => {
                let mut reader = BufReader::new(f);
                let input: String = self
                    .decoders
                    .new_decoder(&mut reader, self.encoding)
                    .collect();
                self.parse_str(&input).map(JsonValue::into_owned)
            }
            Err(_) => None,
        }
    }
}
