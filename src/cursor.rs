//! Cursor structure used to track progress through the parser input

use crate::JsonValue;

/// A [Cursor] is an immutable snapshot of parse progress: the source text, an
/// offset within it, and the most recently produced value. Combinators never
/// mutate a cursor - each successful step derives a fresh one further along the
/// input, and the whole chain is discarded once the final value is extracted.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The source text being parsed. Shared by every cursor in a chain
    input: &'a str,
    /// Byte offset of the next unconsumed character. Always lies on a `char`
    /// boundary, and never decreases across a successful step
    index: usize,
    /// The most recently produced value, if any
    value: Option<JsonValue<'a>>,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor positioned at the very start of the input, with no
    /// value produced yet
    pub fn new(input: &'a str) -> Self {
        Cursor {
            input,
            index: 0,
            value: None,
        }
    }

    /// The byte offset of the next unconsumed character
    pub fn index(&self) -> usize {
        self.index
    }

    /// The portion of the input which has not yet been consumed
    pub fn remaining(&self) -> &'a str {
        &self.input[self.index..]
    }

    /// True once every character of the input has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.index == self.input.len()
    }

    /// Split the carried value off the cursor, leaving a cursor at the same
    /// position carrying nothing. Returns [None] if no value has been produced
    pub fn take_value(self) -> Option<(Cursor<'a>, JsonValue<'a>)> {
        let Cursor {
            input,
            index,
            value,
        } = self;
        value.map(|value| {
            (
                Cursor {
                    input,
                    index,
                    value: None,
                },
                value,
            )
        })
    }

    /// Derive a cursor advanced by `count` bytes, carrying the prior value
    /// through unchanged
    pub(crate) fn advance(&self, count: usize) -> Cursor<'a> {
        Cursor {
            input: self.input,
            index: self.index + count,
            value: self.value.clone(),
        }
    }

    /// Derive a cursor advanced by `count` bytes, carrying a newly produced value
    pub(crate) fn advance_with(&self, count: usize, value: JsonValue<'a>) -> Cursor<'a> {
        Cursor {
            input: self.input,
            index: self.index + count,
            value: Some(value),
        }
    }

    /// Derive a cursor at the same position carrying a newly produced value
    pub(crate) fn with_value(&self, value: JsonValue<'a>) -> Cursor<'a> {
        self.advance_with(0, value)
    }
}
