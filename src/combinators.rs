//! Primitive matching combinators defined over a [Cursor].  There is no separate
//! tokenising pass within this crate: the primitives below consume and interpret
//! characters in a single step, and larger parsers are built by composing them.
//!
//! Every combinator is a pure function from an input cursor to an optional output
//! cursor. Absence is the one and only failure signal - a combinator that does not
//! match simply produces [None], it never raises an error.

use crate::cursor::Cursor;
use crate::JsonValue;

/// The outcome of interpreting a scanned token. A scan which fails outright
/// produces no [Scan] at all, so the three cases - fail, succeed with nothing,
/// succeed with a value - are each spelt out explicitly rather than signalled
/// through a sentinel value.
#[derive(Debug)]
pub enum Scan<'a> {
    /// The scan is accepted but produces no new semantic content; the value
    /// carried by the cursor passes through unchanged
    Keep,
    /// The scan is accepted and its value replaces the one carried by the cursor
    Produce(JsonValue<'a>),
}

impl<'a> Cursor<'a> {
    /// Match a literal substring at the current position.  On a match the cursor
    /// advances over the literal; `value`, if supplied, replaces the carried
    /// value, otherwise the prior value is carried through unchanged
    pub fn match_literal(&self, literal: &str, value: Option<JsonValue<'a>>) -> Option<Cursor<'a>> {
        if !self.remaining().starts_with(literal) {
            return None;
        }
        match value {
            Some(value) => Some(self.advance_with(literal.len(), value)),
            None => Some(self.advance(literal.len())),
        }
    }

    /// Greedily consume the maximal run of characters satisfying `predicate` -
    /// possibly empty - and hand the consumed token to `interpret`. The scan
    /// fails if `interpret` yields nothing; otherwise the cursor advances over
    /// the token and the carried value is kept or replaced as per the [Scan]
    pub fn scan_while<P, I>(&self, predicate: P, interpret: I) -> Option<Cursor<'a>>
    where
        P: Fn(char) -> bool,
        I: FnOnce(&'a str) -> Option<Scan<'a>>,
    {
        let token = self.leading_run(predicate);
        match interpret(token)? {
            Scan::Keep => Some(self.advance(token.len())),
            Scan::Produce(value) => Some(self.advance_with(token.len(), value)),
        }
    }

    /// Consume any whitespace at the current position, keeping the carried value.
    /// A zero-length run is accepted, so this never fails and is safe to apply
    /// unconditionally around delimiters
    pub fn skip_whitespace(&self) -> Cursor<'a> {
        self.advance(self.leading_run(char::is_whitespace).len())
    }

    /// The maximal leading run of characters within the remaining input which
    /// satisfy `predicate`
    fn leading_run<P>(&self, predicate: P) -> &'a str
    where
        P: Fn(char) -> bool,
    {
        let rest = self.remaining();
        let end = rest
            .char_indices()
            .find(|(_, c)| !predicate(*c))
            .map(|(index, _)| index)
            .unwrap_or(rest.len());
        &rest[..end]
    }
}

/// The shared shape of arrays and objects: an opening literal, zero or more
/// comma-separated items produced by `item`, and a closing literal, with
/// whitespace permitted around each of these.  Returns the cursor past the
/// closing literal together with the items in source order.
///
/// A comma commits the list to another item: once one has been matched, a
/// failure of the following item fails the whole list. There is consequently no
/// trailing-comma tolerance, and a malformed item is never silently treated as
/// the end of the list.
pub fn delimited_list<'a, T, F>(
    cursor: &Cursor<'a>,
    open: &str,
    close: &str,
    item: F,
) -> Option<(Cursor<'a>, Vec<T>)>
where
    F: Fn(&Cursor<'a>) -> Option<(Cursor<'a>, T)>,
{
    let mut current = cursor.match_literal(open, None)?.skip_whitespace();
    let mut items = vec![];
    if let Some((next, first)) = item(&current) {
        items.push(first);
        current = next;
        loop {
            let rest = current.skip_whitespace();
            match rest.match_literal(",", None) {
                Some(after_comma) => {
                    let (next, value) = item(&after_comma.skip_whitespace())?;
                    items.push(value);
                    current = next;
                }
                None => break,
            }
        }
    }
    let closed = current.skip_whitespace().match_literal(close, None)?;
    Some((closed, items))
}
