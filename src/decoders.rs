//! The byte-oriented entry points on [crate::Parser] operate over a stream of
//! `char`s sourced from an underlying buffer. The [DecoderSelector] within this
//! module instantiates the appropriate `char` iterator for a given [Encoding].
//! (Currently only ASCII and UTF-8 are supported).

use chisel_decoders::{ascii::AsciiDecoder, utf8::Utf8Decoder};
use std::io::BufRead;

/// Enumeration of different supported encoding types
#[derive(Copy, Clone)]
pub enum Encoding {
    Utf8,
    Ascii,
}

impl Default for Encoding {
    fn default() -> Self {
        Self::Utf8
    }
}

/// A struct that is essentially a factory for creating new instances of [char]
/// iterators, based on a specified encoding type
#[derive(Default)]
pub(crate) struct DecoderSelector {}

impl DecoderSelector {
    /// Create and return an instance of a byte decoder / char iterator for a
    /// specific encoding
    pub fn new_decoder<'a, Buffer: BufRead>(
        &'a self,
        buffer: &'a mut Buffer,
        encoding: Encoding,
    ) -> Box<dyn Iterator<Item = char> + 'a> {
        match encoding {
            Encoding::Ascii => Box::new(AsciiDecoder::new(buffer)),
            Encoding::Utf8 => Box::new(Utf8Decoder::new(buffer)),
        }
    }
}
