//! Readers turning text in one notation into syllables.

mod bopomofo;
mod pinyin_number;
mod pinyin_tone_mark;

pub use bopomofo::BopomofoParser;
pub use pinyin_number::PinyinNumberParser;
pub use pinyin_tone_mark::PinyinToneMarkParser;

use crate::error::Result;
use crate::syllable::Syllable;

/// Splits text in one notation into syllables
pub trait Parser {
    /// Parse every syllable of `text`, failing on the first invalid one
    fn parse(&self, text: &str) -> Result<Vec<Syllable>>;
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    fn parse(&self, text: &str) -> Result<Vec<Syllable>> {
        (**self).parse(text)
    }
}
