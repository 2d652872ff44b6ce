//! Writers turning syllables into text in one notation.

mod bopomofo;
mod pinyin_number;
mod pinyin_tone_mark;

pub use bopomofo::BopomofoTransformer;
pub use pinyin_number::PinyinNumberTransformer;
pub use pinyin_tone_mark::PinyinToneMarkTransformer;

use crate::error::Result;
use crate::syllable::Syllable;

/// Formats syllables in one notation
pub trait Transformer {
    /// Format every syllable, failing on the first one that cannot be written
    fn transform(&self, syllables: &[Syllable]) -> Result<String>;
}

impl<T: Transformer + ?Sized> Transformer for Box<T> {
    fn transform(&self, syllables: &[Syllable]) -> Result<String> {
        (**self).transform(syllables)
    }
}
