use crate::dictionary::{SyllableDictionary, STANDARD};
use crate::error::{Error, Result};
use crate::syllable::Syllable;
use crate::tone::{BopomofoMark, MarkPosition};
use crate::transformer::Transformer;

/// Writes zhuyin, `ㄊㄚ˙ㄇㄣ`
#[derive(Debug, Clone, Copy)]
pub struct BopomofoTransformer<'d> {
    dictionary: &'d dyn SyllableDictionary,
}

impl<'d> BopomofoTransformer<'d> {
    /// Transformer spelling syllables through `dictionary`
    pub fn new(dictionary: &'d dyn SyllableDictionary) -> Self {
        BopomofoTransformer { dictionary }
    }
}

impl Default for BopomofoTransformer<'static> {
    fn default() -> Self {
        BopomofoTransformer::new(&STANDARD)
    }
}

impl Transformer for BopomofoTransformer<'_> {
    fn transform(&self, syllables: &[Syllable]) -> Result<String> {
        let mut ret = String::with_capacity(syllables.len() * 12);
        for syllable in syllables {
            let spelling = self
                .dictionary
                .bopomofo_for(syllable.base())
                .ok_or_else(|| Error::UnknownSyllable(syllable.base().to_owned()))?;

            match syllable.tone().bopomofo_mark() {
                Some(BopomofoMark {
                    symbol,
                    position: MarkPosition::Before,
                }) => {
                    ret.push(symbol);
                    ret.push_str(spelling);
                }
                Some(BopomofoMark {
                    symbol,
                    position: MarkPosition::After,
                }) => {
                    ret.push_str(spelling);
                    ret.push(symbol);
                }
                None => ret.push_str(spelling),
            }
        }
        Ok(ret)
    }
}
