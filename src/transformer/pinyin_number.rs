use crate::error::Result;
use crate::syllable::Syllable;
use crate::transformer::Transformer;

/// Writes numbered pinyin, `ta1men5`
#[derive(Debug, Clone, Copy, Default)]
pub struct PinyinNumberTransformer;

impl Transformer for PinyinNumberTransformer {
    fn transform(&self, syllables: &[Syllable]) -> Result<String> {
        let mut ret = String::with_capacity(syllables.len() * 5);
        for syllable in syllables {
            ret.push_str(syllable.base());
            ret.push(char::from(b'0' + syllable.tone().rank()));
        }
        Ok(ret)
    }
}
