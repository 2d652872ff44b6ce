use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};
use crate::syllable::Syllable;
use crate::transformer::Transformer;

/// Vowels that take the tone mark whenever present, in order of preference
const MAIN_VOWELS: [char; 5] = ['a', 'e', 'o', 'ü', 'ê'];

/// Syllables starting with these get an apostrophe when they follow another
const APOSTROPHE_INITIALS: [char; 4] = ['a', 'e', 'o', 'ê'];

/// Writes tone-marked pinyin, `zěnmeyàng`, in composed (NFC) form
///
/// By default an apostrophe separates a syllable starting with `a`, `e` or
/// `o` from the one before it (`xī'ān`), so the output reads back unambiguously.
#[derive(Debug, Clone, Copy)]
pub struct PinyinToneMarkTransformer {
    apostrophes: bool,
}

impl PinyinToneMarkTransformer {
    /// Transformer writing separating apostrophes
    pub fn new() -> Self {
        PinyinToneMarkTransformer { apostrophes: true }
    }

    /// Turn separating apostrophes on or off
    pub fn with_apostrophes(self, apostrophes: bool) -> Self {
        PinyinToneMarkTransformer { apostrophes }
    }
}

impl Default for PinyinToneMarkTransformer {
    fn default() -> Self {
        PinyinToneMarkTransformer::new()
    }
}

/// Byte offset right after the vowel that carries the tone mark
fn mark_position(base: &str) -> Option<usize> {
    let main = MAIN_VOWELS
        .iter()
        .find_map(|&v| base.find(v).map(|i| i + v.len_utf8()));
    if main.is_some() {
        return main;
    }

    // 'i' and 'u' together: the second one takes the mark (huì, liú)
    match (base.find('i'), base.find('u')) {
        (Some(i), Some(u)) => Some(i.max(u) + 1),
        (Some(pos), None) | (None, Some(pos)) => Some(pos + 1),
        (None, None) => None,
    }
}

fn tone_syllable(syllable: &Syllable) -> Result<String> {
    let base = syllable.base();
    let pos = mark_position(base).ok_or_else(|| Error::NoVowelToMark(base.to_owned()))?;

    let Some(mark) = syllable.tone().pinyin_mark() else {
        return Ok(base.to_owned());
    };

    let mut ret = String::with_capacity(base.len() + 2);
    ret.push_str(&base[..pos]);
    ret.push(mark);
    ret.push_str(&base[pos..]);
    Ok(ret.nfc().collect())
}

impl Transformer for PinyinToneMarkTransformer {
    fn transform(&self, syllables: &[Syllable]) -> Result<String> {
        let mut ret = String::with_capacity(syllables.len() * 6);
        for (i, syllable) in syllables.iter().enumerate() {
            if self.apostrophes && i > 0 && syllable.base().starts_with(APOSTROPHE_INITIALS) {
                ret.push('\'');
            }
            ret.push_str(&tone_syllable(syllable)?);
        }
        Ok(ret)
    }
}
