use unicode_normalization::UnicodeNormalization;

use crate::dictionary::{SyllableDictionary, STANDARD};
use crate::error::{Error, Result};
use crate::parser::Parser;
use crate::syllable::Syllable;
use crate::tone::Tone;

/// Reads numbered pinyin such as `zen3me5yang4`
///
/// Every syllable must end in its tone digit; the digit is what separates
/// syllables. `v` is accepted for `ü`.
#[derive(Debug, Clone, Copy)]
pub struct PinyinNumberParser<'d> {
    dictionary: &'d dyn SyllableDictionary,
}

impl<'d> PinyinNumberParser<'d> {
    /// Parser checking syllables against `dictionary`
    pub fn new(dictionary: &'d dyn SyllableDictionary) -> Self {
        PinyinNumberParser { dictionary }
    }
}

impl Default for PinyinNumberParser<'static> {
    fn default() -> Self {
        PinyinNumberParser::new(&STANDARD)
    }
}

fn is_letter(c: char) -> bool {
    c.is_ascii_lowercase() || c == 'ü' || c == 'ê'
}

impl Parser for PinyinNumberParser<'_> {
    fn parse(&self, text: &str) -> Result<Vec<Syllable>> {
        let text: String = text.nfc().collect();
        let mut syllables = Vec::new();
        let mut chars = text.chars().peekable();

        while chars.peek().is_some() {
            let mut base = String::with_capacity(6);
            while let Some(c) = chars.next_if(|c| is_letter(*c)) {
                base.push(if c == 'v' { 'ü' } else { c });
            }

            if base.is_empty() {
                let rest: String = chars.collect();
                return Err(Error::MalformedSyllableToken(rest));
            }

            let Some(digit) = chars.next_if(char::is_ascii_digit) else {
                if self.dictionary.contains(&base) {
                    return Err(Error::MalformedSyllableToken(base));
                }
                return Err(Error::UnknownSyllable(base));
            };

            let tone = Tone::from_digit(digit)?;
            syllables.push(Syllable::new(base, tone, self.dictionary)?);
        }

        Ok(syllables)
    }
}
