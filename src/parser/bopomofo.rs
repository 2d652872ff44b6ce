use log::{debug, trace};

use crate::dictionary::{SyllableDictionary, STANDARD};
use crate::error::{Error, Result};
use crate::parser::Parser;
use crate::segment::{longest_prefix, unsegmentable};
use crate::syllable::Syllable;
use crate::tone::{MarkPosition, Tone};

/// Reads zhuyin such as `ㄗㄣˇ˙ㄇㄜㄧㄤˋ`
///
/// The neutral tone mark `˙` is written before its syllable, the other marks
/// after it; a syllable with no mark is first tone.
#[derive(Debug, Clone, Copy)]
pub struct BopomofoParser<'d> {
    dictionary: &'d dyn SyllableDictionary,
}

impl<'d> BopomofoParser<'d> {
    /// Parser segmenting against `dictionary`
    pub fn new(dictionary: &'d dyn SyllableDictionary) -> Self {
        BopomofoParser { dictionary }
    }
}

impl Default for BopomofoParser<'static> {
    fn default() -> Self {
        BopomofoParser::new(&STANDARD)
    }
}

/// Tone of `c` if it is a mark written at `position`
fn tone_mark_at(c: char, position: MarkPosition) -> Option<Tone> {
    Tone::from_bopomofo_mark(c)
        .ok()
        .filter(|tone| tone.bopomofo_mark().map(|mark| mark.position) == Some(position))
}

impl Parser for BopomofoParser<'_> {
    fn parse(&self, text: &str) -> Result<Vec<Syllable>> {
        let inventory = self.dictionary.bopomofo_syllables();
        let mut syllables = Vec::new();
        let mut pos = 0;

        while let Some(c) = text[pos..].chars().next() {
            let start = pos;
            let leading = tone_mark_at(c, MarkPosition::Before);
            if leading.is_some() {
                pos += c.len_utf8();
            }

            // Report from the leading mark, which belongs to the missing syllable
            let Some(spelling) = longest_prefix(&text[pos..], inventory) else {
                return Err(unsegmentable(text, start));
            };
            pos += spelling.len();

            let tone = match leading {
                Some(tone) => tone,
                None => {
                    let trailing = text[pos..]
                        .chars()
                        .next()
                        .and_then(|c| Some((c, tone_mark_at(c, MarkPosition::After)?)));
                    match trailing {
                        Some((mark, tone)) => {
                            pos += mark.len_utf8();
                            tone
                        }
                        None => Tone::First,
                    }
                }
            };
            trace!("zhuyin '{spelling}' tone {tone}");

            let base = self
                .dictionary
                .pinyin_for(spelling)
                .ok_or_else(|| Error::UnknownSyllableSpelling(spelling.to_owned()))?;
            syllables.push(Syllable::from_parts(base, tone));
        }

        debug!("read {} syllables from '{text}'", syllables.len());
        Ok(syllables)
    }
}
