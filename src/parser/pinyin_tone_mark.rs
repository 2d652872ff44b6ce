use log::debug;
use unicode_normalization::char::compose;
use unicode_normalization::UnicodeNormalization;

use crate::dictionary::{SyllableDictionary, STANDARD};
use crate::error::{Error, Result};
use crate::parser::Parser;
use crate::segment::{segment, unsegmentable};
use crate::syllable::Syllable;
use crate::tone::Tone;

/// Syllable separators, as in `xī'ān`
const APOSTROPHES: [char; 2] = ['\'', '’'];

/// Reads tone-marked pinyin such as `zěnmeyàng`
///
/// Syllables are found by longest match against the dictionary, so
/// ambiguous spellings need an apostrophe (`xī'ān`, not `xīān`). Unmarked
/// syllables take the neutral tone.
#[derive(Debug, Clone, Copy)]
pub struct PinyinToneMarkParser<'d> {
    dictionary: &'d dyn SyllableDictionary,
}

impl<'d> PinyinToneMarkParser<'d> {
    /// Parser segmenting against `dictionary`
    pub fn new(dictionary: &'d dyn SyllableDictionary) -> Self {
        PinyinToneMarkParser { dictionary }
    }
}

impl Default for PinyinToneMarkParser<'static> {
    fn default() -> Self {
        PinyinToneMarkParser::new(&STANDARD)
    }
}

/// A tone mark lifted off the letter starting at byte `anchor` of the stripped text
#[derive(Debug, PartialEq)]
struct ToneMark {
    tone: Tone,
    anchor: usize,
}

/// Remove tone marks from `text`, remembering which letter carried each
///
/// The stripped text is in composed form: `ü` and `ê` keep their diacritic.
fn strip_tone_marks(text: &str) -> (String, Vec<ToneMark>) {
    let mut stripped = String::with_capacity(text.len());
    let mut marks = Vec::new();
    // Start of the last letter that can still take a combining mark
    let mut last = None;

    for c in text.nfd() {
        if let Ok(tone) = Tone::from_pinyin_mark(c) {
            match last {
                Some(anchor) => marks.push(ToneMark { tone, anchor }),
                None => debug!("ignoring tone {tone} mark with no letter before it"),
            }
            continue;
        }

        if let Some(anchor) = last {
            let composed = stripped[anchor..]
                .chars()
                .next()
                .and_then(|base| compose(base, c));
            if let Some(composed) = composed {
                stripped.truncate(anchor);
                stripped.push(composed);
                continue;
            }
        }

        last = (!APOSTROPHES.contains(&c)).then_some(stripped.len());
        stripped.push(c);
    }

    (stripped, marks)
}

impl Parser for PinyinToneMarkParser<'_> {
    fn parse(&self, text: &str) -> Result<Vec<Syllable>> {
        let (stripped, marks) = strip_tone_marks(text);
        let mut marks = marks.iter().peekable();
        let mut syllables = Vec::new();

        let mut start = 0;
        let mut separator = None;
        loop {
            let end = stripped[start..]
                .find(APOSTROPHES)
                .map_or(stripped.len(), |i| start + i);
            let chunk = &stripped[start..end];

            // An apostrophe needs a syllable on both sides
            if chunk.is_empty() && !stripped.is_empty() {
                return Err(unsegmentable(&stripped, separator.unwrap_or(end)));
            }

            let spans = segment(chunk, self.dictionary.pinyin_syllables()).map_err(|err| {
                match err {
                    Error::UnsegmentableInput { offset, .. } => {
                        let pos = chunk.char_indices().nth(offset).map_or(chunk.len(), |(i, _)| i);
                        unsegmentable(&stripped, start + pos)
                    }
                    other => other,
                }
            })?;

            let mut pos = start;
            for span in spans {
                let range = pos..pos + span.len();
                pos = range.end;

                let mut tone = None;
                while let Some(mark) = marks.next_if(|mark| mark.anchor < range.end) {
                    if tone.is_some() || mark.anchor < range.start {
                        debug!("ignoring extra tone {} mark in '{span}'", mark.tone);
                        continue;
                    }
                    tone = Some(mark.tone);
                }

                syllables.push(Syllable::from_parts(span, tone.unwrap_or(Tone::Neutral)));
            }

            let Some(apostrophe) = stripped[end..].chars().next() else {
                break;
            };
            separator = Some(end);
            start = end + apostrophe.len_utf8();
        }

        debug!("read {} syllables from '{text}'", syllables.len());
        Ok(syllables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Vec<(String, u8)>> {
        let syllables = PinyinToneMarkParser::default().parse(s)?;
        Ok(syllables
            .into_iter()
            .map(|s| (s.base().to_owned(), s.tone().rank()))
            .collect())
    }

    macro_rules! p(
        ($($b:expr, $t:expr);*) => (Ok(vec![$(($b.to_owned(), $t)),*]));
    );

    #[test]
    fn strip_test() {
        let (stripped, marks) = strip_tone_marks("nǚér");
        assert_eq!(stripped, "nüer");
        assert_eq!(
            marks,
            vec![
                ToneMark {
                    tone: Tone::Third,
                    anchor: 1
                },
                ToneMark {
                    tone: Tone::Second,
                    anchor: 3
                },
            ]
        );

        let (stripped, marks) = strip_tone_marks("xī'ān");
        assert_eq!(stripped, "xi'an");
        assert_eq!(marks.len(), 2);
        assert_eq!(marks[1].anchor, 3);
    }

    #[test]
    fn parse_test() {
        assert_eq!(parse("yāo"), p!("yao", 1));
        assert_eq!(parse("yao"), p!("yao", 5));
        assert_eq!(parse("jièshào"), p!("jie", 4; "shao", 4));
        assert_eq!(parse("tāmen"), p!("ta", 1; "men", 5));
        assert_eq!(parse("zěnmeyàng"), p!("zen", 3; "me", 5; "yang", 4));
        assert_eq!(parse("nǐhǎo"), p!("ni", 3; "hao", 3));
        assert_eq!(parse("lǜ"), p!("lü", 4));
        assert_eq!(parse("lüè"), p!("lüe", 4));
        assert_eq!(parse("ér"), p!("er", 2));
        assert_eq!(parse("ế"), p!("ê", 2));
        assert_eq!(parse(""), p!());
    }

    #[test]
    fn decomposed_input_test() {
        assert_eq!(parse("lu\u{0308}\u{030C}"), p!("lü", 3));
        assert_eq!(parse("ta\u{0304}men"), p!("ta", 1; "men", 5));
        // Non-canonical order of diaeresis and tone mark
        assert_eq!(parse("nu\u{030C}\u{0308}"), p!("nü", 3));
    }

    #[test]
    fn apostrophe_test() {
        assert_eq!(parse("xīān"), p!("xian", 1));
        assert_eq!(parse("xī'ān"), p!("xi", 1; "an", 1));
        assert_eq!(parse("Xī’ān".to_lowercase().as_str()), p!("xi", 1; "an", 1));
        assert_eq!(parse("fāng'àn"), p!("fang", 1; "an", 4));
    }

    #[test]
    fn stray_mark_test() {
        // A leading mark has no letter to sit on
        assert_eq!(parse("\u{0301}ma"), p!("ma", 5));
        // Only the first mark of a syllable counts
        assert_eq!(parse("hǎó"), p!("hao", 3));
    }

    #[test]
    fn parse_failure_test() {
        assert_eq!(
            parse("xxx"),
            Err(Error::UnsegmentableInput {
                offset: 0,
                residual: "xxx".to_owned()
            })
        );
        assert_eq!(
            parse("nǐ hǎo"),
            Err(Error::UnsegmentableInput {
                offset: 2,
                residual: " hao".to_owned()
            })
        );
        assert_eq!(
            parse("xī'qx"),
            Err(Error::UnsegmentableInput {
                offset: 3,
                residual: "qx".to_owned()
            })
        );
        assert_eq!(
            parse("'ān"),
            Err(Error::UnsegmentableInput {
                offset: 0,
                residual: "'an".to_owned()
            })
        );
        assert_eq!(
            parse("xī'"),
            Err(Error::UnsegmentableInput {
                offset: 2,
                residual: "'".to_owned()
            })
        );
        assert_eq!(
            parse("mǎ5"),
            Err(Error::UnsegmentableInput {
                offset: 2,
                residual: "5".to_owned()
            })
        );
    }
}
