//! Tone ranks and their pinyin and zhuyin encodings.

use crate::error::{Error, Result};

// Combining diacritics carried by the main vowel in pinyin
const MACRON: char = '\u{0304}';
const ACUTE: char = '\u{0301}';
const CARON: char = '\u{030C}';
const GRAVE: char = '\u{0300}';

static PINYIN_TONES: [(char, Tone); 4] = [
    (MACRON, Tone::First),
    (ACUTE, Tone::Second),
    (CARON, Tone::Third),
    (GRAVE, Tone::Fourth),
];

static ZHUYIN_TONES: [(char, Tone); 4] = [
    ('ˊ', Tone::Second),
    ('ˇ', Tone::Third),
    ('ˋ', Tone::Fourth),
    ('˙', Tone::Neutral),
];

/// One of the four Mandarin tones or the neutral tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tone {
    /// High level, `ā`
    First = 1,
    /// Rising, `á`
    Second = 2,
    /// Dipping, `ǎ`
    Third = 3,
    /// Falling, `à`
    Fourth = 4,
    /// Neutral tone, unmarked in pinyin and numbered 5
    Neutral = 5,
}

/// Where a zhuyin tone mark is written relative to its syllable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkPosition {
    /// Written ahead of the syllable (`˙ㄇㄚ`)
    Before,
    /// Written after the syllable (`ㄇㄚˇ`)
    After,
}

/// A zhuyin tone mark together with its position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BopomofoMark {
    /// The spacing modifier letter itself
    pub symbol: char,
    /// Whether it precedes or follows the syllable
    pub position: MarkPosition,
}

impl Tone {
    /// All tones, in rank order
    pub const ALL: [Tone; 5] = [
        Tone::First,
        Tone::Second,
        Tone::Third,
        Tone::Fourth,
        Tone::Neutral,
    ];

    /// Numeric rank, 1 to 5
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Read a tone digit such as the `3` of `ma3`
    ///
    /// Returns `InvalidTone` for a digit outside `1..=5` and
    /// `MalformedSyllableToken` for a character that is not a digit at all,
    /// which in numbered pinyin means the tone is missing.
    ///
    /// # Examples
    /// ```
    /// # use pinyin_zhuyin::*;
    /// assert_eq!(Tone::from_digit('3'), Ok(Tone::Third));
    /// assert_eq!(Tone::from_digit('0'), Err(Error::InvalidTone(0)));
    /// assert_eq!(Tone::from_digit('a'), Err(Error::MalformedSyllableToken("a".to_owned())));
    /// ```
    pub fn from_digit(c: char) -> Result<Tone> {
        let digit = c
            .to_digit(10)
            .ok_or_else(|| Error::MalformedSyllableToken(c.to_string()))?;
        u8::try_from(digit)
            .map_err(|_| Error::InvalidTone(digit))
            .and_then(Tone::try_from)
    }

    /// Tone carried by a pinyin combining diacritic
    pub fn from_pinyin_mark(mark: char) -> Result<Tone> {
        PINYIN_TONES
            .iter()
            .find(|(c, _)| *c == mark)
            .map(|(_, tone)| *tone)
            .ok_or(Error::InvalidToneMark(mark))
    }

    /// Tone carried by a zhuyin tone mark
    pub fn from_bopomofo_mark(mark: char) -> Result<Tone> {
        ZHUYIN_TONES
            .iter()
            .find(|(c, _)| *c == mark)
            .map(|(_, tone)| *tone)
            .ok_or(Error::InvalidToneMark(mark))
    }

    /// Combining diacritic for this tone; the neutral tone has none
    pub fn pinyin_mark(self) -> Option<char> {
        PINYIN_TONES
            .iter()
            .find(|(_, tone)| *tone == self)
            .map(|(c, _)| *c)
    }

    /// Zhuyin mark for this tone; the first tone has none
    pub fn bopomofo_mark(self) -> Option<BopomofoMark> {
        let position = match self {
            Tone::First => return None,
            Tone::Neutral => MarkPosition::Before,
            _ => MarkPosition::After,
        };
        ZHUYIN_TONES
            .iter()
            .find(|(_, tone)| *tone == self)
            .map(|(symbol, _)| BopomofoMark {
                symbol: *symbol,
                position,
            })
    }
}

impl TryFrom<u8> for Tone {
    type Error = Error;

    fn try_from(rank: u8) -> Result<Tone> {
        match rank {
            1 => Ok(Tone::First),
            2 => Ok(Tone::Second),
            3 => Ok(Tone::Third),
            4 => Ok(Tone::Fourth),
            5 => Ok(Tone::Neutral),
            _ => Err(Error::InvalidTone(u32::from(rank))),
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rank())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_test() {
        for (i, tone) in Tone::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(tone.rank()), i + 1);
            assert_eq!(Tone::try_from(tone.rank()), Ok(tone));
        }
        assert_eq!(Tone::try_from(0), Err(Error::InvalidTone(0)));
        assert_eq!(Tone::try_from(6), Err(Error::InvalidTone(6)));
        assert_eq!(Tone::from_digit('9'), Err(Error::InvalidTone(9)));
        assert!(matches!(
            Tone::from_digit('a'),
            Err(Error::MalformedSyllableToken(_))
        ));
    }

    #[test]
    fn pinyin_mark_test() {
        assert_eq!(Tone::from_pinyin_mark('\u{0304}'), Ok(Tone::First));
        assert_eq!(Tone::from_pinyin_mark('\u{030C}'), Ok(Tone::Third));
        assert_eq!(Tone::Fourth.pinyin_mark(), Some('\u{0300}'));
        assert_eq!(Tone::Neutral.pinyin_mark(), None);
        // Diaeresis belongs to ü, not to a tone
        assert_eq!(
            Tone::from_pinyin_mark('\u{0308}'),
            Err(Error::InvalidToneMark('\u{0308}'))
        );
        // Zhuyin marks are a separate set
        assert_eq!(Tone::from_pinyin_mark('ˇ'), Err(Error::InvalidToneMark('ˇ')));
    }

    #[test]
    fn bopomofo_mark_test() {
        assert_eq!(Tone::from_bopomofo_mark('ˊ'), Ok(Tone::Second));
        assert_eq!(Tone::from_bopomofo_mark('˙'), Ok(Tone::Neutral));
        assert_eq!(
            Tone::from_bopomofo_mark('\u{030C}'),
            Err(Error::InvalidToneMark('\u{030C}'))
        );

        assert_eq!(Tone::First.bopomofo_mark(), None);
        assert_eq!(
            Tone::Third.bopomofo_mark(),
            Some(BopomofoMark {
                symbol: 'ˇ',
                position: MarkPosition::After
            })
        );
        assert_eq!(
            Tone::Neutral.bopomofo_mark(),
            Some(BopomofoMark {
                symbol: '˙',
                position: MarkPosition::Before
            })
        );
    }
}
