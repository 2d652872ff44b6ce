#![forbid(unsafe_code)]
#![warn(missing_docs)]
//! Convert between tone-marked pinyin, numbered pinyin and zhuyin.
//!
//! Text is parsed into [`Syllable`]s by a [`Parser`] for its notation and
//! written back out by a [`Transformer`] for the target notation. Input may
//! hold several syllables with no separators (`zěnmeyàng`); they are split by
//! longest match against the syllable inventory.
//!
//! ```
//! # use pinyin_zhuyin::*;
//! assert_eq!(pinyin_tone_mark_to_bopomofo("zěnmeyàng"), Ok("ㄗㄣˇ˙ㄇㄜㄧㄤˋ".to_owned()));
//! assert_eq!(bopomofo_to_pinyin_number("ㄗㄣˇ˙ㄇㄜㄧㄤˋ"), Ok("zen3me5yang4".to_owned()));
//! ```

mod config;
mod converter;
mod dictionary;
mod error;
mod parser;
mod segment;
mod syllable;
mod tone;
mod transformer;

pub use config::{ConverterConfig, Notation};
pub use converter::Converter;
pub use dictionary::{StandardDictionary, SyllableDictionary, STANDARD};
pub use error::{Error, Result};
pub use parser::{BopomofoParser, Parser, PinyinNumberParser, PinyinToneMarkParser};
pub use syllable::Syllable;
pub use tone::{BopomofoMark, MarkPosition, Tone};
pub use transformer::{
    BopomofoTransformer, PinyinNumberTransformer, PinyinToneMarkTransformer, Transformer,
};

/// Convert tone-marked pinyin to zhuyin
///
/// # Example
/// ```
/// # use pinyin_zhuyin::*;
/// assert_eq!(pinyin_tone_mark_to_bopomofo("tāmen"), Ok("ㄊㄚ˙ㄇㄣ".to_owned()));
/// ```
pub fn pinyin_tone_mark_to_bopomofo(text: &str) -> Result<String> {
    Converter::new(PinyinToneMarkParser::default(), BopomofoTransformer::default()).convert(text)
}

/// Convert numbered pinyin to zhuyin
///
/// # Example
/// ```
/// # use pinyin_zhuyin::*;
/// assert_eq!(pinyin_number_to_bopomofo("ma3"), Ok("ㄇㄚˇ".to_owned()));
/// assert_eq!(pinyin_number_to_bopomofo("ma5"), Ok("˙ㄇㄚ".to_owned()));
///
/// assert_eq!(pinyin_number_to_bopomofo("ma"), Err(Error::MalformedSyllableToken("ma".to_owned())));
/// ```
pub fn pinyin_number_to_bopomofo(text: &str) -> Result<String> {
    Converter::new(PinyinNumberParser::default(), BopomofoTransformer::default()).convert(text)
}

/// Convert zhuyin to tone-marked pinyin
///
/// # Example
/// ```
/// # use pinyin_zhuyin::*;
/// assert_eq!(bopomofo_to_pinyin_tone_mark("ㄇㄚˇ"), Ok("mǎ".to_owned()));
/// ```
pub fn bopomofo_to_pinyin_tone_mark(text: &str) -> Result<String> {
    Converter::new(BopomofoParser::default(), PinyinToneMarkTransformer::new()).convert(text)
}

/// Convert zhuyin to numbered pinyin
///
/// # Example
/// ```
/// # use pinyin_zhuyin::*;
/// assert_eq!(bopomofo_to_pinyin_number("ㄇㄚˇ"), Ok("ma3".to_owned()));
/// ```
pub fn bopomofo_to_pinyin_number(text: &str) -> Result<String> {
    Converter::new(BopomofoParser::default(), PinyinNumberTransformer).convert(text)
}

/// Convert tone-marked pinyin to numbered pinyin
///
/// # Example
/// ```
/// # use pinyin_zhuyin::*;
/// assert_eq!(pinyin_tone_mark_to_pinyin_number("nǚ'ér"), Ok("nü3er2".to_owned()));
/// ```
pub fn pinyin_tone_mark_to_pinyin_number(text: &str) -> Result<String> {
    Converter::new(PinyinToneMarkParser::default(), PinyinNumberTransformer).convert(text)
}

/// Convert numbered pinyin to tone-marked pinyin
///
/// # Example
/// ```
/// # use pinyin_zhuyin::*;
/// assert_eq!(pinyin_number_to_pinyin_tone_mark("nv3er2"), Ok("nǚ'ér".to_owned()));
/// ```
pub fn pinyin_number_to_pinyin_tone_mark(text: &str) -> Result<String> {
    Converter::new(PinyinNumberParser::default(), PinyinToneMarkTransformer::new()).convert(text)
}

/// Convert `text` from one notation to another
///
/// # Example
/// ```
/// # use pinyin_zhuyin::*;
/// assert_eq!(
///     convert("ㄐㄧㄝˋㄕㄠˋ", Notation::Bopomofo, Notation::PinyinToneMark),
///     Ok("jièshào".to_owned())
/// );
/// ```
pub fn convert(text: &str, from: Notation, to: Notation) -> Result<String> {
    ConverterConfig::new(from, to).convert(text)
}
