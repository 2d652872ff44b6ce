//! Notation selection and converter configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::converter::Converter;
use crate::error::{Error, Result};
use crate::parser::{BopomofoParser, Parser, PinyinNumberParser, PinyinToneMarkParser};
use crate::transformer::{
    BopomofoTransformer, PinyinNumberTransformer, PinyinToneMarkTransformer, Transformer,
};

/// One of the supported transcriptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notation {
    /// Pinyin with diacritics, `māma`
    PinyinToneMark,
    /// Pinyin with tone digits, `ma1ma5`
    PinyinNumber,
    /// Zhuyin, `ㄇㄚ˙ㄇㄚ`
    #[serde(alias = "zhuyin")]
    Bopomofo,
}

impl Notation {
    /// Every notation
    pub const ALL: [Notation; 3] = [
        Notation::PinyinToneMark,
        Notation::PinyinNumber,
        Notation::Bopomofo,
    ];

    /// Configuration name, as used by `FromStr` and serde
    pub fn name(self) -> &'static str {
        match self {
            Notation::PinyinToneMark => "pinyin_tone_mark",
            Notation::PinyinNumber => "pinyin_number",
            Notation::Bopomofo => "bopomofo",
        }
    }

    /// Parser reading this notation with the standard dictionary
    pub fn parser(self) -> Box<dyn Parser> {
        match self {
            Notation::PinyinToneMark => Box::new(PinyinToneMarkParser::default()),
            Notation::PinyinNumber => Box::new(PinyinNumberParser::default()),
            Notation::Bopomofo => Box::new(BopomofoParser::default()),
        }
    }

    /// Transformer writing this notation with the standard dictionary
    pub fn transformer(self) -> Box<dyn Transformer> {
        match self {
            Notation::PinyinToneMark => Box::new(PinyinToneMarkTransformer::new()),
            Notation::PinyinNumber => Box::new(PinyinNumberTransformer),
            Notation::Bopomofo => Box::new(BopomofoTransformer::default()),
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Notation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Notation> {
        match s {
            "zhuyin" => Ok(Notation::Bopomofo),
            _ => Notation::ALL
                .into_iter()
                .find(|notation| notation.name() == s)
                .ok_or_else(|| Error::UnknownNotation(s.to_owned())),
        }
    }
}

fn default_apostrophes() -> bool {
    true
}

/// A conversion pipeline described by value, loadable from a config file
///
/// # Example
/// ```
/// # use pinyin_zhuyin::*;
/// let config = ConverterConfig::new(Notation::PinyinNumber, Notation::PinyinToneMark);
/// assert_eq!(config.convert("xi1an1"), Ok("xī'ān".to_owned()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConverterConfig {
    /// Notation of the input
    pub from: Notation,
    /// Notation of the output
    pub to: Notation,
    /// Separate tone-marked syllables starting with a vowel by an apostrophe
    #[serde(default = "default_apostrophes")]
    pub apostrophes: bool,
}

impl ConverterConfig {
    /// Convert `from` into `to`, with default formatting
    pub fn new(from: Notation, to: Notation) -> Self {
        ConverterConfig {
            from,
            to,
            apostrophes: default_apostrophes(),
        }
    }

    /// Build the configured converter
    pub fn build(&self) -> Converter<Box<dyn Parser>, Box<dyn Transformer>> {
        let transformer: Box<dyn Transformer> = match self.to {
            Notation::PinyinToneMark => Box::new(
                PinyinToneMarkTransformer::new().with_apostrophes(self.apostrophes),
            ),
            notation => notation.transformer(),
        };
        Converter::new(self.from.parser(), transformer)
    }

    /// Build the converter and run it on `text`
    pub fn convert(&self, text: &str) -> Result<String> {
        self.build().convert(text)
    }
}
