//! Composition of one parser with one transformer.

use log::debug;

use crate::error::Result;
use crate::parser::Parser;
use crate::transformer::Transformer;

/// Converts text by parsing it into syllables and formatting them again
///
/// # Example
/// ```
/// # use pinyin_zhuyin::*;
/// let converter = Converter::new(BopomofoParser::default(), PinyinNumberTransformer);
/// assert_eq!(converter.convert("ㄊㄚ˙ㄇㄣ"), Ok("ta1men5".to_owned()));
/// ```
#[derive(Debug, Clone)]
pub struct Converter<P, T> {
    parser: P,
    transformer: T,
}

impl<P, T> Converter<P, T>
where
    P: Parser,
    T: Transformer,
{
    /// Pair `parser` with `transformer`
    pub fn new(parser: P, transformer: T) -> Self {
        Converter {
            parser,
            transformer,
        }
    }

    /// Convert `text`; nothing is formatted unless every syllable parses
    pub fn convert(&self, text: &str) -> Result<String> {
        let syllables = self.parser.parse(text)?;
        debug!("converting {} syllables", syllables.len());
        self.transformer.transform(&syllables)
    }
}
