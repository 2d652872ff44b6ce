//! The notation-neutral syllable passed from parsers to transformers.

use crate::dictionary::SyllableDictionary;
use crate::error::{Error, Result};
use crate::tone::Tone;

/// A bare pinyin syllable with its tone
///
/// # Example
/// ```
/// # use pinyin_zhuyin::*;
/// let syllable = Syllable::new("lü", Tone::Third, &STANDARD).unwrap();
/// assert_eq!(syllable.base(), "lü");
/// assert_eq!(syllable.tone(), Tone::Third);
///
/// assert_eq!(
///     Syllable::new("lv", Tone::Third, &STANDARD),
///     Err(Error::UnknownSyllable("lv".to_owned()))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Syllable {
    base: String,
    tone: Tone,
}

impl Syllable {
    /// Build a syllable, checking `base` against `dictionary`
    pub fn new<S>(base: S, tone: Tone, dictionary: &dyn SyllableDictionary) -> Result<Syllable>
    where
        S: Into<String>,
    {
        let base = base.into();
        if !dictionary.contains(&base) {
            return Err(Error::UnknownSyllable(base));
        }
        Ok(Syllable { base, tone })
    }

    /// Caller has already matched `base` against a dictionary
    pub(crate) fn from_parts<S>(base: S, tone: Tone) -> Syllable
    where
        S: Into<String>,
    {
        Syllable {
            base: base.into(),
            tone,
        }
    }

    /// Bare pinyin spelling, without tone
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Tone of the syllable
    pub fn tone(&self) -> Tone {
        self.tone
    }
}
