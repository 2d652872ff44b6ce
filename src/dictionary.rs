//! The syllable inventory shared by every parser and transformer.

use std::fmt;

// PINYIN_TO_BOPOMOFO, BOPOMOFO_TO_PINYIN, PINYIN_SYLLABLES and BOPOMOFO_SYLLABLES
include!(concat!(env!("OUT_DIR"), "/codegen.rs"));

/// Read-only lookup between bare pinyin syllables and zhuyin spellings
///
/// Both syllable lists must be ordered longest first: segmentation takes the first
/// entry that prefixes the remaining text.
pub trait SyllableDictionary: fmt::Debug + Send + Sync {
    /// Every valid bare pinyin syllable, longest first
    fn pinyin_syllables(&self) -> &[&str];

    /// Every valid zhuyin spelling (without tone marks), longest first
    fn bopomofo_syllables(&self) -> &[&str];

    /// Zhuyin spelling of a bare pinyin syllable
    fn bopomofo_for(&self, pinyin: &str) -> Option<&str>;

    /// Bare pinyin syllable of a zhuyin spelling
    fn pinyin_for(&self, bopomofo: &str) -> Option<&str>;

    /// Whether `pinyin` is a valid bare syllable
    fn contains(&self, pinyin: &str) -> bool {
        self.bopomofo_for(pinyin).is_some()
    }
}

/// The standard Mandarin inventory, compiled in from `data/syllables.txt`
///
/// # Example
/// ```
/// # use pinyin_zhuyin::*;
/// assert_eq!(StandardDictionary.bopomofo_for("zhong"), Some("ㄓㄨㄥ"));
/// assert_eq!(StandardDictionary.pinyin_for("ㄌㄩㄝ"), Some("lüe"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDictionary;

/// Shared instance used by the default parsers and transformers
pub static STANDARD: StandardDictionary = StandardDictionary;

impl SyllableDictionary for StandardDictionary {
    fn pinyin_syllables(&self) -> &[&str] {
        &PINYIN_SYLLABLES
    }

    fn bopomofo_syllables(&self) -> &[&str] {
        &BOPOMOFO_SYLLABLES
    }

    fn bopomofo_for(&self, pinyin: &str) -> Option<&str> {
        PINYIN_TO_BOPOMOFO.get(pinyin).copied()
    }

    fn pinyin_for(&self, bopomofo: &str) -> Option<&str> {
        BOPOMOFO_TO_PINYIN.get(bopomofo).copied()
    }
}
