//! Greedy longest-match segmentation against a syllable inventory.
//!
//! Matching never backtracks: text that only splits correctly when a shorter
//! syllable is taken (`xian` read as `xi` + `an`) is read the greedy way.

use log::trace;

use crate::error::{Error, Result};

/// Longest entry of `inventory` that prefixes `text`
///
/// `inventory` must be ordered longest first.
pub(crate) fn longest_prefix<'d>(text: &str, inventory: &[&'d str]) -> Option<&'d str> {
    inventory
        .iter()
        .find(|syllable| text.starts_with(**syllable))
        .copied()
}

/// Split `text` into consecutive syllables of `inventory`
///
/// The returned slices borrow from `text` and cover it exactly.
pub(crate) fn segment<'t>(text: &'t str, inventory: &[&str]) -> Result<Vec<&'t str>> {
    let mut syllables = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        let Some(matched) = longest_prefix(rest, inventory) else {
            return Err(unsegmentable(text, pos));
        };
        trace!("matched syllable '{matched}' at byte {pos}");

        syllables.push(&rest[..matched.len()]);
        pos += matched.len();
    }

    Ok(syllables)
}

/// Error for the unmatched remainder of `text` starting at byte `pos`
pub(crate) fn unsegmentable(text: &str, pos: usize) -> Error {
    Error::UnsegmentableInput {
        offset: text[..pos].chars().count(),
        residual: text[pos..].to_owned(),
    }
}
