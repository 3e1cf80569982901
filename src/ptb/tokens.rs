//! Token types for aligning treebank annotations with raw text
//!
//! The context is that we sometimes want to align PTB tokens against text
//! which is almost but not quite identical to the text the annotations
//! represent. For example, the source text might end a sentence on an
//! abbreviation ("He moved to the U.S.") where the treebank annotates an
//! extra full stop as an end-of-sentence marker. [`TweakedToken`] wraps a
//! raw token with the rendering it should be treated as during alignment,
//! plus an offset for any skipped prefix.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Straight substitutions from PTB escapes to their likely original text.
pub const PTB_TO_TEXT: &[(&str, &str)] = &[
    ("``", "\""),
    ("''", "\""),
    ("-LRB-", "("),
    ("-RRB-", ")"),
    ("-LSB-", "["),
    ("-RSB-", "]"),
    ("-LCB-", "{"),
    ("-RCB-", "}"),
];

/// Look up the likely source-text rendering of a PTB escape.
///
/// Returns the word unchanged when it is not one of the known escapes.
pub fn ptb_to_text(word: &str) -> &str {
    PTB_TO_TEXT
        .iter()
        .find(|(ptb, _)| *ptb == word)
        .map(|(_, text)| *text)
        .unwrap_or(word)
}

/// Trace and placeholder tokens that carry no surface text.
///
/// Numbered traces (`*T*-1`, `*ICH*-2`, ...; the trace name and the digits
/// are both optional), a bare `0` or `*`, and the special markers `*U*`,
/// `*?*`, `*NOT*`.
static NONWORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^((\*((T|ICH|EXP|RNR|PPA)\*)?-\d*)|0|\*|(\*(U|\?|NOT)\*))$").unwrap()
});

/// True if the text appears to be a non-textual token, for example `*T*-1`
/// for some kind of movement trace. These seem to only appear on tokens
/// tagged `-NONE-`.
pub fn is_nonword_token(text: &str) -> bool {
    NONWORD_REGEX.is_match(text)
}

/// A plain word/part-of-speech pair. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawToken {
    pub word: String,
    pub tag: String,
}

impl RawToken {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        RawToken {
            word: word.into(),
            tag: tag.into(),
        }
    }
}

impl fmt::Display for RawToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.word, self.tag)
    }
}

/// A token with word and part of speech, plus the "tweaked" rendering it
/// should be treated as when aligning with a corpus, and an offset for text
/// the alignment should skip.
///
/// Tweaks cover the small systematic mismatches between treebank tokens and
/// source text:
///
/// - "delete" a token by giving it an empty tweaked word (it then gets a
///   zero-length span)
/// - skip some of the text by supplying a prefix (this expands the tweaked
///   word and records an offset you can use to adjust the detected span)
/// - or replace the token text outright
///
/// Tweaked tokens only exist to obtain a span within the text being aligned
/// against; they can be discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TweakedToken {
    pub word: String,
    pub tag: String,
    pub tweaked_word: String,
    pub offset: usize,
}

impl TweakedToken {
    /// Wrap a word/tag pair with an optional replacement rendering and an
    /// optional skip-prefix.
    ///
    /// Without a tweak the rendering defaults to the word itself. A prefix
    /// is prepended to the rendering and its length recorded as the offset;
    /// otherwise the offset is zero.
    pub fn new(
        word: impl Into<String>,
        tag: impl Into<String>,
        tweaked_word: Option<&str>,
        prefix: Option<&str>,
    ) -> Self {
        let word = word.into();
        let mut tweak = tweaked_word.map(str::to_owned).unwrap_or_else(|| word.clone());
        let offset = match prefix {
            Some(prefix) => {
                tweak.insert_str(0, prefix);
                prefix.len()
            }
            None => 0,
        };
        TweakedToken {
            word,
            tag: tag.into(),
            tweaked_word: tweak,
            offset,
        }
    }
}

impl fmt::Display for TweakedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)?;
        if self.tweaked_word != self.word {
            write!(f, " [{}]", self.tweaked_word)?;
        }
        write!(f, "/{}", self.tag)?;
        if self.offset != 0 {
            write!(f, " ({})", self.offset)?;
        }
        Ok(())
    }
}
