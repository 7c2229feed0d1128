//! Word tokenizer
//!
//! A token is a maximal run of Unicode letters (`L`) and digits (`N`).
//! Everything else separates tokens and is discarded. Case is preserved.

use regex::Regex;
use std::sync::OnceLock;

static TOKENIZE_RE: OnceLock<Regex> = OnceLock::new();
static WORD_CHAR_RE: OnceLock<Regex> = OnceLock::new();

fn tokenize_re() -> &'static Regex {
    TOKENIZE_RE.get_or_init(|| Regex::new(r"[\p{L}\p{N}]+").expect("valid token pattern"))
}

fn word_char_re() -> &'static Regex {
    WORD_CHAR_RE.get_or_init(|| Regex::new(r"^[\p{L}\p{N}]$").expect("valid word char pattern"))
}

/// Lazily split `text` into word tokens
pub fn split_words(text: &str) -> impl Iterator<Item = &str> + '_ {
    tokenize_re().find_iter(text).map(|m| m.as_str())
}

/// Like [`split_words`], paired with each token's byte offset into `text`
pub fn word_indices(text: &str) -> impl Iterator<Item = (usize, &str)> + '_ {
    tokenize_re().find_iter(text).map(|m| (m.start(), m.as_str()))
}

/// Whether `c` can appear inside a token
pub fn is_word_char(c: char) -> bool {
    let mut buf = [0u8; 4];
    word_char_re().is_match(c.encode_utf8(&mut buf))
}
