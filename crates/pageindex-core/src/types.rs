//! Core types for document indexing

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Identity assigned to a request when it is accepted by a pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "req-{}", self.0)
    }
}

/// A fetched document waiting to be indexed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRequest {
    /// Absolute URL the document was fetched from
    pub base_url: String,
    /// Raw document bytes, expected to be UTF-8 HTML
    pub body: Vec<u8>,
}

impl IndexRequest {
    pub fn new(base_url: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            body: html.into().into_bytes(),
        }
    }

    /// Build a request from undecoded fetch output
    pub fn from_bytes(base_url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            base_url: base_url.into(),
            body: body.into(),
        }
    }
}

/// One ranked entry: a token and how often it occurred
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Per-document indexing result
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Index {
    /// Resolved hyperlink targets in document order, duplicates kept
    pub links: Vec<Url>,
    /// Highest-count words first
    pub word_counts: Vec<WordCount>,
}

impl Index {
    pub fn new(links: Vec<Url>, word_counts: Vec<WordCount>) -> Self {
        Self { links, word_counts }
    }

    pub fn top_word(&self) -> Option<&WordCount> {
        self.word_counts.first()
    }

    pub fn count_of(&self, word: &str) -> Option<u64> {
        self.word_counts
            .iter()
            .find(|wc| wc.word == word)
            .map(|wc| wc.count)
    }
}
