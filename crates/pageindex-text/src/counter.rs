//! Word frequency tables

use std::collections::HashMap;

/// Occurrence data for one token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenStat {
    /// Occurrences, always >= 1
    pub count: u64,
    /// Position of the first occurrence; the ranking tie-break key
    pub first_seen: usize,
}

/// Unordered token -> occurrence mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: HashMap<String, TokenStat>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Build a table from precomputed counts. First-seen order follows the
    /// iteration order; zero counts are skipped and repeated words add up.
    pub fn from_counts<'a, I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, u64)>,
    {
        let mut table = Self::new();
        for (position, (word, count)) in counts.into_iter().enumerate() {
            if count == 0 {
                continue;
            }
            table.add(
                word,
                TokenStat {
                    count,
                    first_seen: position,
                },
            );
        }
        table
    }

    /// Count one occurrence of `word` seen at `position`
    pub fn record(&mut self, position: usize, word: &str) {
        self.add(
            word,
            TokenStat {
                count: 1,
                first_seen: position,
            },
        );
    }

    pub(crate) fn add(&mut self, word: &str, stat: TokenStat) {
        if let Some(existing) = self.entries.get_mut(word) {
            existing.count += stat.count;
            existing.first_seen = existing.first_seen.min(stat.first_seen);
        } else {
            self.entries.insert(word.to_string(), stat);
        }
    }

    /// Merge `other` into this table, consuming it
    pub fn absorb(&mut self, mut other: FrequencyTable) {
        if other.entries.len() > self.entries.len() {
            std::mem::swap(&mut self.entries, &mut other.entries);
        }
        for (word, stat) in other.entries {
            self.entries
                .entry(word)
                .and_modify(|existing| {
                    existing.count += stat.count;
                    existing.first_seen = existing.first_seen.min(stat.first_seen);
                })
                .or_insert(stat);
        }
    }

    pub fn get(&self, word: &str) -> Option<&TokenStat> {
        self.entries.get(word)
    }

    /// Occurrences of `word`, 0 if absent
    pub fn count_of(&self, word: &str) -> u64 {
        self.entries.get(word).map(|stat| stat.count).unwrap_or(0)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.entries.values().map(|stat| stat.count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenStat)> + '_ {
        self.entries.iter().map(|(word, stat)| (word.as_str(), stat))
    }
}

/// Count tokens, using each token's ordinal as its position
pub fn word_count<'a, I>(tokens: I) -> FrequencyTable
where
    I: IntoIterator<Item = &'a str>,
{
    word_count_indexed(tokens.into_iter().enumerate())
}

/// Count `(position, token)` pairs, e.g. from [`crate::word_indices`]
pub fn word_count_indexed<'a, I>(tokens: I) -> FrequencyTable
where
    I: IntoIterator<Item = (usize, &'a str)>,
{
    let mut table = FrequencyTable::new();
    for (position, word) in tokens {
        table.record(position, word);
    }
    table
}
