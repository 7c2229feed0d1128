//! Ordering a frequency table into the published word list

use crate::counter::{FrequencyTable, TokenStat};
use pageindex_core::WordCount;
use std::cmp::Ordering;

/// Words ordered by count descending, ties broken by first occurrence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedWordList(Vec<WordCount>);

impl RankedWordList {
    pub fn iter(&self) -> std::slice::Iter<'_, WordCount> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<WordCount> {
        self.0
    }
}

impl IntoIterator for RankedWordList {
    type Item = WordCount;
    type IntoIter = std::vec::IntoIter<WordCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<RankedWordList> for Vec<WordCount> {
    fn from(list: RankedWordList) -> Self {
        list.0
    }
}

fn ranking_order(a: &(&str, TokenStat), b: &(&str, TokenStat)) -> Ordering {
    b.1.count
        .cmp(&a.1.count)
        .then(a.1.first_seen.cmp(&b.1.first_seen))
        .then_with(|| a.0.cmp(b.0))
}

/// Sort `table` by `(count desc, first_seen asc)` and keep the first `limit`
pub fn rank(table: &FrequencyTable, limit: usize) -> RankedWordList {
    if limit == 0 || table.is_empty() {
        return RankedWordList::default();
    }

    let mut entries: Vec<(&str, TokenStat)> =
        table.iter().map(|(word, stat)| (word, *stat)).collect();

    entries.sort_unstable_by(ranking_order);
    entries.truncate(limit);

    RankedWordList(
        entries
            .into_iter()
            .map(|(word, stat)| WordCount::new(word, stat.count))
            .collect(),
    )
}
