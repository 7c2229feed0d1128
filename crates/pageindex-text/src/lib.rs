//! Tokenizing, counting and ranking words of extracted document text

mod counter;
mod merge;
mod parallel;
mod rank;
mod tokenizer;

pub use counter::{word_count, word_count_indexed, FrequencyTable, TokenStat};
pub use merge::merge_counts;
pub use parallel::{chunk_boundaries, count_words_parallel};
pub use rank::{rank, RankedWordList};
pub use tokenizer::{is_word_char, split_words, word_indices};
