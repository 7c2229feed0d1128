//! Chunked parallel word counting
//!
//! Large texts are cut at non-word characters so no token straddles two
//! chunks. Each chunk is counted on the rayon pool with positions shifted to
//! offsets in the full text, then the partial tables are folded together.
//! Because merging sums counts and keeps the lowest first-seen offset, the
//! result is identical to a single pass over the whole text.

use crate::counter::{word_count_indexed, FrequencyTable};
use crate::tokenizer::{is_word_char, word_indices};
use rayon::prelude::*;
use tracing::debug;

/// Cut points for `text`, starting at 0 and ending at `text.len()`
pub fn chunk_boundaries(text: &str, chunk_bytes: usize) -> Vec<usize> {
    let chunk_bytes = chunk_bytes.max(1);
    let mut cuts = vec![0];
    let mut start = 0;

    while text.len() - start > chunk_bytes {
        let mut cut = start + chunk_bytes;
        while !text.is_char_boundary(cut) {
            cut += 1;
        }

        // Cutting right before a separator never splits a token
        cut = match text[cut..].char_indices().find(|(_, c)| !is_word_char(*c)) {
            Some((offset, _)) => cut + offset,
            None => text.len(),
        };

        if cut >= text.len() {
            break;
        }
        cuts.push(cut);
        start = cut;
    }

    cuts.push(text.len());
    cuts
}

/// Count words of `text` in parallel chunks of roughly `chunk_bytes`
pub fn count_words_parallel(text: &str, chunk_bytes: usize) -> FrequencyTable {
    let cuts = chunk_boundaries(text, chunk_bytes);
    debug!(
        bytes = text.len(),
        chunks = cuts.len() - 1,
        "counting words in parallel"
    );

    cuts.par_windows(2)
        .map(|bounds| {
            let (start, end) = (bounds[0], bounds[1]);
            word_count_indexed(
                word_indices(&text[start..end]).map(|(offset, word)| (start + offset, word)),
            )
        })
        .reduce(FrequencyTable::new, |mut acc, part| {
            acc.absorb(part);
            acc
        })
}
