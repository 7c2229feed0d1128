//! Single-request indexing pipeline

use pageindex_core::{Index, IndexError, IndexOptions, IndexRequest};
use pageindex_html::{extract, Extraction};
use pageindex_text::{count_words_parallel, rank, word_count_indexed, word_indices};
use tracing::debug;

/// Turns one request into one result. Implementations must not keep state
/// between calls; the pool shares one instance across all workers.
pub trait DocumentIndexer: Send + Sync + 'static {
    fn index(&self, request: &IndexRequest) -> Result<Index, IndexError>;
}

/// The standard pipeline: decode, extract, count, rank
#[derive(Debug, Clone, Copy, Default)]
pub struct PageIndexer {
    options: IndexOptions,
}

impl PageIndexer {
    pub fn new(options: IndexOptions) -> Self {
        Self { options }
    }
}

impl DocumentIndexer for PageIndexer {
    fn index(&self, request: &IndexRequest) -> Result<Index, IndexError> {
        index_document(request, &self.options)
    }
}

/// Index one document.
///
/// Only undecodable input fails; malformed markup and bad links are recovered
/// from. Texts at or above `parallel_threshold_bytes` are counted in parallel
/// chunks, which yields exactly the single-pass result.
pub fn index_document(request: &IndexRequest, options: &IndexOptions) -> Result<Index, IndexError> {
    let html = std::str::from_utf8(&request.body).map_err(|err| IndexError::Undecodable {
        valid_up_to: err.valid_up_to(),
    })?;

    let Extraction { text, links } = extract(&request.base_url, html);

    let table = if text.len() >= options.parallel_threshold_bytes {
        count_words_parallel(&text, options.chunk_bytes)
    } else {
        word_count_indexed(word_indices(&text))
    };
    let ranked = rank(&table, options.word_limit);

    debug!(
        text_bytes = text.len(),
        distinct_words = table.len(),
        links = links.len(),
        "document indexed"
    );

    Ok(Index::new(links, ranked.into_vec()))
}
