//! Concurrent document indexing: links plus a ranked word list per page

mod indexer;
mod pool;

pub use indexer::{index_document, DocumentIndexer, PageIndexer};
pub use pool::{IndexerPool, PendingIndex, PoolStats};

pub use pageindex_core::{
    Index, IndexError, IndexFailure, IndexOptions, IndexRequest, PoolConfig, RequestId,
    WordCount, DEFAULT_WORD_LIMIT,
};
