//! Configuration for the indexing pool

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Number of ranked words kept per document
pub const DEFAULT_WORD_LIMIT: usize = 50;

const DEFAULT_QUEUE_DEPTH: usize = 64;
const DEFAULT_PARALLEL_THRESHOLD: usize = 256 * 1024;
const DEFAULT_CHUNK_BYTES: usize = 64 * 1024;

/// Per-request pipeline settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexOptions {
    /// Max entries in the ranked word list
    pub word_limit: usize,

    /// Extracted text at or above this size (bytes) is counted in parallel chunks
    pub parallel_threshold_bytes: usize,

    /// Target chunk size (bytes) for parallel counting
    pub chunk_bytes: usize,
}

impl IndexOptions {
    pub fn new() -> Self {
        Self {
            word_limit: DEFAULT_WORD_LIMIT,
            parallel_threshold_bytes: DEFAULT_PARALLEL_THRESHOLD,
            chunk_bytes: DEFAULT_CHUNK_BYTES,
        }
    }
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Pool configuration, supplied by whoever owns the pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Documents indexed at the same time
    pub max_concurrency: usize,

    /// Accepted requests waiting for a worker
    pub queue_depth: usize,

    /// How long `PendingIndex::wait` waits before giving up (None = forever)
    pub request_timeout: Option<Duration>,

    /// Pipeline settings applied to every request
    pub options: IndexOptions,
}

impl PoolConfig {
    pub fn new() -> Self {
        let max_concurrency = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4);

        Self {
            max_concurrency,
            queue_depth: DEFAULT_QUEUE_DEPTH,
            request_timeout: None,
            options: IndexOptions::new(),
        }
    }

    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    pub fn with_queue_depth(mut self, queue_depth: usize) -> Self {
        self.queue_depth = queue_depth.max(1);
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn with_word_limit(mut self, word_limit: usize) -> Self {
        self.options.word_limit = word_limit;
        self
    }

    /// Set the parallel threshold and chunk size together
    pub fn with_chunking(mut self, threshold_bytes: usize, chunk_bytes: usize) -> Self {
        self.options.parallel_threshold_bytes = threshold_bytes;
        self.options.chunk_bytes = chunk_bytes.max(1);
        self
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new()
    }
}
