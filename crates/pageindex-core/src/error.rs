//! Request-level failures

use crate::types::RequestId;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    #[error("document body is not valid UTF-8 (valid up to byte {valid_up_to})")]
    Undecodable { valid_up_to: usize },

    #[error("indexing task panicked")]
    WorkerPanicked,

    #[error("worker exited without replying")]
    WorkerLost,

    #[error("request queue is full")]
    QueueFull,

    #[error("indexer pool is closed")]
    PoolClosed,

    #[error("no reply within {0:?}")]
    TimedOut(Duration),
}

/// Failure reply for one request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{request_id}: {error}")]
pub struct IndexFailure {
    pub request_id: RequestId,
    #[source]
    pub error: IndexError,
}

impl IndexFailure {
    pub fn new(request_id: RequestId, error: IndexError) -> Self {
        Self { request_id, error }
    }
}
