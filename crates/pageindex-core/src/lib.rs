//! Shared request, result and configuration types for document indexing

mod config;
mod error;
mod types;

pub use config::{IndexOptions, PoolConfig, DEFAULT_WORD_LIMIT};
pub use error::{IndexError, IndexFailure};
pub use types::{Index, IndexRequest, RequestId, WordCount};
