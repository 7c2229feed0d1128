//! Worker pool servicing index requests concurrently
//!
//! Requests go through a bounded queue to a fixed number of worker tasks,
//! which caps how many documents are indexed at once. Each job runs on the
//! blocking thread pool with nothing but its own request, and its result goes
//! back over a one-shot channel owned by that request alone.

use crate::indexer::{DocumentIndexer, PageIndexer};
use pageindex_core::{Index, IndexError, IndexFailure, IndexRequest, PoolConfig, RequestId};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, oneshot, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, info_span, warn, Instrument};

type Reply = Result<Index, IndexError>;

struct Job {
    id: RequestId,
    request: IndexRequest,
    reply: oneshot::Sender<Reply>,
}

#[derive(Debug, Default)]
struct Counters {
    submitted: AtomicU64,
    completed: AtomicU64,
    failed: AtomicU64,
}

/// Snapshot of pool activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PoolStats {
    /// Requests accepted into the queue
    pub submitted: u64,
    /// Requests that produced an index
    pub completed: u64,
    /// Requests that produced a failure
    pub failed: u64,
}

impl PoolStats {
    pub fn in_flight(&self) -> u64 {
        self.submitted
            .saturating_sub(self.completed)
            .saturating_sub(self.failed)
    }
}

/// Handle for one accepted request; resolves to exactly one reply
#[derive(Debug)]
pub struct PendingIndex {
    id: RequestId,
    receiver: oneshot::Receiver<Reply>,
    timeout: Option<Duration>,
}

impl PendingIndex {
    pub fn id(&self) -> RequestId {
        self.id
    }

    /// Wait for the reply, bounded by the pool's request timeout if set.
    /// The timeout starts when `wait` is called; time spent in `submit`
    /// waiting for queue room is not counted.
    ///
    /// Giving up (or dropping the handle) does not stop the worker; it
    /// finishes the job and discards the result.
    pub async fn wait(self) -> Result<Index, IndexFailure> {
        let id = self.id;
        let received = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, self.receiver).await {
                Ok(received) => received,
                Err(_) => return Err(IndexFailure::new(id, IndexError::TimedOut(limit))),
            },
            None => self.receiver.await,
        };

        match received {
            Ok(Ok(index)) => Ok(index),
            Ok(Err(error)) => Err(IndexFailure::new(id, error)),
            Err(_) => Err(IndexFailure::new(id, IndexError::WorkerLost)),
        }
    }
}

/// Fixed-size pool of indexing workers
pub struct IndexerPool {
    sender: mpsc::Sender<Job>,
    workers: Vec<JoinHandle<()>>,
    next_id: AtomicU64,
    closed: AtomicBool,
    counters: Arc<Counters>,
    request_timeout: Option<Duration>,
}

impl IndexerPool {
    /// Start a pool running the standard pipeline. Must be called from
    /// within a Tokio runtime.
    pub fn new(config: PoolConfig) -> Self {
        let indexer = PageIndexer::new(config.options);
        Self::with_indexer(config, Arc::new(indexer))
    }

    /// Start a pool running a custom indexer
    pub fn with_indexer(config: PoolConfig, indexer: Arc<dyn DocumentIndexer>) -> Self {
        let worker_count = config.max_concurrency.max(1);
        let (sender, receiver) = mpsc::channel(config.queue_depth.max(1));
        let queue = Arc::new(Mutex::new(receiver));
        let counters = Arc::new(Counters::default());

        let workers = (0..worker_count)
            .map(|worker| {
                tokio::spawn(run_worker(
                    worker,
                    Arc::clone(&queue),
                    Arc::clone(&indexer),
                    Arc::clone(&counters),
                ))
            })
            .collect();

        info!(
            workers = worker_count,
            queue_depth = config.queue_depth,
            "indexer pool started"
        );

        Self {
            sender,
            workers,
            next_id: AtomicU64::new(1),
            closed: AtomicBool::new(false),
            counters,
            request_timeout: config.request_timeout,
        }
    }

    fn prepare(&self, request: IndexRequest) -> Result<(Job, PendingIndex), IndexFailure> {
        let id = RequestId(self.next_id.fetch_add(1, Ordering::Relaxed));
        if self.closed.load(Ordering::Acquire) {
            return Err(IndexFailure::new(id, IndexError::PoolClosed));
        }

        let (reply, receiver) = oneshot::channel();
        let pending = PendingIndex {
            id,
            receiver,
            timeout: self.request_timeout,
        };
        Ok((Job { id, request, reply }, pending))
    }

    /// Queue a request, waiting for room if the queue is full
    pub async fn submit(&self, request: IndexRequest) -> Result<PendingIndex, IndexFailure> {
        let (job, pending) = self.prepare(request)?;
        let id = pending.id;

        self.sender
            .send(job)
            .await
            .map_err(|_| IndexFailure::new(id, IndexError::PoolClosed))?;
        self.counters.submitted.fetch_add(1, Ordering::Relaxed);
        debug!(request_id = %id, "request queued");
        Ok(pending)
    }

    /// Queue a request or fail immediately if the queue is full
    pub fn try_submit(&self, request: IndexRequest) -> Result<PendingIndex, IndexFailure> {
        let (job, pending) = self.prepare(request)?;
        let id = pending.id;

        self.sender.try_send(job).map_err(|err| {
            let error = match err {
                mpsc::error::TrySendError::Full(_) => IndexError::QueueFull,
                mpsc::error::TrySendError::Closed(_) => IndexError::PoolClosed,
            };
            IndexFailure::new(id, error)
        })?;
        self.counters.submitted.fetch_add(1, Ordering::Relaxed);
        Ok(pending)
    }

    /// Submit and wait for the reply
    pub async fn index(&self, request: IndexRequest) -> Result<Index, IndexFailure> {
        self.submit(request).await?.wait().await
    }

    /// Stop accepting requests; queued ones are still processed
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            info!("indexer pool closed to new requests");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    pub fn stats(&self) -> PoolStats {
        PoolStats {
            submitted: self.counters.submitted.load(Ordering::Relaxed),
            completed: self.counters.completed.load(Ordering::Relaxed),
            failed: self.counters.failed.load(Ordering::Relaxed),
        }
    }

    /// Close the pool, drain the queue and wait for every worker to exit
    pub async fn shutdown(self) -> PoolStats {
        self.close();
        let Self {
            sender,
            workers,
            counters,
            ..
        } = self;
        drop(sender);

        for worker in workers {
            if let Err(err) = worker.await {
                warn!(%err, "indexer worker ended abnormally");
            }
        }

        let stats = PoolStats {
            submitted: counters.submitted.load(Ordering::Relaxed),
            completed: counters.completed.load(Ordering::Relaxed),
            failed: counters.failed.load(Ordering::Relaxed),
        };
        info!(
            submitted = stats.submitted,
            completed = stats.completed,
            failed = stats.failed,
            "indexer pool stopped"
        );
        stats
    }
}

async fn run_worker(
    worker: usize,
    queue: Arc<Mutex<mpsc::Receiver<Job>>>,
    indexer: Arc<dyn DocumentIndexer>,
    counters: Arc<Counters>,
) {
    loop {
        // Lock only while waiting for the next job
        let job = queue.lock().await.recv().await;
        let Some(job) = job else {
            break;
        };

        let span = info_span!("index_request", worker, request_id = %job.id);
        process(job, Arc::clone(&indexer), &counters)
            .instrument(span)
            .await;
    }
    debug!(worker, "indexer worker stopped");
}

async fn process(job: Job, indexer: Arc<dyn DocumentIndexer>, counters: &Counters) {
    let Job { request, reply, .. } = job;
    let base_url = request.base_url.clone();
    let started = Instant::now();

    let outcome = match tokio::task::spawn_blocking(move || indexer.index(&request)).await {
        Ok(outcome) => outcome,
        Err(err) if err.is_panic() => Err(IndexError::WorkerPanicked),
        Err(_) => Err(IndexError::WorkerLost),
    };

    let elapsed_ms = started.elapsed().as_millis() as u64;
    match &outcome {
        Ok(index) => {
            counters.completed.fetch_add(1, Ordering::Relaxed);
            debug!(
                %base_url,
                links = index.links.len(),
                words = index.word_counts.len(),
                elapsed_ms,
                "request completed"
            );
        }
        Err(error) => {
            counters.failed.fetch_add(1, Ordering::Relaxed);
            warn!(%base_url, %error, elapsed_ms, "request failed");
        }
    }

    if reply.send(outcome).is_err() {
        debug!("caller stopped waiting, result dropped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PanicsOn(&'static str);

    impl DocumentIndexer for PanicsOn {
        fn index(&self, request: &IndexRequest) -> Result<Index, IndexError> {
            if request.base_url == self.0 {
                panic!("indexer blew up");
            }
            Ok(Index::default())
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_index_round_trip() {
        let pool = IndexerPool::new(PoolConfig::new().with_max_concurrency(2));
        let index = pool
            .index(IndexRequest::new("http://example.com/", "<p>hi hi there</p>"))
            .await
            .unwrap();

        assert_eq!(index.count_of("hi"), Some(2));
        let stats = pool.shutdown().await;
        assert_eq!(stats.submitted, 1);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.in_flight(), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_panic_is_isolated() {
        let pool = IndexerPool::with_indexer(
            PoolConfig::new().with_max_concurrency(1),
            Arc::new(PanicsOn("http://bad/")),
        );

        let bad = pool.index(IndexRequest::new("http://bad/", "")).await;
        let failure = bad.unwrap_err();
        assert_eq!(failure.error, IndexError::WorkerPanicked);

        // The single worker survives and keeps serving
        let good = pool.index(IndexRequest::new("http://good/", "")).await;
        assert!(good.is_ok());

        let stats = pool.shutdown().await;
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.completed, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_closed_pool_rejects() {
        let pool = IndexerPool::new(PoolConfig::new().with_max_concurrency(1));
        pool.close();
        assert!(pool.is_closed());

        let failure = pool
            .submit(IndexRequest::new("http://example.com/", "x"))
            .await
            .unwrap_err();
        assert_eq!(failure.error, IndexError::PoolClosed);

        let failure = pool
            .try_submit(IndexRequest::new("http://example.com/", "x"))
            .unwrap_err();
        assert_eq!(failure.error, IndexError::PoolClosed);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_request_ids_are_unique() {
        let pool = IndexerPool::new(PoolConfig::new().with_max_concurrency(2));
        let first = pool
            .submit(IndexRequest::new("http://example.com/", "a"))
            .await
            .unwrap();
        let second = pool
            .submit(IndexRequest::new("http://example.com/", "b"))
            .await
            .unwrap();

        assert_ne!(first.id(), second.id());
        assert!(first.wait().await.is_ok());
        assert!(second.wait().await.is_ok());
    }
}
