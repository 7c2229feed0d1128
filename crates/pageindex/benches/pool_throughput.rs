use criterion::{criterion_group, criterion_main, Criterion};
use pageindex::{IndexRequest, IndexerPool, PoolConfig};
use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::task::JoinSet;

const PAGE: &str = r#"<html><body><h1>Pool bench</h1>
<p>Many small pages indexed at once by a bounded pool of workers.</p>
<a href="/a">a</a><a href="/b">b</a></body></html>"#;

fn bench_pool_100_pages(c: &mut Criterion) {
    let runtime = Runtime::new().unwrap();
    let pool = runtime.block_on(async { Arc::new(IndexerPool::new(PoolConfig::new())) });

    c.bench_function("pool_100_pages", |b| {
        b.iter(|| {
            runtime.block_on(async {
                let mut tasks = JoinSet::new();
                for i in 0..100 {
                    let pool = Arc::clone(&pool);
                    let request = IndexRequest::new(format!("http://example.com/{i}/"), PAGE);
                    tasks.spawn(async move { pool.index(request).await });
                }
                while let Some(joined) = tasks.join_next().await {
                    joined.unwrap().unwrap();
                }
            });
        });
    });
}

criterion_group!(benches, bench_pool_100_pages);
criterion_main!(benches);
