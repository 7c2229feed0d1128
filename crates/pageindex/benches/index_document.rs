use criterion::{criterion_group, criterion_main, Criterion};
use pageindex::{index_document, IndexOptions, IndexRequest};
use std::hint::black_box;

fn page(sections: usize) -> String {
    let mut html = String::from("<html><head><title>Bench page</title></head><body>");
    for i in 0..sections {
        html.push_str(&format!(
            "<div><h2>Heading {i}</h2><p>The crawler fetched page {i} and the indexer counted \
             every word on page {i}.</p><a href=\"/page/{i}\">next</a></div>",
        ));
    }
    html.push_str("</body></html>");
    html
}

fn bench_small_page(c: &mut Criterion) {
    let request = IndexRequest::new("http://example.com/", page(20));
    let options = IndexOptions::default();

    c.bench_function("index_small_page", |b| {
        b.iter(|| index_document(black_box(&request), &options).unwrap());
    });
}

fn bench_large_page_single_vs_chunked(c: &mut Criterion) {
    let request = IndexRequest::new("http://example.com/", page(20_000));
    let single = IndexOptions {
        parallel_threshold_bytes: usize::MAX,
        ..IndexOptions::default()
    };
    let chunked = IndexOptions {
        parallel_threshold_bytes: 0,
        ..IndexOptions::default()
    };

    let mut group = c.benchmark_group("index_large_page");
    group.sample_size(10);
    group.bench_function("single_pass", |b| {
        b.iter(|| index_document(black_box(&request), &single).unwrap());
    });
    group.bench_function("chunked", |b| {
        b.iter(|| index_document(black_box(&request), &chunked).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_small_page, bench_large_page_single_vs_chunked);
criterion_main!(benches);
