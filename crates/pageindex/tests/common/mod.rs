#![allow(dead_code)]

use pageindex::{
    index_document, DocumentIndexer, Index, IndexError, IndexOptions, IndexRequest, PoolConfig,
};
use std::sync::{Arc, RwLock};
use tracing_subscriber::EnvFilter;

pub const SAMPLE_BASE: &str = "http://example.com/notes/";

pub const SAMPLE_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Functional programming notes</title>
  <style>.note { color: red }</style>
  <script>var functional = "never counted";</script>
</head>
<body>
  <h1>Functional programming</h1>
  <p>Functional programming treats computation as the evaluation of functions.
     Pure functions avoid shared state; functional code composes functions.</p>
  <ul>
    <li><a href="intro.html">Introduction</a></li>
    <li><a href="/topics/recursion">Recursion</a></li>
    <li><a href="intro.html">Introduction again</a></li>
    <li><a href="https://example.org/lambda">Lambda calculus</a></li>
    <li><a href="http://[broken">Broken link</a></li>
    <li><a>No target</a></li>
  </ul>
  <!-- functions functions functions -->
  <p>Functions, functions everywhere.</p>
</body>
</html>
"#;

/// Resolvable anchors in SAMPLE_HTML, duplicates included
pub const SAMPLE_LINK_COUNT: usize = 4;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn sample_request() -> IndexRequest {
    IndexRequest::new(SAMPLE_BASE, SAMPLE_HTML)
}

pub fn sample_config() -> PoolConfig {
    PoolConfig::new().with_max_concurrency(4).with_queue_depth(8)
}

/// Large page with many repeated words and a link per section
pub fn large_html(sections: usize) -> String {
    let mut html = String::from("<html><body>");
    for i in 0..sections {
        html.push_str(&format!(
            "<section><h2>Section {i}</h2><p>crawler index crawler word{} graph</p>\
             <a href=\"/section/{i}\">more</a></section>",
            i % 7
        ));
    }
    html.push_str("</body></html>");
    html
}

/// Indexer that blocks until the test opens the gate
pub struct GatedIndexer {
    pub gate: Arc<RwLock<()>>,
}

impl GatedIndexer {
    pub fn new() -> (Self, Arc<RwLock<()>>) {
        let gate = Arc::new(RwLock::new(()));
        (
            Self {
                gate: Arc::clone(&gate),
            },
            gate,
        )
    }
}

impl DocumentIndexer for GatedIndexer {
    fn index(&self, request: &IndexRequest) -> Result<Index, IndexError> {
        let _open = self.gate.read().unwrap();
        index_document(request, &IndexOptions::default())
    }
}
