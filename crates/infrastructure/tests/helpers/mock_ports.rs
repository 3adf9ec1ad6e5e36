#![allow(dead_code)]
use async_trait::async_trait;
use ferrous_recon_application::ports::{PageFetcher, QueryExecutor};
use ferrous_recon_domain::{Answer, DnsRequest, DomainError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Semaphore;

/// Echoes each request back as one answer whose data is the request name.
///
/// Names listed via `fail` produce an error, names listed via `empty` an
/// empty answer list. While `hold` is set every execution parks until
/// `release` is called.
#[derive(Clone, Default)]
pub struct MockExecutor {
    calls: Arc<AtomicUsize>,
    failing: Arc<Mutex<Vec<String>>>,
    empty: Arc<Mutex<Vec<String>>>,
    jitter_ms: u64,
    gate: Option<Arc<Semaphore>>,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_jitter(mut self, max_ms: u64) -> Self {
        self.jitter_ms = max_ms;
        self
    }

    pub fn held(mut self) -> Self {
        self.gate = Some(Arc::new(Semaphore::new(0)));
        self
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(Semaphore::MAX_PERMITS / 2);
        }
    }

    pub fn fail(&self, name: &str) {
        self.failing.lock().unwrap().push(name.to_string());
    }

    pub fn empty(&self, name: &str) {
        self.empty.lock().unwrap().push(name.to_string());
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QueryExecutor for MockExecutor {
    async fn execute(&self, request: &DnsRequest) -> Result<Vec<Answer>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            let _ = gate.acquire().await;
        }

        if self.jitter_ms > 0 {
            tokio::time::sleep(Duration::from_millis(fastrand::u64(0..=self.jitter_ms))).await;
        }

        let name = request.name.to_string();
        if self.failing.lock().unwrap().contains(&name) {
            return Err(DomainError::transport(&*request.server, "connection refused"));
        }
        if self.empty.lock().unwrap().contains(&name) {
            return Ok(Vec::new());
        }

        Ok(vec![Answer::new(name.as_str(), request.record_type, 1, name.as_str())])
    }
}

/// Serves a canned body and records every requested URL.
#[derive(Clone, Default)]
pub struct MockPageFetcher {
    body: Arc<Mutex<String>>,
    urls: Arc<Mutex<Vec<String>>>,
}

impl MockPageFetcher {
    pub fn with_body(body: &str) -> Self {
        let fetcher = Self::default();
        *fetcher.body.lock().unwrap() = body.to_string();
        fetcher
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for MockPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, DomainError> {
        self.urls.lock().unwrap().push(url.to_string());
        Ok(self.body.lock().unwrap().clone())
    }
}
