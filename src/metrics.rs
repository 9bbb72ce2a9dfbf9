use serde::Serialize;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Request counters for monitoring
#[derive(Clone)]
pub struct Metrics {
    pub listings_rendered: Arc<AtomicUsize>,
    pub rows_rendered: Arc<AtomicU64>,
    pub links_built: Arc<AtomicU64>,
    pub actions_handled: Arc<AtomicUsize>,
    pub permalinks_copied: Arc<AtomicUsize>,
    pub start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            listings_rendered: Arc::new(AtomicUsize::new(0)),
            rows_rendered: Arc::new(AtomicU64::new(0)),
            links_built: Arc::new(AtomicU64::new(0)),
            actions_handled: Arc::new(AtomicUsize::new(0)),
            permalinks_copied: Arc::new(AtomicUsize::new(0)),
            start_time: Instant::now(),
        }
    }

    pub fn inc_listings_rendered(&self) {
        self.listings_rendered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_rows(&self, count: u64) {
        self.rows_rendered.fetch_add(count, Ordering::Relaxed);
    }

    pub fn add_links(&self, count: u64) {
        self.links_built.fetch_add(count, Ordering::Relaxed);
    }

    pub fn inc_actions_handled(&self) {
        self.actions_handled.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_permalinks_copied(&self) {
        self.permalinks_copied.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            listings_rendered: self.listings_rendered.load(Ordering::Relaxed),
            rows_rendered: self.rows_rendered.load(Ordering::Relaxed),
            links_built: self.links_built.load(Ordering::Relaxed),
            actions_handled: self.actions_handled.load(Ordering::Relaxed),
            permalinks_copied: self.permalinks_copied.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
pub struct MetricsSnapshot {
    pub listings_rendered: usize,
    pub rows_rendered: u64,
    pub links_built: u64,
    pub actions_handled: usize,
    pub permalinks_copied: usize,
    pub uptime_seconds: u64,
}
