use serde::Serialize;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Request counters for monitoring
#[derive(Clone)]
pub struct Metrics {
    pub listings_served: Arc<AtomicUsize>,
    pub listing_failures: Arc<AtomicUsize>,
    pub files_listed: Arc<AtomicU64>,
    pub pages_rendered: Arc<AtomicUsize>,
    pub mobile_redirects: Arc<AtomicUsize>,
    pub desktop_redirects: Arc<AtomicUsize>,
    pub start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            listings_served: Arc::new(AtomicUsize::new(0)),
            listing_failures: Arc::new(AtomicUsize::new(0)),
            files_listed: Arc::new(AtomicU64::new(0)),
            pages_rendered: Arc::new(AtomicUsize::new(0)),
            mobile_redirects: Arc::new(AtomicUsize::new(0)),
            desktop_redirects: Arc::new(AtomicUsize::new(0)),
            start_time: Instant::now(),
        }
    }

    pub fn inc_listings_served(&self) {
        self.listings_served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_listing_failures(&self) {
        self.listing_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_files(&self, count: u64) {
        self.files_listed.fetch_add(count, Ordering::Relaxed);
    }

    pub fn inc_pages_rendered(&self) {
        self.pages_rendered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_mobile_redirects(&self) {
        self.mobile_redirects.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_desktop_redirects(&self) {
        self.desktop_redirects.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            listings_served: self.listings_served.load(Ordering::Relaxed),
            listing_failures: self.listing_failures.load(Ordering::Relaxed),
            files_listed: self.files_listed.load(Ordering::Relaxed),
            pages_rendered: self.pages_rendered.load(Ordering::Relaxed),
            mobile_redirects: self.mobile_redirects.load(Ordering::Relaxed),
            desktop_redirects: self.desktop_redirects.load(Ordering::Relaxed),
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
    pub listings_served: usize,
    pub listing_failures: usize,
    pub files_listed: u64,
    pub pages_rendered: usize,
    pub mobile_redirects: usize,
    pub desktop_redirects: usize,
    pub uptime_seconds: u64,
}
