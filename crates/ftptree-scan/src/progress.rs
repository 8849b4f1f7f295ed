//! Crawl progress reporting.

use std::time::Duration;

use ftptree_core::CrawlStats;

/// Progress information during a crawl.
#[derive(Debug, Clone)]
pub struct CrawlProgress {
    /// Listing calls attempted so far.
    pub listings: u64,
    /// Listing calls that failed so far.
    pub failed_listings: u64,
    /// Entries currently held in the accumulator.
    pub entries: u64,
    /// Address of the most recent listing.
    pub current_path: String,
    /// Time elapsed since the crawl started.
    pub elapsed: Duration,
}

impl CrawlProgress {
    /// Create initial progress state.
    pub fn new() -> Self {
        Self {
            listings: 0,
            failed_listings: 0,
            entries: 0,
            current_path: String::new(),
            elapsed: Duration::ZERO,
        }
    }

    /// Calculate listing rate in listings per second.
    pub fn listings_per_second(&self) -> f64 {
        if self.elapsed.as_secs_f64() > 0.0 {
            self.listings as f64 / self.elapsed.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Build a progress report from running crawl statistics.
    pub fn from_stats(
        stats: &CrawlStats,
        current_path: &str,
        entries: usize,
        elapsed: Duration,
    ) -> Self {
        Self {
            listings: stats.listings,
            failed_listings: stats.failed_listings,
            entries: entries as u64,
            current_path: current_path.to_string(),
            elapsed,
        }
    }
}

impl Default for CrawlProgress {
    fn default() -> Self {
        Self::new()
    }
}
