//! Crawl result container and statistics.

use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

use crate::entry::Entry;

/// Summary statistics for a crawl.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlStats {
    /// Listing calls attempted.
    pub listings: u64,
    /// Listing calls that failed.
    pub failed_listings: u64,
    /// File entries in the final result.
    pub files: u64,
    /// Folder entries in the final result.
    pub folders: u64,
    /// Deepest recursion level reached.
    pub max_depth: u32,
}

impl CrawlStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one listing attempt at the given depth.
    pub fn record_listing(&mut self, depth: u32, succeeded: bool) {
        self.listings += 1;
        if !succeeded {
            self.failed_listings += 1;
        }
        self.max_depth = self.max_depth.max(depth);
    }

    /// Recount files and folders from the final entry list.
    pub fn count_entries(&mut self, entries: &[Entry]) {
        self.files = entries.iter().filter(|e| e.is_file()).count() as u64;
        self.folders = entries.len() as u64 - self.files;
    }
}

/// Outcome of one full-tree enumeration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlResult {
    /// Address the crawl started from.
    pub root: String,

    /// Entries in discovery order, minus expanded folders.
    pub entries: Vec<Entry>,

    /// Message of the last error captured during the crawl.
    pub error: Option<String>,

    /// Summary statistics.
    pub stats: CrawlStats,

    /// When this crawl was performed.
    pub crawled_at: SystemTime,

    /// Duration of the crawl.
    pub crawl_duration: Duration,
}

impl CrawlResult {
    /// Create a new crawl result.
    pub fn new(
        root: impl Into<String>,
        entries: Vec<Entry>,
        error: Option<String>,
        mut stats: CrawlStats,
        crawl_duration: Duration,
    ) -> Self {
        stats.count_entries(&entries);
        Self {
            root: root.into(),
            entries,
            error,
            stats,
            crawled_at: SystemTime::now(),
            crawl_duration,
        }
    }

    /// Check if an error was captured.
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Iterate over file entries.
    pub fn files(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.is_file())
    }

    /// Sum of the numeric sizes of all file entries.
    pub fn total_size(&self) -> u64 {
        self.files().filter_map(Entry::size).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crawl_stats_record_listing() {
        let mut stats = CrawlStats::new();
        stats.record_listing(0, true);
        stats.record_listing(2, false);

        assert_eq!(stats.listings, 2);
        assert_eq!(stats.failed_listings, 1);
        assert_eq!(stats.max_depth, 2);
    }

    #[test]
    fn test_crawl_result_counts() {
        let entries = vec![
            Entry::new_file("ftp://host/a.txt", None, "10"),
            Entry::new_folder("ftp://host/empty", None),
            Entry::new_file("ftp://host/b.txt", None, "32"),
        ];
        let result = CrawlResult::new(
            "ftp://host/",
            entries,
            None,
            CrawlStats::new(),
            Duration::ZERO,
        );

        assert_eq!(result.stats.files, 2);
        assert_eq!(result.stats.folders, 1);
        assert_eq!(result.total_size(), 42);
        assert!(!result.has_error());
    }
}
