//! Depth-first remote tree crawler.

use std::time::Instant;

use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use ftptree_core::{
    CrawlConfig, CrawlError, CrawlResult, CrawlStats, DirectoryLister, Entry, TraversalMode,
    with_trailing_separator,
};

use crate::parser::{DosLineParser, LineParser};
use crate::progress::CrawlProgress;

/// Turns a single-level directory lister into a full-tree enumeration.
///
/// Every listing is parsed into one shared accumulator. Folders are then
/// expanded depth-first and removed from the accumulator once their
/// expansion returns, so the final list holds the files found plus any
/// folders that were never expanded.
pub struct Crawler<L, P = DosLineParser> {
    lister: L,
    parser: P,
    progress_tx: broadcast::Sender<CrawlProgress>,
}

impl<L: DirectoryLister> Crawler<L> {
    /// Create a crawler using the DOS listing parser.
    pub fn new(lister: L) -> Self {
        Self::with_parser(lister, DosLineParser::new())
    }
}

impl<L: DirectoryLister, P: LineParser> Crawler<L, P> {
    /// Create a crawler with a custom line parser.
    pub fn with_parser(lister: L, parser: P) -> Self {
        let (progress_tx, _) = broadcast::channel(100);
        Self {
            lister,
            parser,
            progress_tx,
        }
    }

    /// Subscribe to crawl progress updates.
    pub fn subscribe(&self) -> broadcast::Receiver<CrawlProgress> {
        self.progress_tx.subscribe()
    }

    /// Give back the lister.
    pub fn into_lister(self) -> L {
        self.lister
    }

    /// Enumerate the tree below `root` with default settings.
    pub fn enumerate(&mut self, root: &str) -> CrawlResult {
        self.crawl(&CrawlConfig::new(root))
    }

    /// Enumerate the tree described by `config`.
    ///
    /// Listing failures never abort the crawl: the last one is reported in
    /// [`CrawlResult::error`] next to whatever entries were gathered.
    pub fn crawl(&mut self, config: &CrawlConfig) -> CrawlResult {
        let mut state = CrawlState::new();

        self.crawl_folder(&config.root, 0, config, &mut state);

        let duration = state.started.elapsed();
        let error = state.last_error.map(|e| e.to_string());
        info!(
            root = %config.root,
            entries = state.entries.len(),
            listings = state.stats.listings,
            failed = state.stats.failed_listings,
            "Crawl finished"
        );

        CrawlResult::new(
            config.root.clone(),
            state.entries,
            error,
            state.stats,
            duration,
        )
    }

    fn crawl_folder(
        &mut self,
        folder: &str,
        depth: u32,
        config: &CrawlConfig,
        state: &mut CrawlState,
    ) {
        let address = with_trailing_separator(folder);

        if depth > config.max_depth {
            state.capture(CrawlError::DepthLimitExceeded {
                path: address,
                limit: config.max_depth,
            });
            return;
        }

        debug!(path = %address, depth, "Listing folder");
        let lines = match self.lister.list(&address) {
            Ok(lines) => lines,
            Err(err) => {
                state.stats.record_listing(depth, false);
                self.report(&address, state);
                state.capture(err.into());
                return;
            }
        };
        state.stats.record_listing(depth, true);

        let level_start = state.entries.len();
        state
            .entries
            .extend(lines.iter().map(|line| self.parser.parse(&address, line)));
        self.report(&address, state);

        let pending: Vec<Entry> = match config.traversal {
            TraversalMode::Accumulator => state.folders_from(0),
            TraversalMode::PerLevel => state.folders_from(level_start),
        };

        for folder in pending {
            self.crawl_folder(&folder.path, depth + 1, config, state);
            state.remove(&folder);
        }
    }

    fn report(&self, address: &str, state: &CrawlState) {
        // Nobody listening is fine.
        let _ = self.progress_tx.send(CrawlProgress::from_stats(
            &state.stats,
            address,
            state.entries.len(),
            state.started.elapsed(),
        ));
    }
}

/// Per-crawl accumulator and error slot shared by every recursion frame.
struct CrawlState {
    entries: Vec<Entry>,
    last_error: Option<CrawlError>,
    stats: CrawlStats,
    started: Instant,
}

impl CrawlState {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            last_error: None,
            stats: CrawlStats::new(),
            started: Instant::now(),
        }
    }

    /// Snapshot of the folder entries at or after `start`.
    fn folders_from(&self, start: usize) -> Vec<Entry> {
        self.entries[start..]
            .iter()
            .filter(|e| e.is_folder)
            .cloned()
            .collect()
    }

    /// Remove the first entry equal to `entry`, if any is left.
    fn remove(&mut self, entry: &Entry) {
        if let Some(index) = self.entries.iter().position(|e| e == entry) {
            self.entries.remove(index);
        }
    }

    /// Store `err`, replacing any earlier one.
    fn capture(&mut self, err: CrawlError) {
        warn!(error = %err, "Listing failed");
        self.last_error = Some(err);
    }
}
