//! Listing-line parsing and recursive crawling for ftptree.
//!
//! # Overview
//!
//! `ftptree-scan` turns a [`DirectoryLister`], which can only list the
//! immediate children of one remote path, into a flat inventory of the
//! whole tree below a root:
//!
//! - **Line parsing** via the [`LineParser`] trait ([`DosLineParser`] for
//!   DOS/IIS style listings)
//! - **Depth-first crawling** with a shared accumulator and a single
//!   last-error slot
//! - **Progress updates** via broadcast channels
//!
//! # Example
//!
//! ```rust
//! use ftptree_scan::{Crawler, ListError};
//!
//! let lister = |path: &str| -> Result<Vec<String>, ListError> {
//!     match path {
//!         "ftp://host/" => Ok(vec![
//!             "08-15-23  04:05PM                 1234 notes.txt".to_string(),
//!         ]),
//!         _ => Err(ListError::other("550 Not found")),
//!     }
//! };
//!
//! let mut crawler = Crawler::new(lister);
//! let result = crawler.enumerate("ftp://host");
//!
//! assert_eq!(result.entries[0].path, "ftp://host/notes.txt");
//! assert!(result.error.is_none());
//! ```

mod crawler;
mod parser;
mod progress;

pub use crawler::Crawler;
pub use parser::{DosLineParser, LineParser};
pub use progress::CrawlProgress;

// Re-export core types for convenience
pub use ftptree_core::{
    CrawlConfig, CrawlError, CrawlResult, CrawlStats, DirectoryLister, Entry, ListError,
    TraversalMode,
};
