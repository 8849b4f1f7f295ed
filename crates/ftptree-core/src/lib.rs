//! Core types and traits for ftptree.
//!
//! This crate provides the fundamental data structures shared by the
//! parser, the crawler and the listers: entries, crawl results,
//! configuration, errors and the directory listing capability.

mod config;
mod entry;
mod error;
mod lister;
mod result;

pub use config::{
    CrawlConfig, CrawlConfigBuilder, DEFAULT_MAX_DEPTH, TraversalMode, with_trailing_separator,
};
pub use entry::{Entry, FOLDER_SIZE};
pub use error::{CrawlError, ListError};
pub use lister::DirectoryLister;
pub use result::{CrawlResult, CrawlStats};
