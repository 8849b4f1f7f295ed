//! Crawl configuration types.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Default recursion limit.
pub const DEFAULT_MAX_DEPTH: u32 = 64;

/// Which folders a crawl frame expands after its listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraversalMode {
    /// Every folder currently in the accumulator, including ones appended by
    /// ancestor frames that have not been removed yet.
    #[default]
    Accumulator,
    /// Only the folders returned by this frame's own listing.
    PerLevel,
}

/// Configuration for crawl operations.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct CrawlConfig {
    /// Remote address to start from.
    pub root: String,

    /// Maximum recursion depth below the root.
    #[builder(default = "DEFAULT_MAX_DEPTH")]
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,

    /// Folder expansion strategy.
    #[builder(default)]
    #[serde(default)]
    pub traversal: TraversalMode,
}

fn default_max_depth() -> u32 {
    DEFAULT_MAX_DEPTH
}

impl CrawlConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.root {
            Some(ref root) if root.trim().is_empty() => {
                Err("Root address cannot be empty".to_string())
            }
            Some(_) => Ok(()),
            None => Err("Root address is required".to_string()),
        }
    }
}

impl CrawlConfig {
    /// Create a new crawl config builder.
    pub fn builder() -> CrawlConfigBuilder {
        CrawlConfigBuilder::default()
    }

    /// Create a simple config for crawling an address.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            max_depth: DEFAULT_MAX_DEPTH,
            traversal: TraversalMode::default(),
        }
    }
}

/// Append a trailing `/` unless the address already ends with one.
pub fn with_trailing_separator(address: &str) -> String {
    if address.ends_with('/') {
        address.to_string()
    } else {
        format!("{address}/")
    }
}
