//! Blocking FTP directory lister for ftptree.
//!
//! [`FtpLister`] implements [`DirectoryLister`](ftptree_core::DirectoryLister)
//! by opening one control connection per listing, logging in, switching to
//! passive mode and returning the raw `LIST` output line by line.
//!
//! ```rust,no_run
//! use ftptree_ftp::{ConnectionConfig, FtpLister};
//! use ftptree_scan::Crawler;
//!
//! let config = ConnectionConfig::builder()
//!     .username("alice")
//!     .password("secret")
//!     .build()
//!     .unwrap();
//!
//! let mut crawler = Crawler::new(FtpLister::new(config));
//! let result = crawler.enumerate("ftp://files.example.com/pub/");
//! println!("{} entries", result.entries.len());
//! ```

mod address;
mod config;
mod lister;
mod reply;

pub use address::{DEFAULT_PORT, FtpAddress};
pub use config::{
    ANONYMOUS_PASSWORD, ANONYMOUS_USER, ConnectionConfig, ConnectionConfigBuilder, DEFAULT_TIMEOUT,
};
pub use lister::FtpLister;
pub use reply::{Reply, parse_passive_address};
