//! Error types for listing and crawling operations.

use thiserror::Error;

/// Errors a directory lister can report for a single listing call.
#[derive(Debug, Error)]
pub enum ListError {
    /// Could not reach the server.
    #[error("Connection to {host} failed: {source}")]
    Connect {
        host: String,
        #[source]
        source: std::io::Error,
    },

    /// I/O failure while a listing was in progress.
    #[error("I/O error while listing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Server rejected the credentials.
    #[error("Authentication failed for {user}: {message}")]
    Authentication { user: String, message: String },

    /// Server answered a command with an unexpected reply code.
    #[error("Unexpected reply to {command}: {code} {message}")]
    UnexpectedReply {
        command: String,
        code: u16,
        message: String,
    },

    /// Address could not be understood.
    #[error("Invalid address {address}: {reason}")]
    InvalidAddress { address: String, reason: String },

    /// Other error.
    #[error("{message}")]
    Other { message: String },
}

impl ListError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an error from a free-form message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

/// Errors captured in a crawl's error slot.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// A listing call failed.
    #[error(transparent)]
    List(#[from] ListError),

    /// Recursion went deeper than the configured limit.
    #[error("Depth limit of {limit} exceeded at {path}")]
    DepthLimitExceeded { path: String, limit: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_error_io() {
        let err = ListError::io(
            "ftp://host/dir/",
            std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset"),
        );
        assert!(matches!(err, ListError::Io { .. }));
        assert!(err.to_string().contains("ftp://host/dir/"));
    }

    #[test]
    fn test_crawl_error_is_transparent_over_list_error() {
        let err: CrawlError = ListError::other("550 Access denied").into();
        assert_eq!(err.to_string(), "550 Access denied");
    }
}
